//! Service-instance records: one clinic visit plus its nested grooming,
//! preventive-care, and surgery entries. Surgery and preventive care embed a
//! [`VetSnapshot`] of the attending veterinarian.

use serde::{Deserialize, Serialize};

use crate::types::vet::VetSnapshot;

/// A full clinic visit as returned by `get_specific_service_instance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceInstance {
    pub service_instance_id: String,
    pub pet_id: String,
    pub service_date: String,
    pub service_type: Vec<String>,
    pub service_reason: String,
    pub general_diagnosis: String,
    pub requires_followup: bool,
    pub followup_date: Option<String>,
    pub grooming: Option<Vec<Grooming>>,
    pub preventive_care: Option<Vec<PreventiveCare>>,
    pub surgery: Option<Vec<Surgery>>,
}

/// Per-visit summary row returned by `get_pet_histories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceHistory {
    pub service_instance_id: String,
    pub service_date: String,
    pub service_type: Vec<String>,
    pub service_reason: String,
    pub general_diagnosis: String,
    pub requires_followup: bool,
    pub followup_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grooming {
    pub grooming_id: i32,
    pub grooming_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreventiveCare {
    pub preventive_care_id: i32,
    pub treatment: String,
    pub vet: VetSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Surgery {
    pub surgery_id: i32,
    pub surgery_name: String,
    pub veterinarian_diagnosis: Option<String>,
    pub anesthesia_used: Option<String>,
    pub complications: Option<String>,
    pub outcome: Option<String>,
    pub vet: VetSnapshot,
}

/// Payload for recording a new clinic visit. Grooming and preventive-care
/// entries ride along as bare type/treatment lists; a surgery rides along as
/// a full [`AddSurgery`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddServiceInstance {
    pub pet_id: String,
    pub service_date: String,
    pub service_type: Vec<String>,
    pub service_reason: String,
    pub general_diagnosis: String,
    pub requires_followup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grooming_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surgery: Option<AddSurgery>,
}

/// Partial update payload; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_followup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup_date: Option<String>,
}

/// Payload for attaching grooming entries to an existing visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGrooming {
    pub grooming_type: Vec<String>,
}

/// Payload for attaching preventive-care treatments to an existing visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPreventiveCare {
    pub treatment: Vec<String>,
    pub vet_id: String,
}

/// Surgery details supplied when recording a visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSurgery {
    pub surgery_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub veterinarian_diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anesthesia_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub vet_id: String,
}

/// Partial surgery update; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSurgery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surgery_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub veterinarian_diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anesthesia_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_service_instance_omits_absent_sections() {
        let add = AddServiceInstance {
            pet_id: "p-1".to_string(),
            service_date: "2024-03-01".to_string(),
            service_type: vec!["General Check-up".to_string()],
            service_reason: "annual".to_string(),
            general_diagnosis: "healthy".to_string(),
            requires_followup: false,
            followup_date: None,
            grooming_type: None,
            treatment: None,
            surgery: None,
        };
        let json = serde_json::to_value(&add).unwrap();
        assert!(json.get("grooming_type").is_none());
        assert!(json.get("surgery").is_none());
        assert_eq!(json["requires_followup"], false);
    }

    #[test]
    fn service_instance_deserializes_with_nested_records() {
        let raw = serde_json::json!({
            "service_instance_id": "s-1",
            "pet_id": "p-1",
            "service_date": "2024-03-01",
            "service_type": ["Surgery"],
            "service_reason": "injury",
            "general_diagnosis": "fracture",
            "requires_followup": true,
            "followup_date": "2024-03-15",
            "grooming": null,
            "preventive_care": null,
            "surgery": [{
                "surgery_id": 1,
                "surgery_name": "fracture repair",
                "veterinarian_diagnosis": "clean break",
                "anesthesia_used": "isoflurane",
                "complications": null,
                "outcome": "stable",
                "vet": {
                    "vet_name": "Dr. Vale",
                    "vet_email": "vale@clinic.test",
                    "vet_phone_number": "555-0000",
                    "vet_license_number": "L-100"
                }
            }]
        });
        let instance: ServiceInstance = serde_json::from_value(raw).unwrap();
        let surgery = &instance.surgery.as_ref().unwrap()[0];
        assert_eq!(surgery.surgery_name, "fracture repair");
        assert_eq!(surgery.vet.vet_license_number, "L-100");
        assert!(instance.grooming.is_none());
    }

    #[test]
    fn update_surgery_empty_serializes_to_empty_object() {
        let json = serde_json::to_value(UpdateSurgery::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
