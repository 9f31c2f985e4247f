use serde::{Deserialize, Serialize};

/// A veterinarian record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    pub vet_id: String,
    pub vet_name: String,
    pub vet_email: String,
    pub vet_phone_number: String,
    pub vet_license_number: String,
}

/// Payload for registering a veterinarian.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddVet {
    pub vet_name: String,
    pub vet_email: String,
    pub vet_phone_number: String,
    pub vet_license_number: String,
}

/// Partial update payload; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_license_number: Option<String>,
}

/// Denormalized vet reference embedded in surgery and preventive-care
/// records — a snapshot taken at service time, not a live relationship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VetSnapshot {
    pub vet_name: String,
    pub vet_email: String,
    pub vet_phone_number: String,
    pub vet_license_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_vet_empty_serializes_to_empty_object() {
        let json = serde_json::to_value(UpdateVet::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
