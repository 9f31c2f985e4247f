use serde::{Deserialize, Serialize};

/// A pet record as returned by the API. `pet_birth_date` is an ISO date
/// string; the client passes it through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub pet_id: String,
    pub pet_name: String,
    pub pet_birth_date: String,
    pub pet_type: String,
    pub pet_breed: String,
    pub pet_weight: f64,
    pub pet_color: String,
    pub owner_id: String,
}

/// Payload for registering a pet under an existing owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPet {
    pub pet_name: String,
    pub pet_birth_date: String,
    pub pet_type: String,
    pub pet_breed: String,
    pub pet_weight: f64,
    pub pet_color: String,
    pub owner_id: String,
}

/// Partial update payload; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_pet_serializes_only_present_fields() {
        let update = UpdatePet {
            pet_weight: Some(4.2),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["pet_weight"], 4.2);
        assert!(json.get("pet_name").is_none());
    }
}
