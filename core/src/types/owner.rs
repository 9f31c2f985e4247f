use serde::{Deserialize, Serialize};

use crate::types::pet::Pet;

/// An owner record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub owner_id: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone_number: String,
    pub owner_address: String,
}

/// Payload for creating an owner. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOwner {
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone_number: String,
    pub owner_address: String,
}

/// Partial update payload; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_address: Option<String>,
}

/// An owner together with every pet registered to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerWithPets {
    pub owner: Owner,
    pub pets: Vec<Pet>,
}
