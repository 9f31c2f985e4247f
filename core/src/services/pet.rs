//! Pet resource operations.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::{Envelope, HttpMethod};
use crate::services::{to_body, ListQuery};
use crate::types::{AddPet, UpdatePet};

const PREFIX: &str = "/api/pet";

/// Pet lists are paged five at a time.
pub const PET_PAGE_LIMIT: u32 = 5;

pub struct PetService<G> {
    gateway: G,
}

impl<G: Gateway> PetService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn get_pets(&self, query: &ListQuery) -> Result<Envelope, ApiError> {
        let path = format!(
            "{PREFIX}/get_pets?search={}&page={}&limit={PET_PAGE_LIMIT}",
            query.search, query.page
        );
        self.gateway.request(HttpMethod::Get, &path, None)
    }

    pub fn get_pet(&self, pet_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/get_pet/{pet_id}");
        self.gateway.request(HttpMethod::Get, &path, None)
    }

    pub fn add_pet(&self, pet: &AddPet) -> Result<Envelope, ApiError> {
        let body = to_body(pet)?;
        self.gateway
            .request(HttpMethod::Post, &format!("{PREFIX}/add_pet"), Some(&body))
    }

    pub fn update_pet(&self, pet: &UpdatePet, pet_id: &str) -> Result<Envelope, ApiError> {
        let body = to_body(pet)?;
        let path = format!("{PREFIX}/update_pet/{pet_id}");
        self.gateway.request(HttpMethod::Patch, &path, Some(&body))
    }

    pub fn delete_pet(&self, pet_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/delete_pet/{pet_id}");
        self.gateway.request(HttpMethod::Delete, &path, None)
    }
}
