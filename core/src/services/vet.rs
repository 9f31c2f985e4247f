//! Veterinarian resource operations.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::{Envelope, HttpMethod};
use crate::services::to_body;
use crate::types::{AddVet, UpdateVet};

const PREFIX: &str = "/api/vet";

/// Vet lists are paged ten at a time.
pub const VET_PAGE_LIMIT: u32 = 10;

pub struct VetService<G> {
    gateway: G,
}

impl<G: Gateway> VetService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn get_vets(&self, page: u32) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/get_vets?page={page}&limit={VET_PAGE_LIMIT}");
        self.gateway.request(HttpMethod::Get, &path, None)
    }

    /// Id/name pairs for form selects.
    pub fn get_vet_lists(&self) -> Result<Envelope, ApiError> {
        self.gateway
            .request(HttpMethod::Get, &format!("{PREFIX}/get_vet_lists"), None)
    }

    pub fn add_vet(&self, vet: &AddVet) -> Result<Envelope, ApiError> {
        let body = to_body(vet)?;
        self.gateway
            .request(HttpMethod::Post, &format!("{PREFIX}/add_vet"), Some(&body))
    }

    pub fn update_vet(&self, vet: &UpdateVet, vet_id: &str) -> Result<Envelope, ApiError> {
        let body = to_body(vet)?;
        let path = format!("{PREFIX}/update_vet/{vet_id}");
        self.gateway.request(HttpMethod::Patch, &path, Some(&body))
    }

    pub fn delete_vet(&self, vet_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/delete_vet/{vet_id}");
        self.gateway.request(HttpMethod::Delete, &path, None)
    }
}
