//! Root and health-check endpoints.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::{Envelope, HttpMethod};

pub struct IndexService<G> {
    gateway: G,
}

impl<G: Gateway> IndexService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn get_index(&self) -> Result<Envelope, ApiError> {
        self.gateway.request(HttpMethod::Get, "/api", None)
    }

    pub fn get_health(&self) -> Result<Envelope, ApiError> {
        self.gateway.request(HttpMethod::Get, "/api/health_check", None)
    }
}
