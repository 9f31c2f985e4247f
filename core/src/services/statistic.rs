//! Clinic statistics endpoints.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::{Envelope, HttpMethod};

const PREFIX: &str = "/api/statistics";

pub struct StatisticService<G> {
    gateway: G,
}

impl<G: Gateway> StatisticService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Totals per service type across all recorded visits.
    pub fn get_services_counter(&self) -> Result<Envelope, ApiError> {
        self.gateway
            .request(HttpMethod::Get, &format!("{PREFIX}/counter_services"), None)
    }

    /// Visit totals grouped by pet type.
    pub fn get_pet_type_visit_summary(&self) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/get_pet_type_visit_summary");
        self.gateway.request(HttpMethod::Get, &path, None)
    }
}
