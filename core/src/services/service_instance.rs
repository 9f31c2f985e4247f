//! Service-instance (clinic visit) operations, including the nested
//! grooming, preventive-care, and surgery sub-resources.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::{Envelope, HttpMethod};
use crate::services::to_body;
use crate::types::{
    AddGrooming, AddPreventiveCare, AddServiceInstance, UpdateServiceInstance, UpdateSurgery,
};

const PREFIX: &str = "/api/service_instance";

pub struct ServiceInstanceService<G> {
    gateway: G,
}

impl<G: Gateway> ServiceInstanceService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Visit history for one pet, optionally bounded by an inclusive date
    /// range. Empty bounds mean "no bound" — the query parameters are sent
    /// either way, matching the server contract.
    pub fn get_pet_histories(
        &self,
        pet_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Envelope, ApiError> {
        let path = format!(
            "{PREFIX}/get_pet_histories/{pet_id}?start_date={start_date}&end_date={end_date}"
        );
        self.gateway.request(HttpMethod::Get, &path, None)
    }

    pub fn get_service_instance(&self, service_instance_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/get_specific_service_instance/{service_instance_id}");
        self.gateway.request(HttpMethod::Get, &path, None)
    }

    pub fn add_service_instance(
        &self,
        service_instance: &AddServiceInstance,
    ) -> Result<Envelope, ApiError> {
        let body = to_body(service_instance)?;
        let path = format!("{PREFIX}/add_service_instance");
        self.gateway.request(HttpMethod::Post, &path, Some(&body))
    }

    pub fn update_service_instance(
        &self,
        service_instance_id: &str,
        service_instance: &UpdateServiceInstance,
    ) -> Result<Envelope, ApiError> {
        let body = to_body(service_instance)?;
        let path = format!("{PREFIX}/update_service_instance/{service_instance_id}");
        self.gateway.request(HttpMethod::Patch, &path, Some(&body))
    }

    pub fn delete_service_instance(&self, service_instance_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/delete_service/{service_instance_id}");
        self.gateway.request(HttpMethod::Delete, &path, None)
    }

    pub fn add_grooming(
        &self,
        service_instance_id: &str,
        grooming: &AddGrooming,
    ) -> Result<Envelope, ApiError> {
        let body = to_body(grooming)?;
        let path = format!("{PREFIX}/add_grooming_to_instance/{service_instance_id}");
        self.gateway.request(HttpMethod::Post, &path, Some(&body))
    }

    pub fn delete_grooming(&self, grooming_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/delete_grooming_from_instance/{grooming_id}");
        self.gateway.request(HttpMethod::Delete, &path, None)
    }

    pub fn add_preventive_care(
        &self,
        service_instance_id: &str,
        preventive_care: &AddPreventiveCare,
    ) -> Result<Envelope, ApiError> {
        let body = to_body(preventive_care)?;
        let path = format!("{PREFIX}/add_preventive_care_to_instance/{service_instance_id}");
        self.gateway.request(HttpMethod::Post, &path, Some(&body))
    }

    pub fn delete_preventive_care(&self, preventive_care_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/delete_preventive_care_from_instance/{preventive_care_id}");
        self.gateway.request(HttpMethod::Delete, &path, None)
    }

    pub fn update_surgery(
        &self,
        surgery_id: &str,
        surgery: &UpdateSurgery,
    ) -> Result<Envelope, ApiError> {
        let body = to_body(surgery)?;
        let path = format!("{PREFIX}/update_surgery_from_instance/{surgery_id}");
        self.gateway.request(HttpMethod::Patch, &path, Some(&body))
    }

    pub fn delete_surgery(&self, surgery_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/delete_surgery_from_instance/{surgery_id}");
        self.gateway.request(HttpMethod::Delete, &path, None)
    }
}
