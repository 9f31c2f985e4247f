//! Owner resource operations.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::{Envelope, HttpMethod};
use crate::services::{to_body, ListQuery};
use crate::types::{AddOwner, UpdateOwner};

const PREFIX: &str = "/api/owner";

/// Owner lists are paged five at a time.
pub const OWNER_PAGE_LIMIT: u32 = 5;

pub struct OwnerService<G> {
    gateway: G,
}

impl<G: Gateway> OwnerService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn get_owners(&self, query: &ListQuery) -> Result<Envelope, ApiError> {
        let path = format!(
            "{PREFIX}/get_owners?search={}&page={}&limit={OWNER_PAGE_LIMIT}",
            query.search, query.page
        );
        self.gateway.request(HttpMethod::Get, &path, None)
    }

    pub fn get_owner_and_pets(&self, owner_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/get_owner_and_pets/{owner_id}");
        self.gateway.request(HttpMethod::Get, &path, None)
    }

    pub fn add_owner(&self, owner: &AddOwner) -> Result<Envelope, ApiError> {
        let body = to_body(owner)?;
        self.gateway
            .request(HttpMethod::Post, &format!("{PREFIX}/add_owner"), Some(&body))
    }

    pub fn update_owner(&self, owner: &UpdateOwner, owner_id: &str) -> Result<Envelope, ApiError> {
        let body = to_body(owner)?;
        let path = format!("{PREFIX}/update_owner/{owner_id}");
        self.gateway.request(HttpMethod::Patch, &path, Some(&body))
    }

    pub fn delete_owner(&self, owner_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("{PREFIX}/delete_owner/{owner_id}");
        self.gateway.request(HttpMethod::Delete, &path, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::StubGateway;
    use serde_json::json;

    #[test]
    fn get_owners_builds_paged_search_path() {
        let service = OwnerService::new(StubGateway::ok(json!({"owners": []})));
        service.get_owners(&ListQuery::new("fluffy", 2)).unwrap();
        assert_eq!(
            service.gateway.last_call().path,
            "/api/owner/get_owners?search=fluffy&page=2&limit=5"
        );
    }

    #[test]
    fn get_owners_defaults_to_empty_search_first_page() {
        let service = OwnerService::new(StubGateway::ok(json!({"owners": []})));
        service.get_owners(&ListQuery::default()).unwrap();
        assert_eq!(
            service.gateway.last_call().path,
            "/api/owner/get_owners?search=&page=1&limit=5"
        );
    }

    #[test]
    fn get_owners_passes_envelope_through_unchanged() {
        let data = json!({"owners": [{"owner_id": "o-1"}], "total_pages": 1});
        let service = OwnerService::new(StubGateway::ok(data.clone()));
        let envelope = service.get_owners(&ListQuery::default()).unwrap();
        assert_eq!(envelope.data, data);
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.status_text, "OK");
    }

    #[test]
    fn add_owner_posts_payload_unchanged() {
        let service = OwnerService::new(StubGateway::ok(json!({"status": "success"})));
        let owner = AddOwner {
            owner_name: "Alice".to_string(),
            owner_email: "alice@example.com".to_string(),
            owner_phone_number: "555-0101".to_string(),
            owner_address: "1 Main St".to_string(),
        };
        service.add_owner(&owner).unwrap();

        let call = service.gateway.last_call();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, "/api/owner/add_owner");
        assert_eq!(call.body.as_ref().unwrap()["owner_name"], "Alice");
    }

    #[test]
    fn update_owner_patches_by_id() {
        let service = OwnerService::new(StubGateway::ok(json!({"status": "success"})));
        let update = UpdateOwner {
            owner_address: Some("2 Oak Ave".to_string()),
            ..Default::default()
        };
        service.update_owner(&update, "o-9").unwrap();

        let call = service.gateway.last_call();
        assert_eq!(call.method, HttpMethod::Patch);
        assert_eq!(call.path, "/api/owner/update_owner/o-9");
        assert_eq!(call.body.as_ref().unwrap(), &json!({"owner_address": "2 Oak Ave"}));
    }

    #[test]
    fn delete_owner_issues_delete_without_body() {
        let service = OwnerService::new(StubGateway::ok(json!({"status": "success"})));
        service.delete_owner("o-9").unwrap();

        let call = service.gateway.last_call();
        assert_eq!(call.method, HttpMethod::Delete);
        assert_eq!(call.path, "/api/owner/delete_owner/o-9");
        assert!(call.body.is_none());
    }

    #[test]
    fn gateway_failure_propagates_unchanged() {
        let service = OwnerService::new(StubGateway::failing(500));
        let err = service.get_owners(&ListQuery::default()).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }
}
