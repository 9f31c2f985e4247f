//! Resource services: one struct per API resource, one method per REST
//! operation.
//!
//! # Design
//! Every service holds a [`Gateway`](crate::gateway::Gateway) by value
//! (composition, not inheritance) and is stateless across calls. Each method
//! interpolates its arguments into a fixed URL template, issues exactly one
//! gateway call, and returns the resulting [`Envelope`](crate::http::Envelope)
//! unchanged. Values are interpolated without escaping — callers must not
//! pass path- or query-breaking characters.

pub mod index;
pub mod owner;
pub mod pet;
pub mod service_instance;
pub mod statistic;
pub mod vet;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub use index::IndexService;
pub use owner::OwnerService;
pub use pet::PetService;
pub use service_instance::ServiceInstanceService;
pub use statistic::StatisticService;
pub use vet::VetService;

/// Pagination arguments shared by the owner and pet list endpoints.
///
/// Defaults mirror the web client: empty search, first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    pub fn new(search: impl Into<String>, page: u32) -> Self {
        Self {
            search: search.into(),
            page,
        }
    }
}

/// Serialize a typed payload into a JSON request body.
fn to_body<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Serialization(e.to_string()))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording stub gateway for service unit tests.

    use std::cell::RefCell;

    use serde_json::Value;

    use crate::error::ApiError;
    use crate::gateway::Gateway;
    use crate::http::{Envelope, HttpMethod};

    pub struct RecordedCall {
        pub method: HttpMethod,
        pub path: String,
        pub body: Option<Value>,
    }

    /// Gateway stub that records every call and replies with a canned
    /// envelope, or a canned HTTP failure when built with `failing`.
    pub struct StubGateway {
        pub calls: RefCell<Vec<RecordedCall>>,
        data: Value,
        failure: Option<u16>,
    }

    impl StubGateway {
        pub fn ok(data: Value) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                data,
                failure: None,
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                data: Value::Null,
                failure: Some(status),
            }
        }

        pub fn last_call(&self) -> std::cell::Ref<'_, RecordedCall> {
            std::cell::Ref::map(self.calls.borrow(), |calls| {
                calls.last().expect("no gateway call recorded")
            })
        }
    }

    impl Gateway for StubGateway {
        fn request(
            &self,
            method: HttpMethod,
            path: &str,
            body: Option<&Value>,
        ) -> Result<Envelope, ApiError> {
            self.calls.borrow_mut().push(RecordedCall {
                method,
                path: path.to_string(),
                body: body.cloned(),
            });
            match self.failure {
                Some(status) => Err(ApiError::Http {
                    status,
                    status_text: "Internal Server Error".to_string(),
                    body: String::new(),
                }),
                None => Ok(Envelope {
                    data: self.data.clone(),
                    status: 200,
                    status_text: "OK".to_string(),
                }),
            }
        }
    }
}
