//! Single chokepoint for all network calls.
//!
//! # Design
//! Every resource service depends on the [`Gateway`] trait, not on a concrete
//! transport, so tests substitute a stub without touching the network.
//! [`HttpGateway`] is the production implementation: one `ureq` agent plus a
//! base URL, configured once at startup and injected into each service.
//! Status interpretation lives here — the agent is built with
//! `http_status_as_error(false)` so 4xx/5xx come back as data and the gateway
//! classifies them itself. Failures are logged at this layer only, then
//! returned unchanged to the caller.

use serde_json::Value;
use tracing::error;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{Envelope, HttpMethod};

/// Request capability shared by every resource service.
pub trait Gateway {
    /// Issue one HTTP call against `path` (relative to the base URL).
    ///
    /// `body` is sent as JSON for POST/PATCH and ignored for GET/DELETE.
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope, ApiError>;
}

/// Blocking HTTP gateway backed by a `ureq` agent.
///
/// Cheap to clone; clones share the underlying agent, so one configured
/// transport serves every service.
#[derive(Clone)]
pub struct HttpGateway {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        match (method, body) {
            (HttpMethod::Get, _) => self.agent.get(url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(url)
                .content_type("application/json")
                .send(body.to_string().as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(url).send_empty(),
            (HttpMethod::Patch, Some(body)) => self
                .agent
                .patch(url)
                .content_type("application/json")
                .send(body.to_string().as_bytes()),
            (HttpMethod::Patch, None) => self.agent.patch(url).send_empty(),
        }
    }
}

impl Gateway for HttpGateway {
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope, ApiError> {
        let url = self.url(path);

        let mut response = self.execute(method, &url, body).map_err(|e| {
            error!(method = method.as_str(), url = %url, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let raw_body = response.body_mut().read_to_string().map_err(|e| {
            error!(method = method.as_str(), url = %url, error = %e, "failed to read response body");
            ApiError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            error!(
                method = method.as_str(),
                url = %url,
                status = status.as_u16(),
                "request rejected"
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text,
                body: raw_body,
            });
        }

        let data = parse_body(raw_body);
        Ok(Envelope {
            data,
            status: status.as_u16(),
            status_text,
        })
    }
}

/// Parse a response body the way a browser HTTP client would: JSON when it is
/// JSON, the raw string otherwise, null when empty.
fn parse_body(raw: String) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use serde_json::json;

    /// Subscriber that counts ERROR-level events and ignores everything else.
    struct ErrorCounter {
        errors: Arc<AtomicUsize>,
    }

    impl tracing::Subscriber for ErrorCounter {
        fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
            *metadata.level() == tracing::Level::ERROR
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, _: &tracing::Event<'_>) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let gateway = HttpGateway::new("http://localhost:3000/");
        assert_eq!(
            gateway.url("/api/health_check"),
            "http://localhost:3000/api/health_check"
        );
    }

    #[test]
    fn from_config_uses_configured_url() {
        let config = Config {
            api_url: "http://clinic.test/".to_string(),
        };
        let gateway = HttpGateway::from_config(&config);
        assert_eq!(gateway.url("/api"), "http://clinic.test/api");
    }

    #[test]
    fn parse_body_handles_json() {
        assert_eq!(
            parse_body(r#"{"status":"ok"}"#.to_string()),
            json!({"status": "ok"})
        );
    }

    #[test]
    fn parse_body_falls_back_to_raw_string() {
        assert_eq!(
            parse_body("plain text".to_string()),
            Value::String("plain text".to_string())
        );
    }

    #[test]
    fn parse_body_maps_empty_to_null() {
        assert_eq!(parse_body(String::new()), Value::Null);
    }

    #[test]
    fn failed_request_emits_one_error_event() {
        // Bind then drop so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = ErrorCounter {
            errors: errors.clone(),
        };
        let gateway = HttpGateway::new(&format!("http://{addr}"));
        let result = tracing::subscriber::with_default(subscriber, || {
            gateway.request(HttpMethod::Get, "/api/health_check", None)
        });

        assert!(matches!(result, Err(ApiError::Transport(_))));
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }
}
