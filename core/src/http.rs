//! Plain-data HTTP types shared by the gateway and the resource services.
//!
//! # Design
//! The gateway normalizes every successful round-trip into an [`Envelope`]:
//! the parsed JSON body plus the status code and reason phrase. Services pass
//! envelopes through unchanged; callers that want a typed view use
//! [`Envelope::data_as`].

use serde_json::Value;

use crate::error::ApiError;

/// HTTP verb for a gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Normalized result of a successful (2xx) request.
///
/// `data` is the response body parsed as JSON. A non-JSON body is carried as
/// `Value::String` and an empty body as `Value::Null`, so `data` is always
/// present.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub data: Value,
    pub status: u16,
    pub status_text: String,
}

impl Envelope {
    /// Deserialize `data` into a concrete type.
    ///
    /// The wire shape is not validated anywhere else; this is the one place
    /// a caller opts into a typed view of the payload.
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_as_str_matches_wire_verbs() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn data_as_extracts_typed_view() {
        #[derive(serde::Deserialize)]
        struct Health {
            status: String,
        }
        let envelope = Envelope {
            data: json!({"status": "ok"}),
            status: 200,
            status_text: "OK".to_string(),
        };
        let health: Health = envelope.data_as().unwrap();
        assert_eq!(health.status, "ok");
    }

    #[test]
    fn data_as_reports_shape_mismatch() {
        let envelope = Envelope {
            data: json!("not an object"),
            status: 200,
            status_text: "OK".to_string(),
        };
        let err = envelope.data_as::<Vec<i64>>().unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
