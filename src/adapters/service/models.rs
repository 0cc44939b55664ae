//! Wire models for the Count and Page services
//!
//! Every response uses the same envelope: `{"success": bool, "data": {...}}`.
//! Failures carry `{"message": "...", "code": "..."}` in `data`; the code is
//! optional and only used to pick the right [`ServiceError`] variant.

use crate::domain::{CountResponse, PageResponse, ServiceError, UrlRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// AJAX action name routed to the exporter
pub const ACTION: &str = "url_exporter_get_urls";

/// Response envelope shared by both services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Successful envelope wrapping `data`
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl Envelope<ErrorData> {
    /// Failed envelope carrying a message and classification code
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: ErrorData {
                message: message.into(),
                code: Some(code),
            },
        }
    }
}

/// `request_type` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Count,
    #[default]
    Data,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::Count => "count",
            RequestType::Data => "data",
        }
    }
}

/// Payload of a successful count response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountData {
    pub total_count: u64,
    pub term_name: String,
    pub batch_size: u32,
}

impl From<CountData> for CountResponse {
    fn from(data: CountData) -> Self {
        Self {
            total_count: data.total_count,
            term_label: data.term_name,
            batch_size: data.batch_size,
        }
    }
}

/// Payload of a successful page response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub urls: Vec<UrlRecord>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_posts: u64,
    pub has_more: bool,
    pub term: String,
}

impl From<PageData> for PageResponse {
    fn from(data: PageData) -> Self {
        Self {
            records: data.urls,
            has_more: data.has_more,
            current_page: data.current_page,
            total_pages: data.total_pages,
            total_count: data.total_posts,
            term_label: data.term,
        }
    }
}

/// Machine-readable failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Forbidden,
    InvalidNonce,
    InvalidParameters,
    TaxonomyNotFound,
    TermNotFound,
    #[serde(other)]
    Unknown,
}

/// Payload of a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl From<ErrorData> for ServiceError {
    fn from(data: ErrorData) -> Self {
        match data.code {
            Some(ErrorCode::Forbidden) | Some(ErrorCode::InvalidNonce) => {
                ServiceError::PermissionDenied(data.message)
            }
            Some(ErrorCode::InvalidParameters) => ServiceError::InvalidParameters(data.message),
            Some(ErrorCode::TaxonomyNotFound) | Some(ErrorCode::TermNotFound) => {
                ServiceError::NotFound(data.message)
            }
            Some(ErrorCode::Unknown) | None => ServiceError::Server(data.message),
        }
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    data: serde_json::Value,
}

/// Decode an envelope body into its success payload or a [`ServiceError`]
///
/// # Errors
///
/// - `InvalidResponse` when the body is not an envelope or the payload has the wrong shape
/// - the classified error when `success` is false
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    let raw: RawEnvelope = serde_json::from_str(body)
        .map_err(|e| ServiceError::InvalidResponse(format!("not a response envelope: {e}")))?;

    if raw.success {
        return serde_json::from_value(raw.data)
            .map_err(|e| ServiceError::InvalidResponse(format!("unexpected payload: {e}")));
    }

    match serde_json::from_value::<ErrorData>(raw.data) {
        Ok(error) => Err(error.into()),
        Err(_) => Err(ServiceError::Server("Unknown error".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_count_success() {
        let body = json!({
            "success": true,
            "data": {"total_count": 120, "term_name": "News", "batch_size": 50}
        })
        .to_string();

        let data: CountData = decode_envelope(&body).unwrap();
        let response = CountResponse::from(data);
        assert_eq!(response.total_count, 120);
        assert_eq!(response.term_label, "News");
        assert_eq!(response.batch_size, 50);
    }

    #[test]
    fn test_decode_page_success() {
        let body = json!({
            "success": true,
            "data": {
                "urls": [{"url": "https://example.com/a", "title": "A", "date": "May 1, 2025"}],
                "current_page": 1,
                "total_pages": 3,
                "total_posts": 120,
                "has_more": true,
                "term": "News"
            }
        })
        .to_string();

        let page = PageResponse::from(decode_envelope::<PageData>(&body).unwrap());
        assert_eq!(page.records.len(), 1);
        assert!(page.has_more);
        assert_eq!(page.total_count, 120);
        assert_eq!(page.term_label, "News");
    }

    #[test]
    fn test_decode_classified_errors() {
        let forbidden = json!({"success": false, "data": {"message": "no", "code": "forbidden"}});
        assert_eq!(
            decode_envelope::<CountData>(&forbidden.to_string()).unwrap_err(),
            ServiceError::PermissionDenied("no".to_string())
        );

        let missing = json!({"success": false, "data": {"message": "Term not found", "code": "term_not_found"}});
        assert_eq!(
            decode_envelope::<CountData>(&missing.to_string()).unwrap_err(),
            ServiceError::NotFound("Term not found".to_string())
        );

        let invalid = json!({"success": false, "data": {"message": "bad", "code": "invalid_parameters"}});
        assert!(matches!(
            decode_envelope::<CountData>(&invalid.to_string()).unwrap_err(),
            ServiceError::InvalidParameters(_)
        ));
    }

    #[test]
    fn test_decode_error_without_code_or_with_unknown_code() {
        let plain = json!({"success": false, "data": {"message": "Something broke"}});
        assert_eq!(
            decode_envelope::<CountData>(&plain.to_string()).unwrap_err(),
            ServiceError::Server("Something broke".to_string())
        );

        let unknown = json!({"success": false, "data": {"message": "x", "code": "rate_limited"}});
        assert_eq!(
            decode_envelope::<CountData>(&unknown.to_string()).unwrap_err(),
            ServiceError::Server("x".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_non_envelopes() {
        assert!(matches!(
            decode_envelope::<CountData>("-1").unwrap_err(),
            ServiceError::InvalidResponse(_)
        ));
        assert!(matches!(
            decode_envelope::<CountData>(r#"{"success": true, "data": {"total_count": "many"}}"#)
                .unwrap_err(),
            ServiceError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_error_envelope_serialization() {
        let envelope = Envelope::error(ErrorCode::InvalidNonce, "Invalid security token");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["data"]["code"], "invalid_nonce");
        assert_eq!(json["data"]["message"], "Invalid security token");
    }

    #[test]
    fn test_request_type_default_is_data() {
        assert_eq!(RequestType::default(), RequestType::Data);
        assert_eq!(RequestType::Count.as_str(), "count");
    }
}
