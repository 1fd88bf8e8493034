//! Error types for hubsearch
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Non-2xx responses from the search service are translated into an
//! [`ApiError`], which renders validation failures as a readable diagnostic.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use url::Url;

/// The main error type for hubsearch
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error for the request that produced `url`
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// HTTP status reported by the service, if the error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a rejected search query
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Api(err) if err.is_validation())
    }
}

/// Result type alias for hubsearch
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Service Errors
// ============================================================================

/// One entry of the `errors` array in a validation failure body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub code: String,
}

/// Structured error body returned with a non-2xx status
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(default)]
    documentation_url: Option<String>,
}

/// A non-success response from the search service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// URL of the request that failed
    pub request_url: Url,
    /// Top-level `message`, or the status line when the body carried none
    pub message: String,
    /// Structured validation errors, in the order the service sent them
    pub errors: Vec<ErrorDetail>,
    /// Link to the service documentation, if provided
    pub documentation_url: Option<String>,
}

impl ApiError {
    /// Translate a failed response into an `ApiError`.
    ///
    /// Bodies that are not JSON, or that do not match the structured error
    /// shape, fall back to the body's `message` field when one can be found
    /// and to the status line otherwise.
    pub fn from_response(
        status: StatusCode,
        headers: &HeaderMap,
        body: &str,
        request_url: Url,
    ) -> Self {
        let parsed = if is_json(headers) {
            parse_error_body(body)
        } else {
            None
        };
        let ErrorBody {
            message,
            errors,
            documentation_url,
        } = parsed.unwrap_or_default();

        let message = if message.is_empty() {
            status_line(status)
        } else {
            message
        };

        Self {
            status: status.as_u16(),
            request_url,
            message,
            errors,
            documentation_url,
        }
    }

    /// The `q` parameter of the rejected request
    pub fn query(&self) -> String {
        self.request_url
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.trim().to_string())
            .unwrap_or_default()
    }

    /// Check if the body carried structured validation errors
    pub fn is_validation(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_validation() {
            return write!(
                f,
                "HTTP {}: {} ({})",
                self.status, self.message, self.request_url
            );
        }

        write!(f, "Invalid search query \"{}\".", self.query())?;
        for detail in &self.errors {
            write!(f, "\n{}", detail.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let mime = ct.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn parse_error_body(body: &str) -> Option<ErrorBody> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed);
    }

    // Shape mismatch: salvage a top-level message if there is one
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.to_string();
    Some(ErrorBody {
        message,
        ..ErrorBody::default()
    })
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::header::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    fn request_url() -> Url {
        Url::parse(
            "https://api.github.com/search/repositories?q=keyword+stars%3A%3E%3D5+topic%3Atopic&page=1&per_page=30",
        )
        .unwrap()
    }

    #[test]
    fn test_validation_error_display() {
        let body = r#"{
            "message": "Validation Failed",
            "errors": [
                {"message": "first problem", "resource": "Search", "field": "q", "code": "invalid"},
                {"message": "second problem", "resource": "Search", "field": "q", "code": "invalid"}
            ],
            "documentation_url": "https://docs.github.com/v3/search/"
        }"#;
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &json_headers(),
            body,
            request_url(),
        );

        assert!(err.is_validation());
        assert_eq!(err.errors[1].code, "invalid");
        assert_eq!(
            err.documentation_url.as_deref(),
            Some("https://docs.github.com/v3/search/")
        );
        assert_eq!(
            err.to_string(),
            "Invalid search query \"keyword stars:>=5 topic:topic\".\nfirst problem\nsecond problem"
        );
    }

    #[test]
    fn test_non_json_falls_back_to_status_line() {
        let err = ApiError::from_response(
            StatusCode::SERVICE_UNAVAILABLE,
            &HeaderMap::new(),
            "<html>down</html>",
            request_url(),
        );

        assert!(!err.is_validation());
        assert_eq!(err.message, "503 Service Unavailable");
        assert!(err
            .to_string()
            .starts_with("HTTP 503: 503 Service Unavailable (https://api.github.com/search/"));
    }

    #[test]
    fn test_unstructured_json_keeps_message() {
        let err = ApiError::from_response(
            StatusCode::FORBIDDEN,
            &json_headers(),
            r#"{"message": "API rate limit exceeded", "errors": "not-a-list"}"#,
            request_url(),
        );

        assert_eq!(err.message, "API rate limit exceeded");
        assert!(err.errors.is_empty());
    }

    #[test]
    fn test_structured_errors_translated_for_any_status() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            &json_headers(),
            r#"{"message": "Validation Failed", "errors": [{"message": "bad date", "resource": "Search", "field": "q", "code": "invalid"}]}"#,
            Url::parse("http://127.0.0.1:8080/search/repositories?q=kw&page=1&per_page=100").unwrap(),
        );

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid search query \"kw\".\nbad date");
    }

    #[test]
    fn test_422_without_errors_is_not_validation() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &json_headers(),
            r#"{"message": "Validation Failed"}"#,
            request_url(),
        );

        assert!(!err.is_validation());
        assert!(err.to_string().starts_with("HTTP 422: Validation Failed"));
    }

    #[test]
    fn test_error_status() {
        let err: Error = ApiError::from_response(
            StatusCode::NOT_FOUND,
            &HeaderMap::new(),
            "",
            request_url(),
        )
        .into();
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_validation());

        assert_eq!(Error::config("bad host").status(), None);
        assert_eq!(
            Error::config("bad host").to_string(),
            "Configuration error: bad host"
        );
    }
}
