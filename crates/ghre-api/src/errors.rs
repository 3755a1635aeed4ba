//! API error types.

/// Error returned by the GitHub REST client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// A page came back with a status other than 200.
    ///
    /// Displayed as `status: reason: body`, where `body` is the decoded
    /// error payload.
    #[error("{status}: {reason}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
        /// Decoded response body (compact JSON, or raw text if not JSON).
        body: String,
    },

    /// Network/transport error.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse API response: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(status: u16, reason: &str, body: &str) -> ApiError {
        ApiError::Http {
            status,
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_should_display_status_reason_and_body() {
        let err = http_error(404, "Not Found", r#"{"message":"Not Found"}"#);
        assert_eq!(err.to_string(), r#"404: Not Found: {"message":"Not Found"}"#);
    }

    #[test]
    fn test_should_display_blank_body_as_empty() {
        let err = http_error(503, "Service Unavailable", "");
        assert_eq!(err.to_string(), "503: Service Unavailable: ");
    }

    #[test]
    fn test_should_wrap_parse_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(parse_err);
        assert!(err.to_string().starts_with("failed to parse API response: "));
    }
}
