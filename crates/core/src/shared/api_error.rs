use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid endpoint path {path}: {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("service returned HTTP {status}{}: {message}", code_suffix(.code))]
    Status {
        status: u16,
        code: Option<i64>,
        message: String,
    },
    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" (code {c})")).unwrap_or_default()
}

/// Error body the service attaches to non-success responses.
#[derive(Deserialize)]
struct ErrorBody {
    code: Option<i64>,
    message: Option<String>,
}

impl ApiError {
    /// Builds a `Status` error from a non-success response body.
    ///
    /// Falls back to the raw body text when it is not the service's JSON
    /// error shape, and to the bare status when the body is empty.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let code = parsed.as_ref().and_then(|b| b.code);
        let message = parsed
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string());
        let message = if message.is_empty() {
            "no error message".to_string()
        } else {
            message
        };
        ApiError::Status {
            status,
            code,
            message,
        }
    }

    /// HTTP status reported by the service, if the failure came from it.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_service_error_body() {
        let err = ApiError::from_status(400, r#"{"code": 2, "message": "Image is empty"}"#);
        match err {
            ApiError::Status {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, Some(2));
                assert_eq!(message, "Image is empty");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_keeps_plain_text_body() {
        let err = ApiError::from_status(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "service returned HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_from_status_empty_body() {
        let err = ApiError::from_status(404, "");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "service returned HTTP 404: no error message");
    }

    #[test]
    fn test_display_includes_service_code() {
        let err = ApiError::from_status(422, r#"{"code": 7, "message": "bad"}"#);
        assert_eq!(err.to_string(), "service returned HTTP 422 (code 7): bad");
    }

    #[test]
    fn test_status_is_none_for_decode_errors() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ApiError::Decode {
            endpoint: "api/detect".to_string(),
            source,
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
