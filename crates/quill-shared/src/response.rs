//! Standardized API response envelopes.
//!
//! Every handler answers with one of three shapes:
//! - success: `{ status, message, data }`
//! - domain error (e.g. not found): `{ status, message }`
//! - infrastructure failure: `{ message }` - deliberately a distinct shape
//!   carrying no detail about the underlying error.

use serde::{Deserialize, Serialize};

/// Successful response wrapper. `status` mirrors the HTTP status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    /// 200 envelope.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(200, message, data)
    }

    /// 201 envelope.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(201, message, data)
    }
}

/// Domain error envelope - a request the store handled but the resource
/// could not satisfy (unknown id, unacknowledged write).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }
}

/// Infrastructure failure envelope. The fixed message is the entire payload;
/// the original error is logged server-side only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerErrorResponse {
    pub message: String,
}

impl Default for ServerErrorResponse {
    fn default() -> Self {
        Self {
            message: "server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::ok("found blog", 7)).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "found blog");
        assert_eq!(json["data"], 7);
    }

    #[test]
    fn server_error_envelope_has_no_status_field() {
        let json = serde_json::to_value(ServerErrorResponse::default()).unwrap();
        assert_eq!(json["message"], "server error");
        assert!(json.get("status").is_none());
    }
}
