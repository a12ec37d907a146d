use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

/// What every simulated call hands back: data or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Data { data: Value, status: u16 },
    Error { error: ErrorBody },
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Envelope::Data {
            data,
            status: StatusCode::OK.as_u16(),
        }
    }

    pub fn empty() -> Self {
        Self::ok(Value::Array(Vec::new()))
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Data { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Envelope::Data { data, .. } => Some(data),
            Envelope::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorBody> {
        match self {
            Envelope::Error { error } => Some(error),
            Envelope::Data { .. } => None,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Envelope::Data { status, .. } => *status,
            Envelope::Error { error } => error.status,
        }
    }
}

impl From<ApiError> for Envelope {
    fn from(err: ApiError) -> Self {
        Envelope::Error {
            error: ErrorBody {
                message: err.to_string(),
                status: err.status().as_u16(),
            },
        }
    }
}

impl From<Result<Value, ApiError>> for Envelope {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Envelope::ok(data),
            Err(err) => err.into(),
        }
    }
}

/// Served the way a real backend answers: bare data on success, a status
/// and `{message}` on failure.
impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        match self {
            Envelope::Data { data, status } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
                (status, Json(data)).into_response()
            }
            Envelope::Error { error } => {
                let status =
                    StatusCode::from_u16(error.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(serde_json::json!({ "message": error.message }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_envelope_wire_shape() {
        let out = serde_json::to_value(Envelope::ok(json!([1]))).unwrap();
        assert_eq!(out, json!({ "data": [1], "status": 200 }));
    }

    #[test]
    fn error_envelope_wire_shape() {
        let out = serde_json::to_value(Envelope::from(ApiError::MethodNotAllowed)).unwrap();
        assert_eq!(
            out,
            json!({ "error": { "message": "Method not supported", "status": 405 } })
        );
    }

    #[test]
    fn accessors_are_exclusive() {
        let ok = Envelope::empty();
        assert!(ok.is_ok());
        assert_eq!(ok.data(), Some(&json!([])));
        assert!(ok.error().is_none());

        let err = Envelope::from(ApiError::InvalidCredentials);
        assert!(!err.is_ok());
        assert!(err.data().is_none());
        assert_eq!(err.status(), 401);
    }

    #[test]
    fn envelope_parses_back() {
        let parsed: Envelope =
            serde_json::from_value(json!({ "error": { "message": "Item not found", "status": 404 } }))
                .unwrap();
        assert_eq!(parsed, Envelope::from(ApiError::not_found("Item not found")));
    }

    #[test]
    fn response_status_follows_envelope() {
        let response = Envelope::from(ApiError::not_found("Item not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = Envelope::ok(json!({})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
