use crate::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SENT_MESSAGE: &str = "Photo sent to Telegram successfully";

/// Every way a relay request can end.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// CORS preflight; answered with an empty body.
    Preflight,
    Sent {
        telegram_response: Value,
    },
    Failed {
        status: StatusCode,
        error: String,
    },
}

/// JSON envelope returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_response: Option<Value>,
}

impl RelayOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Preflight | Self::Sent { .. } => StatusCode::OK,
            Self::Failed { status, .. } => *status,
        }
    }

    pub fn body(&self) -> Option<RelayResponse> {
        match self {
            Self::Preflight => None,
            Self::Sent { telegram_response } => Some(RelayResponse {
                success: true,
                message: Some(SENT_MESSAGE.to_string()),
                error: None,
                telegram_response: Some(telegram_response.clone()),
            }),
            Self::Failed { error, .. } => Some(RelayResponse {
                success: false,
                message: None,
                error: Some(error.clone()),
                telegram_response: None,
            }),
        }
    }
}

impl From<Error> for RelayOutcome {
    fn from(error: Error) -> Self {
        Self::Failed {
            status: error.status_code(),
            error: error.to_string(),
        }
    }
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.body() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_sent_envelope_shape() {
        let outcome = RelayOutcome::Sent {
            telegram_response: json!({"message_id": 1}),
        };

        assert_eq!(outcome.status(), StatusCode::OK);
        assert_eq!(
            serde_json::to_value(outcome.body().unwrap()).unwrap(),
            json!({
                "success": true,
                "message": SENT_MESSAGE,
                "telegram_response": {"message_id": 1}
            })
        );
    }

    #[test]
    fn test_failed_envelope_shape() {
        let outcome = RelayOutcome::from(Error::NoPhoto);

        assert_eq!(outcome.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(outcome.body().unwrap()).unwrap(),
            json!({"success": false, "error": "No photo provided"})
        );
    }

    #[test]
    fn test_preflight_has_no_body() {
        assert_eq!(RelayOutcome::Preflight.status(), StatusCode::OK);
        assert!(RelayOutcome::Preflight.body().is_none());
    }
}
