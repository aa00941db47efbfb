use crate::{Error, Result};
use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_REJECTION: &str = "Failed to send photo to Telegram";

/// A photo and its caption, built fresh for each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPayload {
    pub photo: Bytes,
    pub caption: String,
}

/// Reply of the Bot API `sendPhoto` method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendPhotoResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
}

impl SendPhotoResponse {
    pub fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            description: None,
            error_code: None,
        }
    }

    pub fn failure(error_code: i64, description: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            description: Some(description.into()),
            error_code: Some(error_code),
        }
    }

    /// The sent message on success, the provider's description otherwise.
    pub fn into_result(self) -> Result<Value> {
        if self.ok {
            Ok(self.result.unwrap_or(Value::Null))
        } else {
            Err(Error::rejected(
                self.description
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
            ))
        }
    }
}
