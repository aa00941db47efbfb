use async_trait::async_trait;
use photo_relay::{
    Error, Result,
    config::Credentials,
    telegram::{PhotoPayload, SendPhotoResponse, TelegramClient},
};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Recorded `sendPhoto` call
#[derive(Debug, Clone)]
pub struct SentPhoto {
    pub credentials: Credentials,
    pub payload: PhotoPayload,
}

/// Mock Telegram client for testing
#[derive(Debug, Clone)]
pub struct MockTelegramClient {
    pub reply: SendPhotoResponse,
    pub error: Option<String>,
    pub calls: Arc<Mutex<Vec<SentPhoto>>>,
}

impl MockTelegramClient {
    pub fn new() -> Self {
        Self {
            reply: SendPhotoResponse::success(json!({"message_id": 1})),
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(mut self, reply: SendPhotoResponse) -> Self {
        self.reply = reply;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn calls(&self) -> Vec<SentPhoto> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelegramClient for MockTelegramClient {
    async fn send_photo(
        &self,
        credentials: &Credentials,
        payload: &PhotoPayload,
    ) -> Result<SendPhotoResponse> {
        self.calls.lock().unwrap().push(SentPhoto {
            credentials: credentials.clone(),
            payload: payload.clone(),
        });

        match &self.error {
            Some(error) => Err(Error::internal(error.clone())),
            None => Ok(self.reply.clone()),
        }
    }
}
