use super::types::*;
use crate::{
    Result,
    config::{Credentials, TelegramConfig},
    multipart::{Envelope, FormPart},
};
use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tracing::debug;

pub const PHOTO_FILENAME: &str = "photo.jpg";
pub const PHOTO_CONTENT_TYPE: &str = "image/jpeg";

#[async_trait]
pub trait TelegramClient: Send + Sync {
    async fn send_photo(
        &self,
        credentials: &Credentials,
        payload: &PhotoPayload,
    ) -> Result<SendPhotoResponse>;
}

pub struct HttpTelegramClient {
    client: reqwest::Client,
    api_base_url: String,
}

impl HttpTelegramClient {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn send_photo_url(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendPhoto", self.api_base_url, bot_token)
    }
}

/// Form body of a `sendPhoto` call.
pub fn send_photo_envelope(chat_id: &str, payload: &PhotoPayload) -> Envelope {
    Envelope::encode(vec![
        FormPart::text("chat_id", chat_id),
        FormPart::file(
            "photo",
            PHOTO_FILENAME,
            PHOTO_CONTENT_TYPE,
            payload.photo.to_vec(),
        ),
        FormPart::text("caption", payload.caption.as_str()),
    ])
}

#[async_trait]
impl TelegramClient for HttpTelegramClient {
    async fn send_photo(
        &self,
        credentials: &Credentials,
        payload: &PhotoPayload,
    ) -> Result<SendPhotoResponse> {
        let envelope = send_photo_envelope(&credentials.chat_id, payload);

        debug!(
            "Sending {} byte photo to chat {} ({} byte form)",
            payload.photo.len(),
            credentials.chat_id,
            envelope.len()
        );

        let response = self
            .client
            .post(self.send_photo_url(&credentials.bot_token))
            .header(CONTENT_TYPE, envelope.content_type())
            .header(CONTENT_LENGTH, envelope.len())
            .body(envelope.into_body())
            .send()
            .await?;

        let status = response.status();
        let reply: SendPhotoResponse = response.json().await?;

        debug!("Telegram replied with status {} (ok: {})", status, reply.ok);

        Ok(reply)
    }
}
