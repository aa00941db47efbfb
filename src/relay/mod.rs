mod outcome;

pub use outcome::*;

use crate::{
    Error, Result,
    clock::{Clock, Timestamp},
    config::TelegramConfig,
    multipart, placeholder,
    telegram::{PhotoPayload, TelegramClient},
};
use axum::{body::Bytes, http::Method};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Turns one inbound request into at most one `sendPhoto` call.
pub struct RelayService {
    telegram: TelegramConfig,
    client: Arc<dyn TelegramClient>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl RelayService {
    pub fn new(
        telegram: TelegramConfig,
        client: Arc<dyn TelegramClient>,
        clock: Arc<dyn Clock>,
        timezone: Tz,
    ) -> Self {
        Self {
            telegram,
            client,
            clock,
            timezone,
        }
    }

    pub async fn handle(
        &self,
        method: &Method,
        content_type: Option<&str>,
        body: Bytes,
    ) -> RelayOutcome {
        if *method == Method::OPTIONS {
            return RelayOutcome::Preflight;
        }

        match self.relay(method, content_type, body).await {
            Ok(telegram_response) => RelayOutcome::Sent { telegram_response },
            Err(e) => {
                if e.is_client_error() {
                    warn!("Rejected {} request: {}", method, e);
                } else {
                    error!("Failed to relay {} request: {}", method, e);
                }
                RelayOutcome::from(e)
            }
        }
    }

    async fn relay(
        &self,
        method: &Method,
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<serde_json::Value> {
        let credentials = self.telegram.credentials()?;
        let timestamp = Timestamp::now(self.clock.as_ref(), self.timezone);

        let payload = match *method {
            Method::GET => placeholder_payload(&timestamp),
            Method::POST => upload_payload(content_type, body, &timestamp)?,
            _ => return Err(Error::MethodNotAllowed),
        };

        info!(
            "Relaying {} byte photo to chat {}",
            payload.photo.len(),
            credentials.chat_id
        );

        let reply = self.client.send_photo(&credentials, &payload).await?;
        reply.into_result()
    }
}

fn placeholder_payload(timestamp: &Timestamp) -> PhotoPayload {
    PhotoPayload {
        photo: Bytes::from(placeholder::render_svg(&timestamp.long)),
        caption: placeholder::cron_caption(&timestamp.long),
    }
}

/// Photo bytes of an upload: the first file part of a multipart body, or the
/// raw body verbatim for any other content type.
pub fn extract_upload(content_type: Option<&str>, body: Bytes) -> Result<Bytes> {
    let content_type = content_type.unwrap_or_default();

    let photo = if multipart::is_multipart(content_type) {
        let boundary =
            multipart::boundary_from_content_type(content_type).ok_or(Error::InvalidMultipart)?;
        multipart::extract_file(&body, boundary)
            .map(|file| body.slice_ref(file))
            .unwrap_or_default()
    } else {
        body
    };

    if photo.is_empty() {
        return Err(Error::NoPhoto);
    }

    Ok(photo)
}

fn upload_payload(
    content_type: Option<&str>,
    body: Bytes,
    timestamp: &Timestamp,
) -> Result<PhotoPayload> {
    Ok(PhotoPayload {
        photo: extract_upload(content_type, body)?,
        caption: placeholder::upload_caption(&timestamp.short),
    })
}
