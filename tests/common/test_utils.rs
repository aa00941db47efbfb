use super::mocks::MockTelegramClient;
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use photo_relay::{
    clock::FixedClock,
    config::TelegramConfig,
    relay::RelayService,
    server::{self, handlers::AppState},
};
use std::sync::Arc;

pub const TEST_BOT_TOKEN: &str = "123456:test-token";
pub const TEST_CHAT_ID: &str = "-1001234567890";
pub const TEST_BOUNDARY: &str = "----TestBoundary7MA4YWxk";
pub const TEST_MAX_BODY_BYTES: usize = 1024 * 1024;

/// 2026-10-19 10:04:05 UTC, 3:04:05 PM in Karachi
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 10, 4, 5).unwrap()
}

/// Telegram config with fake credentials
pub fn create_test_telegram_config() -> TelegramConfig {
    TelegramConfig {
        bot_token: Some(TEST_BOT_TOKEN.to_string()),
        chat_id: Some(TEST_CHAT_ID.to_string()),
        api_base_url: "http://127.0.0.1:9".to_string(),
    }
}

/// Telegram config without any credentials
pub fn create_unconfigured_telegram_config() -> TelegramConfig {
    TelegramConfig::default()
}

pub fn create_test_relay(telegram: TelegramConfig, client: MockTelegramClient) -> RelayService {
    RelayService::new(
        telegram,
        Arc::new(client),
        Arc::new(FixedClock(test_instant())),
        chrono_tz::Asia::Karachi,
    )
}

pub fn create_test_app(telegram: TelegramConfig, client: MockTelegramClient) -> Router {
    let state = AppState {
        relay: Arc::new(create_test_relay(telegram, client)),
    };
    server::router(state, TEST_MAX_BODY_BYTES)
}

/// Browser-style multipart body with a note field and one file part
pub fn multipart_upload_body(boundary: &str, photo: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n");
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"photo\"; filename=\"cat.jpg\"\r\n\
Content-Type: image/jpeg\r\n\r\n",
    );
    body.extend_from_slice(photo);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// Multipart body carrying only a text field
pub fn multipart_text_only_body(boundary: &str) -> Vec<u8> {
    format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nno file here\r\n--{boundary}--\r\n"
    )
    .into_bytes()
}

pub fn multipart_content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

/// Bytes that look like a JPEG and contain CRLFs and NULs
pub fn sample_jpeg() -> Vec<u8> {
    let mut photo = vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    photo.extend_from_slice(b"\r\n\r\n--not-a-boundary\r\n");
    photo.extend((0..=255u8).rev());
    photo.extend_from_slice(&[0xff, 0xd9]);
    photo
}
