use crate::relay::{RelayOutcome, RelayService};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Method, header::CONTENT_TYPE},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
}

pub async fn send_image(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> RelayOutcome {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Could not read {} request body: {}", method, rejection.body_text());
            return RelayOutcome::Failed {
                status: rejection.status(),
                error: rejection.body_text(),
            };
        }
    };

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    info!(
        "Received {} request ({} bytes, content-type: {})",
        method,
        body.len(),
        content_type.unwrap_or("none")
    );

    state.relay.handle(&method, content_type, body).await
}
