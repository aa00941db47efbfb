pub mod handlers;

use crate::{
    Result,
    clock::SystemClock,
    config::Config,
    relay::RelayService,
    telegram::HttpTelegramClient,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, header},
    routing::any,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{info, warn};

pub const SEND_IMAGE_PATH: &str = "/api/send-image";

const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Routes plus the layers every response goes through.
pub fn router(state: handlers::AppState, max_body_bytes: usize) -> Router {
    let mut app = Router::new()
        .route(SEND_IMAGE_PATH, any(handlers::send_image))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes));

    for (name, value) in CORS_HEADERS {
        app = app.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }

    app.layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let timezone = config.relay.tz()?;

    if config.telegram.credentials().is_err() {
        warn!("Telegram credentials are not configured; relay requests will fail");
    }

    let client = HttpTelegramClient::new(&config.telegram);
    let relay = RelayService::new(
        config.telegram.clone(),
        Arc::new(client),
        Arc::new(SystemClock),
        timezone,
    );

    let app_state = handlers::AppState {
        relay: Arc::new(relay),
    };

    let app = router(app_state, config.server.max_body_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
