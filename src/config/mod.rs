mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = load_file(explicit_path.as_deref()).await?;

    apply_env_overrides(&mut config, |key| env::var(key).ok());

    Ok(config)
}

/// Reads the YAML file at `path`, or `config.yaml` when no path is given.
/// Only the implicit default file may be absent.
pub async fn load_file(path: Option<&str>) -> Result<Config> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if path.is_none() && !Path::new(config_path).exists() {
        debug!("No {} found, using default configuration", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = lookup("TELEGRAM_BOT_TOKEN") {
        config.telegram.bot_token = Some(token);
    }
    if let Some(chat_id) = lookup("TELEGRAM_CHAT_ID") {
        config.telegram.chat_id = Some(chat_id);
    }
}
