pub mod clock;
pub mod config;
pub mod error;
pub mod multipart;
pub mod placeholder;
pub mod relay;
pub mod server;
pub mod telegram;

pub use error::{Error, Result};
