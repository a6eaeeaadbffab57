//! Error types for the Telegram client.

use thiserror::Error;

/// Errors that can occur when sending messages via the Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API rejected the request.
    #[error("Telegram API error ({status}): {body}")]
    Api { status: u16, body: String },
}
