//! Bot API client bound to one token and one destination chat.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::TelegramError;

/// Production endpoint for the Telegram Bot API.
const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Format a post as HTML: bold title, blank line, body.
///
/// Title and text are inserted verbatim; the calendar is trusted authored
/// content and may itself contain HTML markup.
pub fn format_post(title: &str, text: &str) -> String {
    format!("<b>{}</b>\n\n{}", title, text)
}

/// Client for sending messages to a single chat or channel.
pub struct TelegramClient {
    http: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    /// Create a client against the production Bot API endpoint.
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(TELEGRAM_BASE_URL, token, chat_id)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Chat this client publishes to.
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send a post to the configured chat.
    ///
    /// The message is HTML-formatted with the link preview disabled. A
    /// non-success response becomes [`TelegramError::Api`] carrying the
    /// status code and response body, and is returned to the caller rather
    /// than swallowed.
    pub async fn send_post(&self, title: &str, text: &str) -> Result<(), TelegramError> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            chat_id: &'a str,
            text: String,
            parse_mode: &'a str,
            disable_web_page_preview: bool,
        }

        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        debug!(chat_id = %self.chat_id, title, "sending message");

        let response = self
            .http
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text: format_post(title, text),
                parse_mode: "HTML",
                disable_web_page_preview: true,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TelegramError::Api { status, body });
        }

        Ok(())
    }
}
