//! Telegram Bot API client module
//!
//! Encapsulates the outbound `sendMessage` call and its error handling.

use reqwest::Client;
use std::time::Duration;

use crate::core::models::SendMessage;
use crate::errors::BotError;

/// Base URL of the Telegram Bot API.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Build the URL for a Bot API method call.
///
/// The token is a path parameter, so an empty token still yields a
/// syntactically valid (but unauthorized) URL.
#[must_use]
pub fn build_method_url(api_base: &str, token: &str, method: &str) -> String {
    format!("{api_base}/bot{token}/{method}")
}

/// Thin client for the Telegram Bot API.
pub struct TelegramClient {
    api_base: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_base(TELEGRAM_API_BASE)
    }

    /// Point the client at a different API host, e.g. a local mock.
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Send one message and return the API's raw JSON response body.
    ///
    /// # Errors
    ///
    /// Returns `BotError::HttpError` if the request cannot be completed and
    /// `BotError::ApiError` if the API answers with a non-success status.
    pub async fn send_message(
        &self,
        token: &str,
        reply: &SendMessage,
    ) -> Result<String, BotError> {
        let url = build_method_url(&self.api_base, token, "sendMessage");

        let response = HTTP_CLIENT.post(url).json(reply).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BotError::ApiError(format!(
                "sendMessage returned {status}: {body}"
            )));
        }

        Ok(body)
    }
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new()
    }
}
