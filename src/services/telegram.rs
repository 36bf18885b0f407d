//! Telegram Bot API notifier.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::DEFAULT_TELEGRAM_BASE_URL;
use crate::services::error::ServiceError;
use crate::services::notifier::Notifier;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_TELEGRAM_BASE_URL, token, chat_id)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(self.send_message_url())
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Telegram sendMessage rejected");
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = status.as_u16(), "Telegram message sent");
        Ok(())
    }
}
