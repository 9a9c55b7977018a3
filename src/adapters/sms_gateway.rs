//! SMS delivery through an HTTP gateway such as 46elks.
//!
//! The gateway takes a form-encoded POST with `from`, `to` and `message`
//! fields, authenticated with HTTP basic auth.

use crate::config::toml_config::GatewayConfig;
use crate::core::Notifier;
use crate::utils::error::{Result, WatchError};
use async_trait::async_trait;
use reqwest::Client;

pub struct SmsGatewayNotifier {
    client: Client,
    config: GatewayConfig,
}

impl SmsGatewayNotifier {
    pub fn new(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Notifier for SmsGatewayNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        let form = [
            ("from", self.config.from.as_str()),
            ("to", self.config.to.as_str()),
            ("message", message),
        ];

        let response = self
            .client
            .post(&self.config.endpoint)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        // 讀完回應內容以釋放連線
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(WatchError::NotificationError {
                message: format!("gateway responded {}: {}", status, body.trim()),
            });
        }

        tracing::debug!("📨 SMS accepted by gateway ({})", status);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sms-gateway"
    }
}
