//! Webhook Notifier
//!
//! Implements CompletionNotifier with an outbound HTTP GET to the
//! configured remote. Best effort: transport errors and non-2xx statuses
//! are logged and swallowed so the consumer loop never sees them.

use crate::domain::ports::CompletionNotifier;
use async_trait::async_trait;

/// Pings `<base>/<uuid>/ready` when an outcome is stored.
pub struct WebhookNotifier {
    client: reqwest::Client,
    base_url: String,
}

impl WebhookNotifier {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn ready_url(&self, uuid: &str) -> String {
        format!("{}/{}/ready", self.base_url, uuid)
    }
}

#[async_trait]
impl CompletionNotifier for WebhookNotifier {
    async fn notify(&self, uuid: &str) {
        let url = self.ready_url(uuid);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!("webhook delivered for [{}]: {}", uuid, resp.status());
            }
            Ok(resp) => {
                tracing::warn!("webhook for [{}] answered {}", uuid, resp.status());
            }
            Err(e) => {
                tracing::warn!("webhook for [{}] failed: {}", uuid, e);
            }
        }
    }
}
