pub mod oauth;
pub mod sender;

use crate::config::{AppConfig, TwitterCredentials};
use crate::model::{PostId, PublishError};
use crate::notifier::Publisher;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub struct TwitterNotifier {
    pub api_url: String,
    pub credentials: TwitterCredentials,
    pub client: Client,
    pub dry_run: bool,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl TwitterNotifier {
    /// The HTTP client uses `publish_timeout_seconds`, independent of the data source timeout.
    pub fn new(
        config: &AppConfig,
        credentials: TwitterCredentials,
        dry_run: bool,
    ) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.publish_timeout_seconds))
            .build()?;
        Ok(Self {
            api_url: config.twitter_api_url.clone(),
            credentials,
            client,
            dry_run,
            max_attempts: config.publish_max_retries,
            retry_delay: Duration::from_secs(config.publish_retry_delay_seconds),
        })
    }
}

#[async_trait::async_trait]
impl Publisher for TwitterNotifier {
    async fn publish(&self, text: &str) -> Result<Option<PostId>, PublishError> {
        if self.dry_run {
            sender::print_dry_run(text);
            return Ok(None);
        }

        info!("📤 Posting tweet ({} chars)", text.chars().count());
        let id = sender::retry_on_auth(self.max_attempts, self.retry_delay, || {
            sender::send_tweet(self, text)
        })
        .await?;
        Ok(Some(id))
    }
}
