use crate::config::AppConfig;
use crate::model::FetchError;
use crate::parser::{BootstrapData, BootstrapParser, Parser};
use crate::scraper::traits::DataSource;

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::info;

pub struct FplClient {
    client: Client,
    base_url: String,
    parser: BootstrapParser,
}

impl FplClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) FplBot/0.1")
            .timeout(Duration::from_secs(config.fetch_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            parser: BootstrapParser::new(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}/", self.base_url, endpoint)
    }
}

/// Any non-2xx answer from the data source fails the fetch.
pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

#[async_trait::async_trait]
impl DataSource for FplClient {
    async fn fetch_bootstrap(&self) -> Result<BootstrapData, FetchError> {
        let url = self.build_url("bootstrap-static");
        info!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        check_status(response.status())?;

        let body = response.text().await?;
        let data = self.parser.parse(&body)?;
        info!(
            "Fetched {} players, {} teams, {} gameweeks",
            data.elements.len(),
            data.teams.len(),
            data.events.len()
        );
        Ok(data)
    }
}
