use crate::model::FetchError;
use crate::parser::BootstrapData;

#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_bootstrap(&self) -> Result<BootstrapData, FetchError>;
}
