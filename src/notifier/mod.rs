pub mod twitter;

use crate::model::{PostId, PublishError};

pub use twitter::TwitterNotifier;

#[async_trait::async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes `text`. `Ok(None)` means the post was only simulated.
    async fn publish(&self, text: &str) -> Result<Option<PostId>, PublishError>;
}
