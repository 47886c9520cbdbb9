// One module per CLI command. Each job fetches, builds its post and publishes it.

pub mod daily_stats;
pub mod deadline;
pub mod gw_results;
pub mod price_changes;

use crate::model::{JobError, PostId, PublishError};
use crate::notifier::Publisher;
use crate::scraper::DataSource;
use crate::storage::SnapshotStore;
use tracing::warn;

/// Collaborators shared by the jobs, built once in `main`.
pub struct JobContext<'a> {
    pub source: &'a dyn DataSource,
    pub publisher: &'a dyn Publisher,
    pub store: &'a dyn SnapshotStore,
    pub hold_baseline_on_publish_failure: bool,
}

/// Exhausted auth retries are logged and dropped so the batch run carries on;
/// every other publish error stops the job.
pub(crate) fn absorb_auth_failure(
    published: Result<Option<PostId>, PublishError>,
) -> Result<Option<PostId>, JobError> {
    match published {
        Ok(id) => Ok(id),
        Err(e) if e.is_auth() => {
            warn!("Post dropped: {}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) async fn publish_best_effort(
    publisher: &dyn Publisher,
    text: &str,
) -> Result<Option<PostId>, JobError> {
    absorb_auth_failure(publisher.publish(text).await)
}
