use crate::jobs::{JobContext, publish_best_effort};
use crate::model::{JobError, PostId};
use crate::report::format_gameweek_results;
use tracing::info;

/// Returns `Ok(None)` both when there is nothing to post and when the post was simulated.
pub async fn run(ctx: &JobContext<'_>) -> Result<Option<PostId>, JobError> {
    info!("Generating gameweek results...");
    let data = ctx.source.fetch_bootstrap().await?;

    match format_gameweek_results(&data) {
        Some(text) => publish_best_effort(ctx.publisher, &text).await,
        None => {
            info!("No finished gameweek data available");
            Ok(None)
        }
    }
}
