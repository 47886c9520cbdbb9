use crate::jobs::{JobContext, publish_best_effort};
use crate::model::{JobError, PostId};
use crate::report::format_daily_stats;
use tracing::info;

pub async fn run(ctx: &JobContext<'_>) -> Result<Option<PostId>, JobError> {
    info!("Generating daily stats...");
    let data = ctx.source.fetch_bootstrap().await?;
    let text = format_daily_stats(&data);
    publish_best_effort(ctx.publisher, &text).await
}
