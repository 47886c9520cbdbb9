use crate::analyzer::Analyzer;
use crate::jobs::{JobContext, absorb_auth_failure};
use crate::model::{JobError, PostId};
use crate::normalizer::extract_snapshot;
use crate::report::format_price_changes;
use tracing::{info, warn};

#[derive(Debug, PartialEq)]
pub enum PriceRunOutcome {
    /// No stored snapshot yet; the current prices became the baseline.
    Bootstrap,
    NoChange,
    Changed {
        risers: usize,
        fallers: usize,
        post_id: Option<PostId>,
    },
}

/// Compares live prices against the stored snapshot and posts the movers.
///
/// The live snapshot replaces the stored one at the end of the run, also when
/// publishing failed, unless `hold_baseline_on_publish_failure` is set.
pub async fn run(
    ctx: &JobContext<'_>,
    analyzer: &impl Analyzer,
) -> Result<PriceRunOutcome, JobError> {
    info!("Checking for price changes...");

    let data = ctx.source.fetch_bootstrap().await?;
    let current = extract_snapshot(&data);
    let previous = ctx.store.load()?;

    if previous.is_empty() {
        info!("No previous prices found. Saving current prices for next run.");
        ctx.store.save(&current)?;
        return Ok(PriceRunOutcome::Bootstrap);
    }

    let diff = analyzer.find_price_changes(&previous, &current);
    let Some(text) = format_price_changes(&diff) else {
        info!("No price changes detected");
        ctx.store.save(&current)?;
        return Ok(PriceRunOutcome::NoChange);
    };

    info!(
        "Found {} risers and {} fallers",
        diff.risers.len(),
        diff.fallers.len()
    );

    let published = ctx.publisher.publish(&text).await;
    if published.is_err() && ctx.hold_baseline_on_publish_failure {
        warn!("Publish failed, keeping previous prices as baseline");
    } else {
        ctx.store.save(&current)?;
    }

    let post_id = absorb_auth_failure(published)?;

    Ok(PriceRunOutcome::Changed {
        risers: diff.risers.len(),
        fallers: diff.fallers.len(),
        post_id,
    })
}
