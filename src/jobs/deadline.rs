use crate::analyzer::gameweek::next_deadline;
use crate::jobs::{JobContext, publish_best_effort};
use crate::model::{JobError, PostId};
use crate::report::{format_deadline_reminder, reminder_window};
use crate::utils::{format_time_until, hours_until};
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Debug, PartialEq)]
pub enum DeadlineOutcome {
    NoUpcomingDeadline,
    NotDue { time_until: String },
    Reminded { gameweek: u32, post_id: Option<PostId> },
}

/// Posts a reminder when `now` falls in one of the reminder windows, or always with `force`.
pub async fn run(
    ctx: &JobContext<'_>,
    now: DateTime<Utc>,
    force: bool,
) -> Result<DeadlineOutcome, JobError> {
    info!("Checking deadline...");

    let data = ctx.source.fetch_bootstrap().await?;
    let Some((gameweek, deadline)) = next_deadline(&data.events)? else {
        info!("No upcoming deadline found");
        return Ok(DeadlineOutcome::NoUpcomingDeadline);
    };
    info!("Next deadline: GW{} at {}", gameweek, deadline);

    let time_until = format_time_until(deadline, now);
    let label = match (reminder_window(hours_until(deadline, now)), force) {
        (_, true) => time_until.clone(),
        (Some(window), false) => window.to_string(),
        (None, false) => {
            info!("No reminder needed right now. Deadline in {}", time_until);
            return Ok(DeadlineOutcome::NotDue { time_until });
        }
    };

    let text = format_deadline_reminder(gameweek, deadline, &label, &time_until);
    let post_id = publish_best_effort(ctx.publisher, &text).await?;
    Ok(DeadlineOutcome::Reminded { gameweek, post_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::fakes::{FixedSource, MemoryStore, RecordingPublisher, Reply};
    use crate::parser::BootstrapData;
    use crate::parser::bootstrap_parser::fixtures::event;
    use crate::utils::parse_datetime;

    fn source() -> FixedSource {
        let mut gw = event(12, "2024-11-23T11:00:00Z");
        gw.is_next = true;
        FixedSource(BootstrapData {
            elements: vec![],
            teams: vec![],
            events: vec![gw],
        })
    }

    async fn check(now: &str, force: bool, publisher: &RecordingPublisher) -> DeadlineOutcome {
        let source = source();
        let store = MemoryStore::default();
        let ctx = JobContext {
            source: &source,
            publisher,
            store: &store,
            hold_baseline_on_publish_failure: false,
        };
        run(&ctx, parse_datetime(now).unwrap(), force).await.unwrap()
    }

    #[tokio::test]
    async fn reminds_inside_six_hour_window() {
        let publisher = RecordingPublisher::new(Reply::Posted);
        let outcome = check("2024-11-23T05:00:00Z", false, &publisher).await;

        assert_eq!(
            outcome,
            DeadlineOutcome::Reminded {
                gameweek: 12,
                post_id: Some("42".into()),
            }
        );
        let posts = publisher.posts();
        assert!(posts[0].contains("Gameweek 12 deadline in 6 hours!"));
        assert!(posts[0].contains("⏳ 6h 0m remaining"));
    }

    #[tokio::test]
    async fn outside_windows_nothing_is_posted() {
        let publisher = RecordingPublisher::new(Reply::Posted);
        let outcome = check("2024-11-22T23:00:00Z", false, &publisher).await;

        assert_eq!(
            outcome,
            DeadlineOutcome::NotDue {
                time_until: "12h 0m".into()
            }
        );
        assert!(publisher.posts().is_empty());
    }

    #[tokio::test]
    async fn force_uses_time_left_as_label() {
        let publisher = RecordingPublisher::new(Reply::Posted);
        check("2024-11-20T09:00:00Z", true, &publisher).await;

        assert!(publisher.posts()[0].contains("Gameweek 12 deadline in 3d 2h!"));
    }

    #[tokio::test]
    async fn auth_failure_is_absorbed() {
        let publisher = RecordingPublisher::new(Reply::Unauthorized);
        let outcome = check("2024-11-23T10:00:00Z", false, &publisher).await;
        assert_eq!(
            outcome,
            DeadlineOutcome::Reminded {
                gameweek: 12,
                post_id: None,
            }
        );
    }
}
