// notifier/twitter/sender.rs

use crate::model::{PostId, PublishError};
use crate::notifier::twitter::{TwitterNotifier, oauth};
use chrono::Utc;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: CreatedTweet,
}

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    id: String,
}

/// Prints the post instead of sending it.
pub fn print_dry_run(text: &str) {
    println!("[DRY RUN] Would tweet:\n{}\n{}", text, "=".repeat(50));
}

/// Maps a non-success response to the publish error the retry policy works on.
pub fn check_status(status: StatusCode, body: &str) -> Result<(), PublishError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(PublishError::Unauthorized {
            attempts: 1,
            message: format!("[{}] {}", status, body),
        });
    }
    if !status.is_success() {
        return Err(PublishError::Api {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    Ok(())
}

/// Makes a single signed create-tweet call.
pub async fn send_tweet(notifier: &TwitterNotifier, text: &str) -> Result<PostId, PublishError> {
    let keys = notifier.credentials.signing_keys()?;
    let auth = oauth::authorization_header(
        &keys,
        "POST",
        &notifier.api_url,
        &[],
        &oauth::generate_nonce(),
        Utc::now().timestamp(),
    )?;

    let response = notifier
        .client
        .post(&notifier.api_url)
        .header(AUTHORIZATION, auth)
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| "unknown".into());
        warn!("❌ Twitter API responded [{}]: {}", status, body);
        check_status(status, &body)?;
        unreachable!("check_status rejects every non-success status");
    }

    let created: CreateTweetResponse = response.json().await?;
    info!("✅ Tweet posted: {}", created.data.id);
    Ok(created.data.id)
}

/// Runs `attempt` until it succeeds, retrying only authorization failures.
/// Gives up after `max_attempts` with the last auth error carrying the attempt count.
pub async fn retry_on_auth<F, Fut>(
    max_attempts: u32,
    delay: Duration,
    mut attempt: F,
) -> Result<PostId, PublishError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PostId, PublishError>>,
{
    let max_attempts = max_attempts.max(1);
    let mut tried = 0;
    loop {
        tried += 1;
        match attempt().await {
            Err(PublishError::Unauthorized { message, .. }) => {
                warn!("Attempt {}/{} failed: {}", tried, max_attempts, message);
                if tried >= max_attempts {
                    warn!("All retries failed. Skipping tweet.");
                    return Err(PublishError::Unauthorized {
                        attempts: tried,
                        message,
                    });
                }
                info!("Retrying in {}s...", delay.as_secs());
                sleep(delay).await;
            }
            other => return other,
        }
    }
}
