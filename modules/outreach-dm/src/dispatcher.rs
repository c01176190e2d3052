//! Batched DM dispatch with bounded retry.
//!
//! Recipients are messaged in fixed-size batches: every send in a batch is
//! fired concurrently, the batch is awaited as a whole, and a cooldown of
//! `delay * batch_size` separates consecutive batches. The cooldown
//! deliberately over-estimates the pacing the API needs.
//!
//! Per-send policy:
//! - HTTP 429 fails immediately with reason `"RateLimit"` — retrying a
//!   throttled call only compounds the throttling.
//! - Network errors and 5xx responses are retried up to [`MAX_RETRIES`]
//!   times with a fixed delay between attempts.
//! - Any other API error fails immediately with the upstream payload as
//!   the reason.

use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use tokio::time::sleep;
use tracing::{error, info, warn};

use instagram_client::InstagramError;

use crate::traits::MessageSender;

/// Retry budget per recipient (so at most `MAX_RETRIES + 1` send attempts).
pub const MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    Success,
    Failed,
}

/// Terminal outcome of one recipient's delivery, after retries exhaust.
#[derive(Debug, Clone)]
pub struct DeliveryResult {
    pub user_id: String,
    pub status: DeliveryStatus,
    pub reason: Option<String>,
}

impl DeliveryResult {
    fn success(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            status: DeliveryStatus::Success,
            reason: None,
        }
    }

    fn failed(user_id: &str, reason: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            status: DeliveryStatus::Failed,
            reason: Some(reason),
        }
    }
}

pub struct Dispatcher<'a, S: MessageSender> {
    sender: &'a S,
    delay: Duration,
    batch_size: usize,
}

impl<'a, S: MessageSender> Dispatcher<'a, S> {
    pub fn new(sender: &'a S, delay: Duration, batch_size: usize) -> Self {
        Self {
            sender,
            delay,
            batch_size,
        }
    }

    /// Message every user, one batch at a time. Returns one result per user,
    /// in input order.
    pub async fn send_to_all(&self, user_ids: &[String], message: &str) -> Vec<DeliveryResult> {
        let mut results = Vec::with_capacity(user_ids.len());

        let mut batches = user_ids.chunks(self.batch_size.max(1)).peekable();
        while let Some(batch) = batches.next() {
            info!(batch_users = batch.len(), "Dispatching DM batch");

            let sends = batch.iter().map(|user_id| self.send_with_retry(user_id, message));
            results.extend(join_all(sends).await);

            // Cooldown between batches only; nothing follows the last one.
            if batches.peek().is_some() {
                sleep(self.delay * self.batch_size as u32).await;
            }
        }

        results
    }

    /// Send to one user, retrying transient failures with a fixed delay.
    async fn send_with_retry(&self, user_id: &str, message: &str) -> DeliveryResult {
        let mut retries_left = MAX_RETRIES;

        loop {
            match self.sender.send_dm(user_id, message).await {
                Ok(()) => return DeliveryResult::success(user_id),

                Err(InstagramError::RateLimited) => {
                    error!(user_id, "Rate limit exceeded, not retrying");
                    return DeliveryResult::failed(user_id, "RateLimit".to_string());
                }

                Err(err) if err.is_transient() && retries_left > 0 => {
                    warn!(user_id, retries_left, %err, "Retrying DM send");
                    sleep(self.delay).await;
                    retries_left -= 1;
                }

                Err(err) => {
                    error!(user_id, %err, "Failed to send DM");
                    return DeliveryResult::failed(user_id, failure_reason(err));
                }
            }
        }
    }
}

/// Reason string recorded in the delivery log: the raw upstream payload for
/// API errors, the error display otherwise.
fn failure_reason(err: InstagramError) -> String {
    match err {
        InstagramError::Api { message, .. } if !message.is_empty() => message,
        other => other.to_string(),
    }
}
