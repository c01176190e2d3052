use std::env;
use std::time::Duration;

use tracing::warn;

/// Application configuration loaded from environment variables.
///
/// The access token is read once here and threaded into the client at
/// construction; nothing reads the environment mid-run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Graph API access token. A missing token is not fatal at startup —
    /// requests will fail authentication downstream.
    pub access_token: String,

    /// Delay between paginated comment fetches and between send retries.
    pub request_delay: Duration,

    /// Number of DMs sent concurrently per batch.
    pub batch_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let access_token = env::var("ACCESS_TOKEN").unwrap_or_default();
        if access_token.is_empty() {
            warn!("ACCESS_TOKEN is not set; API requests will fail authentication");
        }

        Self {
            access_token,
            request_delay: Duration::from_millis(
                env::var("REQUEST_DELAY_MS")
                    .unwrap_or_else(|_| "2000".to_string())
                    .parse()
                    .expect("REQUEST_DELAY_MS must be a number"),
            ),
            batch_size: env::var("BATCH_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("BATCH_SIZE must be a number"),
        }
    }
}
