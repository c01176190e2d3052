pub mod error;
pub mod shortcode;
pub mod types;

pub use error::{InstagramError, Result};
pub use shortcode::{extract_short_code, short_code_to_media_id};
pub use types::{Comment, CommentAuthor, CommentsPage, Paging, SendDmRequest};

use std::time::Duration;

/// Base URL for media reads (comment listing).
const GRAPH_BASE_URL: &str = "https://graph.instagram.com";

/// Send API endpoint for direct messages.
const MESSAGES_URL: &str = "https://graph.facebook.com/v12.0/me/messages";

pub struct InstagramClient {
    client: reqwest::Client,
    access_token: String,
}

impl InstagramClient {
    pub fn new(access_token: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            access_token,
        }
    }

    /// URL of the first comments page for a media object.
    pub fn comments_url(&self, media_id: i64) -> String {
        format!(
            "{}/{}/comments?access_token={}",
            GRAPH_BASE_URL, media_id, self.access_token
        )
    }

    /// Fetch one page of comments. `url` is either [`comments_url`] or a
    /// server-supplied `paging.next` link (which already carries the token).
    ///
    /// [`comments_url`]: InstagramClient::comments_url
    pub async fn comments_page(&self, url: &str) -> Result<CommentsPage> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InstagramError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: CommentsPage = resp.json().await?;
        Ok(page)
    }

    /// Send a direct message to one user. Success is an HTTP 200; a 429 is
    /// surfaced as [`InstagramError::RateLimited`] so callers can apply their
    /// no-retry policy to it.
    pub async fn send_dm(&self, user_id: &str, text: &str) -> Result<()> {
        let url = format!("{}?access_token={}", MESSAGES_URL, self.access_token);
        let body = SendDmRequest::new(user_id, text);

        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(InstagramError::RateLimited);
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(InstagramError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(user_id, "DM sent");
        Ok(())
    }
}
