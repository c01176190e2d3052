//! Paginated comment collection.
//!
//! Follows `paging.next` links until the server stops supplying them,
//! pausing between page fetches to stay clear of upstream rate limits.
//! A fetch failure mid-pagination degrades to partial results; collection
//! never propagates an error to the caller.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error};

use instagram_client::Comment;

use crate::traits::CommentSource;

pub struct CommentCollector<'a, S: CommentSource> {
    source: &'a S,
    page_delay: Duration,
}

impl<'a, S: CommentSource> CommentCollector<'a, S> {
    pub fn new(source: &'a S, page_delay: Duration) -> Self {
        Self { source, page_delay }
    }

    /// Fetch every comment on a media object, in page-arrival order.
    pub async fn fetch_all(&self, media_id: i64) -> Vec<Comment> {
        let mut comments: Vec<Comment> = Vec::new();

        let mut page = match self.source.first_page(media_id).await {
            Ok(page) => page,
            Err(err) => {
                error!(media_id, %err, "Error fetching comments");
                return comments;
            }
        };

        loop {
            debug!(
                page_comments = page.data.len(),
                total = comments.len() + page.data.len(),
                "Fetched comments page"
            );
            let next = page.next_url().map(str::to_string);
            comments.extend(page.data);

            let Some(next_url) = next else { break };

            // Pacing only when another fetch follows; the final page needs
            // no cooldown.
            sleep(self.page_delay).await;

            page = match self.source.page_at(&next_url).await {
                Ok(page) => page,
                Err(err) => {
                    error!(%err, "Error fetching comments, returning partial results");
                    break;
                }
            };
        }

        comments
    }
}
