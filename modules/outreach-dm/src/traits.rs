// Trait abstractions over the Graph API client.
//
// CommentSource covers paginated comment reads; MessageSender covers DM
// delivery. These let the collector and dispatcher run against scripted
// in-memory mocks: no network, no token, `cargo test` in seconds.

use async_trait::async_trait;

use instagram_client::{CommentsPage, InstagramClient, Result};

#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch the first comments page for a media object.
    async fn first_page(&self, media_id: i64) -> Result<CommentsPage>;

    /// Fetch a subsequent page via a server-supplied `paging.next` URL.
    async fn page_at(&self, url: &str) -> Result<CommentsPage>;
}

#[async_trait]
impl CommentSource for InstagramClient {
    async fn first_page(&self, media_id: i64) -> Result<CommentsPage> {
        self.comments_page(&self.comments_url(media_id)).await
    }

    async fn page_at(&self, url: &str) -> Result<CommentsPage> {
        self.comments_page(url).await
    }
}

#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Issue a single DM send attempt. Retry policy lives in the dispatcher,
    /// not here.
    async fn send_dm(&self, user_id: &str, text: &str) -> Result<()>;
}

#[async_trait]
impl MessageSender for InstagramClient {
    async fn send_dm(&self, user_id: &str, text: &str) -> Result<()> {
        InstagramClient::send_dm(self, user_id, text).await
    }
}
