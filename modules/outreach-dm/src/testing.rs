// Test mocks for the outreach pipeline.
//
// Two mocks matching the two trait boundaries:
// - PagedCommentSource (CommentSource) — HashMap-based page graph
// - ScriptedSender (MessageSender) — per-user scripted outcomes, records calls
//
// Plus helpers for constructing comments and API errors.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use instagram_client::{Comment, CommentAuthor, CommentsPage, InstagramError, Paging, Result};

use crate::traits::{CommentSource, MessageSender};

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

/// A comment authored by `user_id`.
pub fn comment(user_id: &str) -> Comment {
    Comment {
        id: Some(format!("comment-by-{user_id}")),
        text: Some("nice post".to_string()),
        from: Some(CommentAuthor {
            id: user_id.to_string(),
            username: None,
        }),
    }
}

/// A comment with no author block (deleted or restricted account).
pub fn comment_without_author() -> Comment {
    Comment {
        id: None,
        text: Some("nice post".to_string()),
        from: None,
    }
}

/// An `Api` error whose payload names the status, for reason assertions.
pub fn api_error(status: u16) -> InstagramError {
    InstagramError::Api {
        status,
        message: format!("upstream {status}"),
    }
}

fn page(comments: Vec<Comment>, next: Option<&str>) -> CommentsPage {
    CommentsPage {
        data: comments,
        paging: next.map(|url| Paging {
            next: Some(url.to_string()),
        }),
    }
}

// ---------------------------------------------------------------------------
// PagedCommentSource
// ---------------------------------------------------------------------------

/// HashMap-based comment source. Returns an `Api` error for unregistered
/// pages, so an unconfigured source behaves like a failing upstream.
/// Builder pattern: `.on_first_page()`, `.on_next_page()`, `.on_next_page_err()`.
#[derive(Default)]
pub struct PagedCommentSource {
    first_pages: Mutex<HashMap<i64, Result<CommentsPage>>>,
    pages: Mutex<HashMap<String, Result<CommentsPage>>>,
}

impl PagedCommentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_first_page(self, media_id: i64, comments: Vec<Comment>, next: Option<&str>) -> Self {
        self.first_pages
            .lock()
            .unwrap()
            .insert(media_id, Ok(page(comments, next)));
        self
    }

    pub fn on_next_page(self, url: &str, comments: Vec<Comment>, next: Option<&str>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(page(comments, next)));
        self
    }

    pub fn on_next_page_err(self, url: &str, err: InstagramError) -> Self {
        self.pages.lock().unwrap().insert(url.to_string(), Err(err));
        self
    }

    fn not_registered(what: &str) -> InstagramError {
        InstagramError::Api {
            status: 404,
            message: format!("PagedCommentSource: no page registered for {what}"),
        }
    }
}

#[async_trait]
impl CommentSource for PagedCommentSource {
    async fn first_page(&self, media_id: i64) -> Result<CommentsPage> {
        self.first_pages
            .lock()
            .unwrap()
            .remove(&media_id)
            .unwrap_or_else(|| Err(Self::not_registered(&media_id.to_string())))
    }

    async fn page_at(&self, url: &str) -> Result<CommentsPage> {
        self.pages
            .lock()
            .unwrap()
            .remove(url)
            .unwrap_or_else(|| Err(Self::not_registered(url)))
    }
}

// ---------------------------------------------------------------------------
// ScriptedSender
// ---------------------------------------------------------------------------

/// Message sender with per-user scripted outcomes. Every call is recorded;
/// users without a script (or past the end of theirs) succeed.
#[derive(Default)]
pub struct ScriptedSender {
    scripts: Mutex<HashMap<String, VecDeque<Result<()>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcomes of consecutive send attempts for one user.
    pub fn on_send(self, user_id: &str, outcomes: Vec<Result<()>>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(user_id.to_string(), outcomes.into());
        self
    }

    /// Every recorded call, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, user_id: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == user_id).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageSender for ScriptedSender {
    async fn send_dm(&self, user_id: &str, _text: &str) -> Result<()> {
        self.calls.lock().unwrap().push(user_id.to_string());
        self.scripts
            .lock()
            .unwrap()
            .get_mut(user_id)
            .and_then(|script| script.pop_front())
            .unwrap_or(Ok(()))
    }
}
