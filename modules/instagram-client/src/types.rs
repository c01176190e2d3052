use serde::{Deserialize, Serialize};

// --- Comment listing ---

/// One page of the Graph API comments listing for a media object.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsPage {
    pub data: Vec<Comment>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl CommentsPage {
    /// URL of the next page, if the server supplied one.
    pub fn next_url(&self) -> Option<&str> {
        self.paging.as_ref().and_then(|p| p.next.as_deref())
    }
}

/// A single comment on a post. Only the author id is used downstream;
/// the rest is present on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub from: Option<CommentAuthor>,
}

impl Comment {
    pub fn author_id(&self) -> Option<&str> {
        self.from.as_ref().map(|a| a.id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentAuthor {
    pub id: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<String>,
}

// --- Direct message send ---

/// Request body for the `me/messages` send endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SendDmRequest {
    pub recipient: Recipient,
    pub message: MessageBody,
}

impl SendDmRequest {
    pub fn new(user_id: &str, text: &str) -> Self {
        Self {
            recipient: Recipient {
                id: user_id.to_string(),
            },
            message: MessageBody {
                text: text.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub text: String,
}
