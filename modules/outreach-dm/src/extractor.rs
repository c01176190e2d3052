use std::collections::HashSet;

use instagram_client::Comment;

/// Collect the distinct commenter ids, in first-seen order.
///
/// Comments without an author block are skipped. First-seen ordering keeps
/// the downstream dispatch (and its log) deterministic.
pub fn unique_commenters(comments: &[Comment]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut users = Vec::new();

    for comment in comments {
        if let Some(id) = comment.author_id() {
            if seen.insert(id) {
                users.push(id.to_string());
            }
        }
    }

    users
}
