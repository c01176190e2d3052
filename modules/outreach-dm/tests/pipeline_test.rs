//! Full pipeline run against mocked trait boundaries: paginated comments in,
//! delivery log out.

use std::time::Duration;

use instagram_client::{extract_short_code, short_code_to_media_id, InstagramError};
use outreach_dm::collector::CommentCollector;
use outreach_dm::delivery_log;
use outreach_dm::dispatcher::{DeliveryStatus, Dispatcher};
use outreach_dm::extractor::unique_commenters;
use outreach_dm::testing::{api_error, comment, comment_without_author, PagedCommentSource, ScriptedSender};

#[tokio::test]
async fn commenters_get_messaged_and_logged() {
    let post_url = "https://www.instagram.com/p/C-v2seOohTy/?igsh=c25veWxsazRpdnZy";
    let media_id = short_code_to_media_id(&extract_short_code(post_url).unwrap());

    // Two pages of comments; "alice" comments twice, one comment is anonymous.
    let source = PagedCommentSource::new()
        .on_first_page(
            media_id,
            vec![comment("alice"), comment("bob"), comment_without_author()],
            Some("page2"),
        )
        .on_next_page("page2", vec![comment("alice"), comment("carol")], None);

    let collector = CommentCollector::new(&source, Duration::ZERO);
    let comments = collector.fetch_all(media_id).await;
    assert_eq!(comments.len(), 5);

    let users = unique_commenters(&comments);
    assert_eq!(users, vec!["alice", "bob", "carol"]);

    // bob hits the rate limit; carol succeeds on the second attempt.
    let sender = ScriptedSender::new()
        .on_send("bob", vec![Err(InstagramError::RateLimited)])
        .on_send("carol", vec![Err(api_error(502)), Ok(())]);

    let dispatcher = Dispatcher::new(&sender, Duration::ZERO, 10);
    let results = dispatcher.send_to_all(&users, "Thank you for your comment!").await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, DeliveryStatus::Success);
    assert_eq!(results[1].status, DeliveryStatus::Failed);
    assert_eq!(results[1].reason.as_deref(), Some("RateLimit"));
    assert_eq!(results[2].status, DeliveryStatus::Success);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(delivery_log::LOG_FILE);
    delivery_log::save_to(&path, &results).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["userId"], "alice");
    assert_eq!(records[1]["userId"], "bob");
    assert_eq!(records[1]["reason"], "RateLimit");
    assert_eq!(records[2]["userId"], "carol");
}

#[tokio::test]
async fn collection_failure_still_messages_the_users_already_seen() {
    let source = PagedCommentSource::new()
        .on_first_page(7, vec![comment("alice")], Some("page2"))
        .on_next_page_err(
            "page2",
            InstagramError::Network("connection reset".to_string()),
        );

    let collector = CommentCollector::new(&source, Duration::ZERO);
    let comments = collector.fetch_all(7).await;

    let users = unique_commenters(&comments);
    assert_eq!(users, vec!["alice"]);

    let sender = ScriptedSender::new();
    let results = Dispatcher::new(&sender, Duration::ZERO, 10)
        .send_to_all(&users, "hi")
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, DeliveryStatus::Success);
}
