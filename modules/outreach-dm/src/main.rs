use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use instagram_client::{extract_short_code, short_code_to_media_id, InstagramClient};
use outreach_dm::collector::CommentCollector;
use outreach_dm::config::Config;
use outreach_dm::delivery_log;
use outreach_dm::dispatcher::{DeliveryStatus, Dispatcher};
use outreach_dm::extractor::unique_commenters;

/// Post whose commenters get messaged. Placeholder — replace with a real post URL.
const POST_URL: &str = "https://www.instagram.com/p/example-post-id/";

/// Message sent to every commenter. Placeholder.
const MESSAGE: &str = "Thank you for your comment!";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("outreach_dm=info".parse()?))
        .init();

    info!("Outreach DM run starting...");

    // Load config
    let config = Config::from_env();
    let client = InstagramClient::new(config.access_token.clone());

    // Resolve the post. A malformed URL is the one error that aborts the run.
    let short_code = extract_short_code(POST_URL)?;
    let media_id = short_code_to_media_id(&short_code);
    info!(short_code = short_code.as_str(), media_id, "Resolved post");

    // Collect commenters
    let collector = CommentCollector::new(&client, config.request_delay);
    let comments = collector.fetch_all(media_id).await;
    let user_ids = unique_commenters(&comments);
    info!(
        comments = comments.len(),
        users = user_ids.len(),
        "Comment collection finished"
    );

    // Dispatch DMs
    let dispatcher = Dispatcher::new(&client, config.request_delay, config.batch_size);
    let results = dispatcher.send_to_all(&user_ids, MESSAGE).await;

    let sent = results
        .iter()
        .filter(|r| r.status == DeliveryStatus::Success)
        .count();
    let failed = results.len() - sent;

    delivery_log::save(&results)?;
    info!(sent, failed, "Outreach DM run complete");

    Ok(())
}
