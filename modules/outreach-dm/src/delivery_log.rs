//! Delivery log — persisted JSON record of every recipient's terminal outcome.
//!
//! Each run fully overwrites `dm_log.json` in the working directory with an
//! ordered array of `{userId, status, reason, timestamp}` objects. Records
//! are timestamped at serialization time.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::dispatcher::{DeliveryResult, DeliveryStatus};

/// Fixed output file name.
pub const LOG_FILE: &str = "dm_log.json";

#[derive(Serialize)]
struct LogRecord<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    timestamp: DateTime<Utc>,
}

/// Write the delivery log to [`LOG_FILE`]. A filesystem failure propagates —
/// losing the run record is not something to paper over.
pub fn save(results: &[DeliveryResult]) -> Result<PathBuf> {
    save_to(Path::new(LOG_FILE), results)
}

pub fn save_to(path: &Path, results: &[DeliveryResult]) -> Result<PathBuf> {
    let records: Vec<LogRecord> = results
        .iter()
        .map(|r| LogRecord {
            user_id: &r.user_id,
            status: r.status,
            reason: r.reason.as_deref(),
            timestamp: Utc::now(),
        })
        .collect();

    std::fs::write(path, serde_json::to_string_pretty(&records)?)?;
    info!(path = %path.display(), records = records.len(), "Delivery log saved");

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(user_id: &str, status: DeliveryStatus, reason: Option<&str>) -> DeliveryResult {
        DeliveryResult {
            user_id: user_id.to_string(),
            status,
            reason: reason.map(String::from),
        }
    }

    #[test]
    fn writes_ordered_records_with_expected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);

        let results = vec![
            result("a", DeliveryStatus::Success, None),
            result("b", DeliveryStatus::Failed, Some("RateLimit")),
        ];
        save_to(&path, &results).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["userId"], "a");
        assert_eq!(records[0]["status"], "Success");
        assert!(records[0].get("reason").is_none());
        assert!(records[0]["timestamp"].is_string());

        assert_eq!(records[1]["userId"], "b");
        assert_eq!(records[1]["status"], "Failed");
        assert_eq!(records[1]["reason"], "RateLimit");
    }

    #[test]
    fn overwrites_previous_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);

        save_to(&path, &[result("a", DeliveryStatus::Success, None)]).unwrap();
        save_to(&path, &[result("b", DeliveryStatus::Failed, Some("nope"))]).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["userId"], "b");
    }

    #[test]
    fn empty_run_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);

        save_to(&path, &[]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "[]");
    }

    #[test]
    fn write_failure_propagates() {
        let results = vec![result("a", DeliveryStatus::Success, None)];
        assert!(save_to(Path::new("/nonexistent-dir/dm_log.json"), &results).is_err());
    }
}
