//! Best-effort append-only RSVP audit log.
//!
//! One JSON object per line, written in a single write so concurrent
//! requests may interleave lines but never corrupt one. The append runs in
//! its own task with its own error boundary: a failure is traced for the
//! operator and never reaches the client response.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use casamiento_core::ForwardedRecord;

#[derive(Serialize)]
struct AuditLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    record: &'a ForwardedRecord,
}

/// Fire-and-forget append of one audit line.
pub fn spawn_append(path: PathBuf, record: ForwardedRecord) {
    tokio::spawn(async move {
        if let Err(err) = append(&path, &record).await {
            tracing::error!(
                error = %err,
                path = %path.display(),
                "failed to append RSVP audit line"
            );
        }
    });
}

/// Appends one timestamped line for the forwarded record.
pub async fn append(path: &Path, record: &ForwardedRecord) -> anyhow::Result<()> {
    let line = AuditLine {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        record,
    };
    let mut buffer = serde_json::to_string(&line)?;
    buffer.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    // One write per line keeps each line well-formed under interleaving.
    file.write_all(buffer.as_bytes()).await?;
    Ok(())
}
