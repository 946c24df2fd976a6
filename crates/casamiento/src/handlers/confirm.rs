//! RSVP submission proxy (`POST /api/confirm`).

use std::path::PathBuf;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use casamiento_core::{ForwardedRecord, RsvpSubmission};

use crate::{audit, state::AppState};

/// Accepts an RSVP submission, forwards it to the spreadsheet processor and
/// returns a normalized acknowledgment.
///
/// - Unparsable body: 400 `{ok:false, error:"Invalid request"}`.
/// - Upstream 2xx: 200 `{ok:true, forwarded:true, googleResponse}`.
/// - Anything else (non-2xx, network failure): 502 with `forwarded:false`.
///
/// The audit append runs detached; its failure never changes the response.
/// No retries, no deduplication: a client that submits twice is recorded
/// twice.
#[axum::debug_handler]
pub async fn confirm(State(state): State<AppState>, body: Bytes) -> Response {
    let document: Value = match serde_json::from_slice(&body) {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!(error = %err, "rejected unparsable RSVP body");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "ok": false, "error": "Invalid request" })),
            )
                .into_response();
        }
    };

    // Lenient: any JSON document is accepted, field by field. A mistyped
    // field degrades to empty on its own; its siblings still forward.
    let submission = RsvpSubmission::from_value(&document);
    let record = ForwardedRecord::from_submission(&submission);

    let forward_result = state
        .http
        .post(&state.config.forward_url)
        .json(&record)
        .send()
        .await;

    audit::spawn_append(PathBuf::from(&state.config.log_path), record);

    let (forwarded, upstream_body) = match forward_result {
        Ok(response) => {
            let forwarded = response.status().is_success();
            if !forwarded {
                tracing::warn!(status = %response.status(), "forward endpoint returned an error status");
            }
            // Body read failures are swallowed; the text is best-effort.
            (forwarded, response.text().await.unwrap_or_default())
        }
        Err(err) => {
            tracing::error!(error = %err, "forward request failed");
            (false, String::new())
        }
    };

    let status = if forwarded {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    (
        status,
        Json(json!({
            "ok": true,
            "forwarded": forwarded,
            "googleResponse": upstream_body,
        })),
    )
        .into_response()
}
