//! Two-tier confirmation read pipeline.
//!
//! Strategies run strictly in order: the structured Apps Script JSON
//! endpoint first, the public spreadsheet gviz export only after the first
//! has definitively failed. Each strategy fetches a raw body and hands it to
//! a pure parser in `casamiento_core`; every transition and outcome lands in
//! the operator log, never on the page.

use axum::http::StatusCode;
use thiserror::Error;

use casamiento_core::{parse_gviz_rows, parse_json_rows, ConfirmationRow, ReadError};

use crate::state::AppState;

/// Failure of a single read strategy.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("read endpoint is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Parse(#[from] ReadError),
}

/// Fetches confirmations, newest first.
///
/// Never fails: when every strategy fails the page renders its no-data
/// state from an empty vector.
pub async fn fetch_confirmations(state: &AppState) -> Vec<ConfirmationRow> {
    match fetch_apps_script(state).await {
        Ok(rows) => {
            tracing::info!(count = rows.len(), "confirmations read via Apps Script JSON");
            return rows;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Apps Script JSON read failed, falling back to sheet export");
        }
    }

    match fetch_sheet_export(state).await {
        Ok(rows) => {
            tracing::info!(count = rows.len(), "confirmations read via sheet gviz export");
            rows
        }
        Err(err) => {
            tracing::error!(error = %err, "all confirmation read strategies failed");
            Vec::new()
        }
    }
}

/// Strategy 1: configured Apps Script JSON endpoint.
async fn fetch_apps_script(state: &AppState) -> Result<Vec<ConfirmationRow>, FetchError> {
    let base = state
        .config
        .read_url
        .as_deref()
        .ok_or(FetchError::NotConfigured)?;
    let url = read_url_with_key(base, state.config.read_key.as_deref());

    let response = state.http.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(parse_json_rows(&response.text().await?)?)
}

/// Strategy 2: public spreadsheet gviz export.
async fn fetch_sheet_export(state: &AppState) -> Result<Vec<ConfirmationRow>, FetchError> {
    let url = state.config.gviz_url();

    let response = state.http.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(parse_gviz_rows(&response.text().await?)?)
}

/// Appends the access key as a `key` query parameter, respecting an
/// existing query string on the base URL.
fn read_url_with_key(base: &str, key: Option<&str>) -> String {
    match key {
        Some(key) if !key.is_empty() => {
            let separator = if base.contains('?') { '&' } else { '?' };
            format!("{base}{separator}key={}", urlencoding::encode(key))
        }
        _ => base.to_string(),
    }
}
