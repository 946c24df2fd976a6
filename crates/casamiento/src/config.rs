use std::env;

/// Default Apps Script web-app deployment that receives forwarded RSVPs.
const DEFAULT_FORWARD_URL: &str =
    "https://script.google.com/macros/s/AKfycbyyNhBfZm-_Hr4cruZipNdndq8UcMbu8exuxrNTaoxbqdX4ishv-yW9NE_kmCP0AoQ/exec";

/// Default public spreadsheet used by the gviz fallback read.
const DEFAULT_SHEET_ID: &str = "14lELOMpTOphl16EGLZu1RQ9hCtkl7JXNa6GMj2ohoYI";

const DEFAULT_SHEET_BASE_URL: &str = "https://docs.google.com/spreadsheets";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint RSVP submissions are forwarded to.
    pub forward_url: String,
    /// Structured JSON read endpoint for confirmations (strategy 1).
    /// Unset means strategy 1 is skipped as a failed attempt.
    pub read_url: Option<String>,
    /// Access key appended to the JSON read endpoint as `?key=`.
    pub read_key: Option<String>,
    /// Spreadsheet identifier for the public gviz export (strategy 2).
    pub sheet_id: String,
    /// Base URL of the spreadsheet host. Only overridden in tests.
    pub sheet_base_url: String,
    /// Path of the local append-only RSVP audit log.
    pub log_path: String,
    /// Path of the content document the site is rendered from.
    pub content_path: String,
    /// Directory served under `/images`.
    pub images_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GOOGLE_APPS_SCRIPT_URL` - RSVP forward endpoint (default: deployed Apps Script)
    /// - `GOOGLE_APPS_SCRIPT_READ_URL` - JSON read endpoint (default: unset)
    /// - `GOOGLE_APPS_SCRIPT_READ_KEY` - access key for the read endpoint (default: unset)
    /// - `GOOGLE_SHEET_ID` - spreadsheet id for the gviz fallback (default: sample sheet)
    /// - `RSVP_LOG_PATH` - audit log path (default: "rsvp-log.ndjson")
    /// - `CONTENT_PATH` - content document path (default: "content.json")
    /// - `IMAGES_DIR` - static image directory (default: "public/images")
    pub fn from_env() -> Self {
        Self {
            forward_url: env::var("GOOGLE_APPS_SCRIPT_URL")
                .unwrap_or_else(|_| DEFAULT_FORWARD_URL.to_string()),
            read_url: env::var("GOOGLE_APPS_SCRIPT_READ_URL").ok(),
            read_key: env::var("GOOGLE_APPS_SCRIPT_READ_KEY").ok(),
            sheet_id: env::var("GOOGLE_SHEET_ID").unwrap_or_else(|_| DEFAULT_SHEET_ID.to_string()),
            sheet_base_url: env::var("GOOGLE_SHEET_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SHEET_BASE_URL.to_string()),
            log_path: env::var("RSVP_LOG_PATH").unwrap_or_else(|_| "rsvp-log.ndjson".to_string()),
            content_path: env::var("CONTENT_PATH").unwrap_or_else(|_| "content.json".to_string()),
            images_dir: env::var("IMAGES_DIR").unwrap_or_else(|_| "public/images".to_string()),
        }
    }

    /// URL of the public gviz export for the configured spreadsheet.
    pub fn gviz_url(&self) -> String {
        format!(
            "{}/d/{}/gviz/tq?tqx=out:json",
            self.sheet_base_url, self.sheet_id
        )
    }
}
