//! Shared application state.

use std::sync::Arc;

use crate::{config::Config, content::Content};

/// Shared application state, cloned into every request handler.
///
/// Holds the immutable configuration, the parsed content document, and one
/// reqwest client reused for all outbound calls (forwarding and the
/// confirmation reads).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub content: Arc<Content>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, content: Content) -> Self {
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            http: reqwest::Client::new(),
        }
    }
}
