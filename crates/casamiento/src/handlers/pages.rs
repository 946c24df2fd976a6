//! Server-rendered pages: the invitation and the confirmations table.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use casamiento_core::{filter_rows, ConfirmationRow, RowFilter};

use crate::{content::Content, reader, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Invitation page template.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    content: Arc<Content>,
    hero_image_src: String,
    hero_image_alt: String,
}

/// Handler for the invitation page (GET /).
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    HtmlTemplate(IndexTemplate {
        hero_image_src: state.content.hero_image_src(),
        hero_image_alt: state.content.hero_image_alt().to_string(),
        content: state.content.clone(),
    })
}

/// Name/email filter taken from the page's query string.
#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
}

/// Confirmations page template.
#[derive(Template)]
#[template(path = "confirmaciones.html")]
struct ConfirmacionesTemplate {
    rows: Vec<ConfirmationRow>,
    total: usize,
    filter: RowFilter,
}

/// Handler for the confirmations page (GET /confirmaciones).
///
/// Every load is a live read through the fallback pipeline; a total read
/// failure still renders the page, with the no-data state.
pub async fn confirmaciones(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> impl IntoResponse {
    let rows = reader::fetch_confirmations(&state).await;
    let total = rows.len();

    let filter = RowFilter {
        nombre: query.nombre,
        email: query.email,
    };
    let visible: Vec<ConfirmationRow> = filter_rows(&rows, &filter)
        .into_iter()
        .cloned()
        .collect();

    HtmlTemplate(ConfirmacionesTemplate {
        rows: visible,
        total,
        filter,
    })
}
