use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use brawldex_catalog::CatalogError;
use tera::Context;

use crate::pages::Pages;

/// Errors that can occur while serving a page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] CatalogError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Template error: {0}")]
    Render(#[from] tera::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Render(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to visitors. Internal details stay in the log.
    fn public_message(&self) -> &'static str {
        match self {
            Self::DataUnavailable(_) => {
                "The game data is temporarily unavailable. Please try again later."
            }
            Self::NotFound(_) => "We couldn't find the page you were looking for.",
            Self::BadRequest(_) => "That request couldn't be understood.",
            Self::Render(_) | Self::Task(_) => "Something went wrong while building this page.",
        }
    }
}

/// Turn a page result into a response, rendering failures as an error page.
pub(crate) fn respond(pages: &Pages, result: Result<Html<String>, WebError>) -> Response {
    match result {
        Ok(html) => html.into_response(),
        Err(e) => error_response(pages, e),
    }
}

fn error_response(pages: &Pages, error: WebError) -> Response {
    let status = error.status();
    if status.is_server_error() {
        log::error!("{error}");
    } else {
        log::debug!("{error}");
    }

    let mut ctx = Context::new();
    ctx.insert("status", &status.as_u16());
    ctx.insert("title", status.canonical_reason().unwrap_or("Error"));
    ctx.insert("message", error.public_message());

    match pages.render("error.html", &ctx) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            log::error!("Could not render error page: {e}");
            (status, error.public_message()).into_response()
        }
    }
}
