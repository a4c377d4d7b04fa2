use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid user input.
    Input(&'static str),
    /// A quiz step was requested or answered out of order.
    Sequence(&'static str),
    NotFound(&'static str),
    Internal(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) | AppError::Sequence(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::Input(msg)
            | AppError::Sequence(msg)
            | AppError::NotFound(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status();
        if code.is_server_error() {
            tracing::error!("request failed: {}", self.message());
        } else {
            tracing::debug!(status = code.as_u16(), "request rejected: {}", self.message());
        }
        (code, error_page(code, self.message())).into_response()
    }
}

/// Maps storage failures onto [`AppError`], logging the underlying cause.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }
}

fn error_page(code: StatusCode, message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (code.as_u16()) }
            p { (message) }
        },
    )
}
