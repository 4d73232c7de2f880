//! Mapping dispatch results onto HTTP responses.
//!
//! # Responsibilities
//! - Redirects: declared status plus `Location`, empty body
//! - Bare statuses and not-found: status only, empty body
//! - Documents: 200 with an HTML content type
//! - Failures: generic 500, no detail
//!
//! # Design Decisions
//! - Only status codes are user-visible on failure
//! - An unencodable redirect target is treated as a render failure

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::dispatcher::Dispatch;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

impl IntoResponse for Dispatch {
    fn into_response(self) -> Response {
        match self {
            Dispatch::NotFound => StatusCode::NOT_FOUND.into_response(),
            Dispatch::Redirect(redirect) => match HeaderValue::from_str(&redirect.to) {
                Ok(location) => (redirect.status, [(header::LOCATION, location)]).into_response(),
                Err(_) => {
                    tracing::error!(to = %redirect.to, "Redirect target is not a valid header value");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            Dispatch::Status(status) => status.into_response(),
            Dispatch::Document(document) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE))],
                document.into_string(),
            )
                .into_response(),
            Dispatch::Failed => internal_error(),
        }
    }
}

/// Generic 500 with an empty body.
pub fn internal_error() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
