//! Last-resort handler for panics escaping a route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tracing::error;

use crate::server::envelope::Envelope;

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("Server error: {}", details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Envelope::failure("Internal server error"),
    )
        .into_response()
}
