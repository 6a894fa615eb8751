//! The JSON envelope every API route answers with, and the error type that
//! renders into it.
//!
//! A successful envelope always carries `data` and never `error`; a failed one
//! always carries `error` and never `data`. Both can carry extra context
//! fields that are flattened into the top-level object.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::CatalogError;

pub type Context = Map<String, Value>;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub context: Context,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            error: None,
            count: None,
            page: None,
            message: None,
            context: Context::new(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_context(mut self, key: &str, value: impl Serialize) -> Self {
        insert_context(&mut self.context, key, value);
        self
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Success envelope whose `count` is the number of items.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        let mut envelope = Envelope::success(items);
        envelope.count = Some(count);
        envelope
    }
}

impl Envelope<()> {
    pub fn failure(error: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            error: Some(error.into()),
            count: None,
            page: None,
            message: None,
            context: Context::new(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

fn insert_context(context: &mut Context, key: &str, value: impl Serialize) {
    let value = serde_json::to_value(value).unwrap_or(Value::Null);
    context.insert(key.to_string(), value);
}

/// Terminal error of a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input failed a precondition.
    #[error("{message}")]
    Validation { message: String, context: Context },

    /// The catalog provider failed; its message is surfaced verbatim.
    #[error("{source}")]
    Provider {
        source: CatalogError,
        context: Context,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            context: Context::new(),
        }
    }

    pub fn provider(source: CatalogError) -> Self {
        ApiError::Provider {
            source,
            context: Context::new(),
        }
    }

    pub fn with_context(mut self, key: &str, value: impl Serialize) -> Self {
        match &mut self {
            ApiError::Validation { context, .. } | ApiError::Provider { context, .. } => {
                insert_context(context, key, value)
            }
        }
        self
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut envelope = Envelope::failure(self.to_string());
        envelope.context = match self {
            ApiError::Validation { context, .. } | ApiError::Provider { context, .. } => context,
        };
        (status, envelope).into_response()
    }
}
