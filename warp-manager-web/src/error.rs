//! Web layer error type

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{json, Value};
use thiserror::Error;
use warp_manager_core::CoreError;

/// Errors returned by handlers and CLI rendering.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Account data is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

impl AppError {
    fn body(&self) -> Value {
        let mut body = match self {
            Self::Core(err) => {
                serde_json::to_value(err).unwrap_or_else(|_| json!({ "code": "Unknown" }))
            }
            Self::Encoding(_) => json!({ "code": "InvalidEncoding" }),
            Self::Input(_) => json!({ "code": "InputError" }),
        };
        if let Value::Object(map) = &mut body {
            map.insert("success".to_string(), Value::Bool(false));
            map.insert("message".to_string(), Value::String(self.to_string()));
        }
        body
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(_) | Self::Encoding(_) => StatusCode::BAD_REQUEST,
            Self::Input(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Core(err) if err.is_expected() => tracing::warn!("{err}"),
            Self::Encoding(_) => tracing::warn!("{self}"),
            _ => tracing::error!("{self}"),
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
