//! HTTP mapping of engine errors.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use interroute_core::RouteError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("invalid request body: {0}")]
    Body(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Route(RouteError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Route(RouteError::Unrecognized { .. }) | ApiError::Body(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Route(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Route(err) => err.kind(),
            ApiError::Body(_) => "invalid_body",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::debug!("Rejected request: {}", self);
        }
        (
            status,
            Json(json!({
                "error": self.kind(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
