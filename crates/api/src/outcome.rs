//! Response categories produced by the request handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::response::DataResponse;

/// Result of one handler operation.
///
/// | Variant           | HTTP status                                   |
/// |-------------------|-----------------------------------------------|
/// | `Success(data)`   | 200 with `{ "data": data }`                   |
/// | `NotFound`        | 404                                           |
/// | `Invalid(reason)` | 400, JSON error body when a reason is present |
/// | `Error(message)`  | 400 with the failure's description            |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    NotFound,
    Invalid(Option<&'static str>),
    Error(String),
}

impl<T> Outcome<T> {
    /// Wrap a collaborator failure, keeping only its description.
    pub fn failed(err: anyhow::Error) -> Self {
        Self::Error(err.to_string())
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Success(data) => (StatusCode::OK, Json(DataResponse { data })).into_response(),
            Outcome::NotFound => AppError::NotFound.into_response(),
            Outcome::Invalid(Some(reason)) => AppError::BadRequest(reason.to_string()).into_response(),
            Outcome::Invalid(None) => StatusCode::BAD_REQUEST.into_response(),
            Outcome::Error(message) => AppError::RequestFailed(message).into_response(),
        }
    }
}
