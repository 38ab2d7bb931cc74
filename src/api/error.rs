use crate::contacts::types::{ContactId, MalformedId};
use crate::contacts::validation::ValidationError;
use crate::storage::StoreError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hyper::ext::ReasonPhrase;
use serde::{Deserialize, Serialize};

/// Body of every JSON error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformatted id")]
    MalformedId(#[from] MalformedId),

    #[error("No contact found with the specified id ({0})")]
    NotFound(ContactId),

    #[error("{0}")]
    InvalidBody(String),

    #[error("unknown endpoint")]
    UnknownEndpoint,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedId(_) | ApiError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        match self {
            // Descriptive status line, no body.
            ApiError::NotFound(_) => {
                tracing::warn!("{}", message);
                let mut response = status.into_response();
                match ReasonPhrase::try_from(message.as_bytes()) {
                    Ok(reason) => {
                        response.extensions_mut().insert(reason);
                    }
                    Err(_) => tracing::debug!("Keeping default reason phrase for 404"),
                }
                response
            }
            ApiError::Store(_) => {
                tracing::error!("Storage failure: {}", message);
                (status, Json(ErrorResponse::new("internal server error"))).into_response()
            }
            _ => {
                tracing::warn!("Rejected request: {}", message);
                (status, Json(ErrorResponse::new(message))).into_response()
            }
        }
    }
}
