// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::ServiceError;
use crate::observability::messages::server::RequestFailed;
use crate::observability::messages::StructuredLog;

/// Errors returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The request body was rejected before reaching a handler (bad JSON,
    /// wrong content type, over the size limit)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Well-formed JSON with a field of the wrong type
    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(error) => match error {
                ServiceError::InvalidInput(_)
                | ServiceError::InvalidFilter(_)
                | ServiceError::AmbiguousFilter(_) => StatusCode::BAD_REQUEST,
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Rejected { status, .. } => *status,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Service(error) => error.kind(),
            ApiError::Rejected { .. } => "rejected_body",
            ApiError::Unprocessable(_) => "unprocessable",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Service(ServiceError::InvalidFilter(rejection.body_text()))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        RequestFailed {
            kind: self.kind(),
            status: status.as_u16(),
            error: &self,
        }
        .log();

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
