// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{sha256_hex, AnalyzedString};
use crate::api::{ApiError, AppState};
use crate::errors::ServiceError;
use crate::filter::{FieldConstraints, FilterCriteria};

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub records: usize,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub filters_applied: FieldConstraints,
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FieldConstraints,
}

#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// GET /
pub async fn root() -> Json<Banner> {
    Json(Banner {
        message: "String analyzer is running",
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.store.name(),
        records: state.store.len().await,
    })
}

/// POST /strings - analyze and store a new string.
///
/// The body is taken as raw JSON so that a missing `value` (400) can be told
/// apart from a `value` of the wrong type (422).
#[tracing::instrument(skip_all)]
pub async fn create_string(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AnalyzedString>), ApiError> {
    let Json(body) = body?;

    let text = match body.get("value") {
        None | Some(Value::Null) => {
            return Err(ServiceError::InvalidInput("missing 'value' field".to_string()).into())
        }
        Some(Value::String(text)) => text,
        Some(other) => {
            return Err(ApiError::Unprocessable(format!(
                "'value' must be a string, got {}",
                json_type(other)
            )))
        }
    };

    if text.trim().is_empty() {
        return Err(ServiceError::InvalidInput("'value' must not be blank".to_string()).into());
    }

    let record = state.metrics.analyze(text);
    state.store.insert(record.clone()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings - list stored strings, optionally filtered by query parameters.
#[tracing::instrument(skip_all)]
pub async fn list_strings(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListResponse>, ApiError> {
    let Query(pairs) = params?;

    let predicate = state.resolver.resolve(&FilterCriteria::Structured(pairs))?;
    let result = state.resolver.apply(&predicate, state.store.list().await);

    Ok(Json(ListResponse {
        data: result.data,
        count: result.count,
        filters_applied: predicate.filters().clone(),
    }))
}

/// GET /strings/filter-by-natural-language?query=...
#[tracing::instrument(skip_all)]
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let Query(params) = params?;
    let query = params
        .query
        .ok_or_else(|| ServiceError::InvalidInput("missing 'query' parameter".to_string()))?;

    let predicate = state
        .resolver
        .resolve(&FilterCriteria::natural_language(query.as_str()))?;
    let result = state.resolver.apply(&predicate, state.store.list().await);

    Ok(Json(NaturalLanguageResponse {
        data: result.data,
        count: result.count,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters: predicate.filters().clone(),
        },
    }))
}

/// GET /strings/{key}
#[tracing::instrument(skip(state))]
pub async fn get_string(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AnalyzedString>, ApiError> {
    let id = resolve_key(&state, &key).await;
    Ok(Json(state.store.get(&id).await?))
}

/// DELETE /strings/{key}
#[tracing::instrument(skip(state))]
pub async fn delete_string(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = resolve_key(&state, &key).await;
    state.store.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// A key is either a stored id or the raw text, which is hashed to its id.
async fn resolve_key(state: &AppState, key: &str) -> String {
    if state.store.contains(key).await {
        key.to_string()
    } else {
        sha256_hex(key)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
