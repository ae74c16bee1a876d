use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EngineError, SupplierIntelligence};

/// Router builder exposing the engine's read-only entry points.
pub fn supplier_router(engine: Arc<SupplierIntelligence>) -> Router {
    Router::new()
        .route("/api/v1/suppliers", get(retrieve_handler))
        .route("/api/v1/suppliers/best", get(best_handler))
        .route("/api/v1/suppliers/compare", get(compare_handler))
        .route("/api/v1/suppliers/:name/analysis", get(analysis_handler))
        .route("/api/v1/suppliers/:name/prediction", get(prediction_handler))
        .route("/api/v1/chat", post(chat_handler))
        .with_state(engine)
}

fn error_response(error: EngineError) -> Response {
    let status = match &error {
        EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
        EngineError::Ambiguous { .. } | EngineError::InsufficientData { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EngineError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct RetrieveParams {
    #[serde(default)]
    query: String,
    #[serde(default = "default_top_k")]
    top_k: usize,
}

fn default_top_k() -> usize {
    10
}

pub(crate) async fn retrieve_handler(
    State(engine): State<Arc<SupplierIntelligence>>,
    Query(params): Query<RetrieveParams>,
) -> Response {
    match engine.retrieve(&params.query, params.top_k).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BestParams {
    #[serde(default = "default_criteria")]
    criteria: String,
}

fn default_criteria() -> String {
    "overall".to_string()
}

pub(crate) async fn best_handler(
    State(engine): State<Arc<SupplierIntelligence>>,
    Query(params): Query<BestParams>,
) -> Response {
    match engine.best_supplier(&params.criteria).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareParams {
    a: String,
    b: String,
}

pub(crate) async fn compare_handler(
    State(engine): State<Arc<SupplierIntelligence>>,
    Query(params): Query<CompareParams>,
) -> Response {
    match engine.compare(&params.a, &params.b).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analysis_handler(
    State(engine): State<Arc<SupplierIntelligence>>,
    Path(name): Path<String>,
) -> Response {
    match engine.analyze(&name).await {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn prediction_handler(
    State(engine): State<Arc<SupplierIntelligence>>,
    Path(name): Path<String>,
) -> Response {
    match engine.predict(&name).await {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    reply: String,
}

pub(crate) async fn chat_handler(
    State(engine): State<Arc<SupplierIntelligence>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    match engine.chat_response(&request.message).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { reply })).into_response(),
        Err(error) => error_response(error),
    }
}
