use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use supplier_ai::{supplier_router, SupplierIntelligence};

pub(crate) fn with_engine_routes(engine: Arc<SupplierIntelligence>) -> axum::Router {
    supplier_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::sample_records;
    use axum::body::Body;
    use axum::http::Request;
    use supplier_ai::{EngineOptions, InMemoryRecordSource, SupplierDataset};
    use tower::util::ServiceExt;

    fn test_router() -> axum::Router {
        let dataset = Arc::new(SupplierDataset::new(Arc::new(InMemoryRecordSource::new(
            sample_records(),
        ))));
        with_engine_routes(Arc::new(SupplierIntelligence::new(
            dataset,
            EngineOptions::default(),
        )))
    }

    #[tokio::test]
    async fn healthcheck_is_always_ok() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("handler runs");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn best_endpoint_serves_the_sample_dataset() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/suppliers/best?criteria=quality")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("handler runs");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["name"], "Apex Metals");
    }
}
