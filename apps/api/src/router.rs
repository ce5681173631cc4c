use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;
use triage_cell::{triage_routes, TriageError};

pub fn create_router(state: Arc<AppConfig>) -> Result<Router, TriageError> {
    Ok(Router::new()
        .route("/", get(|| async { "Triage API is running!" }))
        .nest("/triage", triage_routes(state)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_triage_routes_are_nested() {
        let app = create_router(Arc::new(AppConfig::default())).unwrap();

        let request = Request::builder()
            .method("GET")
            .uri("/triage/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["service"], "triage-engine");
    }

    #[tokio::test]
    async fn test_root_banner() {
        let app = create_router(Arc::new(AppConfig::default())).unwrap();

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
