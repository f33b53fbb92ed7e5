use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers;
use crate::shared::config::HEALTH_PATH;
use crate::shared::upstream::ProxyGateway;

/// Конфигурация всех роутов приложения
pub fn configure_routes(gateway: Arc<ProxyGateway>) -> Router {
    let mut router = Router::new().route(HEALTH_PATH, get(|| async { "ok" }));

    // Публичные пути шлюза: /api/address и коллекции каталога
    for public_path in gateway.public_paths() {
        router = router.route(&public_path, get(handlers::proxy::relay));
    }

    router.with_state(gateway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::RouteConfig;
    use crate::shared::upstream::{ApiKey, ReqwestUpstreamClient, API_KEY_HEADER};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use std::time::Duration;
    use tower::ServiceExt;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_router(server: &MockServer) -> Router {
        let routes = vec![
            RouteConfig {
                public_path: "/api/address".into(),
                upstream_path: "/api/address".into(),
            },
            RouteConfig {
                public_path: "/api/product-categories".into(),
                upstream_path: "/api/product-categories".into(),
            },
        ];
        let client =
            ReqwestUpstreamClient::new(&server.uri(), ApiKey::new("router-secret"), Duration::from_secs(5))
                .unwrap();
        configure_routes(Arc::new(ProxyGateway::new(Arc::new(client), &routes)))
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        let response = test_router(&server)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_address_is_relayed_with_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/address"))
            .and(header(API_KEY_HEADER, "router-secret"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1, "city": "Tokyo"})),
            )
            .mount(&server)
            .await;

        let response = test_router(&server)
            .oneshot(Request::get("/api/address").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"id": 1, "city": "Tokyo"}));
    }

    #[tokio::test]
    async fn test_collection_failure_is_generic_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/product-categories"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let response = test_router(&server)
            .oneshot(
                Request::get("/api/product-categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(text, r#"{"error":"Internal server error"}"#);
        assert!(!text.contains("router-secret"));
    }

    #[tokio::test]
    async fn test_unconfigured_path_is_not_routed() {
        let server = MockServer::start().await;
        let response = test_router(&server)
            .oneshot(Request::get("/api/secret-stuff").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_is_rejected() {
        let server = MockServer::start().await;
        let response = test_router(&server)
            .oneshot(Request::post("/api/address").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
