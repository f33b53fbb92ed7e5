use axum::http::StatusCode;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use super::UpstreamClient;
use crate::shared::config::RouteConfig;

/// Ответ, который уходит вызывающей стороне
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ProxyResponse {
    fn relayed(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    fn error(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }).to_string().into_bytes(),
        }
    }

    /// Общий ответ об ошибке, без деталей upstream
    pub fn internal_error() -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Шлюз: на каждый входящий запрос один GET на upstream с ключом
///
/// Не хранит состояния между запросами, кроме неизменяемой таблицы маршрутов
/// и клиента с ключом.
pub struct ProxyGateway {
    client: Arc<dyn UpstreamClient>,
    routes: HashMap<String, String>,
}

impl ProxyGateway {
    pub fn new(client: Arc<dyn UpstreamClient>, routes: &[RouteConfig]) -> Self {
        let routes = routes
            .iter()
            .map(|r| (r.public_path.clone(), r.upstream_path.clone()))
            .collect();
        Self { client, routes }
    }

    /// Публичные пути, которые обслуживает шлюз
    pub fn public_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.routes.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Переслать запрос, пришедший на публичный путь
    pub async fn handle(&self, public_path: &str) -> ProxyResponse {
        let Some(upstream_path) = self.routes.get(public_path) else {
            tracing::warn!("No upstream route for {}", public_path);
            return ProxyResponse::error(StatusCode::NOT_FOUND, "Not found");
        };

        match self.client.get(upstream_path).await {
            Ok(body) => ProxyResponse::relayed(body),
            Err(e) => {
                tracing::error!("Error fetching {} from upstream: {}", upstream_path, e);
                ProxyResponse::internal_error()
            }
        }
    }
}
