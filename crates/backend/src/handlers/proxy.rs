use axum::extract::{MatchedPath, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::shared::upstream::{ProxyGateway, ProxyResponse};

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// GET на любой публичный путь из таблицы маршрутов шлюза
pub async fn relay(
    State(gateway): State<Arc<ProxyGateway>>,
    matched: MatchedPath,
) -> ProxyResponse {
    gateway.handle(matched.as_str()).await
}
