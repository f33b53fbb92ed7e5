//! Клиент upstream API контента
//!
//! Ключ API добавляется заголовком `api_key` к каждому запросу и никогда не
//! покидает сервер.

pub mod gateway;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use gateway::{ProxyGateway, ProxyResponse};

/// Секретный ключ upstream API. `Debug` не раскрывает значение.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Имя заголовка, в котором upstream ждёт ключ
pub const API_KEY_HEADER: &str = "api_key";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream request failed: {0}")]
    Network(String),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("failed to read upstream body: {0}")]
    Body(String),
}

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// GET по пути upstream, тело успешного ответа без изменений
    async fn get(&self, path: &str) -> Result<Vec<u8>, UpstreamError>;
}

/// Клиент upstream на reqwest
pub struct ReqwestUpstreamClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl ReqwestUpstreamClient {
    pub fn new(base_url: &str, api_key: ApiKey, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout
                } else {
                    UpstreamError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout
            } else {
                UpstreamError::Body(e.to_string())
            }
        })?;
        Ok(body.to_vec())
    }
}
