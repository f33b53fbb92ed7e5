use serde::Deserialize;
use std::collections::HashSet;

use super::upstream::ApiKey;

/// Переменная окружения, из которой при старте читается ключ upstream API
pub const API_KEY_ENV: &str = "UPSTREAM_API_KEY";

/// Служебный путь проверки живости, занят роутером
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Каталог со собранным фронтендом
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Публичный путь и путь на upstream, куда он пересылается
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub public_path: String,
    pub upstream_path: String,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[upstream]
base_url = "https://prahwa.net"
timeout_secs = 10

[[routes]]
public_path = "/api/address"
upstream_path = "/api/address"

[[routes]]
public_path = "/api/product-categories"
upstream_path = "/api/product-categories"

[[routes]]
public_path = "/api/product"
upstream_path = "/api/product"

[[routes]]
public_path = "/api/all-recipes"
upstream_path = "/api/all-recipes"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// The API key is never part of the file, see [`load_api_key`].
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            anyhow::bail!("upstream.base_url must be an http(s) URL");
        }
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.public_path.starts_with('/') || !route.upstream_path.starts_with('/') {
                anyhow::bail!(
                    "route paths must start with '/': {} -> {}",
                    route.public_path,
                    route.upstream_path
                );
            }
            if route.public_path == HEALTH_PATH {
                anyhow::bail!("route public_path {} is reserved", HEALTH_PATH);
            }
            // Сегменты `:param` и `*rest` axum трактует как шаблоны
            if route
                .public_path
                .split('/')
                .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
            {
                anyhow::bail!(
                    "route public_path must be a literal path: {}",
                    route.public_path
                );
            }
            if !seen.insert(route.public_path.as_str()) {
                anyhow::bail!("duplicate route public_path: {}", route.public_path);
            }
        }
        Ok(())
    }
}

/// Прочитать ключ upstream API из окружения процесса
pub fn load_api_key() -> anyhow::Result<ApiKey> {
    api_key_from(std::env::var(API_KEY_ENV).ok())
}

fn api_key_from(value: Option<String>) -> anyhow::Result<ApiKey> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(ApiKey::new(v.trim())),
        _ => anyhow::bail!("{} is not set", API_KEY_ENV),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.upstream.base_url, "https://prahwa.net");
        assert_eq!(config.routes.len(), 4);
        assert_eq!(
            config.routes[0],
            RouteConfig {
                public_path: "/api/address".into(),
                upstream_path: "/api/address".into(),
            }
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let contents = DEFAULT_CONFIG.replace("https://prahwa.net", "ftp://prahwa.net");
        assert!(parse_config(&contents).is_err());
    }

    #[test]
    fn test_rejects_relative_route() {
        let contents = format!(
            "{}\n[[routes]]\npublic_path = \"api/x\"\nupstream_path = \"/api/x\"\n",
            DEFAULT_CONFIG
        );
        assert!(parse_config(&contents).is_err());
    }

    fn with_route(public_path: &str) -> String {
        format!(
            "{}\n[[routes]]\npublic_path = \"{}\"\nupstream_path = \"/api/x\"\n",
            DEFAULT_CONFIG, public_path
        )
    }

    #[test]
    fn test_rejects_health_path_route() {
        let err = parse_config(&with_route("/health")).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_rejects_duplicate_public_path() {
        let err = parse_config(&with_route("/api/address")).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_route_templates() {
        assert!(parse_config(&with_route("/api/:id")).is_err());
        assert!(parse_config(&with_route("/api/*rest")).is_err());
        assert!(parse_config(&with_route("/api/x")).is_ok());
    }

    #[test]
    fn test_api_key_required() {
        assert!(api_key_from(None).is_err());
        assert!(api_key_from(Some("   ".into())).is_err());
        let key = api_key_from(Some(" secret ".into())).unwrap();
        assert_eq!(key.expose(), "secret");
    }
}
