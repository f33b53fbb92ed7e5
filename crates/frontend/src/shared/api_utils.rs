//! Адрес backend-шлюза для запросов каталога

/// Порт, на котором backend-шлюз слушает по умолчанию
const RELAY_PORT: u16 = 3000;

/// Базовый адрес шлюза на том же хосте, что и страница
fn relay_base(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, RELAY_PORT)
}

/// Базовый адрес шлюза для текущей страницы, пустая строка вне браузера
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    relay_base(&protocol, &hostname)
}

/// Полный адрес публичного пути шлюза, например `/api/product-categories`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
