//! Статические строки страницы и определение локали
//!
//! Загрузка полноценных таблиц переводов вне этой страницы, здесь только
//! ключи, которые она использует.

use contracts::enums::locale::Locale;

/// Локаль из текущего адреса страницы
pub fn current_locale() -> Locale {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    locale_from_path(&path)
}

/// Первый сегмент пути, если это тег поддерживаемой локали
pub fn locale_from_path(path: &str) -> Locale {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .map(Locale::from_tag)
        .unwrap_or_default()
}

/// Перевод статической строки. Неизвестный ключ возвращается как есть.
pub fn translate(locale: Locale, key: &str) -> String {
    let value = match (key, locale) {
        ("menu.home", Locale::Default) => "Beranda",
        ("menu.home", Locale::En) => "Home",
        ("menu.home", Locale::Zh) => "首页",
        ("menu.product", Locale::Default) => "Produk",
        ("menu.product", Locale::En) => "Product",
        ("menu.product", Locale::Zh) => "产品",
        ("section1Home.learnMore", Locale::Default) => "Selengkapnya",
        ("section1Home.learnMore", Locale::En) => "Learn More",
        ("section1Home.learnMore", Locale::Zh) => "了解更多",
        ("headingRecipe", Locale::Default) => "Resep Pilihan",
        ("headingRecipe", Locale::En) => "Featured Recipes",
        ("headingRecipe", Locale::Zh) => "精选食谱",
        _ => key,
    };
    value.to_string()
}
