use serde::{Deserialize, Serialize};

/// Язык отображения каталога
///
/// `Default` читает базовые поля записи (`name`, `title`),
/// `En` и `Zh` читают локализованные варианты с откатом на базовое поле.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    Default,
    En,
    Zh,
}

impl Locale {
    /// Получить тег локали, как он выглядит в URL
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Default => "id",
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Получить все поддерживаемые локали
    pub fn all() -> Vec<Locale> {
        vec![Locale::Default, Locale::En, Locale::Zh]
    }

    /// Парсинг из тега. Неизвестный тег означает локаль по умолчанию.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            "zh" => Locale::Zh,
            _ => Locale::Default,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
