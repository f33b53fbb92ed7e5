//! Выбор отображаемого поля по локали
//!
//! Каждая запись каталога хранит базовое поле и два необязательных перевода
//! (`*_en`, `*_chi`). Пустой или отсутствующий перевод молча заменяется базовым
//! полем.

use crate::enums::locale::Locale;

/// Набор вариантов одного текстового поля
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText<'a> {
    pub base: &'a str,
    pub en: Option<&'a str>,
    pub chi: Option<&'a str>,
}

impl<'a> LocalizedText<'a> {
    pub fn new(base: &'a str, en: Option<&'a str>, chi: Option<&'a str>) -> Self {
        Self { base, en, chi }
    }
}

/// Вернуть вариант поля для локали
pub fn resolve<'a>(text: &LocalizedText<'a>, locale: Locale) -> &'a str {
    let localized = match locale {
        Locale::En => text.en,
        Locale::Zh => text.chi,
        Locale::Default => None,
    };

    match localized {
        Some(value) if !value.is_empty() => value,
        _ => text.base,
    }
}

/// Запись, у которой есть локализуемое отображаемое имя
pub trait Localized {
    /// Варианты поля, которое показывается пользователю
    fn localized_text(&self) -> LocalizedText<'_>;

    fn display_text(&self, locale: Locale) -> &str {
        resolve(&self.localized_text(), locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_prefers_translation() {
        let text = LocalizedText::new("Kari", Some("Curry"), Some("咖喱"));
        assert_eq!(resolve(&text, Locale::En), "Curry");
        assert_eq!(resolve(&text, Locale::Zh), "咖喱");
        assert_eq!(resolve(&text, Locale::Default), "Kari");
    }

    #[test]
    fn test_resolve_falls_back_on_missing_or_empty() {
        let missing = LocalizedText::new("Kari", None, None);
        assert_eq!(resolve(&missing, Locale::En), "Kari");
        assert_eq!(resolve(&missing, Locale::Zh), "Kari");

        let empty = LocalizedText::new("Kari", Some(""), Some(""));
        assert_eq!(resolve(&empty, Locale::En), "Kari");
        assert_eq!(resolve(&empty, Locale::Zh), "Kari");
    }

    proptest! {
        #[test]
        fn prop_en_uses_translation_iff_non_empty(
            base in ".*",
            en in proptest::option::of(".*"),
            chi in proptest::option::of(".*"),
        ) {
            let text = LocalizedText::new(&base, en.as_deref(), chi.as_deref());
            let expected = match en.as_deref() {
                Some(v) if !v.is_empty() => v,
                _ => base.as_str(),
            };
            prop_assert_eq!(resolve(&text, Locale::En), expected);
        }

        #[test]
        fn prop_zh_uses_translation_iff_non_empty(
            base in ".*",
            en in proptest::option::of(".*"),
            chi in proptest::option::of(".*"),
        ) {
            let text = LocalizedText::new(&base, en.as_deref(), chi.as_deref());
            let expected = match chi.as_deref() {
                Some(v) if !v.is_empty() => v,
                _ => base.as_str(),
            };
            prop_assert_eq!(resolve(&text, Locale::Zh), expected);
        }

        #[test]
        fn prop_default_always_base(
            base in ".*",
            en in proptest::option::of(".*"),
            chi in proptest::option::of(".*"),
        ) {
            let text = LocalizedText::new(&base, en.as_deref(), chi.as_deref());
            prop_assert_eq!(resolve(&text, Locale::Default), base.as_str());
        }
    }
}
