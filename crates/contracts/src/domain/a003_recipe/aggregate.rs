use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::numeric_id;
use crate::domain::common::{Localized, LocalizedText};

numeric_id! {
    /// Идентификатор рецепта
    RecipeId
}

/// Рецепт для ленты рекомендаций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    /// Заголовок может быть обёрнут в `<p>` из редактора CMS
    pub title: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub title_chi: Option<String>,
    #[serde(default)]
    pub body: String,
}

impl Localized for Recipe {
    fn localized_text(&self) -> LocalizedText<'_> {
        LocalizedText::new(
            &self.title,
            self.title_en.as_deref(),
            self.title_chi.as_deref(),
        )
    }
}
