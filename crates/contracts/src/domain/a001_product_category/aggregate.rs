use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::numeric_id;
use crate::domain::common::{Localized, LocalizedText};

numeric_id! {
    /// Идентификатор категории продукции
    CategoryId
}

/// Категория продукции (вкладка на странице каталога)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_chi: Option<String>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            name_en: None,
            name_chi: None,
        }
    }
}

impl Localized for Category {
    fn localized_text(&self) -> LocalizedText<'_> {
        LocalizedText::new(&self.name, self.name_en.as_deref(), self.name_chi.as_deref())
    }
}
