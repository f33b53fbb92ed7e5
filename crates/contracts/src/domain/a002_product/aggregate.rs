use serde::{Deserialize, Serialize};

use crate::domain::a001_product_category::aggregate::CategoryId;
use crate::domain::common::aggregate_id::numeric_id;
use crate::domain::common::{Localized, LocalizedText};

numeric_id! {
    /// Идентификатор продукта
    ProductId
}

/// Продукт каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_chi: Option<String>,
    /// Вес упаковки в граммах
    pub weight: f64,
    /// Путь к изображению относительно хранилища
    pub image: String,
}

impl Product {
    /// Подпись веса, например `200g`
    pub fn weight_label(&self) -> String {
        format!("{}g", self.weight)
    }

    /// Полный URL изображения в хранилище
    pub fn image_url(&self, storage_base: &str) -> String {
        format!(
            "{}/{}",
            storage_base.trim_end_matches('/'),
            self.image.trim_start_matches('/')
        )
    }

    /// Ссылка на страницу продукта
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id)
    }
}

impl Localized for Product {
    fn localized_text(&self) -> LocalizedText<'_> {
        LocalizedText::new(&self.name, self.name_en.as_deref(), self.name_chi.as_deref())
    }
}
