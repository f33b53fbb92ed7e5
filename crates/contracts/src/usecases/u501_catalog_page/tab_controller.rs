use serde::{Deserialize, Serialize};

use crate::domain::a001_product_category::aggregate::{Category, CategoryId};
use crate::domain::a002_product::aggregate::Product;

/// Активная вкладка категории
///
/// Меняется только выбором пользователя (`select`) или однократной
/// автоинициализацией первой категорией после загрузки (`auto_init`).
/// Автоинициализация никогда не перетирает уже сделанный выбор.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTabController {
    active: Option<CategoryId>,
}

impl CategoryTabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<CategoryId> {
        self.active
    }

    /// Выбор вкладки пользователем. Вкладки рисуются из загруженного
    /// списка, поэтому id не перепроверяется.
    pub fn select(&mut self, id: CategoryId) {
        self.active = Some(id);
    }

    /// Выбрать первую категорию, если ничего ещё не выбрано.
    /// Возвращает `true`, если выбор произошёл.
    pub fn auto_init(&mut self, categories: &[Category]) -> bool {
        if self.active.is_some() {
            return false;
        }
        match categories.first() {
            Some(first) => {
                self.active = Some(first.id);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, id: CategoryId) -> bool {
        self.active == Some(id)
    }

    /// Предикат для отбора продуктов активной категории
    pub fn filter_predicate(&self) -> impl Fn(&Product) -> bool {
        let active = self.active;
        move |product| active == Some(product.category_id)
    }
}
