//! Сборка модели отображения страницы каталога
//!
//! Презентер не хранит состояния: на каждый набор входов отдаёт новую модель.
//! Лента рецептов вынесена в отдельную функцию, чтобы UI мог пересчитывать её
//! только при смене списка рецептов, а не при каждом переключении вкладки.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::a001_product_category::aggregate::{Category, CategoryId};
use crate::domain::a002_product::aggregate::{Product, ProductId};
use crate::domain::a003_recipe::aggregate::{Recipe, RecipeId};
use crate::domain::common::Localized;
use crate::enums::locale::Locale;
use crate::shared::load_state::LoadState;
use crate::shared::markup::strip_paragraph_tags;

use super::recipe_sampler::{RecipeSampler, RECIPE_STRIP_LIMIT};
use super::tab_controller::CategoryTabController;

/// Хранилище изображений продуктов по умолчанию
pub const DEFAULT_STORAGE_BASE: &str = "https://prahwa.net/storage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTab {
    pub id: CategoryId,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    /// Базовое имя, используется как alt изображения
    pub alt: String,
    pub weight_label: String,
    pub image_url: String,
    pub detail_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub id: RecipeId,
    pub title: String,
}

/// Секция страницы: признак загрузки и готовые элементы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub loading: bool,
    pub items: Vec<T>,
}

/// Статические подписи страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLabels {
    pub page_title: String,
    pub breadcrumb_home: String,
    pub breadcrumb_current: String,
    pub learn_more: String,
    pub recipe_heading: String,
}

impl CatalogLabels {
    pub fn new(translate: &dyn Fn(&str) -> String) -> Self {
        let product = translate("menu.product");
        Self {
            page_title: format!("House Kari | {}", product),
            breadcrumb_home: translate("menu.home"),
            breadcrumb_current: product,
            learn_more: translate("section1Home.learnMore"),
            recipe_heading: translate("headingRecipe"),
        }
    }
}

/// Входы презентера
#[derive(Debug, Clone, Copy)]
pub struct CatalogInput<'a> {
    pub categories: &'a LoadState<Category>,
    pub products: &'a LoadState<Product>,
    pub recipes: &'a LoadState<Recipe>,
    pub tabs: CategoryTabController,
    pub locale: Locale,
}

/// Модель отображения всей страницы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    pub tabs: Section<CategoryTab>,
    pub visible_products: Section<ProductCard>,
    pub recipe_strip: Section<RecipeCard>,
}

pub struct CatalogPresenter {
    storage_base: String,
}

impl Default for CatalogPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_BASE)
    }
}

impl CatalogPresenter {
    pub fn new(storage_base: impl Into<String>) -> Self {
        Self {
            storage_base: storage_base.into(),
        }
    }

    pub fn present(&self, input: CatalogInput<'_>) -> CatalogView {
        self.present_with(&mut rand::thread_rng(), input)
    }

    pub fn present_with<R: Rng + ?Sized>(&self, rng: &mut R, input: CatalogInput<'_>) -> CatalogView {
        CatalogView {
            tabs: present_tabs(input.categories, input.tabs, input.locale),
            visible_products: self.present_products(input.products, input.tabs, input.locale),
            recipe_strip: present_recipe_strip_with(rng, input.recipes, input.locale),
        }
    }

    /// Продукты активной категории в исходном порядке
    pub fn present_products(
        &self,
        products: &LoadState<Product>,
        tabs: CategoryTabController,
        locale: Locale,
    ) -> Section<ProductCard> {
        let keep = tabs.filter_predicate();
        let items = products
            .data
            .iter()
            .filter(|p| keep(*p))
            .map(|p| ProductCard {
                id: p.id,
                name: p.display_text(locale).to_string(),
                alt: p.name.clone(),
                weight_label: p.weight_label(),
                image_url: p.image_url(&self.storage_base),
                detail_path: p.detail_path(),
            })
            .collect();
        Section {
            loading: products.loading,
            items,
        }
    }
}

/// Вкладки в порядке, пришедшем с сервиса
pub fn present_tabs(
    categories: &LoadState<Category>,
    tabs: CategoryTabController,
    locale: Locale,
) -> Section<CategoryTab> {
    let items = categories
        .data
        .iter()
        .map(|c| CategoryTab {
            id: c.id,
            label: c.display_text(locale).to_string(),
            active: tabs.is_active(c.id),
        })
        .collect();
    Section {
        loading: categories.loading,
        items,
    }
}

pub fn present_recipe_strip(recipes: &LoadState<Recipe>, locale: Locale) -> Section<RecipeCard> {
    present_recipe_strip_with(&mut rand::thread_rng(), recipes, locale)
}

pub fn present_recipe_strip_with<R: Rng + ?Sized>(
    rng: &mut R,
    recipes: &LoadState<Recipe>,
    locale: Locale,
) -> Section<RecipeCard> {
    let items = RecipeSampler::sample_with(rng, &recipes.data, RECIPE_STRIP_LIMIT)
        .iter()
        .map(|r| RecipeCard {
            id: r.id,
            title: strip_paragraph_tags(r.display_text(locale)),
        })
        .collect();
    Section {
        loading: recipes.loading,
        items,
    }
}
