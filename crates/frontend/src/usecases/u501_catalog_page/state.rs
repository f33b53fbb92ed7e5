use contracts::domain::a001_product_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_recipe::aggregate::Recipe;
use contracts::shared::load_state::LoadState;
use contracts::usecases::u501_catalog_page::{CategoryTabController, CollectionLoader, StateCell};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;

/// Сигнал с состоянием коллекции
///
/// Когда страница размонтирована, сигнал освобождён и `try_update`
/// возвращает `None`, поэтому поздний ответ сервера ничего не пишет.
pub struct SignalCell<T: Send + Sync + 'static>(pub RwSignal<LoadState<T>>);

impl<T: Send + Sync + 'static> StateCell for SignalCell<T> {
    type Item = T;

    fn try_update<R>(&self, f: impl FnOnce(&mut LoadState<T>) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Состояние страницы каталога: три независимые коллекции и активная вкладка
#[derive(Clone, Copy)]
pub struct CatalogPageState {
    pub categories: RwSignal<LoadState<Category>>,
    pub products: RwSignal<LoadState<Product>>,
    pub recipes: RwSignal<LoadState<Recipe>>,
    pub tabs: RwSignal<CategoryTabController>,
}

impl CatalogPageState {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(LoadState::pending()),
            products: RwSignal::new(LoadState::pending()),
            recipes: RwSignal::new(LoadState::pending()),
            tabs: RwSignal::new(CategoryTabController::new()),
        }
    }

    /// Запустить три загрузки, друг от друга они не зависят
    pub fn load_all(&self) {
        let tabs = self.tabs;

        let categories = CollectionLoader::new("categories", SignalCell(self.categories));
        spawn_local(async move {
            categories
                .load_then(api::fetch_categories(), move |loaded| {
                    // Первая категория становится активной, если пользователь
                    // ещё ничего не выбрал
                    let _ = tabs.try_update(|t| t.auto_init(loaded));
                })
                .await;
        });

        let products = CollectionLoader::new("products", SignalCell(self.products));
        spawn_local(async move {
            products.load(api::fetch_products()).await;
        });

        let recipes = CollectionLoader::new("recipes", SignalCell(self.recipes));
        spawn_local(async move {
            recipes.load(api::fetch_recipes()).await;
        });
    }
}

impl Default for CatalogPageState {
    fn default() -> Self {
        Self::new()
    }
}
