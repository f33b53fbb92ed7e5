//! Страница каталога продукции: загрузка трёх коллекций, вкладки категорий,
//! фильтрация продуктов и лента случайных рецептов.

pub mod loader;
pub mod presenter;
pub mod recipe_sampler;
pub mod tab_controller;

pub use loader::{CollectionLoader, LoadOutcome, StateCell};
pub use presenter::{CatalogInput, CatalogLabels, CatalogPresenter, CatalogView};
pub use recipe_sampler::{RecipeSampler, RECIPE_STRIP_LIMIT};
pub use tab_controller::CategoryTabController;
