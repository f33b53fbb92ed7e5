use contracts::enums::locale::Locale;
use contracts::usecases::u501_catalog_page::presenter::{
    present_recipe_strip, present_tabs, CategoryTab, ProductCard, RecipeCard,
};
use contracts::usecases::u501_catalog_page::{
    CatalogLabels, CatalogPresenter, CategoryTabController,
};
use leptos::prelude::*;

use super::state::CatalogPageState;
use crate::shared::i18n::translate;

const TAB_PLACEHOLDERS: usize = 3;
const PRODUCT_PLACEHOLDERS: usize = 6;
const RECIPE_PLACEHOLDERS: usize = 3;

fn placeholders(count: usize, class: &'static str) -> AnyView {
    (0..count)
        .map(|_| view! { <div class=format!("skeleton {}", class)></div> })
        .collect_view()
        .into_any()
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductPage() -> impl IntoView {
    let locale = use_context::<Locale>().unwrap_or_default();
    let labels = CatalogLabels::new(&|key: &str| translate(locale, key));
    set_document_title(&labels.page_title);

    let state = CatalogPageState::new();
    state.load_all();

    let presenter = CatalogPresenter::default();

    let tabs = Memo::new(move |_| {
        let controller = state.tabs.get();
        state
            .categories
            .with(|categories| present_tabs(categories, controller, locale))
    });
    let products = Memo::new(move |_| {
        let controller = state.tabs.get();
        state
            .products
            .with(|products| presenter.present_products(products, controller, locale))
    });
    // Лента зависит только от рецептов: переключение вкладки её не перемешивает
    let recipes = Memo::new(move |_| {
        state
            .recipes
            .with(|recipes| present_recipe_strip(recipes, locale))
    });

    let learn_more = labels.learn_more.clone();

    view! {
        <div class="banner">
            <img src="/images/product_page_banner.png" alt="House Kari Website" />
        </div>
        <div class="breadcrumbs">
            <p>{labels.breadcrumb_home.clone()} " / " <span>{labels.breadcrumb_current.clone()}</span></p>
        </div>
        <div class="section1">
            <div class="tabs">
                <div class="tab-headers">
                    {move || {
                        let section = tabs.get();
                        if section.loading {
                            placeholders(TAB_PLACEHOLDERS, "skeleton--tab")
                        } else {
                            section
                                .items
                                .into_iter()
                                .map(|tab| view! { <TabButton tab=tab on_select=state.tabs /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
                <div class="tab-content">
                    <div class="product-layout">
                        {move || {
                            let section = products.get();
                            if section.loading {
                                placeholders(PRODUCT_PLACEHOLDERS, "skeleton--product")
                            } else {
                                let learn_more = learn_more.clone();
                                section
                                    .items
                                    .into_iter()
                                    .map(|card| view! { <ProductBox card=card learn_more=learn_more.clone() /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
        <div class="section2">
            <h1 class="heading-main">{labels.recipe_heading.clone()}</h1>
            {move || {
                let section = recipes.get();
                if section.loading {
                    placeholders(RECIPE_PLACEHOLDERS, "skeleton--recipe")
                } else {
                    view! {
                        <ul class="recipe-strip">
                            {section
                                .items
                                .into_iter()
                                .map(|card| view! { <RecipeItem card=card /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn TabButton(tab: CategoryTab, on_select: RwSignal<CategoryTabController>) -> impl IntoView {
    let id = tab.id;
    let class = if tab.active { "tab-header active" } else { "tab-header" };
    view! {
        <button class=class on:click=move |_| on_select.update(|t| t.select(id))>
            {tab.label}
        </button>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductBox(card: ProductCard, learn_more: String) -> impl IntoView {
    view! {
        <div class="box-product">
            <div class="image-product">
                <img src=card.image_url alt=card.alt />
            </div>
            <div class="content-product">
                <h1>{card.name}</h1>
                <span>{card.weight_label}</span>
                <a href=card.detail_path>
                    <button>{learn_more}</button>
                </a>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn RecipeItem(card: RecipeCard) -> impl IntoView {
    view! {
        <li class="recipe-card" data-recipe-id=card.id.to_string()>
            {card.title}
        </li>
    }
}
