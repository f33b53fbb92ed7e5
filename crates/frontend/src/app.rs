use crate::shared::i18n::current_locale;
use crate::usecases::u501_catalog_page::ui::ProductPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Locale comes from the first path segment (/en/product, /zh/product).
    let locale = current_locale();
    log::debug!("Catalog locale: {}", locale);
    provide_context(locale);

    view! {
        <ProductPage />
    }
}
