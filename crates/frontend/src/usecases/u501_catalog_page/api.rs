use contracts::domain::a001_product_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_recipe::aggregate::Recipe;
use contracts::shared::error::FetchError;
use contracts::shared::list_response::ListResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

/// GET коллекции в конверте `{ "data": [...] }`
async fn fetch_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, FetchError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    ListResponse::<T>::parse(&text)
}

pub async fn fetch_categories() -> Result<Vec<Category>, FetchError> {
    fetch_collection("/api/product-categories").await
}

pub async fn fetch_products() -> Result<Vec<Product>, FetchError> {
    fetch_collection("/api/product").await
}

pub async fn fetch_recipes() -> Result<Vec<Recipe>, FetchError> {
    fetch_collection("/api/all-recipes").await
}
