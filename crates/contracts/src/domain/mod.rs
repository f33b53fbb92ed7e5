pub mod a001_product_category;
pub mod a002_product;
pub mod a003_recipe;
pub mod common;
