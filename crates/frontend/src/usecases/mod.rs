pub mod u501_catalog_page;
