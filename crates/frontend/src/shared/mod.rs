pub mod api_utils;
pub mod i18n;
