//! Common types and traits for catalog entities

pub mod aggregate_id;
pub mod localized;

// Re-exports
pub use localized::{resolve, Localized, LocalizedText};
