pub mod error;
pub mod list_response;
pub mod load_state;
pub mod markup;
