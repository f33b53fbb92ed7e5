pub mod config;
pub mod request_logger;
pub mod upstream;
