pub mod app_config;
pub mod error;
pub mod logger;
pub mod types;
