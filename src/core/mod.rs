pub mod build;
pub mod commands;
pub mod common;
pub mod splice;
pub mod types;
