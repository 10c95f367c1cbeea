//! # EasyShop Config
//!
//! Layered configuration for the EasyShop data access layer: defaults,
//! TOML files, then `EASYSHOP__*` environment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
