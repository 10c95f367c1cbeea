//! # EasyShop Core
//!
//! Domain models, the store error type and logging setup shared by the
//! EasyShop data access crates.

pub mod domain;
pub mod error;
pub mod logging;
pub mod result;

pub use domain::*;
pub use error::*;
pub use logging::*;
pub use result::*;
