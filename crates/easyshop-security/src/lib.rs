//! # EasyShop Security
//!
//! Password hashing for user accounts. Hashes are one-way, salted per call
//! and use Argon2id with a configurable memory cost.

pub mod password;

pub use password::*;
