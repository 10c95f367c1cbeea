//! Profile entity.

use serde::{Deserialize, Serialize};

/// Shipping and contact details, one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owning user. Supplied by the caller, never store-assigned.
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}
