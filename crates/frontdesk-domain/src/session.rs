//! Identity of the acting front-desk user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    #[default]
    #[serde(other)]
    Staff,
}

/// Explicit session context threaded into summary and recorder calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionContext {
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub hotels: Vec<String>,
}

impl SessionContext {
    pub fn new(role: UserRole, hotels: Vec<String>) -> Self {
        Self { role, hotels }
    }

    /// Elevated users see the full charge breakdown.
    pub fn is_elevated(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// The hotel the user acts for: the first one assigned, or empty.
    pub fn acting_hotel_id(&self) -> &str {
        self.hotels.first().map(String::as_str).unwrap_or("")
    }
}
