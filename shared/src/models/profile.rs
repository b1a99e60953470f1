//! User Profile Model

use serde::{Deserialize, Serialize};

/// Signed-in owner, shown in the drawer header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_name: String,
    pub restaurant_name: String,
    /// Opaque image reference, absent until the owner uploads one
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserProfile {
    pub fn new(user_name: impl Into<String>, restaurant_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            restaurant_name: restaurant_name.into(),
            profile_image: None,
        }
    }
}
