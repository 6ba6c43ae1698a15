use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRole;

/// A user account waiting for approval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub mobile_number: String,
    pub country_code: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub is_mobile_verified: bool,
    pub is_approved: bool,
    pub user_roles: Vec<UserRole>,
    pub created_at: DateTime<Utc>,
}

impl PendingUser {
    pub fn full_name(&self) -> String {
        super::full_name(&self.first_name, &self.last_name)
    }

    pub fn role_names(&self) -> String {
        self.user_roles
            .iter()
            .map(|r| r.role.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Country code and mobile number as one dialable string.
    pub fn phone(&self) -> String {
        format!("{} {}", self.country_code, self.mobile_number)
            .trim()
            .to_owned()
    }
}

