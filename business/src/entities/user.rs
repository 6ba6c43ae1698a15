use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roles an administrator can assign.
pub const KNOWN_ROLES: &[&str] = &["admin", "business", "tipper", "tippee"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRole {
    pub id: String,
    pub role: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
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
    pub is_deleted: bool,
    pub user_roles: Vec<UserRole>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        super::full_name(&self.first_name, &self.last_name)
    }

    /// Lowercased role names joined by spaces, as matched by search.
    pub fn role_names(&self) -> String {
        self.user_roles
            .iter()
            .map(|r| r.role.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn primary_role(&self) -> Option<&UserRole> {
        self.user_roles.iter().find(|r| r.is_primary)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.user_roles
            .iter()
            .any(|r| r.role.eq_ignore_ascii_case(role))
    }

    /// Known roles the user does not hold yet.
    pub fn assignable_roles(&self) -> Vec<&'static str> {
        KNOWN_ROLES
            .iter()
            .copied()
            .filter(|role| !self.has_role(role))
            .collect()
    }
}

/// The signed-in staff member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub mobile_number: String,
    pub country_code: String,
    pub email: String,
    pub roles: Vec<String>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AuthUser {
    pub fn display_name(&self) -> String {
        let name = super::full_name(&self.first_name, &self.last_name);
        if name.is_empty() {
            self.user_name.clone()
        } else {
            name
        }
    }
}
