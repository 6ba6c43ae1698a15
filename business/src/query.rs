//! Server-side list parameters and cache keys.
//!
//! List calls accept paging plus optional status, role and search filters.
//! Each list is cached under a [`QueryKey`]; a [`Mutation`] names the keys it
//! invalidates so front ends know which lists to refetch after it succeeds.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const MAX_LIMIT: u32 = 100;
pub const MAX_SEARCH_LEN: usize = 100;

/// `x-page` / `x-limit` request headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl Paging {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page < 1 {
            return Err(ValidationError::new("page", "must be at least 1"));
        }
        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(ValidationError::new(
                "limit",
                format!("must be between 1 and {MAX_LIMIT}"),
            ));
        }
        Ok(())
    }
}

fn validate_search(search: Option<&str>) -> Result<(), ValidationError> {
    match search {
        Some("") => Err(ValidationError::new("search", "must not be empty")),
        Some(s) if s.chars().count() > MAX_SEARCH_LEN => Err(ValidationError::new(
            "search",
            format!("must be at most {MAX_SEARCH_LEN} characters"),
        )),
        _ => Ok(()),
    }
}

macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|status| status.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        ValidationError::new("status", format!("must be one of {}", allowed.join(", ")))
                    })
            }
        }
    };
}

status_enum!(
    /// Server-side filter for the users list.
    UserStatus {
        Active => "active",
        Inactive => "inactive",
        Verified => "verified",
        Unverified => "unverified",
        Approved => "approved",
        Pending => "pending",
    }
);

status_enum!(BusinessStatus {
    Verified => "verified",
    Unverified => "unverified",
});

status_enum!(TippeeStatus {
    Active => "active",
    Inactive => "inactive",
    Verified => "verified",
    Unverified => "unverified",
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub paging: Paging,
    pub status: Option<UserStatus>,
    pub role: Option<String>,
    pub search: Option<String>,
}

impl UserListQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.paging.validate()?;
        if self.role.as_deref() == Some("") {
            return Err(ValidationError::new("role", "must not be empty"));
        }
        validate_search(self.search.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessListQuery {
    pub paging: Paging,
    pub status: Option<BusinessStatus>,
    pub search: Option<String>,
}

impl BusinessListQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.paging.validate()?;
        validate_search(self.search.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TippeeListQuery {
    pub paging: Paging,
    pub status: Option<TippeeStatus>,
    pub search: Option<String>,
}

impl TippeeListQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.paging.validate()?;
        validate_search(self.search.as_deref())
    }
}

/// Identifies a cached list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    Users,
    PendingUsers,
    Businesses,
    Tippees,
}

/// Write operations against the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    UpdateUserStatus,
    AddRole,
    RemoveRole,
    SetPrimaryRole,
    DeleteUser,
    RestoreUser,
    VerifyBusiness,
    CreateBusiness,
}

impl Mutation {
    /// Lists that are stale once this mutation succeeds.
    pub fn invalidates(self) -> &'static [QueryKey] {
        match self {
            Self::UpdateUserStatus => &[QueryKey::Users, QueryKey::PendingUsers],
            Self::AddRole
            | Self::RemoveRole
            | Self::SetPrimaryRole
            | Self::DeleteUser
            | Self::RestoreUser => &[QueryKey::Users],
            Self::VerifyBusiness | Self::CreateBusiness => &[QueryKey::Businesses],
        }
    }
}
