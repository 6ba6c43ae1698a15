//! Dashboard pages and their paths.

use tipdesk_business::query::QueryKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Users,
    PendingApprovals,
    Partners,
    AddPartner,
    Tippees,
}

impl Route {
    /// Entries of the navigation sidebar.
    pub const NAV: [Self; 4] = [
        Self::Users,
        Self::PendingApprovals,
        Self::Partners,
        Self::Tippees,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::PendingApprovals => "Pending Approvals",
            Self::Partners => "Partners",
            Self::AddPartner => "Add Partner",
            Self::Tippees => "Tippees",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Users => "/dashboard/users",
            Self::PendingApprovals => "/dashboard/users/pending",
            Self::Partners => "/dashboard/partners",
            Self::AddPartner => "/dashboard/partners/add",
            Self::Tippees => "/dashboard/tippees",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        [
            Self::Users,
            Self::PendingApprovals,
            Self::Partners,
            Self::AddPartner,
            Self::Tippees,
        ]
        .into_iter()
        .find(|route| route.path() == path)
    }

    /// The list this page shows, if any.
    pub fn query(self) -> Option<QueryKey> {
        match self {
            Self::Users => Some(QueryKey::Users),
            Self::PendingApprovals => Some(QueryKey::PendingUsers),
            Self::Partners => Some(QueryKey::Businesses),
            Self::Tippees => Some(QueryKey::Tippees),
            Self::AddPartner => None,
        }
    }

    /// The sidebar entry highlighted while this page is open.
    pub fn nav_parent(self) -> Self {
        match self {
            Self::AddPartner => Self::Partners,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve() {
        assert_eq!(
            Route::from_path("/dashboard/partners/add"),
            Some(Route::AddPartner)
        );
        assert_eq!(Route::from_path("/dashboard/tippees/"), Some(Route::Tippees));
        assert_eq!(Route::from_path("/dashboard/users/add"), None);
    }

    #[test]
    fn test_add_partner_highlights_partners() {
        assert_eq!(Route::AddPartner.nav_parent(), Route::Partners);
        assert_eq!(Route::AddPartner.query(), None);
    }
}
