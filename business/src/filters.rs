//! Search predicates for each entity table.
//!
//! Every predicate ignores the column id and matches the query, case
//! insensitively, against a fixed set of fields. Absent optional fields
//! count as empty strings.

use crate::entities::{Business, PendingUser, Tippee, User};
use crate::table::contains_any;

pub fn business_filter(row: &Business, _column_id: &str, query: &str) -> bool {
    contains_any(
        [
            row.legal_name.as_str(),
            row.brand_name.as_str(),
            row.business_type.as_str(),
        ],
        query,
    )
}

pub fn user_filter(row: &User, _column_id: &str, query: &str) -> bool {
    let roles = row.role_names();
    contains_any(
        [
            row.first_name.as_str(),
            row.last_name.as_str(),
            row.email.as_str(),
            row.user_name.as_str(),
            row.mobile_number.as_str(),
            roles.as_str(),
        ],
        query,
    )
}

pub fn pending_user_filter(row: &PendingUser, _column_id: &str, query: &str) -> bool {
    let roles = row.role_names();
    contains_any(
        [
            row.first_name.as_str(),
            row.last_name.as_str(),
            row.email.as_str(),
            row.user_name.as_str(),
            row.mobile_number.as_str(),
            row.country_code.as_str(),
            roles.as_str(),
        ],
        query,
    )
}

pub fn tippee_filter(row: &Tippee, _column_id: &str, query: &str) -> bool {
    contains_any(
        [
            row.first_name.as_str(),
            row.last_name.as_str(),
            row.email.as_str(),
            row.mobile_number.as_str(),
            row.user_name.as_str(),
        ],
        query,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::UserRole;

    fn business(legal_name: &str) -> Business {
        Business {
            legal_name: legal_name.to_owned(),
            ..Business::default()
        }
    }

    #[test]
    fn test_business_matches_legal_brand_and_type() {
        let row = Business {
            legal_name: "Acme Corp".to_owned(),
            brand_name: "Roadrunner".to_owned(),
            business_type: "Restaurant".to_owned(),
            city: "Pune".to_owned(),
            ..Business::default()
        };
        assert!(business_filter(&row, "name", "acme"));
        assert!(business_filter(&row, "name", "RUNNER"));
        assert!(business_filter(&row, "name", "restau"));
        assert!(!business_filter(&row, "name", "pune"));
    }

    #[test]
    fn test_business_without_optional_fields() {
        assert!(!business_filter(&business(""), "name", "x"));
        assert!(business_filter(&business(""), "name", ""));
    }

    #[test]
    fn test_user_matches_role_names() {
        let row = User {
            first_name: "Asha".to_owned(),
            user_roles: vec![
                UserRole {
                    role: "Admin".to_owned(),
                    ..UserRole::default()
                },
                UserRole {
                    role: "Tipper".to_owned(),
                    ..UserRole::default()
                },
            ],
            ..User::default()
        };
        assert!(user_filter(&row, "name", "admin"));
        assert!(user_filter(&row, "name", "n tip"));
        assert!(user_filter(&row, "name", "ASH"));
        assert!(!user_filter(&row, "name", "tippee"));
    }

    #[test]
    fn test_user_ignores_country_code_but_pending_does_not() {
        let user = User {
            country_code: "+91".to_owned(),
            ..User::default()
        };
        let pending = PendingUser {
            country_code: "+91".to_owned(),
            ..PendingUser::default()
        };
        assert!(!user_filter(&user, "email", "+91"));
        assert!(pending_user_filter(&pending, "email", "+91"));
    }

    #[test]
    fn test_tippee_fields() {
        let row = Tippee {
            email: "meera@example.com".to_owned(),
            mobile_number: "9000000001".to_owned(),
            ..Tippee::default()
        };
        assert!(tippee_filter(&row, "email", "EXAMPLE"));
        assert!(tippee_filter(&row, "email", "0001"));
        assert!(!tippee_filter(&row, "email", "meera rao"));
    }
}
