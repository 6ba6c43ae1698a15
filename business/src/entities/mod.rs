//! Records returned by the admin API.
//!
//! All of them are read-only projections. String fields missing from a
//! payload deserialize as empty strings so search and display never fail.

mod business;
mod pending;
mod tippee;
mod user;

pub use business::{Business, BusinessOwner};
pub use pending::PendingUser;
pub use tippee::{LinkedBusiness, Tippee, TippeeProfile};
pub use user::{AuthUser, KNOWN_ROLES, User, UserRole};

use chrono::{DateTime, Utc};

/// Date used by the "Created" and "Requested" columns, e.g. `Jan 5, 2024`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

pub(crate) fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        assert_eq!(format_date(&at), "Jan 5, 2024");
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        assert_eq!(full_name("Jane", "Doe"), "Jane Doe");
        assert_eq!(full_name("Jane", ""), "Jane");
        assert_eq!(full_name("", ""), "");
    }
}
