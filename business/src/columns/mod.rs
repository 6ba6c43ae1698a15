//! Column sets and table presets for each entity list.

mod partners;
mod pending;
mod tippees;
mod users;

pub use partners::{partner_columns, partner_table_config, partners_table};
pub use pending::{pending_columns, pending_table_config, pending_table};
pub use tippees::{tippee_columns, tippee_table_config, tippees_table};
pub use users::{user_columns, user_table_config, users_table};

use chrono::{DateTime, Utc};

use crate::entities::{UserRole, format_date};
use crate::table::{Badge, Cell, SortValue, Tone};

fn date_cell(at: &DateTime<Utc>) -> Cell {
    Cell::text(format_date(at))
}

fn date_key(at: &DateTime<Utc>) -> SortValue {
    SortValue::Time(*at)
}

fn handle(user_name: &str) -> String {
    if user_name.is_empty() {
        String::new()
    } else {
        format!("@{user_name}")
    }
}

fn roles_cell(roles: &[UserRole]) -> Cell {
    if roles.is_empty() {
        return Cell::Muted("No roles".to_owned());
    }
    Cell::Badges(
        roles
            .iter()
            .map(|r| {
                let badge = Badge::new(&r.role, Tone::Neutral);
                if r.is_primary { badge.starred() } else { badge }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_cell() {
        assert_eq!(roles_cell(&[]), Cell::Muted("No roles".to_owned()));
        let roles = vec![
            UserRole {
                role: "admin".to_owned(),
                is_primary: true,
                ..UserRole::default()
            },
            UserRole {
                role: "tipper".to_owned(),
                ..UserRole::default()
            },
        ];
        assert_eq!(roles_cell(&roles).plain_text(), "★ admin, tipper");
    }

    #[test]
    fn test_handle() {
        assert_eq!(handle("asha"), "@asha");
        assert_eq!(handle(""), "");
    }
}
