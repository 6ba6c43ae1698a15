use crate::entities::PendingUser;
use crate::filters::pending_user_filter;
use crate::table::{Badge, Cell, ColumnDef, DataTable, DataTableConfig, SortValue};

use super::{date_cell, date_key, handle, roles_cell};

pub fn pending_columns() -> Vec<ColumnDef<PendingUser>> {
    vec![
        ColumnDef::new("name", "Name", |u: &PendingUser| {
            Cell::stacked(u.full_name(), handle(&u.user_name))
        })
        .sortable(|u| SortValue::text(&u.full_name())),
        ColumnDef::new("email", "Email", |u: &PendingUser| {
            Cell::stacked(&u.email, u.phone())
        }),
        ColumnDef::new("roles", "Roles", |u: &PendingUser| roles_cell(&u.user_roles)),
        ColumnDef::new("status", "Status", |u: &PendingUser| {
            Cell::Badges(vec![
                Badge::flag(u.is_verified, "Verified", "Unverified"),
                Badge::flag(u.is_mobile_verified, "Mobile Verified", "Mobile Unverified"),
            ])
        }),
        ColumnDef::new("requested", "Requested", |u: &PendingUser| {
            date_cell(&u.created_at)
        })
        .sortable(|u| date_key(&u.created_at)),
        ColumnDef::actions(),
    ]
}

pub fn pending_table_config() -> DataTableConfig<PendingUser> {
    DataTableConfig::with_filter(pending_user_filter)
        .search_placeholder("Search pending users...")
        .empty_state("No pending approvals.")
}

pub fn pending_table() -> DataTable<PendingUser> {
    DataTable::new(pending_columns(), pending_table_config())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_cell_carries_phone() {
        let user = PendingUser {
            email: "new@example.com".to_owned(),
            country_code: "+91".to_owned(),
            mobile_number: "9000000000".to_owned(),
            ..PendingUser::default()
        };
        let table = pending_table().with_data(vec![user]);
        assert_eq!(
            table.row_cells(0)[1].plain_text(),
            "new@example.com (+91 9000000000)"
        );
        assert!(table.config().add_button.is_none());
    }
}
