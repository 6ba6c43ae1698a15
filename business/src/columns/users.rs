use crate::entities::User;
use crate::filters::user_filter;
use crate::table::{Badge, Cell, ColumnDef, DataTable, DataTableConfig, SortValue};

use super::{date_cell, date_key, handle, roles_cell};

pub fn user_columns() -> Vec<ColumnDef<User>> {
    vec![
        ColumnDef::actions(),
        ColumnDef::new("name", "Name", |u: &User| {
            Cell::stacked(u.full_name(), handle(&u.user_name))
        })
        .sortable(|u| SortValue::text(&u.full_name())),
        ColumnDef::new("email", "Email", |u: &User| Cell::text(&u.email)),
        ColumnDef::new("mobile", "Mobile", |u: &User| Cell::or_dash(&u.mobile_number)),
        ColumnDef::new("roles", "Roles", |u: &User| roles_cell(&u.user_roles)),
        ColumnDef::new("status", "Status", |u: &User| {
            Cell::Badges(vec![
                Badge::flag(u.is_active, "Active", "Inactive"),
                Badge::flag(u.is_verified, "Verified", "Unverified"),
                Badge::flag(u.is_approved, "Approved", "Pending"),
            ])
        }),
        ColumnDef::new("created", "Created", |u: &User| date_cell(&u.created_at))
            .sortable(|u| date_key(&u.created_at)),
    ]
}

pub fn user_table_config() -> DataTableConfig<User> {
    DataTableConfig::with_filter(user_filter)
        .search_placeholder("Search users...")
        .add_button("Add New User", "/dashboard/users/add")
        .empty_state("No users found.")
}

pub fn users_table() -> DataTable<User> {
    DataTable::new(user_columns(), user_table_config())
}
