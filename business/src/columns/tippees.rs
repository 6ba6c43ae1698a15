use crate::entities::Tippee;
use crate::filters::tippee_filter;
use crate::table::{Badge, Cell, ColumnDef, DataTable, DataTableConfig, SortValue};

use super::{date_cell, date_key, handle};

pub fn tippee_columns() -> Vec<ColumnDef<Tippee>> {
    vec![
        ColumnDef::actions(),
        ColumnDef::new("name", "Name", |t: &Tippee| {
            Cell::stacked(t.full_name(), handle(&t.user_name))
        })
        .sortable(|t| SortValue::text(&t.full_name())),
        ColumnDef::new("email", "Email", |t: &Tippee| Cell::text(&t.email)),
        ColumnDef::new("mobile", "Mobile", |t: &Tippee| Cell::or_dash(&t.mobile_number)),
        ColumnDef::new("business", "Business", |t: &Tippee| match &t.business {
            Some(b) => Cell::stacked(&b.brand_name, &b.legal_name),
            None => Cell::Muted("Independent".to_owned()),
        }),
        ColumnDef::new("status", "Status", |t: &Tippee| {
            Cell::Badges(vec![
                Badge::flag(t.is_active, "Active", "Inactive"),
                Badge::flag(t.is_verified, "Verified", "Unverified"),
            ])
        }),
        ColumnDef::new("created", "Created", |t: &Tippee| date_cell(&t.created_at))
            .sortable(|t| date_key(&t.created_at)),
    ]
}

pub fn tippee_table_config() -> DataTableConfig<Tippee> {
    DataTableConfig::with_filter(tippee_filter)
        .search_placeholder("Search tippees...")
        .add_button("Add New Tippee", "/dashboard/tippees/add")
        .empty_state("No tippees found.")
}

pub fn tippees_table() -> DataTable<Tippee> {
    DataTable::new(tippee_columns(), tippee_table_config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::LinkedBusiness;

    #[test]
    fn test_business_column() {
        let linked = Tippee {
            business: Some(LinkedBusiness {
                brand_name: "Cafe Blue".to_owned(),
                ..LinkedBusiness::default()
            }),
            ..Tippee::default()
        };
        let table = tippees_table().with_data(vec![linked, Tippee::default()]);
        assert_eq!(table.row_cells(0)[4].plain_text(), "Cafe Blue");
        assert_eq!(table.row_cells(1)[4].plain_text(), "Independent");
    }

    #[test]
    fn test_config() {
        let config = tippee_table_config();
        assert_eq!(config.search_placeholder, "Search tippees...");
        assert_eq!(config.empty_state_message, "No tippees found.");
        assert_eq!(
            config.add_button.map(|b| b.href).as_deref(),
            Some("/dashboard/tippees/add")
        );
    }
}
