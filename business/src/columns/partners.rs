use crate::entities::Business;
use crate::filters::business_filter;
use crate::table::{Badge, Cell, ColumnDef, DataTable, DataTableConfig, SortValue};

use super::{date_cell, date_key};

pub fn partner_columns() -> Vec<ColumnDef<Business>> {
    vec![
        ColumnDef::actions(),
        ColumnDef::new("business", "Business Name", |b: &Business| {
            Cell::stacked(&b.legal_name, &b.brand_name)
        })
        .sortable(|b| SortValue::text(&b.legal_name)),
        ColumnDef::new("type", "Type", |b: &Business| Cell::text(&b.business_type)),
        ColumnDef::new("gst", "GST Number", |b: &Business| {
            Cell::or_dash(b.gst_number.as_deref().unwrap_or_default())
        }),
        ColumnDef::new("pan", "PAN Number", |b: &Business| {
            Cell::or_dash(b.pan_number.as_deref().unwrap_or_default())
        }),
        ColumnDef::new("location", "Location", |b: &Business| Cell::or_dash(&b.location())),
        ColumnDef::new("owner", "Owner", |b: &Business| {
            Cell::stacked(b.user.full_name(), &b.user.email)
        }),
        ColumnDef::new("status", "Status", |b: &Business| {
            Cell::Badges(vec![Badge::flag(b.is_verified, "Verified", "Unverified")])
        }),
        ColumnDef::new("created", "Created", |b: &Business| date_cell(&b.created_at))
            .sortable(|b| date_key(&b.created_at)),
    ]
}

pub fn partner_table_config() -> DataTableConfig<Business> {
    DataTableConfig::with_filter(business_filter)
        .search_placeholder("Search partners...")
        .add_button("Add New Partner", "/dashboard/partners/add")
        .empty_state("No partners found.")
}

pub fn partners_table() -> DataTable<Business> {
    DataTable::new(partner_columns(), partner_table_config())
}
