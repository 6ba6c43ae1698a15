//! Entity list commands.

use anyhow::Result;
use tipdesk_business::ApiClient;
use tipdesk_business::columns::{partners_table, pending_table, tippees_table, users_table};
use tipdesk_business::entities::{Business, PendingUser, Tippee, User};
use tipdesk_business::query::{
    BusinessListQuery, BusinessStatus, Paging, TippeeListQuery, TippeeStatus, UserListQuery,
    UserStatus,
};
use tipdesk_business::table::DataTable;
use tracing::instrument;

use crate::cli::TableArgs;
use crate::output::Output;
use crate::render::{render_footer, render_table};
use crate::session::Context;

/// Lists are fetched in one request and paged locally.
const FETCH_LIMIT: u32 = 100;

fn fetch_paging() -> Paging {
    Paging::new(1, FETCH_LIMIT)
}

/// Server-side filters shared by the list endpoints.
#[derive(Debug, Clone)]
pub struct Filters<S> {
    pub status: Option<S>,
    pub role: Option<String>,
    pub query: Option<String>,
}

// Derived `Default` would require `S: Default`.
impl<S> Default for Filters<S> {
    fn default() -> Self {
        Self {
            status: None,
            role: None,
            query: None,
        }
    }
}

pub async fn users(
    client: &ApiClient,
    filters: Filters<UserStatus>,
    view: &TableArgs,
) -> Result<DataTable<User>> {
    let query = UserListQuery {
        paging: fetch_paging(),
        status: filters.status,
        role: filters.role,
        search: filters.query,
    };
    let mut table = users_table().with_data(client.list_users(&query).await?);
    view.apply(&mut table)?;
    Ok(table)
}

pub async fn pending(client: &ApiClient, view: &TableArgs) -> Result<DataTable<PendingUser>> {
    let mut table = pending_table().with_data(client.list_pending_users().await?);
    view.apply(&mut table)?;
    Ok(table)
}

pub async fn partners(
    client: &ApiClient,
    filters: Filters<BusinessStatus>,
    view: &TableArgs,
) -> Result<DataTable<Business>> {
    let query = BusinessListQuery {
        paging: fetch_paging(),
        status: filters.status,
        search: filters.query,
    };
    let mut table = partners_table().with_data(client.list_businesses(&query).await?);
    view.apply(&mut table)?;
    Ok(table)
}

pub async fn tippees(
    client: &ApiClient,
    filters: Filters<TippeeStatus>,
    view: &TableArgs,
) -> Result<DataTable<Tippee>> {
    let query = TippeeListQuery {
        paging: fetch_paging(),
        status: filters.status,
        search: filters.query,
    };
    let mut table = tippees_table().with_data(client.list_tippees(&query).await?);
    view.apply(&mut table)?;
    Ok(table)
}

fn print<T>(title: &str, table: &DataTable<T>) {
    let out = Output::new();
    out.header(title);
    out.print(render_table(table));
    out.dim(render_footer(table));
}

#[instrument(skip_all, name = "users")]
pub async fn run_users(ctx: &Context, filters: Filters<UserStatus>, view: TableArgs) -> Result<()> {
    let table = users(&ctx.authed()?, filters, &view).await?;
    print("Users", &table);
    Ok(())
}

#[instrument(skip_all, name = "pending")]
pub async fn run_pending(ctx: &Context, view: TableArgs) -> Result<()> {
    let table = pending(&ctx.authed()?, &view).await?;
    print("Pending Approvals", &table);
    Ok(())
}

#[instrument(skip_all, name = "partners")]
pub async fn run_partners(
    ctx: &Context,
    filters: Filters<BusinessStatus>,
    view: TableArgs,
) -> Result<()> {
    let table = partners(&ctx.authed()?, filters, &view).await?;
    print("Partners", &table);
    Ok(())
}

#[instrument(skip_all, name = "tippees")]
pub async fn run_tippees(
    ctx: &Context,
    filters: Filters<TippeeStatus>,
    view: TableArgs,
) -> Result<()> {
    let table = tippees(&ctx.authed()?, filters, &view).await?;
    print("Tippees", &table);
    Ok(())
}
