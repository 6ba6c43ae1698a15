//! Single-user commands.

use anyhow::{Context as _, Result, bail};
use inquire::Confirm;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tipdesk_business::entities::{KNOWN_ROLES, User, UserRole, format_date};
use tipdesk_business::{ApiClient, UserStatusUpdate};
use tracing::instrument;

use super::report;
use crate::cli::UserCommand;
use crate::output::Output;
use crate::session::Context;

#[derive(Tabled)]
pub struct RoleRow {
    #[tabled(rename = "Role ID")]
    pub id: String,
    #[tabled(rename = "Role")]
    pub role: String,
    #[tabled(rename = "Primary")]
    pub primary: &'static str,
    #[tabled(rename = "Since")]
    pub since: String,
}

impl From<&UserRole> for RoleRow {
    fn from(role: &UserRole) -> Self {
        Self {
            id: role.id.clone(),
            role: role.role.clone(),
            primary: if role.is_primary { "★" } else { "" },
            since: format_date(&role.created_at),
        }
    }
}

pub fn roles_table(roles: &[UserRole]) -> String {
    let rows: Vec<RoleRow> = roles.iter().map(RoleRow::from).collect();
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Rejects roles the platform does not know before calling the API.
pub async fn add_role(
    client: &ApiClient,
    user_id: &str,
    role: &str,
    primary: bool,
) -> Result<String> {
    let role = role.trim().to_lowercase();
    if !KNOWN_ROLES.iter().any(|known| *known == role) {
        bail!(
            "unknown role `{role}`; known roles: {}",
            KNOWN_ROLES.join(", ")
        );
    }
    Ok(client.add_user_role(user_id, &role, primary).await?)
}

fn print_user(out: &Output, user: &User) {
    out.header(user.full_name());
    out.labeled("ID", &user.id);
    out.labeled("Username", &user.user_name);
    out.labeled("Email", &user.email);
    out.labeled(
        "Mobile",
        format!("{} {}", user.country_code, user.mobile_number).trim(),
    );
    let flag = |on: bool| if on { "yes" } else { "no" };
    out.labeled("Active", flag(user.is_active));
    out.labeled("Verified", flag(user.is_verified));
    out.labeled("Approved", flag(user.is_approved));
    out.labeled("Deleted", flag(user.is_deleted));
    out.labeled("Created", format_date(&user.created_at));
    if user.user_roles.is_empty() {
        out.labeled("Roles", "No roles");
    } else {
        out.print(roles_table(&user.user_roles));
    }
}

#[instrument(skip_all, name = "user")]
pub async fn run_user(ctx: &Context, action: UserCommand) -> Result<()> {
    let out = Output::new();
    let client = ctx.authed()?;
    match action {
        UserCommand::Show { id } => {
            let user = client.get_user(&id).await?;
            print_user(&out, &user);
        }
        UserCommand::Status {
            id,
            active,
            verified,
        } => {
            let update = UserStatusUpdate {
                is_active: active,
                is_verified: verified,
            };
            let message = client.update_user_status(&id, update).await?;
            report(&out, &message, "User status updated");
        }
        UserCommand::Delete { id, yes } => {
            let confirmed = yes
                || Confirm::new(&format!("Delete user {id}?"))
                    .with_default(false)
                    .prompt()
                    .context("Failed to read confirmation")?;
            if !confirmed {
                out.info("Cancelled");
                return Ok(());
            }
            let message = client.delete_user(&id).await?;
            report(&out, &message, "User deleted");
        }
        UserCommand::Restore { id } => {
            let message = client.restore_user(&id).await?;
            report(&out, &message, "User restored");
        }
        UserCommand::Roles { id } => {
            let roles = client.list_user_roles(&id).await?;
            if roles.is_empty() {
                out.dim("No roles");
            } else {
                out.print(roles_table(&roles));
            }
        }
        UserCommand::AddRole { id, role, primary } => {
            let message = add_role(&client, &id, &role, primary).await?;
            report(&out, &message, &format!("Role {role} added"));
        }
        UserCommand::RemoveRole { id, role_id } => {
            let message = client.remove_user_role(&id, &role_id).await?;
            report(&out, &message, "Role removed");
        }
        UserCommand::Primary { id, role_id } => {
            let message = client.set_primary_role(&id, &role_id).await?;
            report(&out, &message, "Primary role updated");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_table_marks_primary() {
        let roles = vec![
            UserRole {
                id: "r-1".to_owned(),
                role: "tipper".to_owned(),
                is_primary: true,
                ..UserRole::default()
            },
            UserRole {
                id: "r-2".to_owned(),
                role: "tippee".to_owned(),
                ..UserRole::default()
            },
        ];
        let text = roles_table(&roles);
        let tipper = text.lines().find(|l| l.contains("tipper")).unwrap_or_default();
        let tippee = text.lines().find(|l| l.contains("tippee")).unwrap_or_default();
        assert!(tipper.contains('★'));
        assert!(!tippee.contains('★'));
    }
}
