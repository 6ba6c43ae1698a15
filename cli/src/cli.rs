use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use tipdesk_business::forms::EntityType;
use tipdesk_business::query::{BusinessStatus, TippeeStatus, UserStatus};

#[derive(Parser)]
#[command(name = "tipdesk")]
#[command(about = "Admin console for the tipping platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Admin API base URL (overrides API_BASE_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with a staff account
    Login(LoginArgs),
    /// Sign out and forget the saved token
    Logout,
    /// Show the signed-in account and check the token
    Whoami,
    /// List users
    Users {
        #[command(flatten)]
        view: TableArgs,
        /// Server-side status filter
        #[arg(long)]
        status: Option<UserStatus>,
        /// Server-side role filter
        #[arg(long)]
        role: Option<String>,
        /// Server-side search (1-100 characters)
        #[arg(long)]
        query: Option<String>,
    },
    /// List accounts waiting for approval
    Pending {
        #[command(flatten)]
        view: TableArgs,
    },
    /// List partner businesses
    Partners {
        #[command(flatten)]
        view: TableArgs,
        /// Server-side status filter
        #[arg(long)]
        status: Option<BusinessStatus>,
        /// Server-side search (1-100 characters)
        #[arg(long)]
        query: Option<String>,
    },
    /// List tippees
    Tippees {
        #[command(flatten)]
        view: TableArgs,
        /// Server-side status filter
        #[arg(long)]
        status: Option<TippeeStatus>,
        /// Server-side search (1-100 characters)
        #[arg(long)]
        query: Option<String>,
    },
    /// Inspect or change a single user
    User {
        #[command(subcommand)]
        action: UserCommand,
    },
    /// Manage partner businesses
    Partner {
        #[command(subcommand)]
        action: PartnerCommand,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct LoginArgs {
    /// Email address or user name (prompted when missing)
    #[arg(long, short = 'l', conflicts_with_all = ["country_code", "mobile"])]
    pub login: Option<String>,
    /// Country code for mobile sign-in, e.g. +91
    #[arg(long, requires = "mobile")]
    pub country_code: Option<String>,
    /// Mobile number for mobile sign-in
    #[arg(long, requires = "country_code")]
    pub mobile: Option<String>,
    /// Password (prompted when missing)
    #[arg(long, env = "TIPDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Client-side view over a fetched list.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Keep rows where any searchable field contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,
    /// Sort by a column id, e.g. name or created
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
    /// Page to show, starting at 1
    #[arg(long, short = 'p', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    /// Rows per page
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,
    /// Hide a column by id (repeatable)
    #[arg(long)]
    pub hide: Vec<String>,
}

impl Default for TableArgs {
    fn default() -> Self {
        Self {
            search: None,
            sort: None,
            desc: false,
            page: 1,
            page_size: 10,
            hide: Vec::new(),
        }
    }
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Show one user
    Show { id: String },
    /// Set the active and verified flags
    Status {
        id: String,
        #[arg(long)]
        active: bool,
        #[arg(long)]
        verified: bool,
    },
    /// Soft-delete a user
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Restore a deleted user
    Restore { id: String },
    /// List a user's roles
    Roles { id: String },
    /// Give a user another role
    AddRole {
        id: String,
        role: String,
        /// Make it the primary role
        #[arg(long)]
        primary: bool,
    },
    /// Take a role away
    RemoveRole { id: String, role_id: String },
    /// Make one of the user's roles primary
    Primary { id: String, role_id: String },
}

#[derive(Subcommand)]
pub enum PartnerCommand {
    /// Mark a business as verified
    Verify { id: String },
    /// Mark a business as unverified
    Unverify { id: String },
    /// Create a business for an existing user
    Create(CreatePartnerArgs),
}

#[derive(Args, Debug, Default)]
pub struct CreatePartnerArgs {
    #[arg(long)]
    pub user_id: String,
    #[arg(long)]
    pub legal_name: String,
    #[arg(long)]
    pub brand_name: String,
    #[arg(long)]
    pub business_type: String,
    #[arg(long)]
    pub pan_number: String,
    /// individual, partnership, limited_liability, private_limited_company or limited_company
    #[arg(long, value_parser = parse_entity_type)]
    pub entity_type: Option<EntityType>,
    #[arg(long)]
    pub gst_number: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub pincode: Option<String>,
}

fn parse_entity_type(value: &str) -> Result<EntityType, String> {
    EntityType::parse(value).ok_or_else(|| {
        let known: Vec<&str> = EntityType::ALL.iter().map(|t| t.as_str()).collect();
        format!("expected one of: {}", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_users_view_flags() {
        let cli = Cli::try_parse_from([
            "tipdesk", "users", "--search", "acme", "--sort", "name", "--desc", "--page", "2",
            "--hide", "email", "--hide", "mobile", "--status", "active",
        ])
        .expect("valid arguments");
        let Commands::Users { view, status, .. } = cli.command else {
            panic!("expected users command");
        };
        assert_eq!(view.search.as_deref(), Some("acme"));
        assert!(view.desc);
        assert_eq!(view.page, 2);
        assert_eq!(view.hide, ["email", "mobile"]);
        assert_eq!(status, Some(UserStatus::Active));
    }

    #[test]
    fn test_page_zero_is_rejected() {
        assert!(Cli::try_parse_from(["tipdesk", "pending", "--page", "0"]).is_err());
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["tipdesk", "tippees", "--desc"]).is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(Cli::try_parse_from(["tipdesk", "partners", "--status", "archived"]).is_err());
    }

    #[test]
    fn test_mobile_login_needs_both_parts() {
        assert!(Cli::try_parse_from(["tipdesk", "login", "--mobile", "9876543210"]).is_err());
        let cli = Cli::try_parse_from([
            "tipdesk",
            "login",
            "--country-code",
            "+91",
            "--mobile",
            "9876543210",
        ])
        .expect("valid arguments");
        assert!(matches!(cli.command, Commands::Login(_)));
    }

    #[test]
    fn test_partner_create_parses_entity_type() {
        let cli = Cli::try_parse_from([
            "tipdesk",
            "partner",
            "create",
            "--user-id",
            "u-1",
            "--legal-name",
            "Acme Private Limited",
            "--brand-name",
            "Acme",
            "--business-type",
            "restaurant",
            "--pan-number",
            "ABCDE1234F",
            "--entity-type",
            "private_limited_company",
        ])
        .expect("valid arguments");
        let Commands::Partner {
            action: PartnerCommand::Create(args),
        } = cli.command
        else {
            panic!("expected partner create");
        };
        assert_eq!(args.entity_type, Some(EntityType::PrivateLimitedCompany));
    }
}
