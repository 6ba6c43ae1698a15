use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;
use tipdesk_cli::cli::{Cli, Commands};
use tipdesk_cli::commands::{
    generate_completions, list::Filters, run_login, run_logout, run_partner, run_partners,
    run_pending, run_tippees, run_user, run_users, run_whoami,
};
use tipdesk_cli::output::Output;
use tipdesk_cli::session::Context;
use tipdesk_cli::timing;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = dotenvy::dotenv() {
        // a missing .env file is the normal case
        if !err.not_found() {
            Output::new().warning(format!("Ignoring .env: {err}"));
        }
    }
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            Output::new().error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let mut ctx = Context::load(cli.api_url)?;
    match cli.command {
        Commands::Login(args) => run_login(&mut ctx, args).await,
        Commands::Logout => run_logout(&mut ctx).await,
        Commands::Whoami => run_whoami(&ctx).await,
        Commands::Users {
            view,
            status,
            role,
            query,
        } => {
            let filters = Filters {
                status,
                role,
                query,
            };
            run_users(&ctx, filters, view).await
        }
        Commands::Pending { view } => run_pending(&ctx, view).await,
        Commands::Partners {
            view,
            status,
            query,
        } => {
            let filters = Filters {
                status,
                role: None,
                query,
            };
            run_partners(&ctx, filters, view).await
        }
        Commands::Tippees {
            view,
            status,
            query,
        } => {
            let filters = Filters {
                status,
                role: None,
                query,
            };
            run_tippees(&ctx, filters, view).await
        }
        Commands::User { action } => run_user(&ctx, action).await,
        Commands::Partner { action } => run_partner(&ctx, action).await,
        Commands::Completions { .. } => Ok(()),
    }
}
