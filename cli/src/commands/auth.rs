//! Sign in, sign out and session status.

use anyhow::{Context as _, Result};
use inquire::{Password, PasswordDisplayMode, Text};
use tipdesk_business::Session;
use tipdesk_business::forms::SigninForm;
use tracing::{info, instrument, warn};

use crate::cli::LoginArgs;
use crate::output::Output;
use crate::session::Context;

/// Validates the form, signs in and saves the token.
pub async fn sign_in(ctx: &mut Context, form: &SigninForm) -> Result<Session> {
    let request = form.validate()?;
    let mut client = ctx.client();
    let session = client.sign_in(&request).await?;
    ctx.config
        .set_auth(&session.user.display_name(), &request.identity(), &session.token);
    ctx.set_token(Some(session.token.clone()));
    ctx.save()?;
    info!(identity = %request.identity(), "signed in");
    Ok(session)
}

/// Forgets the saved token. Returns false when nobody was signed in.
///
/// A failed server call is logged and otherwise ignored.
pub async fn sign_out(ctx: &mut Context) -> Result<bool> {
    let Ok(mut client) = ctx.authed() else {
        return Ok(false);
    };
    if let Err(err) = client.sign_out().await {
        warn!("server sign out failed: {err}");
    }
    ctx.config.clear_auth();
    ctx.set_token(None);
    ctx.save()?;
    Ok(true)
}

fn prompt_form(args: LoginArgs) -> Result<SigninForm> {
    let password = match args.password {
        Some(password) => password,
        None => Password::new("Password:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()
            .context("Failed to read password")?,
    };
    if let (Some(country_code), Some(mobile_number)) = (args.country_code, args.mobile) {
        return Ok(SigninForm {
            country_code,
            mobile_number,
            password,
            ..SigninForm::default()
        });
    }
    let login = match args.login {
        Some(login) => login,
        None => Text::new("Email or username:")
            .prompt()
            .context("Failed to read login")?,
    };
    Ok(SigninForm::with_login(&login, &password))
}

#[instrument(skip_all, name = "login")]
pub async fn run_login(ctx: &mut Context, args: LoginArgs) -> Result<()> {
    let out = Output::new();
    out.header("Sign in to Tipdesk");
    out.newline();

    let form = prompt_form(args)?;
    let session = sign_in(ctx, &form).await?;

    out.newline();
    out.success(format!("Signed in as {}", session.user.display_name()));
    out.dim(format!("Token saved to {}", ctx.config_path().display()));
    Ok(())
}

#[instrument(skip_all, name = "logout")]
pub async fn run_logout(ctx: &mut Context) -> Result<()> {
    let out = Output::new();
    if sign_out(ctx).await? {
        out.success("Signed out");
    } else {
        out.info("Not currently signed in.");
    }
    Ok(())
}

#[instrument(skip_all, name = "whoami")]
pub async fn run_whoami(ctx: &Context) -> Result<()> {
    let out = Output::new();
    let Ok(client) = ctx.authed() else {
        out.info("Not signed in. Use `tipdesk login` to sign in.");
        return Ok(());
    };

    let auth = &ctx.config.auth;
    out.labeled("Name", auth.name.as_deref().unwrap_or("unknown"));
    out.labeled("Signed in with", auth.identity.as_deref().unwrap_or("unknown"));
    out.labeled("API", client.config().base_url());

    if client.verify_session().await? {
        out.success("Token is valid");
    } else {
        out.warning("Token was rejected. Run `tipdesk login` again.");
    }
    Ok(())
}
