/*
[INPUT]:  Interactive credentials via CLI prompts
[OUTPUT]: Stored portal session (or a cleared one)
[POS]:    CLI sign-in/sign-out flows
[UPDATE]: When auth endpoints or the stored session change
*/

use anyhow::{anyhow, Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use tracing::warn;

use taskdesk_client::{LoginRequest, PortalClient, SessionToken};
use taskdesk_tui::PortalConfig;

use crate::session::{SessionStore, StoredSession};

/// Prompt for credentials, sign in, and persist the session
pub async fn run_login(config: &PortalConfig) -> Result<()> {
    println!("{}", style("Sign in to the task portal").bold().cyan());
    println!("{}", style(format!("Backend: {}", config.base_url)).dim());

    let theme = ColorfulTheme::default();

    let email: String = Input::with_theme(&theme)
        .with_prompt("Email")
        .interact_text()?;

    let password: String = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let mut client = PortalClient::with_config(config.client_config(), &config.base_url)
        .map_err(|err| anyhow!("create portal client failed: {err}"))?;

    let token = client
        .login(&LoginRequest { email, password })
        .await
        .map_err(|err| anyhow!("login failed: {err}"))?;

    let profile = client
        .me()
        .await
        .map_err(|err| anyhow!("fetch profile failed: {err}"))?;

    let store = SessionStore::default_store();
    store
        .save(&StoredSession::new(
            token.access_token,
            config.base_url.clone(),
        ))
        .context("store session")?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Signed in as {} ({})",
        style(&profile.name).cyan(),
        profile.department_name
    );
    Ok(())
}

/// End the backend session and remove the stored token
pub async fn run_logout(config: &PortalConfig) -> Result<()> {
    let store = SessionStore::default_store();
    let Some(session) = store.load() else {
        println!("{}", style("No stored session.").dim());
        return Ok(());
    };

    let mut client = PortalClient::with_config(config.client_config(), &config.base_url)
        .map_err(|err| anyhow!("create portal client failed: {err}"))?;
    client.set_session(SessionToken::new(session.access_token));

    // The backend session may already be gone; the local copy goes away
    // regardless.
    if let Err(err) = client.logout().await {
        warn!(error = %err, "backend logout failed");
    }

    store.clear().context("clear stored session")?;
    println!("{}", style("Signed out.").green());
    Ok(())
}
