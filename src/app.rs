// Startup sequence: liveness check, login, then hand over to the REPL.

use anyhow::{Context, Result};
use tracing::info;

use crate::api::ApiClient;
use crate::auth::AuthGateway;
use crate::config::Config;
use crate::error::StartupError;
use crate::repl::Repl;
use crate::session::Session;
use crate::token::TokenStore;
use crate::ui::{spinner, Console};

/// Check that the server is up and log in. Any failure is fatal and happens
/// before the REPL starts.
pub fn bootstrap(
    api: &ApiClient,
    tokens: &TokenStore,
    console: &mut dyn Console,
) -> Result<Session, StartupError> {
    console.print("Checking server status...");
    let progress = spinner("Contacting server...");
    let online = api.is_server_online();
    progress.finish_and_clear();
    if !online.map_err(StartupError::Liveness)? {
        return Err(StartupError::ServerNotReady);
    }
    console.print("Server is ready.");

    console.print("Please login to continue.");
    let token = AuthGateway::new(api, tokens).login(console)?;
    console.print(&format!("Logged in with {}", token));
    info!("authenticated");

    Ok(Session::new(token))
}

/// Run the whole client against the configured server. Returns once the user
/// exits the REPL.
pub fn run(config: &Config, console: &mut dyn Console) -> Result<()> {
    let api = ApiClient::from_config(config)?;
    let tokens = TokenStore::new(&config.token_path);

    let session = bootstrap(&api, &tokens, console)?;
    Repl::new(session)
        .run(&api, console)
        .context("Failed to read REPL input")?;
    Ok(())
}
