// Login flow.
//
// A persisted token is reused as-is without asking the server. Otherwise the
// user is prompted for credentials, which are checked locally first and then
// exchanged for a token at `/auth/signin`. Every failure here is fatal.

use tracing::{debug, info};

use crate::api::{ApiClient, SignInRequest};
use crate::error::StartupError;
use crate::token::TokenStore;
use crate::ui::{spinner, Console};

pub const MIN_PASSWORD_LEN: usize = 8;

pub struct AuthGateway<'a> {
    api: &'a ApiClient,
    tokens: &'a TokenStore,
}

impl<'a> AuthGateway<'a> {
    pub fn new(api: &'a ApiClient, tokens: &'a TokenStore) -> Self {
        AuthGateway { api, tokens }
    }

    /// Return a session token, signing in interactively when none is stored.
    pub fn login(&self, console: &mut dyn Console) -> Result<String, StartupError> {
        if let Some(token) = self.tokens.load()? {
            info!(path = %self.tokens.path().display(), "reusing stored token");
            return Ok(token);
        }

        let username = console.read_text("Enter your username")?.trim().to_string();
        if username.is_empty() {
            return Err(StartupError::InvalidUsername);
        }

        let users = self.api.users().map_err(StartupError::UserList)?;
        if !users.iter().any(|user| user.username == username) {
            return Err(StartupError::UnknownUser(username));
        }

        let password = console.read_password("Enter your password")?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(StartupError::InvalidPassword);
        }

        let progress = spinner("Signing in...");
        let result = self.api.sign_in(&SignInRequest { username, password });
        progress.finish_and_clear();
        let token = result.map_err(StartupError::SignIn)?;

        self.tokens.save(&token)?;
        debug!(path = %self.tokens.path().display(), "token saved");
        Ok(token)
    }

    /// Account registration is not offered by this client yet.
    pub fn register(&self) {}
}
