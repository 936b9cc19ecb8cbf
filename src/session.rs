// Per-process session state handed to every REPL command.

use crate::scope::ScopeStore;

#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    /// Shown before `> ` on every REPL line. Only `prompt` changes it.
    pub prompt: String,
    pub scopes: ScopeStore,
}

impl Session {
    /// Fresh session for `token` with an empty prompt and seeded scopes.
    pub fn new(token: impl Into<String>) -> Self {
        Session {
            token: token.into(),
            prompt: String::new(),
            scopes: ScopeStore::seeded(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn prompt_line(&self) -> String {
        format!("{}> ", self.prompt)
    }
}
