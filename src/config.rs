// Runtime configuration read from environment variables.
//
// Everything has a sensible default so `talkium` works with no setup at all.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.talkium.in";
pub const TOKEN_FILE_NAME: &str = ".talkium_jwt";

pub const API_URL_VAR: &str = "TALKIUM_API_URL";
pub const TOKEN_FILE_VAR: &str = "TALKIUM_TOKEN_FILE";
pub const LOG_FILTER_VAR: &str = "TALKIUM_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Talkium API, without a trailing slash.
    pub api_url: String,
    /// File holding the persisted bearer token.
    pub token_path: PathBuf,
}

impl Config {
    /// Build the configuration from `TALKIUM_API_URL` and
    /// `TALKIUM_TOKEN_FILE`, falling back to the public API and a token file
    /// in the user's home directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        let token_path = lookup(TOKEN_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_token_path);

        Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            token_path,
        }
    }
}

fn default_token_path() -> PathBuf {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(TOKEN_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert!(cfg.token_path.ends_with(TOKEN_FILE_NAME));
    }

    #[test]
    fn overrides_are_used_and_trailing_slash_dropped() {
        let cfg = Config::from_lookup(|key| match key {
            API_URL_VAR => Some("http://localhost:3000/".into()),
            TOKEN_FILE_VAR => Some("/tmp/tok".into()),
            _ => None,
        });
        assert_eq!(cfg.api_url, "http://localhost:3000");
        assert_eq!(cfg.token_path, PathBuf::from("/tmp/tok"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = Config::from_lookup(|_| Some("  ".into()));
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }
}
