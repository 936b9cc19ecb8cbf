// Persistence of the session token: one file, raw contents, no metadata.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StartupError;

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the stored token verbatim, or `None` when no file exists yet.
    pub fn load(&self) -> Result<Option<String>, StartupError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|source| self.file_error(source))
    }

    /// Overwrite the token file with `token`.
    pub fn save(&self, token: &str) -> Result<(), StartupError> {
        fs::write(&self.path, token).map_err(|source| self.file_error(source))
    }

    fn file_error(&self, source: std::io::Error) -> StartupError {
        StartupError::TokenFile {
            path: self.path.clone(),
            source,
        }
    }
}
