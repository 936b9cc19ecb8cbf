// Error kinds used across the client.
//
// There are two tiers. `StartupError` aborts the process before the REPL
// starts (bad credentials, server offline, ...). `CommandError` is reported
// to the user as a single line and the REPL keeps going. Both wrap
// `ApiError` when the failure came from the remote service.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Failure talking to the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("request to {path} failed: {reason}")]
    Transport { path: String, reason: String },

    /// The HTTP layer answered with something other than 200.
    #[error("Server responded with a {0} HTTP(S) status code")]
    HttpStatus(u16),

    /// HTTP said 200 but the envelope carried another status.
    #[error("Server responded with {status} status code. Message: {message}")]
    Status { status: i64, message: String },

    /// The envelope payload did not have the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fatal errors raised while bootstrapping (liveness check and login).
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Server is not ready.")]
    ServerNotReady,

    #[error("Could not reach the server: {0}")]
    Liveness(#[source] ApiError),

    #[error("Please enter a valid username.")]
    InvalidUsername,

    #[error("`/users` route returned an invalid response: {0}")]
    UserList(#[source] ApiError),

    #[error("User {0} does not exist.")]
    UnknownUser(String),

    #[error("Please enter a valid password.")]
    InvalidPassword,

    #[error("Sign in failed: {0}")]
    SignIn(#[source] ApiError),

    #[error("Could not access token file {}: {source}", .path.display())]
    TokenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read from terminal: {0}")]
    Input(#[from] io::Error),
}

/// Recoverable errors raised by REPL commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0} is not a valid command in this REPL")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
