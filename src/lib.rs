// Library root
// -----------
// The binary (`main.rs`) only wires these modules together.
//
// Module responsibilities:
// - `api`: HTTP transport and the typed Talkium endpoints.
// - `auth` / `token`: login flow and token persistence.
// - `parser`, `scope`, `session`, `commands`, `repl`: the interactive shell.
// - `app`: startup sequence tying everything together.
// - `ui`: terminal I/O behind the `Console` trait.
// - `config`, `error`: environment configuration and error kinds.
pub mod api;
pub mod app;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod parser;
pub mod repl;
pub mod scope;
pub mod session;
pub mod token;
pub mod ui;
