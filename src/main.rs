// Entrypoint for the Talkium CLI.
// - Keeps `main` small: set up logging, read the config and hand over to
//   `app::run`, which blocks until the user exits the REPL.
// - Fatal startup errors bubble up as `anyhow::Error` and end the process
//   with a non-zero status.

use talkium_cli::{app, config::Config, config::LOG_FILTER_VAR, ui::TerminalConsole};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay quiet unless TALKIUM_LOG asks for more.
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_env();
    tracing::debug!(api_url = %config.api_url, token_path = %config.token_path.display(), "loaded config");

    let mut console = TerminalConsole::new();
    app::run(&config, &mut console)
}
