// The read-eval-print loop.
//
// Strictly one command at a time: a line is only read after the previous
// handler (network call included) has returned.

use std::io;

use tracing::debug;

use crate::api::ApiClient;
use crate::commands::{Flow, Registry};
use crate::error::CommandError;
use crate::parser::parse_bytes;
use crate::session::Session;
use crate::ui::Console;

pub struct Repl {
    registry: Registry,
    session: Session,
}

impl Repl {
    /// REPL with the built-in commands.
    pub fn new(session: Session) -> Self {
        Self::with_registry(Registry::builtin(), session)
    }

    pub fn with_registry(registry: Registry, session: Session) -> Self {
        Repl { registry, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Loop until `exit` or end of input. Only terminal read failures
    /// escape; bad input and command errors are printed and the loop goes on.
    pub fn run(&mut self, api: &ApiClient, console: &mut dyn Console) -> io::Result<()> {
        loop {
            let Some(line) = console.read_line(&self.session.prompt_line())? else {
                debug!("end of input");
                return Ok(());
            };
            if self.step(api, console, &line) == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parse and run a single raw line.
    pub fn step(&mut self, api: &ApiClient, console: &mut dyn Console, line: &[u8]) -> Flow {
        match self.eval(api, console, line) {
            Ok(flow) => flow,
            Err(err) => {
                debug!(error = ?err, "command failed");
                console.error(&err.to_string());
                Flow::Continue
            }
        }
    }

    fn eval(
        &mut self,
        api: &ApiClient,
        console: &mut dyn Console,
        line: &[u8],
    ) -> Result<Flow, CommandError> {
        let parsed = parse_bytes(line)?;
        self.registry
            .dispatch(&mut self.session, api, console, &parsed)
    }
}
