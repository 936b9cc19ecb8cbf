// Turns a raw REPL line into a command name and its arguments.
//
// Splitting happens on single spaces only: no quoting, no escaping, and two
// consecutive spaces produce an empty argument.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    /// First token, lower-cased. Empty for a blank line.
    pub cmd: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// A blank line parses to an empty command, which the REPL skips.
    pub fn is_noop(&self) -> bool {
        self.cmd.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input is not a string.")]
    NotText,
}

pub fn parse(input: &str) -> ParsedCommand {
    let mut tokens = input.split(' ');
    let cmd = tokens.next().unwrap_or_default().to_lowercase();
    let args = tokens.map(str::to_string).collect();
    ParsedCommand { cmd, args }
}

/// Parse raw terminal bytes. Fails when they are not valid UTF-8.
pub fn parse_bytes(input: &[u8]) -> Result<ParsedCommand, ParseError> {
    let text = std::str::from_utf8(input).map_err(|_| ParseError::NotText)?;
    Ok(parse(text))
}
