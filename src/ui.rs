// UI layer: every interaction with the terminal goes through `Console`.
//
// `TerminalConsole` is the real implementation: raw stdin bytes for REPL lines,
// `dialoguer` for the login prompts (masked password included) and
// `crossterm` for clearing the screen and colouring errors. Tests provide
// their own scripted `Console`.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};

pub trait Console {
    /// Show `prompt` and read one REPL line without its line ending. The
    /// bytes are not checked for UTF-8 here. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<Vec<u8>>>;

    /// Ask for a visible value such as the username.
    fn read_text(&mut self, prompt: &str) -> io::Result<String>;

    /// Ask for a secret without echoing it.
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;

    fn print(&mut self, line: &str);

    /// Report a user facing error. One call is one line.
    fn error(&mut self, line: &str);

    fn clear(&mut self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<Vec<u8>>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_newline(line)))
    }

    fn read_text(&mut self, prompt: &str) -> io::Result<String> {
        // Empty answers are allowed here; the caller decides if they are valid.
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
    }

    fn print(&mut self, line: &str) {
        println!("{}", line);
    }

    fn error(&mut self, line: &str) {
        eprintln!("{}", line.red());
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}

fn strip_newline(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    line
}

/// Spinner shown while a startup request is in flight. Draws nothing when
/// stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
