// REPL command registry and the built-in commands.
//
// Each entry maps a lower-case name to a description and a boxed handler.
// Handlers get the whole argument list and pull out what they need
// themselves, so a missing argument is reported by the command that needs it.

use tracing::debug;

use crate::api::ApiClient;
use crate::error::CommandError;
use crate::parser::ParsedCommand;
use crate::scope::{Scope, DRAFTS};
use crate::session::Session;
use crate::ui::Console;

/// Column width used by `list` and `help`.
pub const COLUMN_WIDTH: usize = 20;

/// What the REPL should do once a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub type CommandResult = Result<Flow, CommandError>;

/// Everything a handler may touch while it runs.
pub struct CommandContext<'a> {
    pub registry: &'a Registry,
    pub session: &'a mut Session,
    pub api: &'a ApiClient,
    pub console: &'a mut dyn Console,
}

pub type Handler = Box<dyn Fn(&mut CommandContext<'_>, &[String]) -> CommandResult>;

pub struct CommandEntry {
    name: String,
    description: String,
    handler: Handler,
}

impl CommandEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Ordered command table. Iteration follows registration order.
#[derive(Default)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("prompt", "Customize prompt", prompt);
        registry.register("draft", "Save a message in draft", draft);
        registry.register("list", "Show scopes", list);
        registry.register("exit", "Exit the REPL", |_, _| Ok(Flow::Exit));
        registry.register("clear", "Clear the screen", clear);
        registry.register("whoami", "Shows current user's username", whoami);
        registry.register("help", "Display this help menu", help);
        registry
    }

    /// Add a command. Re-registering a name replaces the old entry in place.
    pub fn register<F>(&mut self, name: &str, description: &str, handler: F)
    where
        F: Fn(&mut CommandContext<'_>, &[String]) -> CommandResult + 'static,
    {
        let entry = CommandEntry {
            name: name.to_lowercase(),
            description: description.to_string(),
            handler: Box::new(handler),
        };
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one parsed line to completion.
    pub fn dispatch(
        &self,
        session: &mut Session,
        api: &ApiClient,
        console: &mut dyn Console,
        parsed: &ParsedCommand,
    ) -> CommandResult {
        if parsed.is_noop() {
            return Ok(Flow::Continue);
        }
        let entry = self
            .get(&parsed.cmd)
            .ok_or_else(|| CommandError::UnknownCommand(parsed.cmd.clone()))?;

        debug!(command = %entry.name, args = parsed.args.len(), "dispatching");
        let mut ctx = CommandContext {
            registry: self,
            session,
            api,
            console,
        };
        (entry.handler)(&mut ctx, &parsed.args)
    }
}

fn row(left: &str, right: &str) -> String {
    format!("{:<width$} {}", left, right, width = COLUMN_WIDTH)
}

fn prompt(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
    ctx.session.prompt = args.join(" ");
    Ok(Flow::Continue)
}

fn draft(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
    let (name, words) = args
        .split_first()
        .ok_or(CommandError::Usage("draft <name> <message...>"))?;
    let message = words.join(" ");

    let scopes = &mut ctx.session.scopes;
    if scopes.get(DRAFTS).is_none() {
        scopes.add(Scope::new(DRAFTS, "Name", "Message"));
    }
    if let Some(drafts) = scopes.get_mut(DRAFTS) {
        drafts.insert(name.as_str(), message.as_str());
    }

    ctx.console
        .print(&format!("Draft '{}' saved as '{}'", name, message));
    Ok(Flow::Continue)
}

fn list(ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
    let scopes = &ctx.session.scopes;
    let Some(scope) = args.first().and_then(|name| scopes.get(name)) else {
        ctx.console.print("Available scopes are");
        for name in scopes.names() {
            ctx.console.print(name);
        }
        return Ok(Flow::Continue);
    };

    let (key_label, value_label) = scope.labels();
    ctx.console.print(&row(key_label, value_label));
    for (key, value) in scope.entries() {
        ctx.console.print(&row(key, value));
    }
    Ok(Flow::Continue)
}

fn clear(ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult {
    ctx.console.clear()?;
    Ok(Flow::Continue)
}

fn whoami(ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult {
    let user = ctx.api.current_user(ctx.session.token())?;
    ctx.console.print(&format!("Logged in as {}", user.username));
    Ok(Flow::Continue)
}

fn help(ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult {
    ctx.console
        .print(&format!("Talkium CLI (v{})", env!("CARGO_PKG_VERSION")));
    ctx.console.print("Help Menu");
    ctx.console.print("Available Commands");
    ctx.console.print("");
    for entry in ctx.registry.iter() {
        ctx.console.print(&row(entry.name(), entry.description()));
    }
    Ok(Flow::Continue)
}
