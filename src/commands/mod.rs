// ABOUTME: Command handler abstraction and the registry that maps names to handlers.
// ABOUTME: Each built-in command implements `Command`; the shell dispatches through `CommandRegistry`.

pub mod files;
pub mod lines;
pub mod navigate;
pub mod session;

use std::collections::HashMap;
use std::io::Write;

use crate::config::ShellConfig;
use crate::shell::SessionState;

/// What the read loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next line.
    Continue,
    /// Leave the read loop and end the process successfully.
    Exit,
}

/// Everything a handler may touch while it runs.
pub struct Invocation<'a> {
    pub state: &'a mut SessionState,
    pub commands: &'a CommandRegistry,
    pub config: &'a ShellConfig,
    pub out: &'a mut dyn Write,
}

/// A built-in command bound to one name.
///
/// Handlers report usage and filesystem problems by returning `Err`; the
/// shell prints them prefixed with the command name and carries on.
pub trait Command {
    /// Exact, case-sensitive name the user types.
    fn name(&self) -> &'static str;

    /// `(usage, description)` rows for the `hjelp` overview.
    fn synopsis(&self) -> &'static [(&'static str, &'static str)];

    /// Extended help text, if this command has any.
    fn details(&self) -> Option<&'static str> {
        None
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome>;
}

/// Name-to-handler table that remembers registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    by_name: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in command, in help-listing order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(session::Exit);
        registry.register(navigate::ChangeDirectory);
        registry.register(navigate::List);
        registry.register(files::MakeDirectory);
        registry.register(files::Remove);
        registry.register(files::Create);
        registry.register(files::Cat);
        registry.register(lines::Head);
        registry.register(lines::Tail);
        registry.register(session::History);
        registry.register(session::Help);
        registry
    }

    /// Add a handler. A later handler with the same name replaces the earlier one.
    pub fn register(&mut self, command: impl Command + 'static) {
        let name = command.name();
        match self.by_name.get(name) {
            Some(&index) => self.commands[index] = Box::new(command),
            None => {
                self.by_name.insert(name, self.commands.len());
                self.commands.push(Box::new(command));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.by_name
            .get(name)
            .map(|&index| &*self.commands[index])
    }

    /// Handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| &**c)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
