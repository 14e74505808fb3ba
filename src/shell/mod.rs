// ABOUTME: The interactive session: working directory, history, and command dispatch.
// ABOUTME: `Shell::execute` records a line, tokenizes it, and runs the matching handler.

pub mod host;
pub mod path;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::commands::{CommandRegistry, Invocation, Outcome};
use crate::config::ShellConfig;
use crate::session::{CommandLog, CommandStatus};

pub use host::{DetachedDirectory, HostDirectory, ProcessDirectory};

/// Mutable state handlers operate on.
pub struct SessionState {
    /// Always absolute. Relative arguments resolve against it.
    pub working_directory: PathBuf,
    /// Trimmed input lines, oldest first.
    pub history: Vec<String>,
    pub host: Box<dyn HostDirectory>,
}

impl SessionState {
    /// Point the session back at whatever the host considers current.
    ///
    /// Leaves the working directory untouched if the host cannot say.
    pub fn fall_back_to_host(&mut self) {
        if let Ok(dir) = self.host.current() {
            self.working_directory = dir;
        }
    }
}

/// One interactive session.
pub struct Shell {
    state: SessionState,
    commands: CommandRegistry,
    config: ShellConfig,
    log: Option<CommandLog>,
}

impl Shell {
    /// Create a session starting in the host's current directory.
    pub fn new(config: ShellConfig, host: Box<dyn HostDirectory>) -> anyhow::Result<Self> {
        let working_directory = host
            .current()
            .context("failed to read current directory")?;
        Ok(Self {
            state: SessionState {
                working_directory,
                history: Vec::new(),
                host,
            },
            commands: CommandRegistry::builtin(),
            config,
            log: None,
        })
    }

    /// Record every executed line to `log`.
    pub fn with_log(mut self, log: CommandLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn working_directory(&self) -> &Path {
        &self.state.working_directory
    }

    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// The prompt shown before each line is read.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.state.working_directory.display())
    }

    /// Run one line of input, writing all output to `out`.
    ///
    /// Blank lines are ignored entirely. Unknown commands and handler errors
    /// are reported on `out` and never end the session.
    pub fn execute(&mut self, raw_line: &str, out: &mut dyn Write) -> Outcome {
        let line = raw_line.trim();
        if line.is_empty() {
            return Outcome::Continue;
        }
        self.state.history.push(line.to_string());

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Outcome::Continue;
        };
        let args: Vec<&str> = tokens.collect();

        let (outcome, status) = match self.commands.get(name) {
            None => {
                let _ = writeln!(out, "Kommando ikke funnet: {name}");
                let _ = writeln!(out, "Skriv 'hjelp' for tilgjengelige kommandoer.");
                (Outcome::Continue, CommandStatus::Unknown)
            }
            Some(command) => {
                let mut invocation = Invocation {
                    state: &mut self.state,
                    commands: &self.commands,
                    config: &self.config,
                    out: &mut *out,
                };
                match command.run(&args, &mut invocation) {
                    Ok(Outcome::Exit) => (Outcome::Exit, CommandStatus::Exit),
                    Ok(Outcome::Continue) => (Outcome::Continue, CommandStatus::Ok),
                    Err(e) => {
                        let _ = writeln!(out, "{name}: {e:#}");
                        (Outcome::Continue, CommandStatus::Failed)
                    }
                }
            }
        };

        self.record(line, status);
        outcome
    }

    fn record(&mut self, line: &str, status: CommandStatus) {
        let Some(log) = self.log.as_mut() else {
            return;
        };
        if let Err(e) = log.record(&self.state.working_directory, line, status) {
            eprintln!("Warning: failed to log command: {}", e);
        }
    }
}
