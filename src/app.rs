// ABOUTME: App orchestrator — builds the shell from config and drives the read loop.
// ABOUTME: Prints the prompt, reads a line, hands it to the shell, until avslutt or end of input.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};

use crate::commands::Outcome;
use crate::config::Config;
use crate::session::CommandLog;
use crate::shell::{DetachedDirectory, HostDirectory, ProcessDirectory, Shell};

/// Startup choices that come from the command line rather than the config file.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Directory to start in instead of the current one.
    pub start_dir: Option<PathBuf>,
    /// Keep the working directory inside the session only.
    pub detached: bool,
}

/// Top-level application.
pub struct App {
    config: Config,
    options: Options,
}

impl App {
    pub fn new(config: Config, options: Options) -> Self {
        Self { config, options }
    }

    /// Build the session described by the config and options.
    pub fn build_shell(&self) -> anyhow::Result<Shell> {
        let detached = self.options.detached || !self.config.shell.sync_process_dir;
        let cwd = std::env::current_dir().context("failed to read current directory")?;

        let start = match &self.options.start_dir {
            Some(dir) => {
                let dir = cwd.join(dir);
                if !dir.is_dir() {
                    bail!("{} er ikke en mappe", dir.display());
                }
                dir
            }
            None => cwd,
        };

        let host: Box<dyn HostDirectory> = if detached {
            Box::new(DetachedDirectory::new(start))
        } else {
            let mut host = ProcessDirectory;
            host.change(&start)
                .with_context(|| format!("failed to enter {}", start.display()))?;
            Box::new(host)
        };

        let shell = Shell::new(self.config.shell.clone(), host)?;
        if !self.config.log.enabled {
            return Ok(shell);
        }
        match CommandLog::new(&self.config.log_dir(), shell.working_directory()) {
            Ok(log) => Ok(shell.with_log(log)),
            Err(e) => {
                eprintln!("Warning: failed to create command log: {}", e);
                Ok(shell)
            }
        }
    }

    /// Run the interactive session on stdin/stdout.
    pub fn run(self) -> anyhow::Result<()> {
        let mut shell = self.build_shell()?;
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if self.config.shell.banner {
            writeln!(out, "Velkommen til terminalen!")?;
        }
        run_loop(&mut shell, &mut stdin.lock(), &mut out)
    }
}

/// Prompt, read, execute, until the shell asks to exit or input ends.
///
/// A failed read is reported and the loop carries on.
pub fn run_loop<R, W>(shell: &mut Shell, input: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}", shell.prompt())?;
        out.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                writeln!(out)?;
                writeln!(out, "Ha det!")?;
                return Ok(());
            }
            Ok(_) => {
                if shell.execute(&line, &mut *out) == Outcome::Exit {
                    return Ok(());
                }
            }
            Err(e) => writeln!(out, "Feil ved lesing av inndata: {}", e)?,
        }
    }
}
