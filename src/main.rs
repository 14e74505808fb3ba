// ABOUTME: Entry point for terminal — an interactive shell over filesystem primitives.
// ABOUTME: Parses CLI args, loads config, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use terminal::app::{App, Options};
use terminal::config::Config;

#[derive(Debug, Parser)]
#[command(name = "terminal", version, about = "Interactive shell for navigating the filesystem")]
struct Cli {
    /// Start in this directory instead of the current one.
    #[arg(short = 'C', long)]
    dir: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.terminal/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the welcome banner.
    #[arg(long)]
    no_banner: bool,

    /// Track the working directory in the session only; never change the process directory.
    #[arg(long)]
    detached: bool,

    /// Write a JSONL log of executed commands.
    #[arg(long)]
    log: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if self.no_banner {
            config.shell.banner = false;
        }
        if self.log {
            config.log.enabled = true;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let options = Options {
        start_dir: cli.dir,
        detached: cli.detached,
    };
    App::new(config, options).run()
}
