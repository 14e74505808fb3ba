// ABOUTME: Session-level commands that never touch the filesystem: avslutt, historikk, hjelp.
// ABOUTME: `hjelp` renders its overview from the registry so every handler describes itself.

use std::io::Write;

use super::{Command, Invocation, Outcome};

/// `avslutt`: ends the session.
pub struct Exit;

impl Command for Exit {
    fn name(&self) -> &'static str {
        "avslutt"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("avslutt", "avslutt programmet")]
    }

    fn run(&self, _args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        writeln!(invocation.out, "Ha det!")?;
        Ok(Outcome::Exit)
    }
}

/// `historikk`: every recorded line, oldest first, numbered from 1.
pub struct History;

impl Command for History {
    fn name(&self) -> &'static str {
        "historikk"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("historikk", "vis kommandohistorikk")]
    }

    fn run(&self, _args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        for (i, line) in invocation.state.history.iter().enumerate() {
            writeln!(invocation.out, "{}: {}", i + 1, line)?;
        }
        Ok(Outcome::Continue)
    }
}

/// `hjelp [kommando]`
pub struct Help;

impl Command for Help {
    fn name(&self) -> &'static str {
        "hjelp"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("hjelp [kommando]", "vis hjelp for spesifikk kommando")]
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let out = &mut *invocation.out;
        match args.first() {
            None => {
                writeln!(out, "Tilgjengelige kommandoer:")?;
                for command in invocation.commands.iter() {
                    for (usage, description) in command.synopsis() {
                        writeln!(out, "  {usage:<14} - {description}")?;
                    }
                }
            }
            Some(name) => match invocation.commands.get(name).and_then(|c| c.details()) {
                Some(text) => writeln!(out, "{text}")?,
                None => writeln!(out, "Ingen detaljert hjelp tilgjengelig for '{name}'")?,
            },
        }
        Ok(Outcome::Continue)
    }
}
