// ABOUTME: Navigation commands: `cd` moves the session working directory, `ls` lists a directory.
// ABOUTME: `cd` verifies the target and falls back to the host directory when it is not usable.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, bail};
use unicode_width::UnicodeWidthStr;

use super::{Command, Invocation, Outcome};
use crate::shell::path::{parent_of, resolve};

/// `cd <sti>`
pub struct ChangeDirectory;

impl Command for ChangeDirectory {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("cd [sti]", "bytt mappe til angitt sti")]
    }

    fn details(&self) -> Option<&'static str> {
        Some("cd [sti] - Bytt gjeldende mappe til angitt sti\n  Bruk 'cd ..' for å gå opp ett nivå")
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let Some(&arg) = args.first() else {
            bail!("mangler sti-argument");
        };

        let state = &mut *invocation.state;
        // Tentative: the session points at the target before it is verified.
        state.working_directory = if arg == ".." {
            parent_of(&state.working_directory)
        } else {
            resolve(&state.working_directory, arg)
        };
        let target = state.working_directory.clone();

        match fs::metadata(&target) {
            Err(e) => {
                state.fall_back_to_host();
                Err(e).with_context(|| format!("stat {}", target.display()))
            }
            Ok(meta) if !meta.is_dir() => {
                state.fall_back_to_host();
                bail!("{} er ikke en mappe", target.display())
            }
            Ok(_) => {
                // The host may refuse; the session keeps the verified target anyway.
                let _ = state.host.change(&target);
                Ok(Outcome::Continue)
            }
        }
    }
}

/// `ls [sti]`
pub struct List;

impl Command for List {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("ls [sti]", "list elementer i gjeldende eller angitt mappe")]
    }

    fn details(&self) -> Option<&'static str> {
        Some("ls [sti] - List filer og mapper\n  Viser størrelse for filer og <MAPPE> for mapper")
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let cwd = &invocation.state.working_directory;
        let path = match args.first() {
            Some(arg) => resolve(cwd, arg),
            None => cwd.clone(),
        };

        let mut entries = fs::read_dir(&path)
            .with_context(|| format!("open {}", path.display()))?
            .map(|entry| -> io::Result<_> {
                let entry = entry?;
                let meta = entry.metadata()?;
                Ok((entry.file_name().to_string_lossy().into_owned(), meta))
            })
            .collect::<io::Result<Vec<_>>>()
            .with_context(|| format!("readdir {}", path.display()))?;
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let width = invocation.config.name_width;
        for (name, meta) in &entries {
            let cell = pad_name(name, width);
            if meta.is_dir() {
                writeln!(invocation.out, "{cell} <MAPPE>")?;
            } else {
                writeln!(invocation.out, "{cell} {} bytes", meta.len())?;
            }
        }
        Ok(Outcome::Continue)
    }
}

/// Pad `name` with spaces to at least `width` display columns. Longer names are kept whole.
pub fn pad_name(name: &str, width: usize) -> String {
    let used = name.width();
    if used >= width {
        return name.to_string();
    }
    format!("{name}{}", " ".repeat(width - used))
}
