// ABOUTME: File and directory manipulation commands: mkdir, rm, opprett, cat.
// ABOUTME: Every path argument is resolved against the session working directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, bail};

use super::{Command, Invocation, Outcome};
use crate::shell::path::resolve;

/// `mkdir <sti>`: creates the directory and any missing parents.
pub struct MakeDirectory;

impl Command for MakeDirectory {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("mkdir [sti]", "opprett en mappe")]
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let Some(arg) = args.first() else {
            bail!("mangler mappenavn");
        };
        let path = resolve(&invocation.state.working_directory, arg);

        create_dir_all(&path).with_context(|| format!("mkdir {}", path.display()))?;
        writeln!(invocation.out, "Mappe opprettet: {}", path.display())?;
        Ok(Outcome::Continue)
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::DirBuilder::new().recursive(true).create(path)
}

/// `rm [-r] <sti>`
pub struct Remove;

impl Command for Remove {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("rm [sti]", "fjern en fil eller mappe"),
            ("rm -r [sti]", "fjern mappe og innhold rekursivt"),
        ]
    }

    fn details(&self) -> Option<&'static str> {
        Some("rm [sti] - Fjern fil eller tom mappe\nrm -r [sti] - Fjern mappe og alt innhold rekursivt")
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let (recursive, rest) = match args {
            ["-r", rest @ ..] => (true, rest),
            _ => (false, args),
        };
        let Some(arg) = rest.first() else {
            bail!("mangler fil/mappenavn");
        };
        let path = resolve(&invocation.state.working_directory, arg);

        let removed = if recursive {
            remove_all(&path)
        } else {
            remove_one(&path)
        };
        removed.with_context(|| format!("remove {}", path.display()))?;

        writeln!(invocation.out, "Fjernet: {}", path.display())?;
        Ok(Outcome::Continue)
    }
}

/// Remove a single file or an empty directory.
fn remove_one(path: &Path) -> std::io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Remove `path` and everything beneath it. A path that is already gone is not an error.
fn remove_all(path: &Path) -> std::io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// `opprett <sti>`: creates an empty file, truncating an existing one.
pub struct Create;

impl Command for Create {
    fn name(&self) -> &'static str {
        "opprett"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("opprett [sti]", "opprett en fil")]
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let Some(arg) = args.first() else {
            bail!("mangler filnavn");
        };
        let path = resolve(&invocation.state.working_directory, arg);

        // Dropped right away; nothing is written.
        fs::File::create(&path).with_context(|| format!("open {}", path.display()))?;
        writeln!(invocation.out, "Fil opprettet: {}", path.display())?;
        Ok(Outcome::Continue)
    }
}

/// `cat <fil>`
pub struct Cat;

impl Command for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("cat [fil]", "vis innholdet i en fil")]
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let Some(arg) = args.first() else {
            bail!("mangler filnavn");
        };
        let path = resolve(&invocation.state.working_directory, arg);

        let content = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        invocation.out.write_all(&content)?;
        Ok(Outcome::Continue)
    }
}
