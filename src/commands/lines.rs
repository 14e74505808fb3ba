// ABOUTME: `head` and `tail`: print the first or last n lines of a file.
// ABOUTME: A leading integer argument is the count; otherwise the default count applies.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};

use super::{Command, Invocation, Outcome};
use crate::shell::path::resolve;

/// Split `[n] <fil>` into a line count and a file name.
///
/// A single argument is always the file name. With two or more, the first is
/// the count when it parses as an integer, otherwise it is the file name and
/// `default` is used. Anything past the second argument is ignored. Negative
/// counts select nothing.
pub fn parse_count_and_file<'a>(args: &[&'a str], default: usize) -> Option<(usize, &'a str)> {
    match args {
        [] => None,
        [file] => Some((default, *file)),
        [first, file, ..] => match first.parse::<i64>() {
            Ok(n) => Some((usize::try_from(n).unwrap_or(0), *file)),
            Err(_) => Some((default, *first)),
        },
    }
}

/// The first `n` lines. A trailing newline leaves an empty last line, which counts.
pub fn head_lines(content: &str, n: usize) -> Vec<&str> {
    content.split('\n').take(n).collect()
}

/// The last `n` lines. The empty remainder after a trailing newline is dropped
/// before counting.
pub fn tail_lines(content: &str, n: usize) -> Vec<&str> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    let start = lines.len().saturating_sub(n);
    lines.split_off(start)
}

struct LineRequest {
    count: usize,
    path: PathBuf,
    content: String,
}

fn read_request(args: &[&str], invocation: &Invocation<'_>) -> anyhow::Result<LineRequest> {
    let Some((count, file)) = parse_count_and_file(args, invocation.config.default_lines) else {
        bail!("mangler filnavn");
    };
    let path = resolve(&invocation.state.working_directory, file);
    let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    Ok(LineRequest {
        count,
        content: String::from_utf8_lossy(&bytes).into_owned(),
        path,
    })
}

fn print_lines(out: &mut dyn Write, lines: &[&str]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// `head [n] <fil>`
pub struct Head;

impl Command for Head {
    fn name(&self) -> &'static str {
        "head"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("head [n] fil", "vis første n linjer i fil (standard 10)")]
    }

    fn details(&self) -> Option<&'static str> {
        Some("head [n] fil - Vis første n linjer i fil (standard 10)")
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let request = read_request(args, invocation)?;
        print_lines(&mut *invocation.out, &head_lines(&request.content, request.count))
            .with_context(|| format!("writing {}", request.path.display()))?;
        Ok(Outcome::Continue)
    }
}

/// `tail [n] <fil>`
pub struct Tail;

impl Command for Tail {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn synopsis(&self) -> &'static [(&'static str, &'static str)] {
        &[("tail [n] fil", "vis siste n linjer i fil (standard 10)")]
    }

    fn details(&self) -> Option<&'static str> {
        Some("tail [n] fil - Vis siste n linjer i fil (standard 10)")
    }

    fn run(&self, args: &[&str], invocation: &mut Invocation<'_>) -> anyhow::Result<Outcome> {
        let request = read_request(args, invocation)?;
        print_lines(&mut *invocation.out, &tail_lines(&request.content, request.count))
            .with_context(|| format!("writing {}", request.path.display()))?;
        Ok(Outcome::Continue)
    }
}
