// ABOUTME: Test harness shared by unit tests: a detached shell rooted in a temp directory.
// ABOUTME: Keeps tests off the process working directory so they can run in parallel.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::ShellConfig;
use crate::shell::{DetachedDirectory, Shell};

pub struct Harness {
    pub dir: TempDir,
    pub shell: Shell,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let host = DetachedDirectory::new(dir.path());
        let shell = Shell::new(config, Box::new(host)).unwrap();
        Self { dir, shell }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute one line and return everything it printed.
    pub fn run(&mut self, line: &str) -> String {
        let mut out = Vec::new();
        self.shell.execute(line, &mut out);
        String::from_utf8(out).unwrap()
    }
}
