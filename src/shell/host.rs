// ABOUTME: Host working-directory capability used by `cd` to sync and fall back.
// ABOUTME: ProcessDirectory drives the real process cwd; DetachedDirectory keeps it in memory.

use std::io;
use std::path::{Path, PathBuf};

/// The "real" working directory that the session tries to follow.
pub trait HostDirectory {
    /// The directory the host currently considers current.
    fn current(&self) -> io::Result<PathBuf>;

    /// Ask the host to change its current directory.
    fn change(&mut self, path: &Path) -> io::Result<()>;
}

/// The process-wide working directory of this program.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDirectory;

impl HostDirectory for ProcessDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn change(&mut self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}

/// A working directory that lives only inside the session.
///
/// Never touches the process cwd, so the session is the single source of
/// truth and a failed `cd` falls back to the last directory that was
/// successfully entered.
#[derive(Debug, Clone)]
pub struct DetachedDirectory {
    dir: PathBuf,
}

impl DetachedDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl HostDirectory for DetachedDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        Ok(self.dir.clone())
    }

    fn change(&mut self, path: &Path) -> io::Result<()> {
        self.dir = path.to_path_buf();
        Ok(())
    }
}
