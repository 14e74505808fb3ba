// ABOUTME: Integration tests for the shell session as a whole.
// ABOUTME: Drives Shell::execute through realistic command sequences against a temp directory.

use std::io;
use std::path::{Path, PathBuf};

use terminal::commands::Outcome;
use terminal::config::ShellConfig;
use terminal::shell::{DetachedDirectory, HostDirectory, Shell};

fn shell_in(dir: &Path) -> Shell {
    Shell::new(ShellConfig::default(), Box::new(DetachedDirectory::new(dir))).unwrap()
}

fn run(shell: &mut Shell, line: &str) -> String {
    let mut out = Vec::new();
    shell.execute(line, &mut out);
    String::from_utf8(out).unwrap()
}

/// A host directory that never moves, so the session can drift away from it.
struct PinnedDirectory(PathBuf);

impl HostDirectory for PinnedDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }

    fn change(&mut self, _path: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "pinned"))
    }
}

#[test]
fn mkdir_cd_and_back_updates_prompt() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let mut shell = shell_in(root);

    run(&mut shell, "mkdir sub");
    run(&mut shell, "cd sub");
    assert_eq!(shell.prompt(), format!("{}/sub> ", root.display()));

    run(&mut shell, "cd ..");
    assert_eq!(shell.prompt(), format!("{}> ", root.display()));
}

#[test]
fn cd_dot_dot_goes_to_lexical_parent() {
    let tmp = tempfile::tempdir().unwrap();
    let deep = tmp.path().join("a").join("b");
    std::fs::create_dir_all(&deep).unwrap();
    let mut shell = shell_in(&deep);

    run(&mut shell, "cd ..");
    assert_eq!(shell.working_directory(), tmp.path().join("a"));
}

#[test]
fn failed_cd_falls_back_to_host_not_previous_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    std::fs::create_dir(root.join("sub")).unwrap();
    std::fs::write(root.join("sub").join("file.txt"), "x").unwrap();

    let mut shell = Shell::new(
        ShellConfig::default(),
        Box::new(PinnedDirectory(root.clone())),
    )
    .unwrap();

    // The host refuses to follow, which is silently ignored.
    assert_eq!(run(&mut shell, "cd sub"), "");
    assert_eq!(shell.working_directory(), root.join("sub"));

    let out = run(&mut shell, "cd file.txt");
    assert!(out.contains("er ikke en mappe"), "got: {out}");
    assert_eq!(shell.working_directory(), root);
}

#[test]
fn detached_cd_failure_restores_last_good_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::create_dir(root.join("sub")).unwrap();
    let mut shell = shell_in(root);

    run(&mut shell, "cd sub");
    let out = run(&mut shell, "cd does-not-exist");
    assert!(out.starts_with("cd: stat "), "got: {out}");
    assert_eq!(shell.working_directory(), root.join("sub"));
}

#[test]
fn created_file_is_empty_and_listed_with_size_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let mut shell = shell_in(tmp.path());

    run(&mut shell, "opprett X");
    assert_eq!(run(&mut shell, "cat X"), "");

    let listing = run(&mut shell, "ls");
    let line = listing.lines().find(|l| l.starts_with("X ")).unwrap();
    assert!(line.ends_with(" 0 bytes"), "got: {line}");
}

#[test]
fn rm_needs_flag_for_non_empty_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let mut shell = shell_in(tmp.path());

    run(&mut shell, "mkdir box/inner");
    run(&mut shell, "opprett box/inner/item");

    let out = run(&mut shell, "rm box");
    assert!(out.starts_with("rm: "), "got: {out}");
    assert!(tmp.path().join("box/inner/item").exists());

    let out = run(&mut shell, "rm -r box");
    assert!(out.starts_with("Fjernet: "), "got: {out}");
    assert!(!tmp.path().join("box").exists());
}

#[test]
fn head_and_tail_of_small_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("F"), "a\nb\nc\n").unwrap();
    let mut shell = shell_in(tmp.path());

    assert_eq!(run(&mut shell, "head 2 F"), "a\nb\n");
    assert_eq!(run(&mut shell, "tail 2 F"), "b\nc\n");
}

#[test]
fn head_and_tail_with_large_count_return_everything() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("F"), "1\n2\n3\n").unwrap();
    let mut shell = shell_in(tmp.path());

    assert_eq!(run(&mut shell, "head 100 F"), "1\n2\n3\n\n");
    assert_eq!(run(&mut shell, "tail 100 F"), "1\n2\n3\n");
}

#[test]
fn relative_paths_follow_the_session_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let mut shell = shell_in(tmp.path());

    run(&mut shell, "mkdir work");
    run(&mut shell, "cd work");
    run(&mut shell, "opprett notes.txt");
    assert!(tmp.path().join("work/notes.txt").exists());

    let absolute = tmp.path().join("abs.txt");
    run(&mut shell, &format!("opprett {}", absolute.display()));
    assert!(absolute.exists());
}

#[test]
fn history_counts_only_non_blank_lines() {
    let tmp = tempfile::tempdir().unwrap();
    let mut shell = shell_in(tmp.path());

    for line in ["ls", "", "  ", "\t", "cd nowhere", "ukjent"] {
        run(&mut shell, line);
    }
    assert_eq!(shell.history(), ["ls", "cd nowhere", "ukjent"]);
    assert_eq!(
        run(&mut shell, "historikk"),
        "1: ls\n2: cd nowhere\n3: ukjent\n4: historikk\n"
    );
}

#[test]
fn errors_never_end_the_session() {
    let tmp = tempfile::tempdir().unwrap();
    let mut shell = shell_in(tmp.path());

    for line in ["cat missing", "rm", "cd", "finnes-ikke", "head"] {
        let mut out = Vec::new();
        assert_eq!(shell.execute(line, &mut out), Outcome::Continue);
    }
    let mut out = Vec::new();
    assert_eq!(shell.execute("avslutt", &mut out), Outcome::Exit);
}
