// ABOUTME: Session module — optional on-disk record of what was typed.
// ABOUTME: Provides JSONL logging of executed command lines per starting directory.

pub mod log;

pub use log::{CommandLog, CommandStatus, workspace_hash};
