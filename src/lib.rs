// ABOUTME: Library root for terminal — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod commands;
pub mod config;
pub mod session;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;
