//! # task-cli
//!
//! A command-line task tracker. Tasks are short text items with a status
//! (`todo`, `in-progress`, `done`) kept in a single JSON file that is read
//! and rewritten in full on every command.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::commands::Cli;
//!
//! fn main() {
//!     Cli::menu();
//! }
//! ```
//!
//! ## Concurrency
//!
//! There is no locking. Two processes working on the same file at the same
//! time can lose each other's changes; the last save wins.

pub mod commands;
pub mod libs;
