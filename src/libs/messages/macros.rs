//! Output macros with debug-mode routing.
//!
//! In normal mode messages go straight to stdout/stderr. When debug mode is
//! on (`TASK_CLI_DEBUG` set) they are emitted as `tracing` events instead, so
//! they interleave with the core's own debug logging. The debug subscriber
//! always keeps `task_cli` events, so routed output is never filtered away.
//!
//! ```rust
//! use task_cli::{msg_error, msg_print};
//! use task_cli::libs::messages::Message;
//!
//! msg_print!(Message::TaskAdded(1));
//! msg_error!(Message::CommandFailed("task not found: with id 4".to_string()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug mode is on. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| crate::libs::logging::debug_requested(|name| std::env::var(name).ok()))
}

/// Prints a message to stdout, or logs it at info level in debug mode.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints raw text without a trailing newline. Used for pre-rendered tables.
#[macro_export]
macro_rules! msg_raw {
    ($text:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}", $text);
        } else {
            print!("{}", $text);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr, or logs it at error level.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix. Silent in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
