//! Tracing subscriber setup.
//!
//! Logging is only installed in debug mode (`TASK_CLI_DEBUG` set); normal
//! runs print plain output through the message macros and nothing else.
//! `RUST_LOG` alone never switches debug mode on, it only adds directives.

use tracing_subscriber::EnvFilter;

/// Environment variable that switches on debug mode.
pub const DEBUG_ENV: &str = "TASK_CLI_DEBUG";

/// Directive that keeps every event of this crate, including the routed
/// user output, whatever `RUST_LOG` says for other targets.
const CRATE_FILTER: &str = "task_cli=debug";

/// Whether debug mode is requested, given an environment lookup.
pub fn debug_requested(var: impl Fn(&str) -> Option<String>) -> bool {
    var(DEBUG_ENV).is_some()
}

/// Filter directives for debug mode: `RUST_LOG` first, then the crate
/// directive so it takes precedence for `task_cli` targets.
pub fn filter_directives(rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => format!("{},{}", value, CRATE_FILTER),
        None => CRATE_FILTER.to_string(),
    }
}

/// Installs a stderr `fmt` subscriber when debug mode is on.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init() {
    if !super::messages::macros::is_debug_mode() {
        return;
    }

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directives(rust_log.as_deref())))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
