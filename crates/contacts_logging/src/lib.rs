#![deny(missing_docs)]
//! Shared logging utilities for the contacts workspace.
//!
//! This crate provides the `contacts_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger. Messages
//! logged while a navigation is being handled are prefixed with its id.

use std::cell::Cell;

/// Re-exported so the macros resolve `log` from any caller.
#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the navigation currently being handled.
    static NAVIGATION_ID: Cell<u64> = const { Cell::new(0) };
}

/// Sets the navigation id for the current thread.
/// Pass 0 once the navigation has settled.
pub fn set_navigation_id(id: u64) {
    NAVIGATION_ID.with(|v| v.set(id));
}

/// Retrieves the navigation id for the current thread.
/// Returns 0 if no navigation is being handled.
pub fn current_navigation_id() -> u64 {
    NAVIGATION_ID.with(|v| v.get())
}

/// Dispatches to the `log` macro for `$level`, adding the navigation prefix.
#[doc(hidden)]
#[macro_export]
macro_rules! __contacts_log {
    ($level:ident, $($arg:tt)*) => {{
        let nav = $crate::current_navigation_id();
        if nav == 0 {
            $crate::log::$level!($($arg)*);
        } else {
            $crate::log::$level!("[nav {}] {}", nav, format_args!($($arg)*));
        }
    }};
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! contacts_trace {
    ($($arg:tt)*) => {
        $crate::__contacts_log!(trace, $($arg)*)
    };
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! contacts_info {
    ($($arg:tt)*) => {
        $crate::__contacts_log!(info, $($arg)*)
    };
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! contacts_debug {
    ($($arg:tt)*) => {
        $crate::__contacts_log!(debug, $($arg)*)
    };
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! contacts_warn {
    ($($arg:tt)*) => {
        $crate::__contacts_log!(warn, $($arg)*)
    };
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! contacts_error {
    ($($arg:tt)*) => {
        $crate::__contacts_log!(error, $($arg)*)
    };
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
