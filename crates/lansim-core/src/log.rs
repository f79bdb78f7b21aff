//! Logging facilities.

use atty::Stream;
use colored::{Color, ColoredString, Colorize};

/// Applies the color to the string if stderr (log) goes to console.
pub fn get_colored(s: &str, color: Color) -> ColoredString {
    if atty::is(Stream::Stderr) {
        s.color(color)
    } else {
        s.normal()
    }
}

/// Logs a message at the info level on behalf of a named component.
///
/// # Examples
///
/// ```rust
/// use std::io::Write;
/// use env_logger::Builder;
/// use lansim_core::log_info;
///
/// // configure env_logger
/// Builder::from_default_env()
///     .format(|buf, record| writeln!(buf, "{}", record.args()))
///     .init();
///
/// log_info!("net", "simulation started");
/// ```
#[macro_export]
macro_rules! log_info {
    ($name:expr, $msg:expr) => (
        log::info!(
            target: $name,
            "[{}  {}] {}",
            $crate::log::get_colored("INFO", $crate::colored::Color::Green), $name, $msg
        )
    );
    ($name:expr, $format:expr, $($arg:tt)+) => (
        log::info!(
            target: $name,
            concat!("[{}  {}] ", $format),
            $crate::log::get_colored("INFO", $crate::colored::Color::Green), $name, $($arg)+
        )
    );
}

/// Logs a message at the debug level on behalf of a named component.
///
/// # Examples
///
/// See [`log_info!`](crate::log_info!).
#[macro_export]
macro_rules! log_debug {
    ($name:expr, $msg:expr) => (
        log::debug!(
            target: $name,
            "[{} {}] {}",
            $crate::log::get_colored("DEBUG", $crate::colored::Color::Blue), $name, $msg
        )
    );
    ($name:expr, $format:expr, $($arg:tt)+) => (
        log::debug!(
            target: $name,
            concat!("[{} {}] ", $format),
            $crate::log::get_colored("DEBUG", $crate::colored::Color::Blue), $name, $($arg)+
        )
    );
}

/// Logs a message at the warn level on behalf of a named component.
///
/// # Examples
///
/// See [`log_info!`](crate::log_info!).
#[macro_export]
macro_rules! log_warn {
    ($name:expr, $msg:expr) => (
        log::warn!(
            target: $name,
            "[{}  {}] {}",
            $crate::log::get_colored("WARN", $crate::colored::Color::Yellow), $name, $msg
        )
    );
    ($name:expr, $format:expr, $($arg:tt)+) => (
        log::warn!(
            target: $name,
            concat!("[{}  {}] ", $format),
            $crate::log::get_colored("WARN", $crate::colored::Color::Yellow), $name, $($arg)+
        )
    );
}

/// Logs a message at the error level on behalf of a named component.
///
/// # Examples
///
/// See [`log_info!`](crate::log_info!).
#[macro_export]
macro_rules! log_error {
    ($name:expr, $msg:expr) => (
        log::error!(
            target: $name,
            "[{} {}] {}",
            $crate::log::get_colored("ERROR", $crate::colored::Color::Red), $name, $msg
        )
    );
    ($name:expr, $format:expr, $($arg:tt)+) => (
        log::error!(
            target: $name,
            concat!("[{} {}] ", $format),
            $crate::log::get_colored("ERROR", $crate::colored::Color::Red), $name, $($arg)+
        )
    );
}
