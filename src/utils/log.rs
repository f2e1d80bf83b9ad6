//! Logging utilities with colored output.
//!
//! `log!` is the only output channel for diagnostics and writes to stderr.
//! Anything that must not
//! interrupt a build (malformed dates, duplicate slugs) goes through the
//! `"warn"` module.
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "wrote {} navigation files", count);
//! log!("warn"; "post `{}` has no parseable date", slug);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{self, IsTerminal, Write, stderr},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Calculate total prefix length for a module name.
///
/// Returns: `module.len() + 3` (for "[", "]", and trailing space)
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Logs go to stderr so command answers on stdout stay pipeable. Long
/// messages are truncated to the terminal width only when stderr is a
/// terminal.
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());

    let mut stderr = stderr().lock();
    let message = if stderr.is_terminal() {
        execute!(stderr, Clear(ClearType::UntilNewLine)).ok();
        let width = get_terminal_width() as usize;
        let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
        truncate_str(message, max_msg_len)
    } else {
        message
    };

    write_line(&mut stderr, &prefix, message).ok();
}

fn write_line(out: &mut impl Write, prefix: &ColoredString, message: &str) -> io::Result<()> {
    writeln!(out, "{prefix} {message}")?;
    out.flush()
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "nav" => prefix.bright_blue().bold(),
        "build" => prefix.bright_green().bold(),
        "warn" => prefix.bright_magenta().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within max_len bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_format() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_line(&mut out, &colorize_prefix("warn", "warn"), "`b` has malformed date").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[warn] `b` has malformed date\n");
    }

    #[test]
    fn test_calc_prefix_len() {
        // "warn" -> "[warn] " = 4 + 2 + 1 = 7
        assert_eq!(calc_prefix_len(4), 7);
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_fits() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn test_truncate_str_cuts() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "굿마" is 6 bytes (3 per syllable)
        assert_eq!(truncate_str("굿마", 4), "굿");
        assert_eq!(truncate_str("a굿b", 3), "a");
        assert_eq!(truncate_str("a굿b", 4), "a굿");
    }
}
