//! Semantic color helpers for consistent CLI output.
//!
//! Colors convey meaning rather than decoration, and all of them are
//! switched off together through `colored::control` (see `--color`).

use colored::{ColoredString, Colorize};

/// Semantic color helpers for consistent CLI output.
///
/// | Element | Color | Usage |
/// |---------|-------|-------|
/// | Success | Green | Authorised payments, valid config |
/// | Error | Red | Error messages, refusals |
/// | Warning | Yellow | Missing optional settings |
/// | Info | Cyan | Hints, section headings |
/// | Path | Blue | File paths |
/// | Key | Bold | Labels, config keys |
/// | Dim | Dimmed | Secondary info |
pub struct Colors;

impl Colors {
    /// Green - for success messages and positive outcomes
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Red - for error messages and failures
    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    /// Yellow - for warnings and cautions
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Cyan - for informational messages and hints
    pub fn info(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Cyan+Bold - for commands the user should run
    pub fn command(s: &str) -> ColoredString {
        s.cyan().bold()
    }

    /// Blue - for file and directory paths
    pub fn path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Bold - for labels and config keys
    pub fn key(s: &str) -> ColoredString {
        s.bold()
    }

    /// Dimmed - for less important/secondary information
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Green [OK] marker
    pub fn ok_marker() -> ColoredString {
        "[OK]".green()
    }

    /// Yellow [WARN] marker
    pub fn warn_marker() -> ColoredString {
        "[WARN]".yellow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_survives_coloring() {
        colored::control::set_override(false);
        assert_eq!(Colors::success("Authorised").to_string(), "Authorised");
        assert_eq!(Colors::ok_marker().to_string(), "[OK]");
        assert_eq!(Colors::warn_marker().to_string(), "[WARN]");
        assert_eq!(Colors::path("/tmp/config.toml").to_string(), "/tmp/config.toml");
    }
}
