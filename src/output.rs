//! # Output Configuration
//!
//! This module provides utilities for controlling CLI output appearance:
//! whether ANSI colors are used, how words are painted, and how diagnostics
//! (errors, warnings, debug messages) are laid out on standard error.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Diagnostics
//!
//! Diagnostics follow a fixed convention: two spaces of indentation, then a
//! colored `ERROR: `, `WARNING: ` or `[DEBUG] ` prefixed message terminated by
//! a color reset. The `log` records emitted by the library are rendered with
//! this layout by [`init_logger`].

use std::env;
use std::io::Write;

use console::Style;
use log::Level;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// The palette matching this configuration.
    pub fn palette(&self) -> Palette {
        Palette::new(self.use_color)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Paints words with the four colors used by the renderers.
///
/// A disabled palette returns words unchanged, so rendered text stays
/// byte-for-byte comparable in tests and pipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    use_color: bool,
}

impl Palette {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// A palette that always emits ANSI escapes.
    pub fn colored() -> Self {
        Self::new(true)
    }

    /// A palette that never emits ANSI escapes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_colored(&self) -> bool {
        self.use_color
    }

    fn paint(&self, word: &str, style: Style) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(word).to_string()
        } else {
            word.to_string()
        }
    }

    pub fn red(&self, word: &str) -> String {
        self.paint(word, Style::new().red())
    }

    pub fn green(&self, word: &str) -> String {
        self.paint(word, Style::new().green())
    }

    pub fn yellow(&self, word: &str) -> String {
        self.paint(word, Style::new().yellow())
    }

    pub fn cyan(&self, word: &str) -> String {
        self.paint(word, Style::new().cyan())
    }
}

/// Lay out one diagnostic line for `level`, without the trailing newline.
pub fn diagnostic_line(level: Level, message: &str, palette: Palette) -> String {
    match level {
        Level::Error => format!("  {}", palette.red(&format!("ERROR: {}", message))),
        Level::Warn => format!("  {}", palette.yellow(&format!("WARNING: {}", message))),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => {
            format!("  {}", palette.yellow(&format!("[DEBUG] {}", message)))
        }
    }
}

/// Install the global logger writing diagnostics to standard error.
///
/// `filter` uses `env_logger` filter syntax (e.g. `info`, `debug`,
/// `gis=trace`). Calling this twice is harmless; the second call is ignored.
pub fn init_logger(filter: &str, palette: Palette) {
    let _ = env_logger::Builder::new()
        .parse_filters(filter)
        .target(env_logger::Target::Stderr)
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}",
                diagnostic_line(record.level(), &record.args().to_string(), palette)
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
        assert!(config.palette().is_colored());
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
        assert!(!config.palette().is_colored());
    }

    #[test]
    fn test_color_flag_is_case_insensitive() {
        assert!(OutputConfig::from_env_and_flag("ALWAYS").use_color);
        assert!(!OutputConfig::from_env_and_flag("Never").use_color);
    }

    #[test]
    fn test_palette_escape_sequences() {
        let palette = Palette::colored();
        assert_eq!(palette.red("master"), "\u{1b}[31mmaster\u{1b}[0m");
        assert_eq!(palette.green("M"), "\u{1b}[32mM\u{1b}[0m");
        assert_eq!(palette.yellow("feature/x"), "\u{1b}[33mfeature/x\u{1b}[0m");
        assert_eq!(palette.cyan("lib"), "\u{1b}[36mlib\u{1b}[0m");
    }

    #[test]
    fn test_plain_palette_leaves_words_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.red("master"), "master");
        assert_eq!(palette.cyan("lib"), "lib");
    }

    #[test]
    fn test_diagnostic_line_layout() {
        let palette = Palette::colored();
        assert_eq!(
            diagnostic_line(Level::Error, "errLn_q_1", palette),
            "  \u{1b}[31mERROR: errLn_q_1\u{1b}[0m"
        );
        assert_eq!(
            diagnostic_line(Level::Warn, "warnln_8+h", palette),
            "  \u{1b}[33mWARNING: warnln_8+h\u{1b}[0m"
        );
        assert_eq!(
            diagnostic_line(Level::Debug, "debugln_7_b", palette),
            "  \u{1b}[33m[DEBUG] debugln_7_b\u{1b}[0m"
        );
    }

    #[test]
    fn test_diagnostic_line_without_color() {
        let palette = Palette::plain();
        assert_eq!(
            diagnostic_line(Level::Warn, "Could not perform on module: 'lib'", palette),
            "  WARNING: Could not perform on module: 'lib'"
        );
        assert_eq!(diagnostic_line(Level::Info, "hello", palette), "hello");
    }
}
