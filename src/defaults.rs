//! Default values for gis configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Marker file listing modules, preferred over [`GITMODULES_FILENAME`].
pub const GIS_MODULES_FILENAME: &str = ".gis-modules";

/// Git's own submodule manifest, used when no `.gis-modules` exists.
pub const GITMODULES_FILENAME: &str = ".gitmodules";

/// The git binary used when none is configured.
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Branch names colored red in one-line status output.
pub const DEFAULT_BRANCHES: &[&str] = &["master", "main", "develop"];

/// Branch name prefixes colored yellow in one-line status output.
pub const FEATURE_BRANCH_PREFIXES: &[&str] = &["feature/"];

/// Arguments for the machine-readable status command.
pub const STATUS_ARGS: &[&str] = &["status", "-sb", "--ignore-submodules", "--porcelain=v2"];

/// Returns the default user configuration file path.
///
/// Uses the platform-appropriate config directory:
/// - Linux: `~/.config/gis/config.toml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/gis/config.toml`
/// - Windows: `{FOLDERID_RoamingAppData}\gis\config.toml`
///
/// Falls back to `.gis/config.toml` in the current directory if the
/// platform config directory cannot be determined.
///
/// This can be overridden by the `GIS_CONFIG` environment variable.
pub fn default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("gis").join("config.toml"),
        None => PathBuf::from(".gis").join("config.toml"),
    }
}
