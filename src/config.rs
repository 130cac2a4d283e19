//! # Configuration
//!
//! This module defines [`GisConfig`], the single configuration value built once
//! at start-up and passed by reference into the dispatcher, the renderers and
//! the sorter. Nothing in the library reads process-wide mutable state.
//!
//! ## Sources
//!
//! Values are resolved with the following precedence (lowest first):
//!
//! 1. Built-in defaults from [`crate::defaults`].
//! 2. The user configuration file: `$GIS_CONFIG` when set, otherwise
//!    [`crate::defaults::default_config_path`]. A missing default file is not
//!    an error; a missing file named explicitly by `$GIS_CONFIG` is.
//! 3. The `GIS_GIT` environment variable (git binary).
//! 4. Command-line flags, applied by the CLI layer through the `with_*`
//!    builders.
//!
//! ## File format
//!
//! ```toml
//! git = "/usr/bin/git"
//!
//! [branches]
//! defaults = ["master", "main", "develop"]
//! feature_prefixes = ["feature/"]
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::defaults;
use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "GIS_CONFIG";

/// Environment variable overriding the git binary.
pub const GIT_ENV: &str = "GIS_GIT";

/// On-disk representation of the user configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Path or name of the git binary.
    pub git: Option<String>,
    /// Branch coloring lists.
    pub branches: BranchesSection,
}

/// The `[branches]` table of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BranchesSection {
    /// Branch names treated as default branches.
    pub defaults: Option<Vec<String>>,
    /// Prefixes identifying feature branches.
    pub feature_prefixes: Option<Vec<String>>,
}

/// Parse a configuration file body.
pub fn parse(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

/// Coloring category of a branch name in one-line status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCategory {
    /// Exactly one of the configured default branches.
    Default,
    /// Starts with one of the configured feature prefixes.
    Feature,
    /// Anything else.
    Other,
}

/// Runtime configuration shared by every component of a command.
#[derive(Debug, Clone)]
pub struct GisConfig {
    /// The root module directory (the process's working directory).
    pub current_dir: PathBuf,
    /// Git binary to invoke for every module.
    pub git: String,
    /// Branch names colored as default branches.
    pub default_branches: Vec<String>,
    /// Branch name prefixes colored as feature branches.
    pub feature_branch_prefixes: Vec<String>,
    /// Print commands instead of executing them.
    pub dry_run: bool,
}

impl GisConfig {
    /// Create a configuration made only of built-in defaults.
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            git: defaults::DEFAULT_GIT_BINARY.to_string(),
            default_branches: defaults::DEFAULT_BRANCHES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            feature_branch_prefixes: defaults::FEATURE_BRANCH_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dry_run: false,
        }
    }

    /// Load the configuration for `current_dir` from the file and environment.
    pub fn load(current_dir: impl Into<PathBuf>) -> Result<Self> {
        let explicit = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let git = env::var(GIT_ENV).ok().filter(|s| !s.trim().is_empty());
        Self::load_from(current_dir, explicit.as_deref(), git)
    }

    /// Load the configuration from an optional explicit file and git override.
    ///
    /// When `config_path` is `None` the default location is tried and silently
    /// skipped if absent.
    pub fn load_from(
        current_dir: impl Into<PathBuf>,
        config_path: Option<&Path>,
        git: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::new(current_dir);

        let file = match config_path {
            Some(path) => Some(read_config_file(path)?),
            None => {
                let path = defaults::default_config_path();
                if path.is_file() {
                    Some(read_config_file(&path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file) = file {
            config.apply(file);
        }
        if let Some(git) = git {
            config.git = git;
        }

        Ok(config)
    }

    /// Overlay the values present in a parsed configuration file.
    pub fn apply(&mut self, file: ConfigFile) {
        if let Some(git) = file.git {
            self.git = git;
        }
        if let Some(defaults) = file.branches.defaults {
            self.default_branches = defaults;
        }
        if let Some(prefixes) = file.branches.feature_prefixes {
            self.feature_branch_prefixes = prefixes;
        }
    }

    /// Set the dry-run flag.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Replace the branch coloring lists.
    pub fn with_branches(mut self, defaults: &[&str], feature_prefixes: &[&str]) -> Self {
        self.default_branches = defaults.iter().map(|s| s.to_string()).collect();
        self.feature_branch_prefixes = feature_prefixes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Classify a branch name. Matching is case-sensitive.
    pub fn branch_category(&self, branch: &str) -> BranchCategory {
        if self.default_branches.iter().any(|b| b == branch) {
            BranchCategory::Default
        } else if self
            .feature_branch_prefixes
            .iter()
            .any(|p| branch.starts_with(p.as_str()))
        {
            BranchCategory::Feature
        } else {
            BranchCategory::Other
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| Error::Configuration {
        message: format!("Could not read config file '{}': {}", path.display(), e),
    })?;
    parse(&content)
}
