//! # Module Discovery
//!
//! A *module* is either the root repository (the working directory gis runs
//! in) or one of the sub-repositories declared in its marker file.
//!
//! The marker file is `.gis-modules`, or git's own `.gitmodules` when no
//! `.gis-modules` exists. Both use the same line format; only lines of the
//! form `path = <relative-dir>` are meaningful, everything else is ignored:
//!
//! ```text
//! [submodule "lib"]
//!     path = lib
//!     url = git@example.com:org/lib.git
//! ```
//!
//! Declared directories that do not exist on disk are reported and skipped,
//! so every module returned by [`discover`] can be used as a working
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::defaults::{GITMODULES_FILENAME, GIS_MODULES_FILENAME};
use crate::error::{Error, Result};

/// The root repository or one declared sub-repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Module {
    /// Absolute directory of the module.
    pub path: PathBuf,
    /// Whether this is the root module (the working directory itself).
    pub is_root: bool,
}

impl Module {
    pub fn root(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_root: true,
        }
    }

    pub fn submodule(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_root: false,
        }
    }

    /// The module's short name: the last segment of its directory.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Locate the marker file in `current_dir`, preferring `.gis-modules`.
pub fn marker_file(current_dir: &Path) -> Option<PathBuf> {
    [GIS_MODULES_FILENAME, GITMODULES_FILENAME]
        .iter()
        .map(|name| current_dir.join(name))
        .find(|path| path.is_file())
}

/// Extract the declared module paths from a marker file body.
///
/// A line qualifies when, after trimming, its first token is `path`; the
/// value is everything after the first `=`, trimmed.
pub fn parse_module_paths(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            if key.trim() != "path" {
                return None;
            }
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
        .collect()
}

/// Discover the root module and every existing declared module.
///
/// The root module is always first, followed by declared modules in marker
/// file order. Each directory appears once; a declaration resolving to the
/// root or to an earlier module is skipped.
pub fn discover(current_dir: &Path) -> Result<Vec<Module>> {
    let marker = marker_file(current_dir).ok_or_else(|| Error::Configuration {
        message: format!(
            "Could not find '{}' or '{}' under this directory!",
            GIS_MODULES_FILENAME, GITMODULES_FILENAME
        ),
    })?;
    debug!("reading modules from '{}'", marker.display());

    let content = fs::read_to_string(&marker)?;

    let mut modules = vec![Module::root(current_dir)];
    for declared in parse_module_paths(&content) {
        let path = normalize(current_dir.join(&declared));
        if !path.exists() {
            warn!(
                "directory '{}' does not exist, will be ignored!",
                path.display()
            );
            continue;
        }
        if modules.iter().any(|m| normalize(m.path.clone()) == path) {
            debug!("module '{}' is declared more than once", path.display());
            continue;
        }
        modules.push(Module::submodule(path));
    }

    Ok(modules)
}

/// Drop a trailing separator left over from declarations like `path = lib/`.
fn normalize(path: PathBuf) -> PathBuf {
    path.components().collect()
}

/// Whether `dir` is the top level of a git repository or worktree.
pub fn is_git_repository(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Write a `.gis-modules` file declaring every git repository found directly
/// under `current_dir`.
///
/// Returns the declared directory names, sorted.
pub fn write_marker_file(current_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(current_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if entry.file_type().is_dir() && is_git_repository(entry.path()) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    let content: String = names
        .iter()
        .map(|name| format!("path = {}\n", name))
        .collect();
    fs::write(current_dir.join(GIS_MODULES_FILENAME), content)?;

    Ok(names)
}
