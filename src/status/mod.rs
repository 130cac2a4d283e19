//! # Status Protocol
//!
//! gis asks every module for `git status -sb --ignore-submodules
//! --porcelain=v2` and re-renders the answer itself. This module holds the
//! structured model the output is decoded into; [`parser`] turns raw lines
//! into it and [`render`] turns it back into colored text.
//!
//! The flow is always `raw text -> StatusSnapshot -> String`; renderers never
//! look at raw lines, so the wire format is only known to the parser.

pub mod parser;
pub mod render;

pub use parser::{parse, StatusLine};
pub use render::{format_ahead_behind, render_full, render_one_line};

/// Render mode for status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    /// Multi-line, indented rendering with a `##` branch header.
    Full,
    /// One condensed line per module.
    OneLine,
}

/// What kind of porcelain entry a [`FileChange`] was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `1`: an ordinary change.
    Ordinary,
    /// `2`: a rename or copy.
    Rename,
    /// `u`: an unmerged path.
    Unmerged,
    /// `?`: an untracked path.
    Untracked,
    /// `!`: an ignored path.
    Ignored,
}

/// One changed path of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub kind: EntryKind,
    /// Path relative to the module root; the new path for renames.
    pub path: String,
    /// Index status code, `.` when unchanged.
    pub staged: char,
    /// Worktree status code, `.` when unchanged.
    pub unstaged: char,
    /// The previous path of a rename or copy.
    pub renamed_from: Option<String>,
}

/// Parsed status of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Current branch, or `(detached)`.
    pub local_branch: Option<String>,
    /// Upstream exactly as reported, e.g. `origin/master`.
    pub upstream_branch: Option<String>,
    pub ahead: u32,
    pub behind: u32,
    pub changes: Vec<FileChange>,
}

impl StatusSnapshot {
    /// True when nothing at all was reported.
    pub fn is_empty(&self) -> bool {
        self.local_branch.is_none()
            && self.upstream_branch.is_none()
            && self.ahead == 0
            && self.behind == 0
            && self.changes.is_empty()
    }
}
