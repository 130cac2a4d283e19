//! Status rendering.
//!
//! Both renderers are pure functions of a [`StatusSnapshot`]; the module name
//! prefix is added by [`crate::report`].

use super::parser::UNCHANGED;
use super::{EntryKind, FileChange, StatusSnapshot};
use crate::config::{BranchCategory, GisConfig};
use crate::output::Palette;

const REMOTE_REFS_PREFIX: &str = "refs/remotes/";

/// `ahead A, behind B`, omitting zero counts; empty when both are zero.
///
/// Ahead counts are green and behind counts red.
pub fn format_ahead_behind(ahead: u32, behind: u32, palette: Palette) -> String {
    let mut parts = Vec::with_capacity(2);
    if ahead > 0 {
        parts.push(format!("ahead {}", palette.green(&ahead.to_string())));
    }
    if behind > 0 {
        parts.push(format!("behind {}", palette.red(&behind.to_string())));
    }
    parts.join(", ")
}

fn bracketed_ahead_behind(snapshot: &StatusSnapshot, palette: Palette) -> Option<String> {
    let text = format_ahead_behind(snapshot.ahead, snapshot.behind, palette);
    (!text.is_empty()).then(|| format!("[{}]", text))
}

/// Color a branch name by its category: default branches red, feature
/// branches yellow, anything else green.
pub fn color_branch(branch: &str, config: &GisConfig, palette: Palette) -> String {
    match config.branch_category(branch) {
        BranchCategory::Default => palette.red(branch),
        BranchCategory::Feature => palette.yellow(branch),
        BranchCategory::Other => palette.green(branch),
    }
}

/// Multi-line rendering, every line indented by two spaces.
///
/// ```text
///   ## master...origin/master [ahead 2, behind 9]
///   .M pom.xml
///   R. text-1 -> text-0001
/// ```
pub fn render_full(snapshot: &StatusSnapshot, palette: Palette) -> String {
    let mut lines = Vec::with_capacity(snapshot.changes.len() + 1);

    if let Some(branch) = &snapshot.local_branch {
        let mut header = format!("  ## {}", palette.green(branch));
        if let Some(upstream) = &snapshot.upstream_branch {
            let upstream = upstream
                .strip_prefix(REMOTE_REFS_PREFIX)
                .unwrap_or(upstream);
            header.push_str("...");
            header.push_str(&palette.red(upstream));
        }
        if let Some(ahead_behind) = bracketed_ahead_behind(snapshot, palette) {
            header.push(' ');
            header.push_str(&ahead_behind);
        }
        lines.push(header);
    }

    lines.extend(
        snapshot
            .changes
            .iter()
            .map(|change| full_change_line(change, palette)),
    );
    lines.join("\n")
}

fn full_change_line(change: &FileChange, palette: Palette) -> String {
    let path = match &change.renamed_from {
        Some(original) => format!("{} -> {}", original, change.path),
        None => change.path.clone(),
    };
    format!(
        "  {}{} {}",
        status_code(change.staged, palette, Palette::green),
        status_code(change.unstaged, palette, Palette::red),
        path
    )
}

fn status_code(code: char, palette: Palette, paint: fn(&Palette, &str) -> String) -> String {
    if code == UNCHANGED {
        code.to_string()
    } else {
        paint(&palette, &code.to_string())
    }
}

/// Condensed rendering: `<branch>[ahead A, behind B] <file> <file> …`.
///
/// Files are reduced to their base name and renames to the quoted new path.
/// `branch_color` paints the branch name.
pub fn render_one_line<F>(snapshot: &StatusSnapshot, branch_color: F, palette: Palette) -> String
where
    F: Fn(&str) -> String,
{
    let mut line = String::new();
    if let Some(branch) = &snapshot.local_branch {
        line.push_str(&branch_color(branch));
    }
    if let Some(ahead_behind) = bracketed_ahead_behind(snapshot, palette) {
        line.push_str(&ahead_behind);
    }
    for change in &snapshot.changes {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&one_line_token(change));
    }
    line
}

fn one_line_token(change: &FileChange) -> String {
    match change.kind {
        EntryKind::Rename => format!("'{}'", change.path),
        _ => base_name(&change.path).to_string(),
    }
}

/// Last path segment, ignoring the trailing `/` git puts on directories.
fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
