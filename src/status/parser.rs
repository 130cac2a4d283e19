//! Porcelain v2 tokenizer.
//!
//! Every line is classified by its leading token into a [`StatusLine`] before
//! anything is rendered. Entry lines carry a fixed number of space-separated
//! fields followed by the path, which is taken as the rest of the line so it
//! may contain spaces:
//!
//! ```text
//! 1 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <path>
//! 2 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <X><score> <path>\t<origPath>
//! u <XY> <sub> <m1> <m2> <m3> <mW> <h1> <h2> <h3> <path>
//! ? <path>
//! ! <path>
//! ```
//!
//! Untracked and ignored lines have no `<XY>` field; [`untracked_codes`]
//! supplies one so all entries share the same shape.
//!
//! Lines that do not fit the grammar are reported as
//! [`Error::ParseAnomaly`]; [`parse`] logs and skips them.

use log::debug;

use super::{EntryKind, FileChange, StatusSnapshot};
use crate::error::{Error, Result};

/// Marker for "no status at this stage".
pub const UNCHANGED: char = '.';

/// One classified line of porcelain v2 output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// `# branch.oid <commit>`
    Oid(String),
    /// `# branch.head <branch>`
    Head(String),
    /// `# branch.upstream <upstream>`
    Upstream(String),
    /// `# branch.ab +<ahead> -<behind>`
    AheadBehind { ahead: u32, behind: u32 },
    /// Any other `#` header, such as `# stash <N>`.
    Header(String),
    /// A path entry of any kind.
    Entry(FileChange),
}

impl StatusLine {
    /// Classify a single line.
    pub fn parse(line: &str) -> Result<Self> {
        let anomaly = || Error::ParseAnomaly {
            line: line.to_string(),
        };

        let (kind, rest) = line.split_once(' ').ok_or_else(anomaly)?;
        match kind {
            "#" => parse_header(rest).ok_or_else(anomaly),
            "1" => {
                let (fields, path) = split_fields(rest, 7).ok_or_else(anomaly)?;
                let (staged, unstaged) = status_codes(fields[0]).ok_or_else(anomaly)?;
                Ok(Self::Entry(FileChange {
                    kind: EntryKind::Ordinary,
                    path: path.to_string(),
                    staged,
                    unstaged,
                    renamed_from: None,
                }))
            }
            "2" => {
                let (fields, paths) = split_fields(rest, 8).ok_or_else(anomaly)?;
                let (staged, unstaged) = status_codes(fields[0]).ok_or_else(anomaly)?;
                let (path, original) = paths.split_once('\t').ok_or_else(anomaly)?;
                Ok(Self::Entry(FileChange {
                    kind: EntryKind::Rename,
                    path: path.to_string(),
                    staged,
                    unstaged,
                    renamed_from: Some(original.to_string()),
                }))
            }
            "u" => {
                let (fields, path) = split_fields(rest, 9).ok_or_else(anomaly)?;
                let (staged, unstaged) = status_codes(fields[0]).ok_or_else(anomaly)?;
                Ok(Self::Entry(FileChange {
                    kind: EntryKind::Unmerged,
                    path: path.to_string(),
                    staged,
                    unstaged,
                    renamed_from: None,
                }))
            }
            "?" | "!" => {
                if rest.is_empty() {
                    return Err(anomaly());
                }
                let entry_kind = if kind == "?" {
                    EntryKind::Untracked
                } else {
                    EntryKind::Ignored
                };
                let (staged, unstaged) = untracked_codes(entry_kind);
                Ok(Self::Entry(FileChange {
                    kind: entry_kind,
                    path: rest.to_string(),
                    staged,
                    unstaged,
                    renamed_from: None,
                }))
            }
            _ => Err(anomaly()),
        }
    }
}

fn parse_header(rest: &str) -> Option<StatusLine> {
    let (key, value) = rest.split_once(' ').unwrap_or((rest, ""));
    let line = match key {
        "branch.oid" => StatusLine::Oid(non_empty(value)?),
        "branch.head" => StatusLine::Head(non_empty(value)?),
        "branch.upstream" => StatusLine::Upstream(non_empty(value)?),
        "branch.ab" => {
            let (ahead, behind) = value.split_once(' ')?;
            StatusLine::AheadBehind {
                ahead: ahead.strip_prefix('+')?.parse().ok()?,
                behind: behind.strip_prefix('-')?.parse().ok()?,
            }
        }
        _ => StatusLine::Header(rest.to_string()),
    };
    Some(line)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Split `count` space-separated fields off the front of `rest`, returning
/// them along with the untouched remainder.
fn split_fields(rest: &str, count: usize) -> Option<(Vec<&str>, &str)> {
    let mut parts = rest.splitn(count + 1, ' ');
    let fields: Vec<&str> = parts.by_ref().take(count).collect();
    let remainder = parts.next()?;
    if fields.len() != count || fields.iter().any(|f| f.is_empty()) || remainder.is_empty() {
        return None;
    }
    Some((fields, remainder))
}

/// Decode a two-character `XY` field.
fn status_codes(xy: &str) -> Option<(char, char)> {
    let mut chars = xy.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(x), Some(y), None) => Some((x, y)),
        _ => None,
    }
}

/// The `XY` pair for entries that carry none: nothing staged, the entry's own
/// marker as the worktree status.
pub fn untracked_codes(kind: EntryKind) -> (char, char) {
    match kind {
        EntryKind::Ignored => (UNCHANGED, '!'),
        _ => (UNCHANGED, '?'),
    }
}

/// Build a snapshot from raw status output.
///
/// Blank lines are skipped. Lines that fail to parse are logged at debug
/// level and skipped.
pub fn parse<'a, I>(lines: I) -> StatusSnapshot
where
    I: IntoIterator<Item = &'a str>,
{
    let mut snapshot = StatusSnapshot::default();
    for line in lines.into_iter().filter(|l| !l.trim().is_empty()) {
        match StatusLine::parse(line) {
            Ok(StatusLine::Head(branch)) => snapshot.local_branch = Some(branch),
            Ok(StatusLine::Upstream(upstream)) => snapshot.upstream_branch = Some(upstream),
            Ok(StatusLine::AheadBehind { ahead, behind }) => {
                snapshot.ahead = ahead;
                snapshot.behind = behind;
            }
            Ok(StatusLine::Entry(change)) => snapshot.changes.push(change),
            Ok(StatusLine::Oid(_)) | Ok(StatusLine::Header(_)) => {}
            Err(e) => debug!("{}", e),
        }
    }
    snapshot
}

/// Build a snapshot from a whole status output text.
pub fn parse_output(output: &str) -> StatusSnapshot {
    parse(output.lines())
}
