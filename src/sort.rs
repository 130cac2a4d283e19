//! # Result Ordering
//!
//! Orders rendered module blocks for printing. The root module always comes
//! first; the other modules follow in [`SortKey`] order, ties broken by module
//! name.

use std::cmp::Ordering;

use crate::report::RenderedModule;
use crate::status::StatusMode;

/// Ordering applied to non-root modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    /// By module short name.
    #[default]
    #[value(name = "module_name", alias = "module-name")]
    ModuleName,
    /// By current branch name.
    #[value(name = "branch_name", alias = "branch-name")]
    BranchName,
    /// Most changed first.
    #[value(name = "tracking_status", alias = "tracking-status")]
    TrackingStatus,
}

/// Sort rendered modules, root first.
///
/// `mode` is only consulted for entries without a parsed snapshot, whose
/// branch name is then read from the rendered text.
pub fn sort(
    entries: Vec<RenderedModule>,
    key: Option<SortKey>,
    mode: StatusMode,
) -> Vec<RenderedModule> {
    let key = key.unwrap_or_default();
    let (mut sorted, mut others): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(RenderedModule::is_root);

    others.sort_by(|a, b| compare(a, b, key, mode).then_with(|| a.name().cmp(&b.name())));
    sorted.append(&mut others);
    sorted
}

fn compare(a: &RenderedModule, b: &RenderedModule, key: SortKey, mode: StatusMode) -> Ordering {
    match key {
        SortKey::ModuleName => a.name().cmp(&b.name()),
        SortKey::BranchName => branch_name(a, mode).cmp(&branch_name(b, mode)),
        // Token count only approximates the number of changed files.
        SortKey::TrackingStatus => token_count(b).cmp(&token_count(a)),
    }
}

fn branch_name(entry: &RenderedModule, mode: StatusMode) -> String {
    if let Some(branch) = entry
        .snapshot
        .as_ref()
        .and_then(|s| s.local_branch.clone())
    {
        return branch;
    }
    let offset = match mode {
        StatusMode::OneLine => 1,
        StatusMode::Full => 3,
    };
    console::strip_ansi_codes(&entry.text)
        .split(' ')
        .nth(offset)
        .unwrap_or_default()
        .to_string()
}

fn token_count(entry: &RenderedModule) -> usize {
    console::strip_ansi_codes(&entry.text)
        .split_whitespace()
        .count()
}
