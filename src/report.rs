//! # Module Reports
//!
//! Turns each [`ModuleResult`] into the text block printed for its module.
//! The block layouts are:
//!
//! | layout | text |
//! |---|---|
//! | status, full | `name` then the indented full status lines |
//! | status, one-line | `name <branch>[ahead/behind] <files…>` |
//! | generic | `name` then `\n  <line>` per output line |
//! | without module name | output lines unchanged |
//! | with module name prefix | `./<file>` or `<name>/<file>` per existing file |
//!
//! Module names are cyan. Blank output lines are dropped in every layout.

use crate::config::GisConfig;
use crate::dispatch::ModuleResult;
use crate::output::Palette;
use crate::status::render::color_branch;
use crate::status::{self, StatusMode, StatusSnapshot};

/// A module's result together with its rendered block.
#[derive(Debug, Clone)]
pub struct RenderedModule {
    pub result: ModuleResult,
    /// Present when the result was rendered as status output.
    pub snapshot: Option<StatusSnapshot>,
    pub text: String,
}

impl RenderedModule {
    pub fn name(&self) -> String {
        self.result.module.name()
    }

    pub fn is_root(&self) -> bool {
        self.result.module.is_root
    }
}

fn non_blank_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().filter(|line| !line.trim().is_empty())
}

/// Render a status result in the given mode.
pub fn render_status(
    result: ModuleResult,
    mode: StatusMode,
    config: &GisConfig,
    palette: Palette,
) -> RenderedModule {
    let snapshot = status::parser::parse_output(&result.output);
    let mut text = palette.cyan(&result.module.name());
    match mode {
        StatusMode::Full => {
            let body = status::render_full(&snapshot, palette);
            if !body.is_empty() {
                text.push('\n');
                text.push_str(&body);
            }
        }
        StatusMode::OneLine => {
            let body = status::render_one_line(
                &snapshot,
                |branch| color_branch(branch, config, palette),
                palette,
            );
            if !body.is_empty() {
                text.push(' ');
                text.push_str(&body);
            }
        }
    }
    RenderedModule {
        result,
        snapshot: Some(snapshot),
        text,
    }
}

/// Render any other command's output under the module name.
pub fn render_generic(result: ModuleResult, palette: Palette) -> RenderedModule {
    let mut text = palette.cyan(&result.module.name());
    for line in non_blank_lines(&result.output) {
        text.push_str("\n  ");
        text.push_str(line);
    }
    RenderedModule {
        result,
        snapshot: None,
        text,
    }
}

/// Pass the output through without any module decoration.
pub fn render_passthrough(result: ModuleResult) -> RenderedModule {
    let text = non_blank_lines(&result.output).collect::<Vec<_>>().join("\n");
    RenderedModule {
        result,
        snapshot: None,
        text,
    }
}

/// Prefix every output line naming an existing file with its module: `./`
/// for the root, `<name>/` otherwise.
pub fn render_with_module_prefix(result: ModuleResult) -> RenderedModule {
    let prefix = if result.module.is_root {
        ".".to_string()
    } else {
        result.module.name()
    };
    let text = non_blank_lines(&result.output)
        .filter(|line| result.module.path.join(line).is_file())
        .map(|line| format!("{}/{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n");
    RenderedModule {
        result,
        snapshot: None,
        text,
    }
}

/// Join rendered blocks for printing, skipping empty ones.
pub fn join(entries: &[RenderedModule]) -> String {
    entries
        .iter()
        .map(|entry| entry.text.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
