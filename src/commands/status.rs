//! # Status Command Implementation
//!
//! This module implements the `status` subcommand, which runs
//! `git status -sb --ignore-submodules --porcelain=v2` in every module and
//! prints the re-rendered result, root module first.
//!
//! Running `gis` without a subcommand is the same as `gis status --one-line`.

use anyhow::Result;
use clap::Args;

use gis::defaults::STATUS_ARGS;
use gis::dispatch::{all_modules, git_args};
use gis::report;
use gis::sort::{self, SortKey};
use gis::status::StatusMode;

use super::{render_all, Context};

/// Show the working tree status of every module
#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Print one condensed line per module
    #[arg(long)]
    pub one_line: bool,

    /// Order of the non-root modules
    #[arg(long, value_enum, value_name = "KEY")]
    pub sort: Option<SortKey>,
}

impl StatusArgs {
    /// The arguments used when gis runs without a subcommand.
    pub fn one_line() -> Self {
        Self {
            one_line: true,
            sort: None,
        }
    }

    fn mode(&self) -> StatusMode {
        if self.one_line {
            StatusMode::OneLine
        } else {
            StatusMode::Full
        }
    }
}

/// Execute the `status` command.
pub fn execute(args: StatusArgs, ctx: &Context) -> Result<()> {
    let mode = args.mode();
    let results = ctx
        .dispatcher()
        .run_across_modules(all_modules, &git_args(STATUS_ARGS.iter().copied()))?;

    let rendered = if ctx.config.dry_run {
        render_all(results, |r| report::render_generic(r, ctx.palette))
    } else {
        render_all(results, |r| {
            report::render_status(r, mode, &ctx.config, ctx.palette)
        })
    };

    let sorted = sort::sort(rendered, args.sort, mode);
    let text = report::join(&sorted);
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}
