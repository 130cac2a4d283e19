//! # Stash Command Implementation
//!
//! Stashes the working tree changes of every module, or pops the latest stash
//! with `--pop`.

use anyhow::Result;
use clap::Args;

use gis::dispatch::{all_modules, git_args};

use super::{run_and_print, Context};

/// Stash changes, or pop the latest stash, in every module
#[derive(Args, Debug)]
pub struct StashArgs {
    /// Pop the latest stash instead of creating one
    #[arg(long)]
    pub pop: bool,
}

/// Execute the `stash` command.
pub fn execute(args: StashArgs, ctx: &Context) -> Result<()> {
    let command = if args.pop {
        git_args(["stash", "pop"])
    } else {
        git_args(["stash"])
    };
    run_and_print(ctx, all_modules, &command)
}
