//! # Files Command Implementation
//!
//! Lists the files with unstaged changes in every module, one per line, each
//! prefixed with its module (`./` for the root) so the paths are usable from
//! the root directory.

use anyhow::Result;

use gis::dispatch::{all_modules, git_args};
use gis::report;

use super::{print_sorted, render_all, Context};

/// Execute the `files` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let results = ctx
        .dispatcher()
        .run_across_modules(all_modules, &git_args(["diff", "--name-only"]))?;
    print_sorted(render_all(results, report::render_with_module_prefix));
    Ok(())
}
