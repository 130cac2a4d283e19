//! # Branch Command Implementations
//!
//! `checkout`, `checkout-branch`, `remove-branch` and `branches`.

use anyhow::Result;
use clap::Args;

use gis::dispatch::{all_modules, git_args, named_modules};
use gis::report;

use super::remote::confirm;
use super::{print_sorted, render_all, run_and_print, Context};

/// Check out a branch in every module
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Branch to check out
    #[arg(value_name = "BRANCH")]
    pub branch: String,
}

/// Create and check out a new branch in selected modules
#[derive(Args, Debug)]
pub struct CheckoutBranchArgs {
    /// Name of the new branch
    #[arg(value_name = "NEW_BRANCH")]
    pub new_branch: String,

    /// Modules to create the branch in, by name; `.` is the root module.
    /// All modules when omitted.
    #[arg(value_name = "MODULE")]
    pub modules: Vec<String>,
}

/// Delete a local branch in every module
#[derive(Args, Debug)]
pub struct RemoveBranchArgs {
    /// Branch to delete
    #[arg(value_name = "BRANCH")]
    pub branch: String,

    /// Delete even if the branch is not fully merged (`git branch -D`)
    #[arg(short, long)]
    pub force: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// List local branches of every module
#[derive(Args, Debug)]
pub struct BranchesArgs {
    /// Print branch names only, without module names
    #[arg(long)]
    pub no_module_name: bool,
}

/// Execute the `checkout` command.
pub fn checkout(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    run_and_print(ctx, all_modules, &git_args(["checkout", args.branch.as_str()]))
}

/// Execute the `checkout-branch` command.
pub fn checkout_branch(args: CheckoutBranchArgs, ctx: &Context) -> Result<()> {
    let command = git_args(["checkout", "-b", args.new_branch.as_str()]);
    if args.modules.is_empty() {
        run_and_print(ctx, all_modules, &command)
    } else {
        run_and_print(ctx, named_modules(&args.modules), &command)
    }
}

/// Execute the `remove-branch` command.
pub fn remove_branch(args: RemoveBranchArgs, ctx: &Context) -> Result<()> {
    if !args.yes
        && !confirm(&format!(
            "Are you sure you want to remove branch '{}'?",
            args.branch
        ))?
    {
        return Ok(());
    }
    let flag = if args.force { "-D" } else { "-d" };
    run_and_print(ctx, all_modules, &git_args(["branch", flag, args.branch.as_str()]))
}

/// Execute the `branches` command.
pub fn branches(args: BranchesArgs, ctx: &Context) -> Result<()> {
    let command = git_args(["branch", "--format=%(refname:short)"]);
    if !args.no_module_name {
        return run_and_print(ctx, all_modules, &command);
    }

    let results = ctx.dispatcher().run_across_modules(all_modules, &command)?;
    print_sorted(render_all(results, report::render_passthrough));
    Ok(())
}
