//! # Remote Command Implementations
//!
//! Commands that talk to the remote: `pull`, `fetch`, `fetch-origin`,
//! `remote-prune-origin` and `push`.
//!
//! `push` only touches modules whose current branch is the one being pushed,
//! and asks for confirmation first unless `--yes` is given.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

use gis::dispatch::{all_modules, git_args};
use gis::modules::Module;

use super::{run_and_print, Context};

/// Fetch a branch from origin into the local branch of the same name
#[derive(Args, Debug)]
pub struct FetchOriginArgs {
    /// Branch to fetch
    #[arg(value_name = "BRANCH")]
    pub branch: String,
}

/// Push the modules currently on a branch
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Branch to push; modules on another branch are skipped
    #[arg(value_name = "BRANCH")]
    pub branch: String,

    /// Create the branch on origin and set it as upstream
    #[arg(short = 'r', long = "remote")]
    pub new_remote_branch: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl PushArgs {
    fn git_args(&self) -> Vec<String> {
        if self.new_remote_branch {
            git_args(["push", "-u", "origin", self.branch.as_str()])
        } else {
            git_args(["push"])
        }
    }
}

/// Execute the `pull` command.
pub fn pull(ctx: &Context) -> Result<()> {
    run_and_print(ctx, all_modules, &git_args(["pull"]))
}

/// Execute the `fetch` command.
pub fn fetch(ctx: &Context) -> Result<()> {
    run_and_print(ctx, all_modules, &git_args(["fetch"]))
}

/// Execute the `fetch-origin` command: `git fetch origin <branch>:<branch>`.
pub fn fetch_origin(args: FetchOriginArgs, ctx: &Context) -> Result<()> {
    let refspec = format!("{0}:{0}", args.branch);
    run_and_print(ctx, all_modules, &git_args(["fetch", "origin", refspec.as_str()]))
}

/// Execute the `remote-prune-origin` command.
pub fn remote_prune_origin(ctx: &Context) -> Result<()> {
    run_and_print(ctx, all_modules, &git_args(["remote", "prune", "origin"]))
}

/// Execute the `push` command.
pub fn push(args: PushArgs, ctx: &Context) -> Result<()> {
    if !args.yes
        && !confirm(&format!(
            "Are you sure you want to push to remote '{}'?",
            args.branch
        ))?
    {
        return Ok(());
    }

    let dispatcher = ctx.dispatcher();
    let on_branch = |module: &Module| {
        dispatcher.current_branch(module).as_deref() == Some(args.branch.as_str())
    };
    run_and_print(ctx, on_branch, &args.git_args())
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_args_plain() {
        let args = PushArgs {
            branch: "feature/x".to_string(),
            new_remote_branch: false,
            yes: true,
        };
        assert_eq!(args.git_args(), vec!["push"]);
    }

    #[test]
    fn test_push_args_new_remote_branch() {
        let args = PushArgs {
            branch: "feature/x".to_string(),
            new_remote_branch: true,
            yes: true,
        };
        assert_eq!(args.git_args(), vec!["push", "-u", "origin", "feature/x"]);
    }
}
