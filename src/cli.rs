//! CLI argument parsing and command dispatch

use std::env;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gis::config::GisConfig;
use gis::output::{self, OutputConfig, Palette};

use crate::commands::{self, Context};

/// gis - Run git commands across a repository and its modules
#[derive(Parser, Debug)]
#[command(name = "gis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; defaults to `status --one-line`
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Show debug output (same as --log-level debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the git commands instead of running them
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the working tree status of every module
    #[command(visible_alias = "st")]
    Status(commands::status::StatusArgs),

    /// Pull every module
    #[command(visible_alias = "pu")]
    Pull,

    /// Fetch every module
    #[command(visible_alias = "fe")]
    Fetch,

    /// Fetch a branch from origin into the local branch of the same name
    #[command(visible_alias = "fo")]
    FetchOrigin(commands::remote::FetchOriginArgs),

    /// Prune stale origin tracking branches in every module
    #[command(visible_alias = "rpo")]
    RemotePruneOrigin,

    /// Push the modules currently on a branch
    #[command(visible_alias = "pus")]
    Push(commands::remote::PushArgs),

    /// Check out a branch in every module
    #[command(visible_alias = "co")]
    Checkout(commands::branch::CheckoutArgs),

    /// Create and check out a new branch in selected modules
    #[command(visible_alias = "cb")]
    CheckoutBranch(commands::branch::CheckoutBranchArgs),

    /// Delete a local branch in every module
    #[command(visible_alias = "rm")]
    RemoveBranch(commands::branch::RemoveBranchArgs),

    /// List local branches of every module
    #[command(visible_alias = "br")]
    Branches(commands::branch::BranchesArgs),

    /// Stash changes, or pop the latest stash, in every module
    Stash(commands::stash::StashArgs),

    /// List changed files of every module, prefixed with the module name
    Files,

    /// Write a .gis-modules file listing the git repositories in this directory
    Init,

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// The palette selected by `--color` and the environment.
    pub fn palette(&self) -> Palette {
        OutputConfig::from_env_and_flag(&self.color).palette()
    }

    fn log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let palette = self.palette();
        output::init_logger(self.log_filter(), palette);

        let dry_run = self.dry_run;
        let command = self
            .command
            .unwrap_or(Commands::Status(commands::status::StatusArgs::one_line()));

        let context = || -> Result<Context> {
            let config = GisConfig::load(env::current_dir()?)?.with_dry_run(dry_run);
            Ok(Context::new(config, palette))
        };

        match command {
            Commands::Status(args) => commands::status::execute(args, &context()?),
            Commands::Pull => commands::remote::pull(&context()?),
            Commands::Fetch => commands::remote::fetch(&context()?),
            Commands::FetchOrigin(args) => commands::remote::fetch_origin(args, &context()?),
            Commands::RemotePruneOrigin => commands::remote::remote_prune_origin(&context()?),
            Commands::Push(args) => commands::remote::push(args, &context()?),
            Commands::Checkout(args) => commands::branch::checkout(args, &context()?),
            Commands::CheckoutBranch(args) => {
                commands::branch::checkout_branch(args, &context()?)
            }
            Commands::RemoveBranch(args) => commands::branch::remove_branch(args, &context()?),
            Commands::Branches(args) => commands::branch::branches(args, &context()?),
            Commands::Stash(args) => commands::stash::execute(args, &context()?),
            Commands::Files => commands::files::execute(&context()?),
            Commands::Init => commands::init::execute(&context()?),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
