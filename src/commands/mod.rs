//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `gis`
//! command-line tool. Related subcommands share a file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute`-style function that takes the parsed `Args` and a
//!   [`Context`] and performs the command's logic.
//!
//! Commands call into the `gis` library to run git across the modules and to
//! render the results; they only decide which modules, which git arguments
//! and which layout.

pub mod branch;
pub mod completions;
pub mod files;
pub mod init;
pub mod remote;
pub mod stash;
pub mod status;

use anyhow::Result;

use gis::config::GisConfig;
use gis::dispatch::{Dispatcher, ModuleResult};
use gis::modules::Module;
use gis::output::Palette;
use gis::report::{self, RenderedModule};
use gis::sort::{self, SortKey};
use gis::status::StatusMode;

/// Everything a command needs: the loaded configuration and the palette.
pub struct Context {
    pub config: GisConfig,
    pub palette: Palette,
}

impl Context {
    pub fn new(config: GisConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.config)
    }
}

/// Print rendered blocks, root module first, then by module name.
pub fn print_sorted(entries: Vec<RenderedModule>) {
    let sorted = sort::sort(entries, Some(SortKey::ModuleName), StatusMode::OneLine);
    let text = report::join(&sorted);
    if !text.is_empty() {
        println!("{}", text);
    }
}

/// Run `args` in the modules selected by `predicate` and print each module's
/// output under its name.
pub fn run_and_print<P>(ctx: &Context, predicate: P, args: &[String]) -> Result<()>
where
    P: Fn(&Module) -> bool + Sync,
{
    let results = ctx.dispatcher().run_across_modules(predicate, args)?;
    print_sorted(render_all(results, |r| report::render_generic(r, ctx.palette)));
    Ok(())
}

/// Render every result with the same layout.
pub fn render_all<F>(results: Vec<ModuleResult>, render: F) -> Vec<RenderedModule>
where
    F: Fn(ModuleResult) -> RenderedModule,
{
    results.into_iter().map(render).collect()
}
