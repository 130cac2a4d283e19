//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which writes a
//! `.gis-modules` file declaring every git repository found directly under the
//! current directory. An existing `.gis-modules` is overwritten.

use anyhow::Result;
use log::info;

use gis::defaults::GIS_MODULES_FILENAME;
use gis::modules;

use super::Context;

/// Execute the `init` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let current_dir = &ctx.config.current_dir;
    if ctx.config.dry_run {
        info!(
            "would write '{}' under '{}'",
            GIS_MODULES_FILENAME,
            current_dir.display()
        );
        return Ok(());
    }

    let names = modules::write_marker_file(current_dir)?;
    if names.is_empty() {
        info!(
            "no git repositories found, wrote an empty '{}'",
            GIS_MODULES_FILENAME
        );
    } else {
        info!(
            "wrote '{}' with {} module(s): {}",
            GIS_MODULES_FILENAME,
            names.len(),
            names.join(", ")
        );
    }
    Ok(())
}
