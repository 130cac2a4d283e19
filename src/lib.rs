//! # gis Library
//!
//! This library provides the core functionality of the `gis` command-line
//! tool: running one git command across a root repository and all of its
//! declared sub-repositories ("modules") at once, then re-rendering the
//! combined output as if it came from a single repository.
//!
//! ## Quick Example
//!
//! ```
//! use gis::config::GisConfig;
//! use gis::dispatch::ModuleResult;
//! use gis::modules::Module;
//! use gis::output::Palette;
//! use gis::report::render_status;
//! use gis::status::StatusMode;
//!
//! let config = GisConfig::new("/work");
//! let result = ModuleResult {
//!     module: Module::submodule("/work/lib"),
//!     output: "# branch.head master\n# branch.ab +2 -0\n? notes.txt\n".to_string(),
//!     exit_code: 0,
//! };
//!
//! let rendered = render_status(result, StatusMode::OneLine, &config, Palette::plain());
//! assert_eq!(rendered.text, "lib master[ahead 2] notes.txt");
//! ```
//!
//! ## Core Concepts
//!
//! - **Modules (`modules`)**: The root repository plus the sub-repositories
//!   declared in `.gis-modules` (or `.gitmodules`).
//! - **Dispatch (`dispatch`, `process`)**: Runs a git command in every
//!   selected module concurrently and collects one result per module.
//! - **Status (`status`)**: Parses `git status --porcelain=v2` output into a
//!   structured snapshot and renders it in full or one-line form.
//! - **Reports (`report`, `sort`)**: Lays out each module's block and orders
//!   the blocks, root module first.
//! - **Configuration (`config`, `defaults`, `output`)**: The git binary, the
//!   branch coloring lists, color and logging settings.
//!
//! ## Execution Flow
//!
//! 1.  **Discovery**: Read the marker file and resolve the module directories.
//! 2.  **Fan-out**: Start the git command in every selected module at once.
//! 3.  **Join**: Wait for all of them; warn about modules that failed.
//! 4.  **Render**: Turn each module's output into a text block.
//! 5.  **Sort**: Order the blocks, pinning the root module first.

pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod modules;
pub mod output;
pub mod process;
pub mod report;
pub mod sort;
pub mod status;
