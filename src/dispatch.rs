//! # Multi-Module Dispatch
//!
//! The [`Dispatcher`] runs one git command in every selected module at once
//! and waits for all of them:
//!
//! 1. Modules are discovered once from the marker file
//!    ([`crate::modules::discover`]).
//! 2. A predicate selects the modules to run in.
//! 3. Every selected module gets its own worker on a rayon pool sized to the
//!    number of selected modules, so all commands run simultaneously.
//! 4. The call returns after every worker has finished, with exactly one
//!    [`ModuleResult`] per selected module.
//!
//! ## Failure policy
//!
//! - A non-zero exit code is not fatal. It is logged at debug level, a
//!   warning naming the module is emitted, and the module's (possibly partial)
//!   output is still returned.
//! - A process that cannot be started aborts the whole batch with
//!   [`Error::ProcessLaunch`]; results from other modules are discarded.

use std::sync::Arc;

use log::{debug, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::config::GisConfig;
use crate::error::{Error, Result};
use crate::modules::{self, Module};
use crate::process::{command_line, DryRunRunner, ProcessRunner, SystemRunner};

/// Output of one command in one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleResult {
    pub module: Module,
    /// Raw standard output.
    pub output: String,
    pub exit_code: i32,
}

impl ModuleResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Select every module.
pub fn all_modules(_module: &Module) -> bool {
    true
}

/// Select every module except the root.
pub fn submodules_only(module: &Module) -> bool {
    !module.is_root
}

/// Select modules by short name; `.` selects the root.
pub fn named_modules(names: &[String]) -> impl Fn(&Module) -> bool + Sync + '_ {
    move |module: &Module| {
        names.iter().any(|name| {
            if name == "." {
                module.is_root
            } else {
                !module.is_root && module.name() == *name
            }
        })
    }
}

/// Runs git commands across the modules of a [`GisConfig`].
pub struct Dispatcher<'a> {
    config: &'a GisConfig,
    runner: Arc<dyn ProcessRunner>,
    /// Runs read-only queries; never a dry-run runner.
    query_runner: Arc<dyn ProcessRunner>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher that executes real processes, or only prints them
    /// when the configuration asks for a dry run.
    pub fn new(config: &'a GisConfig) -> Self {
        let runner: Arc<dyn ProcessRunner> = if config.dry_run {
            Arc::new(DryRunRunner)
        } else {
            Arc::new(SystemRunner)
        };
        Self {
            config,
            runner,
            query_runner: Arc::new(SystemRunner),
        }
    }

    /// Create a dispatcher with a custom runner used for commands and queries.
    pub fn with_runner(config: &'a GisConfig, runner: Box<dyn ProcessRunner>) -> Self {
        let runner: Arc<dyn ProcessRunner> = Arc::from(runner);
        Self {
            config,
            query_runner: Arc::clone(&runner),
            runner,
        }
    }

    /// Discover the modules of the configured directory.
    pub fn modules(&self) -> Result<Vec<Module>> {
        modules::discover(&self.config.current_dir)
    }

    /// Run `args` through git in every module accepted by `predicate`.
    ///
    /// The order of the returned results is unspecified.
    pub fn run_across_modules<P>(&self, predicate: P, args: &[String]) -> Result<Vec<ModuleResult>>
    where
        P: Fn(&Module) -> bool + Sync,
    {
        let selected: Vec<Module> = self
            .modules()?
            .into_iter()
            .filter(|module| predicate(module))
            .collect();
        self.run_in(&selected, args)
    }

    /// Run `args` through git in each of `modules` concurrently.
    pub fn run_in(&self, modules: &[Module], args: &[String]) -> Result<Vec<ModuleResult>> {
        if modules.is_empty() {
            return Ok(Vec::new());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(modules.len())
            .thread_name(|index| format!("gis-module-{}", index))
            .build()?;

        let results = pool.install(|| {
            modules
                .par_iter()
                .map(|module| self.run_one(module, args))
                .collect::<Result<Vec<_>>>()
        })?;

        for result in results.iter().filter(|r| !r.success()) {
            debug!("exit with code: '{}'", result.exit_code);
            let failure = Error::ModuleFailure {
                module: result.module.name(),
                exit_code: result.exit_code,
            };
            warn!("{}", failure);
        }

        Ok(results)
    }

    /// The branch checked out in `module`, or `None` when it cannot be
    /// determined (detached head, not a repository, git missing).
    pub fn current_branch(&self, module: &Module) -> Option<String> {
        let args = git_args(["branch", "--show-current"]);
        match self
            .query_runner
            .run(&module.path, &self.config.git, &args)
        {
            Ok(output) if output.success() => output
                .stdout
                .lines()
                .next()
                .map(|line| line.trim().to_string())
                .filter(|branch| !branch.is_empty()),
            Ok(output) => {
                debug!("exit with code: '{}'", output.exit_code);
                None
            }
            Err(e) => {
                debug!("{}", e);
                None
            }
        }
    }

    fn run_one(&self, module: &Module, args: &[String]) -> Result<ModuleResult> {
        debug!(
            "executing command '{}' under module '{}'",
            command_line(&self.config.git, args),
            module.path.display()
        );
        let output = self.runner.run(&module.path, &self.config.git, args)?;
        Ok(ModuleResult {
            module: module.clone(),
            output: output.stdout,
            exit_code: output.exit_code,
        })
    }
}

/// Build an owned argument list from string slices.
pub fn git_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter().map(Into::into).collect()
}
