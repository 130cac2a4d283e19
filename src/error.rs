//! # Error Handling
//!
//! This module defines the centralized error type for the `gis` library. It
//! uses the `thiserror` library to describe every failure mode the dispatcher,
//! module discovery and status parser can run into.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors. The
//!   variants fall into two groups:
//!   - fatal errors (`Configuration`, `ProcessLaunch`, `ThreadPool`, `Io`,
//!     `ConfigParse`) which abort the whole command and are surfaced to the
//!     user once, and
//!   - recoverable conditions (`ModuleFailure`, `ParseAnomaly`) which are
//!     only ever logged. They exist as variants so their messages live in
//!     one place.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for gis operations
#[derive(Error, Debug)]
pub enum Error {
    /// No marker file was found, or the configuration could not be loaded.
    #[error("{message}")]
    Configuration { message: String },

    /// The external process could not be started, or waiting for it failed.
    ///
    /// This is fatal to the whole dispatch batch.
    #[error("Could not execute '{command}' under module '{module}': {message}")]
    ProcessLaunch {
        module: String,
        command: String,
        message: String,
    },

    /// A module's command exited with a non-zero status.
    #[error("Could not perform on module: '{module}'")]
    ModuleFailure { module: String, exit_code: i32 },

    /// A status line did not match the expected porcelain v2 grammar.
    #[error("Unexpected status line: '{line}'")]
    ParseAnomaly { line: String },

    /// The worker pool for a dispatch batch could not be created.
    #[error("Could not start module workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML parsing error in the user configuration file.
    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
