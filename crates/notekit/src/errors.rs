//! # Error types
//!
//! ## Overview
//!
//! This module contains the error types returned by the components in this
//! crate, and [HostError], which groups them together for code that drives a
//! whole host.
use crate::key::KeyParseError;

/// Errors that can occur when registering or executing commands.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum CommandError {
    /// Error for unmapped commands.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Error for registering an identifier that is already mapped.
    #[error("Command already registered: {0}")]
    DuplicateCommand(String),
}

/// Errors that can occur when loading or saving plugin data.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DataError {
    /// Failure during input/output.
    #[error("Input/Output Error: {0}")]
    IOError(#[from] std::io::Error),

    /// Failure to locate a directory to keep plugin data in.
    #[error("No usable plugin data directory")]
    NoDataDirectory,
}

/// Errors that can occur when loading and driving plugins.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum HostError {
    /// Failure in plugin-specific code.
    #[error("{0}")]
    Plugin(Box<dyn std::error::Error + Send + Sync>),

    /// Failure while working with the command registry.
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Failure while loading or saving plugin data.
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Failure while parsing key notation.
    #[error("Key parse error: {0}")]
    KeyParse(#[from] KeyParseError),

    /// Failure to find a loaded plugin.
    #[error("No plugin loaded with identifier {0:?}")]
    NoPlugin(String),

    /// Generic failure.
    #[error("Error: {0}")]
    Failure(String),
}

/// Common result type for host operations.
pub type HostResult<V> = Result<V, HostError>;
