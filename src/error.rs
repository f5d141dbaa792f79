//! # Error Types
//!
//! This module defines the error type shared by the whole engine. Every
//! fallible operation returns the crate-wide [`Result`] alias, with specific
//! variants for the failure scenarios that can occur while loading, selecting
//! and breeding a population.
//!
//! Foreign errors can be wrapped with additional context through the
//! [`ResultExt`] trait:
//!
//! ```rust
//! use darwin::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_input(path: &str) -> Result<File> {
//!     File::open(path).context("failed to open input file")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while simulating a population.
#[derive(Error, Debug)]
pub enum EvolutionError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation requires a non-empty population.
    #[error("Empty population error: cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when breeding is requested with too few eligible
    /// parents. Breeding needs at least two distinct breeders; a single one
    /// would make the distinct-parent redraw spin forever.
    #[error("Breeding error: need at least 2 breeders, found {available}")]
    InsufficientBreeders { available: usize },

    /// Error that occurs when a genome is too short to be split into a
    /// non-empty front and back fragment.
    #[error("Breeding error: genome of length {length} cannot be split for crossover")]
    GenomeTooShort { length: usize },

    /// Error that occurs when genome text fails integer parsing.
    #[error("Malformed genome text: {0}")]
    MalformedGenome(String),

    /// Error that occurs when a fitness function misbehaves.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized `Result` type for evolution operations.
pub type Result<T> = std::result::Result<T, EvolutionError>;

/// Extension trait for `Result` to add context to errors.
pub trait ResultExt<T, E> {
    /// Converts the error to an [`EvolutionError`] with the provided context
    /// prepended to the original message.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| EvolutionError::Other(format!("{}: {}", context, e)))
    }
}
