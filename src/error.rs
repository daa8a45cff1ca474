//! # Error Types
//!
//! This module defines the error types for the evolutionary search engine.
//! Configuration problems are reported at entry, before any work is done;
//! errors raised by caller-supplied operators are never caught by the engine
//! and propagate to the caller unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use evosolve::error::{GeneticError, Result};
//!
//! fn check_population(population: &[Vec<f64>]) -> Result<()> {
//!     if population.is_empty() {
//!         return Err(GeneticError::EmptyPopulation);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors originated by the evolutionary search engine itself.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// The initial population handed to the solver was empty.
    #[error("empty population: cannot evolve an empty initial population")]
    EmptyPopulation,

    /// A settings rate was outside the closed interval `[0.0, 1.0]`.
    #[error("invalid {name} rate {value}: rates must be within [0.0, 1.0]")]
    InvalidRate {
        /// Which rate was rejected (`elitism`, `mutation` or `crossover`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The worker pool could not be constructed or failed to run jobs.
    #[error("executor error: {0}")]
    Executor(String),

    /// An operator or bundle was constructed with invalid arguments.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// A specialized `Result` type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;
