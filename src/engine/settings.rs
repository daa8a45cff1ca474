use crate::error::{GeneticError, Result};

/// Probability settings for a run. Every rate lives in `[0.0, 1.0]`.
///
/// `elitism_rate` and `crossover_rate` scale with the population size to
/// produce the per-generation elite and crossover-job counts (with small
/// floors so neither collapses on tiny populations).
///
/// `mutation_rate` is carried for mutation operators that want to consult
/// it; the driver itself applies the configured mutation operator to every
/// offspring unconditionally.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmSettings {
    /// Fraction of the population preserved unchanged each generation.
    pub elitism_rate: f64,
    /// Advisory mutation probability; not consulted by the driver.
    pub mutation_rate: f64,
    /// Fraction of the population size dispatched as crossover jobs.
    pub crossover_rate: f64,
}

impl AlgorithmSettings {
    /// Creates settings from the three rates.
    pub fn new(elitism_rate: f64, mutation_rate: f64, crossover_rate: f64) -> Self {
        Self {
            elitism_rate,
            mutation_rate,
            crossover_rate,
        }
    }

    /// Checks that every rate lies within `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidRate`] naming the first offending rate.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("elitism", self.elitism_rate),
            ("mutation", self.mutation_rate),
            ("crossover", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

impl Default for AlgorithmSettings {
    fn default() -> Self {
        Self {
            elitism_rate: 0.0,
            mutation_rate: 0.5,
            crossover_rate: 0.2,
        }
    }
}
