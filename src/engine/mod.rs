//! # Evolution Engine
//!
//! The driver that runs the generational loop: annotate, select, recombine,
//! mutate, merge with the elites, sort, track the best and ask the
//! termination operator whether to stop.
//!
//! Per generation the driver:
//!
//! 1. Takes `round(|P| * elitism_rate)` elites (at least two whenever the
//!    rate is non-zero) without removing them from the population.
//! 2. Dispatches `round(|P| * crossover_rate)` jobs (at least four) to the
//!    worker pool. Each job selects two parents, produces `cross(a, b)` and
//!    `cross(b, a)`, mutates both children once and scores them.
//! 3. Collects all offspring in submission order, appends the elites and
//!    sorts the new population ascending by fitness.
//! 4. Updates the best-so-far; when no offspring improved on it, the
//!    previous best overwrites population slot 0 (the worst individual)
//!    so the lineage never regresses.
//! 5. Emits statistics to the iteration callback, then consults the
//!    termination operator.

pub mod driver;
pub mod settings;

pub use driver::{solve, EvolutionResult, GeneticAlgorithm, IterationStats};
pub use settings::AlgorithmSettings;
