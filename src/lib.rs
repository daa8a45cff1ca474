//! # evosolve
//!
//! A generic evolutionary search engine: a reusable driver that evolves a
//! population of candidate solutions toward an objective under
//! caller-supplied operators for fitness evaluation, selection,
//! recombination, mutation and termination.
//!
//! ## Overview
//!
//! The engine is a pipeline driven once per generation: pick the elites,
//! fan crossover jobs out across a worker pool, mutate and score every
//! child, merge, sort, track the best individual and ask the termination
//! operator whether to stop. Chromosomes are opaque to the driver — anything
//! cloneable, comparable and default-constructible works — and every
//! operator slot accepts either a built-in implementation or your own.
//!
//! ## Key features
//!
//! - **Composable operators**: five operator kinds with structural
//!   contracts; closures adapt via `fitness_fn`, `mutation_fn`,
//!   `crossover_fn` and `termination_fn`.
//! - **Parallel offspring generation**: crossover jobs run on a
//!   work-stealing pool with thread-local random state; results are
//!   collected in submission order.
//! - **Elitism with regression protection**: the best individual ever seen
//!   survives every generation.
//! - **Monomorphized dispatch**: the parameter bundle is generic over all
//!   five operator types, so the hot path pays no virtual calls.
//!
//! ## Quick start
//!
//! Guess a phrase by evolving random strings toward it:
//!
//! ```rust
//! use evosolve::engine::{solve, AlgorithmSettings};
//! use evosolve::fitness::ElementWiseComparison;
//! use evosolve::mutation::ValueReplacement;
//! use evosolve::params::Params;
//! use evosolve::rng::ThreadLocalRng;
//! use evosolve::termination::FitnessTermination;
//!
//! let alphabet: Vec<char> = "abcdefgh".chars().collect();
//! let target = "cafe".to_string();
//!
//! let initial: Vec<String> = (0..64)
//!     .map(|_| {
//!         (0..4)
//!             .map(|_| alphabet[ThreadLocalRng::uniform_int(0, alphabet.len() - 1)])
//!             .collect()
//!     })
//!     .collect();
//!
//! let params = Params::builder()
//!     .with_fitness_operator(ElementWiseComparison::new(target.clone(), 1.0))
//!     .with_mutation_operator(ValueReplacement::new(alphabet, 1).unwrap())
//!     .with_termination_operator(FitnessTermination::new(4.0))
//!     .build();
//!
//! let best = solve(
//!     &initial,
//!     AlgorithmSettings::new(0.3, 0.6, 0.3),
//!     params,
//!     |_stats| {},
//! )
//! .unwrap();
//!
//! assert_eq!(best.chromosome, target);
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: the driver, its settings and result types
//! - [`params`]: the operator bundle and its builder
//! - [`chromosome`]: the sequence abstraction used by the built-in operators
//! - [`fitness`], [`selection`], [`crossover`], [`mutation`],
//!   [`termination`]: operator contracts and built-ins
//! - [`rng`]: thread-local random sources
//! - [`error`]: error types

pub mod chromosome;
pub mod crossover;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod mutation;
pub mod params;
pub mod rng;
pub mod selection;
pub mod termination;

pub use chromosome::Sequence;
pub use crossover::{crossover_fn, AdditiveCrossover, CrossoverOperator, RandomCrossover};
pub use engine::{solve, AlgorithmSettings, EvolutionResult, GeneticAlgorithm, IterationStats};
pub use error::{GeneticError, Result};
pub use fitness::{
    fitness_fn, AccumulationFitness, CompositeFitness, ElementWiseComparison, FitnessOperator,
};
pub use mutation::{
    mutation_fn, CompositeMutation, MutationOperator, NoOpMutation, PooledValues,
    UniformPerturbation, ValueInsertion, ValueReplacement,
};
pub use params::{Params, ParamsBuilder};
pub use rng::ThreadLocalRng;
pub use selection::{RankSelection, RouletteSelection, SelectionOperator};
pub use termination::{
    termination_fn, FitnessHysteresis, FitnessTermination, GenerationsTermination,
    TerminationOperator,
};
