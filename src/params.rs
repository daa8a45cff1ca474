//! # Parameter Bundle
//!
//! [`Params`] aggregates one operator of each kind: fitness, selection,
//! crossover, mutation and termination. The bundle is generic over all five
//! operator types, so operator dispatch monomorphizes and the hot path pays
//! no indirection.
//!
//! [`Params::builder`] starts from the default operator set — accumulation
//! fitness, roulette selection, random crossover, no-op mutation and a
//! 1000-generation termination — and each `with_*` call swaps in a
//! different operator, changing the corresponding type parameter.
//!
//! ## Example
//!
//! ```rust
//! use evosolve::params::Params;
//! use evosolve::selection::RankSelection;
//! use evosolve::termination::FitnessTermination;
//!
//! let params = Params::builder()
//!     .with_selection_operator(RankSelection)
//!     .with_termination_operator(FitnessTermination::new(25.0))
//!     .build();
//! # let _ = params;
//! ```

use crate::crossover::RandomCrossover;
use crate::fitness::AccumulationFitness;
use crate::mutation::NoOpMutation;
use crate::selection::RouletteSelection;
use crate::termination::GenerationsTermination;

/// The default operator set used by [`Params::builder`].
pub type DefaultParams = Params<
    AccumulationFitness,
    RouletteSelection,
    RandomCrossover,
    NoOpMutation,
    GenerationsTermination,
>;

/// Bundle of the five operators driving a run.
///
/// The solver consumes a bundle per run, which keeps stateful termination
/// operators from leaking countdown state between runs; clone the bundle (or
/// rebuild it) to launch again.
#[derive(Debug, Clone)]
pub struct Params<F, S, X, M, T> {
    fitness: F,
    selection: S,
    crossover: X,
    mutation: M,
    termination: T,
}

impl DefaultParams {
    /// Starts a builder pre-filled with the default operator set.
    pub fn builder() -> ParamsBuilder<
        AccumulationFitness,
        RouletteSelection,
        RandomCrossover,
        NoOpMutation,
        GenerationsTermination,
    > {
        ParamsBuilder {
            fitness: AccumulationFitness,
            selection: RouletteSelection,
            crossover: RandomCrossover,
            mutation: NoOpMutation,
            termination: GenerationsTermination::default(),
        }
    }
}

impl Default for DefaultParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<F, S, X, M, T> Params<F, S, X, M, T> {
    /// Bundles the five operators directly.
    pub fn new(fitness: F, selection: S, crossover: X, mutation: M, termination: T) -> Self {
        Self {
            fitness,
            selection,
            crossover,
            mutation,
            termination,
        }
    }

    /// The fitness operator.
    pub fn fitness_operator(&self) -> &F {
        &self.fitness
    }

    /// The selection operator.
    pub fn selection_operator(&self) -> &S {
        &self.selection
    }

    /// The crossover operator.
    pub fn crossover_operator(&self) -> &X {
        &self.crossover
    }

    /// The mutation operator.
    pub fn mutation_operator(&self) -> &M {
        &self.mutation
    }

    /// The termination operator.
    pub fn termination_operator(&self) -> &T {
        &self.termination
    }

    pub(crate) fn into_parts(self) -> (F, S, X, M, T) {
        (
            self.fitness,
            self.selection,
            self.crossover,
            self.mutation,
            self.termination,
        )
    }
}

/// Fluent builder for [`Params`]. Every setter replaces one operator and its
/// type parameter; the remaining slots keep their current operators.
#[derive(Debug, Clone)]
pub struct ParamsBuilder<F, S, X, M, T> {
    fitness: F,
    selection: S,
    crossover: X,
    mutation: M,
    termination: T,
}

impl<F, S, X, M, T> ParamsBuilder<F, S, X, M, T> {
    /// Replaces the fitness operator.
    pub fn with_fitness_operator<F2>(self, fitness: F2) -> ParamsBuilder<F2, S, X, M, T> {
        ParamsBuilder {
            fitness,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            termination: self.termination,
        }
    }

    /// Replaces the selection operator.
    pub fn with_selection_operator<S2>(self, selection: S2) -> ParamsBuilder<F, S2, X, M, T> {
        ParamsBuilder {
            fitness: self.fitness,
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
            termination: self.termination,
        }
    }

    /// Replaces the crossover operator.
    pub fn with_crossover_operator<X2>(self, crossover: X2) -> ParamsBuilder<F, S, X2, M, T> {
        ParamsBuilder {
            fitness: self.fitness,
            selection: self.selection,
            crossover,
            mutation: self.mutation,
            termination: self.termination,
        }
    }

    /// Replaces the mutation operator.
    pub fn with_mutation_operator<M2>(self, mutation: M2) -> ParamsBuilder<F, S, X, M2, T> {
        ParamsBuilder {
            fitness: self.fitness,
            selection: self.selection,
            crossover: self.crossover,
            mutation,
            termination: self.termination,
        }
    }

    /// Replaces the termination operator.
    pub fn with_termination_operator<T2>(self, termination: T2) -> ParamsBuilder<F, S, X, M, T2> {
        ParamsBuilder {
            fitness: self.fitness,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            termination,
        }
    }

    /// Finalizes the bundle.
    pub fn build(self) -> Params<F, S, X, M, T> {
        Params {
            fitness: self.fitness,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            termination: self.termination,
        }
    }
}
