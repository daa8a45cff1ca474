//! # Mutation Operators
//!
//! Mutation operators form a small algebra over `C -> C`:
//!
//! - [`NoOpMutation`]: the identity, and the default in the parameter bundle.
//! - [`ValueReplacement`]: overwrites randomly chosen positions with values
//!   drawn from a candidate pool.
//! - [`ValueInsertion`]: inserts freshly generated values at random
//!   positions, growing the chromosome.
//! - [`UniformPerturbation`]: adds an independent uniform draw to every
//!   element of a numeric sequence.
//! - [`CompositeMutation`]: chains any number of mutation operators in order.
//!
//! The driver applies the configured mutation operator exactly once to every
//! offspring. The `mutation_rate` carried in the settings is not consulted by
//! the driver; a mutation operator that wants probabilistic behavior rolls
//! its own dice.
//!
//! Plain closures are adapted with [`mutation_fn`].

pub mod composite;
pub mod insertion;
pub mod no_op;
pub mod perturbation;
pub mod pooled;
pub mod replacement;

pub use composite::CompositeMutation;
pub use insertion::ValueInsertion;
pub use no_op::NoOpMutation;
pub use perturbation::UniformPerturbation;
pub use pooled::PooledValues;
pub use replacement::ValueReplacement;

/// Contract for mutation operators.
///
/// Implementations must be safe to invoke concurrently from multiple worker
/// threads; randomness should come from [`crate::rng::ThreadLocalRng`].
pub trait MutationOperator<C>: Send + Sync {
    /// Returns the mutated chromosome. Identity is a valid implementation.
    fn apply(&self, chromosome: C) -> C;
}

/// A mutation operator backed by a plain closure. Built by [`mutation_fn`].
#[derive(Debug, Clone, Copy)]
pub struct MutationFn<F>(F);

/// Adapts a `Fn(C) -> C` closure into a [`MutationOperator`].
///
/// # Examples
///
/// ```rust
/// use evosolve::mutation::{mutation_fn, MutationOperator};
///
/// let double_all = mutation_fn(|values: Vec<i32>| {
///     values.into_iter().map(|v| v * 2).collect()
/// });
/// assert_eq!(double_all.apply(vec![1, 2]), vec![2, 4]);
/// ```
pub fn mutation_fn<C, F>(mutate: F) -> MutationFn<F>
where
    F: Fn(C) -> C + Send + Sync,
{
    MutationFn(mutate)
}

impl<C, F> MutationOperator<C> for MutationFn<F>
where
    F: Fn(C) -> C + Send + Sync,
{
    fn apply(&self, chromosome: C) -> C {
        (self.0)(chromosome)
    }
}
