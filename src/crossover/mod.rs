//! # Recombination Operators
//!
//! Recombination produces a child chromosome from two parents. The operator
//! is order-sensitive: `combine(a, b)` and `combine(b, a)` are different
//! children in general, and the driver deliberately produces one of each per
//! parent pair.
//!
//! Two built-in operators are provided:
//!
//! - [`RandomCrossover`]: a two-point splice for sequence chromosomes, with
//!   uniformly drawn pivots. This is the default in the parameter bundle.
//! - [`AdditiveCrossover`]: `a + b` for chromosome types that define
//!   addition, the fallback for non-sequence representations.
//!
//! Plain closures are adapted with [`crossover_fn`].

pub mod additive;
pub mod random;
pub mod splice;

pub use additive::AdditiveCrossover;
pub use random::RandomCrossover;
pub use splice::{cross, spliced_len};

/// Contract for recombination operators.
///
/// Implementations must be safe to invoke concurrently from multiple worker
/// threads; randomness should come from [`crate::rng::ThreadLocalRng`].
pub trait CrossoverOperator<C>: Send + Sync {
    /// Produces a child from the ordered parent pair `(first, second)`.
    fn combine(&self, first: &C, second: &C) -> C;
}

/// A crossover operator backed by a plain closure. Built by [`crossover_fn`].
#[derive(Debug, Clone, Copy)]
pub struct CrossoverFn<F>(F);

/// Adapts a `Fn(&C, &C) -> C` closure into a [`CrossoverOperator`].
///
/// # Examples
///
/// ```rust
/// use evosolve::crossover::{crossover_fn, CrossoverOperator};
///
/// let midpoint = crossover_fn(|a: &f64, b: &f64| (a + b) / 2.0);
/// assert_eq!(midpoint.combine(&1.0, &3.0), 2.0);
/// ```
pub fn crossover_fn<C, F>(combine: F) -> CrossoverFn<F>
where
    F: Fn(&C, &C) -> C + Send + Sync,
{
    CrossoverFn(combine)
}

impl<C, F> CrossoverOperator<C> for CrossoverFn<F>
where
    F: Fn(&C, &C) -> C + Send + Sync,
{
    fn combine(&self, first: &C, second: &C) -> C {
        (self.0)(first, second)
    }
}
