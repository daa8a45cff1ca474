use crate::chromosome::Sequence;
use crate::error::Result;
use crate::mutation::{MutationOperator, PooledValues};
use crate::rng::ThreadLocalRng;

/// Replaces randomly chosen elements with values drawn from a candidate pool.
///
/// Each replacement picks a uniform position and a uniform pool value,
/// resampling the value until it differs from the element it replaces. The
/// pool must therefore contain at least two distinct values whenever the
/// chromosome can hold pool values; otherwise resampling cannot make
/// progress.
///
/// Empty chromosomes are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use evosolve::mutation::{MutationOperator, ValueReplacement};
///
/// let mutation = ValueReplacement::new("abcdefghij".chars().collect(), 1).unwrap();
/// let mutated: String = mutation.apply("demo".to_string());
/// assert_eq!(mutated.len(), 4);
/// assert_ne!(mutated, "demo");
/// ```
#[derive(Debug, Clone)]
pub struct ValueReplacement<E> {
    pool: PooledValues<E>,
    replacements: u64,
}

impl<E: Clone> ValueReplacement<E> {
    /// Creates an operator replacing `replacements` elements per application.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeneticError::Configuration`] when the pool is
    /// empty.
    pub fn new(pool: Vec<E>, replacements: u64) -> Result<Self> {
        Ok(Self {
            pool: PooledValues::new(pool)?,
            replacements,
        })
    }
}

impl<C> MutationOperator<C> for ValueReplacement<C::Element>
where
    C: Sequence + Send + Sync,
    C::Element: Send + Sync,
{
    fn apply(&self, chromosome: C) -> C {
        if chromosome.is_empty() {
            return chromosome;
        }

        let mut mutated = chromosome;
        for _ in 0..self.replacements {
            let index = ThreadLocalRng::uniform_int(0, mutated.len() - 1);
            let current = mutated.element(index);

            // resample until the replacement actually changes the element
            let mut value = self.pool.draw();
            while value == current {
                value = self.pool.draw();
            }
            mutated.set(index, value);
        }
        mutated
    }
}
