use crate::error::{GeneticError, Result};
use crate::rng::ThreadLocalRng;

/// Draws uniformly from a fixed pool of candidate values.
///
/// Used by [`ValueReplacement`](crate::mutation::ValueReplacement) and handy
/// as a generator for [`ValueInsertion`](crate::mutation::ValueInsertion).
///
/// # Examples
///
/// ```rust
/// use evosolve::mutation::PooledValues;
///
/// let letters = PooledValues::new("abc".chars().collect()).unwrap();
/// let drawn = letters.draw();
/// assert!(['a', 'b', 'c'].contains(&drawn));
/// ```
#[derive(Debug, Clone)]
pub struct PooledValues<E> {
    pool: Vec<E>,
}

impl<E: Clone> PooledValues<E> {
    /// Creates a generator over the given pool.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] when the pool is empty.
    pub fn new(pool: Vec<E>) -> Result<Self> {
        if pool.is_empty() {
            return Err(GeneticError::Configuration(
                "value pool must not be empty".to_string(),
            ));
        }
        Ok(Self { pool })
    }

    /// Draws one value uniformly from the pool.
    pub fn draw(&self) -> E {
        let index = ThreadLocalRng::uniform_int(0, self.pool.len() - 1);
        self.pool[index].clone()
    }
}
