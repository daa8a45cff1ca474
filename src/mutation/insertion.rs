use crate::chromosome::Sequence;
use crate::mutation::MutationOperator;
use crate::rng::ThreadLocalRng;

/// Inserts freshly generated values at random positions.
///
/// Each application grows the chromosome by the configured insertion count.
/// Insertion positions are drawn from the input chromosome's index range.
///
/// # Examples
///
/// ```rust
/// use evosolve::mutation::{MutationOperator, PooledValues, ValueInsertion};
///
/// let digits = PooledValues::new((0..10).collect::<Vec<i32>>()).unwrap();
/// let mutation = ValueInsertion::new(move || digits.draw(), 2);
///
/// let mutated = mutation.apply(vec![100, 200]);
/// assert_eq!(mutated.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ValueInsertion<G> {
    generator: G,
    insertions: u64,
}

impl<G> ValueInsertion<G> {
    /// Creates an operator inserting `insertions` generated values per
    /// application.
    pub fn new(generator: G, insertions: u64) -> Self {
        Self {
            generator,
            insertions,
        }
    }
}

impl<C, G> MutationOperator<C> for ValueInsertion<G>
where
    C: Sequence + Send + Sync,
    G: Fn() -> C::Element + Send + Sync,
{
    fn apply(&self, chromosome: C) -> C {
        let bound = chromosome.len();
        let mut mutated = chromosome;
        for _ in 0..self.insertions {
            let index = if bound == 0 {
                0
            } else {
                ThreadLocalRng::uniform_int(0, bound - 1)
            };
            mutated.insert_at(index, (self.generator)());
        }
        mutated
    }
}
