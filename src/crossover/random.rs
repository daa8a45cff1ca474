use crate::chromosome::Sequence;
use crate::crossover::{splice, CrossoverOperator};
use crate::rng::ThreadLocalRng;

/// Two-point splice crossover with uniformly drawn pivots.
///
/// For parents `a` and `b`, a pivot is drawn from `0..=a.len()` and another
/// from `0..=b.len()`, and the child is `a[..pivot_a]` followed by
/// `b[pivot_b..]`. The operator is order-sensitive: swapping the parents
/// changes both pivot distributions and which halves are spliced.
///
/// When either parent is empty the child is default-constructed.
///
/// # Examples
///
/// ```rust
/// use evosolve::crossover::{CrossoverOperator, RandomCrossover};
///
/// let crossover = RandomCrossover;
/// let child = crossover.combine(&vec![1, 2, 3], &vec![4, 5, 6]);
/// assert!(child.len() <= 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCrossover;

impl<C> CrossoverOperator<C> for RandomCrossover
where
    C: Sequence + Send + Sync,
{
    fn combine(&self, first: &C, second: &C) -> C {
        if first.is_empty() || second.is_empty() {
            return C::default();
        }

        let first_pivot = ThreadLocalRng::uniform_int(0, first.len());
        let second_pivot = ThreadLocalRng::uniform_int(0, second.len());

        splice::cross(first, second, first_pivot, second_pivot)
    }
}
