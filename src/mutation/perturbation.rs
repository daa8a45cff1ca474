use std::ops::Add;

use crate::chromosome::Sequence;
use crate::mutation::MutationOperator;
use crate::rng::UniformDraw;

/// Adds an independent uniform draw from `[lower, upper]` to every element.
///
/// Integer elements use inclusive draws, floating-point elements half-open
/// ones. No clamping is performed; a caller that needs bounded values wraps
/// this operator, for example in a
/// [`CompositeMutation`](crate::mutation::CompositeMutation) followed by a
/// clamping closure.
///
/// # Examples
///
/// ```rust
/// use evosolve::mutation::{MutationOperator, UniformPerturbation};
///
/// let mutation = UniformPerturbation::new(-0.1, 0.1);
/// let mutated = mutation.apply(vec![1.0_f64, 2.0, 3.0]);
/// for (before, after) in [1.0_f64, 2.0, 3.0].iter().zip(&mutated) {
///     assert!((after - before).abs() <= 0.1);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UniformPerturbation<N> {
    lower: N,
    upper: N,
}

impl<N: Copy> UniformPerturbation<N> {
    /// Creates a perturbation with the given bounds.
    pub fn new(lower: N, upper: N) -> Self {
        Self { lower, upper }
    }
}

impl<C, N> MutationOperator<C> for UniformPerturbation<N>
where
    C: Sequence<Element = N> + Send + Sync,
    N: UniformDraw + Add<Output = N> + Send + Sync,
{
    fn apply(&self, chromosome: C) -> C {
        let mut mutated = C::with_capacity(chromosome.len());
        for index in 0..chromosome.len() {
            mutated.push(chromosome.element(index) + N::draw_between(self.lower, self.upper));
        }
        mutated
    }
}
