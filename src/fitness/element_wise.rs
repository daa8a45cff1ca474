use crate::chromosome::Sequence;
use crate::fitness::FitnessOperator;

/// Scores a chromosome by positional agreement with a known solution.
///
/// For every index below the shorter of the two lengths, a matching element
/// adds `match_score`. The absolute length difference is then subtracted, so
/// a chromosome cannot profit from being longer or shorter than the
/// solution.
///
/// A chromosome identical to the solution scores `solution.len() *
/// match_score`; an empty chromosome scores `-solution.len()`.
///
/// # Examples
///
/// ```rust
/// use evosolve::fitness::{ElementWiseComparison, FitnessOperator};
///
/// let fitness = ElementWiseComparison::new(vec![1.0, 2.0, 4.0], 1.0);
/// // two positional matches, one length mismatch
/// assert_eq!(fitness.evaluate(&vec![1.0, 2.0, 3.0, 4.0]), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ElementWiseComparison<C> {
    solution: C,
    match_score: f64,
}

impl<C: Sequence> ElementWiseComparison<C> {
    /// Creates a comparison against `solution`, awarding `match_score` per
    /// positional match.
    pub fn new(solution: C, match_score: f64) -> Self {
        Self {
            solution,
            match_score,
        }
    }
}

impl<C> FitnessOperator<C> for ElementWiseComparison<C>
where
    C: Sequence + Send + Sync,
    C::Element: Send + Sync,
{
    fn evaluate(&self, chromosome: &C) -> f64 {
        let solution_len = self.solution.len();
        let value_len = chromosome.len();

        let mut score = 0.0;
        for index in 0..solution_len.min(value_len) {
            if chromosome.element(index) == self.solution.element(index) {
                score += self.match_score;
            }
        }

        score - solution_len.abs_diff(value_len) as f64
    }
}
