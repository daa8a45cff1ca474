use crate::fitness::FitnessOperator;
use crate::rng::ThreadLocalRng;
use crate::selection::SelectionOperator;

/// Fitness-proportional (roulette wheel) selection.
///
/// Two independent thresholds are drawn from `U(0,1) * total_fitness` and a
/// single pass over the population accumulates fitness until each threshold
/// is crossed; the crossing elements become the parents. One element may
/// cross both thresholds and be returned twice. If floating-point error
/// leaves a threshold uncrossed, the last element is used.
///
/// When the fitness total is not positive the wheel is degenerate; the
/// operator then returns the first two elements of the view and never
/// divides by the total. Callers whose fitness can go negative may prefer
/// [`RankSelection`](crate::selection::RankSelection) or shift their scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Runs the threshold walk over `population` with an arbitrary scoring
    /// closure. Shared with rank selection, which substitutes positional
    /// scores for real fitness.
    pub(crate) fn spin<C, F>(population: &[C], fitness: F) -> (C, C)
    where
        C: Clone + Default,
        F: Fn(&C) -> f64,
    {
        let total: f64 = population.iter().map(&fitness).sum();

        if total <= 0.0 {
            let first = population.first().cloned().unwrap_or_default();
            let second = population.get(1).cloned().unwrap_or_else(|| first.clone());
            return (first, second);
        }

        let threshold1 = ThreadLocalRng::uniform_real(0.0, 1.0) * total;
        let threshold2 = ThreadLocalRng::uniform_real(0.0, 1.0) * total;

        let mut first: Option<C> = None;
        let mut second: Option<C> = None;
        let mut accumulator = 0.0;

        for value in population {
            accumulator += fitness(value);
            if first.is_none() && accumulator >= threshold1 {
                first = Some(value.clone());
            }
            if second.is_none() && accumulator >= threshold2 {
                second = Some(value.clone());
            }
            if first.is_some() && second.is_some() {
                break;
            }
        }

        let fallback = || population.last().cloned().unwrap_or_default();
        (
            first.unwrap_or_else(fallback),
            second.unwrap_or_else(fallback),
        )
    }
}

impl<C> SelectionOperator<C> for RouletteSelection
where
    C: Clone + Default + Send + Sync,
{
    fn select_parents<F>(&self, population: &[C], fitness: &F) -> (C, C)
    where
        F: FitnessOperator<C>,
    {
        Self::spin(population, |value| fitness.evaluate(value))
    }
}
