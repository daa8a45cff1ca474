use crate::fitness::FitnessOperator;
use crate::selection::{RouletteSelection, SelectionOperator};

/// Rank-proportional selection.
///
/// The population view is reversed and each element is given a virtual
/// fitness equal to its position in the reversed view plus one; the roulette
/// walk then runs over the reversed view with those scores. Selection
/// pressure therefore depends only on ordering, never on fitness magnitude,
/// which keeps it well-defined for negative or zero scores.
///
/// The view is expected to be sorted by fitness; the driver hands selection
/// operators a best-first view, so reversing it puts the best element at the
/// largest virtual fitness.
///
/// Duplicate chromosomes share the rank of their first occurrence in the
/// reversed view.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSelection;

impl<C> SelectionOperator<C> for RankSelection
where
    C: Clone + Default + PartialEq + Send + Sync,
{
    fn select_parents<F>(&self, population: &[C], _fitness: &F) -> (C, C)
    where
        F: FitnessOperator<C>,
    {
        let reversed: Vec<C> = population.iter().rev().cloned().collect();

        let rank = |value: &C| -> f64 {
            match reversed.iter().position(|member| member == value) {
                Some(position) => (position + 1) as f64,
                None => 0.0,
            }
        };

        RouletteSelection::spin(&reversed, rank)
    }
}
