//! # Selection Operators
//!
//! Selection samples two parents from a read-only population view, biased
//! toward higher fitness. Either parent may equal the other; a single strong
//! individual can win both slots.
//!
//! Built-in operators:
//!
//! - [`RouletteSelection`]: fitness-proportional sampling. The default in
//!   the parameter bundle.
//! - [`RankSelection`]: sampling proportional to position in the reversed
//!   view rather than to fitness magnitude.

pub mod rank;
pub mod roulette;

pub use rank::RankSelection;
pub use roulette::RouletteSelection;

use crate::fitness::FitnessOperator;

/// Contract for selection operators.
///
/// The population view is a read-only snapshot shared with every concurrent
/// worker; implementations may consult the fitness operator as often as they
/// like but must not assume scores were precomputed.
pub trait SelectionOperator<C>: Send + Sync {
    /// Picks two parents from the view. Both are drawn from the view, and
    /// the same element may be returned twice.
    fn select_parents<F>(&self, population: &[C], fitness: &F) -> (C, C)
    where
        F: FitnessOperator<C>;
}
