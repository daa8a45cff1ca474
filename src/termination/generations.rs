use std::cell::Cell;

use crate::termination::TerminationOperator;

/// Terminates on exactly the n-th call.
///
/// The remaining-generation counter lives in a [`Cell`]; cloning produces an
/// operator with the counter reset to the full limit.
#[derive(Debug)]
pub struct GenerationsTermination {
    limit: u64,
    remaining: Cell<u64>,
}

impl GenerationsTermination {
    /// Terminate after `limit` generations.
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            remaining: Cell::new(limit),
        }
    }
}

impl Default for GenerationsTermination {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Clone for GenerationsTermination {
    fn clone(&self) -> Self {
        // a clone starts its countdown over
        Self::new(self.limit)
    }
}

impl<C> TerminationOperator<C> for GenerationsTermination {
    fn should_terminate(&self, _best: &C, _fitness: f64) -> bool {
        let remaining = self.remaining.get().saturating_sub(1);
        self.remaining.set(remaining);
        remaining == 0
    }
}
