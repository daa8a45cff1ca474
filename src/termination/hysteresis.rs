use std::cell::Cell;

use crate::termination::TerminationOperator;

/// Terminates when fitness stops changing appreciably.
///
/// Each call compares the incoming fitness against the last significant
/// value. A change larger than `threshold` resets the stagnation counter and
/// records the new fitness; anything else increments the counter. Once the
/// counter reaches `limit` consecutive stagnant generations, the search
/// stops.
///
/// Cloning produces an operator with fresh tracking state.
#[derive(Debug)]
pub struct FitnessHysteresis {
    threshold: f64,
    limit: u64,
    previous: Cell<f64>,
    stalled: Cell<u64>,
}

impl FitnessHysteresis {
    /// Terminate after `limit` generations in which fitness changed by no
    /// more than `threshold`.
    pub fn new(threshold: f64, limit: u64) -> Self {
        Self {
            threshold,
            limit,
            previous: Cell::new(0.0),
            stalled: Cell::new(0),
        }
    }
}

impl Clone for FitnessHysteresis {
    fn clone(&self) -> Self {
        Self::new(self.threshold, self.limit)
    }
}

impl<C> TerminationOperator<C> for FitnessHysteresis {
    fn should_terminate(&self, _best: &C, fitness: f64) -> bool {
        if (fitness - self.previous.get()).abs() > self.threshold {
            self.previous.set(fitness);
            self.stalled.set(0);
        } else {
            self.stalled.set(self.stalled.get() + 1);
        }

        self.stalled.get() >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagnation_triggers_termination() {
        let termination = FitnessHysteresis::new(0.5, 3);

        // significant jump resets the count
        assert!(!termination.should_terminate(&(), 10.0));
        // three stagnant generations in a row
        assert!(!termination.should_terminate(&(), 10.1));
        assert!(!termination.should_terminate(&(), 10.2));
        assert!(termination.should_terminate(&(), 10.3));
    }

    #[test]
    fn test_improvement_resets_the_counter() {
        let termination = FitnessHysteresis::new(0.5, 2);

        assert!(!termination.should_terminate(&(), 10.0));
        assert!(!termination.should_terminate(&(), 10.1));
        // big improvement, counter starts over
        assert!(!termination.should_terminate(&(), 20.0));
        assert!(!termination.should_terminate(&(), 20.1));
        assert!(termination.should_terminate(&(), 20.2));
    }

    #[test]
    fn test_clone_starts_fresh() {
        let termination = FitnessHysteresis::new(0.5, 1);
        assert!(termination.should_terminate(&(), 0.0));

        let fresh = termination.clone();
        assert!(!fresh.should_terminate(&(), 100.0));
    }
}
