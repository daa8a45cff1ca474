//! # Termination Operators
//!
//! A termination operator decides, once per generation, whether the search
//! is done. It receives the best chromosome and its fitness after the
//! iteration callback has run.
//!
//! Built-in operators:
//!
//! - [`FitnessTermination`]: stop once fitness reaches a target.
//! - [`GenerationsTermination`]: stop on exactly the n-th call. The default
//!   in the parameter bundle, with a limit of 1000.
//! - [`FitnessHysteresis`]: stop when fitness has stagnated for a number of
//!   generations.
//!
//! The stateful operators keep their counters behind interior mutability so
//! the engine can keep the `(chromosome, fitness)` call signature. Cloning a
//! stateful operator yields one with fresh counters; since the solver
//! consumes its parameter bundle, reusing a bundle template across runs
//! always starts the countdowns over.
//!
//! Plain closures are adapted with [`termination_fn`].

pub mod fitness;
pub mod generations;
pub mod hysteresis;

pub use fitness::FitnessTermination;
pub use generations::GenerationsTermination;
pub use hysteresis::FitnessHysteresis;

/// Contract for termination operators.
///
/// Only the driver thread ever calls this, so implementations are free to
/// use non-thread-safe interior mutability such as [`std::cell::Cell`].
pub trait TerminationOperator<C> {
    /// Returns `true` when the search should stop.
    fn should_terminate(&self, best: &C, fitness: f64) -> bool;
}

/// A termination operator backed by a plain closure. Built by
/// [`termination_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TerminationFn<F>(F);

/// Adapts a `Fn(&C, f64) -> bool` closure into a [`TerminationOperator`].
///
/// # Examples
///
/// ```rust
/// use evosolve::termination::{termination_fn, TerminationOperator};
///
/// let good_enough = termination_fn(|_best: &Vec<f64>, fitness| fitness >= 10.0);
/// assert!(good_enough.should_terminate(&vec![], 12.0));
/// ```
pub fn termination_fn<C, F>(decide: F) -> TerminationFn<F>
where
    F: Fn(&C, f64) -> bool,
{
    TerminationFn(decide)
}

impl<C, F> TerminationOperator<C> for TerminationFn<F>
where
    F: Fn(&C, f64) -> bool,
{
    fn should_terminate(&self, best: &C, fitness: f64) -> bool {
        (self.0)(best, fitness)
    }
}
