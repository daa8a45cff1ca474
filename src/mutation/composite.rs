use crate::mutation::MutationOperator;

/// Chains mutation operators, applying them in the order they were added.
///
/// An empty composite is the identity.
///
/// # Examples
///
/// ```rust
/// use evosolve::mutation::{mutation_fn, CompositeMutation, MutationOperator};
///
/// let composite = CompositeMutation::new()
///     .then(mutation_fn(|text: String| text + "part1"))
///     .then(mutation_fn(|text: String| text + "part2"));
///
/// assert_eq!(composite.apply("test".to_string()), "testpart1part2");
/// ```
pub struct CompositeMutation<C> {
    mutations: Vec<Box<dyn MutationOperator<C>>>,
}

impl<C> CompositeMutation<C> {
    /// Creates an empty composite.
    pub fn new() -> Self {
        Self {
            mutations: Vec::new(),
        }
    }

    /// Appends a mutation operator to the end of the chain.
    pub fn then<M>(mut self, mutation: M) -> Self
    where
        M: MutationOperator<C> + 'static,
    {
        self.mutations.push(Box::new(mutation));
        self
    }
}

impl<C> Default for CompositeMutation<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Send + Sync> MutationOperator<C> for CompositeMutation<C> {
    fn apply(&self, chromosome: C) -> C {
        self.mutations
            .iter()
            .fold(chromosome, |current, mutation| mutation.apply(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::mutation_fn;

    #[test]
    fn test_composite_applies_in_order() {
        let composite = CompositeMutation::new()
            .then(mutation_fn(|text: String| text + "part1"))
            .then(mutation_fn(|text: String| text + "part2"));

        assert_eq!(composite.apply("test".to_string()), "testpart1part2");
    }

    #[test]
    fn test_empty_composite_is_identity() {
        let composite: CompositeMutation<Vec<i32>> = CompositeMutation::new();
        assert_eq!(composite.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_composite_equals_manual_nesting() {
        let double = mutation_fn(|values: Vec<i32>| values.iter().map(|v| v * 2).collect());
        let shift = mutation_fn(|values: Vec<i32>| values.iter().map(|v| v + 1).collect());

        let composite = CompositeMutation::new()
            .then(mutation_fn(|values: Vec<i32>| {
                values.iter().map(|v| v * 2).collect()
            }))
            .then(mutation_fn(|values: Vec<i32>| {
                values.iter().map(|v| v + 1).collect()
            }));

        let input = vec![1, 2, 3];
        assert_eq!(
            composite.apply(input.clone()),
            shift.apply(double.apply(input))
        );
    }
}
