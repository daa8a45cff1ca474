//! Two-point splice primitives shared by the crossover operators.

use crate::chromosome::Sequence;

/// Length of the child produced by [`cross`] with the given pivots.
///
/// Knowing the size up front lets the child reserve its full capacity before
/// any element is appended.
pub fn spliced_len<C>(_first: &C, second: &C, first_pivot: usize, second_pivot: usize) -> usize
where
    C: Sequence,
{
    first_pivot + (second.len() - second_pivot)
}

/// Splices two parents at the given pivots.
///
/// The child is the concatenation of `first[..first_pivot]` and
/// `second[second_pivot..]`. Pivots must satisfy `first_pivot <= first.len()`
/// and `second_pivot <= second.len()`.
pub fn cross<C>(first: &C, second: &C, first_pivot: usize, second_pivot: usize) -> C
where
    C: Sequence,
{
    let mut child = C::with_capacity(spliced_len(first, second, first_pivot, second_pivot));
    for index in 0..first_pivot {
        child.push(first.element(index));
    }
    for index in second_pivot..second.len() {
        child.push(second.element(index));
    }
    child
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_splices_both_halves() {
        let first = "aaaa".to_string();
        let second = "bbbbbb".to_string();

        let child1 = cross(&first, &second, 2, 4);
        let child2 = cross(&second, &first, 4, 2);

        assert_eq!(child1, "aabb");
        assert_eq!(child2, "bbbbaa");
    }

    #[test]
    fn test_spliced_len_matches_output() {
        let first = vec![1, 1, 1, 1];
        let second = vec![2, 2, 2, 2, 2, 2];

        let child = cross(&first, &second, 2, 4);
        assert_eq!(child.len(), spliced_len(&first, &second, 2, 4));
        assert_eq!(child, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_cross_boundary_pivots() {
        let first = vec![1, 2, 3];
        let second = vec![4, 5];

        // pivot 0 drops the first parent entirely
        assert_eq!(cross(&first, &second, 0, 0), vec![4, 5]);
        // pivots at the far ends copy the first parent only
        assert_eq!(cross(&first, &second, 3, 2), vec![1, 2, 3]);
    }
}
