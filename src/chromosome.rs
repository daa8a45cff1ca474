//! # Sequence Chromosomes
//!
//! The engine treats chromosomes as opaque values: cloneable, comparable for
//! equality and default-constructible. The built-in sequence operators
//! (splice crossover, value replacement, value insertion, numeric
//! perturbation, accumulation and element-wise fitness) additionally need a
//! handful of semantic operations — length, indexed access and element
//! append. The [`Sequence`] trait captures exactly those operations.
//!
//! Implementations are provided for `Vec<T>` and `String`, covering numeric
//! vectors and text chromosomes out of the box.
//!
//! ## Example
//!
//! ```rust
//! use evosolve::chromosome::Sequence;
//!
//! let mut word = String::from("demo");
//! assert_eq!(Sequence::len(&word), 4);
//! assert_eq!(word.element(1), 'e');
//! Sequence::push(&mut word, '!');
//! assert_eq!(word, "demo!");
//! ```

/// Semantic operations the sequence operators need from a chromosome.
///
/// Elements are passed by value, so `Element` must be cheap to clone.
/// Method names shadow the `Vec` equivalents where the semantics agree;
/// call them through the trait (`Sequence::len(&value)`) when the concrete
/// type has an inherent method of the same name, such as `String::len`.
pub trait Sequence: Clone + Default {
    /// The element type stored in the sequence.
    type Element: Clone + PartialEq;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// Panics when `index` is out of bounds, matching slice indexing.
    fn element(&self, index: usize) -> Self::Element;

    /// Overwrites the element at `index` with `value`.
    fn set(&mut self, index: usize, value: Self::Element);

    /// Inserts `value` at `index`, shifting later elements right.
    fn insert_at(&mut self, index: usize, value: Self::Element);

    /// Appends `value` at the end of the sequence.
    fn push(&mut self, value: Self::Element);

    /// Creates an empty sequence with room for `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;
}

impl<T> Sequence for Vec<T>
where
    T: Clone + PartialEq,
{
    type Element = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }
}

impl Sequence for String {
    type Element = char;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn element(&self, index: usize) -> char {
        match self.chars().nth(index) {
            Some(value) => value,
            None => panic!("character index {index} out of bounds"),
        }
    }

    fn set(&mut self, index: usize, value: char) {
        let (offset, current) = match self.char_indices().nth(index) {
            Some(entry) => entry,
            None => panic!("character index {index} out of bounds"),
        };
        self.replace_range(
            offset..offset + current.len_utf8(),
            value.encode_utf8(&mut [0; 4]),
        );
    }

    fn insert_at(&mut self, index: usize, value: char) {
        let offset = self
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.len());
        self.insert(offset, value);
    }

    fn push(&mut self, value: char) {
        String::push(self, value);
    }

    fn with_capacity(capacity: usize) -> Self {
        String::with_capacity(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sequence_operations() {
        let mut values = vec![1, 2, 3];
        assert_eq!(Sequence::len(&values), 3);
        assert_eq!(values.element(2), 3);

        values.set(0, 9);
        assert_eq!(values, vec![9, 2, 3]);

        values.insert_at(1, 7);
        assert_eq!(values, vec![9, 7, 2, 3]);

        Sequence::push(&mut values, 4);
        assert_eq!(values, vec![9, 7, 2, 3, 4]);
    }

    #[test]
    fn test_string_sequence_operations() {
        let mut word = String::from("case");
        assert_eq!(Sequence::len(&word), 4);
        assert_eq!(word.element(3), 'e');

        word.set(0, 'b');
        assert_eq!(word, "base");

        word.insert_at(4, 's');
        assert_eq!(word, "bases");
    }

    #[test]
    fn test_string_sequence_multibyte() {
        let mut word = String::from("naïve");
        assert_eq!(Sequence::len(&word), 5);
        assert_eq!(word.element(2), 'ï');

        word.set(2, 'i');
        assert_eq!(word, "naive");
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let values: Vec<i32> = Sequence::with_capacity(16);
        assert!(Sequence::is_empty(&values));
    }
}
