//! The accumulated error sequence
//!
//! A collapsed combination chain that failed always failed for at least one reason, so
//! its errors are held in a `NonEmptyVec`: an ordered, appendable sequence that cannot be
//! empty. Callers read the first error without an `Option` and never see a `Failure`
//! with nothing inside it.
//!
//! # Examples
//!
//! ```
//! use accrue::NonEmptyVec;
//!
//! let mut errors = NonEmptyVec::singleton("name is empty");
//! errors.push("age is negative");
//!
//! assert_eq!(errors.head(), &"name is empty");
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.to_string(), "name is empty, age is negative");
//! ```

use std::fmt;

use crate::Semigroup;

/// An ordered sequence holding at least one element
///
/// Elements keep insertion order. The first element is stored apart from the rest, which
/// is what makes emptiness unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Build a sequence from its first element and the elements after it.
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let errors = NonEmptyVec::new("e1", vec!["e2", "e3"]);
    /// assert_eq!(errors.len(), 3);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// A sequence with exactly one element.
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Take ownership of a `Vec`, or `None` if it is empty.
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::<i32>::from_vec(vec![]).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The most recently appended element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements; never zero.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Apply `f` to every element, keeping order.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(f).collect())
    }

    /// Flatten into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(errors: NonEmptyVec<T>) -> Self {
        errors.into_vec()
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.head,
            n => &self.tail[n - 1],
        }
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for item in &self.tail {
            write!(f, ", {}", item)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::NonEmptyVec;

    impl<T: Serialize> Serialize for NonEmptyVec<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let items = Vec::<T>::deserialize(deserializer)?;
            NonEmptyVec::from_vec(items)
                .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let errors = NonEmptyVec::singleton("e1");
        assert_eq!(errors.head(), &"e1");
        assert_eq!(errors.last(), &"e1");
        assert!(errors.tail().is_empty());
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_from_vec_keeps_order() {
        let errors = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(errors.head(), &1);
        assert_eq!(errors.tail(), &[2, 3]);
        assert_eq!(errors.last(), &3);
    }

    #[test]
    fn test_from_empty_vec() {
        assert_eq!(NonEmptyVec::<u8>::from_vec(Vec::new()), None);
    }

    #[test]
    fn test_push_appends_last() {
        let mut errors = NonEmptyVec::singleton("e1");
        errors.push("e2");
        errors.push("e3");
        assert_eq!(errors.into_vec(), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_combine_appends_other() {
        let left = NonEmptyVec::new(1, vec![2]);
        let right = NonEmptyVec::new(3, vec![4]);
        assert_eq!(left.combine(right).into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_map() {
        let lengths = NonEmptyVec::new("a", vec!["bcd"]).map(str::len);
        assert_eq!(lengths, NonEmptyVec::new(1, vec![3]));
    }

    #[test]
    fn test_iteration() {
        let errors = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(errors.iter().sum::<i32>(), 6);
        assert_eq!(errors.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_index() {
        let errors = NonEmptyVec::new('a', vec!['b', 'c']);
        assert_eq!(errors[0], 'a');
        assert_eq!(errors[2], 'c');
    }

    #[test]
    #[should_panic]
    fn test_index_past_end() {
        let errors = NonEmptyVec::singleton('a');
        let _ = errors[1];
    }

    #[test]
    fn test_display() {
        let errors = NonEmptyVec::new("name is empty", vec!["age is negative"]);
        assert_eq!(errors.to_string(), "name is empty, age is negative");
        assert_eq!(NonEmptyVec::singleton(7).to_string(), "7");
    }

    #[test]
    fn test_into_vec_conversion() {
        let vec: Vec<_> = NonEmptyVec::new(1, vec![2]).into();
        assert_eq!(vec, vec![1, 2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_sequence() {
        let errors = NonEmptyVec::new("e1".to_string(), vec!["e2".to_string()]);
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"["e1","e2"]"#);

        let back: NonEmptyVec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_empty() {
        let result: Result<NonEmptyVec<String>, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
