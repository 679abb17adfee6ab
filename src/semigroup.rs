//! Associative combination of error collections
//!
//! Accumulating errors means appending one collection of errors to another. The
//! `Semigroup` trait names that operation so the accumulation code does not care whether
//! errors live in a `Vec`, a `String` or a [`NonEmptyVec`](crate::NonEmptyVec).
//!
//! Implementations must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use accrue::Semigroup;
//!
//! let errors = vec!["name is empty"].combine(vec!["age is negative"]);
//! assert_eq!(errors, vec!["name is empty", "age is negative"]);
//!
//! let report = "name is empty; ".to_string().combine("age is negative".to_string());
//! assert_eq!(report, "name is empty; age is negative");
//! ```

/// A type whose values can be appended to one another associatively
///
/// `combine` consumes both operands; `self` always comes first in the result.
pub trait Semigroup: Sized {
    /// Append `other` after `self`
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_keeps_left_first() {
        let errors = vec!["e1", "e2"].combine(vec!["e3"]);
        assert_eq!(errors, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_vec_with_empty_side() {
        let left: Vec<&str> = vec![];
        assert_eq!(left.combine(vec!["e1"]), vec!["e1"]);
        assert_eq!(vec!["e1"].combine(vec![]), vec!["e1"]);
    }

    #[test]
    fn test_string_concatenates() {
        let s = "bad ".to_string().combine("input".to_string());
        assert_eq!(s, "bad input");
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1];
        let b = vec![2, 3];
        let c = vec![4];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }
}
