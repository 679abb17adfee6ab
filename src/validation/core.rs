//! The `Validation` type and its single-channel operations
//!
//! `Validation<T, E>` looks like `Result<T, E>`, but it is meant to be *combined* rather
//! than chained: independent checks each produce a validation, and [`Validation::ap`]
//! (driven by the combination chain) merges them so that every failure is kept.
//!
//! # Examples
//!
//! ```
//! use accrue::Validation;
//!
//! let ok = Validation::<_, &str>::success(42);
//! let bad = Validation::<i32, _>::failure("must be positive");
//!
//! assert!(ok.is_success());
//! assert_eq!(bad.get_error(), Ok(&"must be positive"));
//! ```
//!
//! ## Collecting every error
//!
//! ```
//! use accrue::{NonEmptyVec, Validation};
//!
//! let name = Validation::<&str, _>::failure("name is empty");
//! let age = Validation::<u8, _>::failure("age is missing");
//!
//! let person = name.combine(age).apply(|name, age| (name, age));
//! assert_eq!(
//!     person,
//!     Validation::Failure(NonEmptyVec::new("name is empty", vec!["age is missing"]))
//! );
//! ```

use std::fmt;

use super::chain::Chain2;
use crate::{AccessError, Either, NonEmptyVec, Semigroup};

/// Either a successful value or an error, combined without short-circuiting
///
/// Type parameters follow `Result`: `T` is the success type, `E` the error type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Validation<T, E> {
    /// The check passed
    Success(T),
    /// The check failed
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<i32, String>::success(42);
    /// assert!(v.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("error");
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the success value
    ///
    /// Returns [`AccessError::EmptyValue`] on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{AccessError, Validation};
    ///
    /// assert_eq!(Validation::<_, ()>::success(1).get(), Ok(&1));
    /// assert_eq!(Validation::<i32, _>::failure(()).get(), Err(AccessError::EmptyValue));
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&T, AccessError> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(_) => Err(AccessError::EmptyValue),
        }
    }

    /// Borrow the error
    ///
    /// Returns [`AccessError::IllegalState`] on a `Success`.
    #[inline]
    pub fn get_error(&self) -> Result<&E, AccessError> {
        match self {
            Validation::Success(_) => Err(AccessError::IllegalState),
            Validation::Failure(error) => Ok(error),
        }
    }

    /// Take the success value, failing the same way as [`get`](Self::get)
    #[inline]
    pub fn into_value(self) -> Result<T, AccessError> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(_) => Err(AccessError::EmptyValue),
        }
    }

    /// Take the error, failing the same way as [`get_error`](Self::get_error)
    #[inline]
    pub fn into_error(self) -> Result<E, AccessError> {
        match self {
            Validation::Success(_) => Err(AccessError::IllegalState),
            Validation::Failure(error) => Ok(error),
        }
    }

    /// Borrow both channels
    #[inline]
    pub fn as_ref(&self) -> Validation<&T, &E> {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<i32, _>::failure("error");
    /// assert_eq!(v.map_err(str::len), Validation::Failure(5));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Transform whichever channel is populated
    ///
    /// Exactly one of the two functions runs.
    #[inline]
    pub fn bimap<E2, U, F, G>(self, on_failure: F, on_success: G) -> Validation<U, E2>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(on_success(value)),
            Validation::Failure(error) => Validation::Failure(on_failure(error)),
        }
    }

    /// Exchange the channels: successes become failures and vice versa
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<i32, &str>::success(1);
    /// assert_eq!(v.swap(), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Validation<E, T> {
        match self {
            Validation::Success(value) => Validation::Failure(value),
            Validation::Failure(error) => Validation::Success(error),
        }
    }

    /// Eliminate the validation into a single value
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let ok = Validation::<i32, &str>::success(5);
    /// assert_eq!(ok.fold(|e| e.len() as i32, |x| x * 2), 10);
    ///
    /// let bad = Validation::<i32, &str>::failure("x");
    /// assert_eq!(bad.fold(|e| e.len() as i32, |x| x * 2), 1);
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_failure: F, on_success: G) -> U
    where
        F: FnOnce(E) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => on_success(value),
            Validation::Failure(error) => on_failure(error),
        }
    }

    /// Chain a dependent validation
    ///
    /// The continuation only runs on `Success` and must itself produce a validation.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Keep a success only when `predicate` holds
    ///
    /// Failures are kept as they are. A success that does not satisfy `predicate` gives
    /// `None`, because there is no error to put in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<i32, &str>::success(3);
    /// assert_eq!(v.filter(|x| *x > 1), Some(Validation::Success(3)));
    /// assert_eq!(v.filter(|x| *x > 5), None);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        if let Validation::Success(value) = &self {
            if !predicate(value) {
                return None;
            }
        }
        Some(self)
    }

    /// Look at the success value without consuming it
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Validation::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Iterate over the success value, if any
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().ok().into_iter()
    }

    /// Create a validation from a `Result`
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert into a `Result`
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Create a validation from an [`Either`]: `Right` is a success, `Left` a failure
    #[inline]
    pub fn from_either(either: Either<E, T>) -> Self {
        either.into_validation()
    }

    /// Convert into an [`Either`] with the success on the right
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{Either, Validation};
    ///
    /// let v = Validation::<i32, &str>::failure("bad");
    /// assert_eq!(v.into_either(), Either::left("bad"));
    /// ```
    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Validation::Success(value) => Either::Right(value),
            Validation::Failure(error) => Either::Left(error),
        }
    }

    /// Feed this validation's value into a validated function
    ///
    /// This is where errors accumulate. `function` carries the errors gathered so far:
    ///
    /// - both succeed: the function is applied to the value;
    /// - only `function` failed: its errors pass through unchanged;
    /// - only `self` failed: its error starts a new sequence;
    /// - both failed: `self`'s error is appended after the existing ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{NonEmptyVec, Validation};
    ///
    /// let add_one = Validation::success(|x: i32| x + 1);
    /// assert_eq!(Validation::<_, &str>::success(1).ap(add_one), Validation::Success(2));
    ///
    /// let failed = Validation::<fn(i32) -> i32, _>::failure(NonEmptyVec::singleton("e1"));
    /// let result = Validation::<i32, _>::failure("e2").ap(failed);
    /// assert_eq!(result, Validation::Failure(NonEmptyVec::new("e1", vec!["e2"])));
    /// ```
    pub fn ap<U, F>(self, function: Validation<F, NonEmptyVec<E>>) -> Validation<U, NonEmptyVec<E>>
    where
        F: FnOnce(T) -> U,
    {
        match (self, function) {
            (Validation::Success(value), Validation::Success(f)) => Validation::Success(f(value)),
            (Validation::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
            (Validation::Failure(error), Validation::Success(_)) => {
                Validation::Failure(NonEmptyVec::singleton(error))
            }
            (Validation::Failure(error), Validation::Failure(errors)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(collected = errors.len() + 1, "appending validation error");
                Validation::Failure(errors.combine(NonEmptyVec::singleton(error)))
            }
        }
    }

    /// Start a combination chain with `other` as the second validation
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let total = Validation::<_, &str>::success(2)
    ///     .combine(Validation::success(3))
    ///     .apply(|a, b| a + b);
    /// assert_eq!(total.get(), Ok(&5));
    /// ```
    pub fn combine<U>(self, other: Validation<U, E>) -> Chain2<E, T, U> {
        Chain2::new(self, other)
    }

    /// Collapse a lone validation the way a chain would
    ///
    /// The error, if any, becomes a one-element sequence so the result has the same shape
    /// as [`Chain2::apply`] and friends.
    pub fn apply<R, F>(self, f: F) -> Validation<R, NonEmptyVec<E>>
    where
        F: FnOnce(T) -> R,
    {
        let result = self.ap(Validation::success(f));
        #[cfg(feature = "tracing")]
        super::chain::trace_collapse(1, &result);
        result
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two validations whose errors are already a [`Semigroup`]
    ///
    /// Unlike [`combine`](Self::combine), the error type is kept: two failures are merged
    /// with `Semigroup::combine`, left first.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["error1"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["error2"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validation<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Success(value) => write!(f, "Success({})", value),
            Validation::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<T, E> From<Validation<T, E>> for Result<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_result()
    }
}

impl<T, E> From<Either<E, T>> for Validation<T, E> {
    fn from(either: Either<E, T>) -> Self {
        Validation::from_either(either)
    }
}

impl<T, E> From<Validation<T, E>> for Either<E, T> {
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_either()
    }
}

impl<T, E> IntoIterator for Validation<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Validation<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn validation() -> impl Strategy<Value = Validation<i32, String>> {
        prop_oneof![
            any::<i32>().prop_map(Validation::<i32, String>::success),
            ".{1,8}".prop_map(Validation::<i32, String>::failure),
        ]
    }

    proptest! {
        #[test]
        fn prop_map_identity(v in validation()) {
            prop_assert_eq!(v.clone().map(|x| x), v);
        }

        #[test]
        fn prop_swap_involution(v in validation()) {
            prop_assert_eq!(v.clone().swap().swap(), v);
        }

        #[test]
        fn prop_bimap_matches_map_then_map_err(v in validation()) {
            let f = |x: i32| x.wrapping_mul(3);
            let g = |e: String| e.len();
            prop_assert_eq!(v.clone().bimap(g, f), v.map(f).map_err(g));
        }

        #[test]
        fn prop_either_roundtrip(v in validation()) {
            prop_assert_eq!(Validation::from_either(v.clone().into_either()), v);
        }

        #[test]
        fn prop_fold_agrees_with_variant(v in validation()) {
            let is_success = v.is_success();
            prop_assert_eq!(v.fold(|_| false, |_| true), is_success);
        }
    }
}
