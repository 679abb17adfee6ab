//! A two-branch sum type without success/failure meaning
//!
//! `Either<L, R>` is the neutral counterpart of [`Validation`]. It is right-biased:
//! `map` touches the `Right` branch. A validation converts into an `Either` with its
//! success on the right and its failure on the left, and back again without changing
//! either payload.
//!
//! # Examples
//!
//! ```
//! use accrue::{Either, Validation};
//!
//! let parsed: Either<String, u16> = Either::right(8080);
//! let v: Validation<u16, String> = parsed.into_validation();
//! assert_eq!(v, Validation::Success(8080));
//!
//! let back: Either<String, u16> = v.into_either();
//! assert_eq!(back, Either::right(8080));
//! ```

use crate::Validation;

/// Either `Left(L)` or `Right(R)`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left branch
    Left(L),
    /// The right branch
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Build a `Left`.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Build a `Right`.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// `true` for `Left`.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// `true` for `Right`.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left payload, if any.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right payload, if any.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Transform the right payload.
    ///
    /// ```
    /// use accrue::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(21);
    /// assert_eq!(e.map(|x| x * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the left payload.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Collapse both branches into one type.
    ///
    /// ```
    /// use accrue::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert_eq!(e.fold(|n| n.to_string(), |s| s.to_string()), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Exchange the branches.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// `Right` becomes `Success`, `Left` becomes `Failure`.
    #[inline]
    pub fn into_validation(self) -> Validation<R, L> {
        match self {
            Either::Left(l) => Validation::Failure(l),
            Either::Right(r) => Validation::Success(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Either::<i32, &str>::left(1).is_left());
        assert!(!Either::<i32, &str>::left(1).is_right());
        assert!(Either::<i32, &str>::right("a").is_right());
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Either::<i32, &str>::left(1).into_left(), Some(1));
        assert_eq!(Either::<i32, &str>::left(1).into_right(), None);
        assert_eq!(Either::<i32, &str>::right("a").into_right(), Some("a"));
    }

    #[test]
    fn test_map_is_right_biased() {
        let left: Either<i32, i32> = Either::left(1);
        let right: Either<i32, i32> = Either::right(1);
        assert_eq!(left.map(|x| x + 1), Either::left(1));
        assert_eq!(right.map(|x| x + 1), Either::right(2));
        assert_eq!(left.map_left(|x| x + 1), Either::left(2));
    }

    #[test]
    fn test_swap() {
        let e: Either<i32, &str> = Either::left(42);
        assert_eq!(e.swap(), Either::right(42));
    }

    #[test]
    fn test_result_conversion() {
        let ok: Either<&str, i32> = Ok(5).into();
        assert_eq!(ok, Either::right(5));
        let err: Result<i32, &str> = Either::left("bad").into();
        assert_eq!(err, Err("bad"));
    }

    #[test]
    fn test_into_validation_keeps_payload() {
        let right: Either<&str, i32> = Either::right(42);
        let left: Either<&str, i32> = Either::left("error");
        assert_eq!(right.into_validation(), Validation::Success(42));
        assert_eq!(left.into_validation(), Validation::Failure("error"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_externally_tagged() {
        let e: Either<String, i32> = Either::right(3);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"Right":3}"#);
        assert_eq!(serde_json::from_str::<Either<String, i32>>(&json).unwrap(), e);
    }
}
