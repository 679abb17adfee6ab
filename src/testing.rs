//! Test helpers for code that produces validations
//!
//! Assertion macros that print the unexpected channel on failure, and (with the
//! `proptest` feature) `Arbitrary` implementations for [`Validation`] and
//! [`NonEmptyVec`](crate::NonEmptyVec).
//!
//! # Examples
//!
//! ```rust
//! use accrue::{assert_errors, assert_failure, assert_success, Validation};
//!
//! assert_success!(Validation::<_, &str>::success(42));
//! assert_failure!(Validation::<i32, _>::failure("error"));
//!
//! let collected = Validation::<i32, _>::failure("e1")
//!     .combine(Validation::<i32, _>::failure("e2"))
//!     .apply(|a, b| a + b);
//! assert_errors!(collected, ["e1", "e2"]);
//! ```

#[cfg(any(feature = "proptest", test))]
use crate::Validation;

/// Assert that a validation succeeded.
///
/// Panics with the error payload if it is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation failed.
///
/// Panics with the success value if it is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation failed with exactly these errors, in this order.
///
/// Works with any iterable error payload, so both `Vec<E>` and
/// [`NonEmptyVec<E>`](crate::NonEmptyVec) compare against a plain list.
///
/// ```rust
/// use accrue::{assert_errors, NonEmptyVec, Validation};
///
/// let v = Validation::<i32, _>::failure(NonEmptyVec::new("a", vec!["b"]));
/// assert_errors!(v, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validation:expr, [$($expected:expr),+ $(,)?]) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let actual: ::std::vec::Vec<_> = ::std::iter::IntoIterator::into_iter(errors).collect();
                assert_eq!(actual, ::std::vec![$($expected),+]);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    [$($expected),+], v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use super::Validation;
    use crate::NonEmptyVec;

    impl<T, E> Arbitrary for Validation<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validation::<T, E>::success),
                any_with::<E>(e_params).prop_map(Validation::<T, E>::failure),
            ]
            .boxed()
        }
    }

    impl<T> Arbitrary for NonEmptyVec<T>
    where
        T: Arbitrary + 'static,
        T::Parameters: Clone,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            (
                any_with::<T>(args.clone()),
                prop::collection::vec(any_with::<T>(args), 0..8),
            )
                .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NonEmptyVec;

    #[test]
    fn assert_success_macro() {
        assert_success!(Validation::<_, Vec<String>>::success(42));
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(Validation::<i32, _>::failure(vec!["error".to_string()]));
    }

    #[test]
    fn assert_errors_on_vec() {
        let v = Validation::<i32, _>::failure(vec!["error1", "error2"]);
        assert_errors!(v, ["error1", "error2"]);
    }

    #[test]
    fn assert_errors_on_collapsed_chain() {
        let v = Validation::<i32, _>::failure("e1")
            .combine(Validation::<i32, _>::success(2))
            .combine(Validation::<i32, _>::failure("e3"))
            .apply(|a, b, c| a + b + c);
        assert_errors!(v, ["e1", "e3"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Validation::<i32, _>::failure("error"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Validation::<_, &str>::success(42));
    }

    #[test]
    #[should_panic(expected = "Expected Failure with errors")]
    fn assert_errors_panics_on_success() {
        assert_errors!(Validation::<_, Vec<&str>>::success(42), ["error"]);
    }

    #[test]
    #[should_panic]
    fn assert_errors_panics_on_wrong_order() {
        let v = Validation::<i32, _>::failure(NonEmptyVec::new("e2", vec!["e1"]));
        assert_errors!(v, ["e1", "e2"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_validation_is_well_formed(
                v in any::<Validation<i32, NonEmptyVec<String>>>()
            ) {
                match &v {
                    Validation::Success(_) => prop_assert!(v.is_success()),
                    Validation::Failure(errors) => prop_assert!(errors.len() >= 1),
                }
            }
        }
    }
}
