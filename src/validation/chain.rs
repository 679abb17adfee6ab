//! Fixed-arity combination of independent validations
//!
//! A chain collects up to eight validations that share an error type but not a value
//! type. Nothing is evaluated while the chain grows; [`apply`](Chain2::apply) hands every
//! value to an N-ary function when all validations succeeded, and otherwise returns every
//! error in the order the validations were combined.
//!
//! ```text
//! Validation --combine--> Chain2 --combine--> Chain3 ... --combine--> Chain8
//!     |                     |                   |                       |
//!   apply                 apply               apply                   apply
//!     v                     v                   v                       v
//!                 Validation<R, NonEmptyVec<E>>
//! ```
//!
//! # Examples
//!
//! ```
//! use accrue::{combine, NonEmptyVec, Validation};
//!
//! let person = combine((
//!     Validation::<_, &str>::success("John"),
//!     Validation::success(5),
//!     Validation::success("123 Fake St"),
//! ))
//! .apply(|name, age, address| format!("{}:{}:{}", name, age, address));
//! assert_eq!(person, Validation::Success("John:5:123 Fake St".to_string()));
//!
//! let person = combine((
//!     Validation::<_, &str>::success("John"),
//!     Validation::<u32, _>::failure("age must be positive"),
//!     Validation::success("123 Fake St"),
//! ))
//! .apply(|name, age, address| format!("{}:{}:{}", name, age, address));
//! assert_eq!(
//!     person,
//!     Validation::Failure(NonEmptyVec::singleton("age must be positive"))
//! );
//! ```

use crate::{NonEmptyVec, Validation};

// Builds `move |a: A| move |b: B| ... f(a, b, ...)` so a k-ary function can be fed one
// argument per `ap`.
macro_rules! curry {
    ($f:ident; [$($done:ident)*]; $v:ident: $T:ident) => {
        move |$v: $T| $f($($done,)* $v)
    };
    ($f:ident; [$($done:ident)*]; $v:ident: $T:ident, $($rest:tt)+) => {
        move |$v: $T| curry!($f; [$($done)* $v]; $($rest)+)
    };
}

macro_rules! chain_stage {
    (@stage $name:ident, $arity:literal, { $($v:ident: $T:ident),+ }) => {
        #[doc = concat!("A combination of ", stringify!($arity), " validations awaiting `apply`")]
        #[must_use = "combined validations are only evaluated by `apply`"]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<E, $($T),+> {
            $($v: Validation<$T, E>,)+
        }

        impl<E, $($T),+> $name<E, $($T),+> {
            pub(crate) fn new($($v: Validation<$T, E>),+) -> Self {
                Self { $($v),+ }
            }

            /// Collapse the chain into a single validation
            ///
            /// If every validation succeeded, `f` receives the values in combination order.
            /// Otherwise the result holds every error, first combined first.
            pub fn apply<R, F>(self, f: F) -> Validation<R, NonEmptyVec<E>>
            where
                F: FnOnce($($T),+) -> R,
            {
                let Self { $($v),+ } = self;
                let acc = Validation::success(curry!(f; []; $($v: $T),+));
                $(let acc = $v.ap(acc);)+
                #[cfg(feature = "tracing")]
                trace_collapse($arity, &acc);
                acc
            }
        }

        impl<E, $($T),+> IntoChain for ($(Validation<$T, E>,)+) {
            type Chain = $name<E, $($T),+>;

            fn into_chain(self) -> Self::Chain {
                let ($($v,)+) = self;
                $name::new($($v),+)
            }
        }
    };

    ($name:ident, $arity:literal, { $($v:ident: $T:ident),+ } => $next:ident { $nv:ident: $NT:ident }) => {
        chain_stage!(@stage $name, $arity, { $($v: $T),+ });

        impl<E, $($T),+> $name<E, $($T),+> {
            /// Add one more validation to the chain
            pub fn combine<$NT>(self, $nv: Validation<$NT, E>) -> $next<E, $($T,)+ $NT> {
                let Self { $($v),+ } = self;
                $next::new($($v,)+ $nv)
            }
        }
    };

    ($name:ident, $arity:literal, { $($v:ident: $T:ident),+ }) => {
        chain_stage!(@stage $name, $arity, { $($v: $T),+ });
    };
}

/// Tuples of 2 to 8 validations that can start a combination chain
///
/// See [`combine`].
pub trait IntoChain {
    /// The chain stage matching the tuple's arity
    type Chain;

    /// Turn the tuple into a chain stage, keeping element order
    fn into_chain(self) -> Self::Chain;
}

/// Combine 2 to 8 validations given as a tuple
///
/// Equivalent to calling [`Validation::combine`] on the first element and then
/// `combine` on each stage for the rest.
///
/// # Examples
///
/// ```
/// use accrue::{combine, Validation};
///
/// let sum = combine((
///     Validation::<_, &str>::success(1),
///     Validation::success(2),
/// ))
/// .apply(|a, b| a + b);
/// assert_eq!(sum, Validation::Success(3));
/// ```
pub fn combine<C: IntoChain>(validations: C) -> C::Chain {
    validations.into_chain()
}

chain_stage!(Chain2, 2, { v1: T1, v2: T2 } => Chain3 { v3: T3 });
chain_stage!(Chain3, 3, { v1: T1, v2: T2, v3: T3 } => Chain4 { v4: T4 });
chain_stage!(Chain4, 4, { v1: T1, v2: T2, v3: T3, v4: T4 } => Chain5 { v5: T5 });
chain_stage!(Chain5, 5, { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5 } => Chain6 { v6: T6 });
chain_stage!(Chain6, 6, { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6 } => Chain7 { v7: T7 });
chain_stage!(Chain7, 7, { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7 } => Chain8 { v8: T8 });
chain_stage!(Chain8, 8, { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7, v8: T8 });

#[cfg(feature = "tracing")]
pub(crate) fn trace_collapse<R, E>(arity: usize, result: &Validation<R, NonEmptyVec<E>>) {
    match result {
        Validation::Success(_) => {
            tracing::trace!(arity, "combination collapsed into success");
        }
        Validation::Failure(errors) => {
            tracing::trace!(
                arity,
                errors = errors.len(),
                "combination collapsed into failure"
            );
        }
    }
}
