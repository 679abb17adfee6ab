//! # accrue
//!
//! Validation that keeps every error.
//!
//! `Result` stops at the first failure: once one check has failed, nothing after it is
//! looked at. When checks are independent (fields of a form, entries of a config file,
//! arguments of a request) that throws information away. `accrue` evaluates each check on
//! its own and then combines them, so a caller gets the complete list of problems in one
//! pass.
//!
//! ## Quick Example
//!
//! ```rust
//! use accrue::{NonEmptyVec, Validation};
//!
//! fn validate_name(name: &str) -> Validation<String, String> {
//!     if name.is_empty() {
//!         Validation::failure("name must not be empty".to_string())
//!     } else {
//!         Validation::success(name.to_string())
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validation<u8, String> {
//!     match u8::try_from(age) {
//!         Ok(age) => Validation::success(age),
//!         Err(_) => Validation::failure(format!("age {} is out of range", age)),
//!     }
//! }
//!
//! let person = validate_name("")
//!     .combine(validate_age(-3))
//!     .apply(|name, age| format!("{} ({})", name, age));
//!
//! assert_eq!(
//!     person,
//!     Validation::Failure(NonEmptyVec::new(
//!         "name must not be empty".to_string(),
//!         vec!["age -3 is out of range".to_string()],
//!     ))
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace!` events when errors are appended and when a chain collapses
//! - `serde`: `Serialize`/`Deserialize` for `Validation`, `Either` and `NonEmptyVec`
//! - `proptest`: `Arbitrary` for `Validation` and `NonEmptyVec`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod nonempty;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use either::Either;
pub use error::AccessError;
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use validation::{
    combine, Chain2, Chain3, Chain4, Chain5, Chain6, Chain7, Chain8, IntoChain, Validation,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::AccessError;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{combine, IntoChain, Validation};
}
