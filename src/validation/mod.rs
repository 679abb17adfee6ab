//! Error-accumulating validation
//!
//! This module provides:
//! - The core `Validation` type and its single-channel operations
//! - The combination chain (`Chain2` .. `Chain8`) that merges independent validations

pub mod chain;
pub mod core;

pub use self::chain::{
    combine, Chain2, Chain3, Chain4, Chain5, Chain6, Chain7, Chain8, IntoChain,
};
pub use self::core::*;
