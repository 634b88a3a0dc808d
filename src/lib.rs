//! # monadish
//!
//! Small monadic building blocks for chainable computations:
//!
//! - **Maybe monoid**: an optional-value container that lets a chain of
//!   computations short-circuit once an intermediate value is absent, with
//!   one notion of "absent" covering both reference-style absence
//!   (`Option::None`) and value-style absence (a type's zero value).
//! - **Continuation monad**: a computation expressed as a function of its
//!   consumer (`(A -> R) -> R`) rather than a returned value, enabling
//!   staged composition and tail-chaining.
//!
//! ## Feature Flags
//!
//! - `maybe`: the `MaybeMonoid` container, the `Absence` trait and the
//!   optional-value combinators
//! - `control`: the `Continuation` type and function-composition helpers
//!
//! Both are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use monadish::prelude::*;
//!
//! let greeting = MaybeMonoid::unit(String::from("hello"))
//!     .if_matches(|text| !text.is_empty())
//!     .with(|text| text.to_uppercase())
//!     .default_or(String::from("<silence>"));
//! assert_eq!(greeting, "HELLO");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadish::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "maybe")]
    pub use crate::maybe::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "control")]
pub mod control;
