//! Optional-value chaining: the Maybe monoid and its combinator algebra.
//!
//! This module provides:
//!
//! - [`Absence`]: per-type detection of the absent ("zero") representation,
//!   unifying reference-style and value-style absence behind one predicate
//! - [`MaybeMonoid`]: the optional-value container with the chaining
//!   combinators `with`, `returns`, `if_matches`, `default_or` and
//!   `select_many`
//! - [`MaybeExt`]: the same vocabulary directly on [`Option`]
//! - [`CastMaybe`]: safe downcasting into the container
//!
//! # Examples
//!
//! ```rust
//! use monadish::maybe::MaybeMonoid;
//!
//! let order_total = MaybeMonoid::unit(3_u32)
//!     .if_matches(|quantity| *quantity <= 10)
//!     .with(|quantity| quantity * 250)
//!     .default_or(0);
//! assert_eq!(order_total, 750);
//!
//! // Absence flows silently through the whole chain.
//! let rejected = MaybeMonoid::unit(0_u32)
//!     .if_matches(|quantity| *quantity <= 10)
//!     .with(|quantity| quantity * 250)
//!     .default_or(0);
//! assert_eq!(rejected, 0);
//! ```

mod absence;
mod cast;
mod monoid;
mod option_ext;

pub use absence::Absence;
pub use cast::CastMaybe;
pub use monoid::MaybeMonoid;
pub use option_ext::MaybeExt;
