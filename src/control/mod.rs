//! Continuation-passing control flow.
//!
//! This module provides:
//!
//! - [`Continuation`]: the continuation monad, a computation expressed as a
//!   function of its consumer
//! - [`ToContinuation`]: postfix lifting of any value into a continuation
//! - [`ContinueWith`] / [`ContinueWithAction`]: continuation-style chaining
//!   over ordinary staged functions and actions
//!
//! Everything is synchronous and call-stack based: the only deferred
//! construct is the continuation's function-as-value, invoked once its
//! consumer is supplied.
//!
//! # Examples
//!
//! ```rust
//! use monadish::control::{Continuation, ToContinuation};
//!
//! let result = 10.to_continuation::<i32>()
//!     .flat_map(|x| Continuation::pure(x + 5))
//!     .map(|x| x * 2)
//!     .run(|x| x + 1);
//! assert_eq!(result, 31);
//! ```

mod compose;
mod continuation;

pub use compose::{ContinueWith, ContinueWithAction};
pub use continuation::{Continuation, ToContinuation};
