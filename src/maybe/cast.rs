//! Safe downcasting expressed in the maybe vocabulary.
//!
//! The cast-or-absent helper: try to view a type-erased value as a concrete
//! type, yielding a present monoid on success and `nothing` on failure -
//! never a panic.

use std::any::Any;

use super::absence::Absence;
use super::monoid::MaybeMonoid;

/// Downcasting into a [`MaybeMonoid`].
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use monadish::maybe::CastMaybe;
///
/// let erased: Box<dyn Any> = Box::new(String::from("payload"));
/// let cast = erased.cast::<String>();
/// assert_eq!(cast.default_or(String::new()), "payload");
///
/// let erased: Box<dyn Any> = Box::new(42_i32);
/// assert!(!erased.cast::<String>().has_value());
/// ```
pub trait CastMaybe {
    /// Attempts to downcast to `T`; a failed cast is absence, not an error.
    fn cast<T: Any + Absence>(self) -> MaybeMonoid<T>;
}

impl CastMaybe for Box<dyn Any> {
    #[inline]
    fn cast<T: Any + Absence>(self) -> MaybeMonoid<T> {
        self.downcast::<T>()
            .map_or_else(|_| MaybeMonoid::nothing(), |value| MaybeMonoid::unit(*value))
    }
}
