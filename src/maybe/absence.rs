//! The `Absence` trait - per-type detection of the absent representation.
//!
//! Both "a reference that is null" and "a value that is its type's zero"
//! collapse into one question: *is this payload the absent representation of
//! its type?* This trait answers that question generically, replacing the
//! need for two parallel combinator families (one for references, one for
//! nullable values).
//!
//! # Examples
//!
//! ```rust
//! use monadish::maybe::Absence;
//!
//! assert!(0_i32.is_absent());
//! assert!(String::new().is_absent());
//! assert!(Option::<i32>::None.is_absent());
//! assert!(!Some(0).is_absent()); // `Some` is always present
//! assert!(!"x".is_absent());
//! ```

/// A type whose absent ("zero") representation can be constructed and
/// detected.
///
/// Implementations decide what counts as absent for their type. For
/// `Option<T>` that is `None` (the null-reference analogue); for numeric
/// primitives it is zero; for collections it is emptiness.
///
/// # Laws
///
/// For every implementation:
///
/// ```text
/// Self::absent().is_absent() == true
/// ```
///
/// # Examples
///
/// ```rust
/// use monadish::maybe::Absence;
///
/// assert_eq!(i32::absent(), 0);
/// assert_eq!(String::absent(), "");
/// assert_eq!(Option::<i32>::absent(), None);
/// ```
pub trait Absence {
    /// Returns the canonical absent representation of this type.
    fn absent() -> Self;

    /// Returns whether this value is the absent representation.
    ///
    /// Pure, side-effect free, O(1) for scalar types.
    fn is_absent(&self) -> bool;
}

// =============================================================================
// Optional values - `None` is the null-reference analogue.
// `Some` is always present, even `Some(0)`: wrapping in `Option` is an
// explicit statement of presence.
// =============================================================================

impl<T> Absence for Option<T> {
    #[inline]
    fn absent() -> Self {
        None
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

// =============================================================================
// Integer primitives - zero is absent.
// =============================================================================

macro_rules! impl_absence_for_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl Absence for $type {
                #[inline]
                fn absent() -> Self {
                    0
                }

                #[inline]
                fn is_absent(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_absence_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Floating-point primitives - positive and negative zero are both absent.
// =============================================================================

macro_rules! impl_absence_for_float {
    ($($type:ty),* $(,)?) => {
        $(
            impl Absence for $type {
                #[inline]
                fn absent() -> Self {
                    0.0
                }

                #[inline]
                #[allow(clippy::float_cmp)]
                fn is_absent(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_absence_for_float!(f32, f64);

// =============================================================================
// Other scalars
// =============================================================================

impl Absence for bool {
    #[inline]
    fn absent() -> Self {
        false
    }

    #[inline]
    fn is_absent(&self) -> bool {
        !*self
    }
}

impl Absence for char {
    #[inline]
    fn absent() -> Self {
        '\0'
    }

    #[inline]
    fn is_absent(&self) -> bool {
        *self == '\0'
    }
}

impl Absence for () {
    #[inline]
    fn absent() -> Self {}

    #[inline]
    fn is_absent(&self) -> bool {
        true
    }
}

// =============================================================================
// Strings and collections - emptiness is absence.
// =============================================================================

impl Absence for String {
    #[inline]
    fn absent() -> Self {
        Self::new()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Absence for &str {
    #[inline]
    fn absent() -> Self {
        ""
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Absence for Vec<T> {
    #[inline]
    fn absent() -> Self {
        Self::new()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Absence> Absence for Box<T> {
    #[inline]
    fn absent() -> Self {
        Self::new(T::absent())
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
