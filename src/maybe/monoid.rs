//! The Maybe monoid - an optional-value container with chainable combinators.
//!
//! `MaybeMonoid<A>` holds a payload together with a presence flag and is the
//! single source of truth for "has a value / does not". Every combinator
//! consumes a monoid and produces a new one (or a raw value at the end of the
//! chain); nothing is ever mutated after construction.
//!
//! # Absence normalization
//!
//! Presence is a *structural* property of the payload, not merely a
//! constructor flag. Even a monoid built with [`MaybeMonoid::unit`] reads as
//! absent when its payload is the absent representation of its type (see
//! [`Absence`]), and the flag and the payload are reconciled by
//! [`MaybeMonoid::has_value`]:
//!
//! ```rust
//! use monadish::maybe::MaybeMonoid;
//!
//! assert!(!MaybeMonoid::unit(0_i32).has_value());
//! assert!(!MaybeMonoid::unit(String::new()).has_value());
//! assert!(MaybeMonoid::unit("x").has_value());
//! ```
//!
//! # Laws
//!
//! `MaybeMonoid` forms a monad over present values:
//!
//! - **Left Identity**: `MaybeMonoid::unit(a).select_many(f, |_, y| y)` equals
//!   `f(&a)` for every non-absent `a`
//! - **Right Identity**: `m.select_many(|x| MaybeMonoid::unit(x.clone()), |_, y| y)`
//!   equals `m`
//! - **Associativity**: three binds give the same result however they are
//!   associated
//!
//! # Examples
//!
//! ```rust
//! use monadish::maybe::MaybeMonoid;
//!
//! let length = MaybeMonoid::unit(String::from("chain"))
//!     .if_matches(|text| text.len() > 3)
//!     .with(|text| text.len())
//!     .default_or(0);
//! assert_eq!(length, 5);
//! ```

use core::fmt;

use super::absence::Absence;

/// An optional-value container: a payload plus a presence flag.
///
/// Immutable value object; combinators consume `self` and build a fresh
/// monoid. Absence is the only failure channel - no combinator panics for an
/// absent input, and terminal unwraps ([`Self::default_or`],
/// [`Self::into_value`], [`Self::returns`]) always produce a concrete value.
///
/// Faults raised *inside* user-supplied closures are not caught or translated
/// by the container; they propagate to the caller unmodified.
///
/// # Examples
///
/// ```rust
/// use monadish::maybe::MaybeMonoid;
///
/// let present = MaybeMonoid::unit(5);
/// let absent = MaybeMonoid::<i32>::nothing();
///
/// assert_eq!(present.default_or(7), 5);
/// assert_eq!(absent.default_or(7), 7);
/// ```
#[derive(Clone, Copy)]
pub struct MaybeMonoid<A> {
    /// The payload; meaningful only when the monoid is present. Absent
    /// monoids hold the absent representation of `A`.
    value: A,
    /// The constructor flag. [`Self::has_value`] reconciles it against the
    /// payload, so the two are allowed to disagree.
    has_value: bool,
}

impl<A: Absence> MaybeMonoid<A> {
    /// Wraps a raw value into a present monoid (the monadic unit).
    ///
    /// Absence normalization still applies: wrapping the absent
    /// representation of `A` yields a monoid that reads as absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// assert!(MaybeMonoid::unit(42).has_value());
    /// assert!(!MaybeMonoid::unit(0).has_value());
    /// ```
    #[inline]
    pub const fn unit(value: A) -> Self {
        Self {
            value,
            has_value: true,
        }
    }

    /// Constructs the canonical absent monoid for `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// let nothing = MaybeMonoid::<String>::nothing();
    /// assert!(!nothing.has_value());
    /// assert_eq!(nothing.into_value(), "");
    /// ```
    #[inline]
    #[must_use]
    pub fn nothing() -> Self {
        Self {
            value: A::absent(),
            has_value: false,
        }
    }

    /// Bridges from [`Option`]: `Some` becomes [`Self::unit`], `None` becomes
    /// [`Self::nothing`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// assert_eq!(MaybeMonoid::from_option(Some(5)).default_or(0), 5);
    /// assert!(!MaybeMonoid::<i32>::from_option(None).has_value());
    /// ```
    #[inline]
    pub fn from_option(option: Option<A>) -> Self {
        option.map_or_else(Self::nothing, Self::unit)
    }

    /// Returns whether the monoid holds a meaningful value.
    ///
    /// Reconciles the constructor flag against the payload: a monoid whose
    /// payload is the absent representation of `A` reads as absent even when
    /// it was constructed as present.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.has_value && !self.value.is_absent()
    }

    /// Returns a reference to the payload.
    ///
    /// Never panics; absent monoids hold (and therefore return) the absent
    /// representation of `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// assert_eq!(MaybeMonoid::unit(5).value(), &5);
    /// assert_eq!(MaybeMonoid::<i32>::nothing().value(), &0);
    /// ```
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Consumes the monoid and returns the payload.
    ///
    /// Absent monoids yield the absent representation of `A` - absence is
    /// representable, never exceptional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// assert_eq!(MaybeMonoid::unit(String::from("x")).into_value(), "x");
    /// assert_eq!(MaybeMonoid::<String>::nothing().into_value(), "");
    /// ```
    #[inline]
    pub fn into_value(self) -> A {
        self.value
    }

    /// Applies a function to a present payload, re-wrapping the result (map).
    ///
    /// Short-circuits on absence: the evaluator is never invoked for an
    /// absent monoid, which matters when it has observable side effects. The
    /// result is re-normalized - mapping to the absent representation of `B`
    /// produces an absent monoid even though the evaluator ran.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// let doubled = MaybeMonoid::unit(21).with(|n| n * 2);
    /// assert_eq!(doubled.default_or(0), 42);
    ///
    /// // Mapping to zero yields an absent monoid.
    /// assert!(!MaybeMonoid::unit(21).with(|n| n - 21).has_value());
    /// ```
    #[inline]
    pub fn with<B, F>(self, evaluator: F) -> MaybeMonoid<B>
    where
        B: Absence,
        F: FnOnce(A) -> B,
    {
        if self.has_value() {
            MaybeMonoid::unit(evaluator(self.value))
        } else {
            MaybeMonoid::nothing()
        }
    }

    /// Alias for [`Self::with`], matching the usual functor vocabulary.
    #[inline]
    pub fn map<B, F>(self, evaluator: F) -> MaybeMonoid<B>
    where
        B: Absence,
        F: FnOnce(A) -> B,
    {
        self.with(evaluator)
    }

    /// Applies a function to a present payload and returns the raw result;
    /// returns the fallback for an absent monoid.
    ///
    /// Unlike [`Self::with`], the result is *not* re-wrapped: this is the
    /// map-then-unwrap terminal step of a chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// assert_eq!(MaybeMonoid::unit(5).returns(|n| n * 2, -1), 10);
    /// assert_eq!(MaybeMonoid::<i32>::nothing().returns(|n| n * 2, -1), -1);
    /// ```
    #[inline]
    pub fn returns<B, F>(self, evaluator: F, fail_value: B) -> B
    where
        F: FnOnce(A) -> B,
    {
        if self.has_value() {
            evaluator(self.value)
        } else {
            fail_value
        }
    }

    /// Keeps a present payload only when the predicate holds (filter).
    ///
    /// A present monoid passing the predicate is returned unchanged; a
    /// failing predicate or an absent input yields [`Self::nothing`]. The
    /// predicate is never invoked for an absent monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// let positive = MaybeMonoid::unit(5).if_matches(|n| *n > 0);
    /// assert_eq!(positive.default_or(0), 5);
    ///
    /// let rejected = MaybeMonoid::unit(5).if_matches(|n| *n > 10);
    /// assert!(!rejected.has_value());
    /// ```
    #[inline]
    pub fn if_matches<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if self.has_value() && predicate(&self.value) {
            self
        } else {
            Self::nothing()
        }
    }

    /// Unwraps a present payload, or returns the supplied default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// assert_eq!(MaybeMonoid::unit(5).default_or(7), 5);
    /// assert_eq!(MaybeMonoid::<i32>::nothing().default_or(7), 7);
    /// ```
    #[inline]
    pub fn default_or(self, default_value: A) -> A {
        if self.has_value() {
            self.value
        } else {
            default_value
        }
    }

    /// Monadic bind with a joining result selector.
    ///
    /// If the source is absent the selector is never evaluated and the result
    /// is absent. Otherwise the selector produces an intermediate monoid from
    /// a borrow of the payload; if that is absent the result is absent, and
    /// otherwise both payloads are combined by `result_selector` and
    /// re-wrapped (with absence normalization) via [`Self::unit`].
    ///
    /// This mirrors two-clause query-comprehension desugaring and is
    /// associative: three binds give the same outcome however they are
    /// grouped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// let first = MaybeMonoid::unit(String::from("testString1"));
    /// let combined = first.select_many(
    ///     |_| MaybeMonoid::unit(String::from("testString2")),
    ///     |left, right| left + &right,
    /// );
    /// assert_eq!(combined.default_or(String::new()), "testString1testString2");
    /// ```
    #[inline]
    pub fn select_many<B, C, F, S>(self, selector: F, result_selector: S) -> MaybeMonoid<C>
    where
        B: Absence,
        C: Absence,
        F: FnOnce(&A) -> MaybeMonoid<B>,
        S: FnOnce(A, B) -> C,
    {
        if !self.has_value() {
            return MaybeMonoid::nothing();
        }
        let selected = selector(&self.value);
        if selected.has_value() {
            MaybeMonoid::unit(result_selector(self.value, selected.value))
        } else {
            MaybeMonoid::nothing()
        }
    }

    /// Plain monadic bind: sequences a computation that itself returns a
    /// monoid, flattening one level of wrapping.
    ///
    /// Equivalent to [`Self::select_many`] with a selector that keeps only
    /// the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// let result = MaybeMonoid::unit(5)
    ///     .flat_map(|n| MaybeMonoid::unit(n * 2))
    ///     .flat_map(|n| if n > 100 { MaybeMonoid::unit(n) } else { MaybeMonoid::nothing() });
    /// assert!(!result.has_value());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> MaybeMonoid<B>
    where
        B: Absence,
        F: FnOnce(A) -> MaybeMonoid<B>,
    {
        if self.has_value() {
            function(self.value)
        } else {
            MaybeMonoid::nothing()
        }
    }

    /// Alias for [`Self::flat_map`] to match Rust's naming conventions.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> MaybeMonoid<B>
    where
        B: Absence,
        F: FnOnce(A) -> MaybeMonoid<B>,
    {
        self.flat_map(function)
    }

    /// Converts into an [`Option`], the boundary between this vocabulary and
    /// the standard library's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeMonoid;
    ///
    /// assert_eq!(MaybeMonoid::unit(5).into_option(), Some(5));
    /// assert_eq!(MaybeMonoid::<i32>::nothing().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<A> {
        if self.has_value() {
            Some(self.value)
        } else {
            None
        }
    }
}

impl<A: Absence> From<Option<A>> for MaybeMonoid<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

/// Equality is defined over the *normalized* state: all absent monoids of a
/// type are equal to each other, and present monoids compare by payload.
impl<A: Absence + PartialEq> PartialEq for MaybeMonoid<A> {
    fn eq(&self, other: &Self) -> bool {
        match (self.has_value(), other.has_value()) {
            (true, true) => self.value == other.value,
            (false, false) => true,
            _ => false,
        }
    }
}

impl<A: Absence + Eq> Eq for MaybeMonoid<A> {}

impl<A: Absence + fmt::Debug> fmt::Debug for MaybeMonoid<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_value() {
            formatter
                .debug_tuple("MaybeMonoid::unit")
                .field(&self.value)
                .finish()
        } else {
            formatter.write_str("MaybeMonoid::nothing")
        }
    }
}

// Monoids hold nothing but the payload, so auto traits follow it.
static_assertions::assert_impl_all!(MaybeMonoid<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(MaybeMonoid<String>: Send, Sync, Clone);
