//! The maybe vocabulary directly on [`Option`].
//!
//! When a value already lives in a std optional there is no need to lift it
//! into a [`MaybeMonoid`] just to chain: this extension trait provides the
//! same combinators straight on `Option<A>`, plus [`MaybeExt::into_monoid`]
//! for crossing over when a chain needs the normalizing container.
//!
//! # Examples
//!
//! ```rust
//! use monadish::maybe::MaybeExt;
//!
//! let shouted = Some(String::from("hey"))
//!     .if_matches(|text| !text.is_empty())
//!     .with(|text| text.to_uppercase())
//!     .default_or(String::new());
//! assert_eq!(shouted, "HEY");
//! ```

use super::absence::Absence;
use super::monoid::MaybeMonoid;

/// Optional-value combinators for [`Option`], mirroring [`MaybeMonoid`].
///
/// `None` plays the role of absence; `Some` payloads are *not* re-normalized
/// (a `Some(0)` stays present - wrapping in `Option` is an explicit statement
/// of presence). Chains that want structural normalization should cross into
/// the container with [`Self::into_monoid`].
pub trait MaybeExt<A>: Sized {
    /// Applies a function to a present value, keeping the result wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeExt;
    ///
    /// assert_eq!(Some(21).with(|n| n * 2), Some(42));
    /// assert_eq!(None::<i32>.with(|n| n * 2), None);
    /// ```
    fn with<B, F>(self, evaluator: F) -> Option<B>
    where
        F: FnOnce(A) -> B;

    /// Applies a function to a present value and returns the raw result, or
    /// the fallback when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeExt;
    ///
    /// assert_eq!(Some(5).returns(|n| n * 2, -1), 10);
    /// assert_eq!(None::<i32>.returns(|n| n * 2, -1), -1);
    /// ```
    fn returns<B, F>(self, evaluator: F, fail_value: B) -> B
    where
        F: FnOnce(A) -> B;

    /// Keeps a present value only when the predicate holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeExt;
    ///
    /// assert_eq!(Some(5).if_matches(|n| *n > 0), Some(5));
    /// assert_eq!(Some(5).if_matches(|n| *n > 10), None);
    /// ```
    fn if_matches<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool;

    /// Unwraps a present value, or returns the supplied default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeExt;
    ///
    /// assert_eq!(Some(5).default_or(7), 5);
    /// assert_eq!(None.default_or(7), 7);
    /// ```
    fn default_or(self, default_value: A) -> A;

    /// Monadic bind with a joining result selector, as on
    /// [`MaybeMonoid::select_many`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::MaybeExt;
    ///
    /// let combined = Some(2).select_many(|n| Some(n * 10), |left, right| left + right);
    /// assert_eq!(combined, Some(22));
    /// ```
    fn select_many<B, C, F, S>(self, selector: F, result_selector: S) -> Option<C>
    where
        F: FnOnce(&A) -> Option<B>,
        S: FnOnce(A, B) -> C;

    /// Lifts the optional into a [`MaybeMonoid`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::maybe::{MaybeExt, MaybeMonoid};
    ///
    /// assert_eq!(Some(5).into_monoid(), MaybeMonoid::unit(5));
    /// assert!(!None::<i32>.into_monoid().has_value());
    /// ```
    fn into_monoid(self) -> MaybeMonoid<A>
    where
        A: Absence;
}

impl<A> MaybeExt<A> for Option<A> {
    #[inline]
    fn with<B, F>(self, evaluator: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(evaluator)
    }

    #[inline]
    fn returns<B, F>(self, evaluator: F, fail_value: B) -> B
    where
        F: FnOnce(A) -> B,
    {
        self.map_or(fail_value, evaluator)
    }

    #[inline]
    fn if_matches<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter(predicate)
    }

    #[inline]
    fn default_or(self, default_value: A) -> A {
        self.unwrap_or(default_value)
    }

    #[inline]
    fn select_many<B, C, F, S>(self, selector: F, result_selector: S) -> Option<C>
    where
        F: FnOnce(&A) -> Option<B>,
        S: FnOnce(A, B) -> C,
    {
        let input = self?;
        let selected = selector(&input)?;
        Some(result_selector(input, selected))
    }

    #[inline]
    fn into_monoid(self) -> MaybeMonoid<A>
    where
        A: Absence,
    {
        MaybeMonoid::from_option(self)
    }
}
