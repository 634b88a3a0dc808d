//! Continuation-style composition over ordinary staged functions and actions.
//!
//! These helpers chain plain closures without going through the boxed
//! [`Continuation`](super::Continuation) type: the "container" is the next
//! closure itself, built eagerly and invoked when the final input arrives.
//!
//! # Examples
//!
//! ```rust
//! use monadish::control::ContinueWith;
//!
//! let parse_and_double = (|text: String| text.len()).continue_with(|n| n * 2);
//! assert_eq!(parse_and_double(String::from("abc")), 6);
//! ```

/// Sequential composition for staged functions.
///
/// Implemented for every `FnOnce(A) -> B`, so any closure or function item
/// can be tail-chained postfix.
pub trait ContinueWith<A, B>: FnOnce(A) -> B + Sized {
    /// Feeds the output of `self` into `continue_function`.
    ///
    /// `f.continue_with(g)` applied to `x` computes `g(f(x))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::ContinueWith;
    ///
    /// let add_then_double = (|x: i32| x + 1).continue_with(|x| x * 2);
    /// assert_eq!(add_then_double(20), 42);
    /// ```
    fn continue_with<C, G>(self, continue_function: G) -> impl FnOnce(A) -> C
    where
        G: FnOnce(B) -> C;

    /// Bind with a joining result selector over staged functions.
    ///
    /// The produced function, applied to `input`, computes `self(input)`,
    /// then resolves `continue_function(input)` to a second stage and applies
    /// it to the same input, and finally combines both results. Both stages
    /// see the same input in declared order, with no isolation between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::ContinueWith;
    ///
    /// // f1(x) = x + x, f2(x) = x * x, combined with +
    /// let combined = (|x: i32| x + x).select_many(|_| |x: i32| x * x, |a, b| a + b);
    /// assert_eq!(combined(3), 15); // 6 + 9
    /// ```
    fn select_many<C, G, H, S>(
        self,
        continue_function: G,
        result_selector: S,
    ) -> impl FnOnce(A) -> C
    where
        A: Clone,
        G: FnOnce(A) -> H,
        H: FnOnce(A) -> B,
        S: FnOnce(B, B) -> C;
}

impl<A, B, F> ContinueWith<A, B> for F
where
    F: FnOnce(A) -> B,
{
    #[inline]
    fn continue_with<C, G>(self, continue_function: G) -> impl FnOnce(A) -> C
    where
        G: FnOnce(B) -> C,
    {
        move |input| continue_function(self(input))
    }

    #[inline]
    fn select_many<C, G, H, S>(
        self,
        continue_function: G,
        result_selector: S,
    ) -> impl FnOnce(A) -> C
    where
        A: Clone,
        G: FnOnce(A) -> H,
        H: FnOnce(A) -> B,
        S: FnOnce(B, B) -> C,
    {
        move |input: A| {
            let base_result = self(input.clone());
            let continued = continue_function(input.clone())(input);
            result_selector(base_result, continued)
        }
    }
}

/// Sequential composition for actions (closures run for their effects).
///
/// Both actions receive the same input, in order; there is no isolation
/// between them, so the second observes any shared state the first mutated.
pub trait ContinueWithAction<A>: FnOnce(&A) + Sized {
    /// Runs `self`, then `next_action`, against the same input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use monadish::control::ContinueWithAction;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let record = |n: &i32| log.borrow_mut().push(*n);
    /// let record_double = |n: &i32| log.borrow_mut().push(n * 2);
    ///
    /// record.followed_by(record_double)(&21);
    /// assert_eq!(*log.borrow(), vec![21, 42]);
    /// ```
    fn followed_by<G>(self, next_action: G) -> impl FnOnce(&A)
    where
        G: FnOnce(&A);
}

impl<A, F> ContinueWithAction<A> for F
where
    F: FnOnce(&A),
{
    #[inline]
    fn followed_by<G>(self, next_action: G) -> impl FnOnce(&A)
    where
        G: FnOnce(&A),
    {
        move |input: &A| {
            self(input);
            next_action(input);
        }
    }
}
