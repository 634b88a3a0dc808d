//! Continuation monad for continuation-passing style (CPS).
//!
//! A continuation represents a computation as "a function of what to do with
//! the result": instead of returning a value of type `A`, it takes a consumer
//! `(A -> R)` and produces the final result `R`. Nothing is evaluated until
//! the terminal consumer is supplied with [`Continuation::run`], and the
//! terminal consumer runs at most once per chain resolution.
//!
//! # Examples
//!
//! ```rust
//! use monadish::control::{Continuation, ToContinuation};
//!
//! let cont: Continuation<i32, i32> = 21.to_continuation();
//! let result = cont.map(|x| x * 2).run(|x| x);
//! assert_eq!(result, 42);
//! ```
//!
//! ## CPS factorial via `select_many`
//!
//! ```rust
//! use monadish::control::{Continuation, ToContinuation};
//!
//! fn factorial(n: i64) -> Continuation<i64, i64> {
//!     if n == 0 {
//!         1.to_continuation()
//!     } else {
//!         n.to_continuation()
//!             .select_many(|x| factorial(x - 1), |x, y| x * y)
//!     }
//! }
//!
//! assert_eq!(factorial(3).run(|x| x), 6);
//! ```

/// A boxed consumer that takes the intermediate value and produces a result.
type ConsumerFunction<A, R> = Box<dyn FnOnce(A) -> R>;

/// A boxed CPS function that takes a consumer and produces a result.
type CpsFunction<A, R> = Box<dyn FnOnce(ConsumerFunction<A, R>) -> R>;

/// A computation in continuation-passing style: `(A -> R) -> R`.
///
/// # Type Parameters
///
/// * `R` - the final result type of the whole computation
/// * `A` - the intermediate value this continuation produces
///
/// # Laws
///
/// `Continuation` forms a monad:
///
/// - **Left Identity**: `Continuation::pure(a).flat_map(f).run(k) == f(a).run(k)`
/// - **Right Identity**: `m.flat_map(Continuation::pure).run(k) == m.run(k)`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run(k) == m.flat_map(|x| f(x).flat_map(g)).run(k)`
///
/// Running with pure consumers is referentially transparent; if consumers
/// mutate external state, calls happen in sequential order, outer before
/// inner.
///
/// # Examples
///
/// ```rust
/// use monadish::control::Continuation;
///
/// let cont: Continuation<String, i32> = Continuation::new(|k| k(42));
/// let result = cont.run(|x| format!("got {x}"));
/// assert_eq!(result, "got 42");
/// ```
pub struct Continuation<R, A> {
    /// The deferred computation: given a consumer `(A -> R)`, produces `R`.
    run_continuation: CpsFunction<A, R>,
}

impl<R: 'static, A: 'static> Continuation<R, A> {
    /// Creates a continuation from a raw CPS function `(A -> R) -> R`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::new(|k| k(21 * 2));
    /// assert_eq!(cont.run(|x| x), 42);
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: FnOnce(ConsumerFunction<A, R>) -> R + 'static,
    {
        Self {
            run_continuation: Box::new(run),
        }
    }

    /// Lifts a value into the continuation monad (the unit).
    ///
    /// The resulting continuation immediately applies its consumer to the
    /// captured value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(42);
    /// assert_eq!(cont.run(|x| x), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move |consumer| consumer(value))
    }

    /// Resolves the chain by supplying the terminal consumer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::Continuation;
    ///
    /// let cont: Continuation<String, i32> = Continuation::pure(42);
    /// assert_eq!(cont.run(|x| x.to_string()), "42");
    /// ```
    pub fn run<K>(self, consumer: K) -> R
    where
        K: FnOnce(A) -> R + 'static,
    {
        (self.run_continuation)(Box::new(consumer))
    }

    /// Applies a function to the intermediate value (functor map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(21);
    /// assert_eq!(cont.map(|x| x * 2).run(|x| x), 42);
    /// ```
    pub fn map<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: FnOnce(A) -> B + 'static,
    {
        Continuation::new(move |consumer| self.run(move |value| consumer(function(value))))
    }

    /// Sequences a computation that itself returns a continuation (monadic
    /// bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(21);
    /// let result = cont.flat_map(|x| Continuation::pure(x * 2));
    /// assert_eq!(result.run(|x| x), 42);
    /// ```
    pub fn flat_map<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: FnOnce(A) -> Continuation<R, B> + 'static,
    {
        Continuation::new(move |consumer| self.run(move |value| function(value).run(consumer)))
    }

    /// Alias for [`Self::flat_map`] to match Rust's naming conventions.
    #[inline]
    pub fn and_then<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: FnOnce(A) -> Continuation<R, B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two continuations, discarding the result of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::Continuation;
    ///
    /// let first: Continuation<i32, &str> = Continuation::pure("ignored");
    /// let second: Continuation<i32, i32> = Continuation::pure(42);
    /// assert_eq!(first.then(second).run(|x| x), 42);
    /// ```
    #[inline]
    #[must_use]
    pub fn then<B: 'static>(self, next: Continuation<R, B>) -> Continuation<R, B> {
        self.flat_map(move |_| next)
    }

    /// Monadic bind with a joining result selector.
    ///
    /// Resolution order, once the terminal consumer is supplied: the outer
    /// continuation resolves first, its value is fed (cloned) to `selector`
    /// to obtain the inner continuation, the inner resolves, both values are
    /// combined by `result_selector`, and only then does the terminal
    /// consumer run - exactly once. Until [`Self::run`], nothing is
    /// evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadish::control::Continuation;
    ///
    /// let combined = Continuation::<i32, i32>::pure(3)
    ///     .select_many(|x| Continuation::pure(x * 10), |x, y| x + y);
    /// assert_eq!(combined.run(|x| x), 33);
    /// ```
    pub fn select_many<B: 'static, C: 'static, F, S>(
        self,
        selector: F,
        result_selector: S,
    ) -> Continuation<R, C>
    where
        A: Clone,
        F: FnOnce(A) -> Continuation<R, B> + 'static,
        S: FnOnce(A, B) -> C + 'static,
    {
        Continuation::new(move |consumer| {
            self.run(move |value| {
                selector(value.clone())
                    .run(move |selected| consumer(result_selector(value, selected)))
            })
        })
    }
}

/// Lifts any value into a [`Continuation`], mirroring
/// [`Continuation::pure`] as a postfix method.
///
/// # Examples
///
/// ```rust
/// use monadish::control::{Continuation, ToContinuation};
///
/// let cont: Continuation<i32, i32> = 42.to_continuation();
/// assert_eq!(cont.run(|x| x), 42);
/// ```
pub trait ToContinuation: Sized + 'static {
    /// Wraps `self` as a continuation awaiting its consumer.
    fn to_continuation<R: 'static>(self) -> Continuation<R, Self>;
}

impl<A: 'static> ToContinuation for A {
    #[inline]
    fn to_continuation<R: 'static>(self) -> Continuation<R, Self> {
        Continuation::pure(self)
    }
}

impl<R, A> std::fmt::Debug for Continuation<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Continuation")
            .finish_non_exhaustive()
    }
}

// The boxed closures are deliberately not Send/Sync; evaluation is strictly
// single-threaded and call-stack based.
static_assertions::assert_not_impl_any!(Continuation<i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn pure_passes_the_value_to_its_consumer() {
        let cont: Continuation<i32, i32> = Continuation::pure(42);
        assert_eq!(cont.run(|x| x), 42);
    }

    #[rstest]
    fn to_continuation_mirrors_pure() {
        let cont: Continuation<String, i32> = 42.to_continuation();
        assert_eq!(cont.run(|x| x.to_string()), "42");
    }

    #[rstest]
    fn new_can_ignore_its_consumer() {
        let cont: Continuation<i32, i32> = Continuation::new(|_consumer| 100);
        // The consumer is ignored, so the result is 100, not 200.
        assert_eq!(cont.run(|x| x * 2), 100);
    }

    #[rstest]
    fn map_transforms_the_intermediate_value() {
        let cont: Continuation<i32, i32> = Continuation::pure(21);
        assert_eq!(cont.map(|x| x * 2).run(|x| x), 42);
    }

    #[rstest]
    fn flat_map_sequences_continuations() {
        let result: i32 = Continuation::pure(10)
            .flat_map(|x| Continuation::pure(x + 5))
            .flat_map(|x| Continuation::pure(x * 2))
            .map(|x| x + 1)
            .run(|x| x);
        assert_eq!(result, 31);
    }

    #[rstest]
    fn then_discards_the_first_result() {
        let first: Continuation<i32, &str> = Continuation::pure("ignored");
        let second: Continuation<i32, i32> = Continuation::pure(42);
        assert_eq!(first.then(second).run(|x| x), 42);
    }

    #[rstest]
    fn select_many_combines_both_stages() {
        let combined = Continuation::<i32, i32>::pure(3)
            .select_many(|x| Continuation::pure(x * 10), |x, y| x + y);
        assert_eq!(combined.run(|x| x), 33);
    }

    #[rstest]
    fn select_many_defers_until_run() {
        let calls = Rc::new(Cell::new(0));
        let observed = calls.clone();
        let combined = Continuation::<i32, i32>::pure(1).select_many(
            move |x| {
                observed.set(observed.get() + 1);
                Continuation::pure(x + 1)
            },
            |x, y| x + y,
        );
        // Nothing has been evaluated yet.
        assert_eq!(calls.get(), 0);
        assert_eq!(combined.run(|x| x), 3);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn terminal_consumer_runs_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let observed = calls.clone();
        let result = Continuation::<i32, i32>::pure(2)
            .select_many(|x| Continuation::pure(x * 2), |x, y| x + y)
            .run(move |x| {
                observed.set(observed.get() + 1);
                x
            });
        assert_eq!(result, 6);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn cps_factorial() {
        fn factorial(n: i64) -> Continuation<i64, i64> {
            if n == 0 {
                1.to_continuation()
            } else {
                n.to_continuation()
                    .select_many(|x| factorial(x - 1), |x, y| x * y)
            }
        }

        assert_eq!(factorial(0).run(|x| x), 1);
        assert_eq!(factorial(3).run(|x| x), 6);
        assert_eq!(factorial(5).run(|x| x), 120);
    }

    #[rstest]
    fn side_effect_ordering_is_outer_before_inner() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let outer_log = order.clone();
        let inner_log = order.clone();

        Continuation::<(), i32>::new(move |consumer| {
            outer_log.borrow_mut().push("outer");
            consumer(1);
        })
        .flat_map(move |value| {
            inner_log.borrow_mut().push("inner");
            Continuation::pure(value + 1)
        })
        .run(|_| ());

        assert_eq!(*order.borrow(), vec!["outer", "inner"]);
    }
}
