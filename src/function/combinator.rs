//! Function shapes and the combinators built on them.
//!
//! - [`Predicate`] and [`Unary`]: named shapes for boolean tests and
//!   single-argument functions
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: a producer that always yields the same value (K combinator)
//! - [`compose`]: left-to-right composition of two unary functions
//! - [`negate`], [`both`], [`either`]: predicate algebra
//! - [`satisfies`]: hands any [`Predicate`] to
//!   [`Nullable::that`](crate::Nullable::that)

/// A boolean test over a borrowed `T`.
///
/// Every `Fn(&T) -> bool` is a predicate.
///
/// # Examples
///
/// ```rust
/// use solum::function::Predicate;
///
/// fn count_matching<P: Predicate<i32>>(values: &[i32], predicate: &P) -> usize {
///     values.iter().filter(|value| predicate.test(value)).count()
/// }
///
/// assert_eq!(count_matching(&[1, 2, 3, 4], &|n: &i32| n % 2 == 0), 2);
/// ```
pub trait Predicate<T: ?Sized> {
    /// Tests the value.
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// A single-argument function from `T` to `U`, called at most once.
pub trait Unary<T, U> {
    /// Applies the function.
    fn apply(self, value: T) -> U;
}

impl<T, U, F> Unary<T, U> for F
where
    F: FnOnce(T) -> U,
{
    #[inline]
    fn apply(self, value: T) -> U {
        self(value)
    }
}

/// Returns the value unchanged.
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use solum::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a producer that always returns a clone of the given value.
///
/// Also known as the K combinator. The producer takes no argument, which makes
/// it a deferred [`Value`](super::Value) for fallbacks.
///
/// # Examples
///
/// ```
/// use solum::{constant, nullable};
///
/// let zero = constant(0);
/// assert_eq!(zero(), 0);
/// assert_eq!(nullable(None::<i32>).or(zero), 0);
/// ```
#[inline]
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Composes two unary functions left to right: `compose(f, g)(x) == g(f(x))`.
///
/// # Examples
///
/// ```
/// use solum::function::compose;
///
/// let parse_then_double = compose(|text: &str| text.len(), |length: usize| length * 2);
/// assert_eq!(parse_then_double("four"), 8);
/// ```
#[inline]
pub fn compose<T, U, V>(first: impl Unary<T, U>, second: impl Unary<U, V>) -> impl FnOnce(T) -> V {
    move |value| second.apply(first.apply(value))
}

/// Inverts a predicate.
///
/// # Examples
///
/// ```
/// use solum::function::negate;
///
/// let odd = negate(|n: &i32| n % 2 == 0);
/// assert!(odd(&3));
/// ```
#[inline]
pub fn negate<T: ?Sized>(predicate: impl Predicate<T>) -> impl Fn(&T) -> bool {
    move |value| !predicate.test(value)
}

/// Turns any [`Predicate`] into a closure, so that predicate types that are
/// not closures can be passed to [`Nullable::that`](crate::Nullable::that).
///
/// # Examples
///
/// ```
/// use solum::function::{Predicate, satisfies};
/// use solum::solum;
///
/// struct AtLeast(u32);
///
/// impl Predicate<u32> for AtLeast {
///     fn test(&self, value: &u32) -> bool {
///         *value >= self.0
///     }
/// }
///
/// assert_eq!(solum(18).that(satisfies(AtLeast(18))), solum(18));
/// assert!(solum(17).that(satisfies(AtLeast(18))).is_nil());
/// ```
#[inline]
pub fn satisfies<T: ?Sized>(predicate: impl Predicate<T>) -> impl Fn(&T) -> bool {
    move |value| predicate.test(value)
}

/// Conjunction of two predicates; `second` is not tested when `first` fails.
#[inline]
pub fn both<T: ?Sized>(
    first: impl Predicate<T>,
    second: impl Predicate<T>,
) -> impl Fn(&T) -> bool {
    move |value| first.test(value) && second.test(value)
}

/// Disjunction of two predicates; `second` is not tested when `first` holds.
#[inline]
pub fn either<T: ?Sized>(
    first: impl Predicate<T>,
    second: impl Predicate<T>,
) -> impl Fn(&T) -> bool {
    move |value| first.test(value) || second.test(value)
}
