//! The Identity monad.
//!
//! [`Identity`] wraps a single value and adds no behavior of its own. Chained
//! with [`then`](Identity::then) and [`map`](Identity::map) it reads as a
//! pipeline of plain function calls, and it serves as the simplest model for
//! the type class laws.

use std::fmt;

use super::TypeConstructor;

/// The identity functor: wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use solum::typeclass::{Identity, take};
///
/// let total = take(3)
///     .map(|n| n * 2)
///     .then(|n| Identity::new(n + 1))
///     .into_inner();
/// assert_eq!(total, 7);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Identity<A>(pub A);

/// Wraps a value in [`Identity`].
///
/// # Examples
///
/// ```rust
/// use solum::typeclass::take;
///
/// assert_eq!(take("x").into_inner(), "x");
/// ```
#[inline]
pub const fn take<A>(value: A) -> Identity<A> {
    Identity(value)
}

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Returns a mutable reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::typeclass::Identity;
    ///
    /// let mut x = Identity::new(42);
    /// *x.as_inner_mut() = 100;
    /// assert_eq!(x.into_inner(), 100);
    /// ```
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut A {
        &mut self.0
    }

    /// Binds the value to a function returning another `Identity`.
    ///
    /// This inherent method shadows [`Monad::then`](super::Monad::then) in
    /// method-call syntax; the sequencing form stays reachable as
    /// `Monad::then(identity, next)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::typeclass::{Identity, take};
    ///
    /// let greeting = take("world").then(|name| Identity::new(format!("hello {name}")));
    /// assert_eq!(greeting.into_inner(), "hello world");
    /// ```
    #[inline]
    pub fn then<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    /// Applies a function that returns a bare value, re-wrapping the result.
    ///
    /// `identity.map(f)` is `identity.then(|a| Identity::new(f(a)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::typeclass::take;
    ///
    /// assert_eq!(take(20).map(|n| n + 1).into_inner(), 21);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}
