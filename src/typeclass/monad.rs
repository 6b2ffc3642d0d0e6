//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, letting each step depend on
//! the result of the previous one. For `Nullable`, `flat_map` is
//! [`Nullable::onto`]; for `Identity`, it is [`Identity::then`].
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use solum::{Nullable, nil, solum};
//! use solum::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Nullable<i32> {
//!     match text.parse::<i32>() {
//!         Ok(n) if n > 0 => solum(n),
//!         _ => nil(),
//!     }
//! }
//!
//! let result = solum("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| solum(n * 2));
//! assert_eq!(result, solum(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;
use crate::nullable::Nullable;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum, Nullable};
    /// use solum::typeclass::Monad;
    ///
    /// assert_eq!(solum(5).flat_map(|n| solum(n * 2)), solum(10));
    ///
    /// let small = solum(5).flat_map(|n| if n > 10 { solum(n) } else { nil() });
    /// assert!(small.is_nil());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is absent the absence propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum};
    /// use solum::typeclass::Monad;
    ///
    /// assert_eq!(solum(5).then(solum("hello")), solum("hello"));
    /// assert!(nil::<i32>().then(solum("hello")).is_nil());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Nullable<A> Implementation
// =============================================================================

impl<A> Monad for Nullable<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Nullable<B>
    where
        F: FnOnce(A) -> Nullable<B>,
    {
        self.onto(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}
