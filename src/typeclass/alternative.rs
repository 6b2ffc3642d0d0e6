//! Alternative type class - monoid structure on Applicative functors.
//!
//! `Alternative` adds failure (`empty`) and choice (`alt`) to an applicative.
//! For `Nullable`, `empty` is `Nil` and `alt` keeps the first `Solum`, the
//! same selection [`Nullable::otherwise`] makes.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use solum::{Nullable, nil, solum};
//! use solum::typeclass::{Alternative, Functor};
//!
//! let empty: Nullable<i32> = <Nullable<()>>::empty();
//! assert!(empty.is_nil());
//!
//! assert_eq!(nil::<i32>().alt(solum(42)), solum(42));
//!
//! fn positive(n: i32) -> Nullable<i32> {
//!     <Nullable<()>>::guard(n > 0).fmap(move |()| n)
//! }
//! assert_eq!(positive(5), solum(5));
//! assert!(positive(-3).is_nil());
//! ```

use super::applicative::Applicative;
use crate::nullable::Nullable;

/// A type class for applicative functors with a monoid structure.
///
/// # Laws
///
/// ```text
/// empty.alt(x) == x
/// x.alt(empty) == x
/// (x.alt(y)).alt(z) == x.alt(y.alt(z))
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for alt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::Nullable;
    /// use solum::typeclass::Alternative;
    ///
    /// let empty: Nullable<i32> = <Nullable<()>>::empty();
    /// assert_eq!(empty, Nullable::Nil);
    /// ```
    fn empty<A>() -> Self::WithType<A>;

    /// Combines two alternatives, returning the first success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum};
    /// use solum::typeclass::Alternative;
    ///
    /// assert_eq!(nil::<i32>().alt(solum(42)), solum(42));
    /// assert_eq!(solum(1).alt(solum(2)), solum(1));
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` if the condition holds, otherwise fails.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Makes a computation optional: the result always succeeds and carries
    /// `Some(value)` or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum};
    /// use solum::typeclass::Alternative;
    ///
    /// assert_eq!(solum(42).optional(), solum(Some(42)));
    /// assert_eq!(nil::<i32>().optional(), solum(None));
    /// ```
    fn optional(self) -> Self::WithType<Option<Self::Inner>>
    where
        Self: Sized;

    /// Chooses the first success among several alternatives.
    ///
    /// Alternatives after the first success are not inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{Nullable, nil, solum};
    /// use solum::typeclass::Alternative;
    ///
    /// let chosen = Nullable::choice(vec![nil(), solum(1), solum(2)]);
    /// assert_eq!(chosen, solum(1));
    ///
    /// let none: Nullable<i32> = Nullable::choice(Vec::new());
    /// assert!(none.is_nil());
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Nullable<A> {
    #[inline]
    fn empty<B>() -> Nullable<B> {
        Nullable::Nil
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.otherwise(alternative.into_value())
    }

    #[inline]
    fn optional(self) -> Nullable<Option<A>> {
        Nullable::Solum(self.into_value())
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_solum)
            .unwrap_or_default()
    }
}
