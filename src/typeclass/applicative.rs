//! Applicative type class - applying functions within a context.
//!
//! `Applicative` extends `Functor` with the ability to lift a plain value into
//! the context (`pure`) and to combine independent values in the context
//! (`map2`, `map3`, `product`). For `Nullable`, a combination is `Nil` as soon
//! as any of its inputs is `Nil`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use solum::{Nullable, nil, solum};
//! use solum::typeclass::Applicative;
//!
//! let lifted: Nullable<i32> = <Nullable<()>>::pure(42);
//! assert_eq!(lifted, solum(42));
//!
//! assert_eq!(solum(3).map2(solum(4), |x, y| x + y), solum(7));
//! assert!(solum(3).map2(nil::<i32>(), |x, y| x + y).is_nil());
//! ```

use super::functor::Functor;
use super::identity::Identity;
use crate::nullable::Nullable;

/// A type class for functors that can lift values and combine computations.
///
/// # Examples
///
/// ```rust
/// use solum::{Nullable, solum};
/// use solum::typeclass::Applicative;
///
/// let total = solum(1).map3(solum(2), solum(3), |a, b, c| a + b + c);
/// assert_eq!(total, solum(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{Nullable, solum};
    /// use solum::typeclass::{Applicative, Identity};
    ///
    /// let x: Nullable<i32> = <Nullable<()>>::pure(42);
    /// assert_eq!(x, solum(42));
    ///
    /// let y: Identity<&str> = <Identity<()>>::pure("hello");
    /// assert_eq!(y, Identity("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum};
    /// use solum::typeclass::Applicative;
    ///
    /// assert_eq!(solum(1).map2(solum(2), |x, y| x + y), solum(3));
    /// assert!(solum(1).map2(nil::<i32>(), |x, y| x + y).is_nil());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    /// use solum::typeclass::Applicative;
    ///
    /// assert_eq!(solum(1).product(solum("hello")), solum((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicatives and keeps the left value.
    ///
    /// The result is still absent when `other` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum};
    /// use solum::typeclass::Applicative;
    ///
    /// assert_eq!(solum(1).product_left(solum(2)), solum(1));
    /// assert!(solum(1).product_left(nil::<i32>()).is_nil());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    /// use solum::typeclass::Applicative;
    ///
    /// let function = solum(|x: i32| x + 1);
    /// assert_eq!(function.apply(solum(5)), solum(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Nullable<A> Implementation
// =============================================================================

impl<A> Applicative for Nullable<A> {
    #[inline]
    fn pure<B>(value: B) -> Nullable<B> {
        Nullable::Solum(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Nullable<B>, function: F) -> Nullable<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Solum(a), Nullable::Solum(b)) => Nullable::Solum(function(a, b)),
            _ => Nullable::Nil,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Nullable<B>, third: Nullable<C>, function: F) -> Nullable<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Solum(a), Nullable::Solum(b), Nullable::Solum(c)) => {
                Nullable::Solum(function(a, b, c))
            }
            _ => Nullable::Nil,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Nullable<B>) -> Nullable<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}
