//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value while its
//! structure is preserved: a `Nil` stays `Nil`, an `Identity` stays an
//! `Identity`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use solum::{Nullable, nil, solum};
//! use solum::typeclass::Functor;
//!
//! let transformed: Nullable<String> = solum(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, solum("5".to_string()));
//!
//! let absent: Nullable<i32> = nil();
//! assert!(absent.fmap(|n| n.to_string()).is_nil());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::nullable::Nullable;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    /// use solum::typeclass::Functor;
    ///
    /// assert_eq!(solum(5).fmap(|n| n * 2), solum(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    /// use solum::typeclass::Functor;
    ///
    /// let name = solum(String::from("hello"));
    /// assert_eq!(name.fmap_ref(|s| s.len()), solum(5));
    /// assert!(name.is_solum());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum, Nullable};
    /// use solum::typeclass::Functor;
    ///
    /// assert_eq!(solum(5).replace("replaced"), solum("replaced"));
    ///
    /// let absent: Nullable<i32> = nil();
    /// assert!(absent.replace("replaced").is_nil());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    /// use solum::typeclass::Functor;
    ///
    /// assert_eq!(solum(5).void(), solum(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Nullable<A> Implementation
// =============================================================================

impl<A> Functor for Nullable<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Nullable<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Solum(value) => Nullable::Solum(function(value)),
            Self::Nil => Nullable::Nil,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Nullable<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
