//! Type guards: tests that narrow the type of the value they accept.
//!
//! A guard consumes a `T` and either accepts it as a `U` or rejects it.
//! Closures of shape `FnOnce(T) -> Option<U>` are guards, [`Refine`] turns
//! any [`TryFrom`] conversion into one, and the [`guard!`](crate::guard)
//! macro builds one for a single enum variant.

use std::marker::PhantomData;

/// A test over a `T` that narrows it to a `U` when it passes.
///
/// # Laws
///
/// A guard is a pure classification: guarding the same value twice gives
/// the same verdict.
///
/// # Examples
///
/// ```rust
/// use solum::function::TypeGuard;
///
/// #[derive(Debug, PartialEq)]
/// enum Token {
///     Number(i64),
///     Word(String),
/// }
///
/// let number = |token: Token| match token {
///     Token::Number(value) => Some(value),
///     Token::Word(_) => None,
/// };
///
/// assert_eq!(number.narrow(Token::Number(4)), Some(4));
/// assert_eq!(number.narrow(Token::Word("four".into())), None);
/// ```
pub trait TypeGuard<T, U> {
    /// Returns the narrowed value, or `None` if the guard rejects it.
    fn narrow(self, value: T) -> Option<U>;
}

impl<T, U, F> TypeGuard<T, U> for F
where
    F: FnOnce(T) -> Option<U>,
{
    #[inline]
    fn narrow(self, value: T) -> Option<U> {
        self(value)
    }
}

/// A guard that narrows through [`TryFrom`].
///
/// # Examples
///
/// ```rust
/// use solum::function::{TypeGuard, refine};
///
/// assert_eq!(refine::<u8>().narrow(200_i32), Some(200_u8));
/// assert_eq!(refine::<u8>().narrow(-1_i32), None);
/// ```
pub struct Refine<U> {
    _marker: PhantomData<fn() -> U>,
}

impl<U> Refine<U> {
    /// Creates a guard narrowing into `U`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<U> Default for Refine<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for Refine<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Refine<U> {}

impl<U> std::fmt::Debug for Refine<U> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Refine<{}>", std::any::type_name::<U>())
    }
}

impl<T, U> TypeGuard<T, U> for Refine<U>
where
    U: TryFrom<T>,
{
    #[inline]
    fn narrow(self, value: T) -> Option<U> {
        U::try_from(value).ok()
    }
}

/// Creates a [`Refine`] guard narrowing into `U`.
#[inline]
#[must_use]
pub const fn refine<U>() -> Refine<U> {
    Refine::new()
}

/// Creates a type guard that accepts a single tuple variant of an enum.
///
/// The guard yields the variant's payload and rejects every other variant.
///
/// # Syntax
///
/// ```text
/// guard!(EnumType, Variant)
/// guard!(EnumType<Generics>, Variant)
/// ```
///
/// # Examples
///
/// ```rust
/// use solum::{guard, nullable};
///
/// #[derive(Debug, PartialEq)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// let radius = nullable(Some(Shape::Circle(2.0))).which(guard!(Shape, Circle));
/// assert_eq!(radius.or(0.0), 2.0);
///
/// let none = nullable(Some(Shape::Square(2.0))).which(guard!(Shape, Circle));
/// assert!(none.is_nil());
/// ```
#[macro_export]
macro_rules! guard {
    ($enum_type:ident, $variant:ident) => {
        |source: $enum_type| match source {
            $enum_type::$variant(value) => ::core::option::Option::Some(value),
            #[allow(unreachable_patterns)]
            _ => ::core::option::Option::None,
        }
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        |source: $enum_type<$($generic),+>| match source {
            $enum_type::$variant(value) => ::core::option::Option::Some(value),
            #[allow(unreachable_patterns)]
            _ => ::core::option::Option::None,
        }
    };
}
