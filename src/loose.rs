//! The three-state `value | null | undefined` domain.
//!
//! [`Loose<T>`] keeps both absence channels apart at run time: a value that
//! was never supplied ([`Loose::Undefined`]) is not the same as a value that
//! was deliberately left empty ([`Loose::Null`]). It is the input domain of
//! the value predicates when both channels matter, for example when decoding
//! partial updates where "leave unchanged" and "clear" differ.
//!
//! # Examples
//!
//! ```rust
//! use solum::{Loose, is_defined, is_null, is_present};
//!
//! let cleared: Loose<&str> = Loose::Null;
//! assert!(is_defined(&cleared));
//! assert!(is_null(&cleared));
//! assert!(!is_present(&cleared));
//!
//! let untouched: Loose<&str> = Loose::Undefined;
//! assert!(!is_defined(&untouched));
//! assert!(!is_null(&untouched));
//! ```

use std::fmt;

use crate::absence::{Absence, Null, Undefined};
use crate::nullable::Nullable;

/// A value that may be present, deliberately empty, or never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Loose<T> {
    /// No value was supplied.
    #[default]
    Undefined,
    /// The value was deliberately left empty.
    Null,
    /// A present value.
    Value(T),
}

impl<T> Loose<T> {
    /// Returns `true` if this is a [`Loose::Value`].
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the present value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Null | Self::Undefined => None,
        }
    }

    /// Converts `&Loose<T>` into `Loose<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Loose<&T> {
        match self {
            Self::Value(value) => Loose::Value(value),
            Self::Null => Loose::Null,
            Self::Undefined => Loose::Undefined,
        }
    }

    /// Maps the present value, keeping either absence as it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::Loose;
    ///
    /// assert_eq!(Loose::Value(2).map(|n| n * 10), Loose::Value(20));
    /// assert_eq!(Loose::<i32>::Null.map(|n| n * 10), Loose::Null);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Loose<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Loose::Value(function(value)),
            Self::Null => Loose::Null,
            Self::Undefined => Loose::Undefined,
        }
    }

    /// Returns the present value or the absence that stands in its place.
    ///
    /// # Errors
    ///
    /// Returns [`Absence::Null`] or [`Absence::Undefined`] when no value is
    /// present.
    #[inline]
    pub fn present(self) -> Result<T, Absence> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Null => Err(Absence::Null),
            Self::Undefined => Err(Absence::Undefined),
        }
    }

    /// Collapses both absence channels into `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{Loose, Null};
    ///
    /// assert_eq!(Loose::Value(1).into_nullable().or(0), 1);
    /// assert_eq!(Loose::<i32>::Undefined.into_nullable(), Null);
    /// ```
    #[inline]
    pub fn into_nullable(self) -> Nullable<T> {
        match self {
            Self::Value(value) => Nullable::Solum(value),
            Self::Null | Self::Undefined => Nullable::Nil,
        }
    }
}

impl<T> From<Option<T>> for Loose<T> {
    /// `None` is the absent marker, so it becomes [`Loose::Null`].
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T> From<Nullable<T>> for Loose<T> {
    fn from(value: Nullable<T>) -> Self {
        match value {
            Nullable::Solum(value) => Self::Value(value),
            Nullable::Nil => Self::Null,
        }
    }
}

impl<T> From<Null> for Loose<T> {
    fn from(_: Null) -> Self {
        Self::Null
    }
}

impl<T> From<Undefined> for Loose<T> {
    fn from(_: Undefined) -> Self {
        Self::Undefined
    }
}

impl<T> From<Absence> for Loose<T> {
    fn from(absence: Absence) -> Self {
        match absence {
            Absence::Null => Self::Null,
            Absence::Undefined => Self::Undefined,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Loose<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "{value}"),
            Self::Null => write!(formatter, "null"),
            Self::Undefined => write!(formatter, "undefined"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Loose<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Null | Self::Undefined => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Loose<T>
where
    T: serde::Deserialize<'de>,
{
    /// An explicit `null` deserializes as [`Loose::Null`]. A missing field
    /// becomes [`Loose::Undefined`] when the field is marked
    /// `#[serde(default)]`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
