//! Value predicates and the presence type algebra.
//!
//! The [`Nullish`] trait describes a type whose values may carry one or both
//! absence markers. Its associated types are the type-level narrowings:
//!
//! | Alias | Meaning |
//! |---|---|
//! | [`Defined<V>`] | `V` without the no-value marker |
//! | [`NotNull<V>`] | `V` without the absent marker |
//! | [`Present<V>`] | `V` without either marker |
//! | [`Absent<V>`] | the markers `V` can carry |
//!
//! The free functions are total classifiers over any `Nullish` value:
//!
//! - [`is_defined`] / [`is_undefined`]: the no-value channel
//! - [`is_null`] / [`is_not_null`]: the absent-marker channel
//! - [`is_present`] / [`is_absent`]: both channels together
//!
//! # Examples
//!
//! ```rust
//! use solum::{Loose, Null, Undefined, is_absent, is_defined, is_null, is_present};
//!
//! assert!(is_present(&Some(1)));
//! assert!(is_null(&None::<i32>));
//! assert!(is_defined(&Null));
//! assert!(!is_defined(&Undefined));
//! assert!(is_absent(&Loose::<i32>::Undefined));
//! ```

use std::convert::Infallible;

use crate::absence::{Absence, Null, Undefined};
use crate::loose::Loose;
use crate::nullable::Nullable;

/// A type whose values may carry the absent marker, the no-value marker, or both.
///
/// # Laws
///
/// For every value `v`:
///
/// 1. **Exclusive**: exactly one of `is_present(v)`, `is_null(v)`,
///    `is_undefined(v)` holds.
/// 2. **Classification**: `v.classify().is_ok() == is_present(&v)`.
pub trait Nullish {
    /// The type with the no-value marker removed.
    type Defined;
    /// The type with the absent marker removed.
    type NotNull;
    /// The type with both markers removed.
    type Present;
    /// The absence markers a value of this type can carry.
    type Absent;

    /// Returns `true` if the value carries the no-value marker.
    fn is_undefined(&self) -> bool;

    /// Returns `true` if the value carries the absent marker.
    fn is_null(&self) -> bool;

    /// Splits the value into its present payload or its absence marker.
    ///
    /// # Errors
    ///
    /// Returns the absence marker the value carries when it is not present.
    fn classify(self) -> Result<Self::Present, Self::Absent>
    where
        Self: Sized;

    /// Narrows to [`Defined<Self>`], or `None` when the value is undefined.
    fn defined(self) -> Option<Self::Defined>
    where
        Self: Sized;

    /// Narrows to [`NotNull<Self>`], or `None` when the value is null.
    fn not_null(self) -> Option<Self::NotNull>
    where
        Self: Sized;
}

/// `V` with the no-value marker removed.
pub type Defined<V> = <V as Nullish>::Defined;

/// `V` with the absent marker removed.
pub type NotNull<V> = <V as Nullish>::NotNull;

/// `V` with both absence markers removed.
pub type Present<V> = <V as Nullish>::Present;

/// The absence markers `V` can carry.
pub type Absent<V> = <V as Nullish>::Absent;

/// Returns `true` unless the value carries the no-value marker.
#[inline]
pub fn is_defined<V: Nullish + ?Sized>(value: &V) -> bool {
    !value.is_undefined()
}

/// Returns `true` if the value carries the no-value marker.
#[inline]
pub fn is_undefined<V: Nullish + ?Sized>(value: &V) -> bool {
    value.is_undefined()
}

/// Returns `true` if the value carries the absent marker.
#[inline]
pub fn is_null<V: Nullish + ?Sized>(value: &V) -> bool {
    value.is_null()
}

/// Returns `true` unless the value carries the absent marker.
#[inline]
pub fn is_not_null<V: Nullish + ?Sized>(value: &V) -> bool {
    !value.is_null()
}

/// Returns `true` if the value carries neither absence marker.
#[inline]
pub fn is_present<V: Nullish + ?Sized>(value: &V) -> bool {
    is_defined(value) && is_not_null(value)
}

/// Returns `true` if the value carries either absence marker.
#[inline]
pub fn is_absent<V: Nullish + ?Sized>(value: &V) -> bool {
    !is_present(value)
}

// =============================================================================
// Option<T>: `None` is the absent marker
// =============================================================================

impl<T> Nullish for Option<T> {
    type Defined = Self;
    type NotNull = T;
    type Present = T;
    type Absent = Null;

    #[inline]
    fn is_undefined(&self) -> bool {
        false
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn classify(self) -> Result<T, Null> {
        self.ok_or(Null)
    }

    #[inline]
    fn defined(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn not_null(self) -> Option<T> {
        self
    }
}

// =============================================================================
// Nullable<T>: `Nil` is the absent marker
// =============================================================================

impl<T> Nullish for Nullable<T> {
    type Defined = Self;
    type NotNull = T;
    type Present = T;
    type Absent = Null;

    #[inline]
    fn is_undefined(&self) -> bool {
        false
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_nil()
    }

    #[inline]
    fn classify(self) -> Result<T, Null> {
        self.present()
    }

    #[inline]
    fn defined(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn not_null(self) -> Option<T> {
        self.into_value()
    }
}

// =============================================================================
// Loose<T>: both channels
// =============================================================================

impl<T> Nullish for Loose<T> {
    /// `None` stands for the absent marker.
    type Defined = Option<T>;
    /// `None` stands for the no-value marker.
    type NotNull = Option<T>;
    type Present = T;
    type Absent = Absence;

    #[inline]
    fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    fn classify(self) -> Result<T, Absence> {
        self.present()
    }

    #[inline]
    fn defined(self) -> Option<Option<T>> {
        match self {
            Self::Value(value) => Some(Some(value)),
            Self::Null => Some(None),
            Self::Undefined => None,
        }
    }

    #[inline]
    fn not_null(self) -> Option<Option<T>> {
        match self {
            Self::Value(value) => Some(Some(value)),
            Self::Undefined => Some(None),
            Self::Null => None,
        }
    }
}

// =============================================================================
// The markers themselves
// =============================================================================

impl Nullish for Null {
    type Defined = Self;
    type NotNull = Infallible;
    type Present = Infallible;
    type Absent = Self;

    #[inline]
    fn is_undefined(&self) -> bool {
        false
    }

    #[inline]
    fn is_null(&self) -> bool {
        true
    }

    #[inline]
    fn classify(self) -> Result<Infallible, Self> {
        Err(self)
    }

    #[inline]
    fn defined(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn not_null(self) -> Option<Infallible> {
        None
    }
}

impl Nullish for Undefined {
    type Defined = Infallible;
    type NotNull = Self;
    type Present = Infallible;
    type Absent = Self;

    #[inline]
    fn is_undefined(&self) -> bool {
        true
    }

    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    #[inline]
    fn classify(self) -> Result<Infallible, Self> {
        Err(self)
    }

    #[inline]
    fn defined(self) -> Option<Infallible> {
        None
    }

    #[inline]
    fn not_null(self) -> Option<Self> {
        Some(self)
    }
}

impl Nullish for Absence {
    type Defined = Null;
    type NotNull = Undefined;
    type Present = Infallible;
    type Absent = Self;

    #[inline]
    fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    fn classify(self) -> Result<Infallible, Self> {
        Err(self)
    }

    #[inline]
    fn defined(self) -> Option<Null> {
        matches!(self, Self::Null).then_some(Null)
    }

    #[inline]
    fn not_null(self) -> Option<Undefined> {
        matches!(self, Self::Undefined).then_some(Undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn loose_cases() -> [Loose<i32>; 3] {
        [Loose::Value(0), Loose::Null, Loose::Undefined]
    }

    #[rstest]
    #[case(Loose::Value(0), true, true, true)]
    #[case(Loose::Null, true, false, false)]
    #[case(Loose::Undefined, false, true, false)]
    fn loose_predicates(
        #[case] value: Loose<i32>,
        #[case] defined: bool,
        #[case] not_null: bool,
        #[case] present: bool,
    ) {
        assert_eq!(is_defined(&value), defined);
        assert_eq!(is_undefined(&value), !defined);
        assert_eq!(is_not_null(&value), not_null);
        assert_eq!(is_null(&value), !not_null);
        assert_eq!(is_present(&value), present);
        assert_eq!(is_absent(&value), !present);
    }

    #[rstest]
    fn loose_classification_is_exclusive() {
        for value in loose_cases() {
            let flags = [is_present(&value), is_null(&value), is_undefined(&value)];
            assert_eq!(flags.iter().filter(|flag| **flag).count(), 1);
        }
    }

    #[rstest]
    fn zero_is_present_not_falsy() {
        assert!(is_present(&Some(0)));
        assert!(is_present(&Some(false)));
        assert!(is_present(&Some("")));
    }

    #[rstest]
    #[case(Some(3), true)]
    #[case(None, false)]
    fn option_predicates(#[case] value: Option<i32>, #[case] present: bool) {
        assert!(is_defined(&value));
        assert_eq!(is_null(&value), !present);
        assert_eq!(is_present(&value), present);
    }

    #[rstest]
    fn nullable_predicates() {
        assert!(is_present(&Nullable::Solum(1)));
        assert!(is_null(&Nullable::<i32>::Nil));
        assert!(is_defined(&Nullable::<i32>::Nil));
    }

    #[rstest]
    fn marker_predicates() {
        assert!(is_null(&Null));
        assert!(is_defined(&Null));
        assert!(is_undefined(&Undefined));
        assert!(is_not_null(&Undefined));
        assert!(is_absent(&Absence::Null));
        assert!(is_absent(&Absence::Undefined));
    }

    #[rstest]
    #[case(Loose::Value(1), Ok(1))]
    #[case(Loose::Null, Err(Absence::Null))]
    #[case(Loose::Undefined, Err(Absence::Undefined))]
    fn loose_classify(#[case] value: Loose<i32>, #[case] expected: Result<i32, Absence>) {
        assert_eq!(value.classify(), expected);
    }

    #[rstest]
    #[case(Loose::Value(1), Some(Some(1)))]
    #[case(Loose::Null, Some(None))]
    #[case(Loose::Undefined, None)]
    fn loose_defined_removes_undefined(
        #[case] value: Loose<i32>,
        #[case] expected: Option<Option<i32>>,
    ) {
        assert_eq!(value.defined(), expected);
    }

    #[rstest]
    #[case(Loose::Value(1), Some(Some(1)))]
    #[case(Loose::Null, None)]
    #[case(Loose::Undefined, Some(None))]
    fn loose_not_null_removes_null(
        #[case] value: Loose<i32>,
        #[case] expected: Option<Option<i32>>,
    ) {
        assert_eq!(value.not_null(), expected);
    }

    #[rstest]
    fn option_classify() {
        assert_eq!(Some(2).classify(), Ok(2));
        assert_eq!(None::<i32>.classify(), Err(Null));
        assert_eq!(None::<i32>.not_null(), None);
        assert_eq!(None::<i32>.defined(), Some(None));
    }

    #[rstest]
    fn marker_narrowings() {
        assert_eq!(Null.defined(), Some(Null));
        assert!(Null.not_null().is_none());
        assert!(Undefined.defined().is_none());
        assert_eq!(Undefined.not_null(), Some(Undefined));
        assert_eq!(Absence::Null.defined(), Some(Null));
        assert_eq!(Absence::Undefined.not_null(), Some(Undefined));
        assert!(Absence::Null.not_null().is_none());
    }

    #[test]
    fn type_algebra_narrows_statically() {
        fn assert_present<V: Nullish<Present = i32>>() {}
        fn assert_absent<V: Nullish<Absent = Absence>>() {}

        assert_present::<Option<i32>>();
        assert_present::<Nullable<i32>>();
        assert_present::<Loose<i32>>();
        assert_absent::<Loose<i32>>();

        let narrowed: Present<Loose<u8>> = 7u8;
        let defined: Defined<Option<u8>> = None;
        let not_null: NotNull<Nullable<u8>> = 1u8;
        let absent: Absent<Option<u8>> = Null;
        assert_eq!((narrowed, defined, not_null, absent), (7, None, 1, Null));
    }
}
