//! Record field keys for [`Nullable::pick`](super::Nullable::pick).
//!
//! A key projects one field out of an owned record. Keys are built with the
//! [`key!`](crate::key) macro, with `#[derive(Keys)]`, or by hand through
//! [`Key::new`].
//!
//! # Examples
//!
//! ```
//! use solum::{key, nullable};
//! use solum::nullable::Pick;
//!
//! struct Profile {
//!     name: String,
//!     nickname: Option<String>,
//! }
//!
//! let profile = Profile { name: "Ada".into(), nickname: None };
//! assert_eq!(key!(Profile, name).pick(profile), Some(String::from("Ada")));
//!
//! let profile = Profile { name: "Ada".into(), nickname: None };
//! assert!(nullable(Some(profile)).pick(key!(Profile, ?nickname)).is_nil());
//! ```

use std::marker::PhantomData;

/// Projects a field of type `U` out of a record of type `R`.
///
/// `None` means the field holds the absent marker.
pub trait Pick<R, U> {
    /// Takes the field out of the record.
    fn pick(self, record: R) -> Option<U>;
}

/// A [`Pick`] backed by a getter function.
///
/// # Type Parameters
///
/// - `R`: The record type
/// - `U`: The field type, with any `Option` layer removed
/// - `G`: The getter
pub struct Key<R, U, G>
where
    G: FnOnce(R) -> Option<U>,
{
    getter: G,
    _marker: PhantomData<fn(R) -> U>,
}

impl<R, U, G> Key<R, U, G>
where
    G: FnOnce(R) -> Option<U>,
{
    /// Creates a key from a getter.
    ///
    /// # Example
    ///
    /// ```
    /// use solum::nullable::{Key, Pick};
    ///
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x = Key::new(|point: Point| Some(point.x));
    /// assert_eq!(x.pick(Point { x: 3, y: 4 }), Some(3));
    /// ```
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<R, U, G> Pick<R, U> for Key<R, U, G>
where
    G: FnOnce(R) -> Option<U>,
{
    #[inline]
    fn pick(self, record: R) -> Option<U> {
        (self.getter)(record)
    }
}

impl<R, U, G> Clone for Key<R, U, G>
where
    G: FnOnce(R) -> Option<U> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone())
    }
}

impl<R, U, G> Copy for Key<R, U, G> where G: FnOnce(R) -> Option<U> + Copy {}

impl<R, U, G> std::fmt::Debug for Key<R, U, G>
where
    G: FnOnce(R) -> Option<U>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Key")
            .field("record", &std::any::type_name::<R>())
            .field("field", &std::any::type_name::<U>())
            .finish()
    }
}

/// Creates a [`Key`] for a named field of a struct.
///
/// # Syntax
///
/// ```text
/// key!(StructType, field)    // the field value is always present
/// key!(StructType, ?field)   // an `Option` field; `None` picks as absent
/// ```
///
/// # Examples
///
/// ```
/// use solum::{key, nullable, solum};
///
/// #[derive(Debug, PartialEq)]
/// struct Record { a: i32, b: Option<i32> }
///
/// assert_eq!(nullable(Some(Record { a: 1, b: None })).pick(key!(Record, a)), solum(1));
/// assert!(nullable(Some(Record { a: 1, b: None })).pick(key!(Record, ?b)).is_nil());
/// ```
#[macro_export]
macro_rules! key {
    ($record_type:ty, ?$field:ident) => {
        $crate::nullable::Key::new(|record: $record_type| record.$field)
    };
    ($record_type:ty, $field:ident) => {
        $crate::nullable::Key::new(|record: $record_type| {
            ::core::option::Option::Some(record.$field)
        })
    };
}
