//! Absence markers.
//!
//! Two independent absence channels exist in the optional-value model:
//!
//! - [`Null`]: the *absent marker*, a value that was deliberately left empty
//! - [`Undefined`]: the *no-value marker*, a value that was never supplied
//!
//! [`Absence`] is the union of both. All three are zero-sized (or unit-only)
//! and implement [`std::error::Error`], so a caller that insists on presence
//! can turn an absence into an error and propagate it with `?`.
//!
//! # Examples
//!
//! ```rust
//! use solum::{Absence, Loose, Null, nullable};
//!
//! fn total(price: Option<u32>, quantity: Loose<u32>) -> Result<u32, Absence> {
//!     let price = nullable(price).present()?;
//!     let quantity = quantity.present()?;
//!     Ok(price * quantity)
//! }
//!
//! assert_eq!(total(Some(3), Loose::Value(4)), Ok(12));
//! assert_eq!(total(None, Loose::Value(4)), Err(Absence::Null));
//! assert_eq!(total(Some(3), Loose::Undefined), Err(Absence::Undefined));
//! assert_eq!(Absence::from(Null), Absence::Null);
//! ```

use thiserror::Error;

/// The absent marker: a value that is deliberately empty.
///
/// Every `Nil` compares equal to `Null`, whatever its type parameter, which
/// makes `Null` the shared absent instance of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("value is null")]
pub struct Null;

/// The no-value marker: a value that was never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("value is undefined")]
pub struct Undefined;

/// Either absence marker.
///
/// Produced when both channels are tracked, for example by
/// [`Loose::present`](crate::Loose::present).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum Absence {
    /// The value was deliberately empty.
    #[error("value is null")]
    Null,
    /// The value was never supplied.
    #[error("value is undefined")]
    Undefined,
}

impl Absence {
    /// Returns `true` for [`Absence::Null`].
    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Absence::Undefined`].
    #[inline]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl From<Null> for Absence {
    fn from(_: Null) -> Self {
        Self::Null
    }
}

impl From<Undefined> for Absence {
    fn from(_: Undefined) -> Self {
        Self::Undefined
    }
}
