//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Nullable<_>` directly.
//! [`TypeConstructor`] names the payload type and the same constructor applied
//! to another payload, which is enough to state the type classes in this
//! module.
//!
//! # Example
//!
//! ```rust
//! use solum::Nullable;
//! use solum::typeclass::TypeConstructor;
//!
//! fn retype<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Nullable<i32> = Nullable::Solum(42);
//! let retyped: Nullable<String> = retype(present);
//! assert!(retyped.is_nil());
//! ```

use crate::nullable::Nullable;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Nullable<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Nullable<A> {
    type Inner = A;
    type WithType<B> = Nullable<B>;
}
