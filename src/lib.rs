//! # solum
//!
//! A law-abiding optional-value library for Rust.
//!
//! ## Overview
//!
//! The crate models "a value that may be absent" as a closed two-variant
//! container and gives it a chainable, side-effect-free transformation API:
//!
//! - **Nullable**: [`Nullable`] with its variants `Solum` (present) and `Nil`
//!   (absent), the factories [`nullable`], [`solum`], [`nil`] and the chain
//!   operations `onto`, `to`, `pick`, `that`, `which`, `when`, `otherwise`,
//!   `or`, `run` and `lift`
//! - **Value Predicates**: [`is_defined`], [`is_null`], [`is_present`],
//!   [`is_absent`] and their complements over the [`Nullish`] type algebra
//! - **Absence Markers**: [`Null`], [`Undefined`] and [`Absence`], plus the
//!   three-state [`Loose`] domain
//! - **Functional Primitives**: [`Predicate`], [`Unary`], [`TypeGuard`],
//!   [`Proposition`], [`Value`], [`constant`], [`value_of`]
//! - **Type Classes**: Functor, Applicative, Monad and Alternative, together
//!   with the [`Identity`](typeclass::Identity) monad
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the `Identity` monad (default)
//! - `derive`: `#[derive(Keys)]` and `#[derive(Guards)]` (default)
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use solum::prelude::*;
//!
//! let discount = nullable(Some(120_i32))
//!     .that(|price| *price > 100)
//!     .to(|price| price.checked_div(10))
//!     .or(0);
//! assert_eq!(discount, 12);
//!
//! let missing: Nullable<i32> = nullable(None);
//! assert_eq!(missing.onto(|n| solum(n + 1)).or(0), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets the derive macros refer to `::solum` from inside this crate's own tests.
extern crate self as solum;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and factory functions.
///
/// # Usage
///
/// ```rust
/// use solum::prelude::*;
/// ```
pub mod prelude {
    pub use crate::absence::{Absence, Null, Undefined};
    pub use crate::function::*;
    pub use crate::loose::Loose;
    pub use crate::nullable::{Key, Nullable, Pick, nil, nullable, solum};
    pub use crate::predicate::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "derive")]
    pub use solum_derive::{Guards, Keys};
}

pub mod absence;
pub mod function;
pub mod loose;
pub mod nullable;
pub mod predicate;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use absence::{Absence, Null, Undefined};
pub use function::{
    Deferred, Eager, Predicate, Proposition, Refine, TypeGuard, Unary, Value, constant, refine,
    satisfies, value_of,
};
pub use loose::Loose;
pub use nullable::{Nullable, nil, nullable, solum};
pub use predicate::{
    Nullish, is_absent, is_defined, is_not_null, is_null, is_present, is_undefined,
};

#[cfg(feature = "derive")]
pub use solum_derive::{Guards, Keys};

static_assertions::assert_impl_all!(Nullable<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Nullable<String>: Send, Sync, Clone);
static_assertions::assert_eq_size!(Nullable<Box<i32>>, Box<i32>);
static_assertions::assert_eq_size!(Null, ());
static_assertions::assert_eq_size!(Undefined, ());
