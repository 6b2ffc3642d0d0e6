//! Type class traits for the optional-value containers.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Alternative`]: Failure and first-success choice
//!
//! Instances are provided for [`Nullable`](crate::Nullable) and
//! [`Identity`]. `Identity` has no failure case, so it is not an
//! `Alternative`.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which lets `Functor` and `Monad` be written once for every container.
//!
//! # Examples
//!
//! ## Using Applicative
//!
//! ```rust
//! use solum::{Nullable, solum};
//! use solum::typeclass::Applicative;
//!
//! let x: Nullable<i32> = <Nullable<()>>::pure(42);
//! assert_eq!(x, solum(42));
//!
//! let sum = solum(1).map2(solum(2), |x, y| x + y);
//! assert_eq!(sum, solum(3));
//! ```
//!
//! ## Writing code generic over the container
//!
//! ```rust
//! use solum::{Nullable, solum};
//! use solum::typeclass::{Functor, Identity};
//!
//! fn increment<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment(solum(1)), solum(2));
//! assert_eq!(increment(Identity(1)), Identity(2));
//!
//! let absent: Nullable<i32> = Nullable::Nil;
//! assert!(increment(absent).is_nil());
//! ```

mod alternative;
mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::{Identity, take};
pub use monad::Monad;
