//! Functional primitives consumed by the chain API.
//!
//! - [`Predicate`]: a boolean test over a borrowed value
//! - [`Unary`]: a single-argument function
//! - [`TypeGuard`]: a test that also narrows the type on success
//! - [`Proposition`]: a boolean, or a zero-argument producer of one
//! - [`Value`]: a value, or a zero-argument producer of one
//!
//! # Laziness
//!
//! `Proposition` and `Value` are evaluated only when their consumer needs the
//! result, and at most once. Passing a closure defers the work; passing a
//! plain value hands it over as is. The marker types [`Eager`] and
//! [`Deferred`] keep the two forms apart for the type checker and never need
//! to be named by callers.
//!
//! # Examples
//!
//! ```rust
//! use solum::function::{Proposition, Value, value_of};
//!
//! let eager: i32 = value_of(3);
//! let deferred: i32 = value_of(|| 3);
//! assert_eq!(eager, deferred);
//!
//! assert!(true.evaluate());
//! assert!((|| 1 < 2).evaluate());
//! ```

mod combinator;
mod guard;
mod proposition;
mod value;

pub use combinator::{
    Predicate, Unary, both, compose, constant, either, identity, negate, satisfies,
};
pub use guard::{Refine, TypeGuard, refine};
pub use proposition::Proposition;
pub use value::{Deferred, Eager, Value, value_of};
