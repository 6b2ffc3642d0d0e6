//! Derive macros for solum record keys and variant guards.
//!
//! # Available Derive Macros
//!
//! - [`Keys`]: Generates `pick` keys for struct fields
//! - [`Guards`]: Generates `which` type guards for enum variants
//!
//! # Example: Keys
//!
//! ```rust,ignore
//! use solum::{Keys, nullable, solum};
//!
//! #[derive(Keys)]
//! struct Record {
//!     a: i32,
//!     b: Option<i32>,
//! }
//!
//! // Generated methods:
//! // - Record::a_key() -> impl Pick<Record, i32>
//! // - Record::b_key() -> impl Pick<Record, i32>
//!
//! assert_eq!(nullable(Some(Record { a: 1, b: None })).pick(Record::a_key()), solum(1));
//! assert!(nullable(Some(Record { a: 1, b: None })).pick(Record::b_key()).is_nil());
//! ```
//!
//! # Example: Guards
//!
//! ```rust,ignore
//! use solum::{Guards, solum};
//!
//! #[derive(Guards)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_guard() -> impl TypeGuard<Shape, f64>
//! // - Shape::square_guard() -> impl TypeGuard<Shape, f64>
//!
//! assert_eq!(solum(Shape::Circle(2.0)).which(Shape::circle_guard()), solum(2.0));
//! ```

mod guards;
mod keys;

use proc_macro::TokenStream;

/// Derive macro for generating `pick` keys for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_key() -> impl Pick<StructName, T> + Copy { ... }
/// }
/// ```
///
/// A field declared as `Option<U>` or `Nullable<U>` produces a key of
/// `Pick<StructName, U>`; picking it from a record whose field is absent
/// yields `Nil`.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Keys)]
/// struct Labelled<T> {
///     label: String,
///     value: T,
/// }
///
/// let key = Labelled::<u8>::value_key();
/// ```
#[proc_macro_derive(Keys)]
pub fn derive_keys(input: TokenStream) -> TokenStream {
    keys::derive_keys_impl(input)
}

/// Derive macro for generating `which` type guards for enum variants.
///
/// For each single-field tuple variant `Foo(T)`, generates:
///
/// ```rust,ignore
/// impl EnumName {
///     pub fn foo_guard() -> impl TypeGuard<EnumName, T> + Copy { ... }
/// }
/// ```
///
/// The method name is the variant name in `snake_case`. Unit, struct and
/// multi-field tuple variants are skipped.
#[proc_macro_derive(Guards)]
pub fn derive_guards(input: TokenStream) -> TokenStream {
    guards::derive_guards_impl(input)
}
