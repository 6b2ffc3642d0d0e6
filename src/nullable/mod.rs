//! The `Nullable` optional-value monad.
//!
//! [`Nullable<T>`] is either `Solum(value)` or `Nil`. Every chain operation
//! consumes the container and returns a new one; a `Nil` flows through the
//! rest of the chain without calling any of the supplied functions until a
//! fallback is applied with [`otherwise`](Nullable::otherwise) or
//! [`or`](Nullable::or).
//!
//! # Examples
//!
//! ```rust
//! use solum::{nullable, solum};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Order {
//!     id: u32,
//!     coupon: Option<String>,
//! }
//!
//! let order = Order { id: 7, coupon: Some(String::from("SPRING")) };
//!
//! let code = nullable(Some(order.clone()))
//!     .that(|order| order.id > 0)
//!     .to(|order| order.coupon)
//!     .to(|coupon| coupon.strip_prefix("SP").map(String::from))
//!     .or(String::new());
//! assert_eq!(code, "RING");
//!
//! let skipped = nullable(Some(order))
//!     .when(false)
//!     .onto(|order| solum(order.id));
//! assert!(skipped.is_nil());
//! ```
//!
//! # Laws
//!
//! With `onto` as bind and `solum` as unit:
//!
//! - Left identity: `solum(a).onto(f) == f(a)`
//! - Right identity: `m.onto(solum) == m`
//! - Associativity: `m.onto(f).onto(g) == m.onto(|x| f(x).onto(g))`
//! - Left zero: `nil().onto(f) == nil()`

mod key;

pub use key::{Key, Pick};

use std::fmt;

use crate::absence::Null;
use crate::function::{Proposition, TypeGuard, Value};

/// An optional value: `Solum` when present, `Nil` when absent.
///
/// The derived ordering places `Nil` before every `Solum`.
///
/// # Examples
///
/// ```rust
/// use solum::{Nullable, Null, nil, solum};
///
/// let present: Nullable<i32> = solum(1);
/// let absent: Nullable<i32> = nil();
///
/// assert!(present.is_solum());
/// assert!(absent < present);
/// assert_eq!(absent, Null);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Nullable<T> {
    /// No value.
    #[default]
    Nil,
    /// A present value.
    Solum(T),
}

// =============================================================================
// Construction
// =============================================================================

/// Wraps an optional value, selecting the variant from its presence.
///
/// # Examples
///
/// ```rust
/// use solum::{Nullable, nullable};
///
/// assert_eq!(nullable(Some(3)), Nullable::Solum(3));
/// assert_eq!(nullable(None::<i32>), Nullable::Nil);
/// ```
#[inline]
pub fn nullable<T>(value: Option<T>) -> Nullable<T> {
    Nullable::from(value)
}

/// Wraps a value that is known to be present.
#[inline]
pub const fn solum<T>(value: T) -> Nullable<T> {
    Nullable::Solum(value)
}

/// The absent value, typed for the caller's chain.
///
/// # Examples
///
/// ```rust
/// use solum::{Nullable, nil};
///
/// let empty: Nullable<String> = nil();
/// assert!(empty.is_nil());
/// ```
#[inline]
#[must_use]
pub const fn nil<T>() -> Nullable<T> {
    Nullable::Nil
}

// =============================================================================
// Chain Operations
// =============================================================================

impl<T> Nullable<T> {
    /// Binds the value to a function that itself returns a `Nullable`.
    ///
    /// `Nil` never calls `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{Nullable, nil, solum};
    ///
    /// fn half(n: i32) -> Nullable<i32> {
    ///     if n % 2 == 0 { solum(n / 2) } else { nil() }
    /// }
    ///
    /// assert_eq!(solum(8).onto(half).onto(half), solum(2));
    /// assert!(solum(6).onto(half).onto(half).is_nil());
    /// ```
    #[inline]
    pub fn onto<U, F>(self, function: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Nullable<U>,
    {
        match self {
            Self::Solum(value) => function(value),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Maps the value through a function whose `None` result becomes `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nullable, solum};
    ///
    /// assert_eq!(solum("42").to(|text| text.parse::<u8>().ok()), solum(42));
    /// assert!(solum("x").to(|text| text.parse::<u8>().ok()).is_nil());
    /// assert_eq!(solum(2).to(|n| Some(n * 10)), solum(20));
    /// ```
    #[inline]
    pub fn to<U, F>(self, function: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Solum(value) => nullable(function(value)),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Projects one field of the record held in the container.
    ///
    /// A field holding `None` yields `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{key, nullable, solum};
    ///
    /// struct Address { city: String, zip: Option<u32> }
    ///
    /// let address = Address { city: "Oslo".into(), zip: None };
    /// assert!(nullable(Some(address)).pick(key!(Address, ?zip)).is_nil());
    ///
    /// let address = Address { city: "Oslo".into(), zip: Some(150) };
    /// assert_eq!(nullable(Some(address)).pick(key!(Address, city)), solum(String::from("Oslo")));
    /// ```
    #[inline]
    pub fn pick<U, K>(self, key: K) -> Nullable<U>
    where
        K: Pick<T, U>,
    {
        match self {
            Self::Solum(record) => nullable(key.pick(record)),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// A [`Predicate`](crate::Predicate) that is not a closure goes through
    /// [`satisfies`](crate::satisfies).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    ///
    /// assert_eq!(solum(5).that(|n| *n > 3), solum(5));
    /// assert!(solum(2).that(|n| *n > 3).is_nil());
    /// ```
    #[inline]
    pub fn that<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Solum(value) => {
                if predicate(&value) {
                    Self::Solum(value)
                } else {
                    trace_dropped::<T>("that");
                    Self::Nil
                }
            }
            Self::Nil => Self::Nil,
        }
    }

    /// Keeps the value only if the guard accepts it, narrowing its type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{guard, refine, solum};
    ///
    /// enum Input { Text(String), Number(i64) }
    ///
    /// let text = solum(Input::Text("hi".into())).which(guard!(Input, Text));
    /// assert_eq!(text, solum(String::from("hi")));
    ///
    /// assert_eq!(solum(300_i64).which(refine::<u16>()), solum(300_u16));
    /// assert!(solum(-1_i64).which(refine::<u16>()).is_nil());
    /// ```
    #[inline]
    pub fn which<U, G>(self, guard: G) -> Nullable<U>
    where
        G: TypeGuard<T, U>,
    {
        match self {
            Self::Solum(value) => {
                let narrowed = nullable(guard.narrow(value));
                if narrowed.is_nil() {
                    trace_dropped::<T>("which");
                }
                narrowed
            }
            Self::Nil => Nullable::Nil,
        }
    }

    /// Keeps the value only if the proposition holds.
    ///
    /// The proposition does not see the value, and a deferred proposition is
    /// not evaluated on `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    ///
    /// let verbose = false;
    /// assert!(solum("detail").when(verbose).is_nil());
    /// assert_eq!(solum("detail").when(|| !verbose), solum("detail"));
    /// ```
    #[inline]
    pub fn when<K>(self, proposition: impl Proposition<K>) -> Self {
        match self {
            Self::Solum(value) => {
                if proposition.evaluate() {
                    Self::Solum(value)
                } else {
                    trace_dropped::<T>("when");
                    Self::Nil
                }
            }
            Self::Nil => Self::Nil,
        }
    }

    /// Replaces `Nil` with a fallback; `Solum` passes through untouched.
    ///
    /// The fallback is an `Option<T>` or a producer of one. A producer runs
    /// once, and only on `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum, Nullable};
    ///
    /// let empty: Nullable<i32> = nil();
    /// assert_eq!(empty.otherwise(Some(1)), solum(1));
    /// assert!(empty.otherwise(None).is_nil());
    /// assert_eq!(solum(5).otherwise(|| Some(1)), solum(5));
    /// ```
    #[inline]
    pub fn otherwise<K>(self, fallback: impl Value<Option<T>, K>) -> Self {
        match self {
            Self::Solum(value) => Self::Solum(value),
            Self::Nil => {
                trace_fallback::<T>("otherwise");
                nullable(fallback.value_of())
            }
        }
    }

    /// Leaves the container: the value, or the fallback on `Nil`.
    ///
    /// A producer fallback runs once, and only on `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum, Nullable};
    ///
    /// assert_eq!(solum(3).or(0), 3);
    ///
    /// let empty: Nullable<String> = nil();
    /// assert_eq!(empty.or(|| String::from("guest")), "guest");
    /// ```
    #[inline]
    pub fn or<K>(self, fallback: impl Value<T, K>) -> T {
        match self {
            Self::Solum(value) => value,
            Self::Nil => {
                trace_fallback::<T>("or");
                fallback.value_of()
            }
        }
    }

    /// Runs a procedure on the value for its side effect.
    ///
    /// The container is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    ///
    /// let mut seen = Vec::new();
    /// let same = solum(4).run(|n| seen.push(*n));
    /// assert_eq!(same, solum(4));
    /// assert_eq!(seen, vec![4]);
    /// ```
    #[inline]
    pub fn run<F>(self, procedure: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Solum(value) = &self {
            procedure(value);
        }
        self
    }

    /// Applies a function to the raw optional value, on both variants.
    ///
    /// This is the escape hatch for logic that needs to see absence itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{nil, solum, Nullable};
    ///
    /// let count = |value: Option<&str>| Some(value.map_or(0, str::len));
    /// assert_eq!(solum("abc").lift(count), solum(3));
    ///
    /// let empty: Nullable<&str> = nil();
    /// assert_eq!(empty.lift(count), solum(0));
    /// ```
    #[inline]
    pub fn lift<U, F>(self, function: F) -> Nullable<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        nullable(function(self.into_value()))
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<T> Nullable<T> {
    /// Returns `true` if the value is present.
    #[inline]
    pub const fn is_solum(&self) -> bool {
        matches!(self, Self::Solum(_))
    }

    /// Returns `true` if the value is absent.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Borrows the value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Solum(value) => Some(value),
            Self::Nil => None,
        }
    }

    /// Takes the value out as an `Option`.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Solum(value) => Some(value),
            Self::Nil => None,
        }
    }

    /// Converts from `&Nullable<T>` to `Nullable<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::solum;
    ///
    /// let name = solum(String::from("Ada"));
    /// let length = name.as_ref().to(|text| Some(text.len()));
    /// assert_eq!(length, solum(3));
    /// assert!(name.is_solum());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Solum(value) => Nullable::Solum(value),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Converts from `&mut Nullable<T>` to `Nullable<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Nullable<&mut T> {
        match self {
            Self::Solum(value) => Nullable::Solum(value),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Returns `true` if both containers are the same variant, whatever their
    /// payload types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{Nullable, nil, solum};
    ///
    /// assert!(nil::<i32>().same_variant(&nil::<String>()));
    /// assert!(solum(1).same_variant(&solum("one")));
    /// assert!(!solum(1).same_variant(&nil::<i32>()));
    /// ```
    #[inline]
    pub const fn same_variant<U>(&self, other: &Nullable<U>) -> bool {
        self.is_solum() == other.is_solum()
    }

    /// Iterates over the value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value().into_iter()
    }

    /// Demands the value, reporting absence as [`Null`].
    ///
    /// # Errors
    ///
    /// Returns [`Null`] when the container is `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solum::{Null, nil, solum, Nullable};
    ///
    /// assert_eq!(solum(1).present(), Ok(1));
    /// assert_eq!(nil::<i32>().present(), Err(Null));
    /// ```
    #[inline]
    pub fn present(self) -> Result<T, Null> {
        self.into_value().ok_or(Null)
    }

    /// Returns the value, or `T::default()` on `Nil`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.or(T::default)
    }
}

#[inline]
fn trace_dropped<T>(operation: &'static str) {
    tracing::trace!(
        operation,
        payload = std::any::type_name::<T>(),
        "value dropped from chain"
    );
}

#[inline]
fn trace_fallback<T>(operation: &'static str) {
    tracing::trace!(
        operation,
        payload = std::any::type_name::<T>(),
        "fallback evaluated"
    );
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Nullable<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Solum(value),
            None => Self::Nil,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        value.into_value()
    }
}

impl<T> From<Null> for Nullable<T> {
    #[inline]
    fn from(_: Null) -> Self {
        Self::Nil
    }
}

impl<T> PartialEq<Null> for Nullable<T> {
    #[inline]
    fn eq(&self, _: &Null) -> bool {
        self.is_nil()
    }
}

impl<T> PartialEq<Nullable<T>> for Null {
    #[inline]
    fn eq(&self, other: &Nullable<T>) -> bool {
        other.is_nil()
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solum(value) => write!(formatter, "Solum({value})"),
            Self::Nil => write!(formatter, "Nil"),
        }
    }
}

impl<T> IntoIterator for Nullable<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Nullable<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Nullable<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Solum(value) => serializer.serialize_some(value),
            Self::Nil => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Nullable<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        a: i32,
        b: Option<i32>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Payload {
        Count(u32),
        Label(String),
    }

    fn spy<T, R>(calls: &Cell<usize>, result: R) -> impl FnOnce(T) -> R {
        move |_| {
            calls.set(calls.get() + 1);
            result
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    #[case(Some(1), Nullable::Solum(1))]
    #[case(None, Nullable::Nil)]
    fn nullable_selects_variant(#[case] input: Option<i32>, #[case] expected: Nullable<i32>) {
        assert_eq!(nullable(input), expected);
    }

    #[rstest]
    fn nil_is_default() {
        assert_eq!(Nullable::<String>::default(), nil());
    }

    #[rstest]
    fn solum_keeps_falsy_values() {
        assert!(solum(0).is_solum());
        assert!(solum(false).is_solum());
        assert!(solum(String::new()).is_solum());
    }

    // =========================================================================
    // onto / to / pick
    // =========================================================================

    #[rstest]
    fn onto_binds_solum() {
        assert_eq!(nullable(Some(5)).onto(|x| solum(x + 1)), solum(6));
    }

    #[rstest]
    fn onto_skips_function_on_nil() {
        let calls = Cell::new(0);
        let result = nil::<i32>().onto(spy::<i32, _>(&calls, solum(1)));
        assert!(result.is_nil());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Some(4), Nullable::Solum(2))]
    #[case(Some(0), Nullable::Nil)]
    #[case(None, Nullable::Nil)]
    fn to_selects_variant_from_result(#[case] input: Option<i32>, #[case] expected: Nullable<i32>) {
        assert_eq!(nullable(input).to(|n| 8_i32.checked_div(n)), expected);
    }

    #[rstest]
    fn pick_projects_field() {
        let record = Record { a: 1, b: None };
        assert_eq!(nullable(Some(record)).pick(crate::key!(Record, a)), solum(1));
    }

    #[rstest]
    #[case(Some(9), Nullable::Solum(9))]
    #[case(None, Nullable::Nil)]
    fn pick_optional_field(#[case] b: Option<i32>, #[case] expected: Nullable<i32>) {
        let record = Record { a: 1, b };
        assert_eq!(solum(record).pick(crate::key!(Record, ?b)), expected);
    }

    #[rstest]
    fn pick_on_nil_is_nil() {
        assert!(nil::<Record>().pick(crate::key!(Record, a)).is_nil());
    }

    // =========================================================================
    // that / which / when
    // =========================================================================

    #[rstest]
    #[case(10, true)]
    #[case(3, false)]
    fn that_filters(#[case] value: i32, #[case] kept: bool) {
        assert_eq!(solum(value).that(|n| *n > 5).is_solum(), kept);
    }

    #[rstest]
    fn that_skips_predicate_on_nil() {
        let calls = Cell::new(0);
        let result = nil::<i32>().that(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(result.is_nil());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Payload::Count(3), Nullable::Solum(3))]
    #[case(Payload::Label(String::from("x")), Nullable::Nil)]
    fn which_narrows(#[case] payload: Payload, #[case] expected: Nullable<u32>) {
        assert_eq!(solum(payload).which(crate::guard!(Payload, Count)), expected);
    }

    #[rstest]
    fn which_skips_guard_on_nil() {
        let calls = Cell::new(0);
        let result = nil::<i32>().which(spy::<i32, _>(&calls, Some(1_u8)));
        assert!(result.is_nil());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn when_skips_proposition_on_nil() {
        let calls = Cell::new(0);
        let result = nil::<i32>().when(|| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(result.is_nil());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(true, Nullable::Solum(1))]
    #[case(false, Nullable::Nil)]
    fn when_gates_on_proposition(#[case] condition: bool, #[case] expected: Nullable<i32>) {
        assert_eq!(solum(1).when(condition), expected);
        assert_eq!(solum(1).when(move || condition), expected);
    }

    // =========================================================================
    // otherwise / or
    // =========================================================================

    #[rstest]
    fn otherwise_runs_producer_once_on_nil() {
        let calls = Cell::new(0);
        let result = nil::<i32>().otherwise(|| {
            calls.set(calls.get() + 1);
            Some(2)
        });
        assert_eq!(result, solum(2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn otherwise_never_runs_producer_on_solum() {
        let calls = Cell::new(0);
        let result = solum(1).otherwise(|| {
            calls.set(calls.get() + 1);
            Some(2)
        });
        assert_eq!(result, solum(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn otherwise_with_absent_fallback_stays_nil() {
        assert!(nil::<i32>().otherwise(None).is_nil());
        assert!(nil::<i32>().otherwise(|| None).is_nil());
    }

    #[rstest]
    fn or_returns_value_or_fallback() {
        assert_eq!(solum(3).or(0), 3);
        assert_eq!(nil::<i32>().or(0), 0);
    }

    #[rstest]
    fn or_runs_producer_only_on_nil() {
        let calls = Cell::new(0);
        let producer = || {
            calls.set(calls.get() + 1);
            7
        };
        assert_eq!(solum(3).or(producer), 3);
        assert_eq!(calls.get(), 0);
        assert_eq!(nil::<i32>().or(producer), 7);
        assert_eq!(calls.get(), 1);
    }

    // =========================================================================
    // run / lift
    // =========================================================================

    #[rstest]
    fn run_sees_value_once() {
        let mut seen = Vec::new();
        let result = solum(4).run(|n| seen.push(*n));
        assert_eq!(result, solum(4));
        assert_eq!(seen, vec![4]);
    }

    #[rstest]
    fn run_skips_procedure_on_nil() {
        let calls = Cell::new(0);
        let result = nil::<i32>().run(|_| calls.set(calls.get() + 1));
        assert!(result.is_nil());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Some(2), Nullable::Solum(3))]
    #[case(None, Nullable::Solum(0))]
    fn lift_sees_both_variants(#[case] input: Option<i32>, #[case] expected: Nullable<i32>) {
        let result = nullable(input).lift(|value| Some(value.map_or(0, |n| n + 1)));
        assert_eq!(result, expected);
    }

    #[rstest]
    fn lift_can_discard_value() {
        assert!(solum(1).lift(|_: Option<i32>| None::<i32>).is_nil());
    }

    // =========================================================================
    // Accessors and conversions
    // =========================================================================

    #[rstest]
    fn accessors_report_variant() {
        let present = solum(1);
        let absent = nil::<i32>();
        assert_eq!(present.value(), Some(&1));
        assert_eq!(absent.value(), None);
        assert_eq!(present.into_value(), Some(1));
        assert_eq!(absent.into_value(), None);
    }

    #[rstest]
    fn as_mut_edits_in_place() {
        let mut counter = solum(1);
        if let Nullable::Solum(value) = counter.as_mut() {
            *value += 1;
        }
        assert_eq!(counter, solum(2));
    }

    #[rstest]
    fn nil_equals_null_for_any_payload() {
        assert_eq!(nil::<i32>(), Null);
        assert_eq!(Null, nil::<String>());
        assert_ne!(solum(0), Null);
    }

    #[rstest]
    fn same_variant_ignores_payload_type() {
        assert!(nil::<i32>().same_variant(&nil::<&str>()));
        assert!(!nil::<i32>().same_variant(&solum("x")));
    }

    #[rstest]
    fn present_reports_null() {
        assert_eq!(solum("v").present(), Ok("v"));
        assert_eq!(nil::<&str>().present(), Err(Null));
    }

    #[rstest]
    fn option_conversions() {
        let back: Option<i32> = solum(1).into();
        assert_eq!(back, Some(1));
        assert_eq!(Nullable::<i32>::from(Null), Nullable::Nil);
        assert_eq!(Nullable::from(Some('c')), solum('c'));
    }

    #[rstest]
    fn iteration_yields_at_most_one() {
        assert_eq!(solum(5).into_iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(nil::<i32>().iter().count(), 0);
        let borrowed = solum(String::from("a"));
        let mut seen = Vec::new();
        for value in &borrowed {
            seen.push(value.clone());
        }
        assert_eq!(seen, vec![String::from("a")]);
    }

    #[rstest]
    #[case(Nullable::Solum(5), "Solum(5)")]
    #[case(Nullable::Nil, "Nil")]
    fn display(#[case] value: Nullable<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn nil_orders_before_solum() {
        assert!(nil::<i32>() < solum(i32::MIN));
        assert!(solum(1) < solum(2));
    }

    #[rstest]
    fn unwrap_or_default_uses_default() {
        assert_eq!(nil::<String>().unwrap_or_default(), "");
        assert_eq!(solum(3_u8).unwrap_or_default(), 3);
    }
}
