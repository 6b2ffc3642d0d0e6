//! Values that may be supplied eagerly or through a producer.

/// Marks a [`Value`] or [`Proposition`](super::Proposition) supplied as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eager {}

/// Marks a [`Value`] or [`Proposition`](super::Proposition) supplied through
/// a zero-argument producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {}

/// A `T`, or a zero-argument producer of a `T`.
///
/// The `Kind` parameter is inferred: [`Eager`] for a plain value,
/// [`Deferred`] for anything callable as `FnOnce() -> T`.
///
/// # Examples
///
/// ```rust
/// use solum::function::Value;
///
/// fn resolve<K>(value: impl Value<String, K>) -> String {
///     value.value_of()
/// }
///
/// assert_eq!(resolve(String::from("now")), "now");
/// assert_eq!(resolve(|| String::from("later")), "later");
/// ```
pub trait Value<T, Kind> {
    /// Produces the value, running the producer if there is one.
    fn value_of(self) -> T;
}

impl<T> Value<T, Eager> for T {
    #[inline]
    fn value_of(self) -> T {
        self
    }
}

impl<T, F> Value<T, Deferred> for F
where
    F: FnOnce() -> T,
{
    #[inline]
    fn value_of(self) -> T {
        self()
    }
}

/// Resolves a [`Value`] into the value it stands for.
///
/// # Examples
///
/// ```rust
/// use solum::value_of;
///
/// let eager: i32 = value_of(42);
/// let deferred: i32 = value_of(|| 6 * 7);
/// assert_eq!(eager, deferred);
/// ```
#[inline]
pub fn value_of<T, Kind>(value: impl Value<T, Kind>) -> T {
    value.value_of()
}
