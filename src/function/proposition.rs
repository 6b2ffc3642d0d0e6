//! Boolean propositions that may be deferred.

use super::value::{Deferred, Eager};

/// A boolean, or a zero-argument producer of one.
///
/// A proposition never sees the value it guards; it states a condition about
/// the surrounding world.
///
/// # Examples
///
/// ```rust
/// use solum::function::Proposition;
///
/// fn holds<K>(proposition: impl Proposition<K>) -> bool {
///     proposition.evaluate()
/// }
///
/// let enabled = true;
/// assert!(holds(enabled));
/// assert!(!holds(|| enabled && false));
/// ```
pub trait Proposition<Kind> {
    /// Evaluates the proposition, running the producer if there is one.
    fn evaluate(self) -> bool;
}

impl Proposition<Eager> for bool {
    #[inline]
    fn evaluate(self) -> bool {
        self
    }
}

impl<F> Proposition<Deferred> for F
where
    F: FnOnce() -> bool,
{
    #[inline]
    fn evaluate(self) -> bool {
        self()
    }
}
