use core::borrow::Borrow;

use crate::error::Result;

/// Read-only set predicates over a view.
///
/// The `other` side of every predicate is any iterable of `T` (owned or
/// borrowed). It is treated as a multiset: duplicates are allowed and order
/// never affects the answer. Each predicate makes at most one pass over
/// `other` and stops as soon as the answer is known.
///
/// Predicates return [`Error::NullReference`](crate::Error::NullReference)
/// when the view must compare against a value that is absent.
pub trait SetView<T> {
    fn contains(&self, item: &T) -> Result<bool>;

    fn overlaps<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn is_subset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn is_superset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn set_equals<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn is_proper_subset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn is_proper_superset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;
}
