//! A view over no values at all.
//!
//! `EmptyView<T>` is zero-sized and carries no state, so every instance is
//! interchangeable with [`EmptyView::INSTANCE`]. It never inspects a `T`, which
//! is why none of its impls put bounds on `T` and none of its predicates can
//! fail.

use core::{
    any::Any,
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    iter::{self, Empty},
    marker::PhantomData,
};

use crate::{
    error::{Error, Result},
    traits::{Collection, Release, Sequence, SetView, Tuple},
};

/// An immutable view holding no values.
pub struct EmptyView<T> {
    _marker: PhantomData<fn() -> T>,
}

static_assertions::assert_eq_size!(EmptyView<u128>, ());
static_assertions::assert_impl_all!(EmptyView<core::cell::Cell<u8>>: Send, Sync, Copy);

impl<T> EmptyView<T> {
    /// The shared empty view for `T`.
    pub const INSTANCE: Self = EmptyView {
        _marker: PhantomData,
    };

    pub const fn new() -> Self {
        Self::INSTANCE
    }

    pub fn iter(&self) -> Empty<&T> {
        iter::empty()
    }
}

// --- Manual impls to avoid bounds on T ---

impl<T> Clone for EmptyView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyView<T> {}

impl<T> Default for EmptyView<T> {
    fn default() -> Self {
        Self::INSTANCE
    }
}

impl<T> PartialEq for EmptyView<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for EmptyView<T> {}

impl<T> Hash for EmptyView<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T> fmt::Debug for EmptyView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyView")
            .field("element_type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<T> fmt::Display for EmptyView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

// --- Conversions ---

impl<T> From<()> for EmptyView<T> {
    fn from((): ()) -> Self {
        Self::INSTANCE
    }
}

impl<T> From<EmptyView<T>> for () {
    fn from(_: EmptyView<T>) -> Self {}
}

// --- Collection / Sequence ---

impl<T> Collection<T> for EmptyView<T> {
    type Iter<'a>
        = Empty<&'a T>
    where
        Self: 'a,
        T: 'a;

    fn count(&self) -> usize {
        0
    }

    fn iter(&self) -> Self::Iter<'_> {
        iter::empty()
    }
}

impl<T> Sequence<T> for EmptyView<T> {
    fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    fn as_slice(&self) -> &[T] {
        &[]
    }
}

impl<T> IntoIterator for EmptyView<T> {
    type Item = T;
    type IntoIter = Empty<T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl<'a, T> IntoIterator for &'a EmptyView<T> {
    type Item = &'a T;
    type IntoIter = Empty<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

// --- SetView ---

impl<T> SetView<T> for EmptyView<T> {
    fn contains(&self, _item: &T) -> Result<bool> {
        Ok(false)
    }

    fn overlaps<I>(&self, _other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Ok(false)
    }

    fn is_subset_of<I>(&self, _other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Ok(true)
    }

    fn is_superset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Ok(other.into_iter().next().is_none())
    }

    fn set_equals<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.is_superset_of(other)
    }

    fn is_proper_subset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Ok(other.into_iter().next().is_some())
    }

    fn is_proper_superset_of<I>(&self, _other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Ok(false)
    }
}

// --- Tuple / Release ---

impl<T> Tuple for EmptyView<T> {
    const ARITY: usize = 0;

    fn item(&self, index: usize) -> Result<&dyn Any> {
        Err(Error::out_of_range(index, 0))
    }
}

impl<T> Release for EmptyView<T> {
    fn release(&self) {}
}
