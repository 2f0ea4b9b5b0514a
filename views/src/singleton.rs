//! A view over exactly one value.
//!
//! `SingletonView<T>` is a transparent wrapper around a single `T`. It answers
//! every capability trait as a collection of one element, equal to the held
//! value. The value is fixed at construction; copying the view copies the
//! value according to `T`'s own `Clone`/`Copy`.
//!
//! # Absent values
//!
//! When `T` is [`Nullable`] (e.g. `Option<U>`), the held value may be absent.
//! Operations that must compare or render the value fail with
//! [`Error::NullReference`] in that case. Indexing, counting, iteration and
//! tuple access never look at the value, so they never fail for that reason.
//!
//! # Example
//!
//! ```
//! use nilet_views::{Error, SingletonView};
//! use nilet_views::traits::{Sequence, SetView};
//!
//! let view = SingletonView::new(5);
//! assert_eq!(view.to_string(), "(5)");
//! assert_eq!(view.at(1), Err(Error::OutOfRange { index: 1, len: 1 }));
//! assert_eq!(view.is_proper_subset_of([5, 7]), Ok(true));
//!
//! let absent = SingletonView::new(None::<&str>);
//! assert_eq!(absent.try_to_string(), Err(Error::NullReference));
//! ```

use alloc::{format, string::String};
use core::{
    any::Any,
    borrow::Borrow,
    fmt,
    iter::{self, Once},
    ops::Index,
    slice,
};

use crate::{
    error::{Error, Result},
    nullable::Nullable,
    traits::{Collection, Release, Sequence, SetView, Tuple},
};

/// An immutable view holding exactly one value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct SingletonView<T> {
    value: T,
}

static_assertions::assert_eq_size!(SingletonView<u64>, u64);
static_assertions::assert_eq_size!(SingletonView<[u8; 3]>, [u8; 3]);
static_assertions::assert_impl_all!(SingletonView<u32>: Send, Sync, Copy);

impl<T> SingletonView<T> {
    /// Wraps `value` as-is.
    pub const fn new(value: T) -> Self {
        SingletonView { value }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the held value.
    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn iter(&self) -> Once<&T> {
        iter::once(&self.value)
    }
}

impl<T: Nullable> SingletonView<T> {
    /// Returns the held value, failing if it is absent.
    fn present(&self, operation: &'static str) -> Result<&T::Inner> {
        self.value
            .as_present()
            .ok_or_else(|| Error::null_reference(operation))
    }

    /// Renders the view as `(value)`.
    ///
    /// Fails with [`Error::NullReference`] when the value is absent. The
    /// [`Display`](fmt::Display) impl follows the same rule by returning
    /// [`fmt::Error`], so `to_string()` panics on an absent value.
    pub fn try_to_string(&self) -> Result<String>
    where
        T::Inner: fmt::Display,
    {
        let inner = self.present("display")?;
        Ok(format!("({inner})"))
    }
}

// --- Conversions ---

impl<T> From<T> for SingletonView<T> {
    fn from(value: T) -> Self {
        SingletonView::new(value)
    }
}

impl<T> From<(T,)> for SingletonView<T> {
    fn from((value,): (T,)) -> Self {
        SingletonView::new(value)
    }
}

impl<T> From<SingletonView<T>> for (T,) {
    fn from(view: SingletonView<T>) -> Self {
        (view.value,)
    }
}

impl<T> fmt::Display for SingletonView<T>
where
    T: Nullable,
    T::Inner: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.present("display").map_err(|_| fmt::Error)?;
        write!(f, "({inner})")
    }
}

// --- Collection / Sequence ---

impl<T> Collection<T> for SingletonView<T> {
    type Iter<'a>
        = Once<&'a T>
    where
        Self: 'a,
        T: 'a;

    fn count(&self) -> usize {
        1
    }

    fn iter(&self) -> Self::Iter<'_> {
        iter::once(&self.value)
    }
}

impl<T> Sequence<T> for SingletonView<T> {
    fn get(&self, index: usize) -> Option<&T> {
        (index == 0).then_some(&self.value)
    }

    fn as_slice(&self) -> &[T] {
        slice::from_ref(&self.value)
    }
}

impl<T> Index<usize> for SingletonView<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IntoIterator for SingletonView<T> {
    type Item = T;
    type IntoIter = Once<T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.value)
    }
}

impl<'a, T> IntoIterator for &'a SingletonView<T> {
    type Item = &'a T;
    type IntoIter = Once<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(&self.value)
    }
}

// --- SetView ---

impl<T: Nullable + PartialEq> SingletonView<T> {
    /// The held value, once it is known to be present.
    fn comparable(&self, operation: &'static str) -> Result<&T> {
        self.present(operation)?;
        Ok(&self.value)
    }
}

fn same<T: PartialEq, P: Borrow<T>>(value: &T, item: &P) -> bool {
    value == <P as Borrow<T>>::borrow(item)
}

impl<T: Nullable + PartialEq> SetView<T> for SingletonView<T> {
    fn contains(&self, item: &T) -> Result<bool> {
        let value = self.comparable("contains")?;
        Ok(value == item)
    }

    fn overlaps<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.is_subset_of(other)
    }

    fn is_subset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let value = self.comparable("is_subset_of")?;
        Ok(other.into_iter().any(|item| same(value, &item)))
    }

    fn is_superset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let value = self.comparable("is_superset_of")?;
        Ok(other.into_iter().all(|item| same(value, &item)))
    }

    fn set_equals<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let value = self.comparable("set_equals")?;
        let mut matched = false;
        for item in other {
            if !same(value, &item) {
                return Ok(false);
            }
            matched = true;
        }
        Ok(matched)
    }

    fn is_proper_subset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let value = self.comparable("is_proper_subset_of")?;
        // [seen unequal, seen equal]
        let mut seen = [false; 2];
        for item in other {
            let hit = same(value, &item) as usize;
            if seen[1 - hit] {
                return Ok(true);
            }
            seen[hit] = true;
        }
        Ok(false)
    }

    fn is_proper_superset_of<I>(&self, other: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.comparable("is_proper_superset_of")?;
        Ok(other.into_iter().next().is_none())
    }
}

// --- Tuple / Release ---

impl<T: Any> Tuple for SingletonView<T> {
    const ARITY: usize = 1;

    fn item(&self, index: usize) -> Result<&dyn Any> {
        self.at(index).map(|value| value as &dyn Any)
    }
}

impl<T> Release for SingletonView<T> {
    fn release(&self) {}
}
