use crate::error::{Error, Result};

use super::Collection;

pub trait Sequence<T>: Collection<T> {
    /// Returns the element at `index`, if any.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns every element as a contiguous slice.
    fn as_slice(&self) -> &[T];

    /// Returns the element at `index`, or [`Error::OutOfRange`] if there is none.
    fn at(&self, index: usize) -> Result<&T> {
        self.get(index)
            .ok_or_else(|| Error::out_of_range(index, self.count()))
    }
}
