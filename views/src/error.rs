//! Errors raised by the views.
//!
//! Only two things can go wrong: the singleton's value is absent when an
//! operation needs to compare or render it, or an index falls outside the
//! view. Every other operation is total.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The held value is absent, so it cannot be compared or rendered.
    #[error("the held value is absent")]
    NullReference,

    /// The index is not a valid position in the view.
    #[error("index {index} is out of range for a view of length {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "Index out of range");
        Error::OutOfRange { index, len }
    }

    pub(crate) fn null_reference(operation: &'static str) -> Self {
        tracing::debug!(operation, "Held value is absent");
        Error::NullReference
    }
}
