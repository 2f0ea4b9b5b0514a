use core::any::Any;

use crate::error::Result;

/// Positional access to a fixed number of type-erased items.
///
/// Unlike [`Sequence`](super::Sequence), the arity is part of the type and the
/// items are handed out as `&dyn Any`, so code that inspects tuples of unknown
/// shape can downcast them.
pub trait Tuple {
    const ARITY: usize;

    fn arity(&self) -> usize {
        Self::ARITY
    }

    fn item(&self, index: usize) -> Result<&dyn Any>;
}
