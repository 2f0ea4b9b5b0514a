//! Capability traits shared by both views.
//!
//! Each capability is a separate trait so generic call sites can ask for
//! exactly what they need: counting and iterating ([`Collection`]), indexed
//! access ([`Sequence`]), set predicates ([`SetView`]), type-erased positional
//! access ([`Tuple`]) or scoped release ([`Release`]).

mod collection;
mod release;
mod sequence;
mod set_view;
mod tuple;

pub use collection::Collection;
pub use release::Release;
pub use sequence::Sequence;
pub use set_view::SetView;
pub use tuple::Tuple;
