//! Nilet - collections of exactly zero or exactly one element
//!
//! # Overview
//!
//! Generic code is often written against collection-shaped abstractions even
//! when a particular call site knows it will hand over exactly one value, or
//! none. Nilet provides two immutable views for those cases:
//!
//! - [`SingletonView<T>`]: holds exactly one `T`.
//! - [`EmptyView<T>`]: holds no `T`; a zero-sized shared constant.
//!
//! Both implement the same capability traits, so either can be passed where a
//! countable collection ([`Collection`]), an indexable sequence ([`Sequence`]),
//! a read-only set ([`SetView`]) or a fixed-arity tuple ([`Tuple`]) is
//! expected.
//!
//! # Quick Start
//!
//! ```
//! use nilet::prelude::*;
//!
//! fn describe<C: Collection<i32>>(items: &C) -> usize {
//!     items.iter().filter(|n| **n > 0).count()
//! }
//!
//! assert_eq!(describe(&singleton(4)), 1);
//! assert_eq!(describe(&EmptyView::INSTANCE), 0);
//! ```
//!
//! # Absent values
//!
//! A singleton may wrap a value that is itself absent, such as `None`. Set
//! predicates and rendering refuse to work with it and return
//! [`Error::NullReference`]:
//!
//! ```
//! use nilet::prelude::*;
//!
//! let view = singleton(None::<u32>);
//! assert_eq!(view.contains(&Some(1)), Err(Error::NullReference));
//! assert_eq!(view.try_to_string(), Err(Error::NullReference));
//! assert_eq!(view.count(), 1);
//! ```
//!
//! # Features
//!
//! - `std` (default): enables `std` support in `nilet-views` and its
//!   dependencies. Without it the views are `no_std` and need only `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

pub use nilet_views::{
    EmptyView, Error, Nullable, Result, SingletonView,
    factory::{copy_singleton, empty, make_singleton, singleton},
    non_null,
    traits::{self, Collection, Release, Sequence, SetView, Tuple},
};

/// Everything needed to use the views generically.
pub mod prelude {
    pub use crate::{
        Collection, EmptyView, Error, Nullable, Release, Sequence, SetView, SingletonView, Tuple,
        copy_singleton, empty, make_singleton, non_null, singleton,
    };
}
