//! Free-standing constructors.
//!
//! [`make_singleton`] accepts either a bare value or an existing view, which
//! lets call sites that may hold either forward it without matching on it.

use crate::{empty::EmptyView, singleton::SingletonView};

/// Wraps `value` in a [`SingletonView`].
pub const fn singleton<T>(value: T) -> SingletonView<T> {
    SingletonView::new(value)
}

/// Builds a [`SingletonView`] from a bare value or passes an existing one through.
///
/// ```
/// use nilet_views::SingletonView;
/// use nilet_views::factory::make_singleton;
///
/// let wrapped: SingletonView<i32> = make_singleton(3);
/// let passed: SingletonView<i32> = make_singleton(wrapped);
/// assert_eq!(wrapped, passed);
/// ```
pub fn make_singleton<T>(source: impl Into<SingletonView<T>>) -> SingletonView<T> {
    source.into()
}

/// Copies an existing view.
pub fn copy_singleton<T: Clone>(view: &SingletonView<T>) -> SingletonView<T> {
    view.clone()
}

/// Returns the shared empty view for `T`.
pub const fn empty<T>() -> EmptyView<T> {
    EmptyView::INSTANCE
}
