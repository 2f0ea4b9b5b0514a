//! Singleton and empty collection views.
//!
//! [`SingletonView`] holds exactly one value and [`EmptyView`] holds none. Both
//! implement the same capability traits ([`Collection`], [`Sequence`],
//! [`SetView`], [`Tuple`] and [`Release`]) so that generic code written against
//! "a collection of `T`" accepts them without special-casing a cardinality
//! that is already known at compile time.
//!
//! ```
//! use nilet_views::{EmptyView, SingletonView};
//! use nilet_views::traits::{Collection, Sequence, SetView};
//!
//! let one = SingletonView::new(5);
//! assert_eq!(one.count(), 1);
//! assert_eq!(one.at(0), Ok(&5));
//! assert_eq!(one.is_subset_of([3, 5]), Ok(true));
//!
//! let none = EmptyView::<i32>::INSTANCE;
//! assert_eq!(none.count(), 0);
//! assert_eq!(none.is_subset_of([3, 5]), Ok(true));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod empty;
pub mod error;
pub mod factory;
pub mod nullable;
pub mod singleton;
pub mod traits;

pub use empty::EmptyView;
pub use error::{Error, Result};
pub use nullable::Nullable;
pub use singleton::SingletonView;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_absent_display() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
