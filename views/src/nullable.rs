//! Element types whose values may be absent.
//!
//! A [`SingletonView`](crate::SingletonView) refuses to compare or render a
//! value that is absent. Rather than coercing the absent case to a default,
//! element types describe their own absence through [`Nullable`]: `Option<U>`
//! is absent when it is `None`, and ordinary owned or borrowed values are
//! never absent.

use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    rc::Rc,
    string::String,
    sync::Arc,
    vec::Vec,
};
use core::time::Duration;

use crate::{empty::EmptyView, singleton::SingletonView};

/// A value that may be absent.
pub trait Nullable {
    /// The type that is exposed when the value is present.
    type Inner: ?Sized;

    /// Returns the present value, or `None` if the value is absent.
    fn as_present(&self) -> Option<&Self::Inner>;

    fn is_absent(&self) -> bool {
        self.as_present().is_none()
    }
}

impl<U> Nullable for Option<U> {
    type Inner = U;

    #[inline(always)]
    fn as_present(&self) -> Option<&U> {
        self.as_ref()
    }
}

/// Implements [`Nullable`] for types that always hold a value.
///
/// ```
/// use nilet_views::traits::SetView;
/// use nilet_views::{SingletonView, non_null};
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(u32);
///
/// non_null!(Meters);
///
/// let view = SingletonView::new(Meters(3));
/// assert_eq!(view.contains(&Meters(3)), Ok(true));
/// ```
#[macro_export]
macro_rules! non_null {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Nullable for $ty {
                type Inner = Self;

                #[inline(always)]
                fn as_present(&self) -> ::core::option::Option<&Self> {
                    ::core::option::Option::Some(self)
                }
            }
        )*
    };
}

non_null!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    Duration,
);

macro_rules! non_null_generic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<U: ?Sized> Nullable for $ty {
                type Inner = Self;

                #[inline(always)]
                fn as_present(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

non_null_generic!(&U, &mut U, Box<U>, Rc<U>, Arc<U>);

macro_rules! non_null_sized {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<U> Nullable for $ty {
                type Inner = Self;

                #[inline(always)]
                fn as_present(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

// A view is itself a value, even when it wraps an absent one.
non_null_sized!(Vec<U>, [U], SingletonView<U>, EmptyView<U>);

impl<U, const N: usize> Nullable for [U; N] {
    type Inner = Self;

    #[inline(always)]
    fn as_present(&self) -> Option<&Self> {
        Some(self)
    }
}

impl<B: ?Sized + ToOwned> Nullable for Cow<'_, B> {
    type Inner = Self;

    #[inline(always)]
    fn as_present(&self) -> Option<&Self> {
        Some(self)
    }
}

macro_rules! non_null_tuple {
    ($(($($name:ident),+))*) => {
        $(
            impl<$($name),+> Nullable for ($($name,)+) {
                type Inner = Self;

                #[inline(always)]
                fn as_present(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

non_null_tuple!(
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
);
