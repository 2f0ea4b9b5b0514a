use std::iter;

use expect_test::expect;
use nilet_views::{
    EmptyView, Error,
    traits::{Collection, Release, Sequence, SetView, Tuple},
};
use pretty_assertions::assert_eq;

fn inputs() -> Vec<Vec<i32>> {
    vec![vec![], vec![0], vec![1, 2], vec![3, 3, 3]]
}

// =============================================================================
// Counting, indexing and iteration
// =============================================================================

#[test]
fn count_is_always_zero() {
    let view = EmptyView::<i32>::INSTANCE;
    assert_eq!(view.count(), 0);
    assert!(view.is_empty());
    assert_eq!(view.as_slice(), &[] as &[i32]);
}

#[test]
fn every_index_is_out_of_range() {
    let view = EmptyView::<String>::INSTANCE;
    for index in [0, 1, usize::MAX] {
        assert_eq!(view.at(index), Err(Error::OutOfRange { index, len: 0 }));
        assert_eq!(view.get(index), None);
    }
}

#[test]
fn iteration_yields_nothing() {
    let view = EmptyView::<u8>::INSTANCE;
    assert_eq!(view.iter().next(), None);
    assert_eq!(Collection::iter(&view).len(), 0);
    assert_eq!((&view).into_iter().count(), 0);
    assert_eq!(view.into_iter().count(), 0);
}

#[test]
fn converts_to_and_from_unit() {
    let view: EmptyView<char> = ().into();
    assert_eq!(view, EmptyView::INSTANCE);
    let () = view.into();
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_is_empty_parentheses() {
    expect![["()"]].assert_eq(&EmptyView::<i32>::INSTANCE.to_string());
    expect![["()"]].assert_eq(&EmptyView::<Option<String>>::INSTANCE.to_string());
}

// =============================================================================
// Set algebra
// =============================================================================

#[test]
fn contains_nothing() {
    let view = EmptyView::<Option<i32>>::INSTANCE;
    assert_eq!(view.contains(&None), Ok(false));
    assert_eq!(view.contains(&Some(0)), Ok(false));
}

#[test]
fn overlaps_nothing() {
    let view = EmptyView::<i32>::INSTANCE;
    for other in inputs() {
        assert_eq!(view.overlaps(&other), Ok(false));
    }
}

#[test]
fn is_subset_of_everything() {
    let view = EmptyView::<i32>::INSTANCE;
    for other in inputs() {
        assert_eq!(view.is_subset_of(&other), Ok(true));
    }
    assert_eq!(view.is_subset_of(iter::empty::<i32>()), Ok(true));
}

#[test]
fn superset_and_equality_only_of_the_empty_input() {
    let view = EmptyView::<i32>::INSTANCE;
    for other in inputs() {
        let empty = other.is_empty();
        assert_eq!(view.is_superset_of(&other), Ok(empty));
        assert_eq!(view.set_equals(&other), Ok(empty));
    }
}

#[test]
fn proper_subset_of_any_non_empty_input() {
    let view = EmptyView::<i32>::INSTANCE;
    for other in inputs() {
        assert_eq!(view.is_proper_subset_of(&other), Ok(!other.is_empty()));
    }
}

#[test]
fn never_a_proper_superset() {
    let view = EmptyView::<i32>::INSTANCE;
    for other in inputs() {
        assert_eq!(view.is_proper_superset_of(&other), Ok(false));
    }
}

#[test]
fn predicates_never_need_an_equality_on_the_element_type() {
    struct Opaque;

    let view = EmptyView::<Opaque>::INSTANCE;
    assert_eq!(view.contains(&Opaque), Ok(false));
    assert_eq!(view.is_proper_subset_of([Opaque]), Ok(true));
    assert_eq!(view.set_equals(iter::empty::<Opaque>()), Ok(true));
}

// =============================================================================
// Tuple / Release
// =============================================================================

#[test]
fn tuple_has_arity_zero() {
    let view = EmptyView::<i32>::INSTANCE;
    assert_eq!(<EmptyView<i32> as Tuple>::ARITY, 0);
    assert_eq!(view.arity(), 0);
    assert!(matches!(
        view.item(0),
        Err(Error::OutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn release_is_repeatable() {
    let view = EmptyView::<i32>::INSTANCE;
    for _ in 0..3 {
        view.release();
    }
    assert_eq!(view.scoped(|v| v.count()), 0);
    assert_eq!(view, EmptyView::INSTANCE);
}
