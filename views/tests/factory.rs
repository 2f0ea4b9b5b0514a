use nilet_views::{
    EmptyView, SingletonView,
    factory::{copy_singleton, empty, make_singleton, singleton},
    traits::{Collection, SetView},
};
use pretty_assertions::assert_eq;

#[test]
fn singleton_wraps_a_raw_value() {
    let view = singleton("value");
    assert_eq!(view.into_inner(), "value");
}

#[test]
fn make_singleton_accepts_a_raw_value_or_a_view() {
    let from_value: SingletonView<i64> = make_singleton(8);
    let from_view: SingletonView<i64> = make_singleton(from_value);
    let from_tuple: SingletonView<i64> = make_singleton((8,));
    assert_eq!(from_value, from_view);
    assert_eq!(from_view, from_tuple);
}

#[test]
fn copies_are_independent_values() {
    let original = singleton(String::from("kept"));
    let copy = copy_singleton(&original);
    assert_eq!(copy, original);
    assert_eq!(copy.set_equals([String::from("kept")]), Ok(true));
    drop(original);
    assert_eq!(copy.value(), "kept");
}

#[test]
fn wrapping_a_view_nests_it() {
    let inner = singleton(1);
    let outer = singleton(inner);
    assert_eq!(outer.count(), 1);
    assert_eq!(outer.into_inner(), inner);
}

#[test]
fn empty_is_the_shared_instance() {
    assert_eq!(empty::<u8>(), EmptyView::INSTANCE);
    assert_eq!(empty::<u8>().count(), 0);
}
