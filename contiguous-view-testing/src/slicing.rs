use crate::fixtures::{Element, make_array, values};
use contiguous_view::{Static, View, ViewMut};
use pretty_assertions::assert_eq;

fn numbers() -> Vec<u32> {
    (0..100).collect()
}

#[test]
pub fn subview_of_dynamic() {
    let numbers = numbers();
    let view = View::new(&numbers);

    let middle = view.subview(10, Some(40)).unwrap();
    assert_eq!(middle.as_ptr(), numbers[10..].as_ptr());
    assert_eq!(middle.len(), 40);
    assert_eq!(middle, &numbers[10..50]);

    let rest = view.subview(10, None).unwrap();
    assert_eq!(rest.len(), 90);

    let from: View<'_, u32> = view.subview_from::<10>().unwrap();
    assert_eq!(from, rest);

    let fixed: View<'_, u32, Static<40>> = view.subview_static::<10, 40>().unwrap();
    assert_eq!(fixed, middle);

    let end = view.subview(100, None).unwrap();
    assert!(end.is_empty());
    assert_eq!(end.as_ptr(), numbers.as_ptr_range().end);
}

#[test]
pub fn subview_of_static() {
    let elements = make_array::<5>();
    let view: View<'_, Element, Static<5>> = View::from(&elements);

    let middle: View<'_, Element, Static<3>> = view.subview_static::<1, 3>().unwrap();
    assert_eq!(values(middle), [1, 2, 3]);
    assert_eq!(middle.as_ptr(), elements[1..].as_ptr());

    let rest = view.subview_from::<2>().unwrap();
    assert_eq!(values(rest), [2, 3, 4]);
    assert_eq!(rest.extent(), None);

    let fixed_rest: View<'_, Element, Static<3>> = view.subview_rest::<2, 3>();
    assert_eq!(fixed_rest, rest);
    assert_eq!(fixed_rest.extent(), Some(3));

    let end = view.subview_from::<5>().unwrap();
    assert!(end.is_empty());
    assert_eq!(end.as_ptr(), elements.as_ptr_range().end);

    let empty: View<'_, Element, Static<0>> = view.subview_static::<5, 0>().unwrap();
    assert!(empty.is_empty());

    let runtime = view.subview(1, Some(3)).unwrap();
    assert_eq!(runtime, middle);
}

#[test]
pub fn first_and_last() {
    let numbers = numbers();
    let view = View::new(&numbers);

    let head = view.first(10).unwrap();
    assert_eq!(head.as_ptr(), numbers.as_ptr());
    assert_eq!(head, &numbers[..10]);

    let tail = view.last(10).unwrap();
    assert_eq!(tail.as_ptr(), numbers[90..].as_ptr());
    assert_eq!(tail, &numbers[90..]);

    let head: View<'_, u32, Static<10>> = view.first_static().unwrap();
    assert_eq!(head, &numbers[..10]);
    let tail: View<'_, u32, Static<10>> = view.last_static().unwrap();
    assert_eq!(tail, &numbers[90..]);

    assert!(view.first(0).unwrap().is_empty());
    assert!(view.last(0).unwrap().is_empty());
    assert_eq!(view.last(100).unwrap(), view);
}

#[test]
pub fn first_and_last_of_static() {
    let elements = make_array::<5>();
    let view: View<'_, Element, Static<5>> = View::from(&elements);

    let head: View<'_, Element, Static<2>> = view.first_static().unwrap();
    assert_eq!(values(head), [0, 1]);
    let tail: View<'_, Element, Static<2>> = view.last_static().unwrap();
    assert_eq!(values(tail), [3, 4]);
    assert_eq!(tail.as_ptr(), elements[3..].as_ptr());

    let all: View<'_, Element, Static<5>> = view.last_static().unwrap();
    assert_eq!(all, view);
}

#[test]
pub fn element_access() {
    let elements = make_array::<5>();
    let view = View::new(&elements);
    assert_eq!(view.front().unwrap().value(), 0);
    assert_eq!(view.back().unwrap().value(), 4);
    for i in 0..5 {
        assert!(std::ptr::eq(view.at(i).unwrap(), &elements[i]));
        assert!(std::ptr::eq(&view[i], &elements[i]));
    }

    let fixed: View<'_, Element, Static<5>> = View::from(&elements);
    assert!(std::ptr::eq(fixed.back().unwrap(), &elements[4]));
}

#[test]
pub fn mutable_access() {
    let mut elements = make_array::<5>();
    let mut view: ViewMut<'_, Element, Static<5>> = ViewMut::from(&mut elements);

    *view.front_mut().unwrap() = Element::new(10);
    *view.back_mut().unwrap() = Element::new(14);
    *view.at_mut(2).unwrap() = Element::new(12);
    view[1] = Element::new(11);

    let mut middle = view.subview(1, Some(3)).unwrap();
    middle.as_mut_slice().swap(0, 2);
    assert_eq!(values(&elements), [10, 3, 12, 11, 14]);
}

#[test]
pub fn reborrowed_subviews() {
    let mut numbers = numbers();
    let mut view = ViewMut::new(&mut numbers);
    {
        let mut head = view.first(50).unwrap();
        let mut quarter = head.last_static::<25>().unwrap();
        quarter.as_mut_slice().fill(0);
    }
    view.subview_from::<75>().unwrap().as_mut_slice().fill(1);
    assert_eq!(numbers[24], 24);
    assert!(numbers[25..50].iter().all(|&n| n == 0));
    assert_eq!(numbers[50], 50);
    assert!(numbers[75..].iter().all(|&n| n == 1));
}

#[test]
pub fn swap_views() {
    let a = make_array::<2>();
    let b = make_array::<3>();
    let mut first = View::new(&a);
    let mut second = View::new(&b);
    first.swap(&mut second);
    assert_eq!(first.len(), 3);
    assert_eq!(second.as_ptr(), a.as_ptr());
}
