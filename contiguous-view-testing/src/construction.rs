use crate::fixtures::{Element, make_array, values};
use contiguous_view::{AsView, AsViewMut, BoundsError, Dynamic, Static, View, ViewMut};
use pretty_assertions::assert_eq;

#[test]
pub fn default_views_are_empty() {
    let dynamic = View::<Element>::default();
    assert_eq!(dynamic.len(), 0);
    assert!(dynamic.is_empty());
    assert_eq!(dynamic.extent(), None);

    let fixed = View::<Element, Static<0>>::default();
    assert_eq!(fixed.len(), 0);
    assert_eq!(fixed.extent(), Some(0));

    let mut dynamic_mut = ViewMut::<Element>::default();
    assert!(dynamic_mut.as_mut_slice().is_empty());
    assert!(ViewMut::<Element, Static<0>>::default().is_empty());
}

#[test]
pub fn from_ptr_range() {
    let elements = make_array::<4>();
    let range = elements.as_ptr_range();

    let dynamic = unsafe { View::<_, Dynamic>::from_ptr_range(range.clone()) }.unwrap();
    assert_eq!(dynamic.as_ptr(), elements.as_ptr());
    assert_eq!(dynamic.len(), 4);

    let fixed = unsafe { View::<_, Static<4>>::from_ptr_range(range.clone()) }.unwrap();
    assert_eq!(fixed.as_ptr(), elements.as_ptr());
    assert_eq!(fixed.len(), 4);

    let mismatch = unsafe { View::<_, Static<3>>::from_ptr_range(range.clone()) };
    assert_eq!(mismatch.unwrap_err(), BoundsError::Extent { len: 4, extent: 3 });

    let empty = unsafe { View::<Element>::from_ptr_range(range.start..range.start) }.unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.as_ptr(), elements.as_ptr());
}

#[test]
pub fn from_raw_parts() {
    let mut elements = make_array::<4>();

    let dynamic = unsafe { View::<_, Dynamic>::from_raw_parts(elements.as_ptr(), 4) }.unwrap();
    assert_eq!(values(dynamic), [0, 1, 2, 3]);

    let fixed = unsafe { View::<_, Static<4>>::from_raw_parts(elements.as_ptr(), 4) }.unwrap();
    assert_eq!(fixed, dynamic);

    let prefix = unsafe { View::<_, Dynamic>::from_raw_parts(elements.as_ptr(), 2) }.unwrap();
    assert_eq!(values(prefix), [0, 1]);

    assert_eq!(
        unsafe { View::<_, Static<4>>::from_raw_parts(elements.as_ptr(), 3) }.unwrap_err(),
        BoundsError::Extent { len: 3, extent: 4 }
    );

    let mut view =
        unsafe { ViewMut::<_, Static<4>>::from_raw_parts(elements.as_mut_ptr(), 4) }.unwrap();
    view[0] = Element::new(9);
    assert_eq!(elements[0].value(), 9);
}

#[test]
pub fn null_with_zero_length() {
    let dynamic = unsafe { View::<Element>::from_raw_parts(std::ptr::null(), 0) }.unwrap();
    assert!(dynamic.is_empty());
    assert!(!dynamic.as_ptr().is_null());

    let fixed = unsafe { View::<Element, Static<0>>::from_raw_parts(std::ptr::null(), 0) };
    assert!(fixed.unwrap().is_empty());

    let nonempty = unsafe { View::<Element>::from_raw_parts(std::ptr::null(), 3) };
    assert_eq!(nonempty.unwrap_err(), BoundsError::NullPointer { len: 3 });
    let nonempty =
        unsafe { ViewMut::<Element, Static<3>>::from_raw_parts(std::ptr::null_mut(), 3) };
    assert_eq!(nonempty.unwrap_err(), BoundsError::NullPointer { len: 3 });
}

#[test]
pub fn wrap_containers() {
    let elements = make_array::<3>();
    let vec = elements.to_vec();

    let from_array: View<'_, Element, Static<3>> = View::from(&elements);
    let from_slice: View<'_, Element> = View::from(&elements[..]);
    let from_vec = View::new(&vec);
    assert_eq!(from_array, from_slice);
    assert_eq!(from_slice, from_vec);
    assert_eq!(from_array.as_ptr(), elements.as_ptr());
    assert_eq!(from_vec.as_ptr(), vec.as_ptr());

    let narrowed: View<'_, Element, Static<3>> = View::try_from(&vec[..]).unwrap();
    assert_eq!(narrowed.as_ptr(), vec.as_ptr());
    assert_eq!(
        View::<Element, Static<2>>::try_from(&vec[..]).unwrap_err(),
        BoundsError::Extent { len: 3, extent: 2 }
    );

    assert_eq!(elements.as_view().extent(), Some(3));
    assert_eq!(vec.as_view().extent(), None);
}

#[test]
pub fn copies_share_storage() {
    let elements = make_array::<3>();
    let view = View::new(&elements);
    let copy = view;
    assert_eq!(copy.as_ptr(), view.as_ptr());
    assert_eq!(copy.len(), view.len());

    let mut fixed: View<'_, Element, Static<3>> = View::from(&elements);
    assert_eq!(fixed.as_ptr(), elements.as_ptr());
    let other = make_array::<3>();
    fixed = View::from(&other);
    assert_eq!(fixed.as_ptr(), other.as_ptr());
}

#[test]
pub fn conversions() {
    let mut elements = make_array::<3>();
    let ptr = elements.as_ptr();

    let fixed_mut: ViewMut<'_, Element, Static<3>> = elements.as_view_mut();
    let dynamic_mut: ViewMut<'_, Element> = fixed_mut.into();
    let fixed_mut: ViewMut<'_, Element, Static<3>> = dynamic_mut.try_into().unwrap();
    let fixed: View<'_, Element, Static<3>> = fixed_mut.into();
    let dynamic: View<'_, Element> = fixed.into();
    assert_eq!(dynamic.as_ptr(), ptr);
    assert_eq!(dynamic.len(), 3);

    let narrowed: Result<View<'_, Element, Static<2>>, _> = dynamic.try_into();
    assert_eq!(narrowed.unwrap_err(), BoundsError::Extent { len: 3, extent: 2 });
}

#[test]
pub fn text() {
    let text = String::from("abacaba");
    let view = View::new(text.as_bytes());
    let s = view.as_str().unwrap();
    assert_eq!(s, "abacaba");
    assert_eq!(s.as_ptr(), text.as_ptr());
    assert_eq!(s.len(), text.len());

    let fixed: View<'_, u8, Static<7>> = View::try_new(text.as_bytes()).unwrap();
    let s: &str = fixed.try_into().unwrap();
    assert_eq!(s, "abacaba");

    let invalid = [0xffu8, 0xfe];
    assert!(View::new(&invalid).as_str().is_err());
    assert!(<&str>::try_from(View::new(&invalid[..])).is_err());
}

#[test]
pub fn iteration() {
    let mut elements = make_array::<4>();
    let view = View::new(&elements);
    assert_eq!(values(view.iter()), [0, 1, 2, 3]);
    assert_eq!(values(&view), [0, 1, 2, 3]);
    assert_eq!(view.iter().rev().map(Element::value).collect::<Vec<_>>(), [3, 2, 1, 0]);

    let mut view = ViewMut::new(&mut elements);
    for element in view.iter_mut() {
        *element = Element::new(element.value() * 10);
    }
    for element in view {
        *element = Element::new(element.value() + 1);
    }
    assert_eq!(values(&elements), [1, 11, 21, 31]);
}

#[test]
pub fn ordering_and_hashing() {
    use std::collections::HashSet;

    let a = make_array::<3>();
    let b = make_array::<4>();
    assert!(View::new(&a) < View::new(&b));

    let set: HashSet<View<'_, Element>> = [View::new(&a), View::new(&a[..]), View::new(&b)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}
