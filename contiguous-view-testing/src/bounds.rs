use crate::fixtures::{Element, make_array};
use contiguous_view::{BoundsError, Dynamic, Static, View, ViewMut};
use pretty_assertions::assert_eq;

const MAX: usize = usize::MAX;

#[test]
pub fn element_access_past_end() {
    let elements = make_array::<5>();
    let view = View::new(&elements);
    for index in [5, 6, MAX] {
        assert_eq!(view.at(index), Err(BoundsError::Index { index, len: 5 }));
    }

    let fixed: View<'_, Element, Static<5>> = View::from(&elements);
    assert_eq!(fixed.at(5), Err(BoundsError::Index { index: 5, len: 5 }));
}

#[test]
pub fn ends_of_empty_views() {
    let empty = View::<Element>::default();
    assert_eq!(empty.front(), Err(BoundsError::Empty));
    assert_eq!(empty.back(), Err(BoundsError::Empty));

    let mut empty = ViewMut::<Element, Static<0>>::default();
    assert_eq!(empty.front_mut(), Err(BoundsError::Empty));
    assert_eq!(empty.back_mut(), Err(BoundsError::Empty));
}

#[test]
pub fn subview_out_of_range() {
    let elements = make_array::<5>();
    let view = View::new(&elements);

    assert_eq!(
        view.subview(6, None).unwrap_err(),
        BoundsError::Offset { offset: 6, len: 5 }
    );
    assert_eq!(
        view.subview(MAX, Some(0)).unwrap_err(),
        BoundsError::Offset { offset: MAX, len: 5 }
    );
    assert_eq!(
        view.subview(2, Some(4)).unwrap_err(),
        BoundsError::Range {
            offset: 2,
            count: 4,
            len: 5
        }
    );
    assert_eq!(
        view.subview(1, Some(MAX)).unwrap_err(),
        BoundsError::Range {
            offset: 1,
            count: MAX,
            len: 5
        }
    );
    assert_eq!(
        view.subview_static::<4, 2>().unwrap_err(),
        BoundsError::Range {
            offset: 4,
            count: 2,
            len: 5
        }
    );
    assert_eq!(
        view.subview_from::<6>().unwrap_err(),
        BoundsError::Offset { offset: 6, len: 5 }
    );
}

#[test]
pub fn prefix_and_suffix_too_long() {
    let elements = make_array::<5>();
    let view = View::new(&elements);
    let too_long = BoundsError::Range {
        offset: 0,
        count: 6,
        len: 5,
    };
    assert_eq!(view.first(6).unwrap_err(), too_long);
    assert_eq!(view.last(6).unwrap_err(), too_long);
    assert_eq!(view.first_static::<6>().unwrap_err(), too_long);
    assert_eq!(view.last_static::<6>().unwrap_err(), too_long);
    assert_eq!(
        view.last(MAX).unwrap_err(),
        BoundsError::Range {
            offset: 0,
            count: MAX,
            len: 5
        }
    );
}

#[test]
pub fn static_construction_requires_exact_length() {
    let elements = make_array::<5>();
    for len in 0..=5 {
        let result = View::<Element, Static<3>>::try_new(&elements[..len]);
        match len {
            3 => assert!(result.is_ok()),
            _ => assert_eq!(result.unwrap_err(), BoundsError::Extent { len, extent: 3 }),
        }
    }
}

#[test]
pub fn inverted_range() {
    let elements = make_array::<5>();
    let range = elements.as_ptr_range();
    let inverted = unsafe { View::<Element, Dynamic>::from_ptr_range(range.end..range.start) };
    assert_eq!(inverted.unwrap_err(), BoundsError::InvertedRange);
    let inverted = unsafe { View::<Element, Static<5>>::from_ptr_range(range.end..range.start) };
    assert_eq!(inverted.unwrap_err(), BoundsError::InvertedRange);
}

#[test]
pub fn failures_do_not_disturb_the_view() {
    let mut elements = make_array::<5>();
    let mut view = ViewMut::new(&mut elements);
    assert!(view.subview(3, Some(3)).is_err());
    assert!(view.at_mut(5).is_err());
    assert_eq!(view.len(), 5);
    assert_eq!(view.front().unwrap().value(), 0);
}

#[test]
#[should_panic(expected = "index 5 out of range for view of length 5")]
pub fn index_panics() {
    let elements = make_array::<5>();
    let view: View<'_, Element, Static<5>> = View::from(&elements);
    let _ = &view[5];
}

#[test]
pub fn messages() {
    assert_eq!(
        BoundsError::Range {
            offset: 2,
            count: 4,
            len: 5
        }
        .to_string(),
        "range of 4 elements at offset 2 out of range for view of length 5"
    );
    assert_eq!(
        BoundsError::Extent { len: 3, extent: 4 }.to_string(),
        "length 3 does not match static extent 4"
    );
}
