/// ```
/// use contiguous_view::{Dynamic, Static, View, ViewMut};
/// let mut numbers = [10, 20, 30];
/// let view: ViewMut<'_, i32, Static<3>> = ViewMut::from(&mut numbers);
/// let view: View<'_, i32, Static<3>> = view.into();
/// let copy = view;
/// let dynamic: View<'_, i32, Dynamic> = copy.into();
/// let back: View<'_, i32, Static<3>> = dynamic.try_into().unwrap();
/// assert_eq!(back, view);
/// ```
mod widening_and_checked_narrowing {
    /// ```compile_fail
    /// use contiguous_view::{Dynamic, Static, View};
    /// let numbers = [10, 20, 30];
    /// let view: View<'_, i32, Dynamic> = View::new(&numbers);
    /// let fixed: View<'_, i32, Static<3>> = view.into(); // Added
    /// ```
    mod dynamic_to_static_is_not_implicit {}

    /// ```compile_fail
    /// use contiguous_view::{Static, View};
    /// let numbers = [10, 20, 30];
    /// let view: View<'_, i32, Static<3>> = View::from(&numbers);
    /// let fixed: View<'_, i32, Static<2>> = view.try_into().unwrap(); // Changed
    /// ```
    mod static_to_other_static {}

    /// ```compile_fail
    /// use contiguous_view::{Static, View};
    /// let numbers = [10, 20];
    /// let view: View<'_, i32, Static<2>> = View::from(&numbers);
    /// let fixed: View<'_, i32, Static<3>> = view.try_into().unwrap(); // Changed
    /// ```
    mod static_to_wider_static {}

    /// ```compile_fail
    /// use contiguous_view::{Static, View};
    /// let numbers = [10, 20, 30];
    /// let view: View<'_, i32, Static<3>> = View::from(&numbers);
    /// let fixed = view.try_into_static::<3>(); // Changed
    /// ```
    mod try_into_static_needs_dynamic {}

    /// ```compile_fail
    /// use contiguous_view::{Static, View};
    /// let numbers = [10, 20, 30];
    /// let fixed: View<'_, i32, Static<3>> = View::new(&numbers[..]); // Changed
    /// ```
    mod new_is_dynamic_only {}
}

/// ```
/// use contiguous_view::{View, ViewMut};
/// let mut numbers = [10, 20, 30];
/// let view: View<'_, i32> = ViewMut::new(&mut numbers).into();
/// assert_eq!(view[0], 10);
/// ```
mod mutable_to_const {
    /// ```compile_fail
    /// use contiguous_view::{View, ViewMut};
    /// let numbers = [10, 20, 30];
    /// let view = View::new(&numbers);
    /// let view_mut: ViewMut<'_, i32> = view.into(); // Changed
    /// ```
    mod const_to_mutable {}

    /// ```compile_fail
    /// use contiguous_view::View;
    /// let mut numbers = [10, 20, 30];
    /// let view = View::new(&numbers);
    /// view[0] = 11; // Added
    /// ```
    mod assign_through_const {}
}

/// ```
/// use contiguous_view::ViewMut;
/// let mut numbers = [10, 20, 30];
/// let mut view = ViewMut::new(&mut numbers);
/// let first = view.reborrow();
/// ```
mod mutable_views_do_not_alias {
    /// ```compile_fail
    /// use contiguous_view::ViewMut;
    /// let mut numbers = [10, 20, 30];
    /// let mut view = ViewMut::new(&mut numbers);
    /// let copy = view;
    /// view[0] = 11; // Added
    /// ```
    mod copy {}

    /// ```compile_fail
    /// use contiguous_view::ViewMut;
    /// let mut numbers = [10, 20, 30];
    /// let mut view = ViewMut::new(&mut numbers);
    /// let mut first = view.reborrow();
    /// let mut second = view.reborrow(); // Added
    /// first[0] = 11;
    /// ```
    mod reborrow_twice {}

    /// ```compile_fail
    /// use contiguous_view::ViewMut;
    /// let mut numbers = [10, 20, 30];
    /// let mut view = ViewMut::new(&mut numbers);
    /// let head = view.first(1).unwrap();
    /// let tail = view.last(1).unwrap(); // Added
    /// println!("{:?} {:?}", head, tail);
    /// ```
    mod overlapping_subviews {}
}

/// ```
/// use contiguous_view::View;
/// let numbers = vec![1, 2, 3];
/// let view = View::new(&numbers);
/// assert_eq!(view.len(), 3);
/// ```
mod views_do_not_outlive_storage {
    /// ```compile_fail
    /// use contiguous_view::View;
    /// let view = {
    ///     let numbers = vec![1, 2, 3];
    ///     View::new(&numbers)
    /// }; // Changed
    /// assert_eq!(view.len(), 3);
    /// ```
    mod escape_scope {}
}

/// ```
/// use contiguous_view::View;
/// let text = b"abc";
/// let s: &str = View::new(text).try_into().unwrap();
/// assert_eq!(s, "abc");
/// ```
mod text {
    /// ```compile_fail
    /// use contiguous_view::ViewMut;
    /// let mut text = *b"abc";
    /// let view = ViewMut::new(&mut text);
    /// let s = view.as_str(); // Changed
    /// ```
    mod mutable_views_are_not_text {}

    /// ```compile_fail
    /// use contiguous_view::View;
    /// let numbers = [1u32, 2];
    /// let s = View::new(&numbers).as_str(); // Changed
    /// ```
    mod only_bytes_are_text {}
}

/// ```compile_fail
/// use contiguous_view::{Static, View};
/// let view = View::<i32, Static<3>>::default();
/// ```
mod default_needs_empty_extent {}

/// ```compile_fail
/// use contiguous_view::View;
/// #[derive(Clone, Copy)]
/// #[repr(C)]
/// struct Padded(u8, u32);
/// let values = [Padded(1, 2)];
/// let bytes = View::new(&values).as_bytes(); // Added
/// ```
mod padding_is_not_bytes {}

/// ```compile_fail
/// use contiguous_view::ViewMut;
/// let mut flags = [true, false];
/// let mut view = ViewMut::new(&mut flags);
/// let bytes = view.as_bytes_mut(); // Added
/// ```
mod bytes_mut_needs_pod {}
