use crate::{Extent, View, ViewMut};

macro_rules! uni {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        impl<T, U, E $(, $($b)+)?> PartialEq<$u> for $t
        where
            T: PartialEq<U>,
            E: Extent,
        {
            fn eq(&self, other: &$u) -> bool {
                self.as_slice() == &other[..]
            }
        }
    };
}

macro_rules! bi {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        $crate::eq_impl::uni!($t, $u $(, $($b)+)?);

        impl<T, U, E $(, $($b)+)?> PartialEq<$t> for $u
        where
            U: PartialEq<T>,
            E: Extent,
        {
            fn eq(&self, other: &$t) -> bool {
                &self[..] == other.as_slice()
            }
        }
    };
}

macro_rules! views {
    ($t:ty, $u:ty) => {
        impl<T, U, E, F> PartialEq<$u> for $t
        where
            T: PartialEq<U>,
            E: Extent,
            F: Extent,
        {
            fn eq(&self, other: &$u) -> bool {
                self.as_slice() == other.as_slice()
            }
        }
    };
}

macro_rules! impl_for {
    ($t:ty) => {
        $crate::eq_impl::bi!($t, Vec<U>);
        $crate::eq_impl::bi!($t, [U]);
        $crate::eq_impl::bi!($t, &[U]);
        $crate::eq_impl::bi!($t, &mut [U]);
        $crate::eq_impl::bi!($t, [U; N], const N: usize);
        $crate::eq_impl::bi!($t, &[U; N], const N: usize);
        $crate::eq_impl::bi!($t, &mut [U; N], const N: usize);
        $crate::eq_impl::views!($t, View<'_, U, F>);
        $crate::eq_impl::views!($t, ViewMut<'_, U, F>);
        impl<T, E> Eq for $t where T: Eq, E: Extent {}
    };
}

pub(crate) use bi;
pub(crate) use uni;
pub(crate) use views;

impl_for!(View<'_, T, E>);
impl_for!(ViewMut<'_, T, E>);

#[cfg(test)]
mod tests {
    use crate::{Static, View, ViewMut};

    #[test]
    pub fn against_containers() {
        let numbers = vec![1, 2, 3];
        let view = View::new(&numbers);
        assert!(view == numbers);
        assert!(numbers == view);
        assert!(view == [1, 2, 3]);
        assert!([1, 2, 3] == view);
        assert!(view == numbers[..]);
        assert!(&numbers[..] == view);
        assert!(view != [1, 2]);
        assert!(view != [1, 2, 4]);
    }

    #[test]
    pub fn across_extents() {
        let numbers = [1, 2, 3];
        let mut copy = numbers;
        let fixed: View<'_, i32, Static<3>> = View::from(&numbers);
        let dynamic = View::new(&numbers);
        assert_eq!(fixed, dynamic);
        assert_eq!(ViewMut::new(&mut copy), fixed);
    }

    #[test]
    pub fn mixed_element_types() {
        let strings = ["a", "b"];
        let owned = vec![String::from("a"), String::from("b")];
        assert!(View::new(&owned) == strings);
    }
}
