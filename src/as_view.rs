use crate::{Dynamic, Extent, Static, View, ViewMut};

/// Similar to `AsRef<[T]>`, but returns a [`View`] rather than a reference.
///
/// Arrays produce a view with a [`Static`] extent; slices and vectors produce
/// a [`Dynamic`] one.
///
/// # Examples
///
/// ```
/// use contiguous_view::{AsView, Static, View};
///
/// let array = [1, 2, 3];
/// let fixed: View<'_, i32, Static<3>> = array.as_view();
/// let numbers = vec![1, 2, 3];
/// assert_eq!(fixed, numbers.as_view());
/// ```
pub trait AsView {
    /// The element type.
    type Item;

    /// The extent of the produced view.
    type Extent: Extent;

    /// Returns a [`View`] of every element.
    fn as_view(&self) -> View<'_, Self::Item, Self::Extent>;
}

/// Similar to `AsMut<[T]>`, but returns a [`ViewMut`] rather than a mutable
/// reference.
pub trait AsViewMut: AsView {
    /// Returns a [`ViewMut`] of every element.
    fn as_view_mut(&mut self) -> ViewMut<'_, Self::Item, Self::Extent>;
}

impl<T> AsView for [T] {
    type Item = T;
    type Extent = Dynamic;

    fn as_view(&self) -> View<'_, T> {
        View::new(self)
    }
}

impl<T> AsViewMut for [T] {
    fn as_view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::new(self)
    }
}

impl<T, const N: usize> AsView for [T; N] {
    type Item = T;
    type Extent = Static<N>;

    fn as_view(&self) -> View<'_, T, Static<N>> {
        View::from(self)
    }
}

impl<T, const N: usize> AsViewMut for [T; N] {
    fn as_view_mut(&mut self) -> ViewMut<'_, T, Static<N>> {
        ViewMut::from(self)
    }
}

impl<T> AsView for Vec<T> {
    type Item = T;
    type Extent = Dynamic;

    fn as_view(&self) -> View<'_, T> {
        View::new(self)
    }
}

impl<T> AsViewMut for Vec<T> {
    fn as_view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::new(self)
    }
}

impl<'a, T, E> AsView for View<'a, T, E>
where
    E: Extent,
{
    type Item = T;
    type Extent = E;

    fn as_view(&self) -> View<'_, T, E> {
        *self
    }
}

impl<'a, T, E> AsView for ViewMut<'a, T, E>
where
    E: Extent,
{
    type Item = T;
    type Extent = E;

    fn as_view(&self) -> View<'_, T, E> {
        ViewMut::as_view(self)
    }
}

impl<'a, T, E> AsViewMut for ViewMut<'a, T, E>
where
    E: Extent,
{
    fn as_view_mut(&mut self) -> ViewMut<'_, T, E> {
        self.reborrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn array_keeps_extent() {
        let mut array = [1u8, 2, 3, 4];
        assert_eq!(array.as_view().extent(), Some(4));
        assert_eq!(array.as_view_mut().extent(), Some(4));
        assert_eq!(array[..].as_view().extent(), None);
    }

    #[test]
    pub fn vec_write_through() {
        let mut numbers = vec![1, 2, 3];
        numbers.as_view_mut()[0] = 5;
        assert_eq!(numbers.as_view(), [5, 2, 3]);
    }
}
