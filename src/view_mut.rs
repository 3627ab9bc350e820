use crate::{Dynamic, Extent, Result, Static, View, raw_view::RawView};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut, Range},
};

/// A mutable view of a contiguous run of `T`.
///
/// A `ViewMut` applies the same borrowing rules as a mutable reference. It is
/// semantically equivalent to `&'a mut [T]` or `&'a mut [T; N]`. Unlike
/// [`View`] it is not `Copy`: use [`reborrow`] for a shorter-lived copy, and
/// [`as_view`] or [`From`] for a read-only one. There is no way back from a
/// [`View`] to a `ViewMut`.
///
/// Slicing methods borrow the view mutably and return a view that lives as
/// long as that borrow.
///
/// # Examples
///
/// ```
/// use contiguous_view::ViewMut;
///
/// let mut numbers = [10, 20, 30, 40, 50];
/// let mut view = ViewMut::new(&mut numbers);
/// *view.at_mut(1)? = 21;
/// for n in view.subview(3, None)?.iter_mut() {
///     *n += 1;
/// }
/// assert_eq!(numbers, [10, 21, 30, 41, 51]);
/// # Ok::<(), contiguous_view::BoundsError>(())
/// ```
///
/// [`reborrow`]: ViewMut::reborrow
/// [`as_view`]: ViewMut::as_view
pub struct ViewMut<'a, T, E = Dynamic>
where
    E: Extent,
{
    pub(crate) raw: RawView<T, E>,
    pub(crate) marker: PhantomData<&'a mut T>,
}

unsafe impl<T, E> Send for ViewMut<'_, T, E>
where
    T: Send,
    E: Extent,
{
}

unsafe impl<T, E> Sync for ViewMut<'_, T, E>
where
    T: Sync,
    E: Extent,
{
}

impl<'a, T> ViewMut<'a, T, Dynamic> {
    /// Wraps a mutable slice in a view with a dynamic extent.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self::from_raw(RawView::from_mut_slice(slice))
    }

    /// Converts to a view with a static extent of `N`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Extent`] unless the view holds exactly `N`
    /// elements.
    ///
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    pub fn try_into_static<const N: usize>(self) -> Result<ViewMut<'a, T, Static<N>>> {
        self.raw.with_extent().map(ViewMut::from_raw)
    }
}

impl<'a, T, E> ViewMut<'a, T, E>
where
    E: Extent,
{
    pub(crate) const fn from_raw(raw: RawView<T, E>) -> Self {
        Self {
            raw,
            marker: PhantomData,
        }
    }

    /// Wraps a mutable slice in a view after checking its length against the
    /// extent.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Extent`] if the extent is static and the
    /// slice length differs from it.
    ///
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    pub fn try_new(slice: &'a mut [T]) -> Result<Self> {
        RawView::from_mut_slice(slice)
            .with_extent()
            .map(Self::from_raw)
    }

    /// Creates a mutable view from a pointer and a number of elements.
    ///
    /// A null `ptr` is accepted when `len` is zero.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Extent`] if the extent is static and `len`
    /// differs from it, and with [`BoundsError::NullPointer`] if `ptr` is
    /// null and `len` is not zero.
    ///
    /// # Safety
    ///
    /// The same requirements as [`std::slice::from_raw_parts_mut`] apply for
    /// the lifetime `'a`, except that `ptr` may be null for an empty view.
    ///
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    /// [`BoundsError::NullPointer`]: crate::BoundsError::NullPointer
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Result<Self> {
        unsafe { RawView::from_raw_parts(ptr, len) }.map(Self::from_raw)
    }

    /// Creates a mutable view spanning the elements from `range.start` up to,
    /// but not including, `range.end`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::InvertedRange`] if `range.end` comes before
    /// `range.start`, and with [`BoundsError::Extent`] if the extent is
    /// static and the distance differs from it.
    ///
    /// # Safety
    ///
    /// Both pointers must lie within, or one past the end of, the same
    /// allocation, and nothing else may access the elements between them for
    /// the lifetime `'a`.
    ///
    /// [`BoundsError::InvertedRange`]: crate::BoundsError::InvertedRange
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    pub unsafe fn from_ptr_range(range: Range<*mut T>) -> Result<Self> {
        unsafe { RawView::from_ptr_range(range) }.map(Self::from_raw)
    }

    /// Returns a shorter-lived mutable view of the same elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::ViewMut;
    /// let mut numbers = [1, 2, 3];
    /// let mut view = ViewMut::new(&mut numbers);
    /// *view.reborrow().front_mut()? = 10;
    /// *view.back_mut()? = 30;
    /// assert_eq!(numbers, [10, 2, 30]);
    /// # Ok::<(), contiguous_view::BoundsError>(())
    /// ```
    pub fn reborrow(&mut self) -> ViewMut<'_, T, E> {
        ViewMut::from_raw(self.raw)
    }

    /// Returns a read-only view of the same elements.
    pub fn as_view(&self) -> View<'_, T, E> {
        View::from_raw(self.raw)
    }

    /// Converts into a read-only view for the rest of the borrow.
    pub fn into_view(self) -> View<'a, T, E> {
        View::from_raw(self.raw)
    }

    /// Returns a pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.raw.ptr().as_ptr()
    }

    /// Returns a mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.ptr().as_ptr()
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the size of the viewed elements in bytes.
    pub fn len_bytes(&self) -> usize {
        self.raw.len_bytes()
    }

    /// Returns true if the view contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the static extent, or `None` for a [`Dynamic`] view.
    pub fn extent(&self) -> Option<usize> {
        E::STATIC
    }

    /// Returns the viewed elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { self.raw.as_slice() }
    }

    /// Returns the viewed elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { self.raw.as_mut_slice() }
    }

    /// Converts into a mutable slice for the rest of the borrow.
    pub fn into_mut_slice(self) -> &'a mut [T] {
        unsafe { self.raw.as_mut_slice() }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Index`] if `index >= len`.
    ///
    /// [`BoundsError::Index`]: crate::BoundsError::Index
    pub fn at(&self, index: usize) -> Result<&T> {
        self.raw.element(index).map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Index`] if `index >= len`.
    ///
    /// [`BoundsError::Index`]: crate::BoundsError::Index
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.raw.element(index).map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Empty`] if the view is empty.
    ///
    /// [`BoundsError::Empty`]: crate::BoundsError::Empty
    pub fn front(&self) -> Result<&T> {
        self.raw.front().map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Empty`] if the view is empty.
    ///
    /// [`BoundsError::Empty`]: crate::BoundsError::Empty
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.raw.front().map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Empty`] if the view is empty.
    ///
    /// [`BoundsError::Empty`]: crate::BoundsError::Empty
    pub fn back(&self) -> Result<&T> {
        self.raw.back().map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Empty`] if the view is empty.
    ///
    /// [`BoundsError::Empty`]: crate::BoundsError::Empty
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.raw.back().map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Returns a mutable view of `count` elements starting at `offset`, or of
    /// every element from `offset` to the end if `count` is `None`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Offset`] if `offset > len` and with
    /// [`BoundsError::Range`] if `offset + count > len`.
    ///
    /// [`BoundsError::Offset`]: crate::BoundsError::Offset
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn subview(&mut self, offset: usize, count: Option<usize>) -> Result<ViewMut<'_, T>> {
        self.raw.subview(offset, count).map(ViewMut::from_raw)
    }

    /// Returns a mutable view of `COUNT` elements starting at `OFFSET`, with
    /// a static extent.
    ///
    /// Against a static extent the range is checked at compile time.
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Offset`] or
    /// [`BoundsError::Range`] when the runtime length is too short.
    ///
    /// [`BoundsError::Offset`]: crate::BoundsError::Offset
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn subview_static<const OFFSET: usize, const COUNT: usize>(
        &mut self,
    ) -> Result<ViewMut<'_, T, Static<COUNT>>> {
        self.raw
            .subview_static::<OFFSET, COUNT>()
            .map(ViewMut::from_raw)
    }

    /// Returns a mutable view of every element from `OFFSET` to the end.
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Offset`] if
    /// `OFFSET > len`. A static view never fails; use [`subview_rest`] to
    /// keep its extent.
    ///
    /// [`BoundsError::Offset`]: crate::BoundsError::Offset
    /// [`subview_rest`]: ViewMut::subview_rest
    pub fn subview_from<const OFFSET: usize>(&mut self) -> Result<ViewMut<'_, T>> {
        self.raw.subview_from::<OFFSET>().map(ViewMut::from_raw)
    }

    /// Returns a mutable view of the first `count` elements.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Range`] if `count > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn first(&mut self, count: usize) -> Result<ViewMut<'_, T>> {
        self.raw.first(count).map(ViewMut::from_raw)
    }

    /// Returns a mutable view of the last `count` elements.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Range`] if `count > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn last(&mut self, count: usize) -> Result<ViewMut<'_, T>> {
        self.raw.last(count).map(ViewMut::from_raw)
    }

    /// Returns a mutable view of the first `COUNT` elements with a static
    /// extent.
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Range`] if
    /// `COUNT > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn first_static<const COUNT: usize>(&mut self) -> Result<ViewMut<'_, T, Static<COUNT>>> {
        self.raw.first_static::<COUNT>().map(ViewMut::from_raw)
    }

    /// Returns a mutable view of the last `COUNT` elements with a static
    /// extent.
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Range`] if
    /// `COUNT > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn last_static<const COUNT: usize>(&mut self) -> Result<ViewMut<'_, T, Static<COUNT>>> {
        self.raw.last_static::<COUNT>().map(ViewMut::from_raw)
    }

    /// Forgets the static extent.
    pub fn into_dynamic(self) -> ViewMut<'a, T> {
        ViewMut::from_raw(self.raw.into_dynamic())
    }

    /// Exchanges the pointer and length of two views.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns a read-only view of the same memory as raw bytes.
    pub fn as_bytes(&self) -> View<'_, u8>
    where
        T: bytemuck::NoUninit,
    {
        View::from_raw(self.raw.bytes())
    }

    /// Returns a mutable view of the same memory as raw bytes.
    ///
    /// Writes through the byte view change the elements. [`Pod`] guarantees
    /// that `T` has no padding and that any byte pattern is a valid `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::ViewMut;
    /// let mut numbers = [0u16; 2];
    /// let mut view = ViewMut::new(&mut numbers);
    /// view.as_bytes_mut().as_mut_slice().fill(0xff);
    /// assert_eq!(numbers, [u16::MAX; 2]);
    /// ```
    ///
    /// [`Pod`]: bytemuck::Pod
    pub fn as_bytes_mut(&mut self) -> ViewMut<'_, u8>
    where
        T: bytemuck::Pod,
    {
        ViewMut::from_raw(self.raw.bytes())
    }
}

impl<T, const N: usize> ViewMut<'_, T, Static<N>> {
    /// Returns a mutable view of every element from `OFFSET` to the end,
    /// keeping a static extent of `REST`.
    ///
    /// `REST` must equal `N - OFFSET`; anything else does not build.
    pub fn subview_rest<const OFFSET: usize, const REST: usize>(
        &mut self,
    ) -> ViewMut<'_, T, Static<REST>> {
        ViewMut::from_raw(self.raw.subview_rest::<OFFSET, REST>())
    }

    /// Returns a mutable view of the same memory as a static run of `BYTES`
    /// bytes.
    ///
    /// `BYTES` must equal `N * size_of::<T>()`; anything else does not build.
    pub fn as_byte_array_mut<const BYTES: usize>(&mut self) -> ViewMut<'_, u8, Static<BYTES>>
    where
        T: bytemuck::Pod,
    {
        ViewMut::from_raw(self.raw.byte_array::<BYTES>())
    }
}

impl<T> Default for ViewMut<'_, T, Dynamic> {
    fn default() -> Self {
        Self::from_raw(RawView::<T, Dynamic>::empty())
    }
}

impl<T> Default for ViewMut<'_, T, Static<0>> {
    fn default() -> Self {
        Self::from_raw(RawView::<T, Static<0>>::empty())
    }
}

impl<'a, T> From<&'a mut [T]> for ViewMut<'a, T, Dynamic> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for ViewMut<'a, T, Dynamic> {
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for ViewMut<'a, T, Static<N>> {
    fn from(array: &'a mut [T; N]) -> Self {
        Self::from_raw(RawView::from_mut_array(array))
    }
}

impl<'a, T, const N: usize> TryFrom<&'a mut [T]> for ViewMut<'a, T, Static<N>> {
    type Error = crate::BoundsError;

    fn try_from(slice: &'a mut [T]) -> Result<Self> {
        Self::try_new(slice)
    }
}

impl<'a, T, const N: usize> From<ViewMut<'a, T, Static<N>>> for ViewMut<'a, T, Dynamic> {
    fn from(view: ViewMut<'a, T, Static<N>>) -> Self {
        view.into_dynamic()
    }
}

impl<'a, T, const N: usize> TryFrom<ViewMut<'a, T, Dynamic>> for ViewMut<'a, T, Static<N>> {
    type Error = crate::BoundsError;

    fn try_from(view: ViewMut<'a, T, Dynamic>) -> Result<Self> {
        view.try_into_static()
    }
}

impl<T, E> Index<usize> for ViewMut<'_, T, E>
where
    E: Extent,
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T, E> IndexMut<usize> for ViewMut<'_, T, E>
where
    E: Extent,
{
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<'a, T, E> IntoIterator for ViewMut<'a, T, E>
where
    E: Extent,
{
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_mut_slice().iter_mut()
    }
}

impl<T, E> AsRef<[T]> for ViewMut<'_, T, E>
where
    E: Extent,
{
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E> AsMut<[T]> for ViewMut<'_, T, E>
where
    E: Extent,
{
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, E> Debug for ViewMut<'_, T, E>
where
    T: Debug,
    E: Extent,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_view().fmt(f)
    }
}

impl<T, E> PartialOrd for ViewMut<'_, T, E>
where
    T: PartialOrd,
    E: Extent,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, E> Ord for ViewMut<'_, T, E>
where
    T: Ord,
    E: Extent,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, E> Hash for ViewMut<'_, T, E>
where
    T: Hash,
    E: Extent,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoundsError, Static, View, ViewMut};
    use pretty_assertions::assert_eq;

    #[test]
    pub fn writes_reach_storage() {
        let mut numbers = [10, 20, 30];
        let mut view = ViewMut::new(&mut numbers);
        view[1] = 42;
        *view.front_mut().unwrap() += 1;
        *view.back_mut().unwrap() += 2;
        assert_eq!(numbers, [11, 42, 32]);
    }

    #[test]
    pub fn subviews_write_through() {
        let mut numbers = [10, 20, 30, 40, 50];
        let mut view: ViewMut<'_, i32, Static<5>> = ViewMut::from(&mut numbers);
        view.subview_static::<1, 2>().unwrap().as_mut_slice().fill(0);
        view.last_static::<1>().unwrap()[0] = 7;
        view.first(1).unwrap()[0] = 1;
        assert_eq!(numbers, [1, 0, 0, 40, 7]);
    }

    #[test]
    pub fn empty_fails() {
        let mut view = ViewMut::<i32>::default();
        assert_eq!(view.front_mut(), Err(BoundsError::Empty));
        assert_eq!(view.back_mut(), Err(BoundsError::Empty));
        assert_eq!(
            view.at_mut(0),
            Err(BoundsError::Index { index: 0, len: 0 })
        );
    }

    #[test]
    pub fn subview_rest_writes_through() {
        let mut numbers = [1, 2, 3, 4];
        let mut view: ViewMut<'_, i32, Static<4>> = ViewMut::from(&mut numbers);
        let mut rest: ViewMut<'_, i32, Static<1>> = view.subview_rest::<3, 1>();
        rest[0] = 40;
        assert_eq!(numbers, [1, 2, 3, 40]);
    }

    #[test]
    pub fn into_view() {
        let mut numbers = [1, 2, 3];
        let ptr = numbers.as_ptr();
        let view: View<'_, i32> = ViewMut::new(&mut numbers).into();
        assert_eq!(view.as_ptr(), ptr);
        assert_eq!(view, [1, 2, 3]);
    }

    #[test]
    pub fn try_into_static() {
        let mut numbers = [1, 2, 3];
        let view = ViewMut::new(&mut numbers[..]);
        assert_eq!(
            view.try_into_static::<4>().unwrap_err(),
            BoundsError::Extent { len: 3, extent: 4 }
        );
        let view = ViewMut::new(&mut numbers[..]);
        let mut fixed = view.try_into_static::<3>().unwrap();
        fixed[2] = 4;
        assert_eq!(numbers, [1, 2, 4]);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for view of length 3")]
    pub fn index_mut_out_of_bounds() {
        let mut numbers = [1, 2, 3];
        let mut view = ViewMut::new(&mut numbers);
        view[3] = 0;
    }
}
