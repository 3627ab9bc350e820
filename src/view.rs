use crate::{Dynamic, Extent, Result, Static, ViewMut, raw_view::RawView};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Index, Range},
    str::Utf8Error,
};

/// A read-only view of a contiguous run of `T`.
///
/// A `View` is a pointer and a length. The length is either part of the type
/// ([`Static<N>`]), in which case the view is exactly one pointer wide, or
/// stored next to the pointer ([`Dynamic`], the default). Copying a view
/// copies the pointer and length, never the elements.
///
/// It is semantically equivalent to `&'a [T]` or `&'a [T; N]`, with checked
/// slicing that keeps a static length wherever one is known.
///
/// # Examples
///
/// ```
/// use contiguous_view::{Static, View};
///
/// let numbers = [10, 20, 30, 40, 50];
/// let view = View::new(&numbers);
/// assert_eq!(view.subview(2, Some(3))?, [30, 40, 50]);
/// assert_eq!(view.first(2)?, [10, 20]);
/// assert_eq!(view.last(2)?, [40, 50]);
///
/// let fixed: View<'_, i32, Static<5>> = View::from(&numbers);
/// let pair: View<'_, i32, Static<2>> = fixed.subview_static::<1, 2>()?;
/// assert_eq!(pair, [20, 30]);
/// # Ok::<(), contiguous_view::BoundsError>(())
/// ```
pub struct View<'a, T, E = Dynamic>
where
    E: Extent,
{
    pub(crate) raw: RawView<T, E>,
    pub(crate) marker: PhantomData<&'a T>,
}

unsafe impl<T, E> Send for View<'_, T, E>
where
    T: Sync,
    E: Extent,
{
}

unsafe impl<T, E> Sync for View<'_, T, E>
where
    T: Sync,
    E: Extent,
{
}

impl<T, E> Clone for View<'_, T, E>
where
    E: Extent,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for View<'_, T, E> where E: Extent {}

impl<'a, T> View<'a, T, Dynamic> {
    /// Wraps a slice in a view with a dynamic extent.
    ///
    /// This is the widening construction: it cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::View;
    /// let numbers = vec![1, 2, 3];
    /// let view = View::new(&numbers);
    /// assert_eq!(view.len(), 3);
    /// assert_eq!(view.as_ptr(), numbers.as_ptr());
    /// ```
    pub fn new(slice: &'a [T]) -> Self {
        Self::from_raw(RawView::from_slice(slice))
    }

    /// Converts to a view with a static extent of `N`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Extent`] unless the view holds exactly `N`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::{BoundsError, Static, View};
    /// let numbers = [1, 2, 3];
    /// let view = View::new(&numbers[..]);
    /// let fixed: View<'_, i32, Static<3>> = view.try_into_static()?;
    /// assert_eq!(fixed, [1, 2, 3]);
    /// assert_eq!(
    ///     view.try_into_static::<2>().unwrap_err(),
    ///     BoundsError::Extent { len: 3, extent: 2 },
    /// );
    /// # Ok::<(), BoundsError>(())
    /// ```
    ///
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    pub fn try_into_static<const N: usize>(self) -> Result<View<'a, T, Static<N>>> {
        self.raw.with_extent().map(View::from_raw)
    }
}

impl<'a, T, E> View<'a, T, E>
where
    E: Extent,
{
    pub(crate) const fn from_raw(raw: RawView<T, E>) -> Self {
        Self {
            raw,
            marker: PhantomData,
        }
    }

    /// Wraps a slice in a view after checking its length against the extent.
    ///
    /// This is the narrowing construction. For a [`Dynamic`] extent it always
    /// succeeds; prefer [`View::new`] there.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Extent`] if the extent is static and the
    /// slice length differs from it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::{Static, View};
    /// let numbers = vec![1, 2, 3];
    /// assert!(View::<_, Static<3>>::try_new(&numbers).is_ok());
    /// assert!(View::<_, Static<2>>::try_new(&numbers).is_err());
    /// ```
    ///
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    pub fn try_new(slice: &'a [T]) -> Result<Self> {
        RawView::from_slice(slice).with_extent().map(Self::from_raw)
    }

    /// Creates a view from a pointer and a number of elements.
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
    /// The same requirements as [`std::slice::from_raw_parts`] apply for the
    /// lifetime `'a`, except that `ptr` may be null for an empty view.
    ///
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    /// [`BoundsError::NullPointer`]: crate::BoundsError::NullPointer
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Result<Self> {
        unsafe { RawView::from_raw_parts(ptr.cast_mut(), len) }.map(Self::from_raw)
    }

    /// Creates a view spanning the elements from `range.start` up to, but not
    /// including, `range.end`.
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
    /// allocation, and the elements between them must be valid for reads
    /// for the lifetime `'a`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::{BoundsError, View};
    /// let numbers = [10, 20, 30];
    /// let range = numbers.as_ptr_range();
    /// let view: View<'_, i32> = unsafe { View::from_ptr_range(range.clone())? };
    /// assert_eq!(view, [10, 20, 30]);
    ///
    /// let inverted = unsafe { View::<i32>::from_ptr_range(range.end..range.start) };
    /// assert_eq!(inverted.unwrap_err(), BoundsError::InvertedRange);
    /// # Ok::<(), BoundsError>(())
    /// ```
    ///
    /// [`BoundsError::InvertedRange`]: crate::BoundsError::InvertedRange
    /// [`BoundsError::Extent`]: crate::BoundsError::Extent
    pub unsafe fn from_ptr_range(range: Range<*const T>) -> Result<Self> {
        let range = range.start.cast_mut()..range.end.cast_mut();
        unsafe { RawView::from_ptr_range(range) }.map(Self::from_raw)
    }

    /// Returns a pointer to the first element.
    ///
    /// The pointer is dangling for an empty view that was not created from
    /// storage.
    pub fn as_ptr(&self) -> *const T {
        self.raw.ptr().as_ptr()
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the size of the viewed elements in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::View;
    /// let numbers = [1u32, 2, 3];
    /// assert_eq!(View::new(&numbers).len_bytes(), 12);
    /// ```
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
    pub fn as_slice(&self) -> &'a [T] {
        unsafe { self.raw.as_slice() }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Index`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::{BoundsError, View};
    /// let numbers = [10, 20, 30];
    /// let view = View::new(&numbers);
    /// assert_eq!(view.at(1), Ok(&20));
    /// assert_eq!(view.at(3), Err(BoundsError::Index { index: 3, len: 3 }));
    /// ```
    ///
    /// [`BoundsError::Index`]: crate::BoundsError::Index
    pub fn at(&self, index: usize) -> Result<&'a T> {
        self.raw.element(index).map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Empty`] if the view is empty.
    ///
    /// [`BoundsError::Empty`]: crate::BoundsError::Empty
    pub fn front(&self) -> Result<&'a T> {
        self.raw.front().map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Empty`] if the view is empty.
    ///
    /// [`BoundsError::Empty`]: crate::BoundsError::Empty
    pub fn back(&self) -> Result<&'a T> {
        self.raw.back().map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a view of `count` elements starting at `offset`, or of every
    /// element from `offset` to the end if `count` is `None`.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Offset`] if `offset > len` and with
    /// [`BoundsError::Range`] if `offset + count > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::View;
    /// let numbers = [10, 20, 30, 40, 50];
    /// let view = View::new(&numbers);
    /// assert_eq!(view.subview(1, Some(2))?, [20, 30]);
    /// assert_eq!(view.subview(3, None)?, [40, 50]);
    /// assert!(view.subview(5, Some(0))?.is_empty());
    /// assert!(view.subview(4, Some(2)).is_err());
    /// # Ok::<(), contiguous_view::BoundsError>(())
    /// ```
    ///
    /// [`BoundsError::Offset`]: crate::BoundsError::Offset
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn subview(&self, offset: usize, count: Option<usize>) -> Result<View<'a, T>> {
        self.raw.subview(offset, count).map(View::from_raw)
    }

    /// Returns a view of `COUNT` elements starting at `OFFSET`, with a static
    /// extent.
    ///
    /// Against a static extent the range is checked at compile time: a
    /// subview that cannot fit does not build.
    ///
    /// ```compile_fail
    /// # use contiguous_view::{Static, View};
    /// let numbers = [10, 20, 30];
    /// let view: View<'_, i32, Static<3>> = View::from(&numbers);
    /// let _ = view.subview_static::<2, 2>();
    /// ```
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Offset`] or
    /// [`BoundsError::Range`] when the runtime length is too short.
    ///
    /// [`BoundsError::Offset`]: crate::BoundsError::Offset
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn subview_static<const OFFSET: usize, const COUNT: usize>(
        &self,
    ) -> Result<View<'a, T, Static<COUNT>>> {
        self.raw
            .subview_static::<OFFSET, COUNT>()
            .map(View::from_raw)
    }

    /// Returns a view of every element from `OFFSET` to the end.
    ///
    /// The offset is checked at compile time against a static extent. The
    /// result has a [`Dynamic`] extent.
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Offset`] if
    /// `OFFSET > len`. A static view never fails; use [`subview_rest`] to
    /// keep its extent.
    ///
    /// [`BoundsError::Offset`]: crate::BoundsError::Offset
    /// [`subview_rest`]: View::subview_rest
    pub fn subview_from<const OFFSET: usize>(&self) -> Result<View<'a, T>> {
        self.raw.subview_from::<OFFSET>().map(View::from_raw)
    }

    /// Returns a view of the first `count` elements.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Range`] if `count > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn first(&self, count: usize) -> Result<View<'a, T>> {
        self.raw.first(count).map(View::from_raw)
    }

    /// Returns a view of the last `count` elements.
    ///
    /// # Errors
    ///
    /// Fails with [`BoundsError::Range`] if `count > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn last(&self, count: usize) -> Result<View<'a, T>> {
        self.raw.last(count).map(View::from_raw)
    }

    /// Returns a view of the first `COUNT` elements with a static extent.
    ///
    /// `COUNT` is checked at compile time against a static extent.
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Range`] if
    /// `COUNT > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn first_static<const COUNT: usize>(&self) -> Result<View<'a, T, Static<COUNT>>> {
        self.raw.first_static::<COUNT>().map(View::from_raw)
    }

    /// Returns a view of the last `COUNT` elements with a static extent.
    ///
    /// `COUNT` is checked at compile time against a static extent.
    ///
    /// # Errors
    ///
    /// For a [`Dynamic`] view, fails with [`BoundsError::Range`] if
    /// `COUNT > len`.
    ///
    /// [`BoundsError::Range`]: crate::BoundsError::Range
    pub fn last_static<const COUNT: usize>(&self) -> Result<View<'a, T, Static<COUNT>>> {
        self.raw.last_static::<COUNT>().map(View::from_raw)
    }

    /// Forgets the static extent.
    pub fn into_dynamic(self) -> View<'a, T> {
        View::from_raw(self.raw.into_dynamic())
    }

    /// Exchanges the pointer and length of two views.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns a view of the same memory as raw bytes.
    ///
    /// The byte view has `len_bytes()` elements and starts at the same
    /// address. [`NoUninit`] guarantees that `T` has no padding, so every
    /// byte is initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::View;
    /// let numbers = [0x0102_0304u32];
    /// let bytes = View::new(&numbers).as_bytes();
    /// assert_eq!(bytes.len(), 4);
    /// assert_eq!(bytes, 0x0102_0304u32.to_ne_bytes());
    /// ```
    ///
    /// [`NoUninit`]: bytemuck::NoUninit
    pub fn as_bytes(&self) -> View<'a, u8>
    where
        T: bytemuck::NoUninit,
    {
        View::from_raw(self.raw.bytes())
    }
}

impl<'a, T, const N: usize> View<'a, T, Static<N>> {
    /// Returns a view of every element from `OFFSET` to the end, keeping a
    /// static extent of `REST`.
    ///
    /// `REST` must equal `N - OFFSET`; anything else does not build.
    ///
    /// ```compile_fail
    /// # use contiguous_view::{Static, View};
    /// let numbers = [10, 20, 30, 40, 50];
    /// let view: View<'_, i32, Static<5>> = View::from(&numbers);
    /// let _ = view.subview_rest::<2, 2>();
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::{Static, View};
    /// let numbers = [10, 20, 30, 40, 50];
    /// let view: View<'_, i32, Static<5>> = View::from(&numbers);
    /// let rest: View<'_, i32, Static<3>> = view.subview_rest::<2, 3>();
    /// assert_eq!(rest, [30, 40, 50]);
    /// ```
    pub fn subview_rest<const OFFSET: usize, const REST: usize>(
        &self,
    ) -> View<'a, T, Static<REST>> {
        View::from_raw(self.raw.subview_rest::<OFFSET, REST>())
    }

    /// Returns a view of the same memory as a static run of `BYTES` bytes.
    ///
    /// `BYTES` must equal `N * size_of::<T>()`; anything else does not build.
    ///
    /// ```compile_fail
    /// # use contiguous_view::{Static, View};
    /// let numbers = [1u32, 2];
    /// let view: View<'_, u32, Static<2>> = View::from(&numbers);
    /// let _ = view.as_byte_array::<4>();
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::{Static, View};
    /// let numbers = [1u32, 2];
    /// let view: View<'_, u32, Static<2>> = View::from(&numbers);
    /// let bytes: View<'_, u8, Static<8>> = view.as_byte_array();
    /// assert_eq!(bytes.len(), 8);
    /// ```
    pub fn as_byte_array<const BYTES: usize>(&self) -> View<'a, u8, Static<BYTES>>
    where
        T: bytemuck::NoUninit,
    {
        View::from_raw(self.raw.byte_array::<BYTES>())
    }
}

impl<'a, E> View<'a, u8, E>
where
    E: Extent,
{
    /// Reads the bytes as text.
    ///
    /// The string shares the view's address and length.
    ///
    /// # Errors
    ///
    /// Fails if the bytes are not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contiguous_view::View;
    /// let text = String::from("abacaba");
    /// let view = View::new(text.as_bytes());
    /// let s = view.as_str().unwrap();
    /// assert_eq!(s, "abacaba");
    /// assert_eq!(s.as_ptr(), text.as_ptr());
    /// ```
    pub fn as_str(&self) -> std::result::Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.as_slice())
    }

    /// Reads the bytes as text without checking that they are UTF-8.
    ///
    /// # Safety
    ///
    /// The bytes must be valid UTF-8.
    pub unsafe fn as_str_unchecked(&self) -> &'a str {
        unsafe { std::str::from_utf8_unchecked(self.as_slice()) }
    }
}

impl<T> Default for View<'_, T, Dynamic> {
    fn default() -> Self {
        Self::from_raw(RawView::<T, Dynamic>::empty())
    }
}

impl<T> Default for View<'_, T, Static<0>> {
    fn default() -> Self {
        Self::from_raw(RawView::<T, Static<0>>::empty())
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T, Dynamic> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T, Dynamic> {
    fn from(array: &'a [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T, Static<N>> {
    fn from(array: &'a [T; N]) -> Self {
        Self::from_raw(RawView::from_array(array))
    }
}

impl<'a, T, const N: usize> TryFrom<&'a [T]> for View<'a, T, Static<N>> {
    type Error = crate::BoundsError;

    fn try_from(slice: &'a [T]) -> Result<Self> {
        Self::try_new(slice)
    }
}

impl<'a, T, const N: usize> From<View<'a, T, Static<N>>> for View<'a, T, Dynamic> {
    fn from(view: View<'a, T, Static<N>>) -> Self {
        view.into_dynamic()
    }
}

impl<'a, T, const N: usize> TryFrom<View<'a, T, Dynamic>> for View<'a, T, Static<N>> {
    type Error = crate::BoundsError;

    fn try_from(view: View<'a, T, Dynamic>) -> Result<Self> {
        view.try_into_static()
    }
}

impl<'a, T, E> From<ViewMut<'a, T, E>> for View<'a, T, E>
where
    E: Extent,
{
    fn from(view: ViewMut<'a, T, E>) -> Self {
        view.into_view()
    }
}

impl<'a, E> TryFrom<View<'a, u8, E>> for &'a str
where
    E: Extent,
{
    type Error = Utf8Error;

    fn try_from(view: View<'a, u8, E>) -> std::result::Result<Self, Utf8Error> {
        view.as_str()
    }
}

impl<T, E> Index<usize> for View<'_, T, E>
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

impl<'a, T, E> IntoIterator for View<'a, T, E>
where
    E: Extent,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &View<'a, T, E>
where
    E: Extent,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> AsRef<[T]> for View<'_, T, E>
where
    E: Extent,
{
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E> Debug for View<'_, T, E>
where
    T: Debug,
    E: Extent,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, E> PartialOrd for View<'_, T, E>
where
    T: PartialOrd,
    E: Extent,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, E> Ord for View<'_, T, E>
where
    T: Ord,
    E: Extent,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, E> Hash for View<'_, T, E>
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
    use crate::{BoundsError, Dynamic, Static, View};
    use pretty_assertions::assert_eq;

    static NUMBERS: [i32; 5] = [10, 20, 30, 40, 50];

    #[test]
    pub fn scenario() {
        let view = View::new(&NUMBERS);
        assert_eq!(view.subview(2, Some(3)).unwrap(), [30, 40, 50]);
        assert_eq!(view.first(2).unwrap(), [10, 20]);
        assert_eq!(view.last(2).unwrap(), [40, 50]);

        let end = view.subview(5, Some(0)).unwrap();
        assert!(end.is_empty());
        assert_eq!(end.as_ptr(), NUMBERS.as_ptr_range().end);
    }

    #[test]
    pub fn default_is_empty() {
        let view = View::<i32>::default();
        assert_eq!(view.len(), 0);
        assert_eq!(view.len_bytes(), 0);
        assert!(view.is_empty());
        assert_eq!(view.front(), Err(BoundsError::Empty));
        assert_eq!(view.back(), Err(BoundsError::Empty));
        assert_eq!(view.at(0), Err(BoundsError::Index { index: 0, len: 0 }));
        assert_eq!(view, [0; 0]);

        let fixed = View::<i32, Static<0>>::default();
        assert_eq!(fixed.front(), Err(BoundsError::Empty));
        assert_eq!(fixed.extent(), Some(0));
    }

    #[test]
    pub fn subview_addresses() {
        let view = View::new(&NUMBERS);
        for offset in 0..=NUMBERS.len() {
            for count in 0..=NUMBERS.len() - offset {
                let sub = view.subview(offset, Some(count)).unwrap();
                assert_eq!(sub.as_ptr(), NUMBERS.as_ptr().wrapping_add(offset));
                assert_eq!(sub.len(), count);
            }
        }
    }

    #[test]
    pub fn dynamic_to_static() {
        for len in 0..=NUMBERS.len() {
            let view = View::new(&NUMBERS[..len]);
            let result = View::<i32, Static<3>>::try_from(view);
            if len == 3 {
                assert_eq!(result.unwrap().as_ptr(), NUMBERS.as_ptr());
            } else {
                assert_eq!(result.unwrap_err(), BoundsError::Extent { len, extent: 3 });
            }
        }
    }

    #[test]
    pub fn static_to_dynamic() {
        let fixed: View<'_, i32, Static<5>> = View::from(&NUMBERS);
        let view: View<'_, i32, Dynamic> = fixed.into();
        assert_eq!(view.as_ptr(), fixed.as_ptr());
        assert_eq!(view.len(), 5);
        assert_eq!(view.extent(), None);
    }

    #[test]
    pub fn index() {
        let view = View::new(&NUMBERS);
        assert_eq!(view[0], 10);
        assert_eq!(view[4], 50);
        assert!(std::ptr::eq(&view[2], &NUMBERS[2]));
    }

    #[test]
    #[should_panic(expected = "index 5 out of range for view of length 5")]
    pub fn index_out_of_bounds() {
        let view = View::new(&NUMBERS);
        let _ = view[5];
    }

    #[test]
    pub fn swap() {
        let other = [1, 2];
        let mut a = View::new(&NUMBERS);
        let mut b = View::new(&other);
        a.swap(&mut b);
        assert_eq!(a, [1, 2]);
        assert_eq!(b, NUMBERS);
    }

    #[test]
    pub fn debug() {
        let view = View::new(&NUMBERS[..2]);
        assert_eq!(format!("{view:?}"), "[10, 20]");
    }
}
