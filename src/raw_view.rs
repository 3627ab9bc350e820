use crate::{
    BoundsError, Dynamic, Extent, Result, Static,
    error::{check, check_index, check_not_empty, check_subview},
    extent::max_len,
};
use std::{fmt, marker::PhantomData, mem::size_of, ops::Range, ptr::NonNull};

/// The pointer and length shared by [`View`] and [`ViewMut`].
///
/// # Safety
///
/// A `RawView` does not track any lifetime and performs no borrow checking.
/// Every method assumes that `ptr` is valid for `len` consecutive elements,
/// or is dangling with a length of zero. Anything that turns a `RawView` back
/// into references must apply a lifetime that respects the aliasing rules.
///
/// [`View`]: crate::View
/// [`ViewMut`]: crate::ViewMut
pub(crate) struct RawView<T, E>
where
    E: Extent,
{
    ptr: NonNull<T>,
    len: E::Storage,
    marker: PhantomData<E>,
}

impl<T, E> Clone for RawView<T, E>
where
    E: Extent,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for RawView<T, E> where E: Extent {}

impl<T, E> fmt::Debug for RawView<T, E>
where
    E: Extent,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawView")
            .field("ptr", &self.ptr)
            .field("len", &self.len())
            .finish()
    }
}

impl<T, E> RawView<T, E>
where
    E: Extent,
{
    /// Creates a raw view without checking `len` against the extent.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `len` elements and `E::check(len)` must hold.
    pub(crate) const unsafe fn new_unchecked(ptr: NonNull<T>, len: E::Storage) -> Self {
        Self {
            ptr,
            len,
            marker: PhantomData,
        }
    }

    /// Creates a raw view after checking `len` against the extent.
    ///
    /// A null `ptr` is accepted for an empty run and replaced with a dangling
    /// pointer; with any other length it is an error.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `len` elements.
    pub(crate) unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Result<Self> {
        E::check(len)?;
        let ptr = match NonNull::new(ptr) {
            Some(ptr) => ptr,
            None => {
                check(len == 0, || BoundsError::NullPointer { len })?;
                NonNull::dangling()
            }
        };
        Ok(unsafe { Self::new_unchecked(ptr, E::store(len)) })
    }

    /// Creates a raw view spanning `range`.
    ///
    /// # Safety
    ///
    /// If `range.start <= range.end`, the range must lie within a single
    /// allocation and be valid for all of its elements.
    pub(crate) unsafe fn from_ptr_range(range: Range<*mut T>) -> Result<Self> {
        let Range { start, end } = range;
        check(start <= end, || BoundsError::InvertedRange)?;
        let len = match size_of::<T>() {
            0 => 0,
            size => (end.addr() - start.addr()) / size,
        };
        unsafe { Self::from_raw_parts(start, len) }
    }

    pub(crate) const fn ptr(self) -> NonNull<T> {
        self.ptr
    }

    pub(crate) fn len(self) -> usize {
        E::len(self.len)
    }

    /// Reinterprets the extent after checking the length against it.
    pub(crate) fn with_extent<F>(self) -> Result<RawView<T, F>>
    where
        F: Extent,
    {
        let len = self.len();
        F::check(len)?;
        Ok(unsafe { RawView::new_unchecked(self.ptr, F::store(len)) })
    }

    pub(crate) fn into_dynamic(self) -> RawView<T, Dynamic> {
        unsafe { RawView::new_unchecked(self.ptr, self.len()) }
    }

    /// Selects `count` elements starting at `offset` without any checks.
    ///
    /// # Safety
    ///
    /// `offset + count <= self.len()` and `F::check(count)` must hold.
    unsafe fn slice_unchecked<F>(self, offset: usize, count: usize) -> RawView<T, F>
    where
        F: Extent,
    {
        unsafe { RawView::new_unchecked(self.ptr.add(offset), F::store(count)) }
    }

    pub(crate) fn element(self, index: usize) -> Result<NonNull<T>> {
        check_index(index, self.len())?;
        Ok(unsafe { self.ptr.add(index) })
    }

    pub(crate) fn front(self) -> Result<NonNull<T>> {
        check_not_empty(self.len())?;
        Ok(self.ptr)
    }

    pub(crate) fn back(self) -> Result<NonNull<T>> {
        let len = self.len();
        check_not_empty(len)?;
        Ok(unsafe { self.ptr.add(len - 1) })
    }

    pub(crate) fn subview(self, offset: usize, count: Option<usize>) -> Result<RawView<T, Dynamic>> {
        let count = check_subview(offset, count, self.len())?;
        Ok(unsafe { self.slice_unchecked(offset, count) })
    }

    pub(crate) fn subview_static<const OFFSET: usize, const COUNT: usize>(
        self,
    ) -> Result<RawView<T, Static<COUNT>>> {
        const {
            assert!(OFFSET <= max_len::<E>(), "subview offset exceeds the static extent");
            assert!(
                COUNT <= max_len::<E>() - OFFSET,
                "subview exceeds the static extent"
            );
        }
        let count = check_subview(OFFSET, Some(COUNT), self.len())?;
        Ok(unsafe { self.slice_unchecked(OFFSET, count) })
    }

    pub(crate) fn subview_from<const OFFSET: usize>(self) -> Result<RawView<T, Dynamic>> {
        const {
            assert!(OFFSET <= max_len::<E>(), "subview offset exceeds the static extent");
        }
        self.subview(OFFSET, None)
    }

    pub(crate) fn first(self, count: usize) -> Result<RawView<T, Dynamic>> {
        self.subview(0, Some(count))
    }

    pub(crate) fn last(self, count: usize) -> Result<RawView<T, Dynamic>> {
        let len = self.len();
        check(count <= len, || BoundsError::Range {
            offset: len.saturating_sub(count),
            count,
            len,
        })?;
        Ok(unsafe { self.slice_unchecked(len - count, count) })
    }

    pub(crate) fn first_static<const COUNT: usize>(self) -> Result<RawView<T, Static<COUNT>>> {
        const {
            assert!(COUNT <= max_len::<E>(), "prefix exceeds the static extent");
        }
        self.subview_static::<0, COUNT>()
    }

    pub(crate) fn last_static<const COUNT: usize>(self) -> Result<RawView<T, Static<COUNT>>> {
        const {
            assert!(COUNT <= max_len::<E>(), "suffix exceeds the static extent");
        }
        let raw = self.last(COUNT)?;
        Ok(unsafe { RawView::new_unchecked(raw.ptr, ()) })
    }

    /// The same memory as raw bytes.
    ///
    /// The caller decides whether reading or writing those bytes is sound;
    /// see the bounds on [`View::as_bytes`] and [`ViewMut::as_bytes_mut`].
    ///
    /// [`View::as_bytes`]: crate::View::as_bytes
    /// [`ViewMut::as_bytes_mut`]: crate::ViewMut::as_bytes_mut
    pub(crate) fn bytes(self) -> RawView<u8, Dynamic> {
        unsafe { RawView::new_unchecked(self.ptr.cast(), self.len_bytes()) }
    }

    pub(crate) fn len_bytes(self) -> usize {
        self.len() * size_of::<T>()
    }

    /// # Safety
    ///
    /// The returned lifetime is unbounded. The caller must bound it to the
    /// borrow the raw view came from and must not create a mutable reference
    /// to the same elements while it lives.
    pub(crate) unsafe fn as_slice<'a>(self) -> &'a [T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len()) }
    }

    /// # Safety
    ///
    /// The returned lifetime is unbounded. The caller must bound it to an
    /// exclusive borrow of the elements.
    pub(crate) unsafe fn as_mut_slice<'a>(self) -> &'a mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len()) }
    }
}

impl<T> RawView<T, Dynamic> {
    /// An empty raw view at a dangling address.
    pub(crate) const fn empty() -> Self {
        unsafe { Self::new_unchecked(NonNull::dangling(), 0) }
    }

    pub(crate) fn from_slice(slice: &[T]) -> Self {
        unsafe { Self::new_unchecked(NonNull::from(slice).cast(), slice.len()) }
    }

    pub(crate) fn from_mut_slice(slice: &mut [T]) -> Self {
        let len = slice.len();
        unsafe { Self::new_unchecked(NonNull::from(slice).cast(), len) }
    }
}

impl<T> RawView<T, Static<0>> {
    /// An empty raw view at a dangling address.
    pub(crate) const fn empty() -> Self {
        unsafe { Self::new_unchecked(NonNull::dangling(), ()) }
    }
}

impl<T, const N: usize> RawView<T, Static<N>> {
    pub(crate) fn from_array(array: &[T; N]) -> Self {
        unsafe { Self::new_unchecked(NonNull::from(array).cast(), ()) }
    }

    pub(crate) fn from_mut_array(array: &mut [T; N]) -> Self {
        unsafe { Self::new_unchecked(NonNull::from(array).cast(), ()) }
    }

    /// The `REST` elements from `OFFSET` to the end, keeping a static extent.
    pub(crate) fn subview_rest<const OFFSET: usize, const REST: usize>(
        self,
    ) -> RawView<T, Static<REST>> {
        const {
            assert!(OFFSET <= N, "subview offset exceeds the static extent");
            assert!(
                REST == N - OFFSET,
                "rest must equal the extent minus the offset"
            );
        }
        unsafe { self.slice_unchecked(OFFSET, REST) }
    }

    /// The same memory as a static run of `BYTES` bytes.
    pub(crate) fn byte_array<const BYTES: usize>(self) -> RawView<u8, Static<BYTES>> {
        const {
            assert!(
                BYTES == N * size_of::<T>(),
                "byte count must equal the extent times the element size"
            );
        }
        unsafe { RawView::new_unchecked(self.ptr.cast(), ()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NUMBERS: [u32; 5] = [10, 20, 30, 40, 50];

    #[test]
    pub fn subview_pointers() {
        let raw = RawView::from_slice(&NUMBERS);
        let base = NUMBERS.as_ptr();
        for offset in 0..=NUMBERS.len() {
            for count in 0..=NUMBERS.len() - offset {
                let sub = raw.subview(offset, Some(count)).unwrap();
                assert_eq!(sub.ptr().as_ptr().cast_const(), base.wrapping_add(offset));
                assert_eq!(sub.len(), count);
            }
        }
    }

    #[test]
    pub fn static_storage_is_free() {
        assert_eq!(size_of::<RawView<u64, Static<5>>>(), size_of::<*const u64>());
        assert_eq!(size_of::<RawView<u64, Dynamic>>(), size_of::<&[u64]>());
    }

    #[test]
    pub fn with_extent() {
        let raw = RawView::from_slice(&NUMBERS);
        assert!(raw.with_extent::<Static<5>>().is_ok());
        assert_eq!(
            raw.with_extent::<Static<4>>().unwrap_err(),
            BoundsError::Extent { len: 5, extent: 4 }
        );
    }

    #[test]
    pub fn ptr_range() {
        let mut numbers = NUMBERS;
        let range = numbers.as_mut_ptr_range();
        let raw = unsafe { RawView::<u32, Dynamic>::from_ptr_range(range.clone()) }.unwrap();
        assert_eq!(raw.len(), 5);
        let inverted = range.end..range.start;
        assert_eq!(
            unsafe { RawView::<u32, Dynamic>::from_ptr_range(inverted) }.unwrap_err(),
            BoundsError::InvertedRange
        );
    }

    #[test]
    pub fn null_is_empty() {
        let raw =
            unsafe { RawView::<u32, Dynamic>::from_raw_parts(std::ptr::null_mut(), 0) }.unwrap();
        assert_eq!(raw.len(), 0);
        assert_eq!(raw.ptr(), NonNull::dangling());
    }

    #[test]
    pub fn subview_rest() {
        let raw: RawView<u32, Static<5>> = RawView::from_array(&NUMBERS);
        let rest = raw.subview_rest::<2, 3>();
        assert_eq!(unsafe { rest.as_slice() }, &[30, 40, 50]);
        let end = raw.subview_rest::<5, 0>();
        assert_eq!(end.ptr().as_ptr().cast_const(), NUMBERS.as_ptr_range().end);
    }

    #[test]
    pub fn null_with_length_fails() {
        let raw = unsafe { RawView::<u32, Dynamic>::from_raw_parts(std::ptr::null_mut(), 3) };
        assert_eq!(raw.unwrap_err(), BoundsError::NullPointer { len: 3 });
        let raw = unsafe { RawView::<u32, Static<3>>::from_raw_parts(std::ptr::null_mut(), 3) };
        assert_eq!(raw.unwrap_err(), BoundsError::NullPointer { len: 3 });
    }

    #[test]
    pub fn from_mut_slice() {
        let mut numbers = NUMBERS;
        let base = numbers.as_mut_ptr();
        let raw = RawView::from_mut_slice(&mut numbers[1..]);
        assert_eq!(raw.len(), 4);
        assert_eq!(raw.ptr().as_ptr(), base.wrapping_add(1));
        let slice = unsafe { raw.as_mut_slice() };
        slice[0] = 21;
        assert_eq!(numbers, [10, 21, 30, 40, 50]);
    }

    #[test]
    pub fn last() {
        let raw = RawView::from_slice(&NUMBERS);
        let tail = raw.last(2).unwrap();
        assert_eq!(unsafe { tail.as_slice() }, &[40, 50]);
        assert_eq!(
            raw.last(6).unwrap_err(),
            BoundsError::Range {
                offset: 0,
                count: 6,
                len: 5
            }
        );
    }
}
