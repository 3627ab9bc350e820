use crate::{BoundsError, error::check};
use std::{fmt::Debug, hash::Hash};

mod private {
    pub trait Sealed {}
}

/// The length classification of a view.
///
/// An extent decides how a view stores its length. [`Static<N>`] carries the
/// length in the type and stores nothing, so a static view is exactly one
/// pointer wide. [`Dynamic`] stores the length as a `usize` next to the
/// pointer.
///
/// This is a sealed trait; [`Static`] and [`Dynamic`] are the only extents.
pub trait Extent: private::Sealed + Copy + Debug + Default + Eq + Hash + 'static {
    /// The runtime representation of the length.
    type Storage: Copy + Debug + Eq;

    /// The compile-time length, or `None` for [`Dynamic`].
    const STATIC: Option<usize>;

    /// Creates the length storage for `len` elements.
    ///
    /// A static extent discards `len` without looking at it. Call
    /// [`Extent::check`] first whenever `len` comes from outside the type
    /// system.
    fn store(len: usize) -> Self::Storage;

    /// Reads the length back out of the storage.
    fn len(storage: Self::Storage) -> usize;

    /// Checks that a run of `len` elements fits this extent.
    fn check(len: usize) -> Result<(), BoundsError> {
        match Self::STATIC {
            Some(extent) => check(len == extent, || BoundsError::Extent { len, extent }),
            None => Ok(()),
        }
    }
}

/// An extent of exactly `N` elements, known at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Static<const N: usize>;

/// An extent known only at run time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dynamic;

impl<const N: usize> private::Sealed for Static<N> {}
impl private::Sealed for Dynamic {}

impl<const N: usize> Extent for Static<N> {
    type Storage = ();

    const STATIC: Option<usize> = Some(N);

    #[inline]
    fn store(_len: usize) -> Self::Storage {}

    #[inline]
    fn len(_storage: Self::Storage) -> usize {
        N
    }
}

impl Extent for Dynamic {
    type Storage = usize;

    const STATIC: Option<usize> = None;

    #[inline]
    fn store(len: usize) -> Self::Storage {
        len
    }

    #[inline]
    fn len(storage: Self::Storage) -> usize {
        storage
    }
}

/// The largest length a view with extent `E` can have, used by the
/// compile-time slicing checks.
pub(crate) const fn max_len<E: Extent>() -> usize {
    match E::STATIC {
        Some(n) => n,
        None => usize::MAX,
    }
}

static_assertions::assert_eq_size!(<Static<0> as Extent>::Storage, ());
static_assertions::assert_eq_size!(<Static<1024> as Extent>::Storage, ());
static_assertions::assert_eq_size!(<Dynamic as Extent>::Storage, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn static_storage_ignores_count() {
        let storage = Static::<3>::store(17);
        assert_eq!(Static::<3>::len(storage), 3);
    }

    #[test]
    pub fn dynamic_storage_round_trips() {
        for len in [0, 1, 5, usize::MAX] {
            assert_eq!(Dynamic::len(Dynamic::store(len)), len);
        }
    }

    #[test]
    pub fn check() {
        assert_eq!(Static::<3>::check(3), Ok(()));
        assert_eq!(
            Static::<3>::check(2),
            Err(BoundsError::Extent { len: 2, extent: 3 })
        );
        assert_eq!(
            Static::<0>::check(1),
            Err(BoundsError::Extent { len: 1, extent: 0 })
        );
        assert_eq!(Dynamic::check(0), Ok(()));
        assert_eq!(Dynamic::check(usize::MAX), Ok(()));
    }

    #[test]
    pub fn max_len() {
        assert_eq!(super::max_len::<Static<7>>(), 7);
        assert_eq!(super::max_len::<Dynamic>(), usize::MAX);
    }
}
