use thiserror::Error;

/// A violated precondition on an index, count, offset, or position range.
///
/// Every checked operation on a view reports its failure with this type.
/// Checks run before anything is read; a failed operation never returns a
/// partially valid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum BoundsError {
    /// An element index at or past the end of the view.
    #[error("index {index} out of range for view of length {len}")]
    Index {
        /// The requested index.
        index: usize,
        /// The length of the view.
        len: usize,
    },
    /// `front` or `back` of an empty view.
    #[error("view is empty")]
    Empty,
    /// A subview offset past the end of the view.
    #[error("offset {offset} out of range for view of length {len}")]
    Offset {
        /// The requested offset.
        offset: usize,
        /// The length of the view.
        len: usize,
    },
    /// A subview whose end lies past the end of the view.
    #[error("range of {count} elements at offset {offset} out of range for view of length {len}")]
    Range {
        /// The requested offset.
        offset: usize,
        /// The requested number of elements.
        count: usize,
        /// The length of the view.
        len: usize,
    },
    /// A run of elements whose length does not match a static extent.
    #[error("length {len} does not match static extent {extent}")]
    Extent {
        /// The runtime length.
        len: usize,
        /// The static extent.
        extent: usize,
    },
    /// A position range whose end comes before its start.
    #[error("position range ends before it starts")]
    InvertedRange,
    /// A null pointer paired with a nonzero length.
    #[error("null pointer with length {len}")]
    NullPointer {
        /// The requested length.
        len: usize,
    },
}

/// Result type for checked view operations.
pub type Result<T> = std::result::Result<T, BoundsError>;

/// Fails with the error built by `error` unless `condition` holds.
#[inline]
pub(crate) fn check(condition: bool, error: impl FnOnce() -> BoundsError) -> Result<()> {
    if condition {
        Ok(())
    } else {
        let error = error();
        log::debug!("bounds check failed: {error}");
        Err(error)
    }
}

/// Checks that `index` addresses an element of a view of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    check(index < len, || BoundsError::Index { index, len })
}

/// Checks that a view of length `len` has at least one element.
pub(crate) fn check_not_empty(len: usize) -> Result<()> {
    check(len > 0, || BoundsError::Empty)
}

/// Checks a subview request and returns the number of elements it selects.
///
/// `count` of `None` selects everything from `offset` to the end.
pub(crate) fn check_subview(offset: usize, count: Option<usize>, len: usize) -> Result<usize> {
    check(offset <= len, || BoundsError::Offset { offset, len })?;
    match count {
        Some(count) => {
            check(count <= len - offset, || BoundsError::Range { offset, count, len })?;
            Ok(count)
        }
        None => Ok(len - offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn check_index() {
        assert_eq!(super::check_index(2, 3), Ok(()));
        assert_eq!(
            super::check_index(3, 3),
            Err(BoundsError::Index { index: 3, len: 3 })
        );
        assert_eq!(
            super::check_index(usize::MAX, 3),
            Err(BoundsError::Index {
                index: usize::MAX,
                len: 3
            })
        );
    }

    #[test]
    pub fn check_subview() {
        assert_eq!(super::check_subview(2, Some(3), 5), Ok(3));
        assert_eq!(super::check_subview(2, None, 5), Ok(3));
        assert_eq!(super::check_subview(5, Some(0), 5), Ok(0));
        assert_eq!(super::check_subview(5, None, 5), Ok(0));
        assert_eq!(
            super::check_subview(6, None, 5),
            Err(BoundsError::Offset { offset: 6, len: 5 })
        );
        assert_eq!(
            super::check_subview(1, Some(5), 5),
            Err(BoundsError::Range {
                offset: 1,
                count: 5,
                len: 5
            })
        );
    }

    #[test]
    pub fn subview_offsets_do_not_overflow() {
        assert!(super::check_subview(usize::MAX, None, 3).is_err());
        assert!(super::check_subview(0, Some(usize::MAX - 1), 3).is_err());
        assert!(super::check_subview(2, Some(usize::MAX), 3).is_err());
    }

    #[test]
    pub fn messages() {
        assert_eq!(
            BoundsError::Index { index: 4, len: 3 }.to_string(),
            "index 4 out of range for view of length 3"
        );
        assert_eq!(BoundsError::Empty.to_string(), "view is empty");
        assert_eq!(
            BoundsError::Extent { len: 2, extent: 3 }.to_string(),
            "length 2 does not match static extent 3"
        );
        assert_eq!(
            BoundsError::NullPointer { len: 3 }.to_string(),
            "null pointer with length 3"
        );
    }
}
