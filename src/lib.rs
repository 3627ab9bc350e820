//! Non-owning views over contiguous runs of elements.
//!
//! A [`View`] borrows a run of `T` and a [`ViewMut`] borrows it mutably.
//! Both carry an [`Extent`] parameter: [`Static<N>`] fixes the length in the
//! type so the view is a single pointer wide, while [`Dynamic`] stores the
//! length alongside the pointer.
//!
//! ```
//! use contiguous_view::{Static, View};
//!
//! let numbers: Vec<u32> = (0..100).collect();
//! let view = View::new(&numbers);
//! let middle = view.subview(10, Some(40)).unwrap();
//! assert_eq!(middle.len(), 40);
//! assert_eq!(middle[0], 10);
//!
//! let head: View<'_, u32, Static<5>> = middle.first_static().unwrap();
//! assert_eq!(head, [10, 11, 12, 13, 14]);
//! ```
//!
//! Checked operations return [`BoundsError`] rather than panicking, and a
//! failed check is reported through the [`log`] facade at debug level.
//! Indexing with `[]` panics with the same message.

mod as_view;
mod conversion_tests;
mod eq_impl;
mod error;
mod extent;
mod raw_view;
#[cfg(feature = "serde")]
mod serde;
mod view;
mod view_mut;

pub use as_view::{AsView, AsViewMut};
pub use error::{BoundsError, Result};
pub use extent::{Dynamic, Extent, Static};
pub use view::View;
pub use view_mut::ViewMut;

use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

assert_eq_size!(View<'static, u64, Static<10>>, *const u64);
assert_eq_size!(View<'static, u64, Dynamic>, &'static [u64]);
assert_eq_size!(Option<View<'static, u64, Static<10>>>, *const u64);
assert_eq_size!(ViewMut<'static, u64, Static<10>>, *mut u64);
assert_eq_size!(ViewMut<'static, u64, Dynamic>, &'static mut [u64]);

assert_impl_all!(View<'static, u8, Static<4>>: Copy, Send, Sync);
assert_impl_all!(ViewMut<'static, u8>: Send, Sync);
assert_not_impl_any!(ViewMut<'static, u8>: Copy, Clone);
assert_not_impl_any!(View<'static, std::cell::Cell<u8>>: Send, Sync);
