use std::fmt::{self, Debug, Formatter};

/// An element that is neither `Copy` nor `Default`, so views never lean on
/// either.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(i32);

impl Element {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Element({})", self.0)
    }
}

/// `[0, 1, .., N - 1]` as elements.
pub fn make_array<const N: usize>() -> [Element; N] {
    std::array::from_fn(|i| Element::new(i as i32))
}

pub fn values<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Vec<i32> {
    elements.into_iter().map(Element::value).collect()
}
