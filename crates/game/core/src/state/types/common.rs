use std::fmt;

/// Stable identifier for a category within a [`CategoryStore`](crate::state::CategoryStore).
///
/// Allocated monotonically by the store and never reused, so two categories
/// with identical titles and options remain distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Placeholder for categories that have not been inserted into a store yet.
    pub const UNASSIGNED: Self = Self(u32::MAX);

    #[inline]
    pub const fn is_assigned(self) -> bool {
        self.0 != Self::UNASSIGNED.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cell address in the category x option grid.
///
/// `row` indexes the category collection, `col` the option sequence of that
/// category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pointer {
    pub row: usize,
    pub col: usize,
}

impl Pointer {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Signed `(row, col)` pair for presentation layers, `(-1, -1)` once finished.
    pub fn as_signed(pointer: Option<Self>) -> (i64, i64) {
        match pointer {
            Some(Self { row, col }) => (row as i64, col as i64),
            None => (-1, -1),
        }
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
