//! Plain data types shared by the table submodules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One column of the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    /// Text shown in the header.
    pub title: String,
    /// Fixed display width. `0` lets the renderer size the column to its content.
    pub width: usize,
}

impl Column {
    /// Creates a column with a fixed width (`0` for content-sized).
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// One line of data, one string per column.
///
/// Rows shorter than the column list render empty trailing cells; extra cells
/// are ignored.
pub type Row = Vec<String>;

/// A size that is either configured explicitly or derived from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Extent {
    /// Sized from the content: all rows for height, widest cells for width.
    #[default]
    Auto,
    /// Exactly this many rows or display columns.
    Fixed(usize),
}

impl Extent {
    /// The fixed value, if any.
    pub fn fixed(self) -> Option<usize> {
        match self {
            Extent::Auto => None,
            Extent::Fixed(n) => Some(n),
        }
    }

    /// Resolves the extent against the size the content would need.
    pub fn resolve(self, auto: usize) -> usize {
        self.fixed().unwrap_or(auto)
    }
}

impl From<usize> for Extent {
    fn from(n: usize) -> Self {
        Extent::Fixed(n)
    }
}

impl From<i32> for Extent {
    /// Negative values mean automatic sizing.
    fn from(n: i32) -> Self {
        usize::try_from(n).map_or(Extent::Auto, Extent::Fixed)
    }
}

impl From<Option<usize>> for Extent {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Extent::Auto, Extent::Fixed)
    }
}
