//! Cell styling.
//!
//! Every cell is styled by a [`StyleFunc`], called with the kind of row the
//! cell sits in and its column index. [`Styles`] is the ordinary way to build
//! one; a custom closure can replace it entirely.
//!
//! ```rust
//! use bubbletea_table::table::{RowKind, StyleFunc, Styles};
//! use lipgloss_extras::prelude::*;
//! use std::sync::Arc;
//!
//! let styles = Styles::default();
//! let striped: StyleFunc = Arc::new(move |kind, col| match kind {
//!     RowKind::Normal if col % 2 == 1 => styles.cell.clone().faint(true),
//!     other => styles.style(other),
//! });
//! ```

use lipgloss_extras::prelude::*;
use std::sync::Arc;

/// Which part of the table a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// The column titles.
    Header,
    /// An unselected data row.
    Normal,
    /// The data row under the cursor.
    Selected,
}

/// Decides the style of a cell from its row kind and column index.
pub type StyleFunc = Arc<dyn Fn(RowKind, usize) -> Style + Send + Sync>;

/// The three styles used by the default style function.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header cells.
    pub header: Style,
    /// Unselected data cells.
    pub cell: Style,
    /// Cells of the selected row.
    pub selected: Style,
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}

impl Styles {
    /// The style for a row kind, ignoring the column.
    pub fn style(&self, kind: RowKind) -> Style {
        match kind {
            RowKind::Header => self.header.clone(),
            RowKind::Normal => self.cell.clone(),
            RowKind::Selected => self.selected.clone(),
        }
    }

    /// Wraps these styles into a style function.
    pub fn into_style_func(self) -> StyleFunc {
        Arc::new(move |kind, _col| self.style(kind))
    }
}

/// Bold padded header, padded cells, pink bold selection.
pub fn default_styles() -> Styles {
    Styles {
        header: Style::new().bold(true).padding(0, 1, 0, 1),
        cell: Style::new().padding(0, 1, 0, 1),
        selected: Style::new().bold(true).foreground(Color::from("212")),
    }
}
