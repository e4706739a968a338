//! The addressable view handed to the renderer.
//!
//! [`TableView`] projects the header plus the rows currently inside the
//! scroll window into a grid addressed by `(row, column)`, where row
//! [`HEADER_ROW`] is the header and rows `0..rows()` are the visible data rows
//! relative to the window start. It borrows the table state and is rebuilt for
//! every render.

use super::style::{RowKind, StyleFunc};
use super::types::{Column, Row};
use super::window::Window;
use lipgloss_extras::prelude::*;

/// Row index that addresses the header.
pub const HEADER_ROW: i32 = -1;

/// A grid of strings with a header row, as consumed by the renderer.
pub trait TableData {
    /// Number of data rows, excluding the header.
    fn rows(&self) -> usize;
    /// Number of columns.
    fn columns(&self) -> usize;
    /// The cell text at `row` (or [`HEADER_ROW`]) and `col`.
    fn at(&self, row: i32, col: usize) -> &str;
}

/// Header plus visible rows of a table, with per-cell styles.
pub struct TableView<'a> {
    columns: &'a [Column],
    rows: &'a [Row],
    window: Window,
    style_func: &'a StyleFunc,
}

impl<'a> TableView<'a> {
    /// Builds a view over the given state.
    pub fn new(
        columns: &'a [Column],
        rows: &'a [Row],
        window: Window,
        style_func: &'a StyleFunc,
    ) -> Self {
        Self {
            columns,
            rows,
            window,
            style_func,
        }
    }

    /// Number of data rows shown.
    pub fn visible_row_count(&self) -> usize {
        self.window.visible_rows(self.rows.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cell text. Missing cells (short rows, unknown columns) read as empty.
    pub fn cell_at(&self, row: i32, col: usize) -> &'a str {
        if row == HEADER_ROW {
            return self.columns.get(col).map_or("", |c| c.title.as_str());
        }
        self.absolute_row(row)
            .and_then(|r| self.rows.get(r))
            .and_then(|cells| cells.get(col))
            .map_or("", String::as_str)
    }

    /// The kind of row a view row index refers to.
    pub fn row_kind(&self, row: i32) -> RowKind {
        if row == HEADER_ROW {
            RowKind::Header
        } else if self.absolute_row(row) == Some(self.window.cursor()) {
            RowKind::Selected
        } else {
            RowKind::Normal
        }
    }

    /// Cell style. Header cells of fixed-width columns get that width unless
    /// the style already sets one.
    pub fn style_for(&self, row: i32, col: usize) -> Style {
        let kind = self.row_kind(row);
        let style = (self.style_func)(kind, col);
        match (kind, self.columns.get(col)) {
            (RowKind::Header, Some(column)) if column.width != 0 && style.get_width() <= 0 => {
                style.width(column.width as i32)
            }
            _ => style,
        }
    }

    fn absolute_row(&self, row: i32) -> Option<usize> {
        usize::try_from(row).ok().map(|r| self.window.start() + r)
    }
}

impl TableData for TableView<'_> {
    fn rows(&self) -> usize {
        self.visible_row_count()
    }

    fn columns(&self) -> usize {
        self.column_count()
    }

    fn at(&self, row: i32, col: usize) -> &str {
        self.cell_at(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::style::Styles;
    use crate::table::types::Extent;

    fn rows(n: usize) -> Vec<Row> {
        (0..n).map(|i| vec![format!("r{i}"), format!("v{i}")]).collect()
    }

    fn plain_styles() -> StyleFunc {
        Styles {
            header: Style::new(),
            cell: Style::new(),
            selected: Style::new(),
        }
        .into_style_func()
    }

    #[test]
    fn test_cells_are_relative_to_window_start() {
        let columns = vec![Column::new("A", 0), Column::new("B", 0)];
        let data = rows(10);
        let mut window = Window::new();
        window.set_height(Extent::Fixed(3), data.len());
        window.goto_bottom(data.len());
        let styles = plain_styles();
        let view = TableView::new(&columns, &data, window, &styles);

        assert_eq!(view.visible_row_count(), 3);
        assert_eq!(view.column_count(), 2);
        assert_eq!(view.cell_at(HEADER_ROW, 1), "B");
        assert_eq!(view.cell_at(0, 0), "r7");
        assert_eq!(view.cell_at(2, 1), "v9");
    }

    #[test]
    fn test_short_rows_read_empty() {
        let columns = vec![Column::new("A", 0), Column::new("B", 0)];
        let data = vec![vec!["only".to_string()]];
        let styles = plain_styles();
        let view = TableView::new(&columns, &data, Window::new(), &styles);

        assert_eq!(view.cell_at(0, 0), "only");
        assert_eq!(view.cell_at(0, 1), "");
        assert_eq!(view.cell_at(5, 0), "");
    }

    #[test]
    fn test_row_kinds() {
        let columns = vec![Column::new("A", 0)];
        let data = rows(4);
        let mut window = Window::new();
        window.set_cursor(2, data.len());
        let styles = plain_styles();
        let view = TableView::new(&columns, &data, window, &styles);

        assert_eq!(view.row_kind(HEADER_ROW), RowKind::Header);
        assert_eq!(view.row_kind(1), RowKind::Normal);
        assert_eq!(view.row_kind(2), RowKind::Selected);
    }

    #[test]
    fn test_header_width_comes_from_column() {
        let columns = vec![Column::new("A", 10), Column::new("B", 0)];
        let data = rows(1);
        let styles = plain_styles();
        let view = TableView::new(&columns, &data, Window::new(), &styles);

        assert_eq!(view.style_for(HEADER_ROW, 0).get_width(), 10);
        assert_eq!(view.style_for(HEADER_ROW, 1).get_width(), 0);
        assert_eq!(view.style_for(0, 0).get_width(), 0);
    }

    #[test]
    fn test_explicit_header_width_wins() {
        let columns = vec![Column::new("A", 10)];
        let data = rows(1);
        let styles = Styles {
            header: Style::new().width(4),
            cell: Style::new(),
            selected: Style::new(),
        }
        .into_style_func();
        let view = TableView::new(&columns, &data, Window::new(), &styles);

        assert_eq!(view.style_for(HEADER_ROW, 0).get_width(), 4);
    }
}
