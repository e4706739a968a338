//! Turns a [`TableData`] grid into a block of styled text.
//!
//! Column widths come from the header style when it sets one, otherwise from
//! the widest cell in the column (plus the cell style's padding and borders).
//! A fixed overall width shrinks the widest columns or widens all of them
//! evenly until the total matches. Cells wider than their column are cut with
//! an ellipsis; narrower cells are left-justified.

use super::data::{TableData, HEADER_ROW};
use super::types::Extent;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Renderer over any table data source.
pub struct Grid<'a, D: TableData + ?Sized> {
    data: &'a D,
    style_for: &'a dyn Fn(i32, usize) -> Style,
    width: Extent,
    height: Extent,
}

impl<'a, D: TableData + ?Sized> Grid<'a, D> {
    /// Creates a renderer that sizes itself to the data.
    pub fn new(data: &'a D, style_for: &'a dyn Fn(i32, usize) -> Style) -> Self {
        Self {
            data,
            style_for,
            width: Extent::Auto,
            height: Extent::Auto,
        }
    }

    /// Fixes the total width in display columns.
    pub fn width(mut self, width: Extent) -> Self {
        self.width = width;
        self
    }

    /// Fixes the number of body lines below the header. Missing lines are
    /// blank, extra rows are dropped.
    pub fn height(mut self, height: Extent) -> Self {
        self.height = height;
        self
    }

    /// Renders the header and body.
    pub fn render(&self) -> String {
        let columns = self.data.columns();
        if columns == 0 {
            return String::new();
        }

        let widths = self.column_widths();
        let total: usize = widths.iter().sum();
        let body_rows = self.height.resolve(self.data.rows());

        let mut lines = Vec::with_capacity(body_rows + 1);
        lines.push(self.render_row(HEADER_ROW, &widths));
        for row in 0..body_rows {
            if row < self.data.rows() {
                lines.push(self.render_row(row as i32, &widths));
            } else {
                lines.push(" ".repeat(total));
            }
        }
        lines.join("\n")
    }

    fn render_row(&self, row: i32, widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, &width)| self.render_cell(row, col, width))
            .collect();
        let parts: Vec<&str> = cells.iter().map(String::as_str).collect();
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn render_cell(&self, row: i32, col: usize, width: usize) -> String {
        let style = frame_only(&(self.style_for)(row, col));
        let inner = width.saturating_sub(frame_width(&style));
        let text = truncate(self.data.at(row, col), inner);
        let padding = inner.saturating_sub(text.width());
        style.render(&format!("{}{}", text, " ".repeat(padding)))
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = (0..self.data.columns())
            .map(|col| self.natural_width(col))
            .collect();
        if let Extent::Fixed(target) = self.width {
            fit_widths(&mut widths, target);
        }
        widths
    }

    fn natural_width(&self, col: usize) -> usize {
        let header = (self.style_for)(HEADER_ROW, col);
        let fixed = header.get_width();
        if fixed > 0 {
            return fixed as usize;
        }
        std::iter::once(HEADER_ROW)
            .chain(0..self.data.rows() as i32)
            .map(|row| {
                let style = (self.style_for)(row, col);
                self.data.at(row, col).width() + frame_width(&style)
            })
            .max()
            .unwrap_or(0)
    }
}

/// The style without its size settings. The column width wins over any width
/// the style asks for, and the cell text arrives already cut and padded.
fn frame_only(style: &Style) -> Style {
    style
        .clone()
        .unset_width()
        .unset_max_width()
        .unset_height()
        .unset_max_height()
}

/// Columns the style adds around its text. Measured from an empty render
/// because border sides only count once a border style is set.
fn frame_width(style: &Style) -> usize {
    lipgloss::width(&frame_only(style).render(""))
}

/// Shrinks the widest columns or widens every column until the widths sum to
/// `target`.
fn fit_widths(widths: &mut [usize], target: usize) {
    if widths.is_empty() {
        return;
    }
    let mut total: usize = widths.iter().sum();
    while total > target {
        let Some(widest) = widths
            .iter()
            .enumerate()
            .max_by_key(|&(i, w)| (*w, std::cmp::Reverse(i)))
            .map(|(i, _)| i)
        else {
            break;
        };
        if widths[widest] == 0 {
            break;
        }
        widths[widest] -= 1;
        total -= 1;
    }
    let mut col = 0;
    while total < target {
        widths[col] += 1;
        total += 1;
        col = (col + 1) % widths.len();
    }
}

/// Cuts `text` to `width` display columns, ending in an ellipsis when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - ELLIPSIS.width().unwrap_or(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        header: Vec<&'static str>,
        rows: Vec<Vec<&'static str>>,
    }

    impl TableData for Fixed {
        fn rows(&self) -> usize {
            self.rows.len()
        }
        fn columns(&self) -> usize {
            self.header.len()
        }
        fn at(&self, row: i32, col: usize) -> &str {
            if row == HEADER_ROW {
                self.header[col]
            } else {
                self.rows[row as usize][col]
            }
        }
    }

    fn plain(_row: i32, _col: usize) -> Style {
        Style::new()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 5), "Hell…");
        assert_eq!(truncate("Hi", 2), "Hi");
        assert_eq!(truncate("Hi", 0), "");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_fit_widths_shrinks_widest_first() {
        let mut widths = vec![10, 4, 6];
        fit_widths(&mut widths, 16);
        assert_eq!(widths, vec![6, 4, 6]);

        fit_widths(&mut widths, 13);
        assert_eq!(widths, vec![4, 4, 5]);
    }

    #[test]
    fn test_fit_widths_grows_evenly() {
        let mut widths = vec![2, 2];
        fit_widths(&mut widths, 7);
        assert_eq!(widths, vec![4, 3]);
    }

    #[test]
    fn test_auto_width_uses_widest_cell() {
        let data = Fixed {
            header: vec!["id", "name"],
            rows: vec![vec!["1", "Alice"], vec!["22", "Bo"]],
        };
        let style = plain;
        let out = Grid::new(&data, &style).render();
        assert_eq!(out, "idname \n1 Alice\n22Bo   ");
    }

    #[test]
    fn test_fixed_height_pads_body() {
        let data = Fixed {
            header: vec!["a"],
            rows: vec![vec!["x"]],
        };
        let style = plain;
        let out = Grid::new(&data, &style).height(Extent::Fixed(3)).render();
        assert_eq!(out, "a\nx\n \n ");

        let out = Grid::new(&data, &style).height(Extent::Fixed(0)).render();
        assert_eq!(out, "a");
    }

    #[test]
    fn test_fixed_width_truncates_cells() {
        let data = Fixed {
            header: vec!["col", "description"],
            rows: vec![vec!["1", "a long description"]],
        };
        let style = plain;
        let out = Grid::new(&data, &style).width(Extent::Fixed(10)).render();
        assert_eq!(out, "coldescri…\n1  a long…");
    }

    #[test]
    fn test_frame_width_counts_rendered_sides_only() {
        assert_eq!(frame_width(&Style::new()), 0);
        assert_eq!(frame_width(&Style::new().bold(true).padding(0, 1, 0, 1)), 2);
        assert_eq!(frame_width(&Style::new().width(12).padding(0, 2, 0, 1)), 3);
        assert_eq!(frame_width(&Style::new().border(normal_border())), 2);
    }

    #[test]
    fn test_cell_style_width_does_not_wrap_rows() {
        let data = Fixed {
            header: vec!["col1"],
            rows: vec![vec!["xxxxxxxx"], vec!["y"]],
        };
        let style = |row: i32, _col: usize| {
            if row == HEADER_ROW {
                Style::new().width(10)
            } else {
                Style::new().width(3)
            }
        };
        let out = Grid::new(&data, &style).render();
        assert_eq!(out, "col1      \nxxxxxxxx  \ny         ");
    }

    #[test]
    fn test_no_columns_renders_nothing() {
        let data = Fixed {
            header: vec![],
            rows: vec![],
        };
        let style = plain;
        assert_eq!(Grid::new(&data, &style).render(), "");
    }
}
