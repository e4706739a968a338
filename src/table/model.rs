//! The table component.

use super::data::TableView;
use super::keys::{default_key_map, Intent, KeyMap};
use super::render::Grid;
use super::style::{RowKind, StyleFunc, Styles};
use super::types::{Column, Extent, Row};
use super::window::Window;
use crate::help;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Everything a table can be configured with, applied in one pass by
/// [`Model::from_config`].
///
/// ```rust
/// use bubbletea_table::table::{Column, Config, Extent, Model};
///
/// let table = Model::from_config(Config {
///     columns: vec![Column::new("ID", 4), Column::new("Name", 12)],
///     rows: vec![vec!["1".into(), "Alice".into()]],
///     height: Extent::Fixed(10),
///     focused: true,
///     ..Config::default()
/// });
/// assert_eq!(table.height(), 10);
/// ```
#[derive(Clone)]
pub struct Config {
    /// Columns, left to right.
    pub columns: Vec<Column>,
    /// Data rows, top to bottom.
    pub rows: Vec<Row>,
    /// Visible data rows; `Auto` shows all of them.
    pub height: Extent,
    /// Total rendered width; `Auto` sizes columns to their content.
    pub width: Extent,
    /// Whether the table starts out accepting navigation.
    pub focused: bool,
    /// Whether single-line moves wrap between the first and last row.
    pub wrap_cursor: bool,
    /// Header, cell and selection styles.
    pub styles: Styles,
    /// Replaces `styles` entirely when set.
    pub style_func: Option<StyleFunc>,
    /// Navigation bindings.
    pub key_map: KeyMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            height: Extent::Auto,
            width: Extent::Auto,
            focused: false,
            wrap_cursor: false,
            styles: Styles::default(),
            style_func: None,
            key_map: default_key_map(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("height", &self.height)
            .field("width", &self.width)
            .field("focused", &self.focused)
            .field("wrap_cursor", &self.wrap_cursor)
            .field("style_func", &self.style_func.is_some())
            .finish_non_exhaustive()
    }
}

/// A scrollable table with a single selected row.
///
/// Navigation only happens while the table is focused. The selected row is
/// always inside the visible window; with a fixed height the window scrolls
/// just far enough to keep it there.
///
/// # Examples
///
/// ```rust
/// use bubbletea_table::table::{Column, Model};
/// use bubbletea_table::Component;
///
/// let mut table = Model::new()
///     .with_columns(vec![Column::new("City", 10), Column::new("Country", 10)])
///     .with_height(2);
/// table.from_values("Paris,France\nOslo,Norway\nLima,Peru", ",");
/// table.focus();
///
/// table.goto_bottom();
/// assert_eq!(table.cursor(), 2);
/// assert_eq!(table.start(), 1);
/// assert_eq!(table.selected_row().unwrap()[0], "Lima");
/// ```
#[derive(Clone)]
pub struct Model {
    /// Navigation bindings.
    pub key_map: KeyMap,
    /// Help view used by [`Model::help_view`].
    pub help: help::Model,

    columns: Vec<Column>,
    rows: Vec<Row>,
    window: Window,
    width: Extent,
    focus: bool,
    wrap_cursor: bool,
    style_func: StyleFunc,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("window", &self.window)
            .field("width", &self.width)
            .field("focus", &self.focus)
            .field("wrap_cursor", &self.wrap_cursor)
            .finish_non_exhaustive()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// An empty, unfocused table with automatic sizing and default styles.
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Builds a table from a full configuration.
    pub fn from_config(config: Config) -> Self {
        let Config {
            columns,
            rows,
            height,
            width,
            focused,
            wrap_cursor,
            styles,
            style_func,
            key_map,
        } = config;

        let mut window = Window::new();
        window.set_height(height, rows.len());

        Self {
            key_map,
            help: help::Model::new(),
            columns,
            rows,
            window,
            width,
            focus: focused,
            wrap_cursor,
            style_func: style_func.unwrap_or_else(|| styles.into_style_func()),
        }
    }

    /// Sets the columns.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.set_columns(columns);
        self
    }

    /// Sets the rows.
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Sets the number of visible rows.
    pub fn with_height(mut self, height: impl Into<Extent>) -> Self {
        self.set_height(height);
        self
    }

    /// Sets the total rendered width.
    pub fn with_width(mut self, width: impl Into<Extent>) -> Self {
        self.set_width(width);
        self
    }

    /// Sets the focus state.
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focus = focused;
        self
    }

    /// Sets the styles, replacing any custom style function.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.set_styles(styles);
        self
    }

    /// Sets a custom style function.
    pub fn with_style_func<F>(mut self, style_func: F) -> Self
    where
        F: Fn(RowKind, usize) -> Style + Send + Sync + 'static,
    {
        self.set_style_func(style_func);
        self
    }

    /// Sets the key bindings.
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Sets whether single-line moves wrap around.
    pub fn with_wrap_cursor(mut self, wrap: bool) -> Self {
        self.wrap_cursor = wrap;
        self
    }

    /// The columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All rows, not just the visible ones.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Replaces the columns.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Replaces the rows, keeping the cursor inside the new row range.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.window.sync(self.rows.len());
        debug!(
            rows = self.rows.len(),
            cursor = self.window.cursor(),
            "table rows replaced"
        );
    }

    /// Replaces the styles, dropping any custom style function.
    pub fn set_styles(&mut self, styles: Styles) {
        self.style_func = styles.into_style_func();
    }

    /// Replaces the style function.
    pub fn set_style_func<F>(&mut self, style_func: F)
    where
        F: Fn(RowKind, usize) -> Style + Send + Sync + 'static,
    {
        self.style_func = Arc::new(style_func);
    }

    /// Sets the number of visible rows. `Extent::Auto` shows every row.
    pub fn set_height(&mut self, height: impl Into<Extent>) {
        self.window.set_height(height.into(), self.rows.len());
    }

    /// Sets the total rendered width. `Extent::Auto` sizes to content.
    pub fn set_width(&mut self, width: impl Into<Extent>) {
        self.width = width.into();
    }

    /// Number of visible rows: the fixed height, or the row count when automatic.
    ///
    /// With no rows a fixed height is still returned as configured; nothing is
    /// rendered in that case.
    pub fn height(&self) -> usize {
        self.window.effective_height(self.rows.len())
    }

    /// The configured width.
    pub fn width(&self) -> Extent {
        self.width
    }

    /// Whether single-line moves wrap around.
    pub fn wrap_cursor(&self) -> bool {
        self.wrap_cursor
    }

    /// Index of the selected row.
    pub fn cursor(&self) -> usize {
        self.window.cursor()
    }

    /// Index of the first visible row.
    pub fn start(&self) -> usize {
        self.window.start()
    }

    /// Selects row `n`, clamped into the row range.
    pub fn set_cursor(&mut self, n: usize) {
        self.window.set_cursor(n, self.rows.len());
        trace!(cursor = self.cursor(), start = self.start(), "table cursor set");
    }

    /// Moves the selection up by `n` rows. It can not go above the first row.
    pub fn move_up(&mut self, n: usize) {
        self.window.move_up(n, self.rows.len());
    }

    /// Moves the selection down by `n` rows. It can not go below the last row.
    pub fn move_down(&mut self, n: usize) {
        self.window.move_down(n, self.rows.len());
    }

    /// Selects the first row.
    pub fn goto_top(&mut self) {
        self.window.goto_top(self.rows.len());
    }

    /// Selects the last row.
    pub fn goto_bottom(&mut self) {
        self.window.goto_bottom(self.rows.len());
    }

    /// The selected row, or `None` when there are no rows.
    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor())
    }

    /// Replaces the rows by splitting `value` into lines and each line on
    /// `separator`. There is no quoting; an empty separator splits a line into
    /// single characters.
    ///
    /// ```rust
    /// use bubbletea_table::table::Model;
    ///
    /// let mut table = Model::new();
    /// table.from_values("a\tb\nc\td", "\t");
    /// assert_eq!(table.rows(), &[vec!["a", "b"], vec!["c", "d"]]);
    /// ```
    pub fn from_values(&mut self, value: &str, separator: &str) {
        let rows: Vec<Row> = value
            .split('\n')
            .map(|line| {
                if separator.is_empty() {
                    line.chars().map(String::from).collect()
                } else {
                    line.split(separator).map(String::from).collect()
                }
            })
            .collect();
        debug!(lines = rows.len(), separator, "table rows parsed from values");
        self.set_rows(rows);
    }

    /// Performs a navigation intent. Does nothing while unfocused.
    pub fn apply(&mut self, intent: Intent) {
        if !self.focus {
            return;
        }

        let len = self.rows.len();
        let height = self.height();
        match intent {
            Intent::LineUp if self.wrap_cursor && len > 0 && self.cursor() == 0 => {
                self.goto_bottom()
            }
            Intent::LineDown if self.wrap_cursor && len > 0 && self.cursor() + 1 == len => {
                self.goto_top()
            }
            Intent::LineUp => self.move_up(1),
            Intent::LineDown => self.move_down(1),
            Intent::PageUp => self.move_up(height),
            Intent::PageDown => self.move_down(height),
            Intent::HalfPageUp => self.move_up(height / 2),
            Intent::HalfPageDown => self.move_down(height / 2),
            Intent::GotoTop => self.goto_top(),
            Intent::GotoBottom => self.goto_bottom(),
        }
        trace!(
            ?intent,
            cursor = self.cursor(),
            start = self.start(),
            "table navigated"
        );
    }

    /// The header and visible rows as an addressable grid.
    pub fn data(&self) -> TableView<'_> {
        TableView::new(&self.columns, &self.rows, self.window, &self.style_func)
    }

    /// Renders the table.
    pub fn view(&self) -> String {
        let data = self.data();
        let style_for = |row: i32, col: usize| data.style_for(row, col);
        Grid::new(&data, &style_for)
            .width(self.width)
            .height(self.window.height())
            .render()
    }

    /// Renders help for the key map. Not part of [`Model::view`]; call it
    /// where the application wants the help line.
    pub fn help_view(&self) -> String {
        self.help.view(&self.key_map)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if let Some(intent) = self.key_map.intent_for(key_msg) {
                self.apply(intent);
            }
        }
        None
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
