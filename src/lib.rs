#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-table/")]

//! # bubbletea-table
//!
//! A scrollable, keyboard-navigable table component for terminal applications
//! built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The [`Table`] shows a header and a window of rows with a single selected
//! row. With a fixed height the window scrolls to keep the selection visible;
//! with the default automatic height every row is shown. Like other bubbletea
//! components it follows the Elm Architecture: `update()` consumes key
//! messages, `view()` renders the current state.
//!
//! ## Features
//!
//! - **Saturating navigation**: line, page, half page, top and bottom moves
//!   never leave the row range, with optional wrap-around for single-line moves
//! - **Incremental scrolling**: the window only moves as far as the cursor needs
//! - **Styling hooks**: header, cell and selection styles, or a custom style
//!   function per cell
//! - **Type-safe key bindings** with help text rendered by the [`help`] module
//! - **Bulk loading** from delimited text
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_table::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     table: Table,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut table = Table::new()
//!             .with_columns(vec![Column::new("Rank", 4), Column::new("City", 12)])
//!             .with_height(7);
//!         table.from_values("1,Tokyo\n2,Delhi\n3,Shanghai", ",");
//!         let cmd = table.focus();
//!         (Self { table }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.table.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n{}", self.table.view(), self.table.help_view())
//!     }
//! }
//! ```
//!
//! ## Key Bindings
//!
//! | Action | Keys |
//! |--------|------|
//! | Up / down one row | `↑`/`k`, `↓`/`j` |
//! | Page up / down | `b`/`pgup`, `f`/`pgdown`/space |
//! | Half page up / down | `u`/`ctrl+u`, `d`/`ctrl+d` |
//! | First / last row | `home`/`g`, `end`/`G` |

pub mod help;
pub mod key;
pub mod table;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive components.
///
/// A focused component reacts to key messages; a blurred one ignores them.
///
/// ```rust
/// use bubbletea_table::{Component, Table};
///
/// let mut table = Table::new();
/// assert!(!table.focused());
///
/// table.focus();
/// assert!(table.focused());
///
/// table.blur();
/// assert!(!table.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use help::Model as HelpModel;
pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyParseError, KeyPress};
pub use table::{
    default_key_map as table_default_key_map, default_styles as table_default_styles,
    Column, Config as TableConfig, Extent, Intent, KeyMap as TableKeyMap, Model as Table, Row,
    RowKind, StyleFunc, Styles as TableStyles,
};

/// Commonly used types in one import.
///
/// ```rust
/// use bubbletea_table::prelude::*;
///
/// let table = Table::new().with_columns(vec![Column::new("Name", 10)]);
/// assert_eq!(table.columns().len(), 1);
/// ```
pub mod prelude {
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{matches, Binding, KeyMap, KeyPress};
    pub use crate::table::{
        Column, Config as TableConfig, Extent, Intent, KeyMap as TableKeyMap, Model as Table,
        Row, RowKind, Styles as TableStyles,
    };
    pub use crate::Component;
}
