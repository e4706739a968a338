//! A scrollable, keyboard-navigable table.
//!
//! The table shows a header and a window of rows with one selected row. The
//! window has either a fixed height, in which case it scrolls to follow the
//! selection, or an automatic height that shows every row.
//!
//! The pieces are layered:
//!
//! - [`Window`] owns the cursor and scroll offset and keeps the cursor visible.
//! - [`TableView`] projects the header and visible rows into a grid with a
//!   style per cell.
//! - [`Grid`] renders any [`TableData`] into text, truncating cells with an
//!   ellipsis when they exceed their column.
//! - [`Model`] ties them together with focus, key bindings and the
//!   bubbletea-rs update loop.
//!
//! # Example
//!
//! ```rust
//! use bubbletea_table::table::{Column, Model};
//! use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut table = Model::new()
//!     .with_columns(vec![Column::new("Name", 12), Column::new("Origin", 10)])
//!     .with_rows(vec![
//!         vec!["Tim Tams".into(), "Australia".into()],
//!         vec!["Hobnobs".into(), "UK".into()],
//!     ])
//!     .with_focused(true);
//!
//! table.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }));
//! assert_eq!(table.selected_row().unwrap()[0], "Hobnobs");
//! println!("{}\n{}", table.view(), table.help_view());
//! ```

pub mod data;
pub mod keys;
pub mod model;
pub mod render;
pub mod style;
pub mod types;
pub mod window;


pub use data::{TableData, TableView, HEADER_ROW};
pub use keys::{default_key_map, Intent, KeyMap};
pub use model::{Config, Model};
pub use render::Grid;
pub use style::{default_styles, RowKind, StyleFunc, Styles};
pub use types::{Column, Extent, Row};
pub use window::Window;
