//! Navigation intents and the key bindings that produce them.

use crate::key::{self, Binding};
use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SPACEBAR: char = ' ';

/// A navigation request, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intent {
    /// Up one row.
    LineUp,
    /// Down one row.
    LineDown,
    /// Up one window height.
    PageUp,
    /// Down one window height.
    PageDown,
    /// Up half a window height.
    HalfPageUp,
    /// Down half a window height.
    HalfPageDown,
    /// To the first row.
    GotoTop,
    /// To the last row.
    GotoBottom,
}

/// Key bindings for table navigation.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Up one row.
    pub line_up: Binding,
    /// Down one row.
    pub line_down: Binding,
    /// Up one page.
    pub page_up: Binding,
    /// Down one page.
    pub page_down: Binding,
    /// Up half a page.
    pub half_page_up: Binding,
    /// Down half a page.
    pub half_page_down: Binding,
    /// To the first row.
    pub goto_top: Binding,
    /// To the last row.
    pub goto_bottom: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl KeyMap {
    /// The intent bound to this key, if any. Bindings are checked in
    /// declaration order, so the first match wins.
    pub fn intent_for(&self, msg: &KeyMsg) -> Option<Intent> {
        [
            (&self.line_up, Intent::LineUp),
            (&self.line_down, Intent::LineDown),
            (&self.page_up, Intent::PageUp),
            (&self.page_down, Intent::PageDown),
            (&self.half_page_up, Intent::HalfPageUp),
            (&self.half_page_down, Intent::HalfPageDown),
            (&self.goto_top, Intent::GotoTop),
            (&self.goto_bottom, Intent::GotoBottom),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(msg))
        .map(|(_, intent)| intent)
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.line_up, &self.line_down]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.line_up,
                &self.line_down,
                &self.goto_top,
                &self.goto_bottom,
            ],
            vec![
                &self.page_up,
                &self.page_down,
                &self.half_page_up,
                &self.half_page_down,
            ],
        ]
    }
}

/// Arrow keys and vim-style letters.
///
/// | Intent | Keys |
/// |--------|------|
/// | line up | `↑`, `k` |
/// | line down | `↓`, `j` |
/// | page up | `b`, `pgup` |
/// | page down | `f`, `pgdown`, space |
/// | half page up | `u`, `ctrl+u` |
/// | half page down | `d`, `ctrl+d` |
/// | top | `home`, `g` |
/// | bottom | `end`, `G` |
pub fn default_key_map() -> KeyMap {
    KeyMap {
        line_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
        line_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]).with_help("↓/j", "down"),
        page_up: Binding::new(vec![KeyCode::Char('b'), KeyCode::PageUp])
            .with_help("b/pgup", "page up"),
        page_down: Binding::new(vec![
            KeyCode::Char('f'),
            KeyCode::PageDown,
            KeyCode::Char(SPACEBAR),
        ])
        .with_help("f/pgdn", "page down"),
        half_page_up: Binding::new(vec!["u", "ctrl+u"]).with_help("u", "½ page up"),
        half_page_down: Binding::new(vec!["d", "ctrl+d"]).with_help("d", "½ page down"),
        goto_top: Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
            .with_help("g/home", "go to start"),
        goto_bottom: Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
            .with_help("G/end", "go to end"),
    }
}
