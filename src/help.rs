//! Help view generated from key bindings.
//!
//! The help model renders any [`KeyMap`] either as a single line
//! (`↑/k up • ↓/j down`) or, with `show_all`, as aligned columns of bindings.
//! Disabled bindings are skipped. When a width is set, content that does not
//! fit is replaced by an ellipsis.
//!
//! ```rust
//! use bubbletea_table::help::Model;
//! use bubbletea_table::key::{Binding, KeyMap};
//!
//! struct Keys {
//!     quit: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.quit]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.quit]]
//!     }
//! }
//!
//! let keys = Keys { quit: Binding::new(vec!["q"]).with_help("q", "quit") };
//! let help = Model::new().with_width(80);
//! assert!(help.view(&keys).contains("quit"));
//! ```

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the truncation ellipsis.
    pub ellipsis: Style,
    /// Key names in the short view.
    pub short_key: Style,
    /// Descriptions in the short view.
    pub short_desc: Style,
    /// Separator between short view items.
    pub short_separator: Style,
    /// Key names in the full view.
    pub full_key: Style,
    /// Descriptions in the full view.
    pub full_desc: Style,
    /// Gap between full view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    /// Subdued grays that read on both light and dark backgrounds.
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full, multi-column view instead of the single line.
    pub show_all: bool,
    /// Maximum rendered width; `0` means unlimited.
    pub width: usize,
    /// Separator between short view items.
    pub short_separator: String,
    /// Gap between full view columns.
    pub full_separator: String,
    /// Marker appended when content is cut off.
    pub ellipsis: String,
    /// Styles applied to each part.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short or full view for the given key map.
    pub fn view<K: KeyMap + ?Sized>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line, separated by bullets.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let help = binding.help();
            let item = format!(
                "{}{} {}",
                if total_width > 0 { separator.as_str() } else { "" },
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc),
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                out.push_str(&tail);
                break;
            }
            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders each group as a column of `key description` lines.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);
        let separator_width = lipgloss::width_visible(&separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        for group in groups {
            let lines: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc),
                    )
                })
                .collect();
            if lines.is_empty() {
                continue;
            }

            let column = lines.join("\n");
            let gap = if columns.is_empty() { 0 } else { separator_width };
            let column_width = lipgloss::width_visible(&column) + gap;

            if let Some(tail) = self.overflow_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::with_capacity(columns.len() * 2);
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(&separator);
            }
            parts.push(column);
        }
        if parts.is_empty() {
            return String::new();
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    /// Returns `Some(tail)` when an item of `item_width` would overflow the
    /// configured width. The tail is the ellipsis if it still fits, or empty.
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keys {
        up: Binding,
        down: Binding,
        hidden: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.up, &self.hidden, &self.down]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.up, &self.down], vec![&self.hidden]]
        }
    }

    fn keys() -> Keys {
        Keys {
            up: Binding::new(vec!["up"]).with_help("↑", "up"),
            down: Binding::new(vec!["down"]).with_help("↓", "down"),
            hidden: Binding::new(vec!["x"]).with_help("x", "hidden").with_disabled(),
        }
    }

    fn plain(s: &str) -> String {
        lipgloss::strip_ansi(s).to_string()
    }

    #[test]
    fn test_short_view_skips_disabled() {
        let help = Model::new();
        assert_eq!(plain(&help.view(&keys())), "↑ up • ↓ down");
    }

    #[test]
    fn test_full_view_skips_empty_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let view = plain(&help.view(&keys()));
        assert!(view.contains("↑ up"));
        assert!(view.contains("↓ down"));
        assert!(!view.contains("hidden"));
    }

    #[test]
    fn test_short_view_truncates_with_ellipsis() {
        let help = Model::new().with_width(8);
        let view = plain(&help.view(&keys()));
        assert_eq!(view, "↑ up …");
    }

    #[test]
    fn test_empty_keymap_renders_nothing() {
        let help = Model::new();
        assert_eq!(help.short_help_view(Vec::new()), "");
        assert_eq!(help.full_help_view(Vec::new()), "");
    }
}
