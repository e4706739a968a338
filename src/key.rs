//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the help text shown by the [`help`](crate::help) component. Key
//! presses can be written as crossterm key codes, as `(KeyCode, KeyModifiers)`
//! pairs, or as short textual specs such as `"ctrl+u"` or `"pgdown"`.
//!
//! ```rust
//! use bubbletea_table::key::{Binding, KeyPress};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let down = Binding::new(vec!["down", "j"]).with_help("↓/j", "down");
//! let msg = KeyMsg { key: KeyCode::Char('j'), modifiers: KeyModifiers::NONE };
//! assert!(down.matches(&msg));
//!
//! let half: KeyPress = "ctrl+d".parse().unwrap();
//! assert_eq!(half.mods, KeyModifiers::CONTROL);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a textual key spec cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The spec was empty or contained an empty segment, e.g. `"ctrl+"`.
    #[error("empty key specification")]
    Empty,
    /// A segment before the final `+` was not a known modifier.
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    /// The final segment did not name a key.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press with explicit modifiers.
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Reports whether an incoming key message is this key press.
    ///
    /// Shift is ignored for character keys, since terminals report `G` as
    /// `Char('G')` with or without the shift flag depending on the platform.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key
            && significant_mods(self.code, self.mods) == significant_mods(msg.key, msg.modifiers)
    }
}

fn significant_mods(code: KeyCode, mods: KeyModifiers) -> KeyModifiers {
    let mut mods = mods;
    if matches!(code, KeyCode::Char(_)) {
        mods.remove(KeyModifiers::SHIFT);
    }
    mods
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, mods)
    }
}

impl From<&str> for KeyPress {
    /// Parses a key spec, falling back to [`KeyCode::Null`] (which no real
    /// key press produces) when the spec is invalid.
    fn from(spec: &str) -> Self {
        spec.parse()
            .unwrap_or_else(|_| Self::new(KeyCode::Null, KeyModifiers::NONE))
    }
}

impl FromStr for KeyPress {
    type Err = KeyParseError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        // A lone space or plus is a key in its own right, not a separator.
        if spec == " " || spec == "+" {
            return Ok(KeyCode::Char(spec.chars().next().unwrap_or(' ')).into());
        }

        let mut segments: Vec<&str> = spec.split('+').collect();
        let name = segments.pop().ok_or(KeyParseError::Empty)?;
        if name.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut mods = KeyModifiers::NONE;
        for segment in segments {
            mods |= match segment {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                "" => return Err(KeyParseError::Empty),
                other => return Err(KeyParseError::UnknownModifier(other.to_string())),
            };
        }

        let code = match name {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "pgup" => KeyCode::PageUp,
            "pgdown" | "pgdn" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(KeyParseError::UnknownKey(other.to_string())),
                }
            }
        };

        Ok(Self::new(code, mods))
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Starts the binding out disabled.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Replaces the bound keys.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The bound keys.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and are
    /// left out of help views.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active. A binding without keys is never active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Removes all keys and help text.
    pub fn unbind(&mut self) {
        self.keys.clear();
        self.help = Help::default();
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Reports whether the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Something that can describe its bindings to the help view.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the full help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
