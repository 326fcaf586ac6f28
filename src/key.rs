//! Key bindings with help metadata.
//!
//! A [`Binding`] pairs the keypresses that trigger an action with the label
//! and description shown in the help line. Bindings can be disabled, which
//! removes them from help and stops them from matching.
//!
//! ```rust
//! use nextbite_widgets::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start/pause");
//! let quit = Binding::new(vec![
//!     (KeyCode::Char('q'), KeyModifiers::NONE),
//!     (KeyCode::Char('c'), KeyModifiers::CONTROL),
//! ])
//! .with_help("q", "quit");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A set of bindings that can describe itself to a help view.
pub trait KeyMap {
    /// Bindings for the single-line help view, in display order.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Help metadata for a binding: the key label and what the key does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key, e.g. `"space"` or `"q"`.
    pub key: String,
    /// What pressing the key does, e.g. `"quit"`.
    pub desc: String,
}

/// A single keypress: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held alongside it.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// A key binding: the presses that trigger it plus its help entry.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keypresses.
    ///
    /// Accepts bare [`KeyCode`]s or `(KeyCode, KeyModifiers)` pairs.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPress>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help entry for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active.
    ///
    /// Disabled bindings never match and are skipped by the help line.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the given key message triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|kp| {
            let mut mods = key_msg.modifiers;
            if let KeyCode::Char(_) = key_msg.key {
                // Shift is already encoded in the character itself.
                mods.remove(KeyModifiers::SHIFT);
            }
            kp.code == key_msg.key && kp.modifiers == mods
        })
    }
}
