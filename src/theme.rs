//! Dark and light palettes for the countdown screen.
//!
//! The screen starts dark and flips to light with a keypress. Each palette
//! bundles the lipgloss styles for the text elements plus the two accent
//! colors the meters are drawn with.
//!
//! # Basic Usage
//!
//! ```rust
//! use nextbite_widgets::theme::Theme;
//!
//! let theme = Theme::default();
//! let styles = theme.styles();
//! let heading = styles.heading.render("Next Bite Timer");
//! ```

use lipgloss_extras::prelude::*;

/// The two palettes the screen can render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light text on a dark terminal background.
    Dark,
    /// Dark text on a light terminal background.
    Light,
}

impl Theme {
    /// Returns the other palette.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::theme::Theme;
    ///
    /// assert_eq!(Theme::Dark.toggle(), Theme::Light);
    /// assert_eq!(Theme::Light.toggle(), Theme::Dark);
    /// ```
    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The indicator glyph shown on screen for this palette.
    pub fn glyph(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    /// Builds the style set for this palette.
    ///
    /// The accent purples stay the same in both palettes; the supporting
    /// grays swap so text stays readable against either background.
    pub fn styles(&self) -> Styles {
        match self {
            Theme::Dark => Styles {
                heading: Style::new().bold(true).foreground(Color::from("#6c4cff")),
                label: Style::new().foreground(Color::from("#626262")),
                clock: Style::new().bold(true),
                caption: Style::new().foreground(Color::from("#b8b8ff")),
                meter_accent: "#6c4cff".to_string(),
                meter_soft: "#b8b8ff".to_string(),
                help_key: Style::new().foreground(Color::from("#626262")),
                help_desc: Style::new().foreground(Color::from("#4A4A4A")),
                help_separator: Style::new().foreground(Color::from("#3C3C3C")),
            },
            Theme::Light => Styles {
                heading: Style::new().bold(true).foreground(Color::from("#6c4cff")),
                label: Style::new().foreground(Color::from("#909090")),
                clock: Style::new().bold(true),
                // The soft accent washes out on a light background.
                caption: Style::new().foreground(Color::from("#6c4cff")),
                meter_accent: "#6c4cff".to_string(),
                meter_soft: "#b8b8ff".to_string(),
                help_key: Style::new().foreground(Color::from("#909090")),
                help_desc: Style::new().foreground(Color::from("#B2B2B2")),
                help_separator: Style::new().foreground(Color::from("#DDDADA")),
            },
        }
    }
}

impl Default for Theme {
    /// The screen opens with the dark palette.
    fn default() -> Self {
        Theme::Dark
    }
}

/// Styles and accent colors for one palette.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the screen heading.
    pub heading: Style,
    /// Style for the small label above the clock.
    pub label: Style,
    /// Style for the HH:MM:SS readout.
    pub clock: Style,
    /// Style for the next-bite caption.
    pub caption: Style,
    /// Primary accent color for the minute meter.
    pub meter_accent: String,
    /// Soft accent color for the total meter.
    pub meter_soft: String,
    /// Style for key names in the help line.
    pub help_key: Style,
    /// Style for descriptions in the help line.
    pub help_desc: Style,
    /// Style for separators in the help line.
    pub help_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Theme::Dark.styles()
    }
}
