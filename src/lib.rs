#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/nextbite-widgets/")]

//! # nextbite-widgets
//!
//! A terminal countdown timer for interval eating, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs): it says
//! "Next bite" out loud after every elapsed minute and "Timer finished"
//! when the countdown reaches zero.
//!
//! [![Crates.io](https://img.shields.io/crates/v/nextbite-widgets.svg)](https://crates.io/crates/nextbite-widgets)
//! [![Documentation](https://docs.rs/nextbite-widgets/badge.svg)](https://docs.rs/nextbite-widgets)
//! [![License](https://img.shields.io/badge/license-MIT-blue.svg)](https://opensource.org/licenses/MIT)
//!
//! ## Overview
//!
//! The crate ships a ready-to-run screen ([`app::App`]) plus the pieces it
//! is made of, each following the Elm Architecture pattern with `init()`,
//! `update()`, and `view()` methods. The timer can be embedded on its own
//! inside any bubbletea-rs model; the announcement messages it emits make
//! the minute cues observable wherever it is mounted.
//!
//! ## Features
//!
//! - **Voice announcements** through the platform speech command, with a
//!   three-step volume cycle
//! - **Start, pause, and reset** controls over a 1 to 120 minute duration
//! - **Draining meters** for the current minute and the whole countdown
//! - **Dark and light palettes** swapped at runtime
//! - **Type-safe key bindings** rendered into a one-line help view
//!
//! ## Embedding the Timer
//!
//! The timer reports minute boundaries and completion as messages, so a
//! host model can react to them before passing them along:
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use nextbite_widgets::timer;
//!
//! struct Kitchen {
//!     timer: timer::Model,
//!     cues: usize,
//! }
//!
//! impl Model for Kitchen {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (
//!             Kitchen {
//!                 timer: timer::new(5),
//!                 cues: 0,
//!             },
//!             None,
//!         )
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(minute) = msg.downcast_ref::<timer::MinuteMsg>() {
//!             if minute.id == self.timer.id() {
//!                 self.cues += 1;
//!             }
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! ## Key Bindings
//!
//! Input handling uses the type-safe key binding system from the `key`
//! module:
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use nextbite_widgets::key::{Binding, KeyMap};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start/pause");
//! let quit = Binding::new(vec![
//!     (KeyCode::Char('q'), KeyModifiers::NONE),
//!     (KeyCode::Char('c'), KeyModifiers::CONTROL),
//! ])
//! .with_help("q", "quit");
//!
//! struct ScreenKeys {
//!     toggle: Binding,
//!     quit: Binding,
//! }
//!
//! impl KeyMap for ScreenKeys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.toggle, &self.quit]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.toggle], vec![&self.quit]]
//!     }
//! }
//!
//! let keys = ScreenKeys { toggle, quit };
//! assert_eq!(keys.short_help().len(), 2);
//! ```
//!
//! ## Quick Start
//!
//! Add nextbite-widgets to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nextbite-widgets = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! For convenience, you can import the prelude:
//!
//! ```rust
//! use nextbite_widgets::prelude::*;
//! ```
//!
//! ## Component Overview
//!
//! | Component | Description | Use Case |
//! |-----------|-------------|----------|
//! | `App` | The assembled countdown screen | Running the timer as a program |
//! | `Timer` | Countdown with minute announcements | Embedding in a larger model |
//! | `Progress` | Horizontal meter | Minute and total readouts |
//! | `Speech` | Voice output seam | Platform speech, or silence in tests |
//! | `Theme` | Dark and light palettes | Styling the screen |
//! | `Binding` | Key bindings with help metadata | Input handling |

pub mod app;
pub mod key;
pub mod progress;
pub mod speech;
pub mod theme;
pub mod timer;

pub use app::{new as app_new, new_with_speech as app_new_with_speech, App, AppKeyMap};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use progress::{
    new as progress_new, with_default_gradient, with_fill_characters, with_gradient,
    with_solid_fill, with_width, without_percentage, Model as Progress, ProgressOption,
};
pub use speech::{NullSpeech, Speech, SystemSpeech, Volume, NEXT_BITE, TIMER_FINISHED};
pub use theme::{Styles as ThemeStyles, Theme};
pub use timer::{
    format_time, new as timer_new, new_with_interval as timer_new_with_interval,
    FinishedMsg as TimerFinishedMsg, MinuteMsg as TimerMinuteMsg, Model as Timer, Phase,
    StartStopMsg as TimerStartStopMsg, TickMsg as TimerTickMsg, DEFAULT_MINUTES, MAX_MINUTES,
    MIN_MINUTES,
};

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and functions so one `use`
/// statement covers a typical program:
///
/// ```rust
/// use nextbite_widgets::prelude::*;
/// use std::sync::Arc;
///
/// let screen = app_new_with_speech(5, Arc::new(NullSpeech));
/// assert_eq!(screen.timer.minutes(), 5);
/// ```
pub mod prelude {
    pub use crate::app::{new as app_new, new_with_speech as app_new_with_speech, App, AppKeyMap};
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::progress::{
        new as progress_new, with_default_gradient, with_fill_characters, with_gradient,
        with_solid_fill, with_width, without_percentage, Model as Progress, ProgressOption,
    };
    pub use crate::speech::{NullSpeech, Speech, SystemSpeech, Volume, NEXT_BITE, TIMER_FINISHED};
    pub use crate::theme::{Styles as ThemeStyles, Theme};
    pub use crate::timer::{
        format_time, new as timer_new, new_with_interval as timer_new_with_interval,
        FinishedMsg as TimerFinishedMsg, MinuteMsg as TimerMinuteMsg, Model as Timer, Phase,
        StartStopMsg as TimerStartStopMsg, TickMsg as TimerTickMsg, DEFAULT_MINUTES, MAX_MINUTES,
        MIN_MINUTES,
    };
}
