//! The assembled countdown screen.
//!
//! Wires the [`timer`](crate::timer) to two [`progress`](crate::progress)
//! meters, the [`speech`](crate::speech) backend, a [`Theme`], and a key
//! map, forming the top-level bubbletea-rs model. The timer's minute and
//! finished messages pass through here on their way to the timer, which is
//! where the voice announcements fire.
//!
//! # Basic Usage
//!
//! ```rust
//! use nextbite_widgets::app;
//!
//! let screen = app::new(5);
//! assert!(screen.view().contains("COUNTDOWN"));
//! ```
//!
//! Running it as a full program:
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use nextbite_widgets::app::App;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Program::<App>::builder().build()?.run().await?;
//!     Ok(())
//! }
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::progress;
use crate::speech::{self, Speech, SystemSpeech, Volume};
use crate::theme::{Styles, Theme};
use crate::timer;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

const HEADING: &str = "Next Bite Timer";
const METER_WIDTH: i32 = 30;

/// Key bindings for the countdown screen.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    /// Start the countdown, or pause it while it runs.
    pub toggle: key::Binding,
    /// Stop the countdown and restore the full duration.
    pub reset: key::Binding,
    /// Add a minute to the duration.
    pub increase: key::Binding,
    /// Take a minute off the duration.
    pub decrease: key::Binding,
    /// Cycle the announcement volume.
    pub volume: key::Binding,
    /// Swap between the dark and light palettes.
    pub theme: key::Binding,
    /// Leave the program.
    pub quit: key::Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            toggle: key::Binding::new(vec![KeyCode::Char(' ')])
                .with_help("space", "start/pause"),
            reset: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            increase: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('+')])
                .with_help("↑/+", "+1 min"),
            decrease: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('-')])
                .with_help("↓/-", "-1 min"),
            volume: key::Binding::new(vec![KeyCode::Char('v')]).with_help("v", "volume"),
            theme: key::Binding::new(vec![KeyCode::Char('t')]).with_help("t", "theme"),
            quit: key::Binding::new(vec![
                (KeyCode::Char('q'), KeyModifiers::NONE),
                (KeyCode::Char('c'), KeyModifiers::CONTROL),
            ])
            .with_help("q", "quit"),
        }
    }
}

impl KeyMapTrait for AppKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.toggle,
            &self.reset,
            &self.increase,
            &self.decrease,
            &self.volume,
            &self.theme,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.toggle, &self.reset],
            vec![&self.increase, &self.decrease],
            vec![&self.volume, &self.theme, &self.quit],
        ]
    }
}

/// The countdown screen model.
///
/// Owns the timer plus everything drawn around it. The `timer`, `keymap`,
/// `volume`, and `theme` fields are public so a host program can adjust
/// them before starting the event loop.
#[derive(Debug, Clone)]
pub struct App {
    /// The countdown timer.
    pub timer: timer::Model,
    /// Key bindings and their help entries.
    pub keymap: AppKeyMap,
    /// Volume the next announcement will be spoken at.
    pub volume: Volume,
    /// Palette the screen renders with.
    pub theme: Theme,
    minute_meter: progress::Model,
    total_meter: progress::Model,
    speech: Arc<dyn Speech>,
}

/// Creates the screen with the platform speech backend.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::app;
///
/// let screen = app::new(20);
/// assert_eq!(screen.timer.minutes(), 20);
/// ```
pub fn new(minutes: u64) -> App {
    new_with_speech(minutes, Arc::new(SystemSpeech::new()))
}

/// Creates the screen with a caller-provided speech backend.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::app::new_with_speech;
/// use nextbite_widgets::speech::NullSpeech;
/// use std::sync::Arc;
///
/// // A silent screen, handy for tests and demos.
/// let screen = new_with_speech(5, Arc::new(NullSpeech));
/// ```
pub fn new_with_speech(minutes: u64, speech: Arc<dyn Speech>) -> App {
    let styles = Theme::default().styles();
    let minute_meter = progress::new(&[
        progress::with_gradient(styles.meter_accent.clone(), styles.meter_soft.clone()),
        progress::without_percentage(),
        progress::with_width(METER_WIDTH),
    ]);
    let total_meter = progress::new(&[
        progress::with_solid_fill(styles.meter_soft),
        progress::with_width(METER_WIDTH),
    ]);

    App {
        timer: timer::new(minutes),
        keymap: AppKeyMap::default(),
        volume: Volume::default(),
        theme: Theme::default(),
        minute_meter,
        total_meter,
        speech,
    }
}

impl App {
    /// Processes one message.
    ///
    /// Key presses are handled here; every other message is offered to the
    /// announcement hook and then handed to the timer.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        let cmd = if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg)
        } else {
            self.announce(&msg);
            self.timer.update(msg)
        };
        self.update_keybindings();
        cmd
    }

    /// Renders the whole screen.
    pub fn view(&self) -> String {
        let styles = self.theme.styles();

        let header = format!(
            "{}  {} {}  {}",
            styles.heading.render(HEADING),
            self.theme.glyph(),
            self.volume.glyph(),
            styles.label.render(&format!("{} min", self.timer.minutes())),
        );

        let caption = if self.timer.remaining().is_zero() {
            "Finished!".to_string()
        } else {
            format!("Next bite in {:02}s", self.timer.next_bite_in())
        };

        let minute_bar = format!(
            "{} {}",
            styles.label.render("minute"),
            self.minute_meter.view_as(self.timer.minute_progress()),
        );
        let total_bar = format!(
            "{} {}",
            styles.label.render("total "),
            self.total_meter.view_as(self.timer.total_progress()),
        );

        format!(
            "{}\n\n{}\n{}\n{}\n\n{}\n{}\n\n{}",
            header,
            styles.label.render("COUNTDOWN"),
            styles.clock.render(&timer::format_time(self.timer.remaining())),
            styles.caption.render(&caption),
            minute_bar,
            total_bar,
            self.help_view(&styles),
        )
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> std::option::Option<Cmd> {
        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.toggle.matches(key_msg) {
            return Some(self.timer.toggle());
        }

        if self.keymap.reset.matches(key_msg) {
            self.timer.reset();
        } else if self.keymap.increase.matches(key_msg) {
            self.timer.set_minutes(self.timer.minutes() + 1);
        } else if self.keymap.decrease.matches(key_msg) {
            self.timer.set_minutes(self.timer.minutes().saturating_sub(1));
        } else if self.keymap.volume.matches(key_msg) {
            self.volume = self.volume.cycle();
        } else if self.keymap.theme.matches(key_msg) {
            self.theme = self.theme.toggle();
        }

        std::option::Option::None
    }

    /// Speaks the cue for an announcement message addressed to our timer.
    fn announce(&self, msg: &Msg) {
        if let Some(minute) = msg.downcast_ref::<timer::MinuteMsg>() {
            if minute.id == self.timer.id() {
                self.speech.speak(speech::NEXT_BITE, self.volume.level());
            }
        } else if let Some(finished) = msg.downcast_ref::<timer::FinishedMsg>() {
            if finished.id == self.timer.id() {
                self.speech.speak(speech::TIMER_FINISHED, self.volume.level());
            }
        }
    }

    // The duration keys only work while the countdown is stopped.
    fn update_keybindings(&mut self) {
        let stopped = !self.timer.running();
        self.keymap.increase.set_enabled(stopped);
        self.keymap.decrease.set_enabled(stopped);
    }

    fn help_view(&self, styles: &Styles) -> String {
        let mut out = String::new();
        for binding in self.keymap.short_help() {
            if !binding.enabled() {
                continue;
            }
            if !out.is_empty() {
                out.push_str(&styles.help_separator.render(" • "));
            }
            let help = binding.help();
            out.push_str(&styles.help_key.render(&help.key));
            out.push(' ');
            out.push_str(&styles.help_desc.render(&help.desc));
        }
        out
    }
}

impl BubbleTeaModel for App {
    /// Creates the default screen, stopped, waiting for a keypress.
    fn init() -> (Self, std::option::Option<Cmd>) {
        (App::default(), std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for App {
    fn default() -> Self {
        new(timer::DEFAULT_MINUTES)
    }
}
