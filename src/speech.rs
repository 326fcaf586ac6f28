//! Speech output for countdown announcements.
//!
//! The timer emits announcement messages; something has to say them out
//! loud. The [`Speech`] trait is that seam: the app holds a trait object and
//! calls [`Speech::speak`] with a phrase and a volume. [`SystemSpeech`]
//! shells out to the platform speech command and [`NullSpeech`] swallows
//! everything, which keeps tests and unsupported platforms silent without
//! special cases.
//!
//! ```rust
//! use nextbite_widgets::speech::{NullSpeech, Speech, NEXT_BITE};
//! use std::sync::Arc;
//!
//! let speech: Arc<dyn Speech> = Arc::new(NullSpeech);
//! speech.speak(NEXT_BITE, 1.0);
//! ```

/// Phrase spoken when a full minute of the countdown has elapsed.
pub const NEXT_BITE: &str = "Next bite";

/// Phrase spoken when the countdown reaches zero.
pub const TIMER_FINISHED: &str = "Timer finished";

/// A voice that can speak announcement phrases.
///
/// Volume runs from 0.0 (silent) to 1.0 (full); implementations clamp
/// out-of-range values and treat 0.0 as "say nothing". Speaking never
/// reports failure. A platform without speech support simply stays quiet.
pub trait Speech: std::fmt::Debug + Send + Sync {
    /// Speaks `text` at the given volume, or does nothing when muted or
    /// unsupported.
    fn speak(&self, text: &str, volume: f32);
}

/// Speech output backed by the operating system's speech command.
///
/// Spawns `say` on macOS and `espeak-ng` (or `espeak`) elsewhere on unix,
/// without waiting for the utterance to finish. Platforms without a speech
/// command, and systems where the command is missing, stay silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpeech;

impl SystemSpeech {
    /// Creates the platform speech backend.
    pub fn new() -> Self {
        Self
    }
}

impl Speech for SystemSpeech {
    fn speak(&self, text: &str, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if volume <= 0.0 {
            return;
        }
        spawn_speaker(text, volume);
    }
}

#[cfg(target_os = "macos")]
fn spawn_speaker(text: &str, volume: f32) {
    use std::process::Command;

    // `say` reads the volume from an inline command prefix.
    let phrase = format!("[[volm {:.1}]] {}", volume, text);
    let _ = Command::new("say").arg(phrase).spawn();
}

#[cfg(all(unix, not(target_os = "macos")))]
fn spawn_speaker(text: &str, volume: f32) {
    use once_cell::sync::Lazy;
    use std::process::{Command, Stdio};

    // Resolved once per process; espeak-ng and espeak take the same flags.
    static SPEAKER: Lazy<Option<&'static str>> = Lazy::new(|| {
        ["espeak-ng", "espeak"].into_iter().find(|cmd| {
            Command::new(cmd)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .is_ok()
        })
    });

    if let Some(cmd) = *SPEAKER {
        // The amplitude scale runs 0-200 with 100 as the default.
        let amplitude = (volume * 100.0).round() as i32;
        let _ = Command::new(cmd)
            .arg("-a")
            .arg(amplitude.to_string())
            .arg(text)
            .spawn();
    }
}

#[cfg(not(unix))]
fn spawn_speaker(_text: &str, _volume: f32) {}

/// Speech output that says nothing.
///
/// Stands in for [`SystemSpeech`] in tests and wherever voice output is
/// unwanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeech;

impl Speech for NullSpeech {
    fn speak(&self, _text: &str, _volume: f32) {}
}

/// The three volume settings the screen cycles through.
///
/// One keypress advances the cycle: full, then low, then muted, then back
/// to full. [`Volume::level`] maps the setting onto the 0.0..=1.0 scale the
/// [`Speech`] trait expects.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::speech::Volume;
///
/// let volume = Volume::Full;
/// assert_eq!(volume.cycle(), Volume::Low);
/// assert_eq!(volume.cycle().cycle().cycle(), Volume::Full);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volume {
    /// Announcements at full volume.
    Full,
    /// Announcements at a reduced volume.
    Low,
    /// No announcements at all.
    Muted,
}

impl Volume {
    /// The speech volume this setting maps to.
    pub fn level(&self) -> f32 {
        match self {
            Volume::Full => 1.0,
            Volume::Low => 0.3,
            Volume::Muted => 0.0,
        }
    }

    /// The next setting in the cycle.
    pub fn cycle(&self) -> Volume {
        match self {
            Volume::Full => Volume::Low,
            Volume::Low => Volume::Muted,
            Volume::Muted => Volume::Full,
        }
    }

    /// The indicator glyph shown on screen for this setting.
    pub fn glyph(&self) -> &'static str {
        match self {
            Volume::Full => "🔊",
            Volume::Low => "🔉",
            Volume::Muted => "🔇",
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume::Full
    }
}
