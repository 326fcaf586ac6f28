//! Countdown timer component with per-minute announcement scheduling.
//!
//! This is the core of the "next bite" screen: a countdown that ticks once per
//! second while running, reports how much time is left, and emits one
//! announcement message for every full minute that elapses plus a final one
//! when the countdown reaches zero. Parent models intercept those messages to
//! drive side effects such as speech output.
//!
//! # Basic Usage
//!
//! ```rust
//! use nextbite_widgets::timer::{new, new_with_interval};
//! use std::time::Duration;
//!
//! // Create a 5 minute countdown with the default 1 second tick.
//! let timer = new(5);
//! assert_eq!(timer.view(), "00:05:00");
//!
//! // Create a countdown with a custom tick interval.
//! let timer = new_with_interval(5, Duration::from_millis(500));
//! assert_eq!(timer.interval, Duration::from_millis(500));
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use nextbite_widgets::timer::{self, FinishedMsg, MinuteMsg};
//!
//! struct MyApp {
//!     timer: timer::Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let timer = timer::new(5);
//!         let cmd = timer.start();
//!         (Self { timer }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // A full minute has elapsed.
//!         if let Some(cue) = msg.downcast_ref::<MinuteMsg>() {
//!             if cue.id == self.timer.id() {
//!                 // speak "Next bite"
//!             }
//!         }
//!
//!         // The countdown reached zero.
//!         if let Some(done) = msg.downcast_ref::<FinishedMsg>() {
//!             if done.id == self.timer.id() {
//!                 // speak "Timer finished"
//!             }
//!         }
//!
//!         // Forward everything to the timer so it can keep ticking.
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! # Start/Pause Control
//!
//! ```rust
//! use nextbite_widgets::timer::new;
//!
//! let timer = new(5);
//!
//! // These return commands that send StartStopMsg.
//! let start_cmd = timer.start();   // Begin or resume the countdown
//! let pause_cmd = timer.pause();   // Pause, keeping the remaining time
//! let toggle_cmd = timer.toggle(); // Flip between the two
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Smallest duration a countdown may be configured with, in minutes.
pub const MIN_MINUTES: u64 = 1;

/// Largest duration a countdown may be configured with, in minutes.
pub const MAX_MINUTES: u64 = 120;

/// Duration a countdown starts out with when none is chosen, in minutes.
pub const DEFAULT_MINUTES: u64 = 5;

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for timer instances.
///
/// Each timer created gets its own ID so that multiple timers can coexist in
/// the same application without message conflicts. IDs are generated
/// atomically and start from 1.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Formats remaining time as an `HH:MM:SS` readout.
///
/// Partial seconds are rounded up, so the readout only shows `00:00:00` once
/// the countdown has actually reached zero. A countdown paused at 4 minutes
/// 59.2 seconds still reads `00:05:00`.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::timer::format_time;
/// use std::time::Duration;
///
/// assert_eq!(format_time(Duration::from_secs(300)), "00:05:00");
/// assert_eq!(format_time(Duration::from_millis(299_001)), "00:05:00");
/// assert_eq!(format_time(Duration::from_secs(3_661)), "01:01:01");
/// assert_eq!(format_time(Duration::ZERO), "00:00:00");
/// ```
pub fn format_time(remaining: Duration) -> String {
    // Round up so the readout only hits 00:00:00 when the countdown is done.
    let total_secs = (remaining.as_millis() + 999) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// The lifecycle states a countdown moves through.
///
/// A countdown starts `Idle` at its full duration, ticks down while
/// `Running`, can rest in `Paused` with its remaining time intact, and ends
/// in `Finished` once the remaining time reaches zero. Only `reset` or a
/// duration change leaves `Finished`.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::timer::{new, Phase};
///
/// let timer = new(5);
/// assert_eq!(timer.phase(), Phase::Idle);
/// assert!(!timer.running());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly created or reset; remaining time equals the full duration.
    Idle,
    /// Actively counting down, one tick per interval.
    Running,
    /// Stopped partway; the remaining time is preserved exactly.
    Paused,
    /// The countdown reached zero and will not tick again.
    Finished,
}

/// Message used to start and pause timer instances.
///
/// Sent by the timer's control methods ([`Model::start`], [`Model::pause`],
/// [`Model::toggle`]). The message carries the timer's unique ID so that it
/// only affects the intended instance.
///
/// The `running` field is intentionally private so the running state can only
/// change through the timer's own control methods.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// The unique identifier of the timer this message targets.
    pub id: i64,
    /// Whether the timer should be counting down after this message.
    running: bool,
}

/// Message sent on every timer tick to advance the countdown.
///
/// Generated automatically while the timer is running, once per interval.
/// Each accepted tick reduces the remaining time and schedules the next one,
/// so the chain of ticks exists only while the timer is in
/// [`Phase::Running`].
///
/// Ticks are filtered before they are applied: messages with a foreign ID are
/// ignored, stale ticks from before a pause are rejected by tag, and ticks
/// arriving while the timer is not running are dropped.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The unique identifier of the timer that generated this tick.
    pub id: i64,
    /// Internal synchronization tag used to reject stale ticks.
    tag: i64,
}

/// Message sent when a full minute of the countdown has elapsed.
///
/// Exactly one of these is emitted per minute boundary crossed while running.
/// The minute boundary that coincides with the countdown reaching zero does
/// not produce one; [`FinishedMsg`] is sent instead. Parent models typically
/// react by speaking the "Next bite" cue, then forward the message back to
/// the timer so the tick cadence resumes.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::timer::MinuteMsg;
///
/// let cue = MinuteMsg { id: 1, minutes: 2 };
/// assert_eq!(cue.minutes, 2);
/// ```
#[derive(Debug, Clone)]
pub struct MinuteMsg {
    /// The unique identifier of the timer that crossed the boundary.
    pub id: i64,
    /// How many full minutes have elapsed since the countdown started.
    pub minutes: u64,
}

/// Message sent when the countdown reaches zero.
///
/// Sent exactly once per run. Parent models react by speaking the final
/// "Timer finished" cue. The timer itself is in [`Phase::Finished`] by the
/// time this message is observable and will not tick again until reset.
#[derive(Debug, Clone)]
pub struct FinishedMsg {
    /// The unique identifier of the timer that finished.
    pub id: i64,
}

/// Countdown timer with minute-boundary announcements.
///
/// The model owns the configured duration, the remaining time, the current
/// [`Phase`], and a marker for the last minute boundary it announced. It is
/// driven entirely by messages: control methods return commands that send
/// [`StartStopMsg`], and the countdown advances through a self-sustaining
/// chain of [`TickMsg`] that exists only while running.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::timer::{new, Phase};
/// use std::time::Duration;
///
/// let mut timer = new(5);
/// assert_eq!(timer.duration(), Duration::from_secs(300));
/// assert_eq!(timer.remaining(), timer.duration());
/// assert_eq!(timer.phase(), Phase::Idle);
///
/// // Duration changes are clamped and reset the countdown.
/// timer.set_minutes(500);
/// assert_eq!(timer.minutes(), 120);
/// assert_eq!(timer.remaining(), timer.duration());
/// ```
///
/// # Announcement Rule
///
/// On every accepted tick the timer computes how many full minutes have
/// elapsed. When that count exceeds the last announced count, a
/// [`MinuteMsg`] is emitted and the marker advances. Announcements are tied
/// to crossing the boundary rather than landing exactly on it, so a tick
/// interval that drifts off the 60 second grid still announces every minute
/// exactly once. A tick that takes the remaining time to zero emits only
/// [`FinishedMsg`], even when it lands on a minute boundary.
#[derive(Debug, Clone)]
pub struct Model {
    /// The time between ticks. Defaults to 1 second.
    pub interval: Duration,

    /// The configured countdown length.
    duration: Duration,
    /// The time left on the countdown.
    remaining: Duration,
    /// Where the countdown is in its lifecycle.
    phase: Phase,
    /// Elapsed-minute count that has already been announced.
    last_announced: u64,
    /// Unique identifier for this timer instance.
    id: i64,
    /// Internal synchronization tag used to reject stale ticks.
    tag: i64,
}

/// Creates a countdown with a custom tick interval.
///
/// The duration is given in whole minutes and clamped to the
/// [`MIN_MINUTES`]..=[`MAX_MINUTES`] range. The interval controls how often
/// the countdown advances; anything other than 1 second changes the pace at
/// which remaining time is consumed, which is mainly useful in tests.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::timer::new_with_interval;
/// use std::time::Duration;
///
/// let timer = new_with_interval(2, Duration::from_millis(100));
/// assert_eq!(timer.duration(), Duration::from_secs(120));
/// assert_eq!(timer.interval, Duration::from_millis(100));
/// ```
pub fn new_with_interval(minutes: u64, interval: Duration) -> Model {
    let duration = Duration::from_secs(minutes.clamp(MIN_MINUTES, MAX_MINUTES) * 60);
    Model {
        interval,
        duration,
        remaining: duration,
        phase: Phase::Idle,
        last_announced: 0,
        id: next_id(),
        tag: 0,
    }
}

/// Creates a countdown of the given number of minutes with a 1 second tick.
///
/// This is the usual way to create a timer. The countdown starts in
/// [`Phase::Idle`] and does not tick until started.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::timer::{new, Phase};
/// use std::time::Duration;
///
/// let timer = new(5);
/// assert_eq!(timer.duration(), Duration::from_secs(300));
/// assert_eq!(timer.interval, Duration::from_secs(1));
/// assert_eq!(timer.phase(), Phase::Idle);
///
/// // Out-of-range durations are clamped, not rejected.
/// let timer = new(0);
/// assert_eq!(timer.minutes(), 1);
/// ```
pub fn new(minutes: u64) -> Model {
    new_with_interval(minutes, Duration::from_secs(1))
}

impl Model {
    /// Returns the unique identifier of this timer instance.
    ///
    /// Use it to tell which timer produced a [`MinuteMsg`] or
    /// [`FinishedMsg`] when several timers share an application.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    ///
    /// let timer1 = new(5);
    /// let timer2 = new(5);
    /// assert_ne!(timer1.id(), timer2.id());
    /// ```
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Creates a tick message addressed to this timer.
    ///
    /// The message carries the id and tag the timer currently accepts,
    /// which lets a parent model hand the countdown a tick directly
    /// instead of waiting on the scheduled chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    ///
    /// let timer = new(5);
    /// let msg = timer.tick_msg();
    /// assert_eq!(msg.id, timer.id());
    /// ```
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Returns the configured countdown length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the time left on the countdown.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns the configured countdown length in whole minutes.
    pub fn minutes(&self) -> u64 {
        self.duration.as_secs() / 60
    }

    /// Returns where the countdown is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the countdown is actively ticking.
    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Returns whether the countdown has reached zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    ///
    /// let timer = new(5);
    /// assert!(!timer.finished());
    /// ```
    pub fn finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Returns how much of the countdown has been consumed.
    pub fn elapsed(&self) -> Duration {
        self.duration.saturating_sub(self.remaining)
    }

    /// Number of full minutes consumed so far.
    fn elapsed_minutes(&self) -> u64 {
        self.elapsed().as_secs() / 60
    }

    /// Seconds until the next minute boundary, counting down from 60.
    ///
    /// Reads 60 at the top of every minute and 1 just before the boundary.
    /// Drives the "Next bite in NNs" caption.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    ///
    /// let timer = new(5);
    /// assert_eq!(timer.next_bite_in(), 60);
    /// ```
    pub fn next_bite_in(&self) -> u64 {
        60 - (self.elapsed().as_secs() % 60)
    }

    /// Fraction of the current minute still to go, in `0.0..=1.0`.
    ///
    /// Computed as the remaining time within the current minute over a full
    /// minute. Reads 0.0 on exact minute boundaries and drains towards 0.0
    /// as each minute passes. Drives the per-minute meter.
    pub fn minute_progress(&self) -> f64 {
        (self.remaining.as_millis() % 60_000) as f64 / 60_000.0
    }

    /// Fraction of the whole countdown still to go, in `0.0..=1.0`.
    ///
    /// Reads 1.0 on a fresh countdown and 0.0 once finished. Drives the
    /// total meter.
    pub fn total_progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.remaining.as_millis() as f64 / self.duration.as_millis() as f64
    }

    /// Generates a command to start or resume the countdown.
    ///
    /// The returned command sends a [`StartStopMsg`]; the state change
    /// happens when that message is processed by [`update`](Self::update).
    /// Starting is a no-op if the countdown is already running or has no
    /// time left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    ///
    /// let timer = new(5);
    /// let _cmd = timer.start();
    /// // The timer transitions to Running when the message round-trips.
    /// ```
    pub fn start(&self) -> Cmd {
        self.start_stop(true)
    }

    /// Generates a command to pause the countdown.
    ///
    /// Pausing keeps the remaining time exactly as it is; resuming continues
    /// from the same point. Pausing a timer that is not running changes
    /// nothing, so repeated pauses are harmless.
    pub fn pause(&self) -> Cmd {
        self.start_stop(false)
    }

    /// Generates a command that flips between running and paused.
    ///
    /// This is the single-key control surface: one binding can both start
    /// and pause the countdown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    ///
    /// let timer = new(5);
    /// let _cmd = timer.toggle(); // Starts, since the timer is idle.
    /// ```
    pub fn toggle(&self) -> Cmd {
        self.start_stop(!self.running())
    }

    /// Puts the countdown back to its initial state.
    ///
    /// The remaining time returns to the full duration, the announcement
    /// marker clears, and the phase becomes [`Phase::Idle`]. Works from any
    /// phase; a tick still in flight from the old run no longer matches the
    /// tag and is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::{new, Phase};
    ///
    /// let mut timer = new(5);
    /// timer.reset();
    /// assert_eq!(timer.phase(), Phase::Idle);
    /// assert_eq!(timer.remaining(), timer.duration());
    /// ```
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.last_announced = 0;
        self.phase = Phase::Idle;
        self.tag += 1;
    }

    /// Changes the countdown length, in whole minutes.
    ///
    /// Ignored while the countdown is running. Otherwise the value is
    /// clamped to [`MIN_MINUTES`]..=[`MAX_MINUTES`] and the countdown resets
    /// to [`Phase::Idle`] at the new full duration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    /// use std::time::Duration;
    ///
    /// let mut timer = new(5);
    /// timer.set_minutes(7);
    /// assert_eq!(timer.duration(), Duration::from_secs(420));
    ///
    /// timer.set_minutes(0);
    /// assert_eq!(timer.minutes(), 1);
    /// ```
    pub fn set_minutes(&mut self, minutes: u64) {
        if self.phase == Phase::Running {
            return;
        }
        self.duration = Duration::from_secs(minutes.clamp(MIN_MINUTES, MAX_MINUTES) * 60);
        self.reset();
    }

    /// Internal tick command carrying the current id and tag.
    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = self.interval;

        bubbletea_tick(interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Internal start/stop command.
    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    /// Internal minute announcement command.
    fn minute_cmd(&self, minutes: u64) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(MinuteMsg { id, minutes }) as Msg
        })
    }

    /// Internal finish announcement command.
    fn finished_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FinishedMsg { id }) as Msg
        })
    }

    /// Processes messages and advances the countdown.
    ///
    /// Handles three message types and ignores everything else:
    ///
    /// - [`StartStopMsg`] moves the countdown between running and paused.
    /// - [`TickMsg`] consumes one interval of remaining time and schedules
    ///   the follow-up command: the next tick, a [`MinuteMsg`] when a minute
    ///   boundary was crossed, or a [`FinishedMsg`] when the countdown hit
    ///   zero.
    /// - [`MinuteMsg`] restarts the tick cadence after the announcement has
    ///   made its round trip through the parent model.
    ///
    /// Messages carrying a foreign timer ID are rejected unchanged, as are
    /// ticks with a stale tag or ticks arriving while the countdown is not
    /// running.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(start_stop_msg) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop_msg.id != 0 && start_stop_msg.id != self.id {
                return std::option::Option::None;
            }

            if start_stop_msg.running {
                if self.phase == Phase::Running || self.remaining.is_zero() {
                    return std::option::Option::None;
                }
                self.phase = Phase::Running;
                // A fresh tag invalidates any tick still in flight from
                // before a pause or reset.
                self.tag += 1;
                return std::option::Option::Some(self.tick());
            }

            if self.phase == Phase::Running {
                self.phase = Phase::Paused;
            }
            return std::option::Option::None;
        }

        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if self.phase != Phase::Running || (tick_msg.id != 0 && tick_msg.id != self.id) {
                return std::option::Option::None;
            }

            // If a tag is set, and it's not the one we expect, reject the
            // message. This prevents the countdown from receiving too many
            // messages and thus ticking too fast.
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return std::option::Option::None;
            }
            self.tag += 1;

            self.remaining = self.remaining.saturating_sub(self.interval);

            if self.remaining.is_zero() {
                self.phase = Phase::Finished;
                return std::option::Option::Some(self.finished_cmd());
            }

            let elapsed_minutes = self.elapsed_minutes();
            if elapsed_minutes > self.last_announced {
                self.last_announced = elapsed_minutes;
                return std::option::Option::Some(self.minute_cmd(elapsed_minutes));
            }

            return std::option::Option::Some(self.tick());
        }

        if let Some(minute_msg) = msg.downcast_ref::<MinuteMsg>() {
            if minute_msg.id != 0 && minute_msg.id != self.id {
                return std::option::Option::None;
            }
            if self.phase != Phase::Running {
                return std::option::Option::None;
            }
            // Announcement delivered; resume the regular cadence.
            return std::option::Option::Some(self.tick());
        }

        std::option::Option::None
    }

    /// Renders the remaining time as an `HH:MM:SS` readout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::new;
    ///
    /// let timer = new(5);
    /// assert_eq!(timer.view(), "00:05:00");
    /// ```
    pub fn view(&self) -> String {
        format_time(self.remaining)
    }
}

impl BubbleTeaModel for Model {
    /// Creates a default countdown for standalone use and starts it.
    ///
    /// Running the timer as its own program gives a 5 minute countdown that
    /// begins ticking immediately.
    fn init() -> (Self, std::option::Option<Cmd>) {
        let model = Model::default();
        let cmd = model.start();
        (model, std::option::Option::Some(cmd))
    }

    /// Forwards messages to the timer's update method.
    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    /// Renders the countdown readout.
    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    /// Creates a 5 minute countdown with a 1 second tick.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::timer::Model;
    /// use std::time::Duration;
    ///
    /// let timer = Model::default();
    /// assert_eq!(timer.duration(), Duration::from_secs(300));
    /// ```
    fn default() -> Self {
        new(DEFAULT_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn start_timer(timer: &mut Model) -> std::option::Option<Cmd> {
        let id = timer.id();
        timer.update(Box::new(StartStopMsg { id, running: true }))
    }

    fn pause_timer(timer: &mut Model) -> std::option::Option<Cmd> {
        let id = timer.id();
        timer.update(Box::new(StartStopMsg { id, running: false }))
    }

    // Delivers the tick currently in flight, mirroring what the runtime
    // would send back after the scheduled interval.
    fn deliver_tick(timer: &mut Model) -> std::option::Option<Cmd> {
        let msg = timer.tick_msg();
        timer.update(Box::new(msg))
    }

    #[test]
    fn test_new_defaults() {
        let timer = new(5);

        assert_eq!(timer.duration(), Duration::from_secs(300));
        assert_eq!(timer.remaining(), timer.duration());
        assert_eq!(timer.interval, Duration::from_secs(1));
        assert_eq!(timer.phase(), Phase::Idle);
        assert!(timer.id() > 0);
        assert!(!timer.running());
        assert!(!timer.finished());
    }

    #[test]
    fn test_new_with_interval() {
        let timer = new_with_interval(2, Duration::from_millis(500));

        assert_eq!(timer.duration(), Duration::from_secs(120));
        assert_eq!(timer.interval, Duration::from_millis(500));
    }

    #[test]
    fn test_new_clamps_minutes() {
        assert_eq!(new(0).minutes(), MIN_MINUTES);
        assert_eq!(new(999).minutes(), MAX_MINUTES);
    }

    #[test]
    fn test_unique_ids() {
        let timer1 = new(5);
        let timer2 = new(5);

        assert_ne!(timer1.id(), timer2.id());
    }

    #[test]
    fn test_default_model() {
        let timer = Model::default();

        assert_eq!(timer.minutes(), DEFAULT_MINUTES);
        assert_eq!(timer.interval, Duration::from_secs(1));
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn test_control_commands() {
        // start, pause and toggle all hand back a command without touching
        // the model itself.
        let timer = new(5);

        let _start_cmd = timer.start();
        let _pause_cmd = timer.pause();
        let _toggle_cmd = timer.toggle();

        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_begins_countdown() {
        let mut timer = new(5);

        let result = start_timer(&mut timer);
        assert!(result.is_some()); // First tick is scheduled
        assert_eq!(timer.phase(), Phase::Running);
    }

    #[test]
    fn test_start_noop_when_already_running() {
        let mut timer = new(5);
        start_timer(&mut timer);

        // A second start must not schedule a second tick chain.
        let result = start_timer(&mut timer);
        assert!(result.is_none());
        assert_eq!(timer.phase(), Phase::Running);
    }

    #[test]
    fn test_start_noop_when_finished() {
        let mut timer = new(1);
        start_timer(&mut timer);
        for _ in 0..60 {
            deliver_tick(&mut timer);
        }
        assert_eq!(timer.phase(), Phase::Finished);

        let result = start_timer(&mut timer);
        assert!(result.is_none());
        assert_eq!(timer.phase(), Phase::Finished);
    }

    #[test]
    fn test_tick_reduces_remaining() {
        let mut timer = new(5);
        start_timer(&mut timer);

        let result = deliver_tick(&mut timer);
        assert!(result.is_some());
        assert_eq!(timer.remaining(), Duration::from_secs(299));
    }

    #[test]
    fn test_ticks_rejected_unless_running() {
        let mut timer = new(5);

        // Idle: nothing scheduled, nothing consumed.
        assert!(deliver_tick(&mut timer).is_none());
        assert_eq!(timer.remaining(), timer.duration());

        start_timer(&mut timer);
        deliver_tick(&mut timer);
        pause_timer(&mut timer);
        let paused_remaining = timer.remaining();

        // Paused: a tick still in flight from before the pause is dropped.
        assert!(deliver_tick(&mut timer).is_none());
        assert_eq!(timer.remaining(), paused_remaining);
    }

    #[test]
    fn test_wrong_id_rejected() {
        let mut timer = new(5);
        start_timer(&mut timer);

        let foreign_tick = TickMsg {
            id: timer.id() + 999,
            tag: timer.tag,
        };
        assert!(timer.update(Box::new(foreign_tick)).is_none());
        assert_eq!(timer.remaining(), timer.duration());

        let foreign_pause = StartStopMsg {
            id: timer.id() + 999,
            running: false,
        };
        assert!(timer.update(Box::new(foreign_pause)).is_none());
        assert_eq!(timer.phase(), Phase::Running);
    }

    #[test]
    fn test_stale_tag_rejected() {
        let mut timer = new(5);
        start_timer(&mut timer);
        deliver_tick(&mut timer);
        let remaining = timer.remaining();

        let stale = TickMsg {
            id: timer.id(),
            tag: 999,
        };
        assert!(timer.update(Box::new(stale)).is_none());
        assert_eq!(timer.remaining(), remaining);
    }

    #[test]
    fn test_pause_preserves_remaining() {
        let mut timer = new(5);
        start_timer(&mut timer);
        for _ in 0..10 {
            deliver_tick(&mut timer);
        }
        let remaining = timer.remaining();

        pause_timer(&mut timer);
        assert_eq!(timer.phase(), Phase::Paused);
        assert_eq!(timer.remaining(), remaining);

        start_timer(&mut timer);
        assert_eq!(timer.phase(), Phase::Running);
        assert_eq!(timer.remaining(), remaining);
    }

    #[test]
    fn test_pause_twice_is_idempotent() {
        let mut timer = new(5);
        start_timer(&mut timer);
        deliver_tick(&mut timer);

        pause_timer(&mut timer);
        let remaining = timer.remaining();

        let result = pause_timer(&mut timer);
        assert!(result.is_none());
        assert_eq!(timer.phase(), Phase::Paused);
        assert_eq!(timer.remaining(), remaining);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut timer = new(5);
        start_timer(&mut timer);
        for _ in 0..90 {
            deliver_tick(&mut timer);
        }
        assert_eq!(timer.last_announced, 1);

        timer.reset();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.remaining(), timer.duration());
        assert_eq!(timer.last_announced, 0);

        // The chain from before the reset is dead.
        assert!(deliver_tick(&mut timer).is_none());
        assert_eq!(timer.remaining(), timer.duration());
    }

    #[test]
    fn test_set_minutes_rejected_while_running() {
        let mut timer = new(5);
        start_timer(&mut timer);
        deliver_tick(&mut timer);
        let remaining = timer.remaining();

        timer.set_minutes(30);
        assert_eq!(timer.minutes(), 5);
        assert_eq!(timer.remaining(), remaining);

        pause_timer(&mut timer);
        timer.set_minutes(30);
        assert_eq!(timer.minutes(), 30);
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.remaining(), Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_set_minutes_clamps() {
        let mut timer = new(5);

        timer.set_minutes(0);
        assert_eq!(timer.minutes(), MIN_MINUTES);

        timer.set_minutes(500);
        assert_eq!(timer.minutes(), MAX_MINUTES);
    }

    #[test]
    fn test_minute_of_ticks_announces_once() {
        // 5 minute countdown, one minute of ticks: exactly one announcement
        // and four minutes left.
        let mut timer = new(5);
        start_timer(&mut timer);

        for _ in 0..60 {
            deliver_tick(&mut timer);
        }

        assert_eq!(timer.last_announced, 1);
        assert_eq!(timer.remaining(), Duration::from_millis(240_000));
        assert_eq!(timer.phase(), Phase::Running);
    }

    #[test]
    fn test_full_run_announces_each_minute() {
        let mut timer = new(5);
        start_timer(&mut timer);

        let mut announcements = Vec::new();
        for _ in 0..300 {
            let before = timer.last_announced;
            deliver_tick(&mut timer);
            if timer.last_announced > before {
                announcements.push(timer.last_announced);
            }
        }

        // The boundary that coincides with zero announces the finish, not a
        // fifth minute.
        assert_eq!(announcements, vec![1, 2, 3, 4]);
        assert_eq!(timer.phase(), Phase::Finished);
        assert!(timer.remaining().is_zero());
    }

    #[test]
    fn test_one_minute_run_finishes_without_minute_cue() {
        let mut timer = new(1);
        start_timer(&mut timer);

        for _ in 0..60 {
            deliver_tick(&mut timer);
        }

        assert_eq!(timer.phase(), Phase::Finished);
        assert_eq!(timer.last_announced, 0);

        // Finished timers ignore any further ticks.
        assert!(deliver_tick(&mut timer).is_none());
    }

    #[test]
    fn test_minute_cue_resumes_ticking() {
        let mut timer = new(5);
        start_timer(&mut timer);
        for _ in 0..60 {
            deliver_tick(&mut timer);
        }
        assert_eq!(timer.last_announced, 1);

        let id = timer.id();
        let resumed = timer.update(Box::new(MinuteMsg { id, minutes: 1 }));
        assert!(resumed.is_some());

        // Once paused the cue no longer restarts the cadence.
        pause_timer(&mut timer);
        let halted = timer.update(Box::new(MinuteMsg { id, minutes: 1 }));
        assert!(halted.is_none());
    }

    #[test]
    fn test_drifting_ticks_still_announce() {
        // With a 7 second interval no tick lands exactly on a minute
        // boundary; the minute must still be announced when it is crossed.
        let mut timer = new_with_interval(2, Duration::from_secs(7));
        start_timer(&mut timer);

        let mut announcements = Vec::new();
        let mut guard = 0;
        while timer.phase() == Phase::Running {
            let before = timer.last_announced;
            deliver_tick(&mut timer);
            if timer.last_announced > before {
                announcements.push(timer.last_announced);
            }
            guard += 1;
            assert!(guard < 100);
        }

        assert_eq!(announcements, vec![1]);
        assert_eq!(timer.phase(), Phase::Finished);
    }

    #[test]
    fn test_format_time_rounds_up() {
        assert_eq!(format_time(Duration::ZERO), "00:00:00");
        assert_eq!(format_time(Duration::from_millis(1)), "00:00:01");
        assert_eq!(format_time(Duration::from_millis(299_000)), "00:04:59");
        assert_eq!(format_time(Duration::from_millis(299_001)), "00:05:00");
        assert_eq!(format_time(Duration::from_millis(300_000)), "00:05:00");
        assert_eq!(format_time(Duration::from_secs(3_600)), "01:00:00");
        assert_eq!(format_time(Duration::from_secs(3_661)), "01:01:01");
    }

    #[test]
    fn test_view_formats_remaining() {
        let timer = new(5);
        assert_eq!(timer.view(), "00:05:00");
    }

    #[test]
    fn test_next_bite_counts_down_within_minute() {
        let mut timer = new(5);
        assert_eq!(timer.next_bite_in(), 60);

        start_timer(&mut timer);
        deliver_tick(&mut timer);
        assert_eq!(timer.next_bite_in(), 59);

        for _ in 0..58 {
            deliver_tick(&mut timer);
        }
        assert_eq!(timer.next_bite_in(), 1);

        // The boundary tick rolls the caption back over to a full minute.
        deliver_tick(&mut timer);
        assert_eq!(timer.next_bite_in(), 60);
    }

    #[test]
    fn test_progress_ratios() {
        let mut timer = new(5);
        assert_eq!(timer.total_progress(), 1.0);
        assert_eq!(timer.minute_progress(), 0.0);

        start_timer(&mut timer);
        for _ in 0..30 {
            deliver_tick(&mut timer);
        }

        assert!((timer.total_progress() - 0.9).abs() < 1e-9);
        assert!((timer.minute_progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_elapsed() {
        let mut timer = new(5);
        assert_eq!(timer.elapsed(), Duration::ZERO);

        start_timer(&mut timer);
        for _ in 0..45 {
            deliver_tick(&mut timer);
        }
        assert_eq!(timer.elapsed(), Duration::from_secs(45));
    }
}
