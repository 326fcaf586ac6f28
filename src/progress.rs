//! Progress meter for the countdown screen.
//!
//! Renders a horizontal bar that can be filled to any ratio, with an
//! optional percentage readout. The screen uses two of these: one for the
//! current minute and one for the whole countdown. Both are pure functions
//! of the timer state and are redrawn on every tick, so the meter itself
//! holds no animation state; setting a value takes effect on the next
//! render.
//!
//! # Basic Usage
//!
//! ```rust
//! use nextbite_widgets::progress::{new, with_solid_fill, with_width};
//!
//! // A meter with default settings.
//! let meter = new(&[]);
//!
//! // A meter configured through the option pattern.
//! let mut meter = new(&[
//!     with_width(30),
//!     with_solid_fill("#6c4cff".to_string()),
//! ]);
//!
//! meter.set_percent(0.75);
//! let rendered = meter.view();
//! ```

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::lipgloss::blending::blend_1d;
use lipgloss_extras::lipgloss::{self, Color as LGColor, Style};

const DEFAULT_WIDTH: i32 = 40;

/// Configuration options for customizing meter appearance.
///
/// Options are applied in order over the defaults, so later options win
/// when they touch the same setting.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::progress::{new, with_gradient, with_width, without_percentage};
///
/// let meter = new(&[
///     with_width(24),
///     with_gradient("#6c4cff".to_string(), "#b8b8ff".to_string()),
///     without_percentage(),
/// ]);
/// ```
pub enum ProgressOption {
    /// Uses the default gradient colors, purple blending into pink.
    WithDefaultGradient,
    /// Blends between two custom colors across the bar.
    WithGradient(String, String),
    /// Fills the bar with a single color instead of a gradient.
    WithSolidFill(String),
    /// Overrides the characters used for the filled and empty sections.
    WithFillCharacters(char, char),
    /// Hides the numeric percentage readout.
    WithoutPercentage,
    /// Sets the total width in characters, percentage included.
    WithWidth(i32),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithDefaultGradient => {
                m.set_ramp("#5A56E0".to_string(), "#EE6FF8".to_string());
            }
            ProgressOption::WithGradient(color_a, color_b) => {
                m.set_ramp(color_a.clone(), color_b.clone());
            }
            ProgressOption::WithSolidFill(color) => {
                m.full_color = color.clone();
                m.use_ramp = false;
            }
            ProgressOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressOption::WithoutPercentage => {
                m.show_percentage = false;
            }
            ProgressOption::WithWidth(width) => {
                m.width = *width;
            }
        }
    }
}

/// Fills the bar with the default purple-to-pink gradient.
pub fn with_default_gradient() -> ProgressOption {
    ProgressOption::WithDefaultGradient
}

/// Fills the bar with a gradient between the two given colors.
///
/// Colors can be hex codes such as `"#6c4cff"` or names the terminal
/// understands.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::progress::{new, with_gradient};
///
/// let meter = new(&[
///     with_gradient("#6c4cff".to_string(), "#b8b8ff".to_string()),
/// ]);
/// ```
pub fn with_gradient(color_a: String, color_b: String) -> ProgressOption {
    ProgressOption::WithGradient(color_a, color_b)
}

/// Fills the bar with a single solid color.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::progress::{new, with_solid_fill};
///
/// let meter = new(&[with_solid_fill("#2ed573".to_string())]);
/// ```
pub fn with_solid_fill(color: String) -> ProgressOption {
    ProgressOption::WithSolidFill(color)
}

/// Overrides the characters used for filled and empty sections.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::progress::{new, with_fill_characters};
///
/// let ascii_meter = new(&[with_fill_characters('=', '-')]);
/// ```
pub fn with_fill_characters(full: char, empty: char) -> ProgressOption {
    ProgressOption::WithFillCharacters(full, empty)
}

/// Hides the numeric percentage readout next to the bar.
pub fn without_percentage() -> ProgressOption {
    ProgressOption::WithoutPercentage
}

/// Sets the total width of the meter in characters.
///
/// The width covers both the bar and the percentage readout when shown.
/// It can also be adjusted later through the `width` field, which is handy
/// when the terminal is resized.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::progress::{new, with_width};
///
/// let mut meter = new(&[with_width(20)]);
/// meter.width = 32;
/// ```
pub fn with_width(w: i32) -> ProgressOption {
    ProgressOption::WithWidth(w)
}

/// A horizontal meter rendered from a fill ratio.
///
/// The ratio is set directly with [`set_percent`](Model::set_percent) and
/// read back with [`percent`](Model::percent); rendering happens in
/// [`view`](Model::view) or, for an arbitrary ratio, in
/// [`view_as`](Model::view_as).
#[derive(Debug, Clone)]
pub struct Model {
    /// Total width of the meter, including percentage, if set.
    pub width: i32,

    /// Character for the filled sections of the bar.
    pub full: char,
    /// Color used for the filled portion.
    pub full_color: String,

    /// Character for the empty sections of the bar.
    pub empty: char,
    /// Color used for the empty portion.
    pub empty_color: String,

    /// Whether the numeric percentage is rendered.
    pub show_percentage: bool,
    /// Lipgloss style applied to the percentage text.
    pub percentage_style: Style,

    /// Current fill ratio in `0.0..=1.0`.
    percent: f64,

    /// Gradient settings.
    use_ramp: bool,
    ramp_color_a: String,
    ramp_color_b: String,
}

/// Creates a meter with the given configuration options.
///
/// Defaults: 40 characters wide, `'█'` over `'░'`, purple fill on gray,
/// percentage shown, 0% filled.
///
/// # Examples
///
/// ```rust
/// use nextbite_widgets::progress::new;
///
/// let meter = new(&[]);
/// assert_eq!(meter.width, 40);
/// assert_eq!(meter.percent(), 0.0);
/// ```
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        width: DEFAULT_WIDTH,
        full: '█',
        full_color: "#7571F9".to_string(),
        empty: '░',
        empty_color: "#606060".to_string(),
        show_percentage: true,
        percentage_style: Style::new(),
        percent: 0.0,
        use_ramp: false,
        ramp_color_a: String::new(),
        ramp_color_b: String::new(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Returns the current fill ratio.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Sets the fill ratio, clamped to `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::progress::new;
    ///
    /// let mut meter = new(&[]);
    /// meter.set_percent(1.5);
    /// assert_eq!(meter.percent(), 1.0);
    /// ```
    pub fn set_percent(&mut self, p: f64) {
        self.percent = p.clamp(0.0, 1.0);
    }

    /// Renders the meter at its current fill ratio.
    pub fn view(&self) -> String {
        self.view_as(self.percent)
    }

    /// Renders the meter at an arbitrary fill ratio.
    ///
    /// Bypasses the stored ratio, which makes it convenient for drawing a
    /// value computed on the fly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nextbite_widgets::progress::{new, with_width, without_percentage};
    ///
    /// let meter = new(&[with_width(10), without_percentage()]);
    /// assert!(!meter.view_as(0.0).contains('█'));
    /// assert!(!meter.view_as(1.0).contains('░'));
    /// ```
    pub fn view_as(&self, percent: f64) -> String {
        let percent_view = self.percentage_view(percent);
        // Visible width, ignoring ANSI escape sequences.
        let percent_width = lipgloss::width_visible(&percent_view) as i32;
        let bar_view = self.bar_view(percent, percent_width);

        format!("{}{}", bar_view, percent_view)
    }

    /// Renders the bar portion of the meter.
    fn bar_view(&self, percent: f64, text_width: i32) -> String {
        let tw = std::cmp::max(0, self.width - text_width); // total width
        let fw = std::cmp::max(0, std::cmp::min(tw, ((tw as f64) * percent).round() as i32)); // filled width

        let mut result = String::new();

        if self.use_ramp {
            let grad_len = std::cmp::max(2, tw) as usize;

            let start = LGColor::from(self.ramp_color_a.as_str());
            let end = LGColor::from(self.ramp_color_b.as_str());
            let gradient_colors = blend_1d(grad_len, vec![start, end]);

            for i in 0..fw as usize {
                let color_idx = std::cmp::min(i, grad_len - 1);
                let styled = Style::new()
                    .foreground(gradient_colors[color_idx].clone())
                    .render(&self.full.to_string());
                result.push_str(&styled);
            }
        } else {
            let styled = Style::new()
                .foreground(LGColor::from(self.full_color.as_str()))
                .render(&self.full.to_string());
            result.push_str(&styled.repeat(fw as usize));
        }

        let empty_styled = Style::new()
            .foreground(LGColor::from(self.empty_color.as_str()))
            .render(&self.empty.to_string());
        let n = std::cmp::max(0, tw - fw);
        result.push_str(&empty_styled.repeat(n as usize));

        result
    }

    /// Renders the percentage readout, or nothing when hidden.
    fn percentage_view(&self, percent: f64) -> String {
        if !self.show_percentage {
            return String::new();
        }

        let percent = percent.clamp(0.0, 1.0);
        let percentage = format!(" {:3.0}%", percent * 100.0);
        self.percentage_style.render(&percentage)
    }

    fn set_ramp(&mut self, color_a: String, color_b: String) {
        self.use_ramp = true;
        self.ramp_color_a = color_a;
        self.ramp_color_b = color_b;
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        (new(&[]), std::option::Option::None)
    }

    /// The meter is display-only; messages are ignored.
    fn update(&mut self, _msg: Msg) -> std::option::Option<Cmd> {
        std::option::Option::None
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_no_options() {
        let meter = new(&[]);

        assert_eq!(meter.width, DEFAULT_WIDTH);
        assert_eq!(meter.full, '█');
        assert_eq!(meter.empty, '░');
        assert_eq!(meter.full_color, "#7571F9");
        assert_eq!(meter.empty_color, "#606060");
        assert!(meter.show_percentage);
        assert!(!meter.use_ramp);
        assert_eq!(meter.percent(), 0.0);
    }

    #[test]
    fn test_new_with_width() {
        let meter = new(&[with_width(60)]);
        assert_eq!(meter.width, 60);
    }

    #[test]
    fn test_new_with_solid_fill() {
        let meter = new(&[with_solid_fill("#ff0000".to_string())]);
        assert_eq!(meter.full_color, "#ff0000");
        assert!(!meter.use_ramp);
    }

    #[test]
    fn test_new_with_gradient() {
        let meter = new(&[with_gradient("#ff0000".to_string(), "#0000ff".to_string())]);
        assert!(meter.use_ramp);
        assert_eq!(meter.ramp_color_a, "#ff0000");
        assert_eq!(meter.ramp_color_b, "#0000ff");
    }

    #[test]
    fn test_new_with_default_gradient() {
        let meter = new(&[with_default_gradient()]);
        assert!(meter.use_ramp);
        assert_eq!(meter.ramp_color_a, "#5A56E0");
        assert_eq!(meter.ramp_color_b, "#EE6FF8");
    }

    #[test]
    fn test_new_with_fill_characters() {
        let meter = new(&[with_fill_characters('▓', '▒')]);
        assert_eq!(meter.full, '▓');
        assert_eq!(meter.empty, '▒');
    }

    #[test]
    fn test_new_without_percentage() {
        let meter = new(&[without_percentage()]);
        assert!(!meter.show_percentage);
    }

    #[test]
    fn test_new_with_multiple_options() {
        let meter = new(&[
            with_width(80),
            with_solid_fill("#00ff00".to_string()),
            without_percentage(),
        ]);

        assert_eq!(meter.width, 80);
        assert_eq!(meter.full_color, "#00ff00");
        assert!(!meter.show_percentage);
        assert!(!meter.use_ramp);
    }

    #[test]
    fn test_set_percent_clamps() {
        let mut meter = new(&[]);

        meter.set_percent(1.5);
        assert_eq!(meter.percent(), 1.0);

        meter.set_percent(-0.5);
        assert_eq!(meter.percent(), 0.0);

        meter.set_percent(0.5);
        assert_eq!(meter.percent(), 0.5);
    }

    #[test]
    fn test_view_reflects_set_percent() {
        let mut meter = new(&[with_width(10), without_percentage()]);
        meter.set_percent(0.5);

        let clean = lipgloss::strip_ansi(&meter.view());
        let filled = clean.chars().filter(|&c| c == '█').count();
        let empty = clean.chars().filter(|&c| c == '░').count();
        assert_eq!(filled, 5);
        assert_eq!(empty, 5);
    }

    #[test]
    fn test_view_as_fill_counts() {
        let meter = new(&[with_width(10)]);

        let view_50 = meter.view_as(0.5);
        let view_100 = meter.view_as(1.0);

        let filled_50 = view_50.chars().filter(|&c| c == '█').count();
        let filled_100 = view_100.chars().filter(|&c| c == '█').count();
        assert!(filled_100 > filled_50);
    }

    #[test]
    fn test_view_total_width_is_stable() {
        let meter = new(&[with_width(20), without_percentage()]);

        assert_eq!(lipgloss::width_visible(&meter.view_as(0.0)), 20);
        assert_eq!(lipgloss::width_visible(&meter.view_as(0.5)), 20);
        assert_eq!(lipgloss::width_visible(&meter.view_as(1.0)), 20);
    }

    #[test]
    fn test_bar_composition_at_extremes() {
        let meter = new(&[with_width(20), without_percentage()]);

        let bar_0 = lipgloss::strip_ansi(&meter.bar_view(0.0, 0));
        let bar_100 = lipgloss::strip_ansi(&meter.bar_view(1.0, 0));
        assert!(bar_0.chars().all(|c| c == '░'));
        assert!(bar_100.chars().all(|c| c == '█'));
    }

    #[test]
    fn test_percentage_text() {
        let meter = new(&[with_width(10)]);
        let view = meter.view_as(0.75);
        assert!(view.contains('%'));
        assert!(view.contains("75"));

        let bare = new(&[with_width(10), without_percentage()]);
        assert!(!bare.view_as(0.75).contains('%'));
    }

    #[test]
    fn test_gradient_renders_at_half() {
        let meter = new(&[
            with_gradient("#ff0000".to_string(), "#00ff00".to_string()),
            with_width(10),
            without_percentage(),
        ]);

        let clean = lipgloss::strip_ansi(&meter.view_as(0.5));
        assert_eq!(clean.chars().filter(|&c| c == '█').count(), 5);
    }

    #[test]
    fn test_default_implementation() {
        let meter = Model::default();
        assert_eq!(meter.width, DEFAULT_WIDTH);
        assert_eq!(meter.percent(), 0.0);
    }
}
