use crate::color::{AnsiColorizer, Color, Colorizer};
use crate::ratio::{Percentage, clamp_ratio, limit_decimals};

/// Glyphs the spinner rotates through, one per render.
pub const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Shown in place of the rotating glyph once progress reaches 100%.
pub const COMPLETE_GLYPH: &str = "!";

/// Settings for a [`Spinner`], fixed once the spinner is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerConfig {
    /// Append a percentage when a ratio is given.
    pub show_percentage: bool,
    /// Fixed decimal places of the percentage, at most 100.
    pub percentage_decimals: usize,
    pub color: Color,
    /// Used instead of `color` once progress reaches 100%.
    pub color_on_completion: Color,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            show_percentage: true,
            percentage_decimals: 0,
            color: Color::Default,
            color_on_completion: Color::Default,
        }
    }
}

/// A rotating `| / - \` spinner with an optional percentage.
///
/// Every call to [`Spinner::render`] advances the animation by one frame,
/// whether or not a ratio is given. Rendering takes `&mut self`; share a
/// spinner across threads behind a `Mutex`.
///
/// ```
/// use progress_tally::Spinner;
///
/// let mut spinner = Spinner::new();
/// assert_eq!(spinner.render(None), "|");
/// assert_eq!(spinner.render(Some(0.5)), "/ 50%");
/// assert_eq!(spinner.render(Some(1.0)), "! 100%");
/// assert_eq!(spinner.render(None), "\\");
/// ```
#[derive(Debug, Clone)]
pub struct Spinner<C = AnsiColorizer> {
    config: SpinnerConfig,
    colorizer: C,
    index: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::from_config(SpinnerConfig::default())
    }

    pub fn from_config(mut config: SpinnerConfig) -> Self {
        config.percentage_decimals = limit_decimals(config.percentage_decimals);
        Self {
            config,
            colorizer: AnsiColorizer,
            index: 0,
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Colorizer> Spinner<C> {
    pub fn show_percentage(mut self, show: bool) -> Self {
        self.config.show_percentage = show;
        self
    }

    pub fn percentage_decimals(mut self, decimals: usize) -> Self {
        self.config.percentage_decimals = limit_decimals(decimals);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.config.color = color;
        self
    }

    pub fn color_on_completion(mut self, color: Color) -> Self {
        self.config.color_on_completion = color;
        self
    }

    pub fn with_colorizer<D: Colorizer>(self, colorizer: D) -> Spinner<D> {
        Spinner {
            config: self.config,
            colorizer,
            index: self.index,
        }
    }

    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    /// Renders the current frame and advances to the next one.
    ///
    /// `None` means the progress is unknown: only the glyph is shown, in the
    /// normal color, and no percentage is appended.
    pub fn render(&mut self, ratio: Option<f64>) -> String {
        let glyph = self.frame();
        self.tick();

        let Some(ratio) = ratio else {
            return self.colorizer.colorize(glyph, self.config.color);
        };

        let ratio = clamp_ratio(ratio);
        let (glyph, color) = if ratio == 1.0 {
            (COMPLETE_GLYPH, self.config.color_on_completion)
        } else {
            (glyph, self.config.color)
        };

        let mut out = self.colorizer.colorize(glyph, color);
        if self.config.show_percentage {
            out.push(' ');
            out.push_str(&Percentage::new(ratio, self.config.percentage_decimals).to_string());
        }
        out
    }
}

impl<C> Spinner<C> {
    /// Skips one frame without rendering, as if `render` had been called.
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % FRAMES.len();
    }

    /// Glyph the next indeterminate [`render`](Spinner::render) will show.
    /// Completion renders [`COMPLETE_GLYPH`] instead and never shows here.
    pub fn frame(&self) -> &'static str {
        FRAMES[self.index]
    }

    /// Position in [`FRAMES`], `0..4`.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Writes the pending glyph, uncolored and without advancing.
impl<C> std::fmt::Display for Spinner<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.frame())
    }
}
