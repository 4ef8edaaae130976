use crate::color::{AnsiColorizer, Color, Colorizer};
use crate::ratio::{Percentage, clamp_ratio, limit_decimals, ratio_of};

/// Settings for a [`ProgressBar`], fixed once the bar is built.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    /// Number of cells between the brackets. Zero is raised to one.
    pub width: usize,
    /// Text repeated once per filled cell.
    pub fill: String,
    /// Render a partial cell when progress covers at least half of it.
    pub half_steps: bool,
    /// Text for the partial cell.
    pub half_step_fill: String,
    /// Append a percentage such as ` 52%`.
    pub show_percentage: bool,
    /// Fixed decimal places of the percentage, at most 100.
    pub percentage_decimals: usize,
    pub color: Color,
    /// Used instead of `color` once progress reaches 100%.
    pub color_on_completion: Color,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: 20,
            fill: "=".to_string(),
            half_steps: false,
            half_step_fill: "-".to_string(),
            show_percentage: true,
            percentage_decimals: 0,
            color: Color::Default,
            color_on_completion: Color::Default,
        }
    }
}

/// A fixed-width bracketed progress bar.
///
/// ```
/// use progress_tally::{PlainColorizer, ProgressBar};
///
/// let bar = ProgressBar::new(10).with_colorizer(PlainColorizer);
/// assert_eq!(bar.render(0.25), "[==        ] 25%");
///
/// let bar = ProgressBar::new(4).half_steps(true).show_percentage(false);
/// assert_eq!(bar.render(0.4), "[=-  ]");
/// ```
#[derive(Debug, Clone)]
pub struct ProgressBar<C = AnsiColorizer> {
    config: BarConfig,
    colorizer: C,
}

impl ProgressBar {
    pub fn new(width: usize) -> Self {
        Self::from_config(BarConfig {
            width,
            ..BarConfig::default()
        })
    }

    pub fn from_config(config: BarConfig) -> Self {
        Self {
            config: normalize(config),
            colorizer: AnsiColorizer,
        }
    }
}

fn normalize(mut config: BarConfig) -> BarConfig {
    if config.width == 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!("progress bar width 0 raised to 1");
        config.width = 1;
    }
    config.percentage_decimals = limit_decimals(config.percentage_decimals);
    config
}

impl<C: Colorizer> ProgressBar<C> {
    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.config.fill = fill.into();
        self
    }

    pub fn half_steps(mut self, enabled: bool) -> Self {
        self.config.half_steps = enabled;
        self
    }

    pub fn half_step_fill(mut self, fill: impl Into<String>) -> Self {
        self.config.half_step_fill = fill.into();
        self
    }

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

    /// Replaces the colorizer, e.g. with [`crate::PlainColorizer`] for piped output.
    pub fn with_colorizer<D: Colorizer>(self, colorizer: D) -> ProgressBar<D> {
        ProgressBar {
            config: self.config,
            colorizer,
        }
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Renders the bar for `ratio`. Out-of-range values are clamped.
    pub fn render(&self, ratio: f64) -> String {
        self.at(ratio).to_string()
    }

    /// Renders the bar for `done` out of `total`.
    pub fn render_count(&self, done: u64, total: u64) -> String {
        self.at(ratio_of(done, total)).to_string()
    }

    /// A displayable snapshot of the bar at `ratio`.
    pub fn at(&self, ratio: f64) -> BarView<'_, C> {
        BarView {
            bar: self,
            ratio: clamp_ratio(ratio),
        }
    }
}

/// The bar at one progress value; see [`ProgressBar::at`].
pub struct BarView<'a, C> {
    bar: &'a ProgressBar<C>,
    ratio: f64,
}

impl<C> BarView<'_, C> {
    /// The clamped ratio this view renders.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl<C: Colorizer> std::fmt::Display for BarView<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = &self.bar.config;
        let colorizer = &self.bar.colorizer;
        let width = config.width;
        let complete = self.ratio == 1.0;
        let color = if complete {
            config.color_on_completion
        } else {
            config.color
        };

        let mut amount = ((self.ratio * width as f64).floor() as usize).min(width);

        f.write_str("[")?;
        let padding = if config.half_steps {
            // The partial cell needs a slot until the bar is complete.
            if !complete {
                amount = amount.min(width - 1);
            }
            f.write_str(&colorizer.colorize(&config.fill.repeat(amount), color))?;
            if !complete {
                let cell = 1.0 / width as f64;
                let remainder = self.ratio - amount as f64 / width as f64;
                if remainder >= cell / 2.0 {
                    f.write_str(&colorizer.colorize(&config.half_step_fill, color))?;
                } else {
                    f.write_str(" ")?;
                }
            }
            width.saturating_sub(amount + 1)
        } else {
            f.write_str(&colorizer.colorize(&config.fill.repeat(amount), color))?;
            width - amount
        };
        write!(f, "{:padding$}]", "")?;

        if config.show_percentage {
            write!(f, " {}", Percentage::new(self.ratio, config.percentage_decimals))?;
        }
        Ok(())
    }
}
