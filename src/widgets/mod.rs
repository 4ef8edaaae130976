//! The two indicators.
//!
//! # Progress bar
//!
//! [`ProgressBar`] maps a ratio to a bracketed bar with an optional percentage:
//!
//! ```rust
//! # use progress_tally::{Color, PlainColorizer, ProgressBar};
//! let bar = ProgressBar::new(10)
//!     .fill("#")
//!     .color(Color::Cyan)
//!     .color_on_completion(Color::Green)
//!     .with_colorizer(PlainColorizer);
//! assert_eq!(bar.render(0.3), "[###       ] 30%");
//!
//! // Writing through `Display` skips the intermediate `String`:
//! let line = format!("download {}", bar.at(1.0));
//! assert_eq!(line, "download [##########] 100%");
//! ```
//!
//! With [`half_steps`](ProgressBar::half_steps) the cell after the filled run
//! shows the half-step fill once progress covers at least half of it.
//!
//! # Spinner
//!
//! [`Spinner`] cycles `| / - \` on every render and shows `!` at 100%:
//!
//! ```rust
//! # use progress_tally::Spinner;
//! let mut spinner = Spinner::new().percentage_decimals(1);
//! assert_eq!(spinner.render(Some(0.123)), "| 12.3%");
//! assert_eq!(spinner.render(None), "/");
//! ```

mod progress_bar;
mod spinner;

pub use progress_bar::*;
pub use spinner::*;
