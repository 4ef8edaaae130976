#![doc = include_str!("../README.md")]

pub(crate) mod color;
pub(crate) mod ratio;
pub(crate) mod widgets;


/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::color::{AnsiColorizer, Color, Colorizer, ParseColorError, PlainColorizer};
    pub use crate::ratio::{MAX_PERCENTAGE_DECIMALS, Percentage, clamp_ratio, ratio_of};
    pub use crate::widgets::{
        BarConfig, BarView, COMPLETE_GLYPH, FRAMES, ProgressBar, Spinner, SpinnerConfig,
    };
}

pub use crate::prelude::*;
