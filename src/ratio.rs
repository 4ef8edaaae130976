//! Shared rules for turning raw progress values into something displayable.

/// Clamps a progress value into `[0, 1]`.
///
/// Values above one become one and values below zero become zero. NaN has
/// no position on the bar and is treated as no progress.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        #[cfg(feature = "tracing")]
        tracing::trace!("NaN progress treated as 0");
        return 0.0;
    }
    let clamped = ratio.clamp(0.0, 1.0);
    #[cfg(feature = "tracing")]
    {
        if clamped != ratio {
            tracing::trace!(ratio, clamped, "progress clamped");
        }
    }
    clamped
}

/// Fraction of `total` completed, clamped. An empty total counts as no progress.
pub fn ratio_of(done: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    clamp_ratio(done as f64 / total as f64)
}

/// Most decimal places a percentage is written with.
pub const MAX_PERCENTAGE_DECIMALS: usize = 100;

/// Caps `decimals` at [`MAX_PERCENTAGE_DECIMALS`].
pub(crate) fn limit_decimals(decimals: usize) -> usize {
    if decimals > MAX_PERCENTAGE_DECIMALS {
        #[cfg(feature = "tracing")]
        tracing::debug!(decimals, "percentage decimals lowered to {MAX_PERCENTAGE_DECIMALS}");
        return MAX_PERCENTAGE_DECIMALS;
    }
    decimals
}

/// A percentage suffix such as `52%` or `52.40%`.
///
/// The ratio is scaled by 100 and written with `decimals` fixed places using
/// the standard float formatter, which rounds the exact binary value half to
/// even. `0.125` at one decimal is `12.5%`; at zero decimals it is `12%`.
/// `decimals` is capped at [`MAX_PERCENTAGE_DECIMALS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage {
    ratio: f64,
    decimals: usize,
}

impl Percentage {
    pub fn new(ratio: f64, decimals: usize) -> Self {
        Self {
            ratio: clamp_ratio(ratio),
            decimals: limit_decimals(decimals),
        }
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}%", self.decimals, self.ratio * 100.0)
    }
}
