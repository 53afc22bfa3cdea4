//! Pure layout arithmetic for a right-anchored, horizontally scrolling bar
//! chart.
//!
//! Offsets are measured in content pixels from the trailing edge: offset `0`
//! aligns the content's trailing edge with the viewport's trailing edge, and
//! larger offsets reveal earlier bars.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Bar;

/// Horizontal layout inputs shared by every bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub bar_count: usize,
    pub bar_width: f64,
    pub bar_space: f64,
}

impl BarLayout {
    #[must_use]
    pub fn new(bar_count: usize, bar_width: f64, bar_space: f64) -> Self {
        Self {
            bar_count,
            bar_width,
            bar_space,
        }
    }

    #[must_use]
    pub fn stride(self) -> f64 {
        bar_stride(self.bar_width, self.bar_space)
    }

    #[must_use]
    pub fn total_width(self) -> f64 {
        total_width(self.bar_count, self.bar_width, self.bar_space)
    }
}

/// Distance between the start of two consecutive bars.
#[must_use]
pub fn bar_stride(bar_width: f64, bar_space: f64) -> f64 {
    bar_width + bar_space
}

#[must_use]
pub fn total_width(bar_count: usize, bar_width: f64, bar_space: f64) -> f64 {
    bar_count as f64 * bar_stride(bar_width, bar_space)
}

#[must_use]
pub fn stacked_height(bar: &Bar) -> f64 {
    bar.stacked_height()
}

/// Tallest stacked height across `bars`, `0.0` for an empty chart.
#[must_use]
pub fn highest(bars: &[Bar]) -> f64 {
    bars.iter()
        .map(|bar| OrderedFloat(bar.stacked_height()))
        .max()
        .map_or(0.0, |height| height.0.max(0.0))
}

/// Keeps the visible window inside the content.
///
/// The lower bound is checked first, so content narrower than the viewport
/// yields `total_width - viewport_width`, which is negative.
#[must_use]
pub fn clamp_offset(offset: f64, viewport_width: f64, total_width: f64) -> f64 {
    if offset < 0.0 {
        return 0.0;
    }
    if offset + viewport_width > total_width {
        return total_width - viewport_width;
    }
    offset
}

/// Whether `offset` is a value the drag clamp can settle on.
///
/// For content at least as wide as the viewport that is
/// `[0, total_width - viewport_width]`; narrower content spans
/// `[total_width - viewport_width, 0]`.
#[must_use]
pub fn offset_in_bounds(offset: f64, viewport_width: f64, total_width: f64) -> bool {
    let slack = total_width - viewport_width;
    offset >= slack.min(0.0) && offset <= slack.max(0.0)
}

/// Unclamped offset that puts bar `bar_index` under the viewport center.
#[must_use]
pub fn offset_to_center(
    bar_index: usize,
    total_width: f64,
    stride: f64,
    viewport_width: f64,
) -> f64 {
    total_width - stride * bar_index as f64 + (stride - viewport_width) / 2.0
}

/// Index of the bar that has just crossed the viewport center.
///
/// Searches for the first bar whose leading edge sits at or beyond the center
/// and steps back one bar. `None` when the search lands before the first bar
/// or finds nothing at all.
#[must_use]
pub fn centered_bar_index(
    offset: f64,
    total_width: f64,
    viewport_width: f64,
    stride: f64,
    bar_count: usize,
) -> Option<usize> {
    let center = total_width - offset - viewport_width / 2.0;
    let first_past_center = (0..bar_count).find(|&index| index as f64 * stride >= center)?;
    first_past_center.checked_sub(1)
}

/// Pixel transform applied to the whole bar strip.
///
/// `left` is the strip position at the animation baseline (`old_offset`);
/// renderers animate `translate_x` towards the committed `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentTransform {
    pub left: f64,
    pub translate_x: f64,
}

impl ContentTransform {
    /// Strip position once the transition has finished.
    #[must_use]
    pub fn settled_left(self) -> f64 {
        self.left + self.translate_x
    }
}

#[must_use]
pub fn content_transform(
    viewport_width: f64,
    offset: f64,
    old_offset: f64,
    total_width: f64,
) -> ContentTransform {
    ContentTransform {
        left: viewport_width + old_offset - total_width,
        translate_x: offset - old_offset,
    }
}
