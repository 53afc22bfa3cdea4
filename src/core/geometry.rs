use serde::{Deserialize, Serialize};

use crate::core::{Bar, BarLayout, Viewport};
use crate::render::Color;

/// One stacked segment in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentGeometry {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub color: Option<Color>,
}

/// Deterministic bar geometry in viewport pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub x_left: f64,
    pub x_right: f64,
    pub x_center: f64,
    pub stacked_height: f64,
    pub segments: Vec<SegmentGeometry>,
}

/// Projects bars into the viewport.
///
/// Bar `i` occupies `[i * stride + bar_space / 2, .. + bar_width]` in content
/// space; `strip_left` shifts content space into the viewport. Segments are
/// stacked from the bottom edge and scaled so `highest` fills the height.
#[must_use]
pub fn project_bars(
    bars: &[Bar],
    layout: BarLayout,
    viewport: Viewport,
    strip_left: f64,
    highest: f64,
) -> Vec<BarGeometry> {
    let stride = layout.stride();
    let scale = if highest > 0.0 {
        viewport.height / highest
    } else {
        0.0
    };

    bars.iter()
        .enumerate()
        .map(|(index, bar)| {
            let x_left = strip_left + index as f64 * stride + layout.bar_space / 2.0;
            let x_right = x_left + layout.bar_width;

            let mut baseline = viewport.height;
            let segments = bar
                .segments
                .iter()
                .map(|segment| {
                    let edge = baseline - segment.value * scale;
                    let geometry = SegmentGeometry {
                        x_left,
                        x_right,
                        y_top: edge.min(baseline),
                        y_bottom: edge.max(baseline),
                        color: segment.color,
                    };
                    baseline = edge;
                    geometry
                })
                .collect();

            BarGeometry {
                index,
                x_left,
                x_right,
                x_center: (x_left + x_right) / 2.0,
                stacked_height: bar.stacked_height(),
                segments,
            }
        })
        .collect()
}

/// Label anchored under a bar's center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelGeometry {
    pub index: usize,
    pub text: String,
    pub x_center: f64,
    pub centered: bool,
}

#[must_use]
pub fn project_labels(
    bars: &[Bar],
    layout: BarLayout,
    strip_left: f64,
    center_bar_index: Option<usize>,
) -> Vec<LabelGeometry> {
    let stride = layout.stride();
    bars.iter()
        .enumerate()
        .map(|(index, bar)| LabelGeometry {
            index,
            text: bar.label.clone(),
            x_center: strip_left + index as f64 * stride + stride / 2.0,
            centered: center_bar_index == Some(index),
        })
        .collect()
}

/// Scrollbar thumb: the visible window drawn to scale over a viewport-wide track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollerThumb {
    pub x: f64,
    pub width: f64,
}

/// Thumb position for the current offset, `None` without content or width.
///
/// The track maps content pixels onto viewport pixels with ratio
/// `viewport_width / total_width`, the inverse of drag-move scaling.
#[must_use]
pub fn scroller_thumb(
    viewport_width: f64,
    offset: f64,
    total_width: f64,
) -> Option<ScrollerThumb> {
    let measurable = viewport_width.is_finite() && total_width.is_finite();
    if !measurable || viewport_width <= 0.0 || total_width <= 0.0 {
        return None;
    }
    if total_width <= viewport_width {
        return Some(ScrollerThumb {
            x: 0.0,
            width: viewport_width,
        });
    }

    let ratio = viewport_width / total_width;
    let width = viewport_width * ratio;
    let x = ((total_width - offset - viewport_width) * ratio).clamp(0.0, viewport_width - width);
    Some(ScrollerThumb { x, width })
}
