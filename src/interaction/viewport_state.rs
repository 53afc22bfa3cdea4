use serde::{Deserialize, Serialize};

use crate::core::{
    BarLayout, ContentTransform, Viewport, clamp_offset, content_transform, offset_in_bounds,
    offset_to_center,
};

use super::InteractionMode;

/// Single source of truth for what part of the bar strip is visible.
///
/// Every transition returns a new state; `old_offset` is the animation
/// baseline and only moves when a change is committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    viewport: Option<Viewport>,
    offset: f64,
    old_offset: f64,
    scrolling: bool,
    total_width: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            viewport: None,
            offset: 0.0,
            old_offset: 0.0,
            scrolling: false,
            total_width: 0.0,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn viewport(self) -> Option<Viewport> {
        self.viewport
    }

    /// Measured width usable as a divisor, `None` before the first measurement.
    #[must_use]
    pub fn measured_width(self) -> Option<f64> {
        self.viewport
            .map(|viewport| viewport.width)
            .filter(|width| width.is_finite() && *width > 0.0)
    }

    #[must_use]
    pub fn offset(self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn old_offset(self) -> f64 {
        self.old_offset
    }

    #[must_use]
    pub fn is_scrolling(self) -> bool {
        self.scrolling
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.scrolling {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn total_width(self) -> f64 {
        self.total_width
    }

    /// Strip transform from `old_offset` to `offset`; zero width before measurement.
    #[must_use]
    pub fn content_transform(self) -> ContentTransform {
        let width = self.measured_width().unwrap_or(0.0);
        content_transform(width, self.offset, self.old_offset, self.total_width)
    }

    /// Derives the next state from the latest chart inputs.
    ///
    /// Runs on every input change. A centering request moves the offset only
    /// while idle, with a measured viewport and an index inside the chart.
    /// Without one, an offset left outside the content by a resize or a
    /// shorter bar list is pulled back in; in-bounds offsets are carried over.
    #[must_use]
    pub fn reconcile(
        self,
        layout: BarLayout,
        center_bar_index: Option<usize>,
        viewport: Option<Viewport>,
    ) -> Self {
        let total_width = layout.total_width();
        let mut next = Self {
            viewport,
            total_width,
            ..self
        };
        let Some(width) = next.measured_width() else {
            return next;
        };

        let centering = center_bar_index
            .filter(|index| *index < layout.bar_count)
            .filter(|_| !self.scrolling);
        let target = match centering {
            Some(index) => offset_to_center(index, total_width, layout.stride(), width),
            None if offset_in_bounds(self.offset, width, total_width) => return next,
            None => self.offset,
        };

        next.old_offset = self.offset;
        next.offset = clamp_offset(target, width, total_width);
        next
    }

    /// Enters dragging and freezes the animation baseline at the current offset.
    #[must_use]
    pub fn begin_drag(self) -> Self {
        Self {
            scrolling: true,
            old_offset: self.offset,
            ..self
        }
    }

    /// Leaves dragging; the offset was already committed by drag moves.
    #[must_use]
    pub fn end_drag(self) -> Self {
        Self {
            scrolling: false,
            ..self
        }
    }

    /// Commits an offset with no animation delta.
    #[must_use]
    pub(crate) fn with_committed_offset(self, offset: f64) -> Self {
        Self {
            offset,
            old_offset: offset,
            ..self
        }
    }
}
