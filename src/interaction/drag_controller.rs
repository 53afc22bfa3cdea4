use crate::core::{BarLayout, centered_bar_index, clamp_offset};

use super::ViewportState;

/// Result of one drag move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub state: ViewportState,
    /// Newly centered bar when auto-selection is on and the bar changed.
    pub selected_bar: Option<usize>,
}

/// Translates drag movement into offset changes.
pub struct DragController;

impl DragController {
    /// Applies `movement_x` viewport pixels of drag to `state`.
    ///
    /// Movement is scaled by `total_width / viewport_width` so a full-width
    /// drag pans across the whole content. Positive movement decreases the
    /// offset. Without a measured width or with non-finite movement the state
    /// is returned unchanged.
    #[must_use]
    pub fn on_drag_move(
        state: ViewportState,
        layout: BarLayout,
        select_center_bar_on_scroll: bool,
        reported_center_bar_index: Option<usize>,
        movement_x: f64,
    ) -> DragOutcome {
        let unchanged = DragOutcome {
            state,
            selected_bar: None,
        };
        let Some(width) = state.measured_width() else {
            return unchanged;
        };
        if !movement_x.is_finite() {
            return unchanged;
        }

        let total_width = state.total_width();
        let additional_offset = (total_width / width) * movement_x;
        let offset = clamp_offset(state.offset() - additional_offset, width, total_width);
        let state = state.with_committed_offset(offset);

        let selected_bar = if select_center_bar_on_scroll {
            centered_bar_index(offset, total_width, width, layout.stride(), layout.bar_count)
                .filter(|index| reported_center_bar_index != Some(*index))
        } else {
            None
        };

        DragOutcome {
            state,
            selected_bar,
        }
    }
}
