//! Viewport offset state and drag-to-scroll handling.

mod drag_controller;
mod viewport_state;

use serde::{Deserialize, Serialize};

pub use drag_controller::{DragController, DragOutcome};
pub use viewport_state::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}
