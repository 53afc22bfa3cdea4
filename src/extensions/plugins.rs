use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Option<Viewport>,
    pub offset: f64,
    pub old_offset: f64,
    pub total_width: f64,
    pub bars_len: usize,
    pub center_bar_index: Option<usize>,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    ConfigUpdated,
    BarsUpdated { bars_len: usize },
    Resized { width: f64, height: f64 },
    OffsetChanged { old_offset: f64, offset: f64 },
    DragStarted,
    DragMoved { offset: f64 },
    DragEnded,
    BarSelected { index: usize },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating the
/// viewport state directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
