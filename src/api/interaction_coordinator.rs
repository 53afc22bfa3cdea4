use tracing::{debug, trace};

use crate::interaction::DragController;
use crate::render::Renderer;

use super::{BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    /// Registers the callback invoked with a newly centered bar while dragging.
    ///
    /// Only fires when `select_center_bar_on_scroll` is enabled.
    pub fn set_on_bar_select(&mut self, handler: impl FnMut(usize) + 'static) {
        self.on_bar_select = Some(Box::new(handler));
    }

    pub fn clear_on_bar_select(&mut self) {
        self.on_bar_select = None;
    }

    /// Starts a drag gesture and freezes the animation baseline.
    pub fn drag_start(&mut self) {
        if self.state.is_scrolling() {
            trace!("drag already in progress");
            return;
        }
        self.state = self.state.begin_drag();
        debug!(offset = self.state.offset(), "drag started");
        self.emit_plugin_event(PluginEvent::DragStarted);
    }

    /// Applies `movement_x` signed pixels since the previous move.
    ///
    /// Returns the newly selected bar when the centered bar changed. Moves
    /// outside a drag gesture are ignored.
    pub fn drag_move(&mut self, movement_x: f64) -> Option<usize> {
        if !self.state.is_scrolling() {
            trace!(movement_x, "ignoring drag move outside a drag");
            return None;
        }

        let outcome = DragController::on_drag_move(
            self.state,
            self.layout(),
            self.config.select_center_bar_on_scroll,
            self.reported_center_bar_index,
            movement_x,
        );
        self.state = outcome.state;
        trace!(movement_x, offset = self.state.offset(), "drag moved");
        self.emit_plugin_event(PluginEvent::DragMoved {
            offset: self.state.offset(),
        });

        if let Some(index) = outcome.selected_bar {
            self.select_bar(index);
        }
        outcome.selected_bar
    }

    /// Ends the drag gesture and leaves the offset where the drag put it.
    ///
    /// A centering request made by the host during the drag is applied now.
    pub fn drag_end(&mut self) {
        if !self.state.is_scrolling() {
            trace!("no drag in progress");
            return;
        }
        self.state = self.state.end_drag();
        debug!(offset = self.state.offset(), "drag ended");
        self.emit_plugin_event(PluginEvent::DragEnded);
        let center_bar_index = if std::mem::take(&mut self.centering_deferred) {
            self.config.center_bar_index
        } else {
            None
        };
        self.reconcile_viewport_with(center_bar_index);
    }

    fn select_bar(&mut self, index: usize) {
        debug!(index, "centered bar changed");
        self.reported_center_bar_index = Some(index);
        if let Some(handler) = self.on_bar_select.as_mut() {
            handler(index);
        }
        self.emit_plugin_event(PluginEvent::BarSelected { index });
    }
}
