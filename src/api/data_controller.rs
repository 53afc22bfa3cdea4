use tracing::{debug, trace};

use crate::core::{Bar, Viewport, highest};
use crate::error::ChartResult;
use crate::interaction::ViewportState;
use crate::render::Renderer;

use super::{BarChartConfig, BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    /// Replaces the chart configuration and reconciles the viewport.
    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        config.validate()?;
        debug!(
            bar_width = config.bar_width,
            bar_space = config.bar_space,
            center_bar_index = ?config.center_bar_index,
            "set chart config"
        );
        self.config = config;
        self.acknowledge_center_request(config.center_bar_index);
        self.emit_plugin_event(PluginEvent::ConfigUpdated);
        self.reconcile_viewport();
        Ok(())
    }

    /// Replaces the bar sequence and reconciles the viewport.
    pub fn set_bars(&mut self, bars: Vec<Bar>) -> ChartResult<()> {
        for bar in &bars {
            bar.validate()?;
        }
        self.highest = highest(&bars);
        self.bars = bars;
        debug!(
            bars_len = self.bars.len(),
            highest = self.highest,
            "set bars"
        );
        self.emit_plugin_event(PluginEvent::BarsUpdated {
            bars_len: self.bars.len(),
        });
        self.reconcile_viewport();
        Ok(())
    }

    /// Requests that `index` be centered; `None` clears the request.
    pub fn set_center_bar_index(&mut self, index: Option<usize>) {
        trace!(center_bar_index = ?index, "set center bar index");
        self.config.center_bar_index = index;
        self.acknowledge_center_request(index);
        self.reconcile_viewport();
    }

    /// Stores a freshly measured viewport size and reconciles.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.validate()?;
        debug!(width = viewport.width, height = viewport.height, "resize viewport");
        let previous = self.state;
        self.state = previous.reconcile(
            self.layout(),
            self.config.center_bar_index,
            Some(viewport),
        );
        self.emit_plugin_event(PluginEvent::Resized {
            width: viewport.width,
            height: viewport.height,
        });
        self.emit_offset_changed_since(previous);
        Ok(())
    }

    pub(super) fn reconcile_viewport(&mut self) {
        self.reconcile_viewport_with(self.config.center_bar_index);
    }

    pub(super) fn reconcile_viewport_with(&mut self, center_bar_index: Option<usize>) {
        let previous = self.state;
        self.state = previous.reconcile(self.layout(), center_bar_index, previous.viewport());
        self.emit_offset_changed_since(previous);
    }

    fn acknowledge_center_request(&mut self, index: Option<usize>) {
        self.reported_center_bar_index = index;
        if self.state.is_scrolling() {
            self.centering_deferred = index.is_some();
        }
    }

    pub(super) fn emit_offset_changed_since(&mut self, previous: ViewportState) {
        let (old_offset, offset) = (self.state.old_offset(), self.state.offset());
        if previous.offset() != offset {
            trace!(old_offset, offset, "offset transition");
            self.emit_plugin_event(PluginEvent::OffsetChanged { old_offset, offset });
        }
    }
}
