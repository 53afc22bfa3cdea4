use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Bar, BarLayout, ContentTransform, Viewport, centered_bar_index};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::{InteractionMode, ViewportState};
use crate::render::Renderer;

use super::{BarChartConfig, RenderStyle};

pub(super) type BarSelectHandler = Box<dyn FnMut(usize)>;

/// Main orchestration facade consumed by host applications.
///
/// `BarChartEngine` owns the chart inputs and the viewport state, routes host
/// events through reconcile and drag handling in delivery order, and hands
/// materialized frames to the renderer.
pub struct BarChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) bars: Vec<Bar>,
    pub(super) highest: f64,
    pub(super) state: ViewportState,
    /// Last centered bar handed to the host, compared against while dragging.
    pub(super) reported_center_bar_index: Option<usize>,
    /// A centering request arrived mid-drag and waits for the release.
    pub(super) centering_deferred: bool,
    pub(super) render_style: RenderStyle,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) on_bar_select: Option<BarSelectHandler>,
    pub(super) metadata: IndexMap<String, String>,
}

impl<R: Renderer> BarChartEngine<R> {
    /// Creates an engine with no bars and no measured viewport.
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            bar_width = config.bar_width,
            bar_space = config.bar_space,
            "create bar chart engine"
        );

        Ok(Self {
            renderer,
            config,
            bars: Vec::new(),
            highest: 0.0,
            state: ViewportState::default(),
            reported_center_bar_index: config.center_bar_index,
            centering_deferred: false,
            render_style: RenderStyle::default(),
            plugins: Vec::new(),
            on_bar_select: None,
            metadata: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> BarChartConfig {
        self.config
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn layout(&self) -> BarLayout {
        self.config.layout(self.bars.len())
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.state.viewport()
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.offset()
    }

    #[must_use]
    pub fn old_offset(&self) -> f64 {
        self.state.old_offset()
    }

    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.state.total_width()
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.state.mode()
    }

    #[must_use]
    pub fn content_transform(&self) -> ContentTransform {
        self.state.content_transform()
    }

    /// Tallest stacked bar, the vertical scale reference for renderers.
    #[must_use]
    pub fn highest(&self) -> f64 {
        self.highest
    }

    #[must_use]
    pub fn stacked_heights(&self) -> Vec<f64> {
        self.bars.iter().map(Bar::stacked_height).collect()
    }

    #[must_use]
    pub fn center_bar_index(&self) -> Option<usize> {
        self.config.center_bar_index
    }

    /// Last bar reported through auto-selection or acknowledged by the host.
    #[must_use]
    pub fn reported_center_bar_index(&self) -> Option<usize> {
        self.reported_center_bar_index
    }

    /// Bar currently crossing the viewport center, if any.
    #[must_use]
    pub fn centered_bar(&self) -> Option<usize> {
        let width = self.state.measured_width()?;
        let layout = self.layout();
        centered_bar_index(
            self.state.offset(),
            self.state.total_width(),
            width,
            layout.stride(),
            layout.bar_count,
        )
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.render_style = style;
        Ok(())
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
