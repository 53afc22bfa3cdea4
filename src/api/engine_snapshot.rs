use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, ContentTransform, Viewport, project_bars};
use crate::render::Renderer;

use super::BarChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Option<Viewport>,
    pub offset: f64,
    pub old_offset: f64,
    pub total_width: f64,
    pub scrolling: bool,
    pub center_bar_index: Option<usize>,
    pub centered_bar: Option<usize>,
    pub highest: f64,
    pub stacked_heights: Vec<f64>,
    pub content: ContentTransform,
    /// Bar geometry at settled positions; empty before measurement.
    pub bar_geometry: Vec<BarGeometry>,
    pub metadata: IndexMap<String, String>,
}

impl<R: Renderer> BarChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let content = self.state.content_transform();
        let bar_geometry = self
            .state
            .viewport()
            .filter(|viewport| viewport.is_valid())
            .map(|viewport| {
                project_bars(
                    &self.bars,
                    self.layout(),
                    viewport,
                    content.settled_left(),
                    self.highest,
                )
            })
            .unwrap_or_default();

        EngineSnapshot {
            viewport: self.state.viewport(),
            offset: self.state.offset(),
            old_offset: self.state.old_offset(),
            total_width: self.state.total_width(),
            scrolling: self.state.is_scrolling(),
            center_bar_index: self.config.center_bar_index,
            centered_bar: self.centered_bar(),
            highest: self.highest,
            stacked_heights: self.stacked_heights(),
            content,
            bar_geometry,
            metadata: self.metadata.clone(),
        }
    }
}
