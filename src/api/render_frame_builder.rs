use tracing::trace;

use crate::core::{Viewport, project_bars, project_labels, scroller_thumb};
use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    /// Materializes the current scene.
    ///
    /// Returns `None` until a viewport has been measured. Bars and labels
    /// entirely outside the viewport are culled.
    #[must_use]
    pub fn build_render_frame(&self) -> Option<RenderFrame> {
        let viewport = self.state.viewport().filter(|viewport| viewport.is_valid())?;
        let style = self.render_style;
        let layout = self.layout();
        let content = self.state.content_transform();
        let strip_left = content.settled_left();

        let mut frame = RenderFrame::new(
            Viewport::new(
                viewport.width,
                viewport.height + style.label_band_height_px + style.scroller_height_px,
            ),
            content,
        );

        let is_visible = |x_left: f64, x_right: f64| x_right >= 0.0 && x_left <= viewport.width;

        for bar in project_bars(&self.bars, layout, viewport, strip_left, self.highest) {
            if !is_visible(bar.x_left, bar.x_right) {
                continue;
            }
            for segment in bar.segments {
                frame = frame.with_rect(RectPrimitive::new(
                    segment.x_left,
                    segment.y_top,
                    segment.x_right - segment.x_left,
                    segment.y_bottom - segment.y_top,
                    segment.color.unwrap_or(style.segment_color),
                ));
            }
        }

        let half_stride = layout.stride() / 2.0;
        let label_y = viewport.height + style.label_band_height_px / 2.0;
        for label in project_labels(&self.bars, layout, strip_left, self.config.center_bar_index) {
            if label.text.is_empty()
                || !is_visible(label.x_center - half_stride, label.x_center + half_stride)
            {
                continue;
            }
            let color = if label.centered {
                style.centered_label_color
            } else {
                style.label_color
            };
            frame = frame.with_text(TextPrimitive::new(
                label.text,
                label.x_center,
                label_y,
                style.label_font_size_px,
                color,
                TextHAlign::Center,
            ));
        }

        if style.scroller_height_px > 0.0
            && let Some(thumb) =
                scroller_thumb(viewport.width, self.state.offset(), self.state.total_width())
        {
            let track_y = viewport.height + style.label_band_height_px;
            frame = frame
                .with_rect(RectPrimitive::new(
                    0.0,
                    track_y,
                    viewport.width,
                    style.scroller_height_px,
                    style.scroller_track_color,
                ))
                .with_rect(RectPrimitive::new(
                    thumb.x,
                    track_y,
                    thumb.width,
                    style.scroller_height_px,
                    style.scroller_thumb_color,
                ));
        }

        Some(frame)
    }

    /// Builds the current frame and hands it to the renderer.
    ///
    /// Does nothing until a viewport has been measured.
    pub fn render(&mut self) -> ChartResult<()> {
        let Some(frame) = self.build_render_frame() else {
            trace!("skipping render before viewport measurement");
            return Ok(());
        };
        self.renderer.render(&frame)?;
        trace!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "rendered frame"
        );
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }
}
