use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and band sizes used when materializing a `RenderFrame`.
///
/// Bars occupy the measured viewport; the label band and the scroller track
/// are stacked below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Fill for segments that carry no color of their own.
    pub segment_color: Color,
    pub label_color: Color,
    pub centered_label_color: Color,
    pub label_font_size_px: f64,
    pub label_band_height_px: f64,
    pub scroller_height_px: f64,
    pub scroller_track_color: Color,
    pub scroller_thumb_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            segment_color: Color::from_rgb8(0x42, 0x85, 0xf4),
            label_color: Color::from_rgb8(0x73, 0x73, 0x7a),
            centered_label_color: Color::from_rgb8(0x1a, 0x1a, 0x1f),
            label_font_size_px: 11.0,
            label_band_height_px: 20.0,
            scroller_height_px: 6.0,
            scroller_track_color: Color::rgb(0.0, 0.0, 0.0).with_alpha(0.08),
            scroller_thumb_color: Color::rgb(0.0, 0.0, 0.0).with_alpha(0.35),
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        self.segment_color.validate()?;
        self.label_color.validate()?;
        self.centered_label_color.validate()?;
        self.scroller_track_color.validate()?;
        self.scroller_thumb_color.validate()?;
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("label band height", self.label_band_height_px),
            ("scroller height", self.scroller_height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
