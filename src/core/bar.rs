use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Inline capacity for stacked segments; most bars stack only a few values.
pub type SegmentStack = SmallVec<[Segment; 4]>;

/// One stacked slice of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub value: f64,
    #[serde(default)]
    pub color: Option<Color>,
}

impl Segment {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, color: None }
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData("segment value cannot be represented as f64".to_owned())
        })?;
        Ok(Self::new(value))
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(
                "segment value must be finite".to_owned(),
            ));
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// A labeled bar made of segments stacked bottom-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub segments: SegmentStack,
}

impl Bar {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            segments: SegmentStack::new(),
        }
    }

    /// Builds a bar from plain values, bottom segment first.
    #[must_use]
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        Self {
            label: label.into(),
            segments: values.iter().copied().map(Segment::new).collect(),
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    #[must_use]
    pub fn stacked_height(&self) -> f64 {
        self.segments.iter().map(|segment| segment.value).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for segment in &self.segments {
            segment.validate()?;
        }
        Ok(())
    }
}
