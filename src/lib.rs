//! bar-chart-rs: horizontally scrollable stacked bar chart engine.
//!
//! The crate keeps viewport math and drag handling free of any GUI toolkit.
//! Hosts feed measured viewport sizes, drag movement and chart inputs into
//! [`BarChartEngine`] and draw the resulting [`render::RenderFrame`] with
//! their own [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartEngine};
pub use error::{ChartError, ChartResult};
