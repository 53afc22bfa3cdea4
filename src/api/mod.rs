//! Public engine facade and its supporting coordinators.

mod chart_config;
mod data_controller;
mod engine;
mod engine_snapshot;
mod interaction_coordinator;
mod json_contract;
mod plugin_registry;
mod render_frame_builder;
mod render_style;

pub use chart_config::BarChartConfig;
pub use engine::BarChartEngine;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use render_style::RenderStyle;

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
