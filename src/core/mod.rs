pub mod bar;
pub mod geometry;
pub mod layout;
pub mod types;

pub use bar::{Bar, Segment, SegmentStack};
pub use geometry::{
    BarGeometry, LabelGeometry, ScrollerThumb, SegmentGeometry, project_bars, project_labels,
    scroller_thumb,
};
pub use layout::{
    BarLayout, ContentTransform, bar_stride, centered_bar_index, clamp_offset,
    content_transform, highest, offset_in_bounds, offset_to_center, stacked_height, total_width,
};
pub use types::Viewport;
