use approx::assert_relative_eq;
use bar_chart_rs::api::{BarChartConfig, BarChartEngine, RenderStyle};
use bar_chart_rs::core::{Bar, Viewport};
use bar_chart_rs::render::{Color, NullRenderer, TextHAlign};

fn build_engine() -> BarChartEngine<NullRenderer> {
    let config = BarChartConfig::new(8.0, 2.0).with_center_bar_index(Some(5));
    let mut engine = BarChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_bars(
            (0..10)
                .map(|i| Bar::from_values(format!("b{i}"), &[1.0, 2.0]))
                .collect(),
        )
        .expect("set bars");
    engine
}

#[test]
fn no_frame_before_viewport_measurement() {
    let mut engine = build_engine();

    assert!(engine.build_render_frame().is_none());
    engine.render().expect("render is a no-op");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn frame_culls_bars_and_labels_outside_viewport() {
    let mut engine = build_engine();
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");
    assert_eq!(engine.offset(), 35.0);

    let frame = engine.build_render_frame().expect("frame");
    frame.validate().expect("valid frame");

    // Bars 2..=6 are visible, two segments each, plus scroller track and thumb.
    assert_eq!(frame.rects.len(), 12);
    assert_eq!(frame.texts.len(), 5);
    assert_eq!(frame.viewport, Viewport::new(40.0, 116.0));
    assert_eq!(frame.content.settled_left(), -25.0);

    let first = frame.rects[0];
    assert_eq!(first.x, -4.0);
    assert_eq!(first.width, 8.0);
    assert_relative_eq!(first.y, 60.0);
    assert_relative_eq!(first.height, 30.0);
}

#[test]
fn centered_label_uses_highlight_color() {
    let mut engine = build_engine();
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");
    let style = engine.render_style();

    let frame = engine.build_render_frame().expect("frame");
    let centered = frame
        .texts
        .iter()
        .find(|text| text.text == "b5")
        .expect("centered label");
    assert_eq!(centered.color, style.centered_label_color);
    assert_eq!(centered.x, 30.0);
    assert_eq!(centered.h_align, TextHAlign::Center);
    assert_eq!(centered.y, 100.0);

    let other = frame
        .texts
        .iter()
        .find(|text| text.text == "b3")
        .expect("plain label");
    assert_eq!(other.color, style.label_color);
}

#[test]
fn scroller_rects_follow_offset() {
    let mut engine = build_engine();
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");

    let frame = engine.build_render_frame().expect("frame");
    let track = frame.rects[10];
    let thumb = frame.rects[11];
    assert_eq!(track.y, 110.0);
    assert_eq!(track.width, 40.0);
    assert_relative_eq!(thumb.x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(thumb.width, 16.0, epsilon = 1e-9);
}

#[test]
fn render_style_can_hide_scroller() {
    let mut engine = build_engine();
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");
    engine
        .set_render_style(RenderStyle {
            scroller_height_px: 0.0,
            ..RenderStyle::default()
        })
        .expect("valid style");

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.rects.len(), 10);
}

#[test]
fn render_style_rejects_invalid_colors() {
    let mut engine = build_engine();
    let err = engine.set_render_style(RenderStyle {
        label_color: Color::rgb(2.0, 0.0, 0.0),
        ..RenderStyle::default()
    });
    assert!(err.is_err());
}

#[test]
fn null_renderer_receives_frame_counts() {
    let mut engine = build_engine();
    engine
        .resize(Viewport::new(40.0, 90.0))
        .expect("resize viewport");

    engine.render().expect("render");
    let renderer = engine.into_renderer();

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_viewport, Some(Viewport::new(40.0, 116.0)));
    assert_eq!(renderer.last_rect_count, 12);
    assert_eq!(renderer.last_text_count, 5);
}

#[test]
fn byte_colors_normalize_and_keep_alpha_separate() {
    let color = Color::from_rgb8(255, 0, 51).with_alpha(0.5);
    assert_eq!(color, Color::rgba(1.0, 0.0, 0.2, 0.5));
    assert!(color.validate().is_ok());
    assert!(Color::rgb(0.0, 0.0, 0.0).with_alpha(1.5).validate().is_err());
}
