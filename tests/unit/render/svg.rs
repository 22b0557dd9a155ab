use super::*;
use crate::layout::aspect::AspectRatio;
use crate::layout::build_scene;
use crate::model::slide::{BrandStyle, SlideText};

fn scene(slide: &SlideText, layout: &str) -> (SceneNode, Canvas) {
    let aspect = AspectRatio::Portrait;
    let scene = build_scene(slide, &BrandStyle::default(), aspect, layout).unwrap();
    (scene, aspect.canvas())
}

#[test]
fn document_is_sized_to_canvas() {
    let (scene, canvas) = scene(&SlideText::new("Hello"), "center");
    let svg = scene_to_svg(&scene, canvas);
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="1080" height="1350""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn text_is_escaped() {
    let (scene, canvas) = scene(&SlideText::new("Tips & <tricks> \"now\""), "minimal-center");
    let svg = scene_to_svg(&scene, canvas);
    assert!(svg.contains("Tips</tspan>"));
    assert!(svg.contains("&amp;"));
    assert!(svg.contains("&lt;tricks&gt;"));
    assert!(svg.contains("&quot;now&quot;"));
    assert!(!svg.contains("<tricks>"));
}

#[test]
fn accent_words_get_accent_fill() {
    let slide = SlideText {
        accent_words: vec!["money".to_string()],
        ..SlideText::new("Save money")
    };
    let (scene, canvas) = scene(&slide, "bottom-left");
    let svg = scene_to_svg(&scene, canvas);
    let accent = BrandStyle::default().colors.accent.hex_rgb();
    assert!(svg.contains(&format!(r#"<tspan fill="{accent}">MONEY</tspan>"#)));
    assert!(svg.contains(r##"<tspan fill="#ffffff">SAVE</tspan>"##));
}

#[test]
fn gradients_get_unique_ids() {
    let slide = SlideText::new("Two gradients");
    let (scene, canvas) = scene(&slide, "glass-card-center");
    let svg = scene_to_svg(&scene, canvas);
    assert!(svg.contains(r#"<linearGradient id="g0""#));
    assert!(svg.contains("url(#g0)"));
    assert!(!svg.contains(r#"id="g1""#));
}

#[test]
fn output_is_deterministic() {
    let slide = SlideText {
        subtext: Some("Sub".to_string()),
        cta: Some("Go".to_string()),
        ..SlideText::new("Same every time")
    };
    let (scene, canvas) = scene(&slide, "stat-hero");
    assert_eq!(scene_to_svg(&scene, canvas), scene_to_svg(&scene, canvas));
}

#[test]
fn numbers_use_short_fixed_precision() {
    assert_eq!(num(0.0), "0");
    assert_eq!(num(-0.001), "0");
    assert_eq!(num(100.0), "100");
    assert_eq!(num(10.5), "10.5");
    assert_eq!(num(1.23456), "1.23");
}

#[test]
fn escape_handles_all_xml_specials() {
    assert_eq!(escape(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&apos;f");
}
