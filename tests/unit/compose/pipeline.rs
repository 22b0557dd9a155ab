use std::io::Cursor;

use super::*;
use crate::layout::aspect::AspectRatio;
use crate::model::request::{BackgroundImage, ImageMime};
use crate::model::slide::SlideText;

fn engine() -> Engine {
    Engine::new(EngineOpts {
        resize_filter: ResizeFilter::Nearest,
        png_compression: PngCompression::Fast,
        load_system_fonts: false,
        ..EngineOpts::default()
    })
    .unwrap()
}

fn jpeg_background() -> BackgroundImage {
    let img = image::RgbImage::from_pixel(64, 32, image::Rgb([40, 80, 120]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Jpeg).unwrap();
    BackgroundImage::new(out.into_inner(), Some(ImageMime::Jpeg))
}

#[test]
fn empty_config_uses_defaults() {
    let opts: EngineOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, EngineOpts::default());
    assert!(opts.load_system_fonts);
    assert_eq!(opts.resize_filter, ResizeFilter::Lanczos3);
}

#[test]
fn config_fields_parse() {
    let opts: EngineOpts = serde_json::from_str(
        r#"{"resize_filter":"catmull-rom","png_compression":"best","threads":2,"load_system_fonts":false}"#,
    )
    .unwrap();
    assert_eq!(opts.resize_filter, ResizeFilter::CatmullRom);
    assert_eq!(opts.png_compression, PngCompression::Best);
    assert_eq!(opts.threads, Some(2));
    assert!(serde_json::from_str::<EngineOpts>(r#"{"bogus":1}"#).is_err());
}

#[test]
fn zero_threads_is_rejected() {
    let err = Engine::new(EngineOpts {
        threads: Some(0),
        load_system_fonts: false,
        ..EngineOpts::default()
    })
    .unwrap_err();
    assert!(matches!(err, SlidetypeError::Input { field: "opts.threads", .. }));
}

#[test]
fn composite_produces_canvas_sized_png() {
    let req = CompositeRequest::new(jpeg_background(), SlideText::new("Hello world"))
        .with_aspect_ratio(AspectRatio::Portrait)
        .with_layout("bar-bottom");
    let out = engine().composite(&req).unwrap();
    assert_eq!(out.mime, "image/png");
    assert_eq!((out.width, out.height), (1080, 1350));

    let img = image::load_from_memory_with_format(&out.bytes, image::ImageFormat::Png).unwrap();
    assert_eq!((img.width(), img.height()), (1080, 1350));
}

#[test]
fn bar_is_blended_over_background() {
    let req = CompositeRequest::new(jpeg_background(), SlideText::new("Hi"))
        .with_layout("bar-bottom");
    let out = engine().composite(&req).unwrap();
    let img = image::load_from_memory(&out.bytes).unwrap().to_rgba8();
    // The bar (near-black at 94%) darkens the bottom edge; the top keeps the background tone.
    let top = img.get_pixel(540, 5).0;
    let bottom = img.get_pixel(540, 1075).0;
    assert_eq!(top[3], 255);
    assert_eq!(bottom[3], 255);
    assert!(u32::from(bottom[2]) + 40 < u32::from(top[2]));
}

#[test]
fn layer_matches_canvas() {
    let req = CompositeRequest::new(BackgroundImage::default(), SlideText::new("Layer"))
        .with_aspect_ratio(AspectRatio::Story);
    let layer = engine().render_layer(&req).unwrap();
    assert_eq!((layer.width, layer.height), (1080, 1920));
    assert!(layer.coverage() > 0);
}

#[test]
fn empty_headline_fails_before_decoding() {
    let req = CompositeRequest::new(BackgroundImage::default(), SlideText::new("  "));
    let err = engine().composite(&req).unwrap_err();
    assert!(matches!(err, SlidetypeError::Input { .. }));
}

#[test]
fn batch_keeps_order_and_isolates_failures() {
    let good = CompositeRequest::new(jpeg_background(), SlideText::new("Good"));
    let bad = CompositeRequest::new(BackgroundImage::default(), SlideText::new("Bad"));
    let engine = Engine::new(EngineOpts {
        threads: Some(2),
        resize_filter: ResizeFilter::Nearest,
        png_compression: PngCompression::Fast,
        load_system_fonts: false,
        ..EngineOpts::default()
    })
    .unwrap();
    let out = engine.composite_batch(&[good.clone(), bad, good]);
    assert_eq!(out.len(), 3);
    assert!(out[0].is_ok());
    assert!(matches!(out[1], Err(SlidetypeError::Decode(_))));
    assert_eq!(out[0].as_ref().unwrap(), out[2].as_ref().unwrap());
}

#[test]
fn svg_export_matches_scene() {
    let req = CompositeRequest::new(BackgroundImage::default(), SlideText::new("Export me"));
    let svg = engine().render_svg(&req).unwrap();
    assert!(svg.contains("EXPORT"));
}
