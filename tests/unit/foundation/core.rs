use super::*;
use serde_json::json;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Rgba8::parse_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse_hex("FF8800").unwrap(),
        Rgba8::rgb(0xff, 0x88, 0x00)
    );
    assert_eq!(
        Rgba8::parse_hex("#0000ff80").unwrap(),
        Rgba8::rgba(0, 0, 255, 128)
    );
    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#gggggg").is_err());
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_value(json!("#ffd60a")).unwrap();
    assert_eq!(c, Rgba8::rgb(0xff, 0xd6, 0x0a));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#ffd60a"));

    let translucent = Rgba8::rgba(10, 20, 30, 64);
    assert_eq!(serde_json::to_value(translucent).unwrap(), json!("#0a141e40"));
}

#[test]
fn opacity_scales_alpha() {
    let c = Rgba8::WHITE.with_opacity(0.5);
    assert_eq!(c.a, 128);
    assert_eq!(Rgba8::WHITE.with_opacity(2.0).a, 255);
}

#[test]
fn luminance_orders_black_and_white() {
    assert!(Rgba8::BLACK.luminance() < 0.01);
    assert!(Rgba8::WHITE.luminance() > 0.99);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    let c = Canvas::new(1080, 1350).unwrap();
    assert_eq!(c.pixel_len(), 1080 * 1350 * 4);
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 1080.0, 1350.0));
}
