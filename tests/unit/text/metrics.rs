use super::*;
use crate::text::fonts::{FontRole, resolve_font};

fn font() -> FontHandle {
    resolve_font(FontRole::Body, "Inter", 400)
}

#[test]
fn measure_scales_with_size_and_weight() {
    let regular = font();
    let bold = resolve_font(FontRole::Body, "Inter", 800);
    let w1 = measure("Hello", &regular, 20.0, 0.0);
    let w2 = measure("Hello", &regular, 40.0, 0.0);
    assert!((w2 - 2.0 * w1).abs() < 1e-9);
    assert!(measure("Hello", &bold, 20.0, 0.0) > w1);
    assert!(measure("Hello", &regular, 20.0, 2.0) > w1);
    assert_eq!(measure("", &regular, 20.0, 4.0), 0.0);
}

#[test]
fn wrap_keeps_lines_within_width() {
    let f = font();
    let lines = wrap_plain(
        "the quick brown fox jumps over the lazy dog",
        Rgba8::WHITE,
        &f,
        40.0,
        0.0,
        300.0,
    );
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.width <= 300.0 + 1e-9, "line too wide: {line:?}");
    }
    let rejoined: Vec<String> = lines.iter().map(TextLine::text).collect();
    assert_eq!(
        rejoined.join(" "),
        "the quick brown fox jumps over the lazy dog"
    );
}

#[test]
fn oversized_word_gets_its_own_line() {
    let f = font();
    let lines = wrap_plain("a incomprehensibilities b", Rgba8::WHITE, &f, 40.0, 0.0, 120.0);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].text(), "incomprehensibilities");
}

#[test]
fn wrap_preserves_span_colors() {
    let f = font();
    let accent = Rgba8::rgb(255, 0, 0);
    let spans = vec![
        Span::new("save", Rgba8::WHITE),
        Span::new("money", accent),
    ];
    let lines = wrap_spans(&spans, &f, 30.0, 0.0, 10_000.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spans[1].color, accent);
}

#[test]
fn empty_input_produces_no_lines() {
    assert!(wrap_plain("   ", Rgba8::WHITE, &font(), 30.0, 0.0, 100.0).is_empty());
}
