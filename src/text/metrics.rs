//! Deterministic text measurement.
//!
//! Advances are estimated from character classes rather than read from font files, so layout is
//! identical on every machine regardless of which faces happen to be installed.

use smallvec::SmallVec;

use crate::foundation::core::Rgba8;
use crate::text::fonts::FontHandle;
use crate::text::tokens::Span;

/// One wrapped line of spans. Spans are separated by a single space when drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub spans: SmallVec<[Span; 4]>,
    /// Estimated advance width in pixels, including inter-span spaces.
    pub width: f64,
}

impl TextLine {
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn char_advance_em(c: char) -> f64 {
    match c {
        ' ' => 0.28,
        'M' | 'W' => 0.86,
        'I' | 'J' => 0.32,
        'A'..='Z' => 0.68,
        'm' | 'w' => 0.82,
        'i' | 'j' | 'l' | 't' | 'f' | 'r' => 0.34,
        'a'..='z' => 0.56,
        '0'..='9' => 0.62,
        '.' | ',' | ';' | ':' | '!' | '\'' | '"' | '|' => 0.28,
        '%' | '@' | '&' => 0.84,
        c if c.is_ascii() => 0.52,
        c if u32::from(c) >= 0x2E80 => 1.0,
        _ => 0.62,
    }
}

fn weight_factor(weight: u16) -> f64 {
    1.0 + (f64::from(weight) - 400.0) / 5000.0
}

/// Estimated advance of `text` in pixels.
pub fn measure(text: &str, font: &FontHandle, size_px: f64, letter_spacing_px: f64) -> f64 {
    let mut em = 0.0;
    let mut n = 0usize;
    for c in text.chars() {
        em += char_advance_em(c);
        n += 1;
    }
    em * size_px * weight_factor(font.weight) + letter_spacing_px * (n as f64)
}

/// Greedy word wrap of colored spans to `max_width`.
///
/// A single span wider than `max_width` gets its own line rather than being broken mid-word.
pub fn wrap_spans(
    spans: &[Span],
    font: &FontHandle,
    size_px: f64,
    letter_spacing_px: f64,
    max_width: f64,
) -> Vec<TextLine> {
    let space = measure(" ", font, size_px, letter_spacing_px);
    let mut lines = Vec::new();
    let mut cur = TextLine {
        spans: SmallVec::new(),
        width: 0.0,
    };

    for span in spans {
        let w = measure(&span.text, font, size_px, letter_spacing_px);
        if !cur.spans.is_empty() && cur.width + space + w > max_width {
            lines.push(std::mem::replace(
                &mut cur,
                TextLine {
                    spans: SmallVec::new(),
                    width: 0.0,
                },
            ));
        }
        if !cur.spans.is_empty() {
            cur.width += space;
        }
        cur.width += w;
        cur.spans.push(span.clone());
    }
    if !cur.spans.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Wrap single-color text.
pub fn wrap_plain(
    text: &str,
    color: Rgba8,
    font: &FontHandle,
    size_px: f64,
    letter_spacing_px: f64,
    max_width: f64,
) -> Vec<TextLine> {
    let words: Vec<Span> = text
        .split_whitespace()
        .map(|w| Span::new(w, color))
        .collect();
    wrap_spans(&words, font, size_px, letter_spacing_px, max_width)
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
