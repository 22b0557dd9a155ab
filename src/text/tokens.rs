use std::collections::HashSet;

use crate::foundation::core::Rgba8;

/// Inline accent marker: `*money*` accents a token even when it is not in the accent set.
pub const ACCENT_MARKER: char = '*';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlineToken {
    /// Display text with markers removed and original casing kept.
    pub text: String,
    pub accent: bool,
}

/// Lowercased, marker-stripped accent words.
#[derive(Clone, Debug, Default)]
pub struct AccentSet(HashSet<String>);

impl AccentSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| strip_markers(w.as_ref().trim()).to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(&token.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A run of same-colored text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Rgba8,
}

impl Span {
    pub fn new(text: impl Into<String>, color: Rgba8) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub fn strip_markers(s: &str) -> String {
    s.chars().filter(|&c| c != ACCENT_MARKER).collect()
}

/// Whitespace-split headline tokens, each classified as accent or plain.
pub fn tokenize_headline(headline: &str, accents: &AccentSet) -> Vec<HeadlineToken> {
    headline
        .split_whitespace()
        .filter_map(|raw| {
            let text = strip_markers(raw);
            if text.is_empty() {
                return None;
            }
            let marked = raw.len() >= 2
                && raw.starts_with(ACCENT_MARKER)
                && raw.ends_with(ACCENT_MARKER);
            let accent = marked || accents.contains(&text);
            Some(HeadlineToken { text, accent })
        })
        .collect()
}

/// One span per token: accent color for accented tokens, text color otherwise.
pub fn color_tokens(
    tokens: &[HeadlineToken],
    text: Rgba8,
    accent: Rgba8,
    uppercase: bool,
) -> Vec<Span> {
    tokens
        .iter()
        .map(|t| {
            let display = if uppercase {
                t.text.to_uppercase()
            } else {
                t.text.clone()
            };
            Span::new(display, if t.accent { accent } else { text })
        })
        .collect()
}

/// Headline with markers removed and tokens single-spaced.
pub fn plain_headline(tokens: &[HeadlineToken]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/text/tokens.rs"]
mod tests;
