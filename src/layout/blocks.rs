//! Shared building blocks: per-request context, measured text blocks and vertical stacks.

use smallvec::smallvec;

use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::layout::aspect::{AspectRatio, BaseSizes};
use crate::model::slide::{BrandStyle, ColorRoles, SlideText};
use crate::scene::model::{
    ChromeBar, CtaPill, Label, SceneNode, SolidBlock, TextAnchor, TextRole, TextRun,
};
use crate::text::fonts::{FontHandle, ResolvedFonts};
use crate::text::metrics::{TextLine, measure, wrap_plain, wrap_spans};
use crate::text::tokens::{AccentSet, HeadlineToken, Span, color_tokens, tokenize_headline};

const HEADLINE_LINE_HEIGHT: f64 = 1.08;
const SUBTEXT_LINE_HEIGHT: f64 = 1.35;
const LABEL_TRACKING: f64 = 0.14;
const CHROME_MARGIN: f64 = 36.0;

/// Everything a layout builder needs, resolved once per request.
pub struct BuildCtx<'a> {
    pub canvas: Canvas,
    pub sizes: BaseSizes,
    pub slide: &'a SlideText,
    pub brand: &'a BrandStyle,
    pub colors: ColorRoles,
    pub fonts: ResolvedFonts,
    pub tokens: Vec<HeadlineToken>,
}

impl<'a> BuildCtx<'a> {
    pub fn new(slide: &'a SlideText, brand: &'a BrandStyle, aspect: AspectRatio) -> Self {
        let accents = AccentSet::new(&slide.accent_words);
        Self {
            canvas: aspect.canvas(),
            sizes: aspect.base_sizes(),
            slide,
            brand,
            colors: brand.colors,
            fonts: ResolvedFonts::for_brand(brand),
            tokens: tokenize_headline(&slide.headline, &accents),
        }
    }

    /// Horizontal safe margin.
    pub fn pad_x(&self) -> f64 {
        (self.canvas.w() * 0.075).round()
    }

    fn chrome_size(&self) -> f64 {
        self.sizes.label * 0.95
    }

    fn chrome_height(&self) -> f64 {
        (self.chrome_size() * 1.4).round()
    }

    /// Space reserved at the top by brand chrome; zero without chrome.
    pub fn top_inset(&self) -> f64 {
        if self.brand.chrome().is_some() {
            CHROME_MARGIN + self.chrome_height() + 24.0
        } else {
            0.0
        }
    }

    /// Space reserved at the bottom by the slide counter; zero without one.
    pub fn bottom_inset(&self) -> f64 {
        if self.slide.counter().is_some() {
            CHROME_MARGIN + self.chrome_height() + 24.0
        } else {
            0.0
        }
    }

    pub fn headline_spans(&self, uppercase: bool) -> Vec<Span> {
        color_tokens(
            &self.tokens,
            self.colors.text,
            self.colors.accent,
            uppercase,
        )
    }

    /// Wrapped multi-color headline.
    pub fn headline(&self, scale: f64, max_width: f64, uppercase: bool) -> Block {
        let size = self.sizes.headline * scale;
        let font = self.fonts.headline;
        let lines = wrap_spans(&self.headline_spans(uppercase), &font, size, 0.0, max_width);
        Block::text(TextRole::Headline, lines, font, size, size * HEADLINE_LINE_HEIGHT)
    }

    /// Headline with every token on its own line.
    pub fn headline_stacked(&self, scale: f64, uppercase: bool) -> Block {
        let size = self.sizes.headline * scale;
        let font = self.fonts.headline;
        let lines = self
            .headline_spans(uppercase)
            .into_iter()
            .map(|span| TextLine {
                width: measure(&span.text, &font, size, 0.0),
                spans: smallvec![span],
            })
            .collect();
        Block::text(TextRole::Headline, lines, font, size, size * HEADLINE_LINE_HEIGHT)
    }

    pub fn subtext(&self, scale: f64, max_width: f64) -> Option<Block> {
        let text = self.slide.subtext()?;
        let size = self.sizes.subtext * scale;
        let font = self.fonts.body;
        let lines = wrap_plain(text, self.colors.subtext, &font, size, 0.0, max_width);
        if lines.is_empty() {
            return None;
        }
        Some(Block::text(
            TextRole::Subtext,
            lines,
            font,
            size,
            size * SUBTEXT_LINE_HEIGHT,
        ))
    }

    /// Purpose label, uppercased and tracked out.
    pub fn label(&self) -> Option<Block> {
        let text = self.slide.purpose_label()?;
        let size = self.sizes.label;
        Some(Block::Label {
            text: text.to_uppercase(),
            font: self.fonts.label,
            size_px: size,
            letter_spacing_px: size * LABEL_TRACKING,
            color: self.colors.accent,
        })
    }

    pub fn cta(&self) -> Option<Block> {
        let text = self.slide.cta()?;
        let size = self.sizes.cta;
        let font = self.fonts.cta;
        let pad_h = size * 1.1;
        let pad_v = size * 0.7;
        let fill = self.colors.accent;
        Some(Block::Pill {
            text: text.to_string(),
            font,
            size_px: size,
            width: (measure(text, &font, size, 0.0) + 2.0 * pad_h).round(),
            height: (size + 2.0 * pad_v).round(),
            fill,
            text_color: contrast_text(fill),
        })
    }

    pub fn rule(&self, width: f64, height: f64) -> Block {
        Block::Rule {
            width,
            height,
            color: self.colors.accent,
        }
    }

    /// Chrome bars for brand labels (top) and the slide counter (bottom).
    pub fn chrome(&self) -> Vec<SceneNode> {
        let mut out = Vec::new();
        let (w, h) = (self.canvas.w(), self.canvas.h());
        let pad_x = self.pad_x();
        let bar_h = self.chrome_height();
        let color = self.colors.text.with_opacity(0.85);

        if let Some(chrome) = self.brand.chrome() {
            out.push(SceneNode::ChromeBar(ChromeBar {
                frame: Rect::new(pad_x, CHROME_MARGIN, w - pad_x, CHROME_MARGIN + bar_h),
                left: chrome.top_left().map(str::to_string),
                right: chrome.top_right().map(str::to_string),
                font: self.fonts.label,
                size_px: self.chrome_size(),
                color,
            }));
        }
        if let Some(counter) = self.slide.counter() {
            out.push(SceneNode::ChromeBar(ChromeBar {
                frame: Rect::new(pad_x, h - CHROME_MARGIN - bar_h, w - pad_x, h - CHROME_MARGIN),
                left: None,
                right: Some(counter),
                font: self.fonts.label,
                size_px: self.chrome_size(),
                color,
            }));
        }
        out
    }
}

/// Dark text on light fills, light text on dark fills.
pub fn contrast_text(fill: Rgba8) -> Rgba8 {
    if fill.luminance() > 0.45 {
        Rgba8::rgb(0x11, 0x11, 0x11)
    } else {
        Rgba8::WHITE
    }
}

/// A measured, not-yet-positioned piece of a layout.
#[derive(Clone, Debug)]
pub enum Block {
    Text {
        role: TextRole,
        lines: Vec<TextLine>,
        font: FontHandle,
        size_px: f64,
        line_height_px: f64,
    },
    Label {
        text: String,
        font: FontHandle,
        size_px: f64,
        letter_spacing_px: f64,
        color: Rgba8,
    },
    Pill {
        text: String,
        font: FontHandle,
        size_px: f64,
        width: f64,
        height: f64,
        fill: Rgba8,
        text_color: Rgba8,
    },
    Rule {
        width: f64,
        height: f64,
        color: Rgba8,
    },
}

impl Block {
    pub fn text(
        role: TextRole,
        lines: Vec<TextLine>,
        font: FontHandle,
        size_px: f64,
        line_height_px: f64,
    ) -> Self {
        Self::Text {
            role,
            lines,
            font,
            size_px,
            line_height_px,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Self::Text {
                lines,
                line_height_px,
                ..
            } => line_height_px * (lines.len() as f64),
            Self::Label { size_px, .. } => size_px * 1.2,
            Self::Pill { height, .. } | Self::Rule { height, .. } => *height,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Self::Text { lines, .. } => lines.iter().map(|l| l.width).fold(0.0, f64::max),
            Self::Label {
                text,
                font,
                size_px,
                letter_spacing_px,
                ..
            } => measure(text, font, *size_px, *letter_spacing_px),
            Self::Pill { width, .. } | Self::Rule { width, .. } => *width,
        }
    }

    fn is_rule(&self) -> bool {
        matches!(self, Self::Rule { .. })
    }

    /// Position the block with its top edge at `top`.
    pub fn place(&self, x: f64, top: f64, anchor: TextAnchor) -> SceneNode {
        let x0 = |width: f64| match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - width / 2.0,
            TextAnchor::End => x - width,
        };
        match self {
            Self::Text {
                role,
                lines,
                font,
                size_px,
                line_height_px,
            } => SceneNode::TextRun(TextRun {
                role: *role,
                lines: lines.clone(),
                x,
                top,
                anchor,
                font: *font,
                size_px: *size_px,
                line_height_px: *line_height_px,
                letter_spacing_px: 0.0,
            }),
            Self::Label {
                text,
                font,
                size_px,
                letter_spacing_px,
                color,
            } => SceneNode::Label(Label {
                text: text.clone(),
                x,
                top,
                anchor,
                font: *font,
                size_px: *size_px,
                letter_spacing_px: *letter_spacing_px,
                color: *color,
            }),
            Self::Pill {
                text,
                font,
                size_px,
                width,
                height,
                fill,
                text_color,
            } => {
                let left = x0(*width);
                SceneNode::CtaPill(CtaPill {
                    frame: Rect::new(left, top, left + width, top + height),
                    text: text.clone(),
                    font: *font,
                    size_px: *size_px,
                    fill: *fill,
                    text_color: *text_color,
                })
            }
            Self::Rule {
                width,
                height,
                color,
            } => {
                let left = x0(*width);
                SceneNode::SolidBlock(SolidBlock {
                    frame: Rect::new(left, top, left + width, top + height),
                    color: *color,
                    radius: height / 2.0,
                })
            }
        }
    }
}

/// Blocks laid out top to bottom with role-dependent gaps.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    blocks: Vec<Block>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn push_opt(&mut self, block: Option<Block>) {
        if let Some(b) = block {
            self.blocks.push(b);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    fn gap(prev: &Block, next: &Block, sizes: &BaseSizes) -> f64 {
        if matches!(next, Block::Pill { .. }) {
            return sizes.cta * 1.3;
        }
        if prev.is_rule() || next.is_rule() {
            return sizes.subtext * 0.9;
        }
        match prev {
            Block::Label { .. } => sizes.label * 0.8,
            Block::Text {
                role: TextRole::QuoteGlyph,
                ..
            } => sizes.subtext * 0.3,
            _ => sizes.subtext * 0.8,
        }
    }

    pub fn height(&self, sizes: &BaseSizes) -> f64 {
        let mut h = 0.0;
        for (i, b) in self.blocks.iter().enumerate() {
            if i > 0 {
                h += Self::gap(&self.blocks[i - 1], b, sizes);
            }
            h += b.height();
        }
        h
    }

    pub fn width(&self) -> f64 {
        self.blocks.iter().map(Block::width).fold(0.0, f64::max)
    }

    pub fn place(&self, x: f64, top: f64, anchor: TextAnchor, sizes: &BaseSizes) -> Vec<SceneNode> {
        let mut y = top;
        let mut out = Vec::with_capacity(self.blocks.len());
        for (i, b) in self.blocks.iter().enumerate() {
            if i > 0 {
                y += Self::gap(&self.blocks[i - 1], b, sizes);
            }
            out.push(b.place(x, y, anchor));
            y += b.height();
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/blocks.rs"]
mod tests;
