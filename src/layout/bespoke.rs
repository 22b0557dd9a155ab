//! Layouts whose structure cannot be expressed through `ParametricParams`.

use smallvec::smallvec;

use crate::foundation::core::{Rect, Rgba8};
use crate::layout::aspect::AspectRatio;
use crate::layout::blocks::{Block, BuildCtx, Stack};
use crate::layout::parametric::GradientSpec;
use crate::scene::model::{
    GlassCard, GradientDirection, SceneNode, SolidBlock, TextAnchor, TextRole,
};
use crate::text::metrics::{TextLine, measure};
use crate::text::tokens::{Span, plain_headline};

const BAR_FRACTION: f64 = 0.34;
const BAND_FRACTION: f64 = 0.12;
const STRIP_FRACTION: f64 = 0.42;
const CARD_WIDTH_FRACTION: f64 = 0.84;
const STAT_SCALE: f64 = 2.2;
const QUOTE_GLYPH: &str = "\u{201C}";

fn solid(frame: Rect, color: Rgba8) -> SceneNode {
    SceneNode::SolidBlock(SolidBlock {
        frame,
        color,
        radius: 0.0,
    })
}

/// Headline group in one corner, supporting copy in the opposite one.
fn editorial(ctx: &BuildCtx<'_>, headline_on_top: bool) -> Vec<SceneNode> {
    const GRADIENT: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.72), (0.4, 0.12), (0.6, 0.12), (1.0, 0.72)],
    };
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let pad_x = ctx.pad_x();
    let top_y = (0.09 * h).max(ctx.top_inset());
    let bottom_y = h - (0.09 * h).max(ctx.bottom_inset());

    let mut lead = Stack::new();
    lead.push_opt(ctx.label());
    lead.push(ctx.headline(1.0, 0.78 * w, true));

    let mut support = Stack::new();
    support.push_opt(ctx.subtext(1.0, 0.55 * w));
    support.push_opt(ctx.cta());

    let mut nodes = vec![GRADIENT.overlay(ctx.canvas.rect())];
    if headline_on_top {
        nodes.extend(lead.place(pad_x, top_y, TextAnchor::Start, &ctx.sizes));
        if !support.is_empty() {
            let top = bottom_y - support.height(&ctx.sizes);
            nodes.extend(support.place(w - pad_x, top, TextAnchor::End, &ctx.sizes));
        }
    } else {
        if !support.is_empty() {
            nodes.extend(support.place(w - pad_x, top_y, TextAnchor::End, &ctx.sizes));
        }
        let top = bottom_y - lead.height(&ctx.sizes);
        nodes.extend(lead.place(pad_x, top, TextAnchor::Start, &ctx.sizes));
    }
    nodes
}

pub fn editorial_split(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    editorial(ctx, true)
}

pub fn editorial_reverse(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    editorial(ctx, false)
}

/// Solid full-width strip holding the whole stack. Grows past its nominal height if the copy
/// does not fit.
fn bar(ctx: &BuildCtx<'_>, at_top: bool) -> Vec<SceneNode> {
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let pad_x = ctx.pad_x();

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(ctx.headline(0.82, 0.84 * w, true));
    stack.push_opt(ctx.subtext(0.95, 0.8 * w));
    stack.push_opt(ctx.cta());

    let content_h = stack.height(&ctx.sizes);
    let bar_pad = 0.045 * h;
    let inset = if at_top {
        ctx.top_inset()
    } else {
        ctx.bottom_inset()
    };
    let bar_h = (BAR_FRACTION * h).max(content_h + 2.0 * bar_pad + inset);
    let rule_h = 6.0;

    let (frame, rule, content_top) = if at_top {
        (
            Rect::new(0.0, 0.0, w, bar_h),
            Rect::new(0.0, bar_h - rule_h, w, bar_h),
            inset + (bar_h - inset - content_h) / 2.0,
        )
    } else {
        (
            Rect::new(0.0, h - bar_h, w, h),
            Rect::new(0.0, h - bar_h, w, h - bar_h + rule_h),
            h - bar_h + (bar_h - inset - content_h) / 2.0,
        )
    };

    let mut nodes = vec![
        solid(frame, ctx.colors.surface().with_opacity(0.94)),
        solid(rule, ctx.colors.accent),
    ];
    nodes.extend(stack.place(pad_x, content_top, TextAnchor::Start, &ctx.sizes));
    nodes
}

pub fn bar_top(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    bar(ctx, true)
}

pub fn bar_bottom(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    bar(ctx, false)
}

/// Semi-transparent rounded panel sized to its content.
fn glass_card(ctx: &BuildCtx<'_>, centered: bool) -> Vec<SceneNode> {
    const CENTER_WASH: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.18), (1.0, 0.38)],
    };
    const BOTTOM_WASH: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.0), (0.5, 0.1), (1.0, 0.5)],
    };
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let card_w = CARD_WIDTH_FRACTION * w;
    let inner_pad = (0.06 * w).round();
    let content_w = card_w - 2.0 * inner_pad;

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(ctx.headline(0.85, content_w, true));
    stack.push_opt(ctx.subtext(0.95, content_w));
    stack.push_opt(ctx.cta());

    let card_h = stack.height(&ctx.sizes) + 2.0 * inner_pad;
    let card_x0 = (w - card_w) / 2.0;
    let card_y0 = if centered {
        ((h - card_h) / 2.0).max(ctx.top_inset())
    } else {
        h - (0.07 * h).max(ctx.bottom_inset()) - card_h
    };
    let frame = Rect::new(card_x0, card_y0, card_x0 + card_w, card_y0 + card_h);

    let (x, anchor) = if centered {
        (w / 2.0, TextAnchor::Middle)
    } else {
        (card_x0 + inner_pad, TextAnchor::Start)
    };
    let children = stack.place(x, card_y0 + inner_pad, anchor, &ctx.sizes);

    let wash = if centered { CENTER_WASH } else { BOTTOM_WASH };
    vec![
        wash.overlay(ctx.canvas.rect()),
        SceneNode::GlassCard(GlassCard {
            frame,
            fill: ctx.colors.surface().with_opacity(0.52),
            stroke: Some(Rgba8::WHITE.with_opacity(0.22)),
            radius: 36.0,
            children,
        }),
    ]
}

pub fn glass_card_center(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    glass_card(ctx, true)
}

pub fn glass_card_bottom(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    glass_card(ctx, false)
}

/// Corner-to-corner gradient; headline top-left, supporting copy bottom-right.
pub fn diagonal(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    const GRADIENT: GradientSpec = GradientSpec {
        direction: GradientDirection::Diagonal,
        stops: &[(0.0, 0.78), (0.42, 0.12), (0.58, 0.12), (1.0, 0.78)],
    };
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let pad_x = ctx.pad_x();

    let mut lead = Stack::new();
    lead.push_opt(ctx.label());
    lead.push(ctx.headline(1.0, 0.8 * w, true));

    let mut support = Stack::new();
    support.push_opt(ctx.subtext(1.0, 0.6 * w));
    support.push_opt(ctx.cta());

    let mut nodes = vec![GRADIENT.overlay(ctx.canvas.rect())];
    nodes.extend(lead.place(
        pad_x,
        (0.08 * h).max(ctx.top_inset()),
        TextAnchor::Start,
        &ctx.sizes,
    ));
    if !support.is_empty() {
        let top = h - (0.08 * h).max(ctx.bottom_inset()) - support.height(&ctx.sizes);
        nodes.extend(support.place(w - pad_x, top, TextAnchor::End, &ctx.sizes));
    }
    nodes
}

/// One headline token per line, an accent rule, then the supporting copy.
pub fn stacked_full(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    const GRADIENT: GradientSpec = GradientSpec {
        direction: GradientDirection::ToRight,
        stops: &[(0.0, 0.8), (0.65, 0.25), (1.0, 0.05)],
    };
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let pad_x = ctx.pad_x();

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(ctx.headline_stacked(1.15, true));
    stack.push(ctx.rule((0.11 * w).round(), 8.0));
    stack.push_opt(ctx.subtext(1.0, 0.6 * w));
    stack.push_opt(ctx.cta());

    let top = ((h - stack.height(&ctx.sizes)) / 2.0).max(ctx.top_inset());
    let mut nodes = vec![GRADIENT.overlay(ctx.canvas.rect())];
    nodes.extend(stack.place(pad_x, top, TextAnchor::Start, &ctx.sizes));
    nodes
}

/// Letterbox bands top and bottom framing centered copy.
pub fn cinema_wide(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    const MIDDLE: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.35), (0.5, 0.5), (1.0, 0.35)],
    };
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let band_h = (BAND_FRACTION * h).round();
    let surface = ctx.colors.surface();

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(ctx.headline(0.9, 0.8 * w, true));
    stack.push_opt(ctx.subtext(0.95, 0.7 * w));
    stack.push_opt(ctx.cta());

    let height = stack.height(&ctx.sizes);
    let top = ((h - height) / 2.0)
        .min(h - ctx.bottom_inset() - height)
        .max(ctx.top_inset());
    let mut nodes = vec![
        MIDDLE.overlay(Rect::new(0.0, band_h, w, h - band_h)),
        solid(Rect::new(0.0, 0.0, w, band_h), surface),
        solid(Rect::new(0.0, h - band_h, w, h), surface),
    ];
    nodes.extend(stack.place(w / 2.0, top, TextAnchor::Middle, &ctx.sizes));
    nodes
}

/// Fixed-width side panel holding the copy.
pub fn vertical_strip(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let panel_w = (STRIP_FRACTION * w).round();
    let edge = 6.0;
    let inner_pad = 48.0;
    let content_w = panel_w - 2.0 * inner_pad - edge;

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(ctx.headline(0.62, content_w, true));
    stack.push_opt(ctx.subtext(0.85, content_w));
    stack.push_opt(ctx.cta());

    let top = ((h - stack.height(&ctx.sizes)) / 2.0).max(ctx.top_inset());
    let mut nodes = vec![
        solid(
            Rect::new(0.0, 0.0, panel_w, h),
            ctx.colors.surface().with_opacity(0.9),
        ),
        solid(Rect::new(panel_w - edge, 0.0, panel_w, h), ctx.colors.accent),
    ];
    nodes.extend(stack.place(inner_pad, top, TextAnchor::Start, &ctx.sizes));
    nodes
}

/// Oversized opening quote above the headline in its original casing.
pub fn quote_style(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    const GRADIENT: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.45), (1.0, 0.65)],
    };
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let pad_x = ctx.pad_x();

    let glyph_size = ctx.sizes.headline * 2.6;
    let font = ctx.fonts.headline;
    let glyph = Block::text(
        TextRole::QuoteGlyph,
        vec![TextLine {
            width: measure(QUOTE_GLYPH, &font, glyph_size, 0.0),
            spans: smallvec![Span::new(QUOTE_GLYPH, ctx.colors.accent)],
        }],
        font,
        glyph_size,
        glyph_size * 0.7,
    );

    let mut headline = ctx.headline(0.9, 0.82 * w, false);
    if let Block::Text { line_height_px, size_px, .. } = &mut headline {
        *line_height_px = *size_px * 1.18;
    }

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(glyph);
    stack.push(headline);
    stack.push_opt(ctx.subtext(1.0, 0.7 * w));
    stack.push_opt(ctx.cta());

    let top = ((h - stack.height(&ctx.sizes)) / 2.0).max(ctx.top_inset());
    let mut nodes = vec![GRADIENT.overlay(ctx.canvas.rect())];
    nodes.extend(stack.place(pad_x, top, TextAnchor::Start, &ctx.sizes));
    nodes
}

/// The headline as one oversized accent-colored statistic, centered on the canvas.
pub fn stat_hero(ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
    const SPOTLIGHT: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.0), (0.5, 0.55), (1.0, 0.0)],
    };
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let avail = w - 2.0 * ctx.pad_x();

    let text = plain_headline(&ctx.tokens).to_uppercase();
    let font = ctx.fonts.headline;
    let per_px = measure(&text, &font, 1.0, 0.0);
    // Fit against the tallest ratio's base so the statistic still grows with canvas height.
    let mut scale = STAT_SCALE;
    if per_px > 0.0 {
        scale = scale.min(avail / (per_px * AspectRatio::Story.base_sizes().headline));
    }
    let size = ctx.sizes.headline * scale;
    let stat = Block::text(
        TextRole::Statistic,
        vec![TextLine {
            width: per_px * size,
            spans: smallvec![Span::new(text, ctx.colors.accent)],
        }],
        font,
        size,
        size,
    );

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(stat);
    stack.push(ctx.rule((0.18 * w).round(), (size * 0.06).max(6.0).round()));
    stack.push_opt(ctx.subtext(1.0, 0.72 * w));
    stack.push_opt(ctx.cta());

    let top = (h - stack.height(&ctx.sizes)) / 2.0;
    let mut nodes = vec![SPOTLIGHT.overlay(ctx.canvas.rect())];
    nodes.extend(stack.place(w / 2.0, top, TextAnchor::Middle, &ctx.sizes));
    nodes
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bespoke.rs"]
mod tests;
