//! The shared data-driven builder behind the Position, Scale and Minimal layouts.

use crate::foundation::core::{Rect, Rgba8};
use crate::layout::blocks::{BuildCtx, Stack};
use crate::scene::model::{
    GradientDirection, GradientOverlay, GradientStop, SceneNode, TextAnchor,
};

/// Vertical placement of the text stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
}

/// Horizontal placement of the text region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Legibility gradient: black at the given alphas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSpec {
    pub direction: GradientDirection,
    /// `(offset, alpha)` pairs, offsets ascending in `[0, 1]`.
    pub stops: &'static [(f32, f32)],
}

impl GradientSpec {
    pub fn overlay(&self, frame: Rect) -> SceneNode {
        SceneNode::GradientOverlay(GradientOverlay {
            frame,
            direction: self.direction,
            stops: self
                .stops
                .iter()
                .map(|&(offset, alpha)| GradientStop {
                    offset,
                    color: Rgba8::BLACK.with_opacity(alpha),
                })
                .collect(),
        })
    }
}

pub mod gradients {
    use super::GradientSpec;
    use crate::scene::model::GradientDirection;

    pub const FROM_TOP: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.78), (0.55, 0.15), (1.0, 0.0)],
    };
    pub const FROM_BOTTOM: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.0), (0.45, 0.15), (1.0, 0.78)],
    };
    pub const FROM_BOTTOM_STRONG: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.0), (0.35, 0.2), (1.0, 0.88)],
    };
    pub const FROM_LEFT: GradientSpec = GradientSpec {
        direction: GradientDirection::ToRight,
        stops: &[(0.0, 0.72), (0.6, 0.2), (1.0, 0.05)],
    };
    pub const FROM_RIGHT: GradientSpec = GradientSpec {
        direction: GradientDirection::ToRight,
        stops: &[(0.0, 0.05), (0.4, 0.2), (1.0, 0.72)],
    };
    pub const CENTER_BAND: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.2), (0.5, 0.55), (1.0, 0.2)],
    };
    pub const MINIMAL_TOP: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.45), (0.4, 0.0), (1.0, 0.0)],
    };
    pub const MINIMAL_WASH: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.25), (1.0, 0.25)],
    };
    pub const MINIMAL_BOTTOM: GradientSpec = GradientSpec {
        direction: GradientDirection::ToBottom,
        stops: &[(0.0, 0.0), (0.6, 0.0), (1.0, 0.45)],
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParametricParams {
    pub justify: Justify,
    pub align: Align,
    pub text_align: TextAlign,
    pub gradient: GradientSpec,
    pub headline_scale: f64,
    pub subtext_scale: f64,
    /// Fraction of canvas width.
    pub headline_max_width: f64,
    /// Fraction of canvas width.
    pub subtext_max_width: f64,
    /// Fraction of canvas height kept clear above/below the stack.
    pub padding_y: f64,
    pub uppercase: bool,
}

pub fn build(ctx: &BuildCtx<'_>, p: &ParametricParams) -> Vec<SceneNode> {
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let pad_x = ctx.pad_x();
    let region_w = (p.headline_max_width.max(p.subtext_max_width) * w).min(w - 2.0 * pad_x);

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(ctx.headline(
        p.headline_scale,
        (p.headline_max_width * w).min(region_w),
        p.uppercase,
    ));
    stack.push_opt(ctx.subtext(p.subtext_scale, (p.subtext_max_width * w).min(region_w)));
    stack.push_opt(ctx.cta());

    let stack_h = stack.height(&ctx.sizes);
    let pad_y = p.padding_y * h;
    let top = match p.justify {
        Justify::Start => pad_y.max(ctx.top_inset()),
        Justify::Center => ((h - stack_h) / 2.0).max(ctx.top_inset()),
        Justify::End => h - pad_y.max(ctx.bottom_inset()) - stack_h,
    };

    let region_x0 = match p.align {
        Align::Start => pad_x,
        Align::Center => (w - region_w) / 2.0,
        Align::End => w - pad_x - region_w,
    };
    let (x, anchor) = match p.text_align {
        TextAlign::Left => (region_x0, TextAnchor::Start),
        TextAlign::Center => (region_x0 + region_w / 2.0, TextAnchor::Middle),
        TextAlign::Right => (region_x0 + region_w, TextAnchor::End),
    };

    let mut nodes = vec![p.gradient.overlay(ctx.canvas.rect())];
    nodes.extend(stack.place(x, top, anchor, &ctx.sizes));
    nodes
}

#[cfg(test)]
#[path = "../../tests/unit/layout/parametric.rs"]
mod tests;
