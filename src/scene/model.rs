//! Scene tree: what to draw, decoupled from how it is rasterized.
//!
//! All geometry is absolute canvas pixels. Trees are built fresh per request and dropped after
//! rasterization.

use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::foundation::error::{SlidetypeError, SlidetypeResult};
use crate::text::fonts::FontHandle;
use crate::text::metrics::TextLine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    Headline,
    Subtext,
    /// Oversized decorative quotation mark.
    QuoteGlyph,
    /// Headline set as one oversized accent run.
    Statistic,
}

/// Multi-line, multi-color text. `x` is interpreted through `anchor`; `top` is the top of the
/// first line box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub role: TextRole,
    pub lines: Vec<TextLine>,
    pub x: f64,
    pub top: f64,
    pub anchor: TextAnchor,
    pub font: FontHandle,
    pub size_px: f64,
    pub line_height_px: f64,
    pub letter_spacing_px: f64,
}

impl TextRun {
    pub fn height(&self) -> f64 {
        self.line_height_px * (self.lines.len() as f64)
    }

    /// Baseline of line `i`, assuming an ascent of ~0.8em centered in the line box.
    pub fn baseline(&self, i: usize) -> f64 {
        let half_leading = (self.line_height_px - self.size_px) / 2.0;
        self.top + self.line_height_px * (i as f64) + half_leading + self.size_px * 0.8
    }

    pub fn bounds(&self) -> Rect {
        let width = self.lines.iter().map(|l| l.width).fold(0.0, f64::max);
        let x0 = match self.anchor {
            TextAnchor::Start => self.x,
            TextAnchor::Middle => self.x - width / 2.0,
            TextAnchor::End => self.x - width,
        };
        Rect::new(x0, self.top, x0 + width, self.top + self.height())
    }
}

/// Small uppercase tag (purpose label, slide counter).
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub top: f64,
    pub anchor: TextAnchor,
    pub font: FontHandle,
    pub size_px: f64,
    pub letter_spacing_px: f64,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CtaPill {
    pub frame: Rect,
    pub text: String,
    pub font: FontHandle,
    pub size_px: f64,
    pub fill: Rgba8,
    pub text_color: Rgba8,
}

/// Persistent carousel chrome: a thin strip with optional left and right labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromeBar {
    pub frame: Rect,
    pub left: Option<String>,
    pub right: Option<String>,
    pub font: FontHandle,
    pub size_px: f64,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlassCard {
    pub frame: Rect,
    pub fill: Rgba8,
    pub stroke: Option<Rgba8>,
    pub radius: f64,
    pub children: Vec<SceneNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    ToTop,
    ToBottom,
    ToLeft,
    ToRight,
    /// Top-left corner to bottom-right corner.
    Diagonal,
}

impl GradientDirection {
    /// `(x1, y1, x2, y2)` in object-bounding-box units.
    pub fn vector(self) -> (f64, f64, f64, f64) {
        match self {
            Self::ToTop => (0.0, 1.0, 0.0, 0.0),
            Self::ToBottom => (0.0, 0.0, 0.0, 1.0),
            Self::ToLeft => (1.0, 0.0, 0.0, 0.0),
            Self::ToRight => (0.0, 0.0, 1.0, 0.0),
            Self::Diagonal => (0.0, 0.0, 1.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient vector in `[0, 1]`.
    pub offset: f32,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradientOverlay {
    pub frame: Rect,
    pub direction: GradientDirection,
    pub stops: Vec<GradientStop>,
}

/// Solid rectangle: bars, bands, side panels, accent rules.
#[derive(Clone, Debug, PartialEq)]
pub struct SolidBlock {
    pub frame: Rect,
    pub color: Rgba8,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub frame: Rect,
    pub children: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Container(Container),
    TextRun(TextRun),
    Label(Label),
    CtaPill(CtaPill),
    ChromeBar(ChromeBar),
    GlassCard(GlassCard),
    GradientOverlay(GradientOverlay),
    SolidBlock(SolidBlock),
}

impl SceneNode {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Container(_) => "container",
            Self::TextRun(_) => "text_run",
            Self::Label(_) => "label",
            Self::CtaPill(_) => "cta_pill",
            Self::ChromeBar(_) => "chrome_bar",
            Self::GlassCard(_) => "glass_card",
            Self::GradientOverlay(_) => "gradient_overlay",
            Self::SolidBlock(_) => "solid_block",
        }
    }

    pub fn children(&self) -> &[SceneNode] {
        match self {
            Self::Container(c) => &c.children,
            Self::GlassCard(c) => &c.children,
            _ => &[],
        }
    }

    /// Depth-first, parent before children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    pub fn text_runs(&self) -> Vec<&TextRun> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let SceneNode::TextRun(t) = n {
                out.push(t);
            }
        });
        out
    }

    pub fn find_text_run(&self, role: TextRole) -> Option<&TextRun> {
        self.text_runs().into_iter().find(|t| t.role == role)
    }

    pub fn count_kind(&self, kind: &str) -> usize {
        let mut n = 0;
        self.walk(&mut |node| {
            if node.kind() == kind {
                n += 1;
            }
        });
        n
    }

    /// Check geometry is finite and no node is an empty placeholder.
    pub fn validate(&self, canvas: Canvas) -> SlidetypeResult<()> {
        let mut problem: Option<String> = None;
        self.walk(&mut |node| {
            if problem.is_none() {
                problem = node_problem(node, canvas);
            }
        });
        match problem {
            Some(p) => Err(SlidetypeError::internal_layout(p)),
            None => Ok(()),
        }
    }
}

fn rect_ok(r: &Rect) -> bool {
    [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) && r.x1 >= r.x0 && r.y1 >= r.y0
}

fn size_ok(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn node_problem(node: &SceneNode, canvas: Canvas) -> Option<String> {
    let kind = node.kind();
    let bad = match node {
        SceneNode::Container(c) => !rect_ok(&c.frame),
        SceneNode::TextRun(t) => {
            !t.x.is_finite()
                || !t.top.is_finite()
                || !size_ok(t.size_px)
                || !size_ok(t.line_height_px)
                || t.lines.is_empty()
                || t.lines.iter().any(|l| l.spans.is_empty())
        }
        SceneNode::Label(l) => {
            !l.x.is_finite() || !l.top.is_finite() || !size_ok(l.size_px) || l.text.is_empty()
        }
        SceneNode::CtaPill(p) => !rect_ok(&p.frame) || !size_ok(p.size_px) || p.text.is_empty(),
        SceneNode::ChromeBar(c) => {
            !rect_ok(&c.frame) || !size_ok(c.size_px) || (c.left.is_none() && c.right.is_none())
        }
        SceneNode::GlassCard(c) => !rect_ok(&c.frame) || !c.radius.is_finite(),
        SceneNode::GradientOverlay(g) => {
            !rect_ok(&g.frame)
                || g.stops.len() < 2
                || g.stops.iter().any(|s| !(0.0..=1.0).contains(&s.offset))
        }
        SceneNode::SolidBlock(b) => !rect_ok(&b.frame) || !b.radius.is_finite(),
    };
    if bad {
        return Some(format!(
            "invalid {kind} node for {}x{} canvas",
            canvas.width, canvas.height
        ));
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
