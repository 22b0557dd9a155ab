//! Scene tree to SVG document.
//!
//! Output is a plain SVG 1.1 string sized to the canvas with a transparent background, so the
//! rasterized result is exactly the text layer. Number formatting is fixed-precision, which keeps
//! the document (and therefore the raster) byte-stable across runs.

use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::scene::model::{
    ChromeBar, CtaPill, GlassCard, GradientOverlay, Label, SceneNode, SolidBlock, TextAnchor,
    TextRun,
};
use crate::text::fonts::FontHandle;

pub fn scene_to_svg(scene: &SceneNode, canvas: Canvas) -> String {
    let mut w = SvgWriter::default();
    w.node(scene);

    let mut out = String::with_capacity(w.body.len() + w.defs.len() + 256);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
        canvas.width, canvas.height
    ));
    if !w.defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&w.defs);
        out.push_str("</defs>");
    }
    out.push_str(&w.body);
    out.push_str("</svg>");
    out
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    body: String,
    next_gradient: usize,
}

impl SvgWriter {
    fn node(&mut self, node: &SceneNode) {
        match node {
            SceneNode::Container(c) => {
                for child in &c.children {
                    self.node(child);
                }
            }
            SceneNode::GradientOverlay(g) => self.gradient(g),
            SceneNode::SolidBlock(b) => self.solid(b),
            SceneNode::GlassCard(c) => self.glass_card(c),
            SceneNode::TextRun(t) => self.text_run(t),
            SceneNode::Label(l) => self.label(l),
            SceneNode::CtaPill(p) => self.cta_pill(p),
            SceneNode::ChromeBar(c) => self.chrome_bar(c),
        }
    }

    fn rect(&mut self, frame: Rect, radius: f64, fill: &str, fill_opacity: f32) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            num(frame.x0),
            num(frame.y0),
            num(frame.width()),
            num(frame.height())
        ));
        if radius > 0.0 {
            self.body.push_str(&format!(r#" rx="{}""#, num(radius)));
        }
        self.body.push_str(&format!(r#" fill="{fill}""#));
        if fill_opacity < 1.0 {
            self.body.push_str(&format!(r#" fill-opacity="{}""#, opacity(fill_opacity)));
        }
        self.body.push_str("/>");
    }

    fn gradient(&mut self, g: &GradientOverlay) {
        let id = format!("g{}", self.next_gradient);
        self.next_gradient += 1;

        let (x1, y1, x2, y2) = g.direction.vector();
        self.defs.push_str(&format!(
            r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            num(x1),
            num(y1),
            num(x2),
            num(y2)
        ));
        for stop in &g.stops {
            self.defs.push_str(&format!(
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                opacity(stop.offset),
                stop.color.hex_rgb(),
                opacity(stop.color.opacity())
            ));
        }
        self.defs.push_str("</linearGradient>");
        self.rect(g.frame, 0.0, &format!("url(#{id})"), 1.0);
    }

    fn solid(&mut self, b: &SolidBlock) {
        self.rect(b.frame, b.radius, &b.color.hex_rgb(), b.color.opacity());
    }

    fn glass_card(&mut self, c: &GlassCard) {
        self.rect(c.frame, c.radius, &c.fill.hex_rgb(), c.fill.opacity());
        if let Some(stroke) = c.stroke {
            let f = c.frame;
            self.body.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="2"/>"#,
                num(f.x0 + 1.0),
                num(f.y0 + 1.0),
                num(f.width() - 2.0),
                num(f.height() - 2.0),
                num((c.radius - 1.0).max(0.0)),
                stroke.hex_rgb(),
                opacity(stroke.opacity())
            ));
        }
        for child in &c.children {
            self.node(child);
        }
    }

    fn open_text(&mut self, font: &FontHandle, size_px: f64, anchor: TextAnchor, tracking: f64) {
        self.body.push_str(&format!(
            r#"<text xml:space="preserve" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{}""#,
            escape(&font.css_family()),
            num(size_px),
            font.weight,
            anchor.svg_value()
        ));
        if tracking != 0.0 {
            self.body.push_str(&format!(r#" letter-spacing="{}""#, num(tracking)));
        }
        self.body.push('>');
    }

    fn colored(&mut self, text: &str, color: Rgba8) {
        self.body.push_str(&format!(r#"<tspan fill="{}""#, color.hex_rgb()));
        if color.a < 255 {
            self.body.push_str(&format!(r#" fill-opacity="{}""#, opacity(color.opacity())));
        }
        self.body.push_str(&format!(">{}</tspan>", escape(text)));
    }

    fn text_run(&mut self, t: &TextRun) {
        self.open_text(&t.font, t.size_px, t.anchor, t.letter_spacing_px);
        for (i, line) in t.lines.iter().enumerate() {
            self.body.push_str(&format!(
                r#"<tspan x="{}" y="{}">"#,
                num(t.x),
                num(t.baseline(i))
            ));
            for (j, span) in line.spans.iter().enumerate() {
                if j > 0 {
                    self.body.push(' ');
                }
                self.colored(&span.text, span.color);
            }
            self.body.push_str("</tspan>");
        }
        self.body.push_str("</text>");
    }

    #[allow(clippy::too_many_arguments)]
    fn single_line(
        &mut self,
        text: &str,
        x: f64,
        baseline: f64,
        anchor: TextAnchor,
        font: &FontHandle,
        size_px: f64,
        tracking: f64,
        color: Rgba8,
    ) {
        self.open_text(font, size_px, anchor, tracking);
        self.body.push_str(&format!(r#"<tspan x="{}" y="{}">"#, num(x), num(baseline)));
        self.colored(text, color);
        self.body.push_str("</tspan></text>");
    }

    fn label(&mut self, l: &Label) {
        let baseline = l.top + l.size_px * 0.9;
        self.single_line(
            &l.text,
            l.x,
            baseline,
            l.anchor,
            &l.font,
            l.size_px,
            l.letter_spacing_px,
            l.color,
        );
    }

    fn cta_pill(&mut self, p: &CtaPill) {
        self.rect(
            p.frame,
            p.frame.height() / 2.0,
            &p.fill.hex_rgb(),
            p.fill.opacity(),
        );
        let c = p.frame.center();
        self.single_line(
            &p.text,
            c.x,
            centered_baseline(c.y, p.size_px),
            TextAnchor::Middle,
            &p.font,
            p.size_px,
            0.0,
            p.text_color,
        );
    }

    fn chrome_bar(&mut self, c: &ChromeBar) {
        let baseline = centered_baseline(c.frame.center().y, c.size_px);
        let tracking = c.size_px * 0.08;
        if let Some(left) = &c.left {
            self.single_line(
                left,
                c.frame.x0,
                baseline,
                TextAnchor::Start,
                &c.font,
                c.size_px,
                tracking,
                c.color,
            );
        }
        if let Some(right) = &c.right {
            self.single_line(
                right,
                c.frame.x1,
                baseline,
                TextAnchor::End,
                &c.font,
                c.size_px,
                tracking,
                c.color,
            );
        }
    }
}

/// Baseline that visually centers cap-height text on `center_y`.
fn centered_baseline(center_y: f64, size_px: f64) -> f64 {
    center_y + size_px * 0.35
}

fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn opacity(v: f32) -> String {
    num(f64::from(v.clamp(0.0, 1.0)))
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
