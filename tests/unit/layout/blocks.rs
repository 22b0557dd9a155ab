use super::*;
use crate::model::slide::Chrome;

fn slide() -> SlideText {
    SlideText {
        subtext: Some("Automate the boring parts of your week".to_string()),
        cta: Some("Try it free".to_string()),
        purpose_label: Some("tip".to_string()),
        accent_words: vec!["time".to_string()],
        ..SlideText::new("Save time every day")
    }
}

#[test]
fn stack_height_includes_gaps() {
    let slide = slide();
    let brand = BrandStyle::default();
    let ctx = BuildCtx::new(&slide, &brand, AspectRatio::Square);

    let headline = ctx.headline(1.0, 900.0, true);
    let sub = ctx.subtext(1.0, 700.0).unwrap();
    let sum = headline.height() + sub.height();

    let mut stack = Stack::new();
    stack.push(headline);
    stack.push(sub);
    assert_eq!(stack.len(), 2);
    assert!((stack.height(&ctx.sizes) - (sum + ctx.sizes.subtext * 0.8)).abs() < 1e-9);
}

#[test]
fn placed_blocks_descend_without_overlap() {
    let slide = slide();
    let brand = BrandStyle::default();
    let ctx = BuildCtx::new(&slide, &brand, AspectRatio::Portrait);

    let mut stack = Stack::new();
    stack.push_opt(ctx.label());
    stack.push(ctx.headline(1.0, 900.0, true));
    stack.push_opt(ctx.subtext(1.0, 700.0));
    stack.push_opt(ctx.cta());
    let nodes = stack.place(80.0, 100.0, TextAnchor::Start, &ctx.sizes);
    assert_eq!(nodes.len(), 4);

    let tops: Vec<f64> = nodes
        .iter()
        .map(|n| match n {
            SceneNode::Label(l) => l.top,
            SceneNode::TextRun(t) => t.top,
            SceneNode::CtaPill(p) => p.frame.y0,
            other => panic!("unexpected node {other:?}"),
        })
        .collect();
    assert_eq!(tops[0], 100.0);
    assert!(tops.windows(2).all(|w| w[0] < w[1]));

    let SceneNode::TextRun(head) = &nodes[1] else {
        panic!("expected headline");
    };
    assert!(head.top + head.height() < tops[2]);
}

#[test]
fn label_is_uppercased_accent_text() {
    let slide = slide();
    let brand = BrandStyle::default();
    let ctx = BuildCtx::new(&slide, &brand, AspectRatio::Square);
    let Some(Block::Label { text, color, .. }) = ctx.label() else {
        panic!("expected label block");
    };
    assert_eq!(text, "TIP");
    assert_eq!(color, brand.colors.accent);
}

#[test]
fn cta_text_contrasts_with_fill() {
    assert_eq!(contrast_text(Rgba8::rgb(255, 214, 10)), Rgba8::rgb(0x11, 0x11, 0x11));
    assert_eq!(contrast_text(Rgba8::rgb(20, 30, 120)), Rgba8::WHITE);
}

#[test]
fn pill_anchor_positions_frame() {
    let slide = slide();
    let brand = BrandStyle::default();
    let ctx = BuildCtx::new(&slide, &brand, AspectRatio::Square);
    let pill = ctx.cta().unwrap();
    let w = pill.width();
    let SceneNode::CtaPill(end) = pill.place(1000.0, 10.0, TextAnchor::End) else {
        panic!("expected pill");
    };
    assert!((end.frame.x1 - 1000.0).abs() < 1e-9);
    let SceneNode::CtaPill(mid) = pill.place(540.0, 10.0, TextAnchor::Middle) else {
        panic!("expected pill");
    };
    assert!((mid.frame.center().x - 540.0).abs() < 1e-9);
    assert!((mid.frame.width() - w).abs() < 1e-9);
}

#[test]
fn chrome_and_counter_reserve_insets() {
    let mut slide = slide();
    let mut brand = BrandStyle::default();
    {
        let ctx = BuildCtx::new(&slide, &brand, AspectRatio::Square);
        assert_eq!(ctx.top_inset(), 0.0);
        assert_eq!(ctx.bottom_inset(), 0.0);
        assert!(ctx.chrome().is_empty());
    }

    brand.chrome = Some(Chrome {
        top_left: Some("@acme".to_string()),
        top_right: None,
    });
    slide.slide_number = Some(3);
    slide.slide_total = Some(9);
    let ctx = BuildCtx::new(&slide, &brand, AspectRatio::Square);
    assert!(ctx.top_inset() > 0.0);
    assert!(ctx.bottom_inset() > 0.0);

    let chrome = ctx.chrome();
    assert_eq!(chrome.len(), 2);
    let SceneNode::ChromeBar(top) = &chrome[0] else {
        panic!("expected chrome bar");
    };
    assert_eq!(top.left.as_deref(), Some("@acme"));
    assert_eq!(top.right, None);
    let SceneNode::ChromeBar(bottom) = &chrome[1] else {
        panic!("expected chrome bar");
    };
    assert_eq!(bottom.right.as_deref(), Some("03 / 09"));
    assert!(bottom.frame.y1 <= ctx.canvas.h());
}

#[test]
fn stacked_headline_puts_each_token_on_a_line() {
    let slide = slide();
    let brand = BrandStyle::default();
    let ctx = BuildCtx::new(&slide, &brand, AspectRatio::Square);
    let Block::Text { lines, .. } = ctx.headline_stacked(1.0, true) else {
        panic!("expected text block");
    };
    let words: Vec<String> = lines.iter().map(TextLine::text).collect();
    assert_eq!(words, vec!["SAVE", "TIME", "EVERY", "DAY"]);
    assert_eq!(lines[1].spans[0].color, brand.colors.accent);
}
