use super::*;

#[test]
fn canvas_width_is_fixed_and_height_follows_ratio() {
    let heights: Vec<u32> = AspectRatio::ALL
        .iter()
        .map(|a| {
            let c = a.canvas();
            assert_eq!(c.width, 1080);
            c.height
        })
        .collect();
    assert_eq!(heights, vec![1080, 1350, 1920]);
}

#[test]
fn base_sizes_increase_with_height() {
    let s = AspectRatio::Square.base_sizes();
    let p = AspectRatio::Portrait.base_sizes();
    let t = AspectRatio::Story.base_sizes();
    for (a, b) in [(s, p), (p, t)] {
        assert!(a.headline < b.headline);
        assert!(a.subtext < b.subtext);
        assert!(a.cta < b.cta);
        assert!(a.label < b.label);
    }
}

#[test]
fn accepts_names_and_ratio_aliases() {
    let a: AspectRatio = serde_json::from_str("\"9:16\"").unwrap();
    assert_eq!(a, AspectRatio::Story);
    let a: AspectRatio = serde_json::from_str("\"portrait\"").unwrap();
    assert_eq!(a, AspectRatio::Portrait);
    assert_eq!(serde_json::to_string(&AspectRatio::Square).unwrap(), "\"square\"");
}
