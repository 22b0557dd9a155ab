use std::collections::HashSet;

use super::*;

#[test]
fn catalog_is_indexed_by_id() {
    assert_eq!(CATALOG.len(), 26);
    for (i, id) in LayoutId::ALL.iter().enumerate() {
        assert_eq!(CATALOG[i].id, *id, "catalog slot {i} out of order");
        assert_eq!(id.entry().id, *id);
    }
}

#[test]
fn ids_are_unique_and_parse_back() {
    let names: HashSet<&str> = LayoutId::ALL.iter().map(|l| l.as_str()).collect();
    assert_eq!(names.len(), 26);
    for id in LayoutId::ALL {
        assert_eq!(LayoutId::parse(id.as_str()), Some(id));
        assert_eq!(
            serde_json::to_value(id).unwrap(),
            serde_json::Value::String(id.as_str().to_string())
        );
    }
}

#[test]
fn unknown_ids_resolve_to_default() {
    assert_eq!(LayoutId::parse("nonexistent-layout"), None);
    assert_eq!(LayoutId::resolve("nonexistent-layout"), LayoutId::BottomLeft);
    assert_eq!(LayoutId::resolve("Bottom-Left"), DEFAULT_LAYOUT);
    assert_eq!(LayoutId::resolve(""), DEFAULT_LAYOUT);
    assert_eq!(LayoutId::resolve("stat-hero"), LayoutId::StatHero);
}

#[test]
fn category_sizes() {
    let count = |c: LayoutCategory| CATALOG.iter().filter(|e| e.category == c).count();
    assert_eq!(count(LayoutCategory::Position), 9);
    assert_eq!(count(LayoutCategory::Scale), 2);
    assert_eq!(count(LayoutCategory::Minimal), 3);
    assert_eq!(count(LayoutCategory::Editorial), 2);
    assert_eq!(count(LayoutCategory::Bar), 2);
    assert_eq!(count(LayoutCategory::Card), 2);
    assert_eq!(count(LayoutCategory::Creative), 4);
    assert_eq!(count(LayoutCategory::Special), 2);
}

#[test]
fn parametric_entries_are_position_scale_and_minimal() {
    let parametric: Vec<_> = CATALOG.iter().filter(|e| e.is_parametric()).collect();
    assert_eq!(parametric.len(), 14);
    for e in parametric {
        assert!(matches!(
            e.category,
            LayoutCategory::Position | LayoutCategory::Scale | LayoutCategory::Minimal
        ));
    }
    assert_eq!(CATALOG.iter().filter(|e| !e.is_parametric()).count(), 12);
}

#[test]
fn only_minimal_layouts_keep_headline_case() {
    for e in CATALOG.iter() {
        if let LayoutKind::Parametric(p) = e.kind {
            assert_eq!(
                p.uppercase,
                e.category != LayoutCategory::Minimal,
                "{}",
                e.id.as_str()
            );
        }
    }
}

#[test]
fn category_names_match_serde() {
    for id in LayoutId::ALL {
        let c = id.category();
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            format!("\"{}\"", c.as_str())
        );
    }
}
