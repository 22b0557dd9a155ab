use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlidetypeError::input("slide.headline", "x")
            .to_string()
            .contains("input error: slide.headline:")
    );
    assert!(
        SlidetypeError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        SlidetypeError::internal_layout("x")
            .to_string()
            .contains("internal layout error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlidetypeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn per_slide_classification() {
    assert!(SlidetypeError::input("slide.headline", "empty").is_per_slide());
    assert!(SlidetypeError::decode("bad bytes").is_per_slide());
    assert!(!SlidetypeError::internal_layout("size mismatch").is_per_slide());
}
