use super::*;

#[test]
fn known_family_matches_case_insensitively() {
    let f = resolve_font(FontRole::Headline, "playfair display", 700);
    assert_eq!(f.family, "Playfair Display");
    assert_eq!(f.weight, 700);
    assert_eq!(f.generic, GenericFamily::Serif);
}

#[test]
fn unknown_family_uses_role_default() {
    assert_eq!(
        resolve_font(FontRole::Headline, "Comic Papyrus", 800).family,
        "Montserrat"
    );
    assert_eq!(resolve_font(FontRole::Body, "", 400).family, "Inter");
}

#[test]
fn missing_weight_snaps_to_nearest() {
    assert_eq!(resolve_font(FontRole::Headline, "Bebas Neue", 900).weight, 400);
    assert_eq!(resolve_font(FontRole::Body, "DM Sans", 650).weight, 700);
    assert_eq!(resolve_font(FontRole::Body, "DM Sans", 300).weight, 400);
}

#[test]
fn weight_ties_prefer_heavier() {
    assert_eq!(nearest_weight(&[400, 600], 500), 600);
    assert_eq!(nearest_weight(&[], 500), 500);
}

#[test]
fn brand_fonts_resolve_every_role() {
    let brand = BrandStyle {
        headline_font: "Oswald".to_string(),
        body_font: "Unknown Sans".to_string(),
        headline_weight: Some(900),
        ..BrandStyle::default()
    };
    let fonts = ResolvedFonts::for_brand(&brand);
    assert_eq!(fonts.headline.family, "Oswald");
    assert_eq!(fonts.headline.weight, 700);
    assert_eq!(fonts.body.family, "Inter");
    assert_eq!(fonts.label.weight, 600);
    assert_eq!(fonts.cta.weight, 700);
}

#[test]
fn css_family_lists_generic_fallback() {
    let f = resolve_font(FontRole::Body, "Lora", 400);
    assert_eq!(f.css_family(), "'Lora', serif");
}
