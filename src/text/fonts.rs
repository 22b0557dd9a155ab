use crate::model::slide::BrandStyle;

/// Which part of the brand typography a font is resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Headline,
    Body,
}

impl FontRole {
    pub fn default_family(self) -> &'static str {
        match self {
            Self::Headline => "Montserrat",
            Self::Body => "Inter",
        }
    }

    pub fn default_weight(self) -> u16 {
        match self {
            Self::Headline => 800,
            Self::Body => 400,
        }
    }
}

/// CSS generic family appended after the concrete family in rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    SansSerif,
    Serif,
}

impl GenericFamily {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Serif => "serif",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FamilyEntry {
    pub name: &'static str,
    /// Ascending.
    pub weights: &'static [u16],
    pub generic: GenericFamily,
}

/// Families the engine knows how to set. Anything else falls back to the role default.
pub const FONT_CATALOG: &[FamilyEntry] = &[
    FamilyEntry {
        name: "Inter",
        weights: &[300, 400, 500, 600, 700, 800, 900],
        generic: GenericFamily::SansSerif,
    },
    FamilyEntry {
        name: "Montserrat",
        weights: &[300, 400, 500, 600, 700, 800, 900],
        generic: GenericFamily::SansSerif,
    },
    FamilyEntry {
        name: "Poppins",
        weights: &[300, 400, 500, 600, 700, 800, 900],
        generic: GenericFamily::SansSerif,
    },
    FamilyEntry {
        name: "Playfair Display",
        weights: &[400, 500, 600, 700, 800, 900],
        generic: GenericFamily::Serif,
    },
    FamilyEntry {
        name: "DM Sans",
        weights: &[400, 500, 700],
        generic: GenericFamily::SansSerif,
    },
    FamilyEntry {
        name: "Roboto",
        weights: &[300, 400, 500, 700, 900],
        generic: GenericFamily::SansSerif,
    },
    FamilyEntry {
        name: "Oswald",
        weights: &[300, 400, 500, 600, 700],
        generic: GenericFamily::SansSerif,
    },
    FamilyEntry {
        name: "Bebas Neue",
        weights: &[400],
        generic: GenericFamily::SansSerif,
    },
    FamilyEntry {
        name: "Lora",
        weights: &[400, 500, 600, 700],
        generic: GenericFamily::Serif,
    },
    FamilyEntry {
        name: "Space Grotesk",
        weights: &[300, 400, 500, 600, 700],
        generic: GenericFamily::SansSerif,
    },
];

/// Concrete family + weight that text is set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle {
    pub family: &'static str,
    pub weight: u16,
    pub generic: GenericFamily,
}

impl FontHandle {
    /// `font-family` value: the family first, then its generic fallback.
    pub fn css_family(&self) -> String {
        format!("'{}', {}", self.family, self.generic.css_name())
    }
}

fn lookup_family(name: &str) -> Option<&'static FamilyEntry> {
    let name = name.trim();
    FONT_CATALOG
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Nearest available weight; ties go to the heavier face.
pub fn nearest_weight(available: &[u16], requested: u16) -> u16 {
    available
        .iter()
        .copied()
        .min_by_key(|&w| (w.abs_diff(requested), std::cmp::Reverse(w)))
        .unwrap_or(requested)
}

/// Resolve a brand-supplied family name to a registered face.
///
/// Unknown families fall back to the role's default family; unavailable weights snap to the
/// nearest weight the family ships.
pub fn resolve_font(role: FontRole, family: &str, weight: u16) -> FontHandle {
    let entry = match lookup_family(family) {
        Some(e) => e,
        None => {
            tracing::debug!(family, ?role, "unknown font family, using role default");
            lookup_family(role.default_family())
                .unwrap_or(&FONT_CATALOG[0])
        }
    };
    FontHandle {
        family: entry.name,
        weight: nearest_weight(entry.weights, weight),
        generic: entry.generic,
    }
}

/// Every face a layout may draw with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedFonts {
    pub headline: FontHandle,
    pub body: FontHandle,
    pub label: FontHandle,
    pub cta: FontHandle,
}

impl ResolvedFonts {
    pub fn for_brand(brand: &BrandStyle) -> Self {
        let headline_weight = brand
            .headline_weight
            .unwrap_or(FontRole::Headline.default_weight());
        let body_weight = brand.body_weight.unwrap_or(FontRole::Body.default_weight());
        Self {
            headline: resolve_font(FontRole::Headline, &brand.headline_font, headline_weight),
            body: resolve_font(FontRole::Body, &brand.body_font, body_weight),
            label: resolve_font(FontRole::Body, &brand.body_font, 600),
            cta: resolve_font(FontRole::Body, &brand.body_font, 700),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
