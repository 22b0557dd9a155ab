use std::sync::{Arc, LazyLock, OnceLock};

use usvg::fontdb;

static SHARED: LazyLock<Arc<FontCache>> = LazyLock::new(|| Arc::new(FontCache::new(true)));

/// Lazily built font database shared by every rasterization that uses this cache.
///
/// The database is assembled on first use from system fonts (optional) and any in-memory font
/// blobs registered before that point. After construction it is read-only and cheap to clone.
pub struct FontCache {
    load_system_fonts: bool,
    blobs: Vec<Arc<Vec<u8>>>,
    db: OnceLock<Arc<fontdb::Database>>,
}

impl FontCache {
    pub fn new(load_system_fonts: bool) -> Self {
        Self {
            load_system_fonts,
            blobs: Vec::new(),
            db: OnceLock::new(),
        }
    }

    /// Register a TTF/OTF/TTC blob. Ignored if the database was already built.
    pub fn with_font_data(mut self, data: Vec<u8>) -> Self {
        if self.db.get().is_some() {
            tracing::debug!("font cache already built, ignoring late font blob");
            return self;
        }
        self.blobs.push(Arc::new(data));
        self
    }

    /// Process-wide cache backed by system fonts.
    pub fn shared() -> Arc<FontCache> {
        Arc::clone(&SHARED)
    }

    pub fn loads_system_fonts(&self) -> bool {
        self.load_system_fonts
    }

    pub fn database(&self) -> Arc<fontdb::Database> {
        self.db.get_or_init(|| self.build()).clone()
    }

    pub fn face_count(&self) -> usize {
        self.database().len()
    }

    fn build(&self) -> Arc<fontdb::Database> {
        let mut db = fontdb::Database::new();
        if self.load_system_fonts {
            db.load_system_fonts();
        }
        for blob in &self.blobs {
            db.load_font_data(blob.as_ref().clone());
        }
        tracing::debug!(
            faces = db.len(),
            system = self.load_system_fonts,
            blobs = self.blobs.len(),
            "font database built"
        );
        Arc::new(db)
    }

    /// Parse options wired to this cache's database and fallback resolver.
    pub(crate) fn usvg_options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: self.database(),
            font_resolver: font_resolver(),
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("load_system_fonts", &self.load_system_fonts)
            .field("blobs", &self.blobs.len())
            .field("built", &self.db.get().is_some())
            .finish()
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new(true)
    }
}

fn to_fontdb_family(family: &usvg::FontFamily) -> fontdb::Family<'_> {
    match family {
        usvg::FontFamily::Serif => fontdb::Family::Serif,
        usvg::FontFamily::SansSerif => fontdb::Family::SansSerif,
        usvg::FontFamily::Cursive => fontdb::Family::Cursive,
        usvg::FontFamily::Fantasy => fontdb::Family::Fantasy,
        usvg::FontFamily::Monospace => fontdb::Family::Monospace,
        usvg::FontFamily::Named(s) => fontdb::Family::Name(s),
    }
}

fn to_fontdb_stretch(stretch: usvg::FontStretch) -> fontdb::Stretch {
    match stretch {
        usvg::FontStretch::UltraCondensed => fontdb::Stretch::UltraCondensed,
        usvg::FontStretch::ExtraCondensed => fontdb::Stretch::ExtraCondensed,
        usvg::FontStretch::Condensed => fontdb::Stretch::Condensed,
        usvg::FontStretch::SemiCondensed => fontdb::Stretch::SemiCondensed,
        usvg::FontStretch::Normal => fontdb::Stretch::Normal,
        usvg::FontStretch::SemiExpanded => fontdb::Stretch::SemiExpanded,
        usvg::FontStretch::Expanded => fontdb::Stretch::Expanded,
        usvg::FontStretch::ExtraExpanded => fontdb::Stretch::ExtraExpanded,
        usvg::FontStretch::UltraExpanded => fontdb::Stretch::UltraExpanded,
    }
}

fn to_fontdb_style(style: usvg::FontStyle) -> fontdb::Style {
    match style {
        usvg::FontStyle::Normal => fontdb::Style::Normal,
        usvg::FontStyle::Italic => fontdb::Style::Italic,
        usvg::FontStyle::Oblique => fontdb::Style::Oblique,
    }
}

/// Requested families first, then generic fallbacks, then any face at all.
fn font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, db| {
            let mut families: Vec<fontdb::Family<'_>> =
                font.families().iter().map(to_fontdb_family).collect();
            families.push(fontdb::Family::SansSerif);
            families.push(fontdb::Family::Serif);

            let query = fontdb::Query {
                families: &families,
                weight: fontdb::Weight(font.weight()),
                stretch: to_fontdb_stretch(font.stretch()),
                style: to_fontdb_style(font.style()),
            };
            if let Some(id) = db.query(&query) {
                return Some(id);
            }
            db.faces().next().map(|f| f.id)
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font_cache.rs"]
mod tests;
