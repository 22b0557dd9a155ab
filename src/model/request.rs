use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::layout::aspect::AspectRatio;
use crate::model::slide::{BrandStyle, SlideText};

/// Mime type of every composited output.
pub const OUTPUT_MIME: &str = "image/png";

const XXH3_SEED: u64 = 0x5d1d_e7e9_a4c3_0b17;

/// Declared background encoding. Used as a decode hint; bytes are sniffed when it is wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg", alias = "image/jpg")]
    Jpeg,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMime {
    pub fn parse(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" | "png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" | "jpeg" | "jpg" => Some(Self::Jpeg),
            "image/webp" | "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Webp => image::ImageFormat::WebP,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackgroundImage {
    pub bytes: Vec<u8>,
    pub mime: Option<ImageMime>,
}

impl BackgroundImage {
    pub fn new(bytes: Vec<u8>, mime: Option<ImageMime>) -> Self {
        Self { bytes, mime }
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "{} ({} bytes)",
            self.mime.map_or("unknown mime", ImageMime::as_str),
            self.bytes.len()
        )
    }
}

/// Everything needed to composite one slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeRequest {
    pub background: BackgroundImage,
    pub slide: SlideText,
    pub brand: BrandStyle,
    pub aspect_ratio: AspectRatio,
    /// One of the catalog ids. Unknown ids render with the default layout.
    pub layout: String,
}

impl CompositeRequest {
    pub fn new(background: BackgroundImage, slide: SlideText) -> Self {
        Self {
            background,
            slide,
            brand: BrandStyle::default(),
            aspect_ratio: AspectRatio::default(),
            layout: crate::layout::catalog::DEFAULT_LAYOUT.as_str().to_string(),
        }
    }

    pub fn with_brand(mut self, brand: BrandStyle) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Stable 64-bit key for caching composited output.
    ///
    /// Requests that compare equal always produce the same key within a release.
    pub fn fingerprint(&self) -> u64 {
        let mut h = StableHasher::new();
        h.write_bytes(&self.background.bytes);
        h.write_opt_str(self.background.mime.map(ImageMime::as_str));

        let s = &self.slide;
        h.write_str(&s.headline);
        h.write_opt_str(s.subtext.as_deref());
        h.write_opt_str(s.cta.as_deref());
        h.write_u32(s.accent_words.len() as u32);
        for w in &s.accent_words {
            h.write_str(w);
        }
        h.write_opt_str(s.purpose_label.as_deref());
        h.write_opt_u32(s.slide_number);
        h.write_opt_u32(s.slide_total);

        let b = &self.brand;
        h.write_str(&b.headline_font);
        h.write_str(&b.body_font);
        h.write_opt_u32(b.headline_weight.map(u32::from));
        h.write_opt_u32(b.body_weight.map(u32::from));
        for c in [b.colors.text, b.colors.accent, b.colors.subtext, b.colors.muted] {
            h.write_bytes(&[c.r, c.g, c.b, c.a]);
        }
        match b.colors.surface {
            Some(c) => h.write_bytes(&[1, c.r, c.g, c.b, c.a]),
            None => h.write_u8(0),
        }
        match &b.chrome {
            Some(c) => {
                h.write_u8(1);
                h.write_opt_str(c.top_left.as_deref());
                h.write_opt_str(c.top_right.as_deref());
            }
            None => h.write_u8(0),
        }

        h.write_str(self.aspect_ratio.as_ratio_str());
        h.write_str(&self.layout);
        h.finish()
    }

    /// One-line summary used in error logs.
    pub(crate) fn describe(&self) -> String {
        format!(
            "layout={:?} aspect={} background={} headline={:?} subtext={:?} cta={:?} label={:?} accents={:?} fonts=({:?}, {:?})",
            self.layout,
            self.aspect_ratio.as_ratio_str(),
            self.background.describe(),
            self.slide.headline,
            self.slide.subtext,
            self.slide.cta,
            self.slide.purpose_label,
            self.slide.accent_words,
            self.brand.headline_font,
            self.brand.body_font,
        )
    }
}

/// Final composited slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeResult {
    /// PNG-encoded image.
    pub bytes: Vec<u8>,
    /// Always [`OUTPUT_MIME`].
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.write_u64(b.len() as u64);
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.inner.update(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.inner.update(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.inner.update(&v.to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_str(&mut self, s: Option<&str>) {
        match s {
            Some(s) => {
                self.write_u8(1);
                self.write_str(s);
            }
            None => self.write_u8(0),
        }
    }

    fn write_opt_u32(&mut self, v: Option<u32>) {
        match v {
            Some(v) => {
                self.write_u8(1);
                self.write_u32(v);
            }
            None => self.write_u8(0),
        }
    }

    fn finish(&self) -> u64 {
        self.inner.digest()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/request.rs"]
mod tests;
