use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{SlidetypeError, SlidetypeResult};
use crate::text::tokens::strip_markers;

/// Copy for one slide of a carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideText {
    /// Main line of the slide. The only mandatory field.
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    /// Headline tokens highlighted with the accent color (case-insensitive, exact token).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accent_words: Vec<String>,
    /// Short purpose tag rendered as a label above the headline (`TIP`, `STEP 2`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_total: Option<u32>,
}

impl SlideText {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SlidetypeResult<()> {
        if self.headline.trim().is_empty() {
            return Err(SlidetypeError::input(
                "slide.headline",
                "headline must be non-empty",
            ));
        }
        if strip_markers(&self.headline).trim().is_empty() {
            return Err(SlidetypeError::input(
                "slide.headline",
                "headline has no text besides accent markers",
            ));
        }
        Ok(())
    }

    pub fn subtext(&self) -> Option<&str> {
        non_empty(self.subtext.as_deref())
    }

    pub fn cta(&self) -> Option<&str> {
        non_empty(self.cta.as_deref())
    }

    pub fn purpose_label(&self) -> Option<&str> {
        non_empty(self.purpose_label.as_deref())
    }

    /// `"02 / 07"` style counter, present only when both number and total are set.
    pub fn counter(&self) -> Option<String> {
        match (self.slide_number, self.slide_total) {
            (Some(n), Some(t)) if t > 0 => Some(format!("{n:02} / {t:02}")),
            _ => None,
        }
    }
}

/// Brand color roles. Omitted roles take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRoles {
    pub text: Rgba8,
    pub accent: Rgba8,
    pub subtext: Rgba8,
    pub muted: Rgba8,
    /// Fill for bars, bands, strips and cards. Near-black when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<Rgba8>,
}

impl Default for ColorRoles {
    fn default() -> Self {
        Self {
            text: Rgba8::WHITE,
            accent: Rgba8::rgb(0xff, 0xd6, 0x0a),
            subtext: Rgba8::rgb(0xe5, 0xe5, 0xe5),
            muted: Rgba8::rgb(0xa3, 0xa3, 0xa3),
            surface: None,
        }
    }
}

impl ColorRoles {
    pub fn surface(&self) -> Rgba8 {
        self.surface.unwrap_or(Rgba8::rgb(0x0c, 0x0c, 0x0e))
    }
}

/// Persistent labels repeated on every slide of a carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chrome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right: Option<String>,
}

impl Chrome {
    pub fn top_left(&self) -> Option<&str> {
        non_empty(self.top_left.as_deref())
    }

    pub fn top_right(&self) -> Option<&str> {
        non_empty(self.top_right.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.top_left().is_none() && self.top_right().is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandStyle {
    #[serde(default = "default_headline_font")]
    pub headline_font: String,
    #[serde(default = "default_body_font")]
    pub body_font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<u16>,
    #[serde(default)]
    pub colors: ColorRoles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome: Option<Chrome>,
}

impl Default for BrandStyle {
    fn default() -> Self {
        Self {
            headline_font: default_headline_font(),
            body_font: default_body_font(),
            headline_weight: None,
            body_weight: None,
            colors: ColorRoles::default(),
            chrome: None,
        }
    }
}

impl BrandStyle {
    /// Chrome labels, if any non-empty label is configured.
    pub fn chrome(&self) -> Option<&Chrome> {
        self.chrome.as_ref().filter(|c| !c.is_empty())
    }
}

fn default_headline_font() -> String {
    "Montserrat".to_string()
}

fn default_body_font() -> String {
    "Inter".to_string()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/model/slide.rs"]
mod tests;
