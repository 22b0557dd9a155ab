//! Registry of the 26 named layouts.
//!
//! Each id maps to exactly one entry: either a [`ParametricParams`] record consumed by the shared
//! parametric builder, or a bespoke builder function.

use serde::{Deserialize, Serialize};

use crate::layout::bespoke;
use crate::layout::blocks::BuildCtx;
use crate::layout::parametric::{
    Align, GradientSpec, Justify, ParametricParams, TextAlign, gradients,
};
use crate::scene::model::SceneNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutId {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    ScaleHero,
    ScaleCompact,
    MinimalTop,
    MinimalCenter,
    MinimalBottom,
    EditorialSplit,
    EditorialReverse,
    BarTop,
    BarBottom,
    GlassCardCenter,
    GlassCardBottom,
    Diagonal,
    StackedFull,
    CinemaWide,
    VerticalStrip,
    QuoteStyle,
    StatHero,
}

/// Layout used when a request names an id the catalog does not know.
pub const DEFAULT_LAYOUT: LayoutId = LayoutId::BottomLeft;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutCategory {
    Position,
    Scale,
    Editorial,
    Bar,
    Card,
    Creative,
    Minimal,
    Special,
}

impl LayoutCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Scale => "scale",
            Self::Editorial => "editorial",
            Self::Bar => "bar",
            Self::Card => "card",
            Self::Creative => "creative",
            Self::Minimal => "minimal",
            Self::Special => "special",
        }
    }
}

pub type BespokeBuilder = fn(&BuildCtx<'_>) -> Vec<SceneNode>;

#[derive(Clone, Copy, Debug)]
pub enum LayoutKind {
    Parametric(ParametricParams),
    Bespoke(BespokeBuilder),
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutEntry {
    pub id: LayoutId,
    pub category: LayoutCategory,
    pub kind: LayoutKind,
}

impl LayoutEntry {
    pub fn is_parametric(&self) -> bool {
        matches!(self.kind, LayoutKind::Parametric(_))
    }

    pub fn build(&self, ctx: &BuildCtx<'_>) -> Vec<SceneNode> {
        match &self.kind {
            LayoutKind::Parametric(p) => crate::layout::parametric::build(ctx, p),
            LayoutKind::Bespoke(f) => f(ctx),
        }
    }
}

impl LayoutId {
    pub const ALL: [LayoutId; 26] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::Center,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::ScaleHero,
        Self::ScaleCompact,
        Self::MinimalTop,
        Self::MinimalCenter,
        Self::MinimalBottom,
        Self::EditorialSplit,
        Self::EditorialReverse,
        Self::BarTop,
        Self::BarBottom,
        Self::GlassCardCenter,
        Self::GlassCardBottom,
        Self::Diagonal,
        Self::StackedFull,
        Self::CinemaWide,
        Self::VerticalStrip,
        Self::QuoteStyle,
        Self::StatHero,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::CenterLeft => "center-left",
            Self::Center => "center",
            Self::CenterRight => "center-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::ScaleHero => "scale-hero",
            Self::ScaleCompact => "scale-compact",
            Self::MinimalTop => "minimal-top",
            Self::MinimalCenter => "minimal-center",
            Self::MinimalBottom => "minimal-bottom",
            Self::EditorialSplit => "editorial-split",
            Self::EditorialReverse => "editorial-reverse",
            Self::BarTop => "bar-top",
            Self::BarBottom => "bar-bottom",
            Self::GlassCardCenter => "glass-card-center",
            Self::GlassCardBottom => "glass-card-bottom",
            Self::Diagonal => "diagonal",
            Self::StackedFull => "stacked-full",
            Self::CinemaWide => "cinema-wide",
            Self::VerticalStrip => "vertical-strip",
            Self::QuoteStyle => "quote-style",
            Self::StatHero => "stat-hero",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == id)
    }

    /// Like [`LayoutId::parse`], but unknown ids resolve to [`DEFAULT_LAYOUT`].
    ///
    /// Stale ids persisted by older content must keep rendering, so this never fails.
    pub fn resolve(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|| {
            tracing::debug!(
                layout = id,
                fallback = DEFAULT_LAYOUT.as_str(),
                "unknown layout id"
            );
            DEFAULT_LAYOUT
        })
    }

    pub fn entry(self) -> &'static LayoutEntry {
        &CATALOG[self as usize]
    }

    pub fn category(self) -> LayoutCategory {
        self.entry().category
    }
}

const fn position(
    id: LayoutId,
    justify: Justify,
    align: Align,
    text_align: TextAlign,
    gradient: GradientSpec,
) -> LayoutEntry {
    let centered = matches!(align, Align::Center);
    LayoutEntry {
        id,
        category: LayoutCategory::Position,
        kind: LayoutKind::Parametric(ParametricParams {
            justify,
            align,
            text_align,
            gradient,
            headline_scale: 1.0,
            subtext_scale: 1.0,
            headline_max_width: if centered { 0.86 } else { 0.84 },
            subtext_max_width: 0.72,
            padding_y: 0.09,
            uppercase: true,
        }),
    }
}

const fn bespoke(id: LayoutId, category: LayoutCategory, f: BespokeBuilder) -> LayoutEntry {
    LayoutEntry {
        id,
        category,
        kind: LayoutKind::Bespoke(f),
    }
}

/// Indexed by `LayoutId as usize`; order must match [`LayoutId::ALL`].
pub static CATALOG: [LayoutEntry; 26] = [
    position(
        LayoutId::TopLeft,
        Justify::Start,
        Align::Start,
        TextAlign::Left,
        gradients::FROM_TOP,
    ),
    position(
        LayoutId::TopCenter,
        Justify::Start,
        Align::Center,
        TextAlign::Center,
        gradients::FROM_TOP,
    ),
    position(
        LayoutId::TopRight,
        Justify::Start,
        Align::End,
        TextAlign::Right,
        gradients::FROM_TOP,
    ),
    position(
        LayoutId::CenterLeft,
        Justify::Center,
        Align::Start,
        TextAlign::Left,
        gradients::FROM_LEFT,
    ),
    position(
        LayoutId::Center,
        Justify::Center,
        Align::Center,
        TextAlign::Center,
        gradients::CENTER_BAND,
    ),
    position(
        LayoutId::CenterRight,
        Justify::Center,
        Align::End,
        TextAlign::Right,
        gradients::FROM_RIGHT,
    ),
    position(
        LayoutId::BottomLeft,
        Justify::End,
        Align::Start,
        TextAlign::Left,
        gradients::FROM_BOTTOM,
    ),
    position(
        LayoutId::BottomCenter,
        Justify::End,
        Align::Center,
        TextAlign::Center,
        gradients::FROM_BOTTOM,
    ),
    position(
        LayoutId::BottomRight,
        Justify::End,
        Align::End,
        TextAlign::Right,
        gradients::FROM_BOTTOM,
    ),
    LayoutEntry {
        id: LayoutId::ScaleHero,
        category: LayoutCategory::Scale,
        kind: LayoutKind::Parametric(ParametricParams {
            justify: Justify::End,
            align: Align::Start,
            text_align: TextAlign::Left,
            gradient: gradients::FROM_BOTTOM_STRONG,
            headline_scale: 1.3,
            subtext_scale: 1.05,
            headline_max_width: 0.9,
            subtext_max_width: 0.75,
            padding_y: 0.08,
            uppercase: true,
        }),
    },
    LayoutEntry {
        id: LayoutId::ScaleCompact,
        category: LayoutCategory::Scale,
        kind: LayoutKind::Parametric(ParametricParams {
            justify: Justify::End,
            align: Align::Start,
            text_align: TextAlign::Left,
            gradient: gradients::FROM_BOTTOM,
            headline_scale: 0.72,
            subtext_scale: 0.9,
            headline_max_width: 0.62,
            subtext_max_width: 0.58,
            padding_y: 0.08,
            uppercase: true,
        }),
    },
    LayoutEntry {
        id: LayoutId::MinimalTop,
        category: LayoutCategory::Minimal,
        kind: LayoutKind::Parametric(ParametricParams {
            justify: Justify::Start,
            align: Align::Start,
            text_align: TextAlign::Left,
            gradient: gradients::MINIMAL_TOP,
            headline_scale: 0.78,
            subtext_scale: 0.9,
            headline_max_width: 0.7,
            subtext_max_width: 0.6,
            padding_y: 0.1,
            uppercase: false,
        }),
    },
    LayoutEntry {
        id: LayoutId::MinimalCenter,
        category: LayoutCategory::Minimal,
        kind: LayoutKind::Parametric(ParametricParams {
            justify: Justify::Center,
            align: Align::Center,
            text_align: TextAlign::Center,
            gradient: gradients::MINIMAL_WASH,
            headline_scale: 0.8,
            subtext_scale: 0.9,
            headline_max_width: 0.72,
            subtext_max_width: 0.6,
            padding_y: 0.1,
            uppercase: false,
        }),
    },
    LayoutEntry {
        id: LayoutId::MinimalBottom,
        category: LayoutCategory::Minimal,
        kind: LayoutKind::Parametric(ParametricParams {
            justify: Justify::End,
            align: Align::Start,
            text_align: TextAlign::Left,
            gradient: gradients::MINIMAL_BOTTOM,
            headline_scale: 0.78,
            subtext_scale: 0.9,
            headline_max_width: 0.7,
            subtext_max_width: 0.6,
            padding_y: 0.1,
            uppercase: false,
        }),
    },
    bespoke(
        LayoutId::EditorialSplit,
        LayoutCategory::Editorial,
        bespoke::editorial_split,
    ),
    bespoke(
        LayoutId::EditorialReverse,
        LayoutCategory::Editorial,
        bespoke::editorial_reverse,
    ),
    bespoke(LayoutId::BarTop, LayoutCategory::Bar, bespoke::bar_top),
    bespoke(LayoutId::BarBottom, LayoutCategory::Bar, bespoke::bar_bottom),
    bespoke(
        LayoutId::GlassCardCenter,
        LayoutCategory::Card,
        bespoke::glass_card_center,
    ),
    bespoke(
        LayoutId::GlassCardBottom,
        LayoutCategory::Card,
        bespoke::glass_card_bottom,
    ),
    bespoke(LayoutId::Diagonal, LayoutCategory::Creative, bespoke::diagonal),
    bespoke(
        LayoutId::StackedFull,
        LayoutCategory::Creative,
        bespoke::stacked_full,
    ),
    bespoke(
        LayoutId::CinemaWide,
        LayoutCategory::Creative,
        bespoke::cinema_wide,
    ),
    bespoke(
        LayoutId::VerticalStrip,
        LayoutCategory::Creative,
        bespoke::vertical_strip,
    ),
    bespoke(
        LayoutId::QuoteStyle,
        LayoutCategory::Special,
        bespoke::quote_style,
    ),
    bespoke(LayoutId::StatHero, LayoutCategory::Special, bespoke::stat_hero),
];

#[cfg(test)]
#[path = "../../tests/unit/layout/catalog.rs"]
mod tests;
