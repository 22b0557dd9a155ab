use serde::{Deserialize, Serialize};

use crate::foundation::core::{CANVAS_WIDTH, Canvas};

/// Output aspect ratio. Width is always [`CANVAS_WIDTH`]; height follows the ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    #[default]
    #[serde(alias = "1:1")]
    Square,
    #[serde(alias = "4:5")]
    Portrait,
    #[serde(alias = "9:16")]
    Story,
}

/// Base type sizes in pixels before any per-layout multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseSizes {
    pub headline: f64,
    pub subtext: f64,
    pub cta: f64,
    pub label: f64,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [Self::Square, Self::Portrait, Self::Story];

    pub fn canvas_height(self) -> u32 {
        match self {
            Self::Square => 1080,
            Self::Portrait => 1350,
            Self::Story => 1920,
        }
    }

    pub fn canvas(self) -> Canvas {
        Canvas {
            width: CANVAS_WIDTH,
            height: self.canvas_height(),
        }
    }

    /// Sizes grow with canvas height so copy stays legible on taller slides.
    pub fn base_sizes(self) -> BaseSizes {
        match self {
            Self::Square => BaseSizes {
                headline: 72.0,
                subtext: 30.0,
                cta: 26.0,
                label: 22.0,
            },
            Self::Portrait => BaseSizes {
                headline: 80.0,
                subtext: 32.0,
                cta: 28.0,
                label: 24.0,
            },
            Self::Story => BaseSizes {
                headline: 92.0,
                subtext: 36.0,
                cta: 30.0,
                label: 26.0,
            },
        }
    }

    pub fn as_ratio_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "4:5",
            Self::Story => "9:16",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/aspect.rs"]
mod tests;
