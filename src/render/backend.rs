use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assets::font_cache::FontCache;
use crate::foundation::core::Canvas;
use crate::foundation::error::SlidetypeResult;
use crate::scene::model::SceneNode;

/// A rasterized text layer: transparent except where the scene draws.
#[derive(Clone, Debug)]
pub struct TextLayer {
    pub width: u32,
    pub height: u32,
    /// Premultiplied RGBA8, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl TextLayer {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn coverage(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

/// Turns a scene tree into pixels.
///
/// Implementations must be deterministic: the same scene and canvas always produce the same
/// bytes.
pub trait RasterBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    fn rasterize(&self, scene: &SceneNode, canvas: Canvas) -> SlidetypeResult<TextLayer>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// SVG serialization rasterized with `resvg`.
    #[default]
    Svg,
}

pub fn create_backend(kind: BackendKind, fonts: Arc<FontCache>) -> Box<dyn RasterBackend> {
    match kind {
        BackendKind::Svg => Box::new(crate::render::resvg_cpu::SvgBackend::new(fonts)),
    }
}
