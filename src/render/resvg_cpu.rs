use std::sync::Arc;

use anyhow::Context;

use crate::assets::font_cache::FontCache;
use crate::foundation::core::Canvas;
use crate::foundation::error::{SlidetypeError, SlidetypeResult};
use crate::render::backend::{BackendKind, RasterBackend, TextLayer};
use crate::render::svg::scene_to_svg;
use crate::scene::model::SceneNode;

pub struct SvgBackend {
    fonts: Arc<FontCache>,
}

impl SvgBackend {
    pub fn new(fonts: Arc<FontCache>) -> Self {
        Self { fonts }
    }

    pub fn parse(&self, svg: &str) -> SlidetypeResult<usvg::Tree> {
        let opts = self.fonts.usvg_options();
        let tree = usvg::Tree::from_str(svg, &opts).context("parse scene svg")?;
        Ok(tree)
    }
}

impl RasterBackend for SvgBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Svg
    }

    #[tracing::instrument(level = "debug", skip_all, fields(w = canvas.width, h = canvas.height))]
    fn rasterize(&self, scene: &SceneNode, canvas: Canvas) -> SlidetypeResult<TextLayer> {
        scene.validate(canvas)?;
        let svg = scene_to_svg(scene, canvas);
        let tree = self.parse(&svg).map_err(|e| {
            SlidetypeError::internal_layout(format!("scene svg rejected by parser: {e}"))
        })?;
        let data = rasterize_tree_to_premul_rgba8(&tree, canvas)?;
        Ok(TextLayer {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }
}

pub(crate) fn rasterize_tree_to_premul_rgba8(
    tree: &usvg::Tree,
    canvas: Canvas,
) -> SlidetypeResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| SlidetypeError::internal_layout("failed to allocate text layer pixmap"))?;

    let sx = canvas.width as f32 / tree.size().width();
    let sy = canvas.height as f32 / tree.size().height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap.take())
}

#[cfg(test)]
#[path = "../../tests/unit/render/resvg_cpu.rs"]
mod tests;
