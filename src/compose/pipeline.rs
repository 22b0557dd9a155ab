use std::sync::{Arc, LazyLock};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assets::font_cache::FontCache;
use crate::compose::blend::over_in_place;
use crate::compose::decode::{ResizeFilter, cover_fit_premul, decode_background};
use crate::compose::encode::{PngCompression, encode_png};
use crate::foundation::error::{SlidetypeError, SlidetypeResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::model::request::{CompositeRequest, CompositeResult, OUTPUT_MIME};
use crate::render::backend::{BackendKind, RasterBackend, TextLayer, create_backend};
use crate::render::svg::scene_to_svg;
use crate::scene::model::SceneNode;

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::default);

/// Engine configuration. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOpts {
    pub resize_filter: ResizeFilter,
    pub png_compression: PngCompression,
    /// Worker threads for [`Engine::composite_batch`]. `None` uses the global rayon pool.
    pub threads: Option<usize>,
    pub load_system_fonts: bool,
    pub backend: BackendKind,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            resize_filter: ResizeFilter::default(),
            png_compression: PngCompression::default(),
            threads: None,
            load_system_fonts: true,
            backend: BackendKind::default(),
        }
    }
}

/// Composites text overlays onto backgrounds.
///
/// An engine is immutable once built and safe to share across threads; every call is a pure
/// function of its request.
pub struct Engine {
    opts: EngineOpts,
    fonts: Arc<FontCache>,
    backend: Box<dyn RasterBackend>,
    pool: Option<rayon::ThreadPool>,
}

impl Engine {
    /// Build an engine. System fonts come from the process-wide [`FontCache::shared`].
    pub fn new(opts: EngineOpts) -> SlidetypeResult<Self> {
        let fonts = if opts.load_system_fonts {
            FontCache::shared()
        } else {
            Arc::new(FontCache::new(false))
        };
        Self::with_fonts(opts, fonts)
    }

    /// Build an engine around an explicit font cache, e.g. one holding bundled brand fonts.
    pub fn with_fonts(opts: EngineOpts, fonts: Arc<FontCache>) -> SlidetypeResult<Self> {
        let pool = match opts.threads {
            Some(n) => Some(build_thread_pool(n)?),
            None => None,
        };
        Ok(Self::assemble(opts, fonts, pool))
    }

    fn assemble(opts: EngineOpts, fonts: Arc<FontCache>, pool: Option<rayon::ThreadPool>) -> Self {
        let backend = create_backend(opts.backend, Arc::clone(&fonts));
        Self {
            opts,
            fonts,
            backend,
            pool,
        }
    }

    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    pub fn fonts(&self) -> &Arc<FontCache> {
        &self.fonts
    }

    pub fn build_scene(&self, req: &CompositeRequest) -> SlidetypeResult<SceneNode> {
        crate::layout::build_scene(&req.slide, &req.brand, req.aspect_ratio, &req.layout)
    }

    /// Scene serialized as SVG, as handed to the rasterizer.
    pub fn render_svg(&self, req: &CompositeRequest) -> SlidetypeResult<String> {
        let scene = self.build_scene(req)?;
        Ok(scene_to_svg(&scene, req.aspect_ratio.canvas()))
    }

    /// The transparent text layer alone, without a background.
    pub fn render_layer(&self, req: &CompositeRequest) -> SlidetypeResult<TextLayer> {
        let scene = self.build_scene(req)?;
        self.rasterize(&scene, req)
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(layout = %req.layout, aspect = req.aspect_ratio.as_ratio_str())
    )]
    pub fn composite(&self, req: &CompositeRequest) -> SlidetypeResult<CompositeResult> {
        let out = self.composite_inner(req);
        if let Err(SlidetypeError::InternalLayout(msg)) = &out {
            tracing::error!(error = %msg, request = %req.describe(), "internal layout defect");
        }
        out
    }

    /// Composite many slides in parallel. Results are in input order; one failing slide does not
    /// affect the others.
    pub fn composite_batch(
        &self,
        reqs: &[CompositeRequest],
    ) -> Vec<SlidetypeResult<CompositeResult>> {
        let run = || -> Vec<SlidetypeResult<CompositeResult>> {
            reqs.par_iter().map(|r| self.composite(r)).collect()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn rasterize(&self, scene: &SceneNode, req: &CompositeRequest) -> SlidetypeResult<TextLayer> {
        let canvas = req.aspect_ratio.canvas();
        let layer = self.backend.rasterize(scene, canvas)?;
        if layer.width != canvas.width || layer.height != canvas.height {
            return Err(SlidetypeError::internal_layout(format!(
                "text layer is {}x{}, canvas is {}x{}",
                layer.width, layer.height, canvas.width, canvas.height
            )));
        }
        Ok(layer)
    }

    fn composite_inner(&self, req: &CompositeRequest) -> SlidetypeResult<CompositeResult> {
        let canvas = req.aspect_ratio.canvas();
        let scene = self.build_scene(req)?;
        let background = decode_background(&req.background)?;
        let layer = self.rasterize(&scene, req)?;

        let mut pixels = cover_fit_premul(background, canvas, self.opts.resize_filter);
        over_in_place(&mut pixels, &layer.data)?;
        unpremultiply_rgba8_in_place(&mut pixels);

        let bytes = encode_png(&pixels, canvas, self.opts.png_compression)?;
        tracing::debug!(bytes = bytes.len(), "slide composited");
        Ok(CompositeResult {
            bytes,
            mime: OUTPUT_MIME,
            width: canvas.width,
            height: canvas.height,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::assemble(EngineOpts::default(), FontCache::shared(), None)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("opts", &self.opts)
            .field("fonts", &self.fonts)
            .field("backend", &self.backend.kind())
            .finish()
    }
}

/// Composite one slide with a process-wide default engine.
pub fn composite(req: &CompositeRequest) -> SlidetypeResult<CompositeResult> {
    DEFAULT_ENGINE.composite(req)
}

fn build_thread_pool(threads: usize) -> SlidetypeResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(SlidetypeError::input("opts.threads", "must be > 0"));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pipeline.rs"]
mod tests;
