//! Slidetype composites typography onto background photos for social carousel slides.
//!
//! A request carries background bytes, slide copy, a brand style, an aspect ratio and one of 26
//! named layouts. The engine builds a scene tree for the layout, rasterizes it to a transparent
//! text layer and blends that layer over the cover-fitted background, returning PNG bytes:
//!
//! - [`composite`] for one-off calls with the default [`Engine`]
//! - [`Engine::composite_batch`] for many slides in parallel
//! - [`build_scene`] and [`scene_to_svg`] to inspect a layout without rasterizing
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod foundation;
mod model;

/// Named layouts and the builders that turn a slide into a scene tree.
pub mod layout;
/// Scene-to-pixels backends.
pub mod render;
/// Backend-agnostic scene tree.
pub mod scene;
/// Headline tokens, font resolution and text measurement.
pub mod text;

pub use crate::assets::font_cache::FontCache;
pub use crate::compose::decode::ResizeFilter;
pub use crate::compose::encode::PngCompression;
pub use crate::compose::pipeline::{Engine, EngineOpts, composite};
pub use crate::foundation::core::{CANVAS_WIDTH, Canvas, Point, Rect, Rgba8};
pub use crate::foundation::error::{SlidetypeError, SlidetypeResult};
pub use crate::layout::aspect::{AspectRatio, BaseSizes};
pub use crate::layout::build_scene;
pub use crate::layout::catalog::{DEFAULT_LAYOUT, LayoutCategory, LayoutId};
pub use crate::model::request::{
    BackgroundImage, CompositeRequest, CompositeResult, ImageMime, OUTPUT_MIME,
};
pub use crate::model::slide::{BrandStyle, Chrome, ColorRoles, SlideText};
pub use crate::render::backend::{BackendKind, RasterBackend, TextLayer, create_backend};
pub use crate::render::resvg_cpu::SvgBackend;
pub use crate::render::svg::scene_to_svg;
pub use crate::scene::model::SceneNode;
