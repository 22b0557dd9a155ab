pub mod aspect;
pub mod bespoke;
pub mod blocks;
pub mod catalog;
pub mod parametric;

use crate::foundation::error::SlidetypeResult;
use crate::layout::aspect::AspectRatio;
use crate::layout::blocks::BuildCtx;
use crate::layout::catalog::LayoutId;
use crate::model::slide::{BrandStyle, SlideText};
use crate::scene::model::{Container, SceneNode};

/// Build the scene tree for one slide.
///
/// Fails only on invalid input (empty headline). Unknown layout ids render with the default
/// layout.
pub fn build_scene(
    slide: &SlideText,
    brand: &BrandStyle,
    aspect: AspectRatio,
    layout: &str,
) -> SlidetypeResult<SceneNode> {
    slide.validate()?;
    let id = LayoutId::resolve(layout);
    let ctx = BuildCtx::new(slide, brand, aspect);

    let mut children = id.entry().build(&ctx);
    children.extend(ctx.chrome());

    Ok(SceneNode::Container(Container {
        frame: ctx.canvas.rect(),
        children,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/build.rs"]
mod tests;
