use super::*;
use crate::foundation::core::{Rect, Rgba8};
use crate::scene::model::{Container, GradientDirection, GradientOverlay, GradientStop, SolidBlock};

fn backend() -> SvgBackend {
    SvgBackend::new(Arc::new(FontCache::new(false)))
}

fn root(children: Vec<SceneNode>, canvas: Canvas) -> SceneNode {
    SceneNode::Container(Container {
        frame: canvas.rect(),
        children,
    })
}

fn px(layer: &TextLayer, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * layer.width + x) * 4) as usize;
    [
        layer.data[i],
        layer.data[i + 1],
        layer.data[i + 2],
        layer.data[i + 3],
    ]
}

#[test]
fn empty_scene_is_transparent() {
    let canvas = Canvas::new(64, 48).unwrap();
    let layer = backend().rasterize(&root(vec![], canvas), canvas).unwrap();
    assert_eq!((layer.width, layer.height), (64, 48));
    assert_eq!(layer.data.len(), canvas.pixel_len());
    assert_eq!(layer.coverage(), 0);
}

#[test]
fn solid_block_paints_premultiplied() {
    let canvas = Canvas::new(40, 40).unwrap();
    let scene = root(
        vec![SceneNode::SolidBlock(SolidBlock {
            frame: Rect::new(10.0, 10.0, 30.0, 30.0),
            color: Rgba8::rgba(255, 0, 0, 128),
            radius: 0.0,
        })],
        canvas,
    );
    let layer = backend().rasterize(&scene, canvas).unwrap();

    let inside = px(&layer, 20, 20);
    assert!((i32::from(inside[3]) - 128).abs() <= 1);
    assert!(inside[0] <= inside[3]);
    assert!((i32::from(inside[0]) - i32::from(inside[3])).abs() <= 1);
    assert_eq!(px(&layer, 2, 2), [0, 0, 0, 0]);
}

#[test]
fn gradient_ramps_along_its_direction() {
    let canvas = Canvas::new(10, 100).unwrap();
    let scene = root(
        vec![SceneNode::GradientOverlay(GradientOverlay {
            frame: canvas.rect(),
            direction: GradientDirection::ToBottom,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: Rgba8::BLACK.with_opacity(0.0),
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgba8::BLACK.with_opacity(1.0),
                },
            ],
        })],
        canvas,
    );
    let layer = backend().rasterize(&scene, canvas).unwrap();
    let top = px(&layer, 5, 2)[3];
    let mid = px(&layer, 5, 50)[3];
    let bottom = px(&layer, 5, 97)[3];
    assert!(top < mid && mid < bottom);
}

#[test]
fn invalid_scene_is_internal_layout_error() {
    let canvas = Canvas::new(16, 16).unwrap();
    let scene = root(
        vec![SceneNode::SolidBlock(SolidBlock {
            frame: Rect::new(0.0, 0.0, f64::NAN, 4.0),
            color: Rgba8::WHITE,
            radius: 0.0,
        })],
        canvas,
    );
    let err = backend().rasterize(&scene, canvas).unwrap_err();
    assert!(matches!(err, SlidetypeError::InternalLayout(_)));
}

#[test]
fn factory_builds_svg_backend() {
    let b = crate::render::backend::create_backend(
        BackendKind::Svg,
        Arc::new(FontCache::new(false)),
    );
    assert_eq!(b.kind(), BackendKind::Svg);
}
