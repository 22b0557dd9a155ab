use std::io::Cursor;

use super::*;
use crate::model::request::ImageMime;

fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn empty_bytes_are_a_decode_error() {
    let err = decode_background(&BackgroundImage::new(vec![], Some(ImageMime::Png))).unwrap_err();
    assert!(matches!(err, SlidetypeError::Decode(_)));
    assert!(err.to_string().contains("image/png"));
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let bg = BackgroundImage::new(b"definitely not an image".to_vec(), Some(ImageMime::Jpeg));
    let err = decode_background(&bg).unwrap_err();
    assert!(matches!(err, SlidetypeError::Decode(_)));
    assert!(err.is_per_slide());
}

#[test]
fn wrong_declared_mime_falls_back_to_sniffing() {
    let bg = BackgroundImage::new(png_bytes(4, 3, [1, 2, 3, 255]), Some(ImageMime::Jpeg));
    let img = decode_background(&bg).unwrap();
    assert_eq!((img.width(), img.height()), (4, 3));
}

#[test]
fn missing_mime_is_sniffed() {
    let bg = BackgroundImage::new(png_bytes(2, 2, [9, 9, 9, 255]), None);
    assert!(decode_background(&bg).is_ok());
}

#[test]
fn cover_fit_fills_canvas_exactly() {
    let canvas = Canvas::new(30, 60).unwrap();
    for (w, h) in [(10, 10), (100, 20), (20, 100), (30, 60)] {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            w,
            h,
            image::Rgba([50, 60, 70, 255]),
        ));
        let data = cover_fit_premul(img, canvas, ResizeFilter::Nearest);
        assert_eq!(data.len(), canvas.pixel_len());
        assert!(data.chunks_exact(4).all(|p| p == [50, 60, 70, 255]));
    }
}

#[test]
fn cover_fit_crops_instead_of_letterboxing() {
    // Left half red, right half blue; a tall canvas keeps only the middle.
    let mut src = image::RgbaImage::new(200, 100);
    for (x, _, p) in src.enumerate_pixels_mut() {
        *p = if x < 100 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        };
    }
    let canvas = Canvas::new(50, 100).unwrap();
    let data = cover_fit_premul(
        image::DynamicImage::ImageRgba8(src),
        canvas,
        ResizeFilter::Nearest,
    );
    assert!(data.chunks_exact(4).all(|p| p[3] == 255));
    let first = &data[0..4];
    assert_eq!(first, [255, 0, 0, 255]);
    let last = &data[data.len() - 4..];
    assert_eq!(last, [0, 0, 255, 255]);
}

#[test]
fn transparent_background_is_premultiplied() {
    let canvas = Canvas::new(2, 2).unwrap();
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        2,
        2,
        image::Rgba([200, 100, 0, 0]),
    ));
    let data = cover_fit_premul(img, canvas, ResizeFilter::Nearest);
    assert!(data.iter().all(|&b| b == 0));
}
