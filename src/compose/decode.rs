use image::DynamicImage;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::{SlidetypeError, SlidetypeResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::model::request::BackgroundImage;

/// Resampling kernel used when cover-fitting the background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Decode background bytes. The declared mime is tried first; on failure the format is sniffed
/// from the bytes.
pub fn decode_background(bg: &BackgroundImage) -> SlidetypeResult<DynamicImage> {
    if bg.bytes.is_empty() {
        return Err(SlidetypeError::decode(format!(
            "background is empty: {}",
            bg.describe()
        )));
    }

    if let Some(mime) = bg.mime {
        match image::load_from_memory_with_format(&bg.bytes, mime.image_format()) {
            Ok(img) => return Ok(img),
            Err(e) => tracing::debug!(
                declared = mime.as_str(),
                error = %e,
                "declared mime did not decode, sniffing format"
            ),
        }
    }

    image::load_from_memory(&bg.bytes)
        .map_err(|e| SlidetypeError::decode(format!("background {}: {e}", bg.describe())))
}

/// Scale to cover the canvas and center-crop the overflow, returning premultiplied RGBA8.
pub fn cover_fit_premul(img: DynamicImage, canvas: Canvas, filter: ResizeFilter) -> Vec<u8> {
    let fitted = if img.width() == canvas.width && img.height() == canvas.height {
        img
    } else {
        img.resize_to_fill(canvas.width, canvas.height, filter.into())
    };
    let mut data = fitted.into_rgba8().into_raw();
    premultiply_rgba8_in_place(&mut data);
    data
}

#[cfg(test)]
#[path = "../../tests/unit/compose/decode.rs"]
mod tests;
