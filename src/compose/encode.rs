use anyhow::Context;
use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::SlidetypeResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<PngCompression> for CompressionType {
    fn from(c: PngCompression) -> Self {
        match c {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

/// Encode straight-alpha RGBA8 as PNG.
pub fn encode_png(
    rgba: &[u8],
    canvas: Canvas,
    compression: PngCompression,
) -> SlidetypeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(rgba.len() / 2);
    PngEncoder::new_with_quality(&mut out, compression.into(), PngFilter::Adaptive)
        .write_image(
            rgba,
            canvas.width,
            canvas.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out)
}
