//! Decoder/encoder boundary: converts between files on disk and this
//! crate's flat buffer types.
//!
//! Channel ordering on decode: this crate decodes through `image`'s
//! `into_luma_alpha8()`, which gives channel 0 = luminance (any RGB
//! source already collapsed by the crate) and channel 1 = alpha
//! (synthesized `0xFF` when the source has none). See DESIGN.md for
//! why this resolves spec.md §9's open question on channel ordering.

use crate::cli::Format;
use crate::error::{Result, SdfError};
use crate::types::{Image8, Out8};
use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::tga::TgaEncoder;
use image::{ColorType, ImageEncoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Decodes an image file into a 2-channel (luminance, alpha) buffer.
pub fn decode(path: &Path) -> Result<Image8> {
    let dynamic = image::open(path)?;
    let buf = dynamic.into_luma_alpha8();
    let (width, height) = buf.dimensions();
    Ok(Image8 {
        width,
        height,
        channels: 2,
        data: buf.into_raw(),
    })
}

/// Encodes a single-channel 8-bit raster to `path` in `format`.
/// `quality` only affects the JPEG encoder.
pub fn encode(path: &Path, format: Format, image: &Out8, quality: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| SdfError::Encode(e.to_string()))?;
    let writer = BufWriter::new(file);

    let result = match format {
        Format::Png => {
            PngEncoder::new(writer).write_image(&image.data, image.width, image.height, ColorType::L8.into())
        }
        Format::Bmp => {
            BmpEncoder::new(writer).write_image(&image.data, image.width, image.height, ColorType::L8.into())
        }
        Format::Jpg => JpegEncoder::new_with_quality(writer, quality).write_image(
            &image.data,
            image.width,
            image.height,
            ColorType::L8.into(),
        ),
        Format::Tga => {
            TgaEncoder::new(writer).write_image(&image.data, image.width, image.height, ColorType::L8.into())
        }
    };

    result.map_err(|e| SdfError::Encode(e.to_string()))
}
