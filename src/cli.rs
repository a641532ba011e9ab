//! Command line surface.

use crate::error::{Result, SdfError};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Output image format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum Format {
    Png,
    Bmp,
    Jpg,
    Tga,
}

impl Format {
    /// Infers a format from an output path's extension, falling back
    /// to PNG when the extension is missing or unrecognized.
    pub fn infer(path: &Path) -> Format {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("bmp") => Format::Bmp,
            Some("jpg") | Some("jpeg") => Format::Jpg,
            Some("tga") => Format::Tga,
            _ => Format::Png,
        }
    }
}

/// Converts a raster image into an 8-bit signed distance field.
#[derive(Debug, Parser)]
#[command(name = "sdfgen", version, about)]
pub struct Cli {
    /// Input image path.
    pub input: PathBuf,

    /// Output image path.
    pub output: PathBuf,

    /// Maximum signed distance represented by the output, in pixels.
    #[arg(long, default_value_t = 4)]
    pub spread: i32,

    /// JPEG quality (1..=100); ignored for other formats.
    #[arg(long, default_value_t = 100)]
    pub quality: u8,

    /// Output format; inferred from the output extension if omitted.
    #[arg(long)]
    pub format: Option<Format>,

    /// Flip the inside/outside comparison.
    #[arg(long)]
    pub invert: bool,

    /// Threshold the luminance channel instead of the alpha channel.
    #[arg(long)]
    pub luminance: bool,

    /// Use an asymmetric [0, spread] source range instead of
    /// [-spread, spread].
    #[arg(long)]
    pub asymmetric: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validates numeric arguments and resolves the output format,
    /// matching the `InvalidArguments` contract in spec.md §7.
    pub fn resolved_format(&self) -> Result<Format> {
        if self.spread <= 0 {
            return Err(SdfError::InvalidArguments(format!(
                "spread must be a positive integer, got {}",
                self.spread
            )));
        }
        if self.quality < 1 || self.quality > 100 {
            return Err(SdfError::InvalidArguments(format!(
                "quality must be in 1..=100, got {}",
                self.quality
            )));
        }
        Ok(self.format.unwrap_or_else(|| Format::infer(&self.output)))
    }
}
