//! Orchestration: wires the decoder, thresholder, seed builder, EDT,
//! combiner, quantizer, and encoder into one run, parameterized by a
//! `Context` built from the resolved CLI options rather than any
//! global/static state (spec.md §9's "global program state" note).

use crate::cli::{Cli, Format};
use crate::combine::combine;
use crate::edt::transform_2d_both;
use crate::error::Result;
use crate::image_io::{decode, encode};
use crate::quantize::quantize;
use crate::seed::{seed, Polarity};
use crate::threshold::{threshold, ChannelSelector};
use std::path::PathBuf;

/// Resolved, validated run configuration. Built once from `Cli` and
/// then threaded through every stage explicitly.
pub struct Context {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: Format,
    pub quality: u8,
    pub spread: i32,
    pub invert: bool,
    pub channel: ChannelSelector,
    pub asymmetric: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Context> {
        let format = cli.resolved_format()?;
        Ok(Context {
            input: cli.input.clone(),
            output: cli.output.clone(),
            format,
            quality: cli.quality,
            spread: cli.spread,
            invert: cli.invert,
            channel: if cli.luminance {
                ChannelSelector::Luminance
            } else {
                ChannelSelector::Alpha
            },
            asymmetric: cli.asymmetric,
        })
    }
}

/// Runs the full pipeline end to end: decode, threshold, seed both
/// sides, transform both sides, combine, quantize, encode.
pub fn run(ctx: &Context) -> Result<()> {
    log::info!("decoding {}", ctx.input.display());
    let image = decode(&ctx.input)?;

    log::debug!("thresholding {}x{} image", image.width, image.height);
    let mask = threshold(&image, ctx.channel, ctx.invert);

    let mut f_in = seed(&mask, Polarity::SeedsAreTrue);
    let mut f_out = seed(&mask, Polarity::SeedsAreFalse);

    log::debug!("running distance transform");
    transform_2d_both(&mut f_in, &mut f_out);

    let signed = combine(&f_in, &f_out);
    let out = quantize(&signed, ctx.spread, ctx.asymmetric);

    log::info!("encoding {}", ctx.output.display());
    encode(&ctx.output, ctx.format, &out, ctx.quality)?;

    Ok(())
}
