//! Thresholder: reads one channel of a decoded image and emits an
//! inside/outside mask.

use crate::types::{Image8, Mask};

/// Which channel a pixel's inside/outside state is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSelector {
    /// Channel 0 of the decode.
    Luminance,
    /// Channel 1 of a 2-channel (grayscale+alpha) decode.
    Alpha,
}

/// The fixed threshold byte: half of 255, rounded down. Not
/// configurable — changing it would silently break bit-exact
/// reproducibility with reference outputs.
const THRESHOLD_BYTE: u8 = 127;

/// `mask[p] = (byte(p) > 127) XOR invert`.
pub fn threshold(image: &Image8, channel_selector: ChannelSelector, invert: bool) -> Mask {
    let channel = match channel_selector {
        ChannelSelector::Luminance => 0,
        ChannelSelector::Alpha => 1,
    };
    let mut bits = Vec::with_capacity(image.width as usize * image.height as usize);
    for y in 0..image.height {
        for x in 0..image.width {
            let byte = image.sample(x, y, channel);
            bits.push((byte > THRESHOLD_BYTE) ^ invert);
        }
    }
    Mask {
        width: image.width,
        height: image.height,
        bits,
    }
}
