//! Quantizer: clamps the signed distance field to a spread window and
//! linearly remaps it onto `[0, 255]`.

use crate::types::{Out8, SignedField};

/// `spread` is the maximum signed distance (in pixels) represented by
/// the output encoding; `asymmetric` selects a `[0, spread]` source
/// range instead of `[-spread, spread]`.
pub fn quantize(signed: &SignedField, spread: i32, asymmetric: bool) -> Out8 {
    debug_assert!(spread > 0);
    let spread = spread as f32;
    let (lo, hi) = if asymmetric { (0.0, spread) } else { (-spread, spread) };
    let data = signed
        .data
        .iter()
        .map(|&v| quantize_one(v, lo, hi))
        .collect();
    Out8 {
        width: signed.width,
        height: signed.height,
        data,
    }
}

fn quantize_one(v: f32, lo: f32, hi: f32) -> u8 {
    let clamped = v.clamp(lo, hi);
    let normalized = (clamped - lo) / (hi - lo);
    let byte = (normalized * 255.0).round_ties_even();
    byte.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed(values: &[f32]) -> SignedField {
        SignedField {
            width: values.len() as u32,
            height: 1,
            data: values.to_vec(),
        }
    }

    #[test]
    fn test_symmetric_quantization_midpoint_is_128_ish() {
        let out = quantize(&signed(&[0.0]), 2, false);
        // round((0 - (-2)) / 4 * 255) = round(127.5) -> ties-to-even -> 128
        assert_eq!(out.data[0], 128);
    }

    #[test]
    fn test_symmetric_quantization_endpoints() {
        let out = quantize(&signed(&[-2.0, 2.0]), 2, false);
        assert_eq!(out.data, vec![0, 255]);
    }

    #[test]
    fn test_saturates_beyond_spread() {
        let out = quantize(&signed(&[-10.0, 10.0]), 2, false);
        assert_eq!(out.data, vec![0, 255]);
    }

    #[test]
    fn test_infinity_saturates_to_255() {
        let out = quantize(&signed(&[f32::INFINITY, f32::NEG_INFINITY]), 4, false);
        assert_eq!(out.data, vec![255, 0]);
    }

    #[test]
    fn test_asymmetric_quantization_clamps_negative_to_zero() {
        let out = quantize(&signed(&[-0.5]), 4, true);
        assert_eq!(out.data[0], 0);
    }

    #[test]
    fn test_asymmetric_vs_symmetric_differ() {
        let asym = quantize(&signed(&[-0.5]), 4, true).data[0];
        let sym = quantize(&signed(&[-0.5]), 4, false).data[0];
        assert_eq!(asym, 0);
        assert_eq!(sym, 112);
    }

    #[test]
    fn test_monotone_nondecreasing() {
        let spread = 3;
        let values: Vec<f32> = (-40..=40).map(|i| i as f32 * 0.1).collect();
        let bytes: Vec<u8> = values
            .iter()
            .map(|&v| quantize_one(v, -(spread as f32), spread as f32))
            .collect();
        for window in bytes.windows(2) {
            assert!(window[0] <= window[1]);
        }
    }
}
