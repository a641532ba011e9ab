//! Combiner: collapses the two per-side Euclidean distance fields
//! into one signed distance field.

use crate::types::{FloatField, SignedField};

/// `s[p] = d_in - max(0, d_out - 1)`.
///
/// An inside pixel has `d_in = 0` and `d_out > 0`, so it receives the
/// negative distance to the outside with a 1-pixel bias subtracted
/// (recentering the zero crossing on the pixel midpoint) — i.e.
/// `s[p] = -max(0, d_out - 1) <= 0`. An outside pixel has `d_out = 0`
/// and `d_in > 0`, so it receives the positive, unbiased distance to
/// the inside — `s[p] = d_in >= 0`. This matches the "positive
/// outside, negative inside" convention named in spec.md §2 (the
/// alternative phrasing of the sign law in spec.md §8, "inside >= 0,
/// outside <= 0", does not follow from this formula; this
/// implementation follows the formula, which is the normative,
/// unambiguous part of the spec — see DESIGN.md). The bias is
/// intentionally asymmetric — applied only to the `d_out` branch —
/// per spec.md §4.4, and is preserved bit-for-bit rather than
/// re-derived (spec.md §9).
pub fn combine(f_in: &FloatField, f_out: &FloatField) -> SignedField {
    debug_assert_eq!(f_in.width, f_out.width);
    debug_assert_eq!(f_in.height, f_out.height);
    let data = f_in
        .data
        .iter()
        .zip(f_out.data.iter())
        .map(|(&d_in, &d_out)| d_in - (d_out - 1.0).max(0.0))
        .collect();
    SignedField {
        width: f_in.width,
        height: f_in.height,
        data,
    }
}
