//! The 1-D "lower envelope of parabolas" routine — the heart of the
//! Felzenszwalb & Huttenlocher (2004) exact distance transform.
//!
//! Each finite entry of the input is the height of an upward-opening
//! unit parabola rooted at its index; every other entry becomes the
//! height of the lower envelope of those parabolas at that index,
//! i.e. `min_k (q - k)^2 + f_orig[k]`.

/// Per-worker scratch for the 1-D routine: vertex indices, break
/// points between adjacent parabolas, and the cached height of each
/// vertex (needed because the fill pass below overwrites `f` in
/// place, so the original heights must be captured before that
/// happens).
pub struct Envelope {
    v: Vec<usize>,
    z: Vec<f32>,
    h: Vec<f32>,
}

impl Envelope {
    /// Allocates scratch sized for rows/columns up to `capacity`
    /// entries long (pass `max(width, height)`).
    pub fn new(capacity: usize) -> Envelope {
        let capacity = capacity.max(1);
        Envelope {
            v: vec![0; capacity],
            z: vec![0.0; capacity],
            h: vec![0.0; capacity],
        }
    }
}

/// The intersection x-coordinate of the parabola rooted at `k` (with
/// original height `fk`) and the parabola rooted at `q` (with
/// original height `fq`). Only ever called between two finite
/// vertices, so the denominator `2*(q - k)` is never zero (q != k is
/// an algorithm invariant).
fn parabola_intersect(fq: f32, q: usize, fk: f32, k: usize) -> f32 {
    let q = q as f32;
    let k = k as f32;
    ((fq - fk) + (q * q - k * k)) / (2.0 * (q - k))
}

/// Replaces each `f[q]` with `min_k (q - k)^2 + f_orig[k]`, where `k`
/// ranges over indices with finite `f_orig[k]`. Rows with no finite
/// entry are left untouched (still all `+inf`).
pub fn transform_1d(f: &mut [f32], scratch: &mut Envelope) {
    let n = f.len();
    if n <= 1 {
        return;
    }

    let offset = match f.iter().position(|value| value.is_finite()) {
        Some(offset) => offset,
        None => return,
    };

    let v = &mut scratch.v;
    let z = &mut scratch.z;
    let h = &mut scratch.h;

    v[0] = offset;
    h[0] = f[offset];
    let mut k: usize = 0;

    for q in (offset + 1)..n {
        if !f[q].is_finite() {
            continue;
        }
        let mut s = parabola_intersect(f[q], q, f[v[k]], v[k]);
        while k > 0 && s <= z[k - 1] {
            k -= 1;
            s = parabola_intersect(f[q], q, f[v[k]], v[k]);
        }
        z[k] = s;
        k += 1;
        v[k] = q;
        h[k] = f[q];
    }

    let mut j = 0usize;
    for (q, slot) in f.iter_mut().enumerate() {
        while j < k && z[j] < q as f32 {
            j += 1;
        }
        let diff = q as f32 - v[j] as f32;
        *slot = diff * diff + h[j];
    }
}
