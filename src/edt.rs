//! The 2-D Euclidean distance transform driver: row pass, transpose,
//! column pass (as a row pass on the transpose), transpose back with
//! a square root. See spec.md §4.3.2 for why the two transposes are
//! needed.

use crate::envelope::{transform_1d, Envelope};
use crate::types::FloatField;
use rayon::prelude::*;

/// Transposes a `rows x cols` row-major buffer into a `cols x rows`
/// row-major buffer. Parallel over output rows (`rayon`), matching
/// the teacher's `apps/colorblk/lib/src/solver.rs` data-parallel
/// `par_iter` idiom.
fn transpose(src: &[f32], rows: usize, cols: usize) -> Vec<f32> {
    let mut dst = vec![0.0f32; rows * cols];
    dst.par_chunks_mut(rows).enumerate().for_each(|(c, out_row)| {
        for r in 0..rows {
            out_row[r] = src[r * cols + c];
        }
    });
    dst
}

/// Runs the 1-D envelope routine over every row of a `rows x cols`
/// buffer, each row handled by an independent worker with its own
/// scratch (no shared mutable state crosses workers).
fn transform_rows(buf: &mut [f32], rows: usize, cols: usize) {
    let scratch_len = rows.max(cols);
    buf.par_chunks_mut(cols).for_each(|row| {
        let mut scratch = Envelope::new(scratch_len);
        transform_1d(row, &mut scratch);
    });
}

/// In-place 2-D squared-then-rooted Euclidean distance transform of
/// one side (inside or outside). On entry every cell holds `0.0` at a
/// seed or `+inf` elsewhere; on exit every cell holds the true
/// Euclidean distance to the nearest seed.
pub fn transform_2d(field: &mut FloatField) {
    let width = field.width as usize;
    let height = field.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // Step 1: 1-D transform along rows.
    transform_rows(&mut field.data, height, width);

    // Step 2: transpose so former columns become rows.
    let mut transposed = transpose(&field.data, height, width);

    // Step 3: 1-D transform along what are now rows (original columns).
    transform_rows(&mut transposed, width, height);

    // Step 4: transpose back, taking the square root on the way.
    let restored = transpose(&transposed, width, height);
    field
        .data
        .par_iter_mut()
        .zip(restored.par_iter())
        .for_each(|(dst, &squared)| *dst = squared.sqrt());
}

/// Runs the inside and outside transforms. The two fields never alias
/// (spec.md §3's invariant), so this uses `rayon::join` to let them
/// run concurrently — the implementer's choice of fork/join
/// abstraction invited by spec.md §9.
pub fn transform_2d_both(f_in: &mut FloatField, f_out: &mut FloatField) {
    rayon::join(|| transform_2d(f_in), || transform_2d(f_out));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_from_rows(rows: &[&[f32]]) -> FloatField {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        FloatField { width, height, data }
    }

    fn brute_force(seeds: &FloatField) -> Vec<f32> {
        let width = seeds.width as usize;
        let height = seeds.height as usize;
        let seed_coords: Vec<(usize, usize)> = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| seeds.data[y * width + x] == 0.0)
            .collect();
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| {
                seed_coords
                    .iter()
                    .map(|&(sx, sy)| {
                        let dx = x as f32 - sx as f32;
                        let dy = y as f32 - sy as f32;
                        dx * dx + dy * dy
                    })
                    .fold(f32::INFINITY, f32::min)
                    .sqrt()
            })
            .collect()
    }

    #[test]
    fn test_3x3_center_seed() {
        const I: f32 = f32::INFINITY;
        let mut field = field_from_rows(&[&[I, I, I], &[I, 0.0, I], &[I, I, I]]);
        transform_2d(&mut field);
        let expected_sq = [2.0f32, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 2.0];
        for (got, exp_sq) in field.data.iter().zip(expected_sq.iter()) {
            assert!((got - exp_sq.sqrt()).abs() < 1e-4, "{got} != sqrt({exp_sq})");
        }
    }

    #[test]
    fn test_separability_cross_check_random_small_image() {
        // Deterministic pseudo-random seed pattern, no RNG crate needed.
        let width = 9usize;
        let height = 7usize;
        let mut data = vec![f32::INFINITY; width * height];
        // Seed a handful of scattered cells.
        for &(x, y) in &[(0usize, 0usize), (4, 3), (8, 6), (2, 5), (6, 1)] {
            data[y * width + x] = 0.0;
        }
        let mut field = FloatField {
            width: width as u32,
            height: height as u32,
            data: data.clone(),
        };
        let expected = brute_force(&FloatField {
            width: width as u32,
            height: height as u32,
            data,
        });
        transform_2d(&mut field);
        for (got, exp) in field.data.iter().zip(expected.iter()) {
            assert!((got - exp).abs() < 1e-3, "{got} != {exp}");
        }
    }

    #[test]
    fn test_no_seeds_stays_infinite() {
        let mut field = FloatField::new(4, 4, f32::INFINITY);
        transform_2d(&mut field);
        assert!(field.data.iter().all(|v| v.is_infinite()));
    }

    #[test]
    fn test_both_sides_transform_independently() {
        const I: f32 = f32::INFINITY;
        let mut f_in = field_from_rows(&[&[0.0, I], &[I, I]]);
        let mut f_out = field_from_rows(&[&[I, I], &[I, 0.0]]);
        transform_2d_both(&mut f_in, &mut f_out);
        assert!((f_in.data[3] - (2.0f32).sqrt()).abs() < 1e-4);
        assert!((f_out.data[0] - (2.0f32).sqrt()).abs() < 1e-4);
    }
}
