//! Seed builder: turns a mask into a float field of seeds (0.0) and
//! sentinels (+inf) for one side of the distance transform.

use crate::types::{FloatField, Mask};

/// Which mask value becomes a seed (0.0) in the produced field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// `mask[p] == true` becomes a seed.
    SeedsAreTrue,
    /// `mask[p] == false` becomes a seed.
    SeedsAreFalse,
}

/// Produces a `FloatField` with 0.0 at seed cells and `+inf`
/// elsewhere.
pub fn seed(mask: &Mask, polarity: Polarity) -> FloatField {
    let want = match polarity {
        Polarity::SeedsAreTrue => true,
        Polarity::SeedsAreFalse => false,
    };
    let data = mask
        .bits
        .iter()
        .map(|&b| if b == want { 0.0 } else { f32::INFINITY })
        .collect();
    FloatField {
        width: mask.width,
        height: mask.height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_are_true() {
        let mask = Mask {
            width: 3,
            height: 1,
            bits: vec![true, false, true],
        };
        let field = seed(&mask, Polarity::SeedsAreTrue);
        assert_eq!(field.data, vec![0.0, f32::INFINITY, 0.0]);
    }

    #[test]
    fn test_seeds_are_false() {
        let mask = Mask {
            width: 3,
            height: 1,
            bits: vec![true, false, true],
        };
        let field = seed(&mask, Polarity::SeedsAreFalse);
        assert_eq!(field.data, vec![f32::INFINITY, 0.0, f32::INFINITY]);
    }
}
