//! Pattern measurements estimated from height.
//!
//! These are placeholder ratios, not tailoring data: every dimension is a
//! fixed fraction of height rounded half away from zero.

use serde::{Deserialize, Serialize};

const BUST_RATIO: f64 = 0.55;
const WAIST_RATIO: f64 = 0.45;
const HIPS_RATIO: f64 = 0.53;
const LENGTH_RATIO: f64 = 0.6;

/// Four derived pattern lengths, in whole centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    pub bust: i64,
    pub waist: i64,
    pub hips: i64,
    pub length: i64,
}

impl Measurements {
    /// Derive measurements from a height in centimeters.
    pub fn from_height(height_cm: f64) -> Self {
        Self {
            bust: scaled(height_cm, BUST_RATIO),
            waist: scaled(height_cm, WAIST_RATIO),
            hips: scaled(height_cm, HIPS_RATIO),
            length: scaled(height_cm, LENGTH_RATIO),
        }
    }

    /// Label/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, i64); 4] {
        [
            ("Bust", self.bust),
            ("Waist", self.waist),
            ("Hips", self.hips),
            ("Length", self.length),
        ]
    }
}

fn scaled(height_cm: f64, ratio: f64) -> i64 {
    (height_cm * ratio).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_height_measurements() {
        let m = Measurements::from_height(170.0);
        assert_eq!(
            m,
            Measurements {
                bust: 94,
                waist: 77,
                hips: 90,
                length: 102,
            }
        );
    }

    #[test]
    fn bounds_of_height_range() {
        let short = Measurements::from_height(100.0);
        assert_eq!((short.bust, short.waist, short.hips, short.length), (55, 45, 53, 60));
        let tall = Measurements::from_height(250.0);
        assert_eq!((tall.bust, tall.waist, tall.hips, tall.length), (138, 113, 133, 150));
    }

    #[test]
    fn fractional_height_rounds_to_nearest() {
        // 165.4 * 0.45 = 74.43 -> 74; 165.4 * 0.6 = 99.24 -> 99
        let m = Measurements::from_height(165.4);
        assert_eq!(m.waist, 74);
        assert_eq!(m.length, 99);
    }

    #[test]
    fn entries_are_in_display_order() {
        let labels: Vec<_> = Measurements::from_height(170.0)
            .entries()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, ["Bust", "Waist", "Hips", "Length"]);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn measurements_are_rounded_linear_functions_of_height(
                tenths in 1000u32..=2500u32
            ) {
                let h = f64::from(tenths) / 10.0;
                let m = Measurements::from_height(h);
                prop_assert_eq!(m.bust, (0.55 * h).round() as i64);
                prop_assert_eq!(m.waist, (0.45 * h).round() as i64);
                prop_assert_eq!(m.hips, (0.53 * h).round() as i64);
                prop_assert_eq!(m.length, (0.6 * h).round() as i64);
                prop_assert!(m.waist <= m.hips && m.hips <= m.bust && m.bust <= m.length);
            }
        }
    }
}
