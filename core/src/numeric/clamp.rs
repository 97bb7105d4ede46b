//! Clamp

use num_traits::Num;

/// Clamps a value into the closed interval `[low, high]`.
///
/// * `val`  - The value to clamp.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp<T>(val: T, low: T, high: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamp_below_range_returns_low() {
        assert_eq!(clamp(-3_isize, 0, 7), 0);
    }

    #[test]
    fn clamp_above_range_returns_high() {
        assert_eq!(clamp(2.5_f32, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_passes_nan_through() {
        assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
    }

    proptest! {
        #[test]
        fn clamp_result_is_within_bounds(
            val in -1000..1000i64, low in -100..0i64, high in 0..100i64,
        ) {
            let v = clamp(val, low, high);
            prop_assert!(v >= low && v <= high);
            if val >= low && val <= high {
                prop_assert_eq!(v, val);
            }
        }
    }
}
