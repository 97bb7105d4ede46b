//! Common

use super::clamp::*;
use num_traits::Num;

/// Use 32-bit precision for floating point numbers.
#[cfg(not(feature = "double"))]
pub type Float = f32;

/// Use 64-bit precision for floating point numbers.
#[cfg(feature = "double")]
pub type Float = f64;

/// 32-bit precision value for 1 - epsilon.
pub const FLOAT_ONE_MINUS_EPSILON: f32 = hexf32!("0x1.fffffep-1"); // 0.99999994

/// 64-bit precision value for 1 - epsilon.
pub const DOUBLE_ONE_MINUS_EPSILON: f64 = hexf64!("0x1.fffffffffffffp-1"); // 0.99999999999999989

/// Largest value below 1 in the precision we've selected for `Float`.
#[cfg(not(feature = "double"))]
pub const ONE_MINUS_EPSILON: Float = FLOAT_ONE_MINUS_EPSILON;

/// Largest value below 1 in the precision we've selected for `Float`.
#[cfg(feature = "double")]
pub const ONE_MINUS_EPSILON: Float = DOUBLE_ONE_MINUS_EPSILON;

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Emulates the behavior of `upper_bound` but uses a function object to get
/// values at various indices instead of requiring access to an actual array.
///
/// Returns the last index `i` in `[0, size - 2]` for which `pred(i)` holds,
/// i.e. the start of the interval `[i, i + 1]` bracketing the key. The result
/// is clamped so that `i + 1` is always a valid index, even when the key lies
/// outside the range (or `pred` never holds, as with NaN keys).
///
/// * `size` - Size of array; must be at least 2.
/// * `pred` - Monotonic predicate evaluated at a given index.
pub fn find_interval<Predicate>(size: usize, pred: Predicate) -> usize
where
    Predicate: Fn(usize) -> bool,
{
    debug_assert!(size >= 2);

    let (mut first, mut len) = (0, size);

    while len > 0 {
        let half = len >> 1;
        let middle = first + half;

        // Bisect range based on value of `pred` at `middle`.
        if pred(middle) {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    clamp(first as isize - 1, 0, size as isize - 2) as usize
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
