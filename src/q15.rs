//! Q15 fixed-point scalar type and saturation.
//!
//! Q15 represents values in `[-1, 1)` as a signed 16-bit integer where the
//! real value equals `raw / 32768`. All arithmetic in this crate widens to
//! `i32` before multiplying or adding, then clamps back to the Q15 range —
//! out-of-range results saturate at the nearest bound instead of wrapping.

/// Raw Q15 value: a signed 16-bit integer interpreted as `raw / 32768`.
pub type Q15 = i16;

/// Smallest representable Q15 raw value (−1.0).
pub const Q15_MIN: Q15 = i16::MIN;

/// Largest representable Q15 raw value (1.0 − 2⁻¹⁵).
pub const Q15_MAX: Q15 = i16::MAX;

/// Clamp a widened intermediate to the Q15 range.
///
/// In-range values pass through exactly (truncation, no rounding — there is
/// no fractional shift at this point); out-of-range values clamp to the
/// nearest bound.
#[inline]
pub const fn saturate(val: i32) -> Q15 {
    if val > Q15_MAX as i32 {
        Q15_MAX
    } else if val < Q15_MIN as i32 {
        Q15_MIN
    } else {
        val as Q15
    }
}
