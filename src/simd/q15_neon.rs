//! NEON-accelerated Q15 kernels for aarch64.
//!
//! NEON provides 128-bit registers → 8×i16 lanes. The widening multiply
//! (`vmull`), widening add (`vaddw`), and saturating narrow (`vqmovn`)
//! instruction pairs map one-to-one onto the reference arithmetic, so the
//! result is bit-exact with the scalar kernel. `vqmovn` performs no shift
//! and no rounding — in-range sums pass through unchanged.

use core::arch::aarch64::*;

use crate::q15::saturate;

/// Saturating Q15 AXPY using NEON: `y[i] = sat(a[i] + alpha * b[i])`.
#[inline]
pub fn axpy(alpha: i16, a: &[i16], b: &[i16], y: &mut [i16]) {
    let n = y.len();
    debug_assert!(a.len() >= n);
    debug_assert!(b.len() >= n);
    let chunks = n / 8;

    unsafe {
        for i in 0..chunks {
            let off = i * 8;
            let va = vld1q_s16(a.as_ptr().add(off));
            let vb = vld1q_s16(b.as_ptr().add(off));

            // Widening multiply: alpha * b → i32 lanes
            let prod_lo = vmull_n_s16(vget_low_s16(vb), alpha);
            let prod_hi = vmull_high_n_s16(vb, alpha);

            // Widening add: a + product, still in i32 lanes
            let sum_lo = vaddw_s16(prod_lo, vget_low_s16(va));
            let sum_hi = vaddw_high_s16(prod_hi, va);

            // Saturating narrow back to i16, no shift
            let narrow_lo = vqmovn_s32(sum_lo);
            let result = vqmovn_high_s32(narrow_lo, sum_hi);
            vst1q_s16(y.as_mut_ptr().add(off), result);
        }
    }

    let tail = chunks * 8;
    for i in tail..n {
        y[i] = saturate(a[i] as i32 + alpha as i32 * b[i] as i32);
    }
}

/// In-place saturating Q15 AXPY using NEON: `y[i] = sat(y[i] + alpha * b[i])`.
#[inline]
pub fn axpy_assign(alpha: i16, y: &mut [i16], b: &[i16]) {
    let n = y.len();
    debug_assert!(b.len() >= n);
    let chunks = n / 8;

    unsafe {
        for i in 0..chunks {
            let off = i * 8;
            let vy = vld1q_s16(y.as_ptr().add(off));
            let vb = vld1q_s16(b.as_ptr().add(off));

            let prod_lo = vmull_n_s16(vget_low_s16(vb), alpha);
            let prod_hi = vmull_high_n_s16(vb, alpha);

            let sum_lo = vaddw_s16(prod_lo, vget_low_s16(vy));
            let sum_hi = vaddw_high_s16(prod_hi, vy);

            let narrow_lo = vqmovn_s32(sum_lo);
            let result = vqmovn_high_s32(narrow_lo, sum_hi);
            vst1q_s16(y.as_mut_ptr().add(off), result);
        }
    }

    let tail = chunks * 8;
    for i in tail..n {
        y[i] = saturate(y[i] as i32 + alpha as i32 * b[i] as i32);
    }
}
