//! SSE2-accelerated Q15 kernels for x86_64.
//!
//! SSE2 provides 128-bit registers → 8×i16 lanes. SSE2 has no single
//! widening multiply, so the full 32-bit products are assembled from the
//! `mullo`/`mulhi` halves by interleaving; `a` is sign-extended to i32 lanes
//! by the self-unpack + arithmetic-shift idiom. `packs_epi32` then performs
//! the saturating narrow — it clamps to `[-32768, 32767]` with no shift and
//! no rounding, matching the scalar kernel exactly.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::q15::saturate;

/// Saturating Q15 AXPY using SSE2: `y[i] = sat(a[i] + alpha * b[i])`.
#[inline]
pub fn axpy(alpha: i16, a: &[i16], b: &[i16], y: &mut [i16]) {
    let n = y.len();
    debug_assert!(a.len() >= n);
    debug_assert!(b.len() >= n);
    let chunks = n / 8;

    unsafe {
        let valpha = _mm_set1_epi16(alpha);
        for i in 0..chunks {
            let off = i * 8;
            let va = _mm_loadu_si128(a.as_ptr().add(off) as *const __m128i);
            let vb = _mm_loadu_si128(b.as_ptr().add(off) as *const __m128i);

            // Full 32-bit products alpha * b from low/high 16-bit halves
            let mul_lo = _mm_mullo_epi16(vb, valpha);
            let mul_hi = _mm_mulhi_epi16(vb, valpha);
            let prod_lo = _mm_unpacklo_epi16(mul_lo, mul_hi);
            let prod_hi = _mm_unpackhi_epi16(mul_lo, mul_hi);

            // Sign-extend a to i32 lanes
            let a_lo = _mm_srai_epi32::<16>(_mm_unpacklo_epi16(va, va));
            let a_hi = _mm_srai_epi32::<16>(_mm_unpackhi_epi16(va, va));

            let sum_lo = _mm_add_epi32(prod_lo, a_lo);
            let sum_hi = _mm_add_epi32(prod_hi, a_hi);

            // Saturating pack to i16, no shift; restores element order
            let result = _mm_packs_epi32(sum_lo, sum_hi);
            _mm_storeu_si128(y.as_mut_ptr().add(off) as *mut __m128i, result);
        }
    }

    let tail = chunks * 8;
    for i in tail..n {
        y[i] = saturate(a[i] as i32 + alpha as i32 * b[i] as i32);
    }
}

/// In-place saturating Q15 AXPY using SSE2: `y[i] = sat(y[i] + alpha * b[i])`.
#[inline]
pub fn axpy_assign(alpha: i16, y: &mut [i16], b: &[i16]) {
    let n = y.len();
    debug_assert!(b.len() >= n);
    let chunks = n / 8;

    unsafe {
        let valpha = _mm_set1_epi16(alpha);
        for i in 0..chunks {
            let off = i * 8;
            let vy = _mm_loadu_si128(y.as_ptr().add(off) as *const __m128i);
            let vb = _mm_loadu_si128(b.as_ptr().add(off) as *const __m128i);

            let mul_lo = _mm_mullo_epi16(vb, valpha);
            let mul_hi = _mm_mulhi_epi16(vb, valpha);
            let prod_lo = _mm_unpacklo_epi16(mul_lo, mul_hi);
            let prod_hi = _mm_unpackhi_epi16(mul_lo, mul_hi);

            let y_lo = _mm_srai_epi32::<16>(_mm_unpacklo_epi16(vy, vy));
            let y_hi = _mm_srai_epi32::<16>(_mm_unpackhi_epi16(vy, vy));

            let sum_lo = _mm_add_epi32(prod_lo, y_lo);
            let sum_hi = _mm_add_epi32(prod_hi, y_hi);

            let result = _mm_packs_epi32(sum_lo, sum_hi);
            _mm_storeu_si128(y.as_mut_ptr().add(off) as *mut __m128i, result);
        }
    }

    let tail = chunks * 8;
    for i in tail..n {
        y[i] = saturate(y[i] as i32 + alpha as i32 * b[i] as i32);
    }
}
