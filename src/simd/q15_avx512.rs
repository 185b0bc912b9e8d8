//! AVX-512BW-accelerated Q15 kernels for x86_64.
//!
//! AVX-512BW provides 512-bit registers → 32×i16 lanes. Same mullo/mulhi
//! interleave as the narrower x86 kernels, applied per 128-bit sublane;
//! unpack and pack permutations cancel, preserving element order.
//! `_mm512_packs_epi32` saturates with no shift and no rounding.

use core::arch::x86_64::*;

use crate::q15::saturate;

/// Saturating Q15 AXPY using AVX-512BW: `y[i] = sat(a[i] + alpha * b[i])`.
#[inline]
pub fn axpy(alpha: i16, a: &[i16], b: &[i16], y: &mut [i16]) {
    let n = y.len();
    debug_assert!(a.len() >= n);
    debug_assert!(b.len() >= n);
    let chunks = n / 32;

    unsafe {
        let valpha = _mm512_set1_epi16(alpha);
        for i in 0..chunks {
            let off = i * 32;
            let va = _mm512_loadu_epi16(a.as_ptr().add(off));
            let vb = _mm512_loadu_epi16(b.as_ptr().add(off));

            let mul_lo = _mm512_mullo_epi16(vb, valpha);
            let mul_hi = _mm512_mulhi_epi16(vb, valpha);
            let prod_lo = _mm512_unpacklo_epi16(mul_lo, mul_hi);
            let prod_hi = _mm512_unpackhi_epi16(mul_lo, mul_hi);

            let a_lo = _mm512_srai_epi32::<16>(_mm512_unpacklo_epi16(va, va));
            let a_hi = _mm512_srai_epi32::<16>(_mm512_unpackhi_epi16(va, va));

            let sum_lo = _mm512_add_epi32(prod_lo, a_lo);
            let sum_hi = _mm512_add_epi32(prod_hi, a_hi);

            let result = _mm512_packs_epi32(sum_lo, sum_hi);
            _mm512_storeu_epi16(y.as_mut_ptr().add(off), result);
        }
    }

    let tail = chunks * 32;
    for i in tail..n {
        y[i] = saturate(a[i] as i32 + alpha as i32 * b[i] as i32);
    }
}

/// In-place saturating Q15 AXPY using AVX-512BW: `y[i] = sat(y[i] + alpha * b[i])`.
#[inline]
pub fn axpy_assign(alpha: i16, y: &mut [i16], b: &[i16]) {
    let n = y.len();
    debug_assert!(b.len() >= n);
    let chunks = n / 32;

    unsafe {
        let valpha = _mm512_set1_epi16(alpha);
        for i in 0..chunks {
            let off = i * 32;
            let vy = _mm512_loadu_epi16(y.as_ptr().add(off));
            let vb = _mm512_loadu_epi16(b.as_ptr().add(off));

            let mul_lo = _mm512_mullo_epi16(vb, valpha);
            let mul_hi = _mm512_mulhi_epi16(vb, valpha);
            let prod_lo = _mm512_unpacklo_epi16(mul_lo, mul_hi);
            let prod_hi = _mm512_unpackhi_epi16(mul_lo, mul_hi);

            let y_lo = _mm512_srai_epi32::<16>(_mm512_unpacklo_epi16(vy, vy));
            let y_hi = _mm512_srai_epi32::<16>(_mm512_unpackhi_epi16(vy, vy));

            let sum_lo = _mm512_add_epi32(prod_lo, y_lo);
            let sum_hi = _mm512_add_epi32(prod_hi, y_hi);

            let result = _mm512_packs_epi32(sum_lo, sum_hi);
            _mm512_storeu_epi16(y.as_mut_ptr().add(off), result);
        }
    }

    let tail = chunks * 32;
    for i in tail..n {
        y[i] = saturate(y[i] as i32 + alpha as i32 * b[i] as i32);
    }
}
