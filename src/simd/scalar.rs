//! Scalar reference kernels for the Q15 AXPY operation.
//!
//! These establish the authoritative semantics — widening to `i32`, exact
//! multiply-add, saturating clamp — and serve as the universal fallback on
//! architectures without a SIMD backend. Every SIMD kernel must match these
//! bit-for-bit on every input.

use crate::q15::saturate;

/// Saturating Q15 AXPY: `y[i] = sat(a[i] + alpha * b[i])`.
///
/// The element count is `y.len()`; `a` and `b` must be at least that long.
/// The `i32` intermediate is exact: the product of two `i16` values never
/// exceeds 2³⁰ in magnitude, and adding a third `i16` cannot overflow it.
#[inline]
pub fn axpy(alpha: i16, a: &[i16], b: &[i16], y: &mut [i16]) {
    let n = y.len();
    debug_assert!(a.len() >= n);
    debug_assert!(b.len() >= n);
    for i in 0..n {
        let product = alpha as i32 * b[i] as i32;
        let sum = a[i] as i32 + product;
        y[i] = saturate(sum);
    }
}

/// In-place saturating Q15 AXPY: `y[i] = sat(y[i] + alpha * b[i])`.
#[inline]
pub fn axpy_assign(alpha: i16, y: &mut [i16], b: &[i16]) {
    let n = y.len();
    debug_assert!(b.len() >= n);
    for i in 0..n {
        let product = alpha as i32 * b[i] as i32;
        let sum = y[i] as i32 + product;
        y[i] = saturate(sum);
    }
}
