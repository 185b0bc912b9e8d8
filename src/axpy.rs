//! Saturating Q15 AXPY: `y[i] = sat(a[i] + alpha * b[i])`.
//!
//! Two interchangeable implementations of one contract: [`axpy`] routes to
//! the widest SIMD backend the build targets, [`axpy_scalar`] is the scalar
//! reference. Their outputs are bit-identical for every input — the scalar
//! kernel is the oracle, and the SIMD kernels reproduce its exact widening
//! and saturation semantics.
//!
//! Arithmetic is performed on raw Q15 values: the product `alpha * b[i]` and
//! the sum are evaluated in `i32` (exact — no intermediate can overflow),
//! then clamped to `[-32768, 32767]` with no shift and no rounding.
//!
//! The element count is `y.len()`; `a` and `b` must each hold at least that
//! many elements (checked with `debug_assert!` only — the kernels perform no
//! validation in release builds). `n = 0` is a no-op. The kernels never
//! allocate and touch nothing but the three buffers.

use crate::simd;

/// Saturating Q15 AXPY, SIMD-accelerated where the target supports it.
///
/// Computes `y[i] = sat(a[i] + alpha * b[i])` for `i` in `0..y.len()`.
/// Bit-exact with [`axpy_scalar`] on every input and every target; builds
/// without a SIMD backend delegate to the scalar kernel.
///
/// ```
/// use q15_axpy::axpy;
///
/// let a = [1000_i16, -2000, 3000, -4000];
/// let b = [100_i16, 200, 300, 400];
/// let mut y = [0_i16; 4];
/// axpy(2, &a, &b, &mut y);
/// assert_eq!(y, [1200, -1600, 3600, -3200]);
/// ```
///
/// Out-of-range sums saturate instead of wrapping:
///
/// ```
/// use q15_axpy::axpy;
///
/// let a = [32_000_i16];
/// let b = [800_i16];
/// let mut y = [0_i16];
/// axpy(100, &a, &b, &mut y); // 32000 + 80000 clamps
/// assert_eq!(y, [i16::MAX]);
/// ```
#[inline]
pub fn axpy(alpha: i16, a: &[i16], b: &[i16], y: &mut [i16]) {
    simd::axpy_dispatch(alpha, a, b, y);
}

/// Scalar reference implementation of the saturating Q15 AXPY.
///
/// Element-by-element: widen to `i32`, multiply-add, clamp. This kernel
/// defines the authoritative semantics; [`axpy`] must match it bit-for-bit.
#[inline]
pub fn axpy_scalar(alpha: i16, a: &[i16], b: &[i16], y: &mut [i16]) {
    simd::scalar::axpy(alpha, a, b, y);
}

/// In-place saturating Q15 AXPY: `y[i] = sat(y[i] + alpha * b[i])`.
///
/// The accumulator form — `y` serves as both the A input and the output,
/// which is how the operation appears in filter update loops. Same
/// arithmetic and same dispatch as [`axpy`].
///
/// ```
/// use q15_axpy::axpy_assign;
///
/// let mut y = [1000_i16, -2000];
/// let b = [100_i16, 200];
/// axpy_assign(2, &mut y, &b);
/// assert_eq!(y, [1200, -1600]);
/// ```
#[inline]
pub fn axpy_assign(alpha: i16, y: &mut [i16], b: &[i16]) {
    simd::axpy_assign_dispatch(alpha, y, b);
}

/// Scalar reference implementation of the in-place saturating Q15 AXPY.
#[inline]
pub fn axpy_assign_scalar(alpha: i16, y: &mut [i16], b: &[i16]) {
    simd::scalar::axpy_assign(alpha, y, b);
}
