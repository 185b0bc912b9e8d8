//! SIMD-accelerated Q15 kernels with compile-time architecture dispatch.
//!
//! This module is private — the public API in [`crate::axpy`] routes through
//! the dispatchers here.
//!
//! ## Dispatch strategy
//!
//! The backend is selected once per build via `cfg` on `target_arch` /
//! `target_feature`; there is no runtime capability probe in the hot path.
//! On x86_64, the widest available instruction set wins:
//! AVX-512BW > AVX2 > SSE2. Enable via `-C target-cpu=native` or
//! `-C target-feature=+avx2` etc. Targets with no SIMD backend fall back to
//! the scalar kernel unconditionally.
//!
//! ## Lane-group loop
//!
//! Every backend processes the buffers in lane groups of its native width:
//! load a group, widening-multiply B by the broadcast alpha into i32 lanes,
//! widening-add A, saturating-narrow back to i16 with zero shift, store,
//! advance. The final partial group degenerates to width-1 scalar steps, so
//! any element count is handled, aligned or not. Whatever the group width,
//! the output is bit-exact with the scalar reference.
//!
//! ## Architecture support
//!
//! | Arch      | ISA        | i16 lanes |
//! |-----------|------------|-----------|
//! | `aarch64` | NEON       | 8         |
//! | `x86_64`  | SSE2       | 8         |
//! | `x86_64`  | AVX2       | 16        |
//! | `x86_64`  | AVX-512BW  | 32        |
//! | other     | scalar     | 1         |

pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod q15_neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod q15_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub(crate) mod q15_avx2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512bw"))]
pub(crate) mod q15_avx512;

/// Dispatch Q15 AXPY to the widest SIMD backend or the scalar fallback.
///
/// For short slices (< 8 elements), uses the scalar loop directly — SIMD
/// register setup dominates at small sizes, and no backend has a full lane
/// group to work with anyway.
#[inline]
pub(crate) fn axpy_dispatch(alpha: i16, a: &[i16], b: &[i16], y: &mut [i16]) {
    if y.len() < 8 {
        scalar::axpy(alpha, a, b, y);
        return;
    }
    #[cfg(target_arch = "aarch64")]
    {
        q15_neon::axpy(alpha, a, b, y);
    }
    #[cfg(target_arch = "x86_64")]
    {
        #[cfg(target_feature = "avx512bw")]
        q15_avx512::axpy(alpha, a, b, y);
        #[cfg(all(target_feature = "avx2", not(target_feature = "avx512bw")))]
        q15_avx2::axpy(alpha, a, b, y);
        #[cfg(not(target_feature = "avx2"))]
        q15_sse2::axpy(alpha, a, b, y);
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    scalar::axpy(alpha, a, b, y);
}

/// Dispatch in-place Q15 AXPY: `y[i] = sat(y[i] + alpha * b[i])`.
#[inline]
pub(crate) fn axpy_assign_dispatch(alpha: i16, y: &mut [i16], b: &[i16]) {
    if y.len() < 8 {
        scalar::axpy_assign(alpha, y, b);
        return;
    }
    #[cfg(target_arch = "aarch64")]
    {
        q15_neon::axpy_assign(alpha, y, b);
    }
    #[cfg(target_arch = "x86_64")]
    {
        #[cfg(target_feature = "avx512bw")]
        q15_avx512::axpy_assign(alpha, y, b);
        #[cfg(all(target_feature = "avx2", not(target_feature = "avx512bw")))]
        q15_avx2::axpy_assign(alpha, y, b);
        #[cfg(not(target_feature = "avx2"))]
        q15_sse2::axpy_assign(alpha, y, b);
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    scalar::axpy_assign(alpha, y, b);
}
