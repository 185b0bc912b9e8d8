//! # q15-axpy
//!
//! Saturating Q15 fixed-point AXPY kernels, no-std compatible. The classic
//! scaled-vector-add of fixed-point DSP pipelines — `y[i] = sat(a[i] +
//! alpha * b[i])` — for targets where floating point is unavailable or too
//! costly (no heap allocation, no FPU assumptions).
//!
//! ## Quick start
//!
//! ```
//! use q15_axpy::{axpy, axpy_scalar};
//!
//! let a = [10_000_i16, -20_000, 30_000, -5];
//! let b = [500_i16, -500, 500, -500];
//! let mut y = [0_i16; 4];
//!
//! // SIMD-accelerated on supported targets, scalar fallback elsewhere
//! axpy(3, &a, &b, &mut y);
//! assert_eq!(y, [11_500, -21_500, 31_500, -1_505]);
//!
//! // The scalar reference produces bit-identical output
//! let mut y_ref = [0_i16; 4];
//! axpy_scalar(3, &a, &b, &mut y_ref);
//! assert_eq!(y, y_ref);
//! ```
//!
//! ## Modules
//!
//! - [`axpy`](mod@axpy) — the kernel pair: [`axpy()`] (SIMD-dispatched) and
//!   [`axpy_scalar()`] (reference), plus in-place `_assign` variants where
//!   the output buffer doubles as the A input.
//!
//! - [`q15`] — the raw [`Q15`] value type (`i16`, real value `raw / 32768`),
//!   range constants, and the [`saturate`] clamp that defines the narrowing
//!   semantics: out-of-range `i32` sums clamp to `[-32768, 32767]`, in-range
//!   sums pass through exactly (truncation, never rounding).
//!
//! ## Correctness contract
//!
//! The scalar kernel is the oracle. Every SIMD backend — NEON on `aarch64`;
//! SSE2, AVX2, or AVX-512BW on `x86_64`, selected at compile time by target
//! feature — reproduces its widening multiply-add and saturating narrow
//! bit-for-bit, for every input including every boundary combination of
//! `i16::MIN` / `i16::MAX`. Targets without a backend fall back to the
//! scalar kernel unconditionally.
//!
//! Arithmetic overflow is the one failure mode the kernels guard against:
//! every multiply, add, and narrow is intercepted by i32 widening and
//! saturation before wraparound can escape into the output.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Convenience only; the kernels themselves are no-std |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod axpy;
pub mod q15;
mod simd;

pub use axpy::{axpy, axpy_assign, axpy_assign_scalar, axpy_scalar};
pub use q15::{saturate, Q15, Q15_MAX, Q15_MIN};
