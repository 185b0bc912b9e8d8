//! Integration tests of the public Q15 AXPY API.
//!
//! The dispatched and scalar kernels are two implementations of one
//! contract; everything here holds for both, so most tests run each case
//! through both paths and compare.

use q15_axpy::{axpy, axpy_assign, axpy_assign_scalar, axpy_scalar, Q15_MAX, Q15_MIN};

// Classic rand(3) LCG constants; reproducible from a seed.
fn fill_q15(buf: &mut [i16], seed: &mut u32) {
    for v in buf.iter_mut() {
        *seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        *v = (*seed >> 16) as i16;
    }
}

/// Lane-aligned and non-aligned element counts, per the lane-width
/// agnosticism property.
const SIZES: [usize; 10] = [0, 1, 7, 8, 16, 127, 128, 1000, 1024, 4096];

// ── Equivalence ──────────────────────────────────────────────────────

#[test]
fn dispatched_matches_scalar_for_all_sizes() {
    let mut seed = 42_u32;
    for n in SIZES {
        let mut a = vec![0_i16; n];
        let mut b = vec![0_i16; n];
        fill_q15(&mut a, &mut seed);
        fill_q15(&mut b, &mut seed);

        for alpha in [i16::MIN, -1000, -1, 0, 1, 1000, i16::MAX] {
            let mut y = vec![0_i16; n];
            let mut y_ref = vec![0_i16; n];
            axpy(alpha, &a, &b, &mut y);
            axpy_scalar(alpha, &a, &b, &mut y_ref);
            assert_eq!(y, y_ref, "n={n} alpha={alpha}");
        }
    }
}

#[test]
fn lcg_data_is_reproducible() {
    let mut s1 = 42_u32;
    let mut s2 = 42_u32;
    let mut a1 = vec![0_i16; 256];
    let mut a2 = vec![0_i16; 256];
    fill_q15(&mut a1, &mut s1);
    fill_q15(&mut a2, &mut s2);
    assert_eq!(a1, a2);
}

// ── Identities ───────────────────────────────────────────────────────

#[test]
fn alpha_zero_returns_a_unchanged() {
    let mut seed = 1_u32;
    for n in SIZES {
        let mut a = vec![0_i16; n];
        let mut b = vec![0_i16; n];
        fill_q15(&mut a, &mut seed);
        fill_q15(&mut b, &mut seed);

        let mut y = vec![0_i16; n];
        axpy(0, &a, &b, &mut y);
        assert_eq!(y, a, "n={n}");
    }
}

#[test]
fn alpha_one_is_saturating_add() {
    let mut seed = 2_u32;
    for n in SIZES {
        let mut a = vec![0_i16; n];
        let mut b = vec![0_i16; n];
        fill_q15(&mut a, &mut seed);
        fill_q15(&mut b, &mut seed);

        let mut y = vec![0_i16; n];
        axpy(1, &a, &b, &mut y);
        for i in 0..n {
            let expected = (a[i] as i32 + b[i] as i32).clamp(-32768, 32767) as i16;
            assert_eq!(y[i], expected, "n={n} i={i}");
        }
    }
}

// ── Saturation ───────────────────────────────────────────────────────

#[test]
fn output_always_in_q15_range_and_tight() {
    // Bounds are hit exactly when the true sum exceeds them.
    let mut seed = 3_u32;
    let n = 1024;
    let mut a = vec![0_i16; n];
    let mut b = vec![0_i16; n];
    fill_q15(&mut a, &mut seed);
    fill_q15(&mut b, &mut seed);

    for alpha in [i16::MIN, -3000, 3000, i16::MAX] {
        let mut y = vec![0_i16; n];
        axpy(alpha, &a, &b, &mut y);
        for i in 0..n {
            let exact = a[i] as i32 + alpha as i32 * b[i] as i32;
            if exact > Q15_MAX as i32 {
                assert_eq!(y[i], Q15_MAX, "i={i}");
            } else if exact < Q15_MIN as i32 {
                assert_eq!(y[i], Q15_MIN, "i={i}");
            } else {
                assert_eq!(y[i] as i32, exact, "i={i}");
            }
        }
    }
}

#[test]
fn positive_saturation_scenario() {
    // n=8, alpha=100, A=[32000]×8, B=100..800 → every element clamps high.
    let a = [32_000_i16; 8];
    let b = [100_i16, 200, 300, 400, 500, 600, 700, 800];
    let mut y = [0_i16; 8];
    axpy(100, &a, &b, &mut y);
    assert_eq!(y, [Q15_MAX; 8]);
}

#[test]
fn negative_saturation_scenario() {
    let a = [-32_000_i16; 8];
    let b = [100_i16, 200, 300, 400, 500, 600, 700, 800];
    let mut y = [0_i16; 8];
    axpy(-100, &a, &b, &mut y);
    assert_eq!(y, [Q15_MIN; 8]);
}

#[test]
fn all_min_extreme_saturates_high() {
    // MIN*MIN dominates: 2^30 − 32768 clamps to +32767 despite every input
    // being the most negative value.
    for n in [1, 8, 9, 33] {
        let a = vec![i16::MIN; n];
        let b = vec![i16::MIN; n];
        let mut y = vec![0_i16; n];
        axpy(i16::MIN, &a, &b, &mut y);
        assert_eq!(y, vec![Q15_MAX; n], "n={n}");
    }
}

#[test]
fn all_max_extreme_saturates_high() {
    for n in [1, 8, 9, 33] {
        let a = vec![i16::MAX; n];
        let b = vec![i16::MAX; n];
        let mut y = vec![0_i16; n];
        axpy(i16::MAX, &a, &b, &mut y);
        assert_eq!(y, vec![Q15_MAX; n], "n={n}");
    }
}

// ── In-place variants ────────────────────────────────────────────────

#[test]
fn assign_matches_out_of_place() {
    let mut seed = 4_u32;
    for n in SIZES {
        let mut a = vec![0_i16; n];
        let mut b = vec![0_i16; n];
        fill_q15(&mut a, &mut seed);
        fill_q15(&mut b, &mut seed);

        for alpha in [-321, 0, 321] {
            let mut y = vec![0_i16; n];
            axpy(alpha, &a, &b, &mut y);

            let mut y_assign = a.clone();
            axpy_assign(alpha, &mut y_assign, &b);
            assert_eq!(y_assign, y, "axpy_assign n={n} alpha={alpha}");

            let mut y_assign_ref = a.clone();
            axpy_assign_scalar(alpha, &mut y_assign_ref, &b);
            assert_eq!(y_assign_ref, y, "axpy_assign_scalar n={n} alpha={alpha}");
        }
    }
}

// ── Buffer contract ──────────────────────────────────────────────────

#[test]
fn empty_output_is_a_noop() {
    let a = [1_i16, 2, 3];
    let b = [4_i16, 5, 6];
    let mut y: [i16; 0] = [];
    axpy(100, &a, &b, &mut y);
    axpy_scalar(100, &a, &b, &mut y);
}

#[test]
fn inputs_longer_than_output_are_allowed() {
    // n comes from y; a and b only need length >= n.
    let a = [10_i16, 20, 30, 40, 50];
    let b = [1_i16, 2, 3, 4, 5];
    let mut y = [0_i16; 3];
    axpy(2, &a, &b, &mut y);
    assert_eq!(y, [12, 24, 36]);
}
