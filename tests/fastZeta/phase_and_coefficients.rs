use approx::{assert_abs_diff_eq, assert_relative_eq};
use fastZeta::math::coefficients::{
    correction, correction_direct, correction_terms, COEFFICIENTS, C0_COEFFICIENTS,
    C4_COEFFICIENTS,
};
use fastZeta::math::tables::{main_sum_length, required_size, size_for_upper, MAX_TABLE_SIZE};
use fastZeta::prelude::*;
use proptest::prelude::*;
use std::f64::consts::PI;

/// θ(t) written with powf, the way the series is usually printed.
fn theta_from_powers(t: f64) -> f64 {
    t / 2.0 * (t / 2.0 / PI).ln() - t / 2.0 - PI / 8.0
        + 1.0 / 48.0 / t
        + 7.0 / 5760.0 / t.powf(3.0)
        + 31.0 / 80640.0 / t.powf(5.0)
        + 127.0 / 430080.0 / t.powf(7.0)
        + 511.0 / 1216512.0 / t.powf(9.0)
}

#[test]
fn test_theta_matches_power_formulation() {
    for &t in &[10.0, 14.134725141734694, 100.0, 1000.0, 12345.678, 1.0e6, 1.0e9] {
        assert_relative_eq!(theta(t), theta_from_powers(t), max_relative = 1e-14);
    }
}

#[test]
fn test_zero_count_estimate() {
    // θ(T)/π + 1 approximates the number of zeros below T
    assert_abs_diff_eq!(estimate_zero_count(1000.0), 647.616, epsilon = 1e-3);
    assert_abs_diff_eq!(estimate_zero_count(10000.0), 10141.965, epsilon = 1e-3);
}

#[test]
fn test_theta_is_increasing_in_operating_regime() {
    let mut previous = theta(10.0);
    for i in 1..1000 {
        let current = theta(10.0 + i as f64);
        assert!(current > previous);
        previous = current;
    }
}

#[test]
fn test_coefficient_tables_have_expected_degrees() {
    let degrees: Vec<usize> = COEFFICIENTS
        .iter()
        .enumerate()
        .map(|(k, c)| 2 * (c.len() - 1) + k % 2)
        .collect();
    assert_eq!(degrees, vec![42, 45, 46, 47, 48]);
}

#[test]
fn test_coefficients_are_exact_published_values() {
    // C0(0) = −cos(5π/8) = sin(π/8)
    assert_eq!(C0_COEFFICIENTS[0], 0.38268343236508977173);
    assert_relative_eq!(C0_COEFFICIENTS[0], (PI / 8.0).sin(), max_relative = 1e-15);
    assert_eq!(C4_COEFFICIENTS[24], 0.00000000000000000004);
}

#[test]
fn test_parity_of_polynomials() {
    for &z in &[0.1, 0.37, 0.8, 1.0] {
        let pos = correction_terms(z);
        let neg = correction_terms(-z);
        for k in [0, 2, 4] {
            assert_abs_diff_eq!(pos[k], neg[k], epsilon = 1e-16);
        }
        for k in [1, 3] {
            assert_abs_diff_eq!(pos[k], -neg[k], epsilon = 1e-16);
        }
    }

    let at_zero = correction_terms(0.0);
    assert_eq!(at_zero[1], 0.0);
    assert_eq!(at_zero[3], 0.0);
}

#[test]
fn test_correction_rejects_unknown_order() {
    assert!(correction(5, 0.3).is_none());
    assert!(correction_direct(5, 0.3).is_none());
}

proptest! {
    #[test]
    fn prop_shared_powers_match_direct_powers(z in -1.0f64..=1.0) {
        let shared = correction_terms(z);
        for (k, &value) in shared.iter().enumerate() {
            let direct = correction_direct(k, z).unwrap();
            prop_assert!((value - direct).abs() <= 1e-14, "C{k}({z}): {value} vs {direct}");
            prop_assert_eq!(correction(k, z).unwrap(), value);
        }
    }

    #[test]
    fn prop_table_size_covers_upper(upper in 0.0f64..1.0e12) {
        let size = size_for_upper(upper).unwrap();
        prop_assert!(size >= (upper / (2.0 * PI)).sqrt().floor() as usize + 1);
        prop_assert!(size >= required_size(upper).unwrap());
    }
}

#[test]
fn test_table_sizing_for_run_bounds() {
    for &upper in &[0.0, 1.0, 2.0 * PI, 10.0, 1000.0, 1.0e4, 1.0e6, 1.0e8, 1.0e10] {
        let tables = LookupTables::for_upper(upper).unwrap();
        assert!(tables.len() >= main_sum_length(upper) + 1, "upper = {upper}");
        assert!(tables.ensure_covers(upper).is_ok());
    }
}

#[test]
fn test_lookup_table_values() {
    let tables = LookupTables::build(100_000);
    assert_eq!(tables.len(), 100_000);

    let inv_sqrt = tables.inv_sqrt(99_999);
    let log_int = tables.log_int(99_999);
    assert_eq!(inv_sqrt[0], 1.0);
    assert_eq!(log_int[0], 0.0);
    for k in [2usize, 17, 1024, 65_537, 99_999] {
        assert_eq!(inv_sqrt[k - 1], 1.0 / (k as f64).sqrt());
        assert_eq!(log_int[k - 1], (k as f64).ln());
    }
}

#[test]
fn test_lookup_tables_reject_invalid_bound() {
    assert!(LookupTables::for_upper(-1.0).is_err());
    assert!(LookupTables::for_upper(f64::NAN).is_err());
    assert!(LookupTables::for_upper(f64::INFINITY).is_err());
}

#[test]
fn test_sizes_beyond_usize_are_reported() {
    // sqrt(t/2π) saturates the usize cast, so one more slot no longer fits
    assert_eq!(main_sum_length(1.0e40), usize::MAX);
    assert_eq!(required_size(1.0e40), None);
    assert_eq!(size_for_upper(1.0e40), None);
    assert_eq!(required_size(1000.0), Some(13));
}

#[test]
fn test_lookup_tables_refuse_oversized_bounds() {
    for &upper in &[1.0e39, 1.0e40, f64::MAX] {
        match LookupTables::for_upper(upper) {
            Err(ZetaError::InvalidInput(msg)) => assert!(msg.contains("lookup tables")),
            other => panic!("upper = {upper}: expected InvalidInput, got {other:?}"),
        }
    }
    assert!(size_for_upper(1.0e39).unwrap() > MAX_TABLE_SIZE);
}

#[test]
fn test_try_build_matches_build() {
    assert_eq!(LookupTables::try_build(5000).unwrap(), LookupTables::build(5000));
}
