use approx::assert_abs_diff_eq;
use fastZeta::evaluation::validation::{validate_zeros, DIRECT_SUM_TERMS};
use fastZeta::prelude::*;
use ndarray::Array1;

const LMFDB_ZEROS: [f64; 4] = [
    14.13472514173469379,
    21.02203963877155499,
    25.01085758014568876,
    101.31785100573139123,
];

fn tables() -> LookupTables {
    LookupTables::for_upper(20_000.0).unwrap()
}

#[test]
fn test_sign_crossing_at_published_zeros() {
    let tables = tables();
    let z = RiemannSiegel::new(&tables);

    // At 1e-6 the double-precision offset of Z near the first zeros (~3e-6)
    // is larger than the slope contribution, so a wider bracket is used.
    for &t in &LMFDB_ZEROS {
        assert!(crosses_zero(&z, t, 1e-4).unwrap(), "no crossing at {t}");
    }
}

#[test]
fn test_value_at_first_zero_is_small() {
    let tables = tables();
    let z = RiemannSiegel::new(&tables);

    assert_abs_diff_eq!(z.evaluate(LMFDB_ZEROS[0]).unwrap(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(z.evaluate(LMFDB_ZEROS[3]).unwrap(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(z.evaluate(KNOWN_ZEROS[8]).unwrap(), 0.0, epsilon = 1e-6);
}

#[test]
fn test_modulus_matches_direct_zeta_sum() {
    let tables = tables();
    let z = RiemannSiegel::new(&tables);

    for &t in &[30.0, 40.0, 50.0, 60.0, 100.0, 150.0] {
        let rs = z.evaluate(t).unwrap().abs();
        let direct = zeta_critical_line(t, 200).unwrap().norm();
        assert_abs_diff_eq!(rs, direct, epsilon = 1e-5);
    }
}

#[test]
fn test_direct_sum_vanishes_at_zero() {
    let zeta = zeta_critical_line(LMFDB_ZEROS[0], DIRECT_SUM_TERMS).unwrap();
    assert!(zeta.norm() < 1e-10, "|zeta| = {}", zeta.norm());
}

#[test]
fn test_direct_sum_rejects_term_count() {
    assert!(zeta_critical_line(20.0, 0).is_err());
    assert!(zeta_critical_line(20.0, 1001).is_err());
}

#[test]
fn test_validate_zeros_report() {
    let tables = tables();
    let z = RiemannSiegel::new(&tables);

    let rows = validate_zeros(&z, &KNOWN_ZEROS, DIRECT_SUM_TERMS).unwrap();
    assert_eq!(rows.len(), KNOWN_ZEROS.len());

    for row in &rows {
        assert!(row.z.abs() < 1e-5, "Z({}) = {}", row.t, row.z);
        match row.zeta_modulus {
            Some(m) => assert!(m < 1e-8, "|zeta({})| = {m}", row.t),
            None => assert!(row.t > 200.0),
        }
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let tables = tables();
    let z = RiemannSiegel::new(&tables);

    for &t in &[17.5, 999.25, 12_345.0] {
        let a = z.evaluate(t).unwrap();
        let b = z.evaluate(t).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_table_too_small_is_reported() {
    let tables = LookupTables::for_upper(1000.0).unwrap();
    let z = RiemannSiegel::new(&tables);

    assert!(z.evaluate(1000.0).is_ok());
    match z.evaluate(1.0e6) {
        Err(ZetaError::TableTooSmall {
            required,
            available,
        }) => {
            assert_eq!(required, 398 + 1);
            assert_eq!(available, tables.len());
        }
        other => panic!("expected TableTooSmall, got {other:?}"),
    }
}

#[test]
fn test_huge_ordinate_is_reported_not_panicking() {
    let tables = LookupTables::for_upper(100.0).unwrap();
    let z = RiemannSiegel::new(&tables);

    match z.evaluate(1.0e40) {
        Err(ZetaError::TableTooSmall {
            required,
            available,
        }) => {
            assert_eq!(required, usize::MAX);
            assert_eq!(available, tables.len());
        }
        other => panic!("expected TableTooSmall, got {other:?}"),
    }
    assert!(z.evaluate_many(&vec![50.0, 1.0e40]).is_err());

    assert!(matches!(
        riemann_siegel_z(1.0e40),
        Err(ZetaError::InvalidInput(_))
    ));
}

#[test]
fn test_correction_order_bounds() {
    let tables = tables();
    assert!(RiemannSiegel::new(&tables).with_order(4).is_ok());
    assert!(matches!(
        RiemannSiegel::new(&tables).with_order(5),
        Err(ZetaError::InvalidInput(_))
    ));
}

#[test]
fn test_lower_orders_converge_to_full_series() {
    let tables = tables();
    let t = 5000.0;
    let full = RiemannSiegel::new(&tables).evaluate(t).unwrap();

    let mut previous_error = f64::INFINITY;
    for order in 0..4 {
        let z = RiemannSiegel::new(&tables).with_order(order).unwrap();
        let error = (z.evaluate(t).unwrap() - full).abs();
        assert!(error < 1e-3, "order {order}: error {error}");
        assert!(error <= previous_error * 1.5);
        previous_error = error;
    }
}

#[test]
fn test_phase_reduction_agrees() {
    let tables = tables();
    let raw = RiemannSiegel::new(&tables);
    let reduced = raw.with_phase_reduction(PhaseReduction::Modulo);

    for &t in &[20.0, 333.3, 7777.7, 19_999.0] {
        assert_abs_diff_eq!(
            raw.evaluate(t).unwrap(),
            reduced.evaluate(t).unwrap(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_evaluate_many_preserves_order() {
    let tables = tables();
    let z = RiemannSiegel::new(&tables);

    let ts: Vec<f64> = (0..64).map(|i| 20.0 + 7.5 * i as f64).collect();
    let batch = z.evaluate_many(&ts).unwrap();

    assert_eq!(batch.len(), ts.len());
    for (t, value) in ts.iter().zip(&batch) {
        assert_eq!(value.to_bits(), z.evaluate(*t).unwrap().to_bits());
    }

    let array = Array1::from_vec(ts.clone());
    assert_eq!(z.evaluate_many(&array).unwrap(), batch);
    assert_eq!(z.evaluate_many(ts.as_slice()).unwrap(), batch);
}

#[test]
fn test_evaluate_many_reports_table_overflow() {
    let tables = LookupTables::for_upper(100.0).unwrap();
    let z = RiemannSiegel::new(&tables);
    assert!(z.evaluate_many(&vec![50.0, 1.0e5]).is_err());
}

#[test]
fn test_one_shot_evaluation() {
    let tables = tables();
    let reference = RiemannSiegel::new(&tables).evaluate(777.0).unwrap();
    assert_eq!(riemann_siegel_z(777.0).unwrap(), reference);
    assert!(riemann_siegel_z(-1.0).is_err());
}

#[test]
fn test_count_sign_changes_in_inputs() {
    let samples = vec![1.0, -2.0, -3.0, 4.0, 0.5, -0.0, 0.0];
    assert_eq!(count_sign_changes_in(&samples).unwrap(), 4);

    let array = Array1::from_vec(samples);
    assert_eq!(count_sign_changes_in(&array).unwrap(), 4);

    let strided = Array1::from_vec(vec![1.0f64, -1.0, 1.0, -1.0]);
    let view = strided.slice(ndarray::s![..;2]);
    assert!(count_sign_changes_in(&view).is_err());
}
