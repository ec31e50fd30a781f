use fastZeta::engine::executor::{
    partition, reduce_counts, scan_block, scan_parallel, scan_sequential,
};
use fastZeta::prelude::*;
use proptest::prelude::*;

fn count(lower: f64, upper: f64, samp: f64, workers: usize, mode: BoundaryMode) -> u64 {
    let grid = SamplingRange::new(lower, upper, samp).unwrap();
    let tables = LookupTables::for_upper(upper).unwrap();
    let z = RiemannSiegel::new(&tables);
    scan_parallel(&z, &grid, workers, mode).unwrap()
}

fn reference(lower: f64, upper: f64, samp: f64) -> u64 {
    let grid = SamplingRange::new(lower, upper, samp).unwrap();
    let tables = LookupTables::for_upper(upper).unwrap();
    scan_sequential(&RiemannSiegel::new(&tables), &grid).unwrap()
}

proptest! {
    #[test]
    fn prop_partition_covers_range_in_order(n in 0usize..10_000, workers in 1usize..64) {
        let p = partition(n, workers).unwrap();
        prop_assert_eq!(p.blocks.len(), workers);

        let mut next = 0;
        for block in &p.blocks {
            prop_assert_eq!(block.start, next);
            prop_assert_eq!(block.len(), n / workers);
            next = block.end;
        }
        prop_assert_eq!(p.remainder.start, next);
        prop_assert_eq!(p.remainder.end, n);
        prop_assert!(p.remainder.len() < workers);
    }
}

#[test]
fn test_partition_rejects_zero_workers() {
    assert!(partition(100, 0).is_err());
}

#[test]
fn test_partition_with_more_workers_than_samples() {
    let p = partition(3, 8).unwrap();
    assert!(p.blocks.iter().all(|b| b.is_empty()));
    assert_eq!(p.remainder, 0..3);
}

#[test]
fn test_reduce_counts() {
    assert_eq!(reduce_counts(Vec::new()), 0);
    assert_eq!(reduce_counts(vec![3, 0, 7, 1]), 11);
}

#[test]
fn test_scan_block_seeding() {
    let grid = SamplingRange::new(100.0, 300.0, 10.0).unwrap();
    let tables = LookupTables::for_upper(300.0).unwrap();
    let z = RiemannSiegel::new(&tables);

    assert_eq!(scan_block(&z, &grid, 10..10, 9).unwrap(), 0);

    // Splitting the range and seeding from the left neighbour loses nothing
    let whole = scan_block(&z, &grid, 0..grid.len(), 0).unwrap();
    let left = scan_block(&z, &grid, 0..1000, 0).unwrap();
    let right = scan_block(&z, &grid, 1000..grid.len(), 999).unwrap();
    assert_eq!(whole, 109);
    assert_eq!(left + right, whole);

    // Self-seeding skips exactly the boundary pair
    let isolated = scan_block(&z, &grid, 1000..grid.len(), 1000).unwrap();
    let boundary = u64::from(
        z.evaluate(grid.t(999)).unwrap().is_sign_negative()
            != z.evaluate(grid.t(1000)).unwrap().is_sign_negative(),
    );
    assert_eq!(right, isolated + boundary);
}

#[test]
fn test_isolated_blocks_stay_within_worker_bound() {
    for &samp in &[1.0, 2.0, 4.0, 8.0] {
        let single = reference(5000.0, 6000.0, samp);
        for workers in [1usize, 2, 4, 8] {
            let c = count(5000.0, 6000.0, samp, workers, BoundaryMode::Isolated);
            assert!(c <= single, "samp {samp}, workers {workers}: {c} > {single}");
            assert!(
                c + (workers as u64 - 1) >= single,
                "samp {samp}, workers {workers}: {c} too far below {single}"
            );
        }
    }
}

#[test]
fn test_isolated_blocks_drop_boundary_pairs_at_coarse_sampling() {
    // One sample per unit is coarse enough that block boundaries hide zeros
    let single = reference(5000.0, 6000.0, 1.0);
    let isolated = count(5000.0, 6000.0, 1.0, 8, BoundaryMode::Isolated);
    assert!(isolated < single, "{isolated} vs {single}");
}

#[test]
fn test_stitched_blocks_match_single_worker() {
    for &samp in &[1.0, 8.0] {
        let single = reference(5000.0, 6000.0, samp);
        for workers in [2usize, 3, 5, 8, 16] {
            let c = count(5000.0, 6000.0, samp, workers, BoundaryMode::Stitched);
            assert_eq!(c, single, "samp {samp}, workers {workers}");
        }
    }
}

#[test]
fn test_single_worker_matches_reference_in_both_modes() {
    let single = reference(100.0, 300.0, 20.0);
    assert_eq!(count(100.0, 300.0, 20.0, 1, BoundaryMode::Isolated), single);
    assert_eq!(count(100.0, 300.0, 20.0, 1, BoundaryMode::Stitched), single);
}

#[test]
fn test_denser_sampling_never_loses_zeros() {
    let counts: Vec<u64> = [1.0, 2.0, 4.0, 8.0]
        .iter()
        .map(|&samp| reference(5000.0, 6000.0, samp))
        .collect();

    for pair in counts.windows(2) {
        assert!(pair[0] <= pair[1], "{counts:?}");
    }
    // θ(6000)/π − θ(5000)/π ≈ 1078 zeros in the interval
    assert!(counts[3] >= 1070, "{counts:?}");
}

#[test]
fn test_sampling_converges_below_three_hundred() {
    for &samp in &[10.0, 20.0, 40.0] {
        assert_eq!(reference(100.0, 300.0, samp), 109, "samp {samp}");
    }
}

#[test]
fn test_more_workers_than_samples() {
    let single = reference(14.0, 15.0, 2.0);
    assert_eq!(count(14.0, 15.0, 2.0, 8, BoundaryMode::Isolated), single);
    assert_eq!(single, 1);
}
