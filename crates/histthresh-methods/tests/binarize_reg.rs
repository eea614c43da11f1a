//! Binarization regression test
//!
//! Thresholds a two-level grid with every criterion and checks that the
//! inside label marks exactly the dark samples.

use histthresh_core::{HistogramBuilder, Region, SampleGrid};
use histthresh_methods::{
    BinaryLabels, ThresholdMethod, ThresholdOptions, binarize, threshold_to_binary,
};
use histthresh_test::RegParams;

/// 16x8 grid: dark (40..=52) on the left, bright (200..=212) on the right
fn two_level_grid() -> SampleGrid<u8> {
    SampleGrid::from_fn(16, 8, |x, y| {
        let jitter = 4 * ((x + y) % 4) as u8;
        if x < 6 { 40 + jitter } else { 200 + jitter }
    })
}

#[test]
fn binarize_reg() {
    let mut rp = RegParams::new("binarize");

    let grid = two_level_grid();
    let options = ThresholdOptions::default().with_bins(32);

    // --- Test 1: every criterion separates the two levels ---
    for method in ThresholdMethod::ALL {
        let (t, labels) =
            threshold_to_binary(&grid, method, &options, BinaryLabels::<u8>::default())
                .expect("threshold_to_binary");
        eprintln!("  {:<20} value {:.2}", method, t.value);
        rp.compare_values(128.0, labels.len() as f64, 0.0);
        let inside = labels.iter().filter(|&&v| v == 255).count();
        rp.compare_values(48.0, inside as f64, 0.0);
    }

    // --- Test 2: fixed threshold, inclusive at the boundary ---
    let labels = binarize(&grid, None, 52.0, BinaryLabels::new(true, false));
    rp.compare_values(48.0, labels.iter().filter(|&&v| v).count() as f64, 0.0);
    let labels = binarize(&grid, None, 39.0, BinaryLabels::new(1u16, 2u16));
    rp.check(labels.iter().all(|&v| v == 2), "all outside below minimum");

    // --- Test 3: region restricts both threshold and labels ---
    let region = Region::new_unchecked(4, 0, 4, 8);
    let (t, labels) = threshold_to_binary(
        &grid,
        ThresholdMethod::IsoData,
        &options.clone().with_region(region),
        BinaryLabels::<u8>::default(),
    )
    .expect("region threshold");
    rp.check(t.value > 52.0 && t.value < 200.0, "region threshold");
    rp.compare_values(32.0, labels.len() as f64, 0.0);
    rp.compare_values(
        16.0,
        labels.iter().filter(|&&v| v == 255).count() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "binarize regression test failed");
}

#[test]
fn binarize_lower_class_reg() {
    let mut rp = RegParams::new("binarize_lower_class");

    // integer samples on bin edges: width 1, so 1 and 2 fall in bin 1
    let edges = vec![0u8, 0, 0, 1, 1, 2, 2, 2];
    let options = ThresholdOptions::default().with_bins(2);
    let (t, labels) = threshold_to_binary(
        &edges,
        ThresholdMethod::IsoData,
        &options,
        BinaryLabels::new(true, false),
    )
    .expect("threshold_to_binary");
    rp.compare_bins(0, t.bin);
    rp.compare_values(1.0, t.value, 0.0);
    rp.compare_values(3.0, labels.iter().filter(|&&v| v).count() as f64, 0.0);

    // inside labels equal the lower class for every criterion
    let grid = SampleGrid::from_fn(24, 6, |x, y| ((x * 5 + y * 7) % 31) as u16 * 8);
    let options = ThresholdOptions::default().with_bins(16);
    let hist = HistogramBuilder::new(16).build(&grid).expect("build");
    for method in ThresholdMethod::ALL {
        let Ok((t, labels)) =
            threshold_to_binary(&grid, method, &options, BinaryLabels::new(true, false))
        else {
            continue;
        };
        let lower: u64 = hist.counts()[..=t.bin].iter().sum();
        let inside = labels.iter().filter(|&&v| v).count();
        eprintln!("  {:<20} bin {:>2} inside {}", method, t.bin, inside);
        rp.compare_values(lower as f64, inside as f64, 0.0);
    }

    assert!(rp.cleanup(), "binarize_lower_class regression test failed");
}
