//! Threshold criteria regression test
//!
//! Runs every criterion over the synthetic fixtures and checks the
//! selected bins, branches and convergence reports.

use histthresh_methods::{
    Branch, ThresholdError, ThresholdMethod, ThresholdOptions, intermodes, isodata, li,
    triangle,
};
use histthresh_test::{
    RegParams, bimodal_ten, histogram_from_counts, monotonic, peak_with_tail, two_clusters,
};

#[test]
fn threshold_two_clusters_reg() {
    let mut rp = RegParams::new("threshold_two_clusters");

    // [25, 50, 25] clusters centered on bins 4 and 14 of 20
    let hist = two_clusters(20, 4, 14);
    let options = ThresholdOptions::default();

    for method in ThresholdMethod::ALL {
        let sel = method.select_bin(&hist, &options).expect("select_bin");
        eprintln!("  {:<20} bin {}", method, sel.bin);
        rp.check_between(4, 14, sel.bin);
        rp.check(sel.diagnostics.converged, method.name());
    }

    let expected = [
        (ThresholdMethod::Huang, 5),
        (ThresholdMethod::IsoData, 10),
        (ThresholdMethod::Intermodes, 9),
        (ThresholdMethod::KittlerIllingworth, 5),
        (ThresholdMethod::Li, 8),
        (ThresholdMethod::Shanbhag, 5),
        (ThresholdMethod::Triangle, 6),
        (ThresholdMethod::Yen, 5),
        (ThresholdMethod::MaxEntropy, 5),
    ];
    for (method, bin) in expected {
        let sel = method.select_bin(&hist, &options).expect("select_bin");
        rp.compare_bins(bin, sel.bin);
    }

    // already bimodal: no smoothing needed
    let sel = intermodes(&hist, 10, true).expect("intermodes");
    rp.compare_values(0.0, sel.diagnostics.iterations as f64, 0.0);
    let sel = intermodes(&hist, 10, false).expect("intermodes valley");
    rp.compare_bins(6, sel.bin);
    rp.check(sel.diagnostics.branch == Branch::Valley, "valley branch");

    assert!(rp.cleanup(), "threshold_two_clusters regression test failed");
}

#[test]
fn threshold_intermodes_reg() {
    let mut rp = RegParams::new("threshold_intermodes");

    let hist = bimodal_ten();
    let mid = intermodes(&hist, 100, true).expect("intermodes midpoint");
    rp.compare_bins(4, mid.bin);
    rp.compare_values(1.0, mid.diagnostics.iterations as f64, 0.0);
    rp.check(mid.diagnostics.branch == Branch::InterMode, "midpoint branch");

    let valley = intermodes(&hist, 100, false).expect("intermodes valley");
    rp.compare_bins(4, valley.bin);
    rp.check(valley.diagnostics.branch == Branch::Valley, "valley branch");

    // a monotonic histogram never becomes bimodal
    let result = intermodes(&monotonic(100), 10, true);
    rp.check(
        result == Err(ThresholdError::NonConvergent { iterations: 10 }),
        "non-convergent after cap",
    );

    assert!(rp.cleanup(), "threshold_intermodes regression test failed");
}

#[test]
fn threshold_triangle_reg() {
    let mut rp = RegParams::new("threshold_triangle");

    let hist = peak_with_tail();
    let sel = triangle(&hist, 0.01, 0.99).expect("triangle");
    rp.check_between(2, 9, sel.bin);
    rp.compare_bins(6, sel.bin);
    rp.check(sel.diagnostics.branch == Branch::HighTail, "high tail");

    let t = ThresholdMethod::Triangle
        .compute(&hist, &ThresholdOptions::default())
        .expect("compute");
    // bins are one unit wide starting at 0; upper edge of bin 6
    rp.compare_values(7.0, t.value, 1e-12);

    assert!(rp.cleanup(), "threshold_triangle regression test failed");
}

#[test]
fn threshold_iteration_cap_reg() {
    let mut rp = RegParams::new("threshold_iteration_cap");

    let hist = monotonic(100);
    for cap in [1, 2, 5, 1000] {
        let sel = isodata(&hist, cap).expect("isodata");
        rp.check(sel.diagnostics.iterations <= cap, "isodata within cap");
        rp.check(sel.bin < 99, "isodata keeps upper class");

        let sel = li(&hist, cap).expect("li");
        rp.check(sel.diagnostics.iterations <= cap, "li within cap");
        rp.check(sel.bin < 99, "li keeps upper class");
    }

    let sel = isodata(&hist, 1000).expect("isodata");
    rp.check(sel.diagnostics.converged, "isodata converges");
    rp.compare_bins(39, sel.bin);
    let sel = isodata(&hist, 1).expect("isodata capped");
    rp.check(!sel.diagnostics.converged, "isodata reports cap");

    let sel = li(&hist, 1000).expect("li");
    rp.check(sel.diagnostics.converged, "li converges");
    rp.compare_bins(30, sel.bin);

    assert!(rp.cleanup(), "threshold_iteration_cap regression test failed");
}

#[test]
fn threshold_li_closed_form_reg() {
    let mut rp = RegParams::new("threshold_li_closed_form");

    // fixed point of t = (m1 - m2) / (ln m1 - ln m2) on 0-based bin means
    let log_mean = |m1: f64, m2: f64| {
        let ln = |x: f64| if x > 0.0 { x.ln() } else { 0.0 };
        ((m1 - m2) / (ln(m1) - ln(m2))).round() as usize
    };

    // spikes at 1 and 20: every split in [1, 19] has means 1 and 20
    let mut counts = vec![0u64; 24];
    counts[1] = 5;
    counts[20] = 5;
    let sel = li(&histogram_from_counts(&counts), 100).expect("li spikes");
    rp.compare_bins(log_mean(1.0, 20.0), sel.bin);
    rp.compare_bins(6, sel.bin);

    // lower class in bin 0
    let sel = li(&histogram_from_counts(&[4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8]), 100)
        .expect("li bin zero");
    rp.compare_bins(log_mean(0.0, 12.0), sel.bin);
    rp.compare_bins(5, sel.bin);

    assert!(rp.cleanup(), "threshold_li_closed_form regression test failed");
}
