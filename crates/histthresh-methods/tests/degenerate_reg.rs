//! Degenerate and empty input regression test

use histthresh_core::{Error, SampleGrid};
use histthresh_methods::{Branch, ThresholdError, ThresholdMethod, ThresholdOptions, compute_threshold};
use histthresh_test::{RegParams, histogram_from_counts, spike};

#[test]
fn degenerate_reg() {
    let mut rp = RegParams::new("degenerate");
    let options = ThresholdOptions::default();

    for at in [0, 5, 15] {
        let hist = spike(16, at, 40);
        for method in ThresholdMethod::ALL {
            let t = method.compute(&hist, &options).expect("degenerate compute");
            rp.compare_bins(at, t.bin);
            rp.check(t.diagnostics.branch == Branch::Degenerate, method.name());
            rp.compare_values((at + 1) as f64, t.value, 1e-12);
        }
    }

    // constant samples land in bin 0 with unit width
    let grid = SampleGrid::from_fn(6, 6, |_, _| 77u8);
    for method in ThresholdMethod::ALL {
        let t = compute_threshold(&grid, method, &options).expect("constant grid");
        rp.compare_bins(0, t.bin);
        rp.compare_values(78.0, t.value, 1e-12);
    }

    assert!(rp.cleanup(), "degenerate regression test failed");
}

#[test]
fn degenerate_no_valid_split_reg() {
    let mut rp = RegParams::new("degenerate_no_valid_split");

    // two isolated bins: no class can have positive variance
    let hist = histogram_from_counts(&[0, 6, 0, 0, 0, 6, 0]);
    let options = ThresholdOptions::default();
    let result = ThresholdMethod::KittlerIllingworth.select_bin(&hist, &options);
    rp.check(
        matches!(result, Err(ThresholdError::NoValidSplit { .. })),
        "kittler-illingworth has no valid split",
    );
    for method in [
        ThresholdMethod::Shanbhag,
        ThresholdMethod::Yen,
        ThresholdMethod::MaxEntropy,
    ] {
        let sel = method.select_bin(&hist, &options).expect("two bins split");
        rp.check_between(0, 5, sel.bin);
    }

    assert!(rp.cleanup(), "degenerate_no_valid_split regression test failed");
}

#[test]
fn degenerate_empty_input_reg() {
    let mut rp = RegParams::new("degenerate_empty_input");

    let empty: Vec<u16> = Vec::new();
    let grid = SampleGrid::from_fn(4, 4, |x, y| (x + y) as f32);
    let outside = ThresholdOptions::default()
        .with_region(histthresh_core::Region::new_unchecked(10, 10, 4, 4));
    for method in ThresholdMethod::ALL {
        rp.check(
            compute_threshold(&empty, method, &ThresholdOptions::default())
                == Err(ThresholdError::Core(Error::EmptyInput)),
            "empty source",
        );
        rp.check(
            compute_threshold(&grid, method, &outside)
                == Err(ThresholdError::Core(Error::EmptyInput)),
            "region outside source",
        );
    }

    let bad = vec![1.0f64, f64::INFINITY];
    rp.check(
        compute_threshold(&bad, ThresholdMethod::Huang, &ThresholdOptions::default())
            == Err(ThresholdError::Core(Error::NonFiniteSample { index: 1 })),
        "non-finite sample",
    );

    assert!(rp.cleanup(), "degenerate_empty_input regression test failed");
}
