use crate::assessment::banding::{format_points, RiskBand};

#[test]
fn bands_cover_documented_ranges() {
    assert_eq!(RiskBand::classify(0), RiskBand::Acceptable);
    assert_eq!(RiskBand::classify(249), RiskBand::Acceptable);
    assert_eq!(RiskBand::classify(250), RiskBand::Moderate);
    assert_eq!(RiskBand::classify(999), RiskBand::Moderate);
    assert_eq!(RiskBand::classify(1000), RiskBand::ReviewRequired);
    assert_eq!(RiskBand::classify(9999), RiskBand::ReviewRequired);
    assert_eq!(RiskBand::classify(10_000), RiskBand::Fail);
    assert_eq!(RiskBand::classify(i64::MAX), RiskBand::Fail);
}

#[test]
fn negative_points_clamp_to_the_lowest_band() {
    assert_eq!(RiskBand::classify(-5), RiskBand::Acceptable);
    assert_eq!(RiskBand::classify(i64::MIN), RiskBand::Acceptable);
}

#[test]
fn severity_never_decreases_as_points_grow() {
    let mut previous = RiskBand::classify(0);
    for points in 1..=11_000 {
        let band = RiskBand::classify(points);
        assert!(band >= previous, "band regressed at {points} points");
        previous = band;
    }
}

#[test]
fn every_band_has_a_label_and_indicator() {
    assert_eq!(RiskBand::Acceptable.label(), "Acceptable");
    assert_eq!(RiskBand::Acceptable.indicator(), ":large_green_circle:");
    assert_eq!(RiskBand::Moderate.label(), "Moderate");
    assert_eq!(RiskBand::Moderate.indicator(), ":large_yellow_circle:");
    assert_eq!(RiskBand::ReviewRequired.label(), "Review Required");
    assert_eq!(RiskBand::ReviewRequired.indicator(), ":large_orange_circle:");
    assert_eq!(RiskBand::Fail.label(), "Fail");
    assert_eq!(RiskBand::Fail.indicator(), ":red_circle:");
}

#[test]
fn points_render_with_thousands_separators() {
    assert_eq!(format_points(0), "0");
    assert_eq!(format_points(500), "500");
    assert_eq!(format_points(1_000), "1,000");
    assert_eq!(format_points(12_345), "12,345");
    assert_eq!(format_points(1_234_567), "1,234,567");
    assert_eq!(format_points(-4_200), "-4,200");
}
