use serde::{Deserialize, Serialize};

/// Discrete risk band derived from a point total. Bands partition the
/// non-negative integers and increase in severity with points; upstream
/// rating strings are never trusted for this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBand {
    Acceptable,
    Moderate,
    ReviewRequired,
    Fail,
}

/// Label shown when a point total is absent or unparseable.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Neutral indicator paired with [`UNKNOWN_LABEL`].
pub const UNKNOWN_INDICATOR: &str = ":white_circle:";

impl RiskBand {
    /// Classify a point total. Negative input is out of contract but clamps
    /// to zero instead of panicking.
    pub fn classify(points: i64) -> Self {
        match points.max(0) {
            0..=249 => RiskBand::Acceptable,
            250..=999 => RiskBand::Moderate,
            1000..=9999 => RiskBand::ReviewRequired,
            _ => RiskBand::Fail,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Acceptable => "Acceptable",
            RiskBand::Moderate => "Moderate",
            RiskBand::ReviewRequired => "Review Required",
            RiskBand::Fail => "Fail",
        }
    }

    /// Slack emoji shortcode used as the visual indicator for the band.
    pub const fn indicator(self) -> &'static str {
        match self {
            RiskBand::Acceptable => ":large_green_circle:",
            RiskBand::Moderate => ":large_yellow_circle:",
            RiskBand::ReviewRequired => ":large_orange_circle:",
            RiskBand::Fail => ":red_circle:",
        }
    }
}

/// Thousands-separated decimal rendering for point totals.
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if points < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
