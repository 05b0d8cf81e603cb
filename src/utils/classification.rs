//! Percentile Classification
//!
//! Bins each county's metric value into an impact tier using thresholds
//! computed over the current distribution of that metric across all
//! counties. Thresholds are data-driven, not fixed: every input or metric
//! change recomputes them from scratch over the full table.
//!
//! Classification is a two-phase operation. Phase one needs every county's
//! value (the 33rd/67th percentiles are statistics of the whole table);
//! phase two assigns a tier per county against those thresholds.

use serde::Serialize;

/// Impact tier for one county under the selected metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImpactCategory {
    Low,
    Medium,
    High,
    /// County has no numeric value for the selected metric.
    NoData,
}

impl ImpactCategory {
    /// Stable numeric code for tiered color rendering. Consumers map these
    /// onto a color ramp, so the ordering Low < Medium < High < NoData is
    /// part of the contract.
    pub fn color_code(&self) -> u8 {
        match self {
            ImpactCategory::Low => 0,
            ImpactCategory::Medium => 1,
            ImpactCategory::High => 2,
            ImpactCategory::NoData => 3,
        }
    }

    /// Friendly name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            ImpactCategory::Low => "Low",
            ImpactCategory::Medium => "Medium",
            ImpactCategory::High => "High",
            ImpactCategory::NoData => "No Data",
        }
    }
}

/// The 33rd/67th percentile cutoffs for one metric's current distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThresholds {
    pub p33: f64,
    pub p67: f64,
}

/// Compute tier thresholds over the numeric subset of a metric's values.
///
/// Unavailable entries must already be excluded by the caller. Returns
/// `None` when the subset is empty: with no data there are no percentiles,
/// and every county classifies as NoData.
pub fn compute_thresholds(values: &[f64]) -> Option<TierThresholds> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(TierThresholds {
        p33: percentile_linear(&sorted, 33.0),
        p67: percentile_linear(&sorted, 67.0),
    })
}

/// Linear-interpolation percentile estimate over a sorted slice.
///
/// rank = pct/100 × (n−1); the estimate interpolates between the two
/// bracketing order statistics.
fn percentile_linear(sorted: &[f64], pct: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = pct / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let fraction = rank - lo as f64;

    sorted[lo] + fraction * (sorted[hi] - sorted[lo])
}

/// Assign an impact tier to one county value.
///
/// - Unavailable value → NoData
/// - v ≤ p33 → Low
/// - p33 < v ≤ p67 → Medium
/// - v > p67 → High
///
/// With no thresholds (empty metric domain) every county is NoData.
pub fn classify(value: Option<f64>, thresholds: Option<&TierThresholds>) -> ImpactCategory {
    let (Some(v), Some(t)) = (value, thresholds) else {
        return ImpactCategory::NoData;
    };

    if v <= t.p33 {
        ImpactCategory::Low
    } else if v <= t.p67 {
        ImpactCategory::Medium
    } else {
        ImpactCategory::High
    }
}
