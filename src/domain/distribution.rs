//! ROI distribution bucketing for histograms and percentile placement.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Bucket center, a multiple of the bin width.
    pub bucket: f64,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCount {
    pub range: String,
    pub count: usize,
}

/// Count values per bucket of `bin_width`, ascending by bucket.
///
/// Each value lands in the bucket nearest to it. Non-finite values and a
/// non-positive width are ignored.
pub fn roi_histogram(values: &[f64], bin_width: f64) -> Vec<HistogramBin> {
    if !(bin_width > 0.0) {
        return Vec::new();
    }
    let mut bins: BTreeMap<i64, usize> = BTreeMap::new();
    for value in values.iter().filter(|v| v.is_finite()) {
        let slot = (value / bin_width).round() as i64;
        *bins.entry(slot).or_default() += 1;
    }
    bins.into_iter()
        .map(|(slot, count)| {
            let bucket = slot as f64 * bin_width;
            HistogramBin {
                bucket,
                label: format!("{bucket:.1}%"),
                count,
            }
        })
        .collect()
}

const BANDS: [(&str, f64, f64); 7] = [
    ("<5%", f64::NEG_INFINITY, 5.0),
    ("5-6%", 5.0, 6.0),
    ("6-7%", 6.0, 7.0),
    ("7-8%", 7.0, 8.0),
    ("8-9%", 8.0, 9.0),
    ("9-10%", 9.0, 10.0),
    ("10%+", 10.0, f64::INFINITY),
];

/// Counts per fixed ROI band (lower bound inclusive), every band listed.
pub fn roi_bands(values: &[f64]) -> Vec<BandCount> {
    BANDS
        .iter()
        .map(|(range, lower, upper)| BandCount {
            range: range.to_string(),
            count: values
                .iter()
                .filter(|v| **v >= *lower && **v < *upper)
                .count(),
        })
        .collect()
}

/// Percentage of `population` at or below `value`; 0 for an empty population.
pub fn percentile_rank(value: f64, population: &[f64]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let at_or_below = population.iter().filter(|v| **v <= value).count();
    at_or_below as f64 / population.len() as f64 * 100.0
}

/// Linear-interpolated quantile of an ascending slice, `q` in [0, 1].
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
        }
    }
}
