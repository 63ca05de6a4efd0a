//! Distribution statistics behind the report charts.
//!
//! Histogram of popularity, popularity/rating scatter with Pearson
//! correlation, top-rated listing and per-field summaries. Missing values are
//! skipped, never treated as zero.

use crate::models::AttractionRecord;
use serde::{Deserialize, Serialize};

/// One equal-width histogram bin, `[lower, upper)` except the last which is closed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Popularity/rating pairs and their correlation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub points: Vec<(f64, f64)>,
    pub pearson: Option<f64>,
}

/// Mean and range of one numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldSummary {
    fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(Self {
            count: values.len(),
            mean,
            min,
            max,
        })
    }
}

/// Overview of a record set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub attractions: usize,
    pub comments: usize,
    pub popularity: Option<FieldSummary>,
    pub rating: Option<FieldSummary>,
}

pub fn summarize(records: &[AttractionRecord]) -> RecordSummary {
    RecordSummary {
        attractions: records.len(),
        comments: records.iter().map(|r| r.comments.len()).sum(),
        popularity: FieldSummary::from_values(&present(records, |r| r.popularity)),
        rating: FieldSummary::from_values(&present(records, |r| r.rating)),
    }
}

/// Equal-width histogram over the observed popularity range.
///
/// When every value is identical the range is widened to `value ± 0.5`.
pub fn popularity_histogram(records: &[AttractionRecord], bins: usize) -> Vec<HistogramBin> {
    let values = present(records, |r| r.popularity);
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for value in values {
        let idx = (((value - lo) / width) as usize).min(bins - 1);
        histogram[idx].count += 1;
    }

    histogram
}

/// Scatter points where both scores are present, with Pearson's r
pub fn rating_correlation(records: &[AttractionRecord]) -> Correlation {
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|r| Some((r.popularity?, r.rating?)))
        .collect();
    let pearson = pearson(&points);
    Correlation { points, pearson }
}

/// Highest-rated attractions first; unrated ones are left out
pub fn top_rated(records: &[AttractionRecord], n: usize) -> Vec<AttractionRecord> {
    let mut rated: Vec<&AttractionRecord> = records.iter().filter(|r| r.rating.is_some()).collect();
    rated.sort_by(|a, b| {
        let (a, b) = (a.rating.unwrap_or_default(), b.rating.unwrap_or_default());
        b.total_cmp(&a)
    });
    rated.into_iter().take(n).cloned().collect()
}

fn present(records: &[AttractionRecord], field: impl Fn(&AttractionRecord) -> Option<f64>) -> Vec<f64> {
    records.iter().filter_map(field).collect()
}

fn pearson(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in points {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        None
    } else {
        Some(cov / (var_x.sqrt() * var_y.sqrt()))
    }
}
