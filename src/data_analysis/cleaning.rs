// src/data_analysis/cleaning.rs

use log::{debug, warn};

use crate::constants::{CLEAN_REFERENCE_LIMIT_V, CLEAN_TOLERANCE_V};
use crate::data_input::segment::{CleanedSegment, Segment};

/// Thresholds for dropping readings that are plainly wrong for a static-voltage measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleaningConfig {
    /// Maximum absolute distance (V) from the reference average.
    pub tolerance_v: f64,
    /// Only readings strictly below this value (V) enter the reference average.
    pub reference_limit_v: f64,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            tolerance_v: CLEAN_TOLERANCE_V,
            reference_limit_v: CLEAN_REFERENCE_LIMIT_V,
        }
    }
}

/// Average of the voltages below `reference_limit_v`, or `None` if there are none.
pub fn reference_average(voltages: &[f64], reference_limit_v: f64) -> Option<f64> {
    let (sum, count) = voltages
        .iter()
        .filter(|&&v| v < reference_limit_v)
        .fold((0.0, 0usize), |(sum, count), &v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Indices of the rows within `tolerance_v` of `average`.
fn rows_within_tolerance(voltages: &[f64], average: f64, tolerance_v: f64) -> Vec<usize> {
    voltages
        .iter()
        .enumerate()
        .filter(|(_, &v)| (v - average).abs() <= tolerance_v)
        .map(|(i, _)| i)
        .collect()
}

/// Removes outlier rows from `segment`.
///
/// One reference average is taken over the readings below `reference_limit_v`, then every row
/// further than `tolerance_v` from it is dropped in a single pass. A segment may come out empty;
/// that is reported later by the statistics and spectral stages.
pub fn clean_segment(segment: Segment, config: &CleaningConfig) -> CleanedSegment {
    let raw_rows = segment.len();
    let mode_number = segment.mode_index + 1;
    let voltages = segment.voltages().to_vec();

    let Some(average) = reference_average(&voltages, config.reference_limit_v) else {
        if !segment.is_empty() {
            warn!(
                "Mode {}: no reading below {} V, keeping {} row(s) uncleaned",
                mode_number, config.reference_limit_v, raw_rows
            );
        }
        return CleanedSegment {
            segment,
            raw_rows,
            removed_rows: 0,
            reference_average: None,
        };
    };

    let keep = rows_within_tolerance(&voltages, average, config.tolerance_v);
    let segment = if keep.len() == raw_rows {
        segment
    } else {
        debug!(
            "Mode {}: dropping {} row(s) further than {} V from {:.6} V",
            mode_number,
            raw_rows - keep.len(),
            config.tolerance_v,
            average
        );
        segment.select_rows(&keep)
    };

    if segment.is_empty() {
        warn!("Mode {}: cleaning removed all {} row(s)", mode_number, raw_rows);
    }
    CleanedSegment {
        removed_rows: raw_rows - segment.len(),
        segment,
        raw_rows,
        reference_average: Some(average),
    }
}

/// Cleans every segment with the same configuration.
pub fn clean_segments(segments: Vec<Segment>, config: &CleaningConfig) -> Vec<CleanedSegment> {
    segments
        .into_iter()
        .map(|segment| clean_segment(segment, config))
        .collect()
}


// src/data_analysis/cleaning.rs
