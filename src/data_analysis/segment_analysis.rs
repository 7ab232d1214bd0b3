// src/data_analysis/segment_analysis.rs

use log::info;

use crate::data_analysis::spectral_analysis::{analyze_spectrum, SpectrumResult};
use crate::data_analysis::statistics::{mean_voltage, std_dev};
use crate::data_input::segment::CleanedSegment;
use crate::error::AnalysisResult;

/// Everything computed for one acquisition mode.
#[derive(Debug, Clone)]
pub struct SegmentAnalysis {
    pub mode_index: usize,
    pub raw_rows: usize,
    pub removed_rows: usize,
    pub mean_v: f64,
    pub std_dev_v: f64,
    pub spectrum: SpectrumResult,
}

impl SegmentAnalysis {
    pub fn sampling_frequency_hz(&self) -> f64 {
        self.spectrum.sampling_frequency_hz
    }
}

pub fn analyze_segment(segment: &CleanedSegment) -> AnalysisResult<SegmentAnalysis> {
    let std_dev_v = std_dev(segment)?;
    let mean_v = mean_voltage(segment)?;
    let spectrum = analyze_spectrum(segment)?;
    info!(
        "Mode {}: {} row(s) kept, std dev {:.6e} V, {:.2} Hz",
        segment.mode_index() + 1,
        segment.len(),
        std_dev_v,
        spectrum.sampling_frequency_hz
    );
    Ok(SegmentAnalysis {
        mode_index: segment.mode_index(),
        raw_rows: segment.raw_rows,
        removed_rows: segment.removed_rows,
        mean_v,
        std_dev_v,
        spectrum,
    })
}

/// Analyses every segment; the first failure aborts the whole batch.
pub fn analyze_segments(segments: &[CleanedSegment]) -> AnalysisResult<Vec<SegmentAnalysis>> {
    segments.iter().map(analyze_segment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::segment::Segment;
    use crate::error::AnalysisError;
    use ndarray::{array, Array2};

    fn cleaned(mode: usize, table: Array2<f64>) -> CleanedSegment {
        let rows = table.nrows();
        CleanedSegment {
            segment: Segment::new(mode, 1, table),
            raw_rows: rows,
            removed_rows: 0,
            reference_average: None,
        }
    }

    #[test]
    fn test_constant_segment() {
        let analysis = analyze_segment(&cleaned(
            0,
            array![[0.0, 1.0, 0.0], [1.0, 1.0, 1000.0], [2.0, 1.0, 2000.0]],
        ))
        .unwrap();
        assert_eq!(analysis.std_dev_v, 0.0);
        assert!((analysis.mean_v - 1.0).abs() < 1e-12);
        assert!((analysis.sampling_frequency_hz() - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_failure_aborts_batch() {
        let good = cleaned(0, array![[0.0, 1.0, 0.0], [1.0, 1.0, 10.0]]);
        let empty = cleaned(1, Array2::zeros((0, 3)));
        assert!(matches!(
            analyze_segments(&[good, empty]),
            Err(AnalysisError::EmptySegment { mode: 1 })
        ));
    }
}

// src/data_analysis/segment_analysis.rs
