// src/data_analysis/statistics.rs

use crate::data_input::segment::CleanedSegment;
use crate::error::{AnalysisError, AnalysisResult};

/// Mean of the voltage column.
pub fn mean_voltage(segment: &CleanedSegment) -> AnalysisResult<f64> {
    segment
        .voltages()
        .mean()
        .ok_or(AnalysisError::EmptySegment {
            mode: segment.mode_index(),
        })
}

/// Standard deviation of the voltage column: `sqrt(sum((x - mean)^2) / N)`.
/// Population form, divisor N.
pub fn std_dev(segment: &CleanedSegment) -> AnalysisResult<f64> {
    let mean = mean_voltage(segment)?;
    let voltages = segment.voltages();
    let n = voltages.len() as f64;
    let variance = voltages.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    Ok(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::segment::Segment;
    use ndarray::Array2;

    fn cleaned_from_voltages(voltages: &[f64]) -> CleanedSegment {
        let table = Array2::from_shape_fn((voltages.len(), 3), |(r, c)| match c {
            1 => voltages[r],
            _ => r as f64,
        });
        CleanedSegment {
            segment: Segment::new(3, 1, table),
            raw_rows: voltages.len(),
            removed_rows: 0,
            reference_average: None,
        }
    }

    #[test]
    fn test_identical_values_have_zero_deviation() {
        assert_eq!(std_dev(&cleaned_from_voltages(&[1.0, 1.0, 1.0])).unwrap(), 0.0);
        assert_eq!(std_dev(&cleaned_from_voltages(&[2.5])).unwrap(), 0.0);
    }

    #[test]
    fn test_population_divisor() {
        // mean 5, squared deviations sum to 32, N = 8 -> variance 4
        let sd = std_dev(&cleaned_from_voltages(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])).unwrap();
        assert!((sd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_deviation_is_non_negative() {
        let sd = std_dev(&cleaned_from_voltages(&[2.4998, 2.5003, 2.5001, 2.4999])).unwrap();
        assert!(sd >= 0.0);
        assert!(sd < 1e-3);
    }

    #[test]
    fn test_empty_segment_is_an_error() {
        match std_dev(&cleaned_from_voltages(&[])) {
            Err(AnalysisError::EmptySegment { mode }) => assert_eq!(mode, 3),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(mean_voltage(&cleaned_from_voltages(&[])).is_err());
    }
}

// src/data_analysis/statistics.rs
