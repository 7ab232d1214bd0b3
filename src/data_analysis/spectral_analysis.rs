// src/data_analysis/spectral_analysis.rs

use ndarray::Array1;

use crate::constants::{MICROSECONDS_PER_SECOND, PEAK_RELATIVE_FLOOR};
use crate::data_analysis::fft_utils;
use crate::data_input::segment::CleanedSegment;
use crate::error::{AnalysisError, AnalysisResult};

/// Frequency-domain view of one cleaned segment.
#[derive(Debug, Clone)]
pub struct SpectrumResult {
    /// Full-length DFT magnitude of the voltage column (index 0 = DC).
    pub magnitudes: Array1<f64>,
    /// Frequency of each bin in Hz, same length as `magnitudes`.
    pub frequencies: Array1<f64>,
    pub sampling_frequency_hz: f64,
    /// Strongest non-DC bin up to Nyquist as (Hz, magnitude).
    pub dominant_peak: Option<(f64, f64)>,
}

impl SpectrumResult {
    /// (frequency, magnitude) pairs without the DC bin, in bin order.
    pub fn points_without_dc(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(self.magnitudes.iter())
            .skip(1)
            .map(|(&f, &m)| (f, m))
            .collect()
    }
}

/// Average sampling frequency: `rows / (last timestamp - first timestamp) * 1e6`.
pub fn sampling_frequency(segment: &CleanedSegment) -> AnalysisResult<f64> {
    let mode = segment.mode_index();
    let timestamps = segment.timestamps_us();
    let (Some(&first), Some(&last)) = (timestamps.first(), timestamps.last()) else {
        return Err(AnalysisError::EmptySegment { mode });
    };
    let span_us = last - first;
    if !span_us.is_finite() || span_us <= 0.0 {
        return Err(AnalysisError::NonPositiveTimeSpan { mode, span_us });
    }
    Ok(timestamps.len() as f64 / span_us * MICROSECONDS_PER_SECOND)
}

/// `n` evenly spaced frequencies from 0 to `fs * (n - 1) / n`.
pub fn frequency_axis(n: usize, sampling_frequency_hz: f64) -> Array1<f64> {
    if n == 0 {
        return Array1::zeros(0);
    }
    let bin_width = sampling_frequency_hz / n as f64;
    Array1::from_shape_fn(n, |i| i as f64 * bin_width)
}

/// Largest-magnitude bin in `1..=n/2`, returned as (frequency, magnitude).
///
/// A flat signal leaves only rounding noise outside DC, so `None` is returned when the
/// strongest bin does not rise above `PEAK_RELATIVE_FLOOR` of the DC magnitude.
pub fn find_dominant_peak(frequencies: &Array1<f64>, magnitudes: &Array1<f64>) -> Option<(f64, f64)> {
    let n = magnitudes.len();
    if n < 2 {
        return None;
    }
    let floor = PEAK_RELATIVE_FLOOR * magnitudes[0].max(1.0);
    (1..=n / 2)
        .map(|k| (frequencies[k], magnitudes[k]))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .filter(|&(_, magnitude)| magnitude > floor)
}

/// DFT magnitude of the voltage column. Length matches the segment.
pub fn voltage_spectrum(segment: &CleanedSegment) -> AnalysisResult<Array1<f64>> {
    if segment.is_empty() {
        return Err(AnalysisError::EmptySegment {
            mode: segment.mode_index(),
        });
    }
    fft_utils::magnitude_spectrum(&segment.voltages().to_owned())
}

/// Runs the full spectral analysis of one segment.
pub fn analyze_spectrum(segment: &CleanedSegment) -> AnalysisResult<SpectrumResult> {
    let magnitudes = voltage_spectrum(segment)?;
    let sampling_frequency_hz = sampling_frequency(segment)?;
    let frequencies = frequency_axis(magnitudes.len(), sampling_frequency_hz);
    let dominant_peak = find_dominant_peak(&frequencies, &magnitudes);
    Ok(SpectrumResult {
        magnitudes,
        frequencies,
        sampling_frequency_hz,
        dominant_peak,
    })
}


// src/data_analysis/spectral_analysis.rs
