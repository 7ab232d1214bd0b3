// src/plot_functions/plot_amplitude_spectrum.rs

use ndarray::{s, Array1};
use ndarray_stats::QuantileExt;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{COLOR_PEAK_MARKER, COLOR_SPECTRUM_TRACE, LINE_WIDTH_PLOT};
use crate::data_analysis::segment_analysis::SegmentAnalysis;
use crate::mode_labels::{AxisLabels, ModeLabels};
use crate::plot_framework::{calculate_range, draw_single_plot, PlotConfig, PlotSeries};

pub fn spectrum_plot_path(output_dir: &Path, root_name: &str, mode_index: usize) -> PathBuf {
    output_dir.join(format!("{}_mode{}_spectrum.png", root_name, mode_index + 1))
}

/// Magnitude spectrum against frequency with the DC bin dropped from both axes.
/// `None` when nothing is left after dropping DC.
pub fn spectrum_plot_config(
    analysis: &SegmentAnalysis,
    mode_labels: &ModeLabels,
    axis_labels: &AxisLabels,
) -> Option<PlotConfig> {
    let spectrum = &analysis.spectrum;
    if spectrum.magnitudes.len() < 2 {
        return None;
    }
    let frequencies: Array1<f64> = spectrum.frequencies.slice(s![1..]).to_owned();
    let magnitudes: Array1<f64> = spectrum.magnitudes.slice(s![1..]).to_owned();

    let (Ok(&freq_min), Ok(&freq_max)) = (frequencies.min(), frequencies.max()) else {
        return None;
    };
    let (Ok(&mag_min), Ok(&mag_max)) = (magnitudes.min(), magnitudes.max()) else {
        return None;
    };
    let x_range = if freq_max > freq_min {
        freq_min..freq_max
    } else {
        let (lo, hi) = calculate_range(freq_min, freq_max);
        lo..hi
    };
    let (y_min, y_max) = calculate_range(mag_min, mag_max);

    Some(PlotConfig {
        title: mode_labels.label(analysis.mode_index),
        x_range,
        y_range: y_min.max(0.0)..y_max,
        series: vec![PlotSeries {
            data: spectrum.points_without_dc(),
            label: format!("fs = {:.1} Hz", spectrum.sampling_frequency_hz),
            color: *COLOR_SPECTRUM_TRACE,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: axis_labels.frequency.clone(),
        y_label: axis_labels.amplitude.clone(),
        peaks: spectrum.dominant_peak.into_iter().collect(),
        peak_color: *COLOR_PEAK_MARKER,
    })
}

/// Generates the frequency-domain plot for one mode.
pub fn plot_amplitude_spectrum(
    analysis: &SegmentAnalysis,
    mode_labels: &ModeLabels,
    axis_labels: &AxisLabels,
    output_dir: &Path,
    root_name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = spectrum_plot_path(output_dir, root_name, analysis.mode_index);
    let config = spectrum_plot_config(analysis, mode_labels, axis_labels);
    if let Some((peak_hz, peak_mag)) = analysis.spectrum.dominant_peak {
        println!(
            "  {}: Primary Peak value {:.4} at {:.2} Hz",
            mode_labels.label(analysis.mode_index),
            peak_mag,
            peak_hz
        );
    }
    draw_single_plot(&output_path, root_name, "Spectrum", config.as_ref())?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::spectral_analysis::SpectrumResult;
    use ndarray::array;

    fn analysis_with(magnitudes: Array1<f64>, frequencies: Array1<f64>) -> SegmentAnalysis {
        SegmentAnalysis {
            mode_index: 2,
            raw_rows: magnitudes.len(),
            removed_rows: 0,
            mean_v: 1.0,
            std_dev_v: 0.0,
            spectrum: SpectrumResult {
                magnitudes,
                frequencies,
                sampling_frequency_hz: 400.0,
                dominant_peak: Some((100.0, 3.0)),
            },
        }
    }

    #[test]
    fn test_dc_excluded_from_both_axes() {
        let analysis = analysis_with(array![50.0, 1.0, 3.0, 1.0], array![0.0, 100.0, 200.0, 300.0]);
        let config = spectrum_plot_config(&analysis, &ModeLabels::default(), &AxisLabels::default()).unwrap();
        assert_eq!(config.series[0].data, vec![(100.0, 1.0), (200.0, 3.0), (300.0, 1.0)]);
        assert_eq!(config.x_range, 100.0..300.0);
        // y range is driven by the non-DC bins only
        assert!(config.y_range.end < 50.0);
        assert_eq!(config.peaks, vec![(100.0, 3.0)]);
        assert_eq!(config.title, ModeLabels::default().label(2));
    }

    #[test]
    fn test_two_bins_has_valid_range() {
        let analysis = analysis_with(array![2.0, 0.0], array![0.0, 200.0]);
        let config = spectrum_plot_config(&analysis, &ModeLabels::default(), &AxisLabels::default()).unwrap();
        assert!(config.has_valid_ranges());
    }

    #[test]
    fn test_single_bin_has_no_config() {
        let analysis = analysis_with(array![2.0], array![0.0]);
        assert!(spectrum_plot_config(&analysis, &ModeLabels::default(), &AxisLabels::default()).is_none());
    }
}

// src/plot_functions/plot_amplitude_spectrum.rs
