// src/plot_functions/plot_voltage_time.rs

use ndarray_stats::QuantileExt;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{COLOR_PEAK_MARKER, COLOR_VOLTAGE_TRACE, LINE_WIDTH_PLOT};
use crate::data_input::segment::CleanedSegment;
use crate::mode_labels::{AxisLabels, ModeLabels};
use crate::plot_framework::{calculate_range, draw_single_plot, PlotConfig, PlotSeries};

pub fn voltage_plot_path(output_dir: &Path, root_name: &str, mode_index: usize) -> PathBuf {
    output_dir.join(format!("{}_mode{}_voltage.png", root_name, mode_index + 1))
}

/// Voltage against row index for one cleaned segment. `None` if the segment is empty.
pub fn voltage_plot_config(
    segment: &CleanedSegment,
    mode_labels: &ModeLabels,
    axis_labels: &AxisLabels,
) -> Option<PlotConfig> {
    let voltages = segment.voltages();
    let (Ok(&val_min), Ok(&val_max)) = (voltages.min(), voltages.max()) else {
        return None;
    };

    let data: Vec<(f64, f64)> = voltages
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    let x_max = (data.len().saturating_sub(1)).max(1) as f64;
    let (y_min, y_max) = calculate_range(val_min, val_max);

    Some(PlotConfig {
        title: mode_labels.label(segment.mode_index()),
        x_range: 0.0..x_max,
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data,
            label: format!("{} samples", segment.len()),
            color: *COLOR_VOLTAGE_TRACE,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: axis_labels.time.clone(),
        y_label: axis_labels.voltage.clone(),
        peaks: Vec::new(),
        peak_color: *COLOR_PEAK_MARKER,
    })
}

/// Generates the time-domain voltage plot for one mode.
pub fn plot_voltage_time(
    segment: &CleanedSegment,
    mode_labels: &ModeLabels,
    axis_labels: &AxisLabels,
    output_dir: &Path,
    root_name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = voltage_plot_path(output_dir, root_name, segment.mode_index());
    let config = voltage_plot_config(segment, mode_labels, axis_labels);
    draw_single_plot(&output_path, root_name, "Voltage", config.as_ref())?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::segment::Segment;
    use ndarray::{array, Array2};

    fn cleaned(table: Array2<f64>) -> CleanedSegment {
        let rows = table.nrows();
        CleanedSegment {
            segment: Segment::new(1, 1, table),
            raw_rows: rows,
            removed_rows: 0,
            reference_average: None,
        }
    }

    #[test]
    fn test_config_uses_row_index_and_mode_label() {
        let seg = cleaned(array![[0.0, 2.5, 0.0], [1.0, 2.6, 10.0], [2.0, 2.4, 20.0]]);
        let config = voltage_plot_config(&seg, &ModeLabels::default(), &AxisLabels::default()).unwrap();
        assert_eq!(config.title, ModeLabels::default().label(1));
        assert_eq!(config.series[0].data, vec![(0.0, 2.5), (1.0, 2.6), (2.0, 2.4)]);
        assert_eq!(config.x_range, 0.0..2.0);
        assert!(config.y_range.start < 2.4 && config.y_range.end > 2.6);
        assert!(config.has_valid_ranges());
    }

    #[test]
    fn test_single_row_still_has_valid_range() {
        let seg = cleaned(array![[0.0, 1.0, 0.0]]);
        let config = voltage_plot_config(&seg, &ModeLabels::default(), &AxisLabels::default()).unwrap();
        assert!(config.has_valid_ranges());
    }

    #[test]
    fn test_empty_segment_has_no_config() {
        let seg = cleaned(Array2::zeros((0, 3)));
        assert!(voltage_plot_config(&seg, &ModeLabels::default(), &AxisLabels::default()).is_none());
    }

    #[test]
    fn test_plot_path() {
        let path = voltage_plot_path(Path::new("out"), "test_file4", 0);
        assert_eq!(path, Path::new("out").join("test_file4_mode1_voltage.png"));
    }
}

// src/plot_functions/plot_voltage_time.rs
