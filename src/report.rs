// src/report.rs

use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::data_analysis::segment_analysis::SegmentAnalysis;
use crate::mode_labels::ModeLabels;

pub const SUMMARY_CSV_HEADER: [&str; 9] = [
    "mode",
    "label",
    "raw_rows",
    "removed_rows",
    "mean_v",
    "std_dev_v",
    "sampling_hz",
    "peak_hz",
    "peak_magnitude",
];

/// Prints the per-mode results: the two result lists first, then one summary line per mode.
pub fn print_report(analyses: &[SegmentAnalysis], mode_labels: &ModeLabels) {
    let deviations: Vec<f64> = analyses.iter().map(|a| a.std_dev_v).collect();
    let sampling: Vec<f64> = analyses.iter().map(|a| a.sampling_frequency_hz()).collect();

    println!("\nStandard deviation:");
    println!("{:?}", deviations);
    println!("Sampling frequency (Hz):");
    println!("{:?}", sampling);

    println!("\n--- Per-mode summary ---");
    for analysis in analyses {
        println!("  {}", summary_line(analysis, mode_labels));
    }
}

pub fn summary_line(analysis: &SegmentAnalysis, mode_labels: &ModeLabels) -> String {
    let peak = match analysis.spectrum.dominant_peak {
        Some((hz, magnitude)) => format!("peak {magnitude:.4} at {hz:.2} Hz"),
        None => "no peak".to_string(),
    };
    format!(
        "Mode {} ({}): {} rows, {} removed, mean {:.6} V, std dev {:.6e} V, fs {:.2} Hz, {}",
        analysis.mode_index + 1,
        mode_labels.label(analysis.mode_index),
        analysis.raw_rows,
        analysis.removed_rows,
        analysis.mean_v,
        analysis.std_dev_v,
        analysis.sampling_frequency_hz(),
        peak
    )
}

/// Writes one CSV row per mode to `writer`.
pub fn write_summary<W: Write>(
    writer: W,
    analyses: &[SegmentAnalysis],
    mode_labels: &ModeLabels,
) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SUMMARY_CSV_HEADER)?;
    for analysis in analyses {
        let (peak_hz, peak_magnitude) = match analysis.spectrum.dominant_peak {
            Some((hz, magnitude)) => (hz.to_string(), magnitude.to_string()),
            None => (String::new(), String::new()),
        };
        csv_writer.write_record([
            (analysis.mode_index + 1).to_string(),
            mode_labels.label(analysis.mode_index),
            analysis.raw_rows.to_string(),
            analysis.removed_rows.to_string(),
            analysis.mean_v.to_string(),
            analysis.std_dev_v.to_string(),
            analysis.sampling_frequency_hz().to_string(),
            peak_hz,
            peak_magnitude,
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the CSV summary to `output_path`.
pub fn write_summary_csv(
    output_path: &Path,
    analyses: &[SegmentAnalysis],
    mode_labels: &ModeLabels,
) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(output_path)?;
    write_summary(file, analyses, mode_labels)?;
    println!("  Summary saved as '{}'.", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::spectral_analysis::SpectrumResult;
    use ndarray::array;

    fn analysis(mode_index: usize, peak: Option<(f64, f64)>) -> SegmentAnalysis {
        SegmentAnalysis {
            mode_index,
            raw_rows: 10,
            removed_rows: 2,
            mean_v: 2.5,
            std_dev_v: 0.25,
            spectrum: SpectrumResult {
                magnitudes: array![20.0, 1.0],
                frequencies: array![0.0, 750.0],
                sampling_frequency_hz: 1500.0,
                dominant_peak: peak,
            },
        }
    }

    #[test]
    fn test_summary_csv_rows() {
        let labels = ModeLabels::new(vec!["single, ended".to_string()]);
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &[analysis(0, Some((750.0, 1.0))), analysis(1, None)], &labels).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SUMMARY_CSV_HEADER.join(","));
        assert_eq!(lines[1], "1,\"single, ended\",10,2,2.5,0.25,1500,750,1");
        assert_eq!(lines[2], "2,Mode 2,10,2,2.5,0.25,1500,,");
    }

    #[test]
    fn test_summary_line_mentions_label_and_rate() {
        let line = summary_line(&analysis(0, None), &ModeLabels::default());
        assert!(line.contains(&ModeLabels::default().label(0)));
        assert!(line.contains("1500.00 Hz"));
        assert!(line.contains("no peak"));
    }
}

// src/report.rs
