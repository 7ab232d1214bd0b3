// src/main.rs

use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use adc_eval::data_analysis::cleaning::{clean_segments, CleaningConfig};
use adc_eval::data_analysis::segment_analysis::analyze_segments;
use adc_eval::data_input::log_parser::load_segments;
use adc_eval::mode_labels::{AxisLabels, ModeLabels};
use adc_eval::plot_functions::plot_amplitude_spectrum::plot_amplitude_spectrum;
use adc_eval::plot_functions::plot_voltage_time::plot_voltage_time;
use adc_eval::report::{print_report, write_summary_csv};

/// Per-mode statistics, DFT spectra and plots for ADC measurement logs.
#[derive(Debug, Parser)]
#[command(name = "adc_eval", version = adc_eval::crate_version(), about)]
struct Cli {
    /// Whitespace-delimited log: mode counter, voltage (V), timestamp (us) per line
    input: PathBuf,

    /// Directory for the PNG plots
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Mode label, repeat once per mode in log order (replaces the built-in labels)
    #[arg(short, long = "label", value_name = "TEXT")]
    labels: Vec<String>,

    /// Also write the per-mode results as CSV
    #[arg(long, value_name = "PATH")]
    summary_csv: Option<PathBuf>,

    /// Print results only, skip plot generation
    #[arg(long)]
    no_plots: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let root_name = cli
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let mode_labels = if cli.labels.is_empty() {
        ModeLabels::default()
    } else {
        ModeLabels::new(cli.labels.clone())
    };
    let axis_labels = AxisLabels::default();

    // --- Load and clean ---
    let segments = load_segments(&cli.input)?;
    let cleaned = clean_segments(segments, &CleaningConfig::default());
    for segment in &cleaned {
        info!(
            "Mode {}: kept {} of {} row(s)",
            segment.mode_index() + 1,
            segment.len(),
            segment.raw_rows
        );
    }

    // --- Statistics and spectra ---
    let analyses = analyze_segments(&cleaned)?;
    print_report(&analyses, &mode_labels);

    if let Some(summary_path) = &cli.summary_csv {
        write_summary_csv(summary_path, &analyses, &mode_labels)?;
    }

    if cli.no_plots {
        return Ok(());
    }

    // --- Plots ---
    fs::create_dir_all(&cli.output_dir)?;
    let output_dir: &Path = &cli.output_dir;
    println!("\n--- Generating Voltage Plots ---");
    for segment in &cleaned {
        plot_voltage_time(segment, &mode_labels, &axis_labels, output_dir, &root_name)?;
    }
    println!("\n--- Generating Spectrum Plots ---");
    for analysis in &analyses {
        plot_amplitude_spectrum(analysis, &mode_labels, &axis_labels, output_dir, &root_name)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let message = fatal_message(&*e);
        error!("{message}");
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn fatal_message(err: &dyn Error) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use adc_eval::error::AnalysisError;

    #[test]
    fn test_fatal_message_names_mode() {
        let err = AnalysisError::NonPositiveTimeSpan { mode: 1, span_us: 0.0 };
        assert_eq!(
            fatal_message(&err),
            "Error: Mode 2: timestamp span of 0 us cannot yield a sampling frequency"
        );
    }
}
