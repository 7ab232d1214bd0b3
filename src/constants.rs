// src/constants.rs

use plotters::style::colors::full_palette::{DEEPORANGE, LIGHTBLUE, RED};
use plotters::style::RGBColor;

// --- Log format ---
pub const COLUMN_MODE_COUNTER: usize = 0;
pub const COLUMN_VOLTAGE: usize = 1;
pub const COLUMN_TIMESTAMP_US: usize = 2;
pub const MIN_RECORD_FIELDS: usize = 3;

pub const MICROSECONDS_PER_SECOND: f64 = 1_000_000.0;

// --- Cleaning ---
// Rows further than this from the reference average are dropped (static voltage measurement).
pub const CLEAN_TOLERANCE_V: f64 = 0.005;
// Only readings below this take part in the reference average (0 - 5 V input range).
pub const CLEAN_REFERENCE_LIMIT_V: f64 = 5.0;

// --- Spectrum ---
// A non-DC bin must exceed this fraction of max(DC magnitude, 1) to count as a peak.
pub const PEAK_RELATIVE_FLOOR: f64 = 1e-9;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// --- Plot Color Assignments ---
pub const COLOR_VOLTAGE_TRACE: &RGBColor = &LIGHTBLUE;
pub const COLOR_SPECTRUM_TRACE: &RGBColor = &DEEPORANGE;
pub const COLOR_PEAK_MARKER: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_PEAK_LABEL: i32 = 16;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Tick label precision bounds for plain-decimal axis labels.
pub const TICK_MIN_DECIMALS: usize = 0;
pub const TICK_MAX_DECIMALS: usize = 9;
pub const PEAK_LABEL_BOTTOM_MARGIN_PX: i32 = 70;

// src/constants.rs
