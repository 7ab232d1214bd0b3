// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, FONT_SIZE_PEAK_LABEL, LINE_WIDTH_LEGEND, PEAK_LABEL_BOTTOM_MARGIN_PX,
    PLOT_HEIGHT, PLOT_WIDTH, TICK_MAX_DECIMALS, TICK_MIN_DECIMALS,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-9 {
        // flat trace: pad relative to the value so ticks still resolve it
        (max.abs() * 1e-3).max(1e-6)
    } else {
        range * 0.15
    };
    (min - padding, max + padding)
}

/// Decimals needed so ticks across `span` stay distinguishable, two digits past the span's order.
pub fn tick_decimals(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 3;
    }
    let digits = (-span.log10()).ceil() as i64 + 2;
    digits.clamp(TICK_MIN_DECIMALS as i64, TICK_MAX_DECIMALS as i64) as usize
}

/// Full decimal tick text: never scientific, never relative to an offset.
pub fn format_plain_tick(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    // avoid "-0.000" on the zero line
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    chart_title: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{chart_title}\nData Unavailable: {reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;
    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as i32;

    let center_x = width / 2 - max_line_length * estimated_char_width / 2;
    let center_y = height / 2 - lines.len() as i32 * estimated_line_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.to_string(),
            (center_x.max(0), center_y + i as i32 * estimated_line_height),
            text_style.clone(),
        ))?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    /// (x, y) points to mark and annotate, e.g. the dominant spectral peak.
    pub peaks: Vec<(f64, f64)>,
    pub peak_color: RGBColor,
}

impl PlotConfig {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    pub fn has_valid_ranges(&self) -> bool {
        self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start
    }
}

/// Draws one chart from a `PlotConfig` onto `area`.
fn draw_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let x_decimals = tick_decimals((plot_config.x_range.end - plot_config.x_range.start) / 10.0);
    let y_decimals = tick_decimals((plot_config.y_range.end - plot_config.y_range.start) / 10.0);

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .x_label_formatter(&|x: &f64| format_plain_tick(*x, x_decimals))
        .y_label_formatter(&|y: &f64| format_plain_tick(*y, y_decimals))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in plot_config.series.iter().filter(|s| !s.data.is_empty()) {
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    if plot_config.peaks.is_empty() {
        return Ok(());
    }

    let peak_color = plot_config.peak_color;
    chart.draw_series(
        plot_config
            .peaks
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 5, peak_color.filled())),
    )?;

    // Peak labels sit along the bottom of the area, primary peak first.
    let area_offset = area.get_base_pixel();
    let area_y_range = area.get_pixel_range().1;
    let area_height = area_y_range.end - area_y_range.start;
    for (idx, &(peak_x, peak_y)) in plot_config.peaks.iter().enumerate() {
        let label_text = if idx == 0 {
            format!(
                "▲ Primary Peak: {} at {} Hz",
                format_plain_tick(peak_y, y_decimals),
                format_plain_tick(peak_x, x_decimals)
            )
        } else {
            format!(
                "▲ Peak: {} at {} Hz",
                format_plain_tick(peak_y, y_decimals),
                format_plain_tick(peak_x, x_decimals)
            )
        };
        let peak_x_pixel = chart.backend_coord(&(peak_x, plot_config.y_range.start)).0 - area_offset.0;
        let text_y = area_height - PEAK_LABEL_BOTTOM_MARGIN_PX - idx as i32 * (FONT_SIZE_PEAK_LABEL + 4);
        area.draw(&Text::new(
            label_text,
            (peak_x_pixel.max(0), text_y),
            ("sans-serif", FONT_SIZE_PEAK_LABEL).into_font().color(&BLACK),
        ))?;
    }

    Ok(())
}

/// Renders a single chart into a PNG at `output_path`.
///
/// `None`, an empty series set, or a degenerate range produce a placeholder message
/// instead of a chart. Returns whether a real chart was drawn.
pub fn draw_single_plot(
    output_path: &Path,
    root_name: &str,
    plot_type_name: &str,
    plot_config: Option<&PlotConfig>,
) -> Result<bool, Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name.to_string(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
    ))?;
    let chart_area = root_area.margin(50, 5, 5, 5);

    let drawn = match plot_config {
        Some(config) if config.has_data() && config.has_valid_ranges() => {
            draw_chart_with_config(&chart_area, config)?;
            true
        }
        Some(config) => {
            let reason = if !config.has_data() {
                "No data points"
            } else {
                "Invalid ranges"
            };
            draw_unavailable_message(&chart_area, &config.title, reason)?;
            false
        }
        None => {
            draw_unavailable_message(&chart_area, plot_type_name, "Calculation/Data Extraction Failed")?;
            false
        }
    };

    root_area.present()?;
    if drawn {
        println!("  Plot saved as '{}'.", output_path.display());
    } else {
        println!(
            "  Placeholder saved as '{}': no {} data to plot.",
            output_path.display(),
            plot_type_name
        );
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo + 1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < 0.0 && hi > 10.0);
    }

    #[test]
    fn test_calculate_range_flat_trace() {
        let (lo, hi) = calculate_range(2.5, 2.5);
        assert!(lo < 2.5 && hi > 2.5);
        assert!(hi - lo < 0.01);
    }

    #[test]
    fn test_tick_decimals() {
        assert_eq!(tick_decimals(0.0003), 6);
        assert_eq!(tick_decimals(0.3), 3);
        assert_eq!(tick_decimals(2000.0), 0);
        assert_eq!(tick_decimals(0.0), 3);
        assert_eq!(tick_decimals(1e-20), TICK_MAX_DECIMALS);
    }

    #[test]
    fn test_plain_tick_has_no_offset_or_exponent() {
        assert_eq!(format_plain_tick(2.500123, 6), "2.500123");
        assert_eq!(format_plain_tick(12345.0, 0), "12345");
        assert_eq!(format_plain_tick(-0.0000001, 3), "0.000");
        assert!(!format_plain_tick(1e-7, 9).contains('e'));
    }
}

// src/plot_framework.rs
