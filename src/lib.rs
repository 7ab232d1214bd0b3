// src/lib.rs - Library interface for the analysis pipeline

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod mode_labels;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
