// src/plot_functions/mod.rs

pub mod plot_amplitude_spectrum;
pub mod plot_voltage_time;

// src/plot_functions/mod.rs
