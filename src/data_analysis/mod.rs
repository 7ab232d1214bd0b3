// src/data_analysis/mod.rs

pub mod cleaning;
pub mod fft_utils;
pub mod segment_analysis;
pub mod spectral_analysis;
pub mod statistics;

// src/data_analysis/mod.rs
