// src/data_input/mod.rs

pub mod log_parser;
pub mod segment;

// src/data_input/mod.rs
