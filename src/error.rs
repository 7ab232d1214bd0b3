// src/error.rs

use std::io;
use thiserror::Error;

/// Failures of the load/clean/analyse stages. Every variant is fatal to a run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read log: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: '{token}' is not a number")]
    Parse { line: usize, token: String },

    #[error("line {line}: found {found} field(s), expected at least {expected}")]
    MissingColumns {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("line {line}: row has {found} field(s) but the segment started with {expected}")]
    RaggedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("log contains no records")]
    EmptyLog,

    /// `mode` is the 0-based mode index; messages number modes from 1.
    #[error("Mode {}: segment has no rows left to analyse", .mode + 1)]
    EmptySegment { mode: usize },

    #[error("Mode {}: timestamp span of {span_us} us cannot yield a sampling frequency", .mode + 1)]
    NonPositiveTimeSpan { mode: usize, span_us: f64 },

    #[error("FFT of {samples} sample(s) failed: {reason}")]
    Fft { samples: usize, reason: String },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
