// src/data_input/log_parser.rs

use log::{debug, info};
use ndarray::Array2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::{COLUMN_MODE_COUNTER, MIN_RECORD_FIELDS};
use crate::data_input::segment::Segment;
use crate::error::{AnalysisError, AnalysisResult};

/// One parsed input line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub line: usize,
    pub fields: Vec<f64>,
}

/// Splits a line on whitespace and parses every token as `f64`.
/// Returns `Ok(None)` for blank lines.
pub fn parse_record(line_number: usize, line: &str) -> AnalysisResult<Option<RawRecord>> {
    let fields = line
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| AnalysisError::Parse {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect::<AnalysisResult<Vec<f64>>>()?;

    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() < MIN_RECORD_FIELDS {
        return Err(AnalysisError::MissingColumns {
            line: line_number,
            found: fields.len(),
            expected: MIN_RECORD_FIELDS,
        });
    }
    Ok(Some(RawRecord {
        line: line_number,
        fields,
    }))
}

/// Reads every record from `reader`. Any malformed line aborts the whole read.
pub fn read_records<R: BufRead>(reader: R) -> AnalysisResult<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if let Some(record) = parse_record(index + 1, &line)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Indices of the records that open a new mode: 0, plus every `i + 1` where the
/// mode counter of record `i + 1` is lower than that of record `i`.
pub fn find_mode_boundaries(records: &[RawRecord]) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, pair) in records.windows(2).enumerate() {
        if pair[1].fields[COLUMN_MODE_COUNTER] < pair[0].fields[COLUMN_MODE_COUNTER] {
            starts.push(i + 1);
        }
    }
    starts
}

/// Groups records into one `Segment` per contiguous run between boundaries.
pub fn split_into_segments(records: &[RawRecord]) -> AnalysisResult<Vec<Segment>> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyLog);
    }

    let mut starts = find_mode_boundaries(records);
    starts.push(records.len());

    let mut segments = Vec::with_capacity(starts.len() - 1);
    for (mode_index, bounds) in starts.windows(2).enumerate() {
        let rows = &records[bounds[0]..bounds[1]];
        let width = rows[0].fields.len();
        if let Some(record) = rows.iter().find(|r| r.fields.len() != width) {
            return Err(AnalysisError::RaggedRow {
                line: record.line,
                found: record.fields.len(),
                expected: width,
            });
        }
        let table = Array2::from_shape_fn((rows.len(), width), |(r, c)| rows[r].fields[c]);
        debug!(
            "Mode {} spans lines {}..={} ({} rows)",
            mode_index + 1,
            rows[0].line,
            rows[rows.len() - 1].line,
            rows.len()
        );
        segments.push(Segment::new(mode_index, rows[0].line, table));
    }
    Ok(segments)
}

/// Parses a whitespace-delimited log from any buffered reader into per-mode segments.
pub fn read_segments<R: BufRead>(reader: R) -> AnalysisResult<Vec<Segment>> {
    let records = read_records(reader)?;
    info!("Finished reading {} data rows.", records.len());
    split_into_segments(&records)
}

/// Opens `input_file_path` and parses it into per-mode segments.
pub fn load_segments(input_file_path: &Path) -> AnalysisResult<Vec<Segment>> {
    info!("Reading log '{}'", input_file_path.display());
    let file = File::open(input_file_path)?;
    let segments = read_segments(BufReader::new(file))?;
    info!("Found {} acquisition mode(s).", segments.len());
    Ok(segments)
}


// src/data_input/log_parser.rs
