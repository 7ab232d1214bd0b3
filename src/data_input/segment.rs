// src/data_input/segment.rs

use ndarray::{Array2, ArrayView1, Axis};

use crate::constants::{COLUMN_MODE_COUNTER, COLUMN_TIMESTAMP_US, COLUMN_VOLTAGE};

/// One contiguous acquisition mode: rows are records, columns are the positional fields
/// `[mode counter, voltage (V), timestamp (us)]` (extra fields are carried but unused).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub mode_index: usize,
    pub first_line: usize, // 1-based source line of the first row
    pub table: Array2<f64>,
}

impl Segment {
    pub fn new(mode_index: usize, first_line: usize, table: Array2<f64>) -> Self {
        Self {
            mode_index,
            first_line,
            table,
        }
    }

    pub fn len(&self) -> usize {
        self.table.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.table.nrows() == 0
    }

    pub fn mode_counters(&self) -> ArrayView1<'_, f64> {
        self.table.column(COLUMN_MODE_COUNTER)
    }

    pub fn voltages(&self) -> ArrayView1<'_, f64> {
        self.table.column(COLUMN_VOLTAGE)
    }

    pub fn timestamps_us(&self) -> ArrayView1<'_, f64> {
        self.table.column(COLUMN_TIMESTAMP_US)
    }

    /// Copy of this segment holding only the rows at `keep` (in order).
    pub fn select_rows(&self, keep: &[usize]) -> Segment {
        Segment {
            mode_index: self.mode_index,
            first_line: self.first_line,
            table: self.table.select(Axis(0), keep),
        }
    }
}

/// A segment after outlier removal. Read-only for the downstream stages.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSegment {
    pub segment: Segment,
    pub raw_rows: usize,
    pub removed_rows: usize,
    /// Final reference average, `None` when no reading was inside the reference range.
    pub reference_average: Option<f64>,
}

impl CleanedSegment {
    pub fn mode_index(&self) -> usize {
        self.segment.mode_index
    }

    pub fn len(&self) -> usize {
        self.segment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    pub fn voltages(&self) -> ArrayView1<'_, f64> {
        self.segment.voltages()
    }

    pub fn timestamps_us(&self) -> ArrayView1<'_, f64> {
        self.segment.timestamps_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_column_accessors() {
        let seg = Segment::new(0, 1, array![[0.0, 1.5, 10.0], [1.0, 1.6, 20.0]]);
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.voltages().to_vec(), vec![1.5, 1.6]);
        assert_eq!(seg.timestamps_us().to_vec(), vec![10.0, 20.0]);
        assert_eq!(seg.mode_counters().to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_select_rows_keeps_metadata() {
        let seg = Segment::new(2, 7, array![[0.0, 1.0, 0.0], [1.0, 9.0, 1.0], [2.0, 1.0, 2.0]]);
        let picked = seg.select_rows(&[0, 2]);
        assert_eq!(picked.mode_index, 2);
        assert_eq!(picked.first_line, 7);
        assert_eq!(picked.voltages().to_vec(), vec![1.0, 1.0]);

        let none = seg.select_rows(&[]);
        assert!(none.is_empty());
        assert_eq!(none.table.ncols(), 3);
    }
}
