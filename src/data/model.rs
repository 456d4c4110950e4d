// ---------------------------------------------------------------------------
// Record – one data row of the report
// ---------------------------------------------------------------------------

/// A single `(x, y)` pair. `y` is already divided by the run's divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Wavelength (first column).
    pub x: f64,
    /// Rescaled signal (second column / divisor).
    pub y: f64,
}

impl Record {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Series – all records of one report, in file order
// ---------------------------------------------------------------------------

/// Ordered records parsed from one input file. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    records: Vec<Record>,
}

impl Series {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no data row was found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}
