/// A record that could not be written inside an otherwise committed batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Position of the record within its batch
    pub index: usize,
    pub message: String,
}

/// Outcome of writing one batch in a single transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}
