//! Batch results.

use serde::Serialize;

/// How a measurement run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Every selected image was measured
    #[display("complete")]
    Complete,
    /// The budget ran out first; run again to continue
    #[display("partial")]
    Partial,
    /// No unmeasured images were found
    #[display("nothing to do")]
    NothingToDo,
}

/// Summary of one [`crate::BatchClassifier::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct BatchOutcome {
    /// How the run ended
    status: BatchStatus,
    /// Images measured and written
    processed: usize,
    /// Images selected at the start of the run
    selected: usize,
    /// Measured images whose ratio is in the catalog
    matched: usize,
    /// Wall-clock time spent, in milliseconds
    elapsed_ms: u64,
}

impl BatchOutcome {
    pub(crate) fn new(
        status: BatchStatus,
        processed: usize,
        selected: usize,
        matched: usize,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status,
            processed,
            selected,
            matched,
            elapsed_ms,
        }
    }

    pub(crate) fn nothing_to_do() -> Self {
        Self::new(BatchStatus::NothingToDo, 0, 0, 0, 0)
    }

    /// Images left unmeasured by this run.
    pub fn remaining(&self) -> usize {
        self.selected - self.processed
    }
}
