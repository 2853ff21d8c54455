//! Batch form filling over a data table

use super::{FillOutcome, RowFormFiller, SkipReason};
use crate::models::DataRow;
use crate::toolkit::PdfToolkit;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of one row within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Written(PathBuf),
    Skipped(SkipReason),
    Failed(String),
}

/// Report for one data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    /// 1-based position of the row in the data table (header excluded)
    pub row: usize,
    pub outcome: RowOutcome,
}

/// Result of a batch run, one report per input row in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "batch reports should be checked for failed rows"]
pub struct BatchReport {
    pub rows: Vec<RowReport>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Written(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Failed(_)))
    }

    /// Paths of all generated documents, in row order
    pub fn documents(&self) -> Vec<&Path> {
        self.rows
            .iter()
            .filter_map(|r| match &r.outcome {
                RowOutcome::Written(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&RowOutcome) -> bool) -> usize {
        self.rows.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Runs a [`RowFormFiller`] over every row of a table, sequentially
pub struct BatchOrchestrator<T: PdfToolkit> {
    filler: RowFormFiller<T>,
}

impl<T: PdfToolkit> BatchOrchestrator<T> {
    pub fn new(filler: RowFormFiller<T>) -> Self {
        Self { filler }
    }

    /// Fill every row in order. A failing row is recorded and the batch continues.
    pub fn run<'a, I>(&self, rows: I, template: &Path) -> BatchReport
    where
        I: IntoIterator<Item = &'a DataRow>,
    {
        self.run_with_progress(rows, template, |_| {})
    }

    /// Like [`run`](Self::run), calling `progress` after each row
    pub fn run_with_progress<'a, I, F>(
        &self,
        rows: I,
        template: &Path,
        mut progress: F,
    ) -> BatchReport
    where
        I: IntoIterator<Item = &'a DataRow>,
        F: FnMut(&RowReport),
    {
        let mut report = BatchReport::default();
        for (index, row) in rows.into_iter().enumerate() {
            let outcome = match self.filler.fill(row, template) {
                Ok(FillOutcome::Written(path)) => RowOutcome::Written(path),
                Ok(FillOutcome::Skipped(reason)) => RowOutcome::Skipped(reason),
                Err(e) => {
                    warn!("Row {} failed: {}", index + 1, e);
                    RowOutcome::Failed(e.to_string())
                }
            };
            let row_report = RowReport {
                row: index + 1,
                outcome,
            };
            progress(&row_report);
            report.rows.push(row_report);
        }

        info!(
            "Batch finished: {} written, {} skipped, {} failed",
            report.written(),
            report.skipped(),
            report.failed()
        );
        report
    }
}
