use crate::error::VariantError;
use crate::worker::WorkerStatus;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// A successfully processed variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantRecord {
    pub index: u64,
    pub name: String,
    /// Number of equations flipped to reach this variant from the previous one.
    pub flips: usize,
    /// `None` if attractors were not computed.
    pub has_attractors: Option<bool>,
    /// Directory of the exported files, `None` if the variant was not exported.
    pub directory: Option<PathBuf>,
}

/// A variant that could not be processed.
#[derive(Debug)]
pub struct VariantFailure {
    pub index: u64,
    pub error: VariantError,
}

impl Display for VariantFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "variant {}: {}", self.index, self.error)
    }
}

/// Item produced by one step of a [`VariantWorker`](crate::worker::VariantWorker).
pub type VariantOutcome = Result<VariantRecord, VariantFailure>;

/// Summary of a single worker.
#[derive(Debug)]
pub struct WorkerReport {
    pub worker: usize,
    /// Number of variants assigned to the worker.
    pub assigned: u64,
    pub exported: u64,
    /// Variants that were processed but not exported (export policy).
    pub skipped: u64,
    pub failed: u64,
    pub status: WorkerStatus,
    pub failures: Vec<VariantFailure>,
}

impl WorkerReport {
    pub fn new(worker: usize, assigned: u64) -> WorkerReport {
        WorkerReport {
            worker,
            assigned,
            exported: 0,
            skipped: 0,
            failed: 0,
            status: WorkerStatus::Running,
            failures: Vec::new(),
        }
    }

    /// Update counters with the outcome of one variant.
    pub fn record(&mut self, outcome: VariantOutcome) {
        match outcome {
            Ok(record) if record.directory.is_some() => self.exported += 1,
            Ok(_) => self.skipped += 1,
            Err(failure) => {
                self.failed += 1;
                if failure.error.is_fatal() {
                    self.status = WorkerStatus::Failed;
                }
                self.failures.push(failure);
            }
        }
    }

    /// Number of variants that were completed (exported or skipped).
    pub fn completed(&self) -> u64 {
        self.exported + self.skipped
    }
}

impl Display for WorkerReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} variants completed ({} exported, {} skipped), {} failed [{}]",
            self.completed(),
            self.assigned,
            self.exported,
            self.skipped,
            self.failed,
            self.status
        )
    }
}

/// Aggregated result of all workers of one run.
#[derive(Debug)]
pub struct RunReport {
    /// Size of the whole variant space (`2^k`).
    pub num_variants: u64,
    pub workers: Vec<WorkerReport>,
}

impl RunReport {
    pub fn exported(&self) -> u64 {
        self.workers.iter().map(|it| it.exported).sum()
    }

    pub fn skipped(&self) -> u64 {
        self.workers.iter().map(|it| it.skipped).sum()
    }

    pub fn failed(&self) -> u64 {
        self.workers.iter().map(|it| it.failed).sum()
    }

    pub fn completed(&self) -> u64 {
        self.exported() + self.skipped()
    }

    /// True if every worker finished its whole assignment.
    pub fn is_success(&self) -> bool {
        self.workers
            .iter()
            .all(|it| it.status == WorkerStatus::Done && it.failed == 0)
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for report in &self.workers {
            writeln!(f, "Worker {}: {}", report.worker, report)?;
        }
        write!(
            f,
            "Total: {} variants completed ({} exported, {} skipped), {} failed.",
            self.completed(),
            self.exported(),
            self.skipped(),
            self.failed()
        )
    }
}
