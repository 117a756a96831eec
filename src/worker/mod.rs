//! The per-worker variant processing loop.
//!
//! A worker owns a private copy of the base model, a [`SampleSource`](crate::sampling::SampleSource)
//! and a [`ShardCursor`](crate::output::ShardCursor). It is implemented as a resumable
//! [`Generator`]: every step processes exactly one variant index and yields a
//! [`VariantOutcome`]:
//!
//!  1. Draw the next index (the worker is `Done` once the source is exhausted).
//!  2. Mutate the model into the variant (see [`apply_variant`](crate::enumeration::apply_variant)).
//!  3. Reserve a slot in the current output directory.
//!  4. Optionally compute attractors.
//!  5. Export the variant if the [`ExportPolicy`](crate::output::ExportPolicy) allows it.
//!
//! Errors that only concern one variant (attractors, export) are reported as a failed outcome
//! and the worker continues. Fatal errors (directory creation, invalid index) are reported
//! once and the worker then stops in the `Failed` state. Cancellation is checked before
//! every index, so a cancelled worker never leaves a variant half-processed.
//!
//! Use [`run_worker`] to drive a worker to completion and collect a [`WorkerReport`].

mod report;
mod variant_step;
mod worker_config;
mod worker_state;


pub use report::{RunReport, VariantFailure, VariantOutcome, VariantRecord, WorkerReport};
pub use variant_step::VariantStep;
pub use worker_config::WorkerConfig;
pub use worker_state::{WorkerState, WorkerStatus};

use computation_process::{Generator, Stateful};
use log::{info, warn};

/// Generator which processes one variant per step.
pub type VariantWorker = Generator<WorkerConfig, WorkerState, VariantOutcome, VariantStep>;

/// Run a worker until its sample source is exhausted, a fatal error occurs, or the
/// computation is cancelled.
pub fn run_worker(config: WorkerConfig, state: WorkerState) -> WorkerReport {
    let mut report = WorkerReport::new(config.worker, state.source().total());
    info!(
        "[worker:{}] Started; {} variants assigned.",
        report.worker, report.assigned
    );

    let worker = VariantWorker::configure(config, state);
    for item in worker {
        match item {
            Ok(outcome) => report.record(outcome),
            Err(cancelled) => {
                warn!("[worker:{}] Cancelled: {}", report.worker, cancelled);
                report.status = WorkerStatus::Cancelled;
                return report;
            }
        }
    }

    if report.status != WorkerStatus::Failed {
        report.status = WorkerStatus::Done;
    }
    info!("[worker:{}] Finished: {}", report.worker, report);
    report
}
