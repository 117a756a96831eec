use crate::enumeration::apply_variant;
use crate::error::VariantError;
use crate::output::GeneratedVariant;
use crate::worker::{
    VariantFailure, VariantOutcome, VariantRecord, WorkerConfig, WorkerState, WorkerStatus,
};
use cancel_this::is_cancelled;
use computation_process::{Completable, GeneratorStep};
use log::{debug, info, warn};

/// Step implementation of the [`VariantWorker`](crate::worker::VariantWorker) generator.
pub struct VariantStep;

impl GeneratorStep<WorkerConfig, WorkerState, VariantOutcome> for VariantStep {
    fn step(
        context: &WorkerConfig,
        state: &mut WorkerState,
    ) -> Completable<Option<VariantOutcome>> {
        match state.status {
            WorkerStatus::Done | WorkerStatus::Failed => return Ok(None),
            WorkerStatus::Idle | WorkerStatus::Cancelled => {
                state.status = WorkerStatus::Running;
            }
            WorkerStatus::Running => {}
        }

        // Checked before drawing, such that a cancelled worker does not skip an index.
        is_cancelled!()?;

        let Some(index) = state.source.next() else {
            info!(
                "[worker:{}] Sample source exhausted after {} variants.",
                context.worker, state.processed
            );
            state.status = WorkerStatus::Done;
            return Ok(None);
        };

        state.processed += 1;
        debug!(
            "[worker:{}] Generating variant {} ({:.1}%).",
            context.worker,
            index,
            100.0 * state.processed as f64 / state.source.total().max(1) as f64
        );

        let outcome = process_variant(context, state, index).map_err(|error| {
            if error.is_fatal() {
                warn!("[worker:{}] Stopping: {}", context.worker, error);
                state.status = WorkerStatus::Failed;
            } else {
                warn!("[worker:{}] Variant {} failed: {}", context.worker, index, error);
            }
            VariantFailure { index, error }
        });

        Ok(Some(outcome))
    }
}

/// Mutate, analyse and export one variant.
fn process_variant(
    context: &WorkerConfig,
    state: &mut WorkerState,
    index: u64,
) -> Result<VariantRecord, VariantError> {
    let flips = apply_variant(&mut state.model, index, &context.mutable)?;
    let name = context.variant_name(index);
    state.model.set_name(&name);

    let directory = state.shard.next()?;

    let attractors = match &context.attractors {
        Some(oracle) => {
            let found = oracle.has_attractors(&state.model, &directory)?;
            Some((oracle.kind(), found))
        }
        None => None,
    };

    let has_attractors = attractors.map(|(_, found)| found);
    let exported = context.export_policy.should_export(has_attractors);
    if exported {
        let variant = GeneratedVariant {
            name: name.clone(),
            index,
            pattern: context.mutable.pattern(&state.model),
            model: &state.model,
            attractors,
        };
        context.exporter.export(&variant, &directory)?;
    } else {
        debug!("[worker:{}] Variant {} has no attractors.", context.worker, index);
    }

    Ok(VariantRecord {
        index,
        name,
        flips,
        has_attractors,
        directory: exported.then_some(directory),
    })
}
