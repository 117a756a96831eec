use crate::model::LogicalModel;
use crate::output::ShardCursor;
use crate::sampling::SampleSource;
use std::fmt::{Display, Formatter};

/// Lifecycle of a worker: `Idle -> Running -> Done | Failed | Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkerStatus {
    Idle,
    Running,
    Done,
    Failed,
    Cancelled,
}

impl WorkerStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkerStatus::Done | WorkerStatus::Failed | WorkerStatus::Cancelled
        )
    }
}

impl Display for WorkerStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorkerStatus::Idle => "idle",
            WorkerStatus::Running => "running",
            WorkerStatus::Done => "done",
            WorkerStatus::Failed => "failed",
            WorkerStatus::Cancelled => "cancelled",
        };
        write!(f, "{name}")
    }
}

/// Mutable state of a single worker.
///
/// The model is a private deep copy of the base model; it is mutated in place for every
/// processed index and never shared with other workers.
pub struct WorkerState {
    pub(crate) model: LogicalModel,
    pub(crate) source: SampleSource,
    pub(crate) shard: ShardCursor,
    pub(crate) status: WorkerStatus,
    pub(crate) processed: u64,
}

impl WorkerState {
    pub fn new(model: LogicalModel, source: SampleSource, shard: ShardCursor) -> WorkerState {
        WorkerState {
            model,
            source,
            shard,
            status: WorkerStatus::Idle,
            processed: 0,
        }
    }

    /// The model in its most recently generated variant.
    pub fn model(&self) -> &LogicalModel {
        &self.model
    }

    pub fn source(&self) -> &SampleSource {
        &self.source
    }

    pub fn shard(&self) -> &ShardCursor {
        &self.shard
    }

    pub fn status(&self) -> WorkerStatus {
        self.status
    }

    /// Number of indices drawn from the source so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}
