use crate::attractor::AttractorOracle;
use crate::enumeration::MutableEquations;
use crate::output::{ExportPolicy, FileExporter, ModelExporter};
use std::sync::Arc;

/// Immutable configuration of a single worker.
///
/// All workers of one run share the same `mutable` equations (and hence the same mapping
/// between indices and variants); only `worker` differs.
#[derive(Clone)]
pub struct WorkerConfig {
    /// Ordinal of the worker (used in logs).
    pub worker: usize,
    /// Name of the base model; variant `i` is called `<base_name>_<i>`.
    pub base_name: String,
    /// Positions of the equations that differ between variants.
    pub mutable: MutableEquations,
    /// Which variants are exported.
    pub export_policy: ExportPolicy,
    /// Attractor detection (if any).
    pub attractors: Option<Arc<dyn AttractorOracle>>,
    /// Export collaborator.
    pub exporter: Arc<dyn ModelExporter>,
}

impl WorkerConfig {
    /// A worker that exports every variant using the default [`FileExporter`] and does not
    /// compute attractors.
    pub fn new(worker: usize, base_name: &str, mutable: MutableEquations) -> WorkerConfig {
        WorkerConfig {
            worker,
            base_name: base_name.to_string(),
            mutable,
            export_policy: ExportPolicy::All,
            attractors: None,
            exporter: Arc::new(FileExporter::default()),
        }
    }

    pub fn with_attractors(mut self, oracle: Arc<dyn AttractorOracle>) -> WorkerConfig {
        self.attractors = Some(oracle);
        self
    }

    pub fn with_exporter(mut self, exporter: Arc<dyn ModelExporter>) -> WorkerConfig {
        self.exporter = exporter;
        self
    }

    pub fn with_export_policy(mut self, policy: ExportPolicy) -> WorkerConfig {
        self.export_policy = policy;
        self
    }

    /// Name of the variant with the given index.
    pub fn variant_name(&self, index: u64) -> String {
        format!("{}_{}", self.base_name, index)
    }
}
