//! Top level driver of a variant generation run.
//!
//! A [`VariantGenerator`] validates a [`GeneratorConfig`] against the base model, splits the
//! variant space (or the random sample) between workers and runs every worker on its own
//! thread of a fixed-size `rayon` pool. Workers share nothing mutable: each one receives a
//! private copy of the model, its own [`SampleSource`] and its own `worker_<id>` output
//! subtree. The results are aggregated into a [`RunReport`].

mod generator_config;


pub use generator_config::{
    DEFAULT_MAX_PER_DIRECTORY, EnumerationMode, GeneratorConfig, Workers, results_directory_name,
};

use crate::attractor::{AttractorOracle, SymbolicAttractors};
use crate::enumeration::{MutableEquations, choose_worker_count, partition};
use crate::error::ConfigurationError;
use crate::model::LogicalModel;
use crate::output::{FileExporter, ModelExporter, SHARD_PREFIX, ShardCursor, worker_directory};
use crate::sampling::{ExhaustiveSource, RandomSource, SampleSource};
use crate::worker::{RunReport, WorkerConfig, WorkerReport, WorkerState, WorkerStatus, run_worker};
use cancel_this::{CancelAtomic, Cancelled};
use log::{info, warn};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Everything one worker needs to run.
pub struct WorkerPlan {
    pub config: WorkerConfig,
    pub state: WorkerState,
}

/// Generates (and exports) link-operator variants of one base model.
pub struct VariantGenerator {
    model: LogicalModel,
    mutable: MutableEquations,
    num_variants: u64,
    config: GeneratorConfig,
    oracle: Option<Arc<dyn AttractorOracle>>,
    exporter: Arc<dyn ModelExporter>,
    cancel: CancelAtomic,
}

impl VariantGenerator {
    /// Validate `config` for the given base `model`.
    ///
    /// Attractors (if requested) are computed by [`SymbolicAttractors`] and variants are
    /// written by the default [`FileExporter`]. Both can be replaced using
    /// [`VariantGenerator::with_oracle`] and [`VariantGenerator::with_exporter`].
    pub fn new(
        model: LogicalModel,
        config: GeneratorConfig,
    ) -> Result<VariantGenerator, ConfigurationError> {
        config.validate()?;
        let mutable = MutableEquations::from(&model);
        let num_variants = mutable.try_variant_count(&model)?;
        let oracle = config
            .attractors
            .map(|kind| Arc::new(SymbolicAttractors::new(kind)) as Arc<dyn AttractorOracle>);
        Ok(VariantGenerator {
            model,
            mutable,
            num_variants,
            config,
            oracle,
            exporter: Arc::new(FileExporter::default()),
            cancel: CancelAtomic::new(),
        })
    }

    /// Replace the attractor oracle. The oracle is only used if the configuration
    /// requests attractors.
    pub fn with_oracle(mut self, oracle: Arc<dyn AttractorOracle>) -> VariantGenerator {
        if self.config.attractors.is_some() {
            self.oracle = Some(oracle);
        }
        self
    }

    pub fn with_exporter(mut self, exporter: Arc<dyn ModelExporter>) -> VariantGenerator {
        self.exporter = exporter;
        self
    }

    pub fn model(&self) -> &LogicalModel {
        &self.model
    }

    pub fn mutable(&self) -> &MutableEquations {
        &self.mutable
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Size of the whole variant space (`2^k`).
    pub fn num_variants(&self) -> u64 {
        self.num_variants
    }

    /// A trigger that cancels a running (or future) [`VariantGenerator::run`]. Workers stop
    /// before their next variant.
    pub fn cancel_handle(&self) -> CancelAtomic {
        self.cancel.clone()
    }

    /// Number of variants that will be processed in total.
    pub fn total_work(&self) -> u64 {
        match self.config.mode {
            EnumerationMode::Exhaustive => self.num_variants,
            EnumerationMode::Random { count, .. } => count,
        }
    }

    /// The number of workers that will actually be started.
    pub fn worker_count(&self) -> usize {
        let total = self.total_work();
        let requested = match self.config.workers {
            Workers::Auto => {
                let available = std::thread::available_parallelism()
                    .map(|it| it.get())
                    .unwrap_or(1);
                choose_worker_count(available, total, true)
            }
            Workers::Exactly(n) => n,
        };
        partition(total, requested).len()
    }

    /// Prepare the worker plans for a run writing into `root`. No directories are created.
    pub fn plan(&self, root: &Path) -> Vec<WorkerPlan> {
        let workers = self.worker_count();
        let sources: Vec<SampleSource> = match self.config.mode {
            EnumerationMode::Exhaustive => partition(self.num_variants, workers)
                .into_iter()
                .map(|range| SampleSource::from(ExhaustiveSource::from(range)))
                .collect(),
            // Every worker draws its own part of one seeded sequence, hence the sample
            // does not depend on the number of workers.
            EnumerationMode::Random { count, seed } => partition(count, workers)
                .into_iter()
                .map(|range| {
                    SampleSource::from(RandomSource::slice(seed, range, self.num_variants))
                })
                .collect(),
        };

        sources
            .into_iter()
            .enumerate()
            .map(|(worker, source)| {
                let mut config = WorkerConfig::new(worker, self.model.name(), self.mutable.clone())
                    .with_exporter(self.exporter.clone())
                    .with_export_policy(self.config.export_policy);
                if let Some(oracle) = &self.oracle {
                    config = config.with_attractors(oracle.clone());
                }
                let shard = ShardCursor::new(
                    worker_directory(root, worker),
                    SHARD_PREFIX,
                    self.config.max_per_directory,
                );
                WorkerPlan {
                    config,
                    state: WorkerState::new(self.model.clone(), source, shard),
                }
            })
            .collect()
    }

    /// Generate all variants into the results directory `root`.
    ///
    /// Only configuration problems are returned as errors. Failures of individual variants
    /// or workers are part of the returned [`RunReport`].
    pub fn run(&self, root: &Path) -> Result<RunReport, ConfigurationError> {
        self.log_parameters(root);
        std::fs::create_dir_all(root).map_err(|source| ConfigurationError::ResultsDirectory {
            path: root.to_path_buf(),
            source,
        })?;

        let plans = self.plan(root);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(plans.len())
            .build()
            .map_err(|e| ConfigurationError::WorkerPool(e.to_string()))?;

        let trigger = &self.cancel;
        let workers: Vec<WorkerReport> = pool.install(|| {
            plans
                .into_par_iter()
                .map(|plan| {
                    let worker = plan.config.worker;
                    let assigned = plan.state.source().total();
                    let result = cancel_this::on_trigger(trigger.clone(), || {
                        Ok::<_, Cancelled>(run_worker(plan.config, plan.state))
                    });
                    result.unwrap_or_else(|cancelled| {
                        warn!("[worker:{worker}] Cancelled before start: {cancelled}");
                        let mut report = WorkerReport::new(worker, assigned);
                        report.status = WorkerStatus::Cancelled;
                        report
                    })
                })
                .collect()
        });

        let report = RunReport {
            num_variants: self.num_variants,
            workers,
        };
        info!(
            "Finished: {} variants completed ({} exported, {} skipped), {} failed.",
            report.completed(),
            report.exported(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }

    fn log_parameters(&self, root: &Path) {
        info!(
            "Input model `{}` with {} equations.",
            self.model.name(),
            self.model.equations().len()
        );
        info!(
            "Total number of variants {} ({} equations with link operators).",
            self.num_variants,
            self.mutable.len()
        );
        match self.config.mode {
            EnumerationMode::Exhaustive => info!("Mode: exhaustive enumeration."),
            EnumerationMode::Random { count, seed } => {
                info!("Mode: {count} random variants (seed {seed}).")
            }
        }
        match self.config.attractors {
            Some(kind) => info!("Attractors: {kind}; export policy: {:?}.", self.config.export_policy),
            None => info!("Attractors: not computed."),
        }
        info!(
            "Workers: {}; max. {} variants per directory; results in `{}`.",
            self.worker_count(),
            self.config.max_per_directory,
            root.display()
        );
    }
}
