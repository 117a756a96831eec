use crate::attractor::AttractorKind;
use crate::error::ConfigurationError;
use crate::output::ExportPolicy;

/// Default bound on the number of variants in one `models_<ordinal>` directory.
pub const DEFAULT_MAX_PER_DIRECTORY: i64 = 1000;

/// How variant indices are selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumerationMode {
    /// Every index in `[0, 2^k)`, exactly once.
    #[default]
    Exhaustive,
    /// `count` uniform draws (with replacement) from `[0, 2^k)`.
    Random { count: u64, seed: u64 },
}

/// How many workers should be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Workers {
    /// Derived from the available parallelism (see
    /// [`choose_worker_count`](crate::enumeration::choose_worker_count)).
    Auto,
    /// Exactly this many (or fewer, if there are not enough variants to go around).
    Exactly(usize),
}

impl Default for Workers {
    fn default() -> Self {
        Workers::Exactly(1)
    }
}

/// A "flat" configuration object of one generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Exhaustive enumeration or random sampling (default: exhaustive).
    pub mode: EnumerationMode,
    /// Number of workers (default: one).
    pub workers: Workers,
    /// Maximal number of variants per output directory; values `<= 0` disable
    /// sharding (default: [`DEFAULT_MAX_PER_DIRECTORY`]).
    pub max_per_directory: i64,
    /// Which variants are written to disk (default: all).
    pub export_policy: ExportPolicy,
    /// Attractors computed for every variant (default: none).
    pub attractors: Option<AttractorKind>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            mode: EnumerationMode::Exhaustive,
            workers: Workers::default(),
            max_per_directory: DEFAULT_MAX_PER_DIRECTORY,
            export_policy: ExportPolicy::All,
            attractors: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_mode(mut self, mode: EnumerationMode) -> GeneratorConfig {
        self.mode = mode;
        self
    }

    pub fn with_workers(mut self, workers: Workers) -> GeneratorConfig {
        self.workers = workers;
        self
    }

    pub fn with_max_per_directory(mut self, max_per_directory: i64) -> GeneratorConfig {
        self.max_per_directory = max_per_directory;
        self
    }

    pub fn with_export_policy(mut self, policy: ExportPolicy) -> GeneratorConfig {
        self.export_policy = policy;
        self
    }

    pub fn with_attractors(mut self, kind: AttractorKind) -> GeneratorConfig {
        self.attractors = Some(kind);
        self
    }

    /// Check the parts of the configuration that do not depend on the model.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let EnumerationMode::Random { count: 0, .. } = self.mode {
            return Err(ConfigurationError::EmptySample);
        }
        if self.workers == Workers::Exactly(0) {
            return Err(ConfigurationError::NoWorkers);
        }
        if self.export_policy == ExportPolicy::Survivors && self.attractors.is_none() {
            return Err(ConfigurationError::SurvivorsWithoutAttractors);
        }
        Ok(())
    }
}

/// Name of a fresh results directory for the input model `stem`, e.g.
/// `results_toy_24012025_173501`.
pub fn results_directory_name(stem: &str, timestamp: &str) -> String {
    format!("results_{stem}_{timestamp}")
}
