//! Command line arguments shared by the `biodivine_link_variants` and
//! `biodivine_link_sample` binaries (feature `build-binary`).


use crate::attractor::AttractorKind;
use crate::error::ModelError;
use crate::model::LogicalModel;
use crate::orchestrator::{
    DEFAULT_MAX_PER_DIRECTORY, EnumerationMode, GeneratorConfig, VariantGenerator, Workers,
    results_directory_name,
};
use crate::output::ExportPolicy;
use env_logger::Builder;
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to an interaction file (.sif)
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Compute attractors of every variant
    #[arg(long, require_equals = true)]
    pub attractors: Option<Attractors>,

    /// Which variants are written to disk
    #[arg(long, default_value = "all", require_equals = true)]
    pub export: Export,

    /// Split the work between the available CPU cores
    #[arg(long, conflicts_with = "workers")]
    pub parallel: bool,

    /// Use exactly this many workers
    #[arg(long, require_equals = true)]
    pub workers: Option<usize>,

    /// Maximal number of variants per output directory (0 = unbounded)
    #[arg(long, default_value_t = DEFAULT_MAX_PER_DIRECTORY, require_equals = true)]
    pub max_per_dir: i64,

    /// Results directory (default: `results_<model>_<timestamp>` next to the input file)
    #[arg(long, require_equals = true)]
    pub output: Option<PathBuf>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for a specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    pub verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Attractors {
    Fixpoints,
    Trapspaces,
}

impl From<Attractors> for AttractorKind {
    fn from(value: Attractors) -> Self {
        match value {
            Attractors::Fixpoints => AttractorKind::FixedPoints,
            Attractors::Trapspaces => AttractorKind::TrapSpaces,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Export {
    All,
    Survivors,
}

impl From<Export> for ExportPolicy {
    fn from(value: Export) -> Self {
        match value {
            Export::All => ExportPolicy::All,
            Export::Survivors => ExportPolicy::Survivors,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

impl CommonArgs {
    /// `None` = not specified, `Some(None)` = specified without value (info).
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            None => LevelFilter::Off,
            Some(None) => LevelFilter::Info,
            Some(Some(level)) => level.into(),
        }
    }

    pub fn init_logging(&self) {
        Builder::from_default_env()
            .filter_level(self.log_level())
            .init();
    }

    pub fn load_model(&self) -> Result<LogicalModel, ModelError> {
        LogicalModel::try_from_sif_file(&self.file)
    }

    /// Without `--parallel` or `--workers`, a single worker is used.
    pub fn workers(&self) -> Workers {
        match (self.parallel, self.workers) {
            (_, Some(n)) => Workers::Exactly(n),
            (true, None) => Workers::Auto,
            (false, None) => Workers::Exactly(1),
        }
    }

    pub fn config(&self, mode: EnumerationMode) -> GeneratorConfig {
        let config = GeneratorConfig::default()
            .with_mode(mode)
            .with_workers(self.workers())
            .with_max_per_directory(self.max_per_dir)
            .with_export_policy(self.export.into());
        match self.attractors {
            Some(attractors) => config.with_attractors(attractors.into()),
            None => config,
        }
    }

    /// The `--output` directory, or a fresh timestamped one next to the input file.
    pub fn results_directory(&self, model_name: &str) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => {
                let timestamp = chrono::Local::now().format("%d%m%Y_%H%M%S").to_string();
                default_results_directory(Path::new(&self.file), model_name, &timestamp)
            }
        }
    }
}

/// `results_<model>_<timestamp>/models` next to the input file.
pub fn default_results_directory(input: &Path, model_name: &str, timestamp: &str) -> PathBuf {
    let parent = input.parent().unwrap_or(Path::new("."));
    parent
        .join(results_directory_name(model_name, timestamp))
        .join("models")
}

/// Run the generator, print the report and exit with a non-zero code unless every
/// variant was processed.
pub fn run_and_report(generator: &VariantGenerator, results: &Path) {
    let report = generator.run(results).unwrap_or_else(|e| {
        eprintln!("Variant generation failed: {}", e);
        std::process::exit(1);
    });

    println!("{report}");
    if !report.is_success() {
        std::process::exit(1);
    }
}
