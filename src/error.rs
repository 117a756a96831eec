use std::path::PathBuf;
use thiserror::Error;

/// Problems detected before any worker starts. These always abort the whole run.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("The number of random variants must be positive.")]
    EmptySample,
    #[error("The number of workers must be positive.")]
    NoWorkers,
    #[error(
        "Cannot export only variants with attractors without computing them. \
        Specify an attractor kind or export all variants."
    )]
    SurvivorsWithoutAttractors,
    #[error("Model `{0}` has no equations with a link operator; there is nothing to enumerate.")]
    NothingToEnumerate(String),
    #[error("Model `{name}` has {count} equations with link operators (at most 63 are supported).")]
    TooManyVariants { name: String, count: usize },
    #[error("Cannot load input model: {0}")]
    Model(#[from] ModelError),
    #[error("Cannot prepare results directory `{path}`: {source}")]
    ResultsDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot start worker pool: {0}")]
    WorkerPool(String),
}

/// A variant index (or bit width) that cannot be mapped to a bit pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexOutOfRange {
    #[error("Variant index {0} is negative.")]
    Negative(i64),
    #[error("Variant index {index} cannot be represented with {digits} binary digits (max: {max}).")]
    ExceedsDigits { index: i64, digits: u32, max: i64 },
    #[error("The number of binary digits must be positive.")]
    NoDigits,
}

/// Failure while processing a single variant.
///
/// Use [`VariantError::is_fatal`] to distinguish errors that only invalidate one variant
/// from those that stop the whole worker.
#[derive(Error, Debug)]
pub enum VariantError {
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),
    #[error("Cannot create output directory `{path}`: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Attractor computation failed for `{name}`: {message}")]
    AttractorComputation { name: String, message: String },
    #[error("Cannot export `{name}`: {source}")]
    Export {
        name: String,
        source: std::io::Error,
    },
}

impl VariantError {
    /// True if the worker that produced this error cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            VariantError::IndexOutOfRange(_) | VariantError::DirectoryCreation { .. }
        )
    }
}

/// Problems reading or interpreting an interaction (`.sif`) file.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("The interaction file contains no interactions.")]
    Empty,
}
