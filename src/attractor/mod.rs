//! Attractor detection for model variants.
//!
//! Workers only need a yes/no answer: does the variant have at least one attractor of the
//! requested [`AttractorKind`]? The answer is provided by an [`AttractorOracle`]. The default
//! oracle, [`SymbolicAttractors`], converts the variant into a
//! [`BooleanNetwork`](biodivine_lib_param_bn::BooleanNetwork) and uses the symbolic fixed point
//! and trap space algorithms of `biodivine-lib-param-bn`.

mod symbolic;

#[cfg(test)]
mod tests;

pub use symbolic::{SymbolicAttractors, to_boolean_network};

use crate::error::VariantError;
use crate::model::LogicalModel;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// The kind of attractors that should be computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttractorKind {
    /// Fixed points (stable states) of the asynchronous dynamics.
    FixedPoints,
    /// Minimal trap spaces.
    TrapSpaces,
}

impl Display for AttractorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttractorKind::FixedPoints => write!(f, "fixpoints"),
            AttractorKind::TrapSpaces => write!(f, "trapspaces"),
        }
    }
}

impl FromStr for AttractorKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fixpoints" => Ok(AttractorKind::FixedPoints),
            "trapspaces" => Ok(AttractorKind::TrapSpaces),
            other => Err(format!(
                "Attractors can only be `fixpoints` or `trapspaces` (found `{other}`)."
            )),
        }
    }
}

/// Decides whether a model variant has any attractors.
///
/// Implementations may use `directory` (the current output directory of the worker) for
/// intermediate files. A failure only invalidates the current variant.
pub trait AttractorOracle: Send + Sync {
    /// The kind of attractors this oracle looks for.
    fn kind(&self) -> AttractorKind;

    fn has_attractors(&self, model: &LogicalModel, directory: &Path) -> Result<bool, VariantError>;
}
