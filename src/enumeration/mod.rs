//! Mapping between variant indices and link-operator assignments.
//!
//! A model with `k` mutable equations (see [`MutableEquations`]) has `2^k` variants. Variant
//! `i` is obtained by writing `i` as a `k`-digit big-endian binary number (see [`encode`]):
//! the most significant digit belongs to the first mutable equation, `0` selects
//! [`LinkOperator::And`](crate::model::LinkOperator::And) and `1` selects
//! [`LinkOperator::Or`](crate::model::LinkOperator::Or).
//!
//! The index space is split between workers using [`partition`].

mod index_codec;
mod mutator;
mod partition;

#[cfg(test)]
mod tests;

pub use index_codec::{decode, encode};
pub use mutator::{apply_variant, bit_to_operator, operator_to_bit};
pub use partition::{IndexRange, choose_worker_count, partition, split_samples};

use crate::error::ConfigurationError;
use crate::model::{LinkOperators, LogicalModel};

/// Largest supported number of mutable equations, such that every variant index
/// fits into a non-negative `i64`.
pub const MAX_MUTABLE_EQUATIONS: usize = 63;

/// Ordered positions of the equations whose link operator can change.
///
/// The order is always the order of equations in the model, which makes the mapping
/// between indices and variants identical for all workers (and all runs).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutableEquations {
    positions: Vec<usize>,
}

impl<M: LinkOperators> From<&M> for MutableEquations {
    fn from(model: &M) -> Self {
        MutableEquations {
            positions: (0..model.equation_count())
                .filter(|it| model.link_operator(*it).is_mutable())
                .collect(),
        }
    }
}

impl MutableEquations {
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The number of mutable equations (`k`).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Width of the variant bit patterns (`k`, as used by [`encode`]).
    pub fn digits(&self) -> u32 {
        u32::try_from(self.positions.len()).unwrap_or(u32::MAX)
    }

    /// The bit pattern describing the current link operators of `model` (same format
    /// as [`encode`]).
    pub fn pattern<M: LinkOperators>(&self, model: &M) -> String {
        self.positions
            .iter()
            .map(|it| match operator_to_bit(model.link_operator(*it)) {
                Some(true) => '1',
                _ => '0',
            })
            .collect()
    }

    /// Total number of variants (`2^k`), or `None` if it does not fit into the
    /// supported index range.
    pub fn variant_count(&self) -> Option<u64> {
        if self.positions.len() > MAX_MUTABLE_EQUATIONS {
            None
        } else {
            Some(1u64 << self.positions.len())
        }
    }

    /// Same as [`MutableEquations::variant_count`], but also rejects models with nothing
    /// to enumerate.
    pub fn try_variant_count(&self, model: &LogicalModel) -> Result<u64, ConfigurationError> {
        if self.is_empty() {
            return Err(ConfigurationError::NothingToEnumerate(
                model.name().to_string(),
            ));
        }
        self.variant_count()
            .ok_or_else(|| ConfigurationError::TooManyVariants {
                name: model.name().to_string(),
                count: self.len(),
            })
    }
}
