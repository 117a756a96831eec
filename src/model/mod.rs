//! Logical models built from signed interaction networks.
//!
//! A [`LogicalModel`] is an ordered list of [`BooleanEquation`] objects, one per regulated
//! node. Each equation combines its activators and inhibitors using a [`LinkOperator`]:
//!
//!  - [`LinkOperator::And`]: `T *= ( a or b ) and not ( c or d )`
//!  - [`LinkOperator::Or`]: `T *= ( a or b ) or not ( c or d )`
//!  - [`LinkOperator::None`]: the equation has only activators or only inhibitors, hence
//!    there is nothing to choose.
//!
//! Only the link operators of equations with both kinds of regulators can change between
//! model variants. The rest of the crate accesses models exclusively through the
//! [`LinkOperators`] trait.

mod equation;
mod format;
mod sif;

#[cfg(test)]
mod tests;

pub use equation::{BooleanEquation, LinkOperator};
pub use sif::{Interaction, Sign};

/// Minimal interface of a model whose link operators can be enumerated and mutated.
pub trait LinkOperators {
    /// Number of equations in the model.
    fn equation_count(&self) -> usize;

    /// Link operator of the equation at `position`.
    ///
    /// Panics if `position` is not smaller than [`LinkOperators::equation_count`].
    fn link_operator(&self, position: usize) -> LinkOperator;

    /// Swap `And` for `Or` (and vice versa) in the equation at `position`. Equations
    /// without a link operator are left unchanged.
    fn flip_link_operator(&mut self, position: usize);
}

/// A logical model: a named, ordered collection of Boolean equations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalModel {
    name: String,
    equations: Vec<BooleanEquation>,
}

impl LogicalModel {
    /// Create a new model from equations. The order of equations is preserved and defines
    /// the identity of each equation.
    pub fn new(name: &str, equations: Vec<BooleanEquation>) -> LogicalModel {
        LogicalModel {
            name: name.to_string(),
            equations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn equations(&self) -> &[BooleanEquation] {
        &self.equations
    }

    /// Find the equation of the given target node.
    pub fn find_equation(&self, target: &str) -> Option<&BooleanEquation> {
        self.equations.iter().find(|it| it.target() == target)
    }

    /// The link operator assignment of all equations, in model order.
    pub fn link_operators(&self) -> Vec<LinkOperator> {
        self.equations.iter().map(|it| it.link()).collect()
    }
}

impl LinkOperators for LogicalModel {
    fn equation_count(&self) -> usize {
        self.equations.len()
    }

    fn link_operator(&self, position: usize) -> LinkOperator {
        self.equations[position].link()
    }

    fn flip_link_operator(&mut self, position: usize) {
        self.equations[position].flip_link();
    }
}
