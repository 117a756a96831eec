use crate::attractor::{AttractorKind, AttractorOracle};
use crate::error::VariantError;
use crate::model::LogicalModel;
use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::fixed_points::FixedPoints;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use biodivine_lib_param_bn::trap_spaces::{SymbolicSpaceContext, TrapSpaces};
use log::debug;
use std::path::Path;

/// Convert a logical model into a [`BooleanNetwork`] (through its `bnet` representation).
pub fn to_boolean_network(model: &LogicalModel) -> Result<BooleanNetwork, String> {
    BooleanNetwork::try_from_bnet(&model.to_bnet())
}

/// An [`AttractorOracle`] based on symbolic (BDD) fixed point and trap space detection.
///
/// Every call builds a fresh symbolic graph, so one instance can be shared by all workers.
#[derive(Clone, Debug)]
pub struct SymbolicAttractors {
    kind: AttractorKind,
}

impl SymbolicAttractors {
    pub fn new(kind: AttractorKind) -> SymbolicAttractors {
        SymbolicAttractors { kind }
    }

    /// Compute the answer, reporting errors of the underlying library as plain strings.
    fn compute(&self, model: &LogicalModel) -> Result<bool, String> {
        let network = to_boolean_network(model)?;
        match self.kind {
            AttractorKind::FixedPoints => {
                let graph = SymbolicAsyncGraph::new(&network)?;
                let fixed_points = FixedPoints::symbolic(&graph, graph.unit_colored_vertices());
                debug!(
                    "Model `{}` has {} fixed points.",
                    model.name(),
                    fixed_points.exact_cardinality()
                );
                Ok(!fixed_points.is_empty())
            }
            AttractorKind::TrapSpaces => {
                let context = SymbolicSpaceContext::new(&network);
                let graph = SymbolicAsyncGraph::with_space_context(&network, &context)?;
                let unit = context.mk_unit_colored_spaces(&graph);
                let essential = TrapSpaces::essential_symbolic(&context, &graph, &unit);
                let minimal = TrapSpaces::minimize(&context, &essential);
                let found = !minimal.is_empty();
                debug!(
                    "Model `{}` has minimal trap spaces: {}.",
                    model.name(),
                    found
                );
                Ok(found)
            }
        }
    }
}

impl AttractorOracle for SymbolicAttractors {
    fn kind(&self) -> AttractorKind {
        self.kind
    }

    fn has_attractors(&self, model: &LogicalModel, _directory: &Path) -> Result<bool, VariantError> {
        self.compute(model)
            .map_err(|message| VariantError::AttractorComputation {
                name: model.name().to_string(),
                message,
            })
    }
}
