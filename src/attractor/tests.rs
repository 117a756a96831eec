use crate::attractor::{AttractorKind, AttractorOracle, SymbolicAttractors, to_boolean_network};
use crate::model::LogicalModel;
use crate::test_utils::init_logger;
use std::path::Path;

/// A negative feedback loop: oscillates, hence no fixed points.
const NEGATIVE_LOOP: &str = "A -| B\nB -> A\n";

/// A positive feedback loop: two fixed points (`00` and `11`).
const POSITIVE_LOOP: &str = "A -> B\nB -> A\n";

#[test]
fn convert_to_boolean_network() {
    let model = LogicalModel::try_from_sif("toy", "A -> C\nB -| C\n").unwrap();
    let network = to_boolean_network(&model).unwrap();
    assert_eq!(network.num_vars(), 3);

    // Every name accepted by the `.sif` parser is a valid network variable.
    let model = LogicalModel::try_from_sif("names", "TNF_a -> B2\nc_1 -| B2\n").unwrap();
    let network = to_boolean_network(&model).unwrap();
    assert_eq!(network.num_vars(), 3);
}

#[test]
fn parse_attractor_kind() {
    assert_eq!("fixpoints".parse::<AttractorKind>(), Ok(AttractorKind::FixedPoints));
    assert_eq!("trapspaces".parse::<AttractorKind>(), Ok(AttractorKind::TrapSpaces));
    assert!("attractors".parse::<AttractorKind>().is_err());
    assert_eq!(AttractorKind::TrapSpaces.to_string(), "trapspaces");
}

#[test]
fn fixed_points() {
    init_logger();
    let oracle = SymbolicAttractors::new(AttractorKind::FixedPoints);
    assert_eq!(oracle.kind(), AttractorKind::FixedPoints);

    let negative = LogicalModel::try_from_sif("negative", NEGATIVE_LOOP).unwrap();
    assert!(!oracle.has_attractors(&negative, Path::new(".")).unwrap());

    let positive = LogicalModel::try_from_sif("positive", POSITIVE_LOOP).unwrap();
    assert!(oracle.has_attractors(&positive, Path::new(".")).unwrap());
}

#[test]
fn trap_spaces() {
    init_logger();
    let oracle = SymbolicAttractors::new(AttractorKind::TrapSpaces);

    // Minimal trap spaces always exist, even without fixed points.
    let negative = LogicalModel::try_from_sif("negative", NEGATIVE_LOOP).unwrap();
    assert!(oracle.has_attractors(&negative, Path::new(".")).unwrap());

    let positive = LogicalModel::try_from_sif("positive", POSITIVE_LOOP).unwrap();
    assert!(oracle.has_attractors(&positive, Path::new(".")).unwrap());
}
