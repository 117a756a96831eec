use crate::error::ModelError;
use crate::model::{
    BooleanEquation, Interaction, LinkOperator, LinkOperators, LogicalModel, Sign,
};
use crate::test_utils::init_logger;

const TOY_SIF: &str = "\
# A small network with two mutable equations.
A -> C
B -| C
C -> D
A -| D
D -| E
B <- E
";

#[test]
fn parse_relations() {
    let forward = Interaction::try_from_line("A -> B").unwrap();
    assert_eq!(forward.source, "A");
    assert_eq!(forward.target, "B");
    assert_eq!(forward.sign, Sign::Activation);

    let backward = Interaction::try_from_line("A |- B").unwrap();
    assert_eq!(backward.source, "B");
    assert_eq!(backward.target, "A");
    assert_eq!(backward.sign, Sign::Inhibition);

    let words = Interaction::try_from_line("X\tinhibits\tY").unwrap();
    assert_eq!(words.sign, Sign::Inhibition);

    assert!(Interaction::try_from_line("A => B").is_err());
    assert!(Interaction::try_from_line("A ->").is_err());
}

#[test]
fn build_model_from_sif() {
    init_logger();
    let model = LogicalModel::try_from_sif("toy", TOY_SIF).unwrap();
    assert_eq!(model.name(), "toy");

    let targets: Vec<&str> = model.equations().iter().map(|it| it.target()).collect();
    // Regulated nodes first, then the pure inputs.
    assert_eq!(targets, vec!["C", "D", "E", "B", "A"]);

    assert_eq!(
        model.link_operators(),
        vec![
            LinkOperator::And,
            LinkOperator::And,
            LinkOperator::None,
            LinkOperator::None,
            LinkOperator::None,
        ]
    );

    let b = model.find_equation("B").unwrap();
    assert_eq!(b.activators(), &["E".to_string()]);
    assert!(b.inhibitors().is_empty());

    let a = model.find_equation("A").unwrap();
    assert_eq!(a.to_string(), "A *= A");
    assert!(a.activators().is_empty() && a.inhibitors().is_empty());
}

#[test]
fn duplicate_and_conflicting_interactions() {
    let model = LogicalModel::try_from_sif("dup", "A -> B\nA -> B\nC -| B\n").unwrap();
    assert_eq!(model.find_equation("B").unwrap().activators().len(), 1);

    let error = LogicalModel::try_from_sif("bad", "A -> B\nA -| B\n").unwrap_err();
    assert!(matches!(error, ModelError::Parse { line: 2, .. }));

    let error = LogicalModel::try_from_sif("empty", "# nothing\n\n").unwrap_err();
    assert!(matches!(error, ModelError::Empty));
}

#[test]
fn render_equations() {
    let activators = vec!["A".to_string(), "B".to_string()];
    let inhibitors = vec!["C".to_string()];
    let mut equation = BooleanEquation::new("T", activators.clone(), inhibitors.clone());
    assert_eq!(equation.to_string(), "T *= ( A or B ) and not ( C )");
    assert_eq!(equation.to_bnet_factor(), "(A | B) & !(C)");

    equation.flip_link();
    assert_eq!(equation.link(), LinkOperator::Or);
    assert_eq!(equation.to_string(), "T *= ( A or B ) or not ( C )");
    assert_eq!(equation.to_bnet_factor(), "(A | B) | !(C)");

    let negative = BooleanEquation::with_link("T", Vec::new(), inhibitors, LinkOperator::Or);
    assert_eq!(negative.link(), LinkOperator::None);
    assert_eq!(negative.to_string(), "T *= not ( C )");
    assert_eq!(negative.to_bnet_factor(), "!(C)");
}

#[test]
fn flip_only_mutable_equations() {
    let mut model = LogicalModel::try_from_sif("toy", TOY_SIF).unwrap();
    assert_eq!(model.equation_count(), 5);

    model.flip_link_operator(0);
    model.flip_link_operator(2);
    assert_eq!(model.link_operator(0), LinkOperator::Or);
    assert_eq!(model.link_operator(2), LinkOperator::None);

    model.flip_link_operator(0);
    assert_eq!(model.link_operator(0), LinkOperator::And);
}

#[test]
fn model_file_and_bnet() {
    let model = LogicalModel::try_from_sif("toy", TOY_SIF).unwrap();

    let bnet = model.to_bnet();
    let lines: Vec<&str> = bnet.lines().collect();
    assert_eq!(lines[0], "targets, factors");
    assert_eq!(lines[1], "C, (A) & !(B)");
    assert_eq!(lines[5], "A, A");

    let file = model.to_model_file(&[("attractors", "none".to_string())]);
    let lines: Vec<&str> = file.lines().collect();
    assert_eq!(lines[0], "modelname: toy");
    assert_eq!(lines[1], "attractors: none");
    assert_eq!(lines[2], "equation: C *= ( A ) and not ( B )");
    assert_eq!(lines.len(), 2 + model.equation_count());
}

#[test]
fn reject_unsupported_node_names() {
    let error = LogicalModel::try_from_sif("bad", "B -> C\nTNF-a -> B\nC -| B\n").unwrap_err();
    assert!(matches!(error, ModelError::Parse { line: 2, .. }), "{error}");

    let error = Interaction::try_from_line("A -> B.1").unwrap_err();
    assert!(error.contains("B.1"));

    let model = LogicalModel::try_from_sif("ok", "TNF_a -> B2\nc_1 -| B2\n").unwrap();
    assert_eq!(model.equations().len(), 3);
}
