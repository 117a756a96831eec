use crate::error::ModelError;
use crate::model::{BooleanEquation, LogicalModel};
use log::{debug, info};
use std::path::Path;

/// Sign of a regulation in an interaction network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Activation,
    Inhibition,
}

/// One `source relation target` line of a `.sif` file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub source: String,
    pub sign: Sign,
    pub target: String,
}

impl Interaction {
    /// Parse a single non-empty line.
    ///
    /// Accepted relations are `->`, `-|` (source regulates target), `<-`, `|-`
    /// (target regulates source) and the words `activates`/`inhibits`.
    pub fn try_from_line(line: &str) -> Result<Interaction, String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [left, relation, right] = tokens[..] else {
            return Err(format!(
                "Expected `source relation target`, found {} tokens.",
                tokens.len()
            ));
        };

        let (source, sign, target) = match relation {
            "->" | "activates" | "activate" => (left, Sign::Activation, right),
            "-|" | "inhibits" | "inhibit" => (left, Sign::Inhibition, right),
            "<-" => (right, Sign::Activation, left),
            "|-" => (right, Sign::Inhibition, left),
            other => return Err(format!("Unknown relation `{other}`.")),
        };

        for name in [source, target] {
            if !is_valid_name(name) {
                return Err(format!(
                    "Invalid node name `{name}` (only letters, digits and `_` are allowed)."
                ));
            }
        }

        Ok(Interaction {
            source: source.to_string(),
            sign,
            target: target.to_string(),
        })
    }
}

/// Node names must be valid variable names of the `bnet` format.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse all interactions of a `.sif` document. Blank lines and `#` comments are skipped
/// and repeated interactions are reported only once.
pub fn parse_interactions(content: &str) -> Result<Vec<Interaction>, ModelError> {
    let mut result: Vec<Interaction> = Vec::new();
    for (line_index, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let interaction = Interaction::try_from_line(line).map_err(|message| ModelError::Parse {
            line: line_index + 1,
            message,
        })?;

        let conflict = result
            .iter()
            .find(|it| it.source == interaction.source && it.target == interaction.target);
        match conflict {
            Some(existing) if existing.sign == interaction.sign => {
                debug!("Skipping duplicate interaction on line {}.", line_index + 1);
            }
            Some(_) => {
                return Err(ModelError::Parse {
                    line: line_index + 1,
                    message: format!(
                        "`{}` both activates and inhibits `{}`.",
                        interaction.source, interaction.target
                    ),
                });
            }
            None => result.push(interaction),
        }
    }

    if result.is_empty() {
        return Err(ModelError::Empty);
    }
    Ok(result)
}

impl LogicalModel {
    /// Build a model from a list of interactions.
    ///
    /// Every regulated node gets one equation (in the order in which targets first appear).
    /// Nodes that only ever appear as a source get a self-sustaining equation `A *= A`
    /// appended after all regulated nodes.
    pub fn from_interactions(name: &str, interactions: &[Interaction]) -> LogicalModel {
        let mut targets: Vec<&str> = Vec::new();
        for it in interactions {
            if !targets.contains(&it.target.as_str()) {
                targets.push(&it.target);
            }
        }

        let mut equations: Vec<BooleanEquation> = targets
            .iter()
            .map(|target| {
                let regulators = |sign: Sign| {
                    interactions
                        .iter()
                        .filter(|it| it.target == *target && it.sign == sign)
                        .map(|it| it.source.clone())
                        .collect::<Vec<_>>()
                };
                BooleanEquation::new(
                    target,
                    regulators(Sign::Activation),
                    regulators(Sign::Inhibition),
                )
            })
            .collect();

        let mut inputs: Vec<&str> = Vec::new();
        for it in interactions {
            let source = it.source.as_str();
            if !targets.contains(&source) && !inputs.contains(&source) {
                inputs.push(source);
            }
        }
        for input in inputs {
            equations.push(BooleanEquation::new(input, Vec::new(), Vec::new()));
        }

        LogicalModel::new(name, equations)
    }

    /// Parse a model from the contents of a `.sif` file.
    pub fn try_from_sif(name: &str, content: &str) -> Result<LogicalModel, ModelError> {
        let interactions = parse_interactions(content)?;
        Ok(LogicalModel::from_interactions(name, &interactions))
    }

    /// Load a model from a `.sif` file. The model is named after the file stem.
    pub fn try_from_sif_file<P: AsRef<Path>>(path: P) -> Result<LogicalModel, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .and_then(|it| it.to_str())
            .unwrap_or("model");
        let model = LogicalModel::try_from_sif(name, &content)?;
        info!(
            "Loaded model `{}` with {} equations from {}.",
            model.name(),
            model.equations().len(),
            path.display()
        );
        Ok(model)
    }
}
