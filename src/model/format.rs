use crate::model::{BooleanEquation, LinkOperator, LogicalModel};
use std::fmt::{Display, Formatter};

fn join(names: &[String], operator: &str) -> String {
    names.join(&format!(" {operator} "))
}

impl BooleanEquation {
    /// Right-hand side of the equation in the `bnet` syntax.
    pub fn to_bnet_factor(&self) -> String {
        let positive = format!("({})", join(self.activators(), "|"));
        let negative = format!("!({})", join(self.inhibitors(), "|"));
        match (self.activators().is_empty(), self.inhibitors().is_empty()) {
            (true, true) => self.target().to_string(),
            (false, true) => positive,
            (true, false) => negative,
            (false, false) => match self.link() {
                LinkOperator::Or => format!("{positive} | {negative}"),
                _ => format!("{positive} & {negative}"),
            },
        }
    }
}

/// Writes the equation as `T *= ( a or b ) and not ( c )`.
impl Display for BooleanEquation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let positive = format!("( {} )", join(self.activators(), "or"));
        let negative = format!("not ( {} )", join(self.inhibitors(), "or"));
        write!(f, "{} *= ", self.target())?;
        match (self.activators().is_empty(), self.inhibitors().is_empty()) {
            (true, true) => write!(f, "{}", self.target()),
            (false, true) => write!(f, "{positive}"),
            (true, false) => write!(f, "{negative}"),
            (false, false) => {
                // A mutable equation always carries `and` or `or`.
                let link = if self.link() == LinkOperator::Or {
                    "or"
                } else {
                    "and"
                };
                write!(f, "{positive} {link} {negative}")
            }
        }
    }
}

impl LogicalModel {
    /// Serialize the model into the `bnet` format (one `target, factor` line per equation).
    pub fn to_bnet(&self) -> String {
        let mut result = String::from("targets, factors\n");
        for equation in self.equations() {
            result.push_str(&format!(
                "{}, {}\n",
                equation.target(),
                equation.to_bnet_factor()
            ));
        }
        result
    }

    /// Serialize the model into the line-based `.model` format:
    ///
    /// ```text
    /// modelname: toy_5
    /// equation: A *= ( B ) and not ( C )
    /// ```
    ///
    /// Extra `key: value` lines are inserted between the name and the equations.
    pub fn to_model_file(&self, metadata: &[(&str, String)]) -> String {
        let mut result = format!("modelname: {}\n", self.name());
        for (key, value) in metadata {
            result.push_str(&format!("{key}: {value}\n"));
        }
        for equation in self.equations() {
            result.push_str(&format!("equation: {equation}\n"));
        }
        result
    }
}
