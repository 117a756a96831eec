use std::fmt::{Display, Formatter};

/// The Boolean combinator joining the activating and inhibiting part of an equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkOperator {
    And,
    Or,
    None,
}

impl LinkOperator {
    /// The opposite operator (`None` stays `None`).
    pub fn flipped(self) -> LinkOperator {
        match self {
            LinkOperator::And => LinkOperator::Or,
            LinkOperator::Or => LinkOperator::And,
            LinkOperator::None => LinkOperator::None,
        }
    }

    /// True for operators that can be changed between variants.
    pub fn is_mutable(self) -> bool {
        self != LinkOperator::None
    }
}

impl Display for LinkOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkOperator::And => write!(f, "and"),
            LinkOperator::Or => write!(f, "or"),
            LinkOperator::None => write!(f, ""),
        }
    }
}

/// A single equation `target *= ( activators ) link not ( inhibitors )`.
///
/// The link operator is derived from the regulators when the equation is created: it is
/// [`LinkOperator::And`] if there are both activators and inhibitors, [`LinkOperator::None`]
/// otherwise. An equation with no regulators at all keeps its target constant (`T *= T`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanEquation {
    target: String,
    activators: Vec<String>,
    inhibitors: Vec<String>,
    link: LinkOperator,
}

impl BooleanEquation {
    pub fn new(target: &str, activators: Vec<String>, inhibitors: Vec<String>) -> BooleanEquation {
        let link = if !activators.is_empty() && !inhibitors.is_empty() {
            LinkOperator::And
        } else {
            LinkOperator::None
        };
        BooleanEquation {
            target: target.to_string(),
            activators,
            inhibitors,
            link,
        }
    }

    /// Same as [`BooleanEquation::new`], but with an explicit initial link operator.
    ///
    /// The operator is ignored (replaced with `None`) if the equation cannot have one.
    pub fn with_link(
        target: &str,
        activators: Vec<String>,
        inhibitors: Vec<String>,
        link: LinkOperator,
    ) -> BooleanEquation {
        let mut equation = BooleanEquation::new(target, activators, inhibitors);
        if equation.link.is_mutable() && link.is_mutable() {
            equation.link = link;
        }
        equation
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn activators(&self) -> &[String] {
        &self.activators
    }

    pub fn inhibitors(&self) -> &[String] {
        &self.inhibitors
    }

    pub fn link(&self) -> LinkOperator {
        self.link
    }

    /// Swap `And`/`Or`. Does nothing for equations without a link operator.
    pub fn flip_link(&mut self) {
        self.link = self.link.flipped();
    }
}
