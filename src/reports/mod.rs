/*!
Reports on a formula.
*/

use crate::structures::assignment::Assignment;

/// The classification of a formula, with respect to some list of variables.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Classification {
    /// The formula is false on every assignment.
    Unsatisfiable,

    /// The formula is true on every assignment.
    Tautology,

    /// The formula is true on some, but not all, assignments.
    /// Each assignment on which the formula is true is a witness, in truth table order.
    Satisfiable(Vec<Assignment>),
}

impl Classification {
    /// Whether the formula is true on some assignment.
    pub fn is_satisfiable(&self) -> bool {
        !matches!(self, Self::Unsatisfiable)
    }

    /// The witnesses of a satisfiable formula which is not a tautology, and otherwise an empty slice.
    pub fn witnesses(&self) -> &[Assignment] {
        match self {
            Self::Satisfiable(witnesses) => witnesses,
            _ => &[],
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Tautology => write!(f, "Tautology"),
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
        }
    }
}
