use std::str::FromStr;

/// Variant strategies for evaluating a formula on each row of a truth table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    /// Read the tokens of the formula anew for each row.
    Reparse = 0,

    /// Read the tokens once, to a [tree](crate::structures::formula::Formula), and evaluate the tree for each row.
    Tree,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reparse => write!(f, "reparse"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

impl Strategy {
    /// The minimum Strategy type.
    pub const MIN: Strategy = Strategy::Reparse;

    /// The maximum Strategy type.
    pub const MAX: Strategy = Strategy::Tree;
}

impl FromStr for Strategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reparse" => Ok(Self::Reparse),

            "tree" => Ok(Self::Tree),

            _unknown_string => Err(()),
        }
    }
}
