/*!
Formulas, as trees.

A formula tree is built by reading some tokens once, with each connective interpreted as a constructor.
The tree may then be evaluated on any number of valuations without reading the tokens again.

```rust
# use sat_calc::tokenize;
# use sat_calc::structures::formula::Formula;
let tokens = tokenize("p ^ q v ~r").unwrap();
let formula = Formula::from_tokens(&tokens, false).unwrap();

assert_eq!(format!("{formula}"), "((p ^ q) v ~r)");
assert_eq!(formula.variables(), vec!['p', 'q', 'r']);
assert_eq!(formula.evaluate(&[('p', false), ('q', true), ('r', false)][..]), Ok(true));
```

The value of a tree on a valuation is always the value obtained by [evaluating](crate::procedures::evaluate) the tokens the tree was read from.
In particular, every variable of the tree must have a value, even if the value of the formula is fixed by some other part of the formula.

Trees are displayed with each binary connective in parentheses, and the display of a tree tokenizes and reads to the same tree.
*/

use crate::{
    procedures::evaluate::{Connectives, Parser},
    structures::{token::Token, valuation::Valuation, variable::Variable},
    types::err::ErrorKind,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    Var(Variable),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

/// The interpretation of connectives as constructors of a [Formula].
pub struct TreeBuilder;

impl Connectives for TreeBuilder {
    type Value = Formula;

    fn variable(&self, variable: Variable) -> Result<Formula, ErrorKind> {
        Ok(Formula::Var(variable))
    }

    fn not(&self, value: Formula) -> Formula {
        Formula::Not(Box::new(value))
    }

    fn and(&self, left: Formula, right: Formula) -> Formula {
        Formula::And(Box::new(left), Box::new(right))
    }

    fn or(&self, left: Formula, right: Formula) -> Formula {
        Formula::Or(Box::new(left), Box::new(right))
    }

    fn implies(&self, left: Formula, right: Formula) -> Formula {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    fn iff(&self, left: Formula, right: Formula) -> Formula {
        Formula::Iff(Box::new(left), Box::new(right))
    }
}

impl Formula {
    /// The tree of the formula of some tokens.
    pub fn from_tokens(tokens: &[Token], allow_trailing: bool) -> Result<Self, ErrorKind> {
        Parser::parse(tokens, TreeBuilder, allow_trailing)
    }

    /// The value of the formula on a valuation.
    ///
    /// Both sides of each binary connective are evaluated, and so an undefined variable anywhere in the formula is an error.
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, ErrorKind> {
        match self {
            Self::Var(variable) => match valuation.value_of(*variable) {
                Some(value) => Ok(value),
                None => Err(ErrorKind::UndefinedVariable(*variable)),
            },

            Self::Not(formula) => Ok(!formula.evaluate(valuation)?),

            Self::And(left, right) => {
                let (l, r) = (left.evaluate(valuation)?, right.evaluate(valuation)?);
                Ok(l && r)
            }

            Self::Or(left, right) => {
                let (l, r) = (left.evaluate(valuation)?, right.evaluate(valuation)?);
                Ok(l || r)
            }

            Self::Implies(left, right) => {
                let (l, r) = (left.evaluate(valuation)?, right.evaluate(valuation)?);
                Ok(!l || r)
            }

            Self::Iff(left, right) => {
                let (l, r) = (left.evaluate(valuation)?, right.evaluate(valuation)?);
                Ok((!l || r) && (!r || l))
            }
        }
    }

    /// The variables of the formula, in order of first appearance (from the left).
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = Vec::default();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut Vec<Variable>) {
        match self {
            Self::Var(variable) => {
                if !variables.contains(variable) {
                    variables.push(*variable);
                }
            }

            Self::Not(formula) => formula.collect_variables(variables),

            Self::And(left, right)
            | Self::Or(left, right)
            | Self::Implies(left, right)
            | Self::Iff(left, right) => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(variable) => write!(f, "{variable}"),

            // A negation applies to a variable or a parenthesised formula.
            Self::Not(formula) if matches!(formula.as_ref(), Self::Not(_)) => {
                write!(f, "~({formula})")
            }
            Self::Not(formula) => write!(f, "~{formula}"),

            Self::And(left, right) => write!(f, "({left} ^ {right})"),
            Self::Or(left, right) => write!(f, "({left} v {right})"),
            Self::Implies(left, right) => write!(f, "({left} -> {right})"),
            Self::Iff(left, right) => write!(f, "({left} <-> {right})"),
        }
    }
}
