/*!
Variables, and declared lists of variables.

A variable is a single lowercase letter, `a` through `z`, with the exception of `v`.
As the disjunction of two formulas is written with the letter `v`, `v` is never a variable.

```rust
# use sat_calc::structures::variable::Variables;
# use sat_calc::types::err::VariableError;
let variables = Variables::from_names(&["p", "q", "r"], 8).unwrap();
assert_eq!(variables.as_slice(), &['p', 'q', 'r']);

assert_eq!(Variables::from_names(&["v"], 8), Err(VariableError::Reserved));
```

As there are twenty five letters which may be variables, a list of distinct variables has at most twenty five elements.
And, as truth tables grow exponentially with the count of variables, the count is further limited by [configuration](crate::config::Config).
*/

use crate::{
    misc::log::targets::{self},
    structures::token::Token,
    types::err::VariableError,
};

/// A variable, always a lowercase ascii letter other than [RESERVED].
pub type Variable = char;

/// The letter reserved for disjunction.
pub const RESERVED: Variable = 'v';

/// The maximum count of distinct variables.
pub const VARIABLE_MAX: usize = 25;

/// Whether the character may be used as a variable.
pub fn is_variable(character: char) -> bool {
    character.is_ascii_lowercase() && character != RESERVED
}

/// An ordered list of distinct variables.
///
/// The order of the list fixes the order in which [assignments](crate::procedures::enumerate) are enumerated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
    list: Vec<Variable>,
}

impl Variables {
    /// Variables from a list of names, in the order given.
    pub fn from_names<S: AsRef<str>>(names: &[S], limit: usize) -> Result<Self, VariableError> {
        if names.len() > limit {
            return Err(VariableError::TooMany {
                count: names.len(),
                limit,
            });
        }

        let mut list = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let mut characters = name.chars();

            let variable = match (characters.next(), characters.next()) {
                (Some(RESERVED), None) => return Err(VariableError::Reserved),
                (Some(character), None) if is_variable(character) => character,
                _ => return Err(VariableError::Invalid(name.to_string())),
            };

            if list.contains(&variable) {
                return Err(VariableError::Duplicate(variable));
            }
            list.push(variable);
        }

        log::trace!(target: targets::VARIABLES, "Declared: {list:?}");
        Ok(Variables { list })
    }

    /// The variables of some tokens, in order of first appearance.
    pub fn from_tokens(tokens: &[Token], limit: usize) -> Result<Self, VariableError> {
        let mut list = Vec::default();

        for variable in tokens.iter().filter_map(|token| token.variable()) {
            if !list.contains(&variable) {
                list.push(variable);
            }
        }

        if list.len() > limit {
            return Err(VariableError::TooMany {
                count: list.len(),
                limit,
            });
        }

        log::trace!(target: targets::VARIABLES, "Inferred: {list:?}");
        Ok(Variables { list })
    }

    pub fn as_slice(&self) -> &[Variable] {
        &self.list
    }

    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        self.list.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl std::fmt::Display for Variables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.list.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::token::TokenKind;

    #[test]
    fn declared_order() {
        let variables = Variables::from_names(&["r", "p", "q"], VARIABLE_MAX).unwrap();
        assert_eq!(variables.as_slice(), &['r', 'p', 'q']);
    }

    #[test]
    fn invalid_names() {
        assert_eq!(
            Variables::from_names(&["pq"], VARIABLE_MAX),
            Err(VariableError::Invalid("pq".to_string()))
        );
        assert_eq!(
            Variables::from_names(&["P"], VARIABLE_MAX),
            Err(VariableError::Invalid("P".to_string()))
        );
        assert_eq!(
            Variables::from_names(&[""], VARIABLE_MAX),
            Err(VariableError::Invalid(String::new()))
        );
        assert_eq!(
            Variables::from_names(&["v"], VARIABLE_MAX),
            Err(VariableError::Reserved)
        );
    }

    #[test]
    fn duplicate() {
        assert_eq!(
            Variables::from_names(&["p", "q", "p"], VARIABLE_MAX),
            Err(VariableError::Duplicate('p'))
        );
    }

    #[test]
    fn limit() {
        assert_eq!(
            Variables::from_names(&["p", "q", "r"], 2),
            Err(VariableError::TooMany { count: 3, limit: 2 })
        );
    }

    #[test]
    fn inferred_from_tokens() {
        let tokens = vec![
            Token::new(TokenKind::Letter, "q", 0),
            Token::new(TokenKind::And, "^", 1),
            Token::new(TokenKind::Letter, "p", 2),
            Token::new(TokenKind::Or, "v", 3),
            Token::new(TokenKind::Letter, "q", 4),
        ];
        let variables = Variables::from_tokens(&tokens, VARIABLE_MAX).unwrap();
        assert_eq!(variables.as_slice(), &['q', 'p']);

        assert_eq!(
            Variables::from_tokens(&tokens, 1),
            Err(VariableError::TooMany { count: 2, limit: 1 })
        );
    }
}
