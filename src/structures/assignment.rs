/*!
A full valuation of some list of variables.

An assignment pairs each variable of a [list](crate::structures::variable::Variables) with a value, and keeps the order of the list.
Assignments are generated by the [enumerator](crate::procedures::enumerate).

```rust
# use sat_calc::structures::assignment::Assignment;
# use sat_calc::structures::valuation::Valuation;
let assignment = Assignment::from_pairs(vec![('p', true), ('q', false)]);

assert_eq!(assignment.value_of('p'), Some(true));
assert_eq!(format!("{assignment}"), "{p: true, q: false}");
```
*/

use super::{valuation::Valuation, variable::Variable};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    pairs: Vec<(Variable, bool)>,
}

impl Assignment {
    pub fn from_pairs(pairs: Vec<(Variable, bool)>) -> Self {
        Assignment { pairs }
    }

    /// (Variable, value) pairs, in order.
    pub fn pairs(&self) -> &[(Variable, bool)] {
        &self.pairs
    }

    /// The values of the assignment, in order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.pairs.iter().map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Valuation for Assignment {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        self.pairs.value_of(variable)
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .pairs
            .iter()
            .map(|(variable, value)| format!("{variable}: {value}"))
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}
