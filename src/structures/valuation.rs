/*!
A (partial) function from variables to truth values.

Formulas are evaluated against a valuation, and anything which can answer the value of a variable may be used as one.
In particular, [assignments](crate::structures::assignment::Assignment) and maps from variables to booleans.

```rust
# use std::collections::HashMap;
# use sat_calc::structures::valuation::Valuation;
let valuation = HashMap::from([('p', true), ('q', false)]);

assert_eq!(valuation.value_of('q'), Some(false));
assert_eq!(valuation.value_of('r'), None);
```

A variable without a value is not an error of the valuation.
Though, [evaluating](crate::procedures::evaluate) a formula which contains such a variable is.
*/

use std::collections::{BTreeMap, HashMap};

use super::variable::Variable;

/// A valuation is something which stores the value of some variables.
pub trait Valuation {
    /// The value of a variable under the valuation, or otherwise nothing.
    fn value_of(&self, variable: Variable) -> Option<bool>;
}

impl<S: std::hash::BuildHasher> Valuation for HashMap<Variable, bool, S> {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        self.get(&variable).copied()
    }
}

impl Valuation for BTreeMap<Variable, bool> {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        self.get(&variable).copied()
    }
}

impl Valuation for [(Variable, bool)] {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        self.iter()
            .find(|(v, _)| *v == variable)
            .map(|(_, value)| *value)
    }
}

impl<V: Valuation + ?Sized> Valuation for &V {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        (**self).value_of(variable)
    }
}
