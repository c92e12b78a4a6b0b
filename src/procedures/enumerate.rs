/*!
Enumeration of every assignment to a list of variables.

For *n* variables there are 2<sup>*n*</sup> assignments, and these are enumerated in a fixed order:
- The first variable is true on the first half of the assignments and false on the second half.
- Each following variable alternates twice as fast as the variable before.

So, the last variable alternates on each assignment, beginning with true.

```rust
# use sat_calc::procedures::enumerate::enumerate;
# use sat_calc::structures::variable::Variables;
let variables = Variables::from_names(&["p", "q"], 2).unwrap();
let values = enumerate(&variables)
    .iter()
    .map(|assignment| assignment.values().collect::<Vec<_>>())
    .collect::<Vec<_>>();

assert_eq!(
    values,
    vec![
        vec![true, true],
        vec![true, false],
        vec![false, true],
        vec![false, false]
    ]
);
```

In other words, the *i*th assignment (from zero) is the binary representation of *i* over *n* digits, with the most significant digit for the first variable, and 0 read as true.

For zero variables there is exactly one assignment, the empty assignment.
*/

use crate::{
    misc::log::targets::{self},
    structures::{assignment::Assignment, variable::Variables},
};

/// An iterator over every assignment to some variables, in enumeration order.
pub struct Assignments<'v> {
    variables: &'v Variables,
    row: usize,
    count: usize,
}

impl<'v> Assignments<'v> {
    pub fn new(variables: &'v Variables) -> Self {
        // At most twenty five distinct variables, so no overflow.
        let count = 1_usize << variables.len();
        log::trace!(target: targets::ENUMERATION, "{count} assignments to {variables}");

        Assignments {
            variables,
            row: 0,
            count,
        }
    }
}

impl Iterator for Assignments<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row == self.count {
            return None;
        }

        let width = self.variables.len();
        let pairs = self
            .variables
            .iter()
            .enumerate()
            .map(|(index, variable)| (variable, (self.row >> (width - 1 - index)) & 1 == 0))
            .collect();

        self.row += 1;
        Some(Assignment::from_pairs(pairs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_> {}

/// Every assignment to some variables, in enumeration order.
pub fn enumerate(variables: &Variables) -> Vec<Assignment> {
    Assignments::new(variables).collect()
}
