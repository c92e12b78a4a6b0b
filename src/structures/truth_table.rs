/*!
Truth tables.

A truth table is a sequence of rows, each of which pairs an [assignment](crate::structures::assignment) with the value of some formula on the assignment.
Rows are in the order of the [enumerator](crate::procedures::enumerate), and a table over *n* variables has 2<sup>*n*</sup> rows.

Tables are built by a [context](crate::context::Context) and are complete: if some row could not be evaluated, no table is returned.

The [classification](crate::reports::Classification) of a formula is always derived from a table.
*/

use crate::reports::Classification;

use super::{assignment::Assignment, variable::Variables};

/// An assignment and the value of some formula on the assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub assignment: Assignment,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    variables: Variables,
    rows: Vec<Row>,
}

impl TruthTable {
    pub(crate) fn from_rows(variables: Variables, rows: Vec<Row>) -> Self {
        TruthTable { variables, rows }
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// A count of the rows on which the formula is true.
    pub fn true_count(&self) -> usize {
        self.rows.iter().filter(|row| row.value).count()
    }

    /// The classification of the formula of the table.
    ///
    /// - Unsatisfiable, if no row is true.
    /// - A tautology, if every row is true.
    /// - Otherwise, satisfiable with every true row as a witness, in table order.
    pub fn classification(&self) -> Classification {
        if !self.rows.iter().any(|row| row.value) {
            Classification::Unsatisfiable
        } else if self.rows.iter().all(|row| row.value) {
            Classification::Tautology
        } else {
            let witnesses = self
                .rows
                .iter()
                .filter(|row| row.value)
                .map(|row| row.assignment.clone())
                .collect();
            Classification::Satisfiable(witnesses)
        }
    }
}

impl std::fmt::Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} | value", self.variables)?;
        for row in &self.rows {
            let values = row
                .assignment
                .values()
                .map(|value| if value { "T" } else { "F" })
                .collect::<Vec<_>>();
            let value = if row.value { "T" } else { "F" };
            writeln!(f, "{} | {value}", values.join(" "))?;
        }
        Ok(())
    }
}
