/*!
Classification of a formula by truth table.

A formula is tokenized once, and evaluated on each [assignment](crate::procedures::enumerate) to the variables in turn.
The resulting [truth table](crate::structures::truth_table::TruthTable) is complete, and the [classification](crate::reports::Classification) is derived from the table:
- If no row is true, the formula is unsatisfiable.
- If every row is true, the formula is a tautology.
- Otherwise, the formula is satisfiable, and the witnesses are the true rows, in table order.

The formula is tokenized before the variable names are validated, and so a formula with an unrecognised character is a lexing error whatever the names.
Any error while building the table (an undefined variable, a malformed formula, etc.) is returned in place of the table, and so partial tables are never classified.

How the formula is evaluated on each row is determined by the configured [strategy](crate::config::Strategy):
- [Reparse](crate::config::Strategy::Reparse) reads the tokens anew for each row.
- [Tree](crate::config::Strategy::Tree) reads the tokens once, and evaluates the resulting tree for each row.

The two strategies give the same table on any formula whose variables are declared.
Though, the errors may differ on a formula which is both malformed and contains an undeclared variable, as reading to a tree finds the malformation before any evaluation.

```rust
# use sat_calc::classify;
# use sat_calc::reports::Classification;
let classification = classify("(p v ~q) ^ (q v ~r) ^ (r v ~p)", &["p", "q", "r"]).unwrap();

assert_eq!(classification.witnesses().len(), 2);
assert_eq!(format!("{}", classification.witnesses()[0]), "{p: true, q: true, r: true}");
assert_eq!(format!("{}", classification.witnesses()[1]), "{p: false, q: false, r: false}");
```
*/

use crate::{
    config::{Config, Strategy},
    context::Context,
    misc::log::targets::{self},
    procedures::{
        enumerate::Assignments,
        evaluate::{Evaluation, Parser},
    },
    reports::Classification,
    structures::{
        assignment::Assignment,
        token::Token,
        truth_table::{Row, TruthTable},
        variable::Variables,
    },
    types::err::ErrorKind,
};

impl Context {
    /// The truth table of a formula over the given variable names.
    pub fn truth_table<S: AsRef<str>>(
        &mut self,
        formula: &str,
        names: &[S],
    ) -> Result<TruthTable, ErrorKind> {
        let tokens = self.tokenize(formula)?;
        let variables = self.variables(names)?;
        self.truth_table_of(&tokens, &variables)
    }

    /// The truth table of the formula of some tokens over some variables.
    pub fn truth_table_of(
        &mut self,
        tokens: &[Token],
        variables: &Variables,
    ) -> Result<TruthTable, ErrorKind> {
        let allow_trailing = self.config.allow_trailing.value;

        let table = match self.config.strategy.value {
            Strategy::Reparse => self.tabulate(variables, |assignment| {
                Parser::parse(tokens, Evaluation::new(assignment), allow_trailing)
            })?,

            Strategy::Tree => {
                let formula = self.formula(tokens)?;
                log::trace!(target: targets::CLASSIFICATION, "Tree: {formula}");
                self.tabulate(variables, |assignment| formula.evaluate(assignment))?
            }
        };

        let (true_count, row_count) = (table.true_count(), table.rows().len());
        log::info!(target: targets::CLASSIFICATION, "{true_count} of {row_count} rows true");
        Ok(table)
    }

    /// The classification of a formula over the given variable names.
    pub fn classify<S: AsRef<str>>(
        &mut self,
        formula: &str,
        names: &[S],
    ) -> Result<Classification, ErrorKind> {
        let table = self.truth_table(formula, names)?;
        let classification = table.classification();
        log::info!(target: targets::CLASSIFICATION, "\"{formula}\" is {classification}");
        Ok(classification)
    }

    /// Evaluates each assignment to the variables in turn, checking the termination callback before each.
    fn tabulate<F>(
        &mut self,
        variables: &Variables,
        mut evaluate: F,
    ) -> Result<TruthTable, ErrorKind>
    where
        F: FnMut(&Assignment) -> Result<bool, ErrorKind>,
    {
        let assignments = Assignments::new(variables);
        let mut rows = Vec::with_capacity(assignments.len());

        for assignment in assignments {
            if self.check_callback_terminate() {
                log::info!(target: targets::CLASSIFICATION, "Terminated after {} rows", rows.len());
                return Err(ErrorKind::Terminated);
            }

            let value = evaluate(&assignment)?;
            log::trace!(target: targets::CLASSIFICATION, "{assignment} → {value}");
            rows.push(Row { assignment, value });
        }

        Ok(TruthTable::from_rows(variables.clone(), rows))
    }
}

/// The classification of a formula over the given variable names, with the default configuration.
pub fn classify<S: AsRef<str>>(formula: &str, names: &[S]) -> Result<Classification, ErrorKind> {
    Context::from_config(Config::default()).classify(formula, names)
}
