//! A library for determining whether a propositional formula is satisfiable, unsatisfiable, or a tautology.
//!
//! sat_calc reads a formula of propositional logic over some declared variables, evaluates the formula on every assignment of values to the variables, and from the resulting truth table classifies the formula.
//! If the formula is satisfiable but not a tautology, the assignments on which the formula is true are returned as witnesses.
//!
//! As every assignment is examined, the library is intended for formulas with few variables.
//! For more, see a [SAT solver](https://en.wikipedia.org/wiki/SAT_solver).
//!
//! # Orientation
//!
//! The library is made of four procedures:
//! - A [lexer](crate::procedures::tokenize), from a string to a sequence of [tokens](crate::structures::token).
//! - A recursive descent [evaluator](crate::procedures::evaluate), from a sequence of tokens and a [valuation](crate::structures::valuation) to a boolean.
//! - An [enumerator](crate::procedures::enumerate), from a list of [variables](crate::structures::variable) to every [assignment](crate::structures::assignment) of values to the variables.
//! - A [classifier](crate::procedures::classify), which uses the others to build a [truth table](crate::structures::truth_table) and derive a [classification](crate::reports::Classification).
//!
//! Each procedure is available with the default configuration through [tokenize], [evaluate], and [classify].
//! Otherwise, a [context] is built from a [configuration](crate::config).
//!
//! # Formulas
//!
//! | Connective    | Symbol |
//! |---------------|--------|
//! | Negation      | `~`    |
//! | Conjunction   | `^`    |
//! | Disjunction   | `v`    |
//! | Implication   | `->`   |
//! | Biconditional | `<->`  |
//!
//! Variables are single lowercase letters, other than `v`, and formulas may be grouped with parentheses.
//! For details on precedence, see [the grammar](crate::procedures::evaluate#grammar).
//!
//! # Examples
//!
//! + Classify a formula.
//!
//! ```rust
//! # use sat_calc::classify;
//! # use sat_calc::reports::Classification;
//! let formula = "(p v ~q) ^ (q v ~r) ^ (r v ~p) ^ (p v q v r) ^ (~p v ~q v ~r)";
//! assert_eq!(classify(formula, &["p", "q", "r"]), Ok(Classification::Unsatisfiable));
//! ```
//!
//! + Evaluate a formula on a single valuation.
//!
//! ```rust
//! # use std::collections::HashMap;
//! # use sat_calc::{evaluate, tokenize};
//! let tokens = tokenize("~p -> (q <-> p)").unwrap();
//! let valuation = HashMap::from([('p', false), ('q', false)]);
//! assert_eq!(evaluate(&tokens, &valuation), Ok(true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets, listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of each row of a truth table can be found with `RUST_LOG=classification=trace …`
//! - Logs related to tokenization can be filtered with `RUST_LOG=lexer …`

pub mod config;
pub mod context;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

pub mod misc;

pub use procedures::{classify::classify, evaluate::evaluate, tokenize::tokenize};
