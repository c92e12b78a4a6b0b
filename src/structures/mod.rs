//! Key structures, such as tokens, valuations, and truth tables.
//!
//! # Formulas
//!
//! A formula is built from [variables](variable) with the connectives negation (`~`), conjunction (`^`), disjunction (`v`), implication (`->`), and the biconditional (`<->`).
//!
//! For the most part a formula is only ever a [sequence of tokens](token), which is read anew against each [valuation] of interest.
//! Though, a formula may also be read once into a [tree](formula), and the tree evaluated against each valuation.
//!
//! # Truth tables
//!
//! A [truth table](truth_table) pairs each [assignment](assignment) of values to some collection of variables with the value of a formula on the assignment.

pub mod assignment;
pub mod formula;
pub mod token;
pub mod truth_table;
pub mod valuation;
pub mod variable;
