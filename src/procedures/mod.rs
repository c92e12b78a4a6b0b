/*!
The procedures of the engine.

- [tokenize] reads a formula to a sequence of tokens.
- [evaluate] reads a sequence of tokens against a valuation, to the value of the formula on the valuation.
- [enumerate] generates every assignment to some variables.
- [classify] evaluates a formula on every assignment, and classifies the formula.

Each is available as a free function using the default configuration, and (other than enumeration) as a method on a [context](crate::context::Context).
*/

pub mod classify;
pub mod enumerate;
pub mod evaluate;
pub mod tokenize;
