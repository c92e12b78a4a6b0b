//! Error types used in the library.
//!
//! - Lex, syntax, and undefined variable errors are the errors of the engine, and each is terminal for the call which returned it.
//! - Variable errors are found when a list of variables is declared, before any formula is examined.
//! - Termination is requested by the caller through a [callback](crate::context::Context::set_callback_terminate).
//!
//! Names of the error enums overlap with the stage of the engine they are returned from.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::variable::Variable;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lex(LexError),
    Syntax(SyntaxError),
    Variable(VariableError),

    /// A formula refers to a variable without a value in the valuation used.
    UndefinedVariable(Variable),

    /// The termination callback requested the procedure stop.
    Terminated,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Variable(e) => write!(f, "{e}"),
            Self::UndefinedVariable(variable) => write!(f, "Undefined variable: '{variable}'"),
            Self::Terminated => write!(f, "Terminated by callback"),
        }
    }
}

/// Errors during tokenization.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LexError {
    /// A character which is neither whitespace nor the start of some token.
    UnrecognisedCharacter { character: char, offset: usize },
}

impl From<LexError> for ErrorKind {
    fn from(e: LexError) -> Self {
        ErrorKind::Lex(e)
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognisedCharacter { character, offset } => {
                write!(f, "Unrecognised character '{character}' at {offset}")
            }
        }
    }
}

/// Errors from a malformed formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// A parenthesised expression was not closed.
    /// The offset is that of the opening parenthesis.
    MissingClosingParenthesis { offset: usize },

    /// Some token was found where a variable or opening parenthesis was required.
    UnexpectedToken { literal: String, offset: usize },

    /// The tokens ran out where a variable or opening parenthesis was required.
    UnexpectedEnd,

    /// A complete formula was read, though some tokens remain.
    /// The offset is that of the first remaining token.
    TrailingTokens { offset: usize },
}

impl From<SyntaxError> for ErrorKind {
    fn from(e: SyntaxError) -> Self {
        ErrorKind::Syntax(e)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingClosingParenthesis { offset } => {
                write!(f, "Missing closing parenthesis for '(' at {offset}")
            }
            Self::UnexpectedToken { literal, offset } => {
                write!(f, "Unexpected token '{literal}' at {offset}")
            }
            Self::UnexpectedEnd => write!(f, "Unexpected end of input"),
            Self::TrailingTokens { offset } => write!(f, "Unexpected trailing tokens at {offset}"),
        }
    }
}

/// Errors in a declared list of variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VariableError {
    /// Variables are single lowercase letters.
    Invalid(String),

    /// The letter `v` is the disjunction symbol.
    Reserved,

    /// A variable was declared more than once.
    Duplicate(Variable),

    /// More variables than the configured limit.
    TooMany { count: usize, limit: usize },
}

impl From<VariableError> for ErrorKind {
    fn from(e: VariableError) -> Self {
        ErrorKind::Variable(e)
    }
}

impl std::fmt::Display for VariableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(name) => {
                write!(f, "Invalid variable \"{name}\", variables are single lowercase letters")
            }
            Self::Reserved => write!(f, "'v' is reserved for disjunction"),
            Self::Duplicate(variable) => write!(f, "Variable '{variable}' is declared twice"),
            Self::TooMany { count, limit } => {
                write!(f, "{count} variables declared, though the limit is {limit}")
            }
        }
    }
}
