/*!
Tokens, as read from the string representation of a formula.

A token is a pair of a [kind](TokenKind) and the literal text matched, together with the (byte) offset at which the text was found.
The offset is used only when reporting errors.

Whitespace separates tokens, but is never a token.
And, for any input which [tokenizes](crate::procedures::tokenize) the concatenation of the literals of each token, in order, is the input with whitespace removed.
*/

use super::variable::Variable;

/// The kinds of token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `->`
    Arrow,

    /// `<->`
    DoubleArrow,

    /// `^`
    And,

    /// `v`
    Or,

    /// `~`
    Not,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// A single lowercase letter, other than `v`.
    Letter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: &str, offset: usize) -> Self {
        Token {
            kind,
            literal: literal.to_string(),
            offset,
        }
    }

    /// The variable of a letter token, and otherwise nothing.
    pub fn variable(&self) -> Option<Variable> {
        match self.kind {
            TokenKind::Letter => self.literal.chars().next(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}
