/*!
Tokenization of the string representation of a formula.

Tokens are read left to right.
At each position whitespace is skipped, and otherwise the first [pattern](TOKEN_PATTERNS) which matches the remaining input is taken, with single lowercase letters tried last.

As patterns are tried in order:
- `<->` is tried before `->`, though as the two begin with different characters this is only a matter of form.
- `v` is tried before letters, and so is always read as disjunction.

Any other character is an error, and no tokens are returned.

```rust
# use sat_calc::tokenize;
# use sat_calc::structures::token::TokenKind;
let tokens = tokenize("p<->~q").unwrap();
let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

use TokenKind::*;
assert_eq!(kinds, vec![Letter, DoubleArrow, Not, Letter]);
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::token::{Token, TokenKind},
    types::err::{ErrorKind, LexError},
};

/// Patterns of each token other than a letter, in the order tried.
pub static TOKEN_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::DoubleArrow, "<->"),
    (TokenKind::Arrow, "->"),
    (TokenKind::And, "^"),
    (TokenKind::Or, "v"),
    (TokenKind::Not, "~"),
    (TokenKind::LParen, "("),
    (TokenKind::RParen, ")"),
];

/// The tokens of a formula.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ErrorKind> {
    let mut tokens = Vec::default();
    let mut offset = 0;

    'token_loop: while let Some(character) = input[offset..].chars().next() {
        if character.is_whitespace() {
            offset += character.len_utf8();
            continue 'token_loop;
        }

        let remaining = &input[offset..];
        for (kind, pattern) in TOKEN_PATTERNS {
            if remaining.starts_with(pattern) {
                tokens.push(Token::new(*kind, pattern, offset));
                offset += pattern.len();
                continue 'token_loop;
            }
        }

        if character.is_ascii_lowercase() {
            tokens.push(Token::new(TokenKind::Letter, &remaining[..1], offset));
            offset += 1;
            continue 'token_loop;
        }

        log::debug!(target: targets::LEXER, "Unrecognised '{character}' at {offset}");
        return Err(ErrorKind::from(LexError::UnrecognisedCharacter { character, offset }));
    }

    log::trace!(target: targets::LEXER, "Read {} tokens from \"{input}\"", tokens.len());
    Ok(tokens)
}

impl Context {
    /// The tokens of a formula, see [tokenize].
    pub fn tokenize(&self, formula: &str) -> Result<Vec<Token>, ErrorKind> {
        tokenize(formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn each_kind() {
        use TokenKind::*;

        assert_eq!(
            kinds("-> <-> ^ v ~ ( ) p"),
            vec![Arrow, DoubleArrow, And, Or, Not, LParen, RParen, Letter]
        );
    }

    #[test]
    fn multi_character_operators_without_whitespace() {
        use TokenKind::*;

        assert_eq!(kinds("p<->q->r"), vec![Letter, DoubleArrow, Letter, Arrow, Letter]);
        assert_eq!(kinds("~(pvq)"), vec![Not, LParen, Letter, Or, Letter, RParen]);
    }

    #[test]
    fn v_is_disjunction() {
        let tokens = tokenize("vvv").unwrap();
        assert!(tokens.iter().all(|token| token.kind == TokenKind::Or));
    }

    #[test]
    fn literals_reconstruct_input() {
        let input = " (p v ~q)\t^ (q  v ~r)\n^ (r v ~p) -> s <-> t ";
        let literals = tokenize(input)
            .unwrap()
            .iter()
            .map(|token| token.literal.as_str())
            .collect::<String>();
        let stripped = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        assert_eq!(literals, stripped);
    }

    #[test]
    fn offsets() {
        let tokens = tokenize("p  <-> q").unwrap();
        let offsets = tokens.iter().map(|token| token.offset).collect::<Vec<_>>();
        assert_eq!(offsets, vec![0, 3, 7]);
    }

    #[test]
    fn empty() {
        assert_eq!(tokenize(""), Ok(vec![]));
        assert_eq!(tokenize(" \t\n"), Ok(vec![]));
    }

    #[test]
    fn unrecognised() {
        assert_eq!(
            tokenize("p & q"),
            Err(ErrorKind::Lex(LexError::UnrecognisedCharacter {
                character: '&',
                offset: 2
            }))
        );
        assert_eq!(
            tokenize("P"),
            Err(ErrorKind::Lex(LexError::UnrecognisedCharacter {
                character: 'P',
                offset: 0
            }))
        );
        // A partial arrow.
        assert_eq!(
            tokenize("p <- q"),
            Err(ErrorKind::Lex(LexError::UnrecognisedCharacter {
                character: '<',
                offset: 2
            }))
        );
        assert_eq!(
            tokenize("p - q"),
            Err(ErrorKind::Lex(LexError::UnrecognisedCharacter {
                character: '-',
                offset: 2
            }))
        );
    }
}
