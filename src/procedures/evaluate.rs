/*!
A recursive descent reading of a sequence of tokens.

# Grammar

```text
Expression
  Term
  Expression '->' Term
  Expression '<->' Term
Term
  Primary
  Term '^' Primary
  Term 'v' Primary
Primary
  Secondary
  '~' Secondary
Secondary
  Letter
  '(' Expression ')'
```

So, negation binds tighter than conjunction and disjunction, which bind tighter than implication and the biconditional.
Conjunction and disjunction have equal precedence, as do implication and the biconditional, and each is read left to right.
For example, `p ^ q v r -> s` is read as `((p ^ q) v r) -> s`.

A single negation applies to a secondary, and so `~~p` is malformed while `~(~p)` is not.

# Connectives

The [parser](Parser) is written once, and is parameratised to an interpretation of the [connectives](Connectives).

- Interpreting a letter as its value on some [valuation] and each connective as the corresponding boolean function gives the value of the formula on the valuation, in a single pass over the tokens.
  This is [evaluate].
- Interpreting each connective as a constructor gives a [formula tree](crate::structures::formula::Formula).

Both operands of a connective are always read in full before the connective is applied.
There is no short-circuit, as the tokens of the second operand must be read in any case, and an undefined variable in either operand is an error.

# Trailing tokens

A complete expression may be followed by further tokens, e.g. `p q`.
These are an error by default, and may be ignored by [configuration](crate::config::Config::allow_trailing).
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        token::{Token, TokenKind},
        valuation::Valuation,
        variable::Variable,
    },
    types::err::{ErrorKind, SyntaxError},
};

/// An interpretation of the variables and connectives of a formula.
pub trait Connectives {
    /// The result of interpreting a (sub)formula.
    type Value;

    /// The interpretation of a variable.
    fn variable(&self, variable: Variable) -> Result<Self::Value, ErrorKind>;

    fn not(&self, value: Self::Value) -> Self::Value;

    fn and(&self, left: Self::Value, right: Self::Value) -> Self::Value;

    fn or(&self, left: Self::Value, right: Self::Value) -> Self::Value;

    fn implies(&self, left: Self::Value, right: Self::Value) -> Self::Value;

    fn iff(&self, left: Self::Value, right: Self::Value) -> Self::Value;
}

/// The interpretation of a formula on a valuation.
pub struct Evaluation<'v, V: Valuation + ?Sized> {
    valuation: &'v V,
}

impl<'v, V: Valuation + ?Sized> Evaluation<'v, V> {
    pub fn new(valuation: &'v V) -> Self {
        Evaluation { valuation }
    }
}

impl<V: Valuation + ?Sized> Connectives for Evaluation<'_, V> {
    type Value = bool;

    fn variable(&self, variable: Variable) -> Result<bool, ErrorKind> {
        match self.valuation.value_of(variable) {
            Some(value) => Ok(value),
            None => Err(ErrorKind::UndefinedVariable(variable)),
        }
    }

    fn not(&self, value: bool) -> bool {
        !value
    }

    fn and(&self, left: bool, right: bool) -> bool {
        left && right
    }

    fn or(&self, left: bool, right: bool) -> bool {
        left || right
    }

    fn implies(&self, left: bool, right: bool) -> bool {
        !left || right
    }

    fn iff(&self, left: bool, right: bool) -> bool {
        (!left || right) && (!right || left)
    }
}

/// A parser over some tokens, with a cursor owned by the parser.
///
/// A parser is used for a single reading of the tokens and then dropped.
pub struct Parser<'t, C: Connectives> {
    tokens: &'t [Token],
    position: usize,
    connectives: C,
}

impl<'t, C: Connectives> Parser<'t, C> {
    pub fn new(tokens: &'t [Token], connectives: C) -> Self {
        Parser {
            tokens,
            position: 0,
            connectives,
        }
    }

    /// Reads the tokens as a single expression, with trailing tokens either ignored or an error.
    pub fn parse(
        tokens: &'t [Token],
        connectives: C,
        allow_trailing: bool,
    ) -> Result<C::Value, ErrorKind> {
        let mut parser = Parser::new(tokens, connectives);
        let value = parser.expression()?;

        if let Some(token) = parser.current() {
            match allow_trailing {
                true => {
                    log::debug!(target: targets::EVALUATION, "Ignored tokens from {}", token.offset);
                }
                false => {
                    return Err(ErrorKind::from(SyntaxError::TrailingTokens {
                        offset: token.offset,
                    }));
                }
            }
        }

        Ok(value)
    }

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Advances the cursor if the current token is of the given kind.
    fn take(&mut self, kind: TokenKind) -> bool {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// The kind of the current token, if it is one of the given kinds.
    fn peek_among(&self, kinds: &[TokenKind]) -> Option<TokenKind> {
        self.current()
            .map(|token| token.kind)
            .filter(|kind| kinds.contains(kind))
    }

    /// Expression -> Term | Expression '->' Term | Expression '<->' Term
    pub fn expression(&mut self) -> Result<C::Value, ErrorKind> {
        let mut value = self.term()?;

        while let Some(kind) = self.peek_among(&[TokenKind::Arrow, TokenKind::DoubleArrow]) {
            self.advance();
            let right = self.term()?;
            value = match kind {
                TokenKind::Arrow => self.connectives.implies(value, right),
                _ => self.connectives.iff(value, right),
            };
        }

        Ok(value)
    }

    /// Term -> Primary | Term '^' Primary | Term 'v' Primary
    fn term(&mut self) -> Result<C::Value, ErrorKind> {
        let mut value = self.primary()?;

        while let Some(kind) = self.peek_among(&[TokenKind::And, TokenKind::Or]) {
            self.advance();
            let right = self.primary()?;
            value = match kind {
                TokenKind::And => self.connectives.and(value, right),
                _ => self.connectives.or(value, right),
            };
        }

        Ok(value)
    }

    /// Primary -> Secondary | '~' Secondary
    fn primary(&mut self) -> Result<C::Value, ErrorKind> {
        match self.take(TokenKind::Not) {
            true => {
                let value = self.secondary()?;
                Ok(self.connectives.not(value))
            }
            false => self.secondary(),
        }
    }

    /// Secondary -> Letter | '(' Expression ')'
    fn secondary(&mut self) -> Result<C::Value, ErrorKind> {
        let Some(token) = self.current() else {
            return Err(ErrorKind::from(SyntaxError::UnexpectedEnd));
        };

        match token.kind {
            TokenKind::LParen => {
                self.advance();
                let value = self.expression()?;
                match self.take(TokenKind::RParen) {
                    true => Ok(value),
                    false => Err(ErrorKind::from(SyntaxError::MissingClosingParenthesis {
                        offset: token.offset,
                    })),
                }
            }

            TokenKind::Letter => match token.variable() {
                Some(variable) => {
                    self.advance();
                    self.connectives.variable(variable)
                }
                None => Err(ErrorKind::from(SyntaxError::UnexpectedToken {
                    literal: token.literal.clone(),
                    offset: token.offset,
                })),
            },

            _ => Err(ErrorKind::from(SyntaxError::UnexpectedToken {
                literal: token.literal.clone(),
                offset: token.offset,
            })),
        }
    }
}

/// The value of the formula of some tokens on a valuation.
///
/// Trailing tokens are an error.
/// To ignore trailing tokens, configure a [Context].
///
/// ```rust
/// # use std::collections::HashMap;
/// # use sat_calc::{evaluate, tokenize};
/// let tokens = tokenize("p -> q").unwrap();
/// let valuation = HashMap::from([('p', true), ('q', false)]);
///
/// assert_eq!(evaluate(&tokens, &valuation), Ok(false));
/// ```
pub fn evaluate<V: Valuation + ?Sized>(tokens: &[Token], valuation: &V) -> Result<bool, ErrorKind> {
    Parser::parse(tokens, Evaluation::new(valuation), false)
}

impl Context {
    /// The value of the formula of some tokens on a valuation, by a single reading of the tokens.
    pub fn evaluate<V: Valuation + ?Sized>(
        &self,
        tokens: &[Token],
        valuation: &V,
    ) -> Result<bool, ErrorKind> {
        let value = Parser::parse(
            tokens,
            Evaluation::new(valuation),
            self.config.allow_trailing.value,
        );
        log::trace!(target: targets::EVALUATION, "Evaluated to {value:?}");
        value
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::procedures::tokenize::tokenize;

    fn value_of(formula: &str, pairs: &[(Variable, bool)]) -> Result<bool, ErrorKind> {
        let tokens = tokenize(formula)?;
        evaluate(&tokens, pairs)
    }

    #[test]
    fn connectives() {
        let pq = [('p', true), ('q', false)];

        assert_eq!(value_of("p ^ q", &pq), Ok(false));
        assert_eq!(value_of("p v q", &pq), Ok(true));
        assert_eq!(value_of("~p", &pq), Ok(false));
        assert_eq!(value_of("p -> q", &pq), Ok(false));
        assert_eq!(value_of("q -> p", &pq), Ok(true));
        assert_eq!(value_of("p <-> q", &pq), Ok(false));
        assert_eq!(value_of("q <-> q", &pq), Ok(true));
    }

    #[test]
    fn left_grouping_of_conjunction_and_disjunction() {
        let pqr = [('p', false), ('q', true), ('r', true)];

        assert_eq!(value_of("p ^ q v r", &pqr), Ok(true));
        assert_eq!(value_of("(p ^ q) v r", &pqr), Ok(true));
        assert_eq!(value_of("p ^ (q v r)", &pqr), Ok(false));
    }

    #[test]
    fn left_grouping_of_arrows() {
        // (p -> q) -> r differs from p -> (q -> r) when all are false.
        let pqr = [('p', false), ('q', false), ('r', false)];

        assert_eq!(value_of("p -> q -> r", &pqr), Ok(false));
        assert_eq!(value_of("p -> (q -> r)", &pqr), Ok(true));
    }

    #[test]
    fn arrows_bind_loosest() {
        let pqr = [('p', true), ('q', false), ('r', false)];

        assert_eq!(value_of("p ^ q -> r", &pqr), Ok(true));
        assert_eq!(value_of("p v q <-> r", &pqr), Ok(false));
    }

    #[test]
    fn negation() {
        let p = [('p', true)];

        assert_eq!(value_of("~(~p)", &p), Ok(true));
        assert_eq!(value_of("~(p ^ ~p)", &p), Ok(true));
        assert!(matches!(
            value_of("~~p", &p),
            Err(ErrorKind::Syntax(SyntaxError::UnexpectedToken { offset: 1, .. }))
        ));
    }

    #[test]
    fn undefined_variable() {
        let valuation = HashMap::from([('p', true)]);
        let tokens = tokenize("p ^ q").unwrap();

        assert_eq!(
            evaluate(&tokens, &valuation),
            Err(ErrorKind::UndefinedVariable('q'))
        );
    }

    #[test]
    fn no_short_circuit() {
        let valuation = HashMap::from([('p', false)]);
        let tokens = tokenize("p ^ q").unwrap();

        assert_eq!(
            evaluate(&tokens, &valuation),
            Err(ErrorKind::UndefinedVariable('q'))
        );
    }

    #[test]
    fn missing_parenthesis() {
        let pq = [('p', true), ('q', true)];

        assert_eq!(
            value_of("(p ^ q", &pq),
            Err(ErrorKind::Syntax(SyntaxError::MissingClosingParenthesis {
                offset: 0
            }))
        );
        assert_eq!(
            value_of("p ^ ((q)", &pq),
            Err(ErrorKind::Syntax(SyntaxError::MissingClosingParenthesis {
                offset: 4
            }))
        );
    }

    #[test]
    fn unexpected_tokens() {
        let pq = [('p', true), ('q', true)];

        assert_eq!(value_of("", &pq), Err(ErrorKind::Syntax(SyntaxError::UnexpectedEnd)));
        assert_eq!(value_of("p ^", &pq), Err(ErrorKind::Syntax(SyntaxError::UnexpectedEnd)));
        assert_eq!(
            value_of("^ p", &pq),
            Err(ErrorKind::Syntax(SyntaxError::UnexpectedToken {
                literal: "^".to_string(),
                offset: 0
            }))
        );
        assert_eq!(
            value_of("p -> )", &pq),
            Err(ErrorKind::Syntax(SyntaxError::UnexpectedToken {
                literal: ")".to_string(),
                offset: 5
            }))
        );
    }

    #[test]
    fn trailing_tokens() {
        let pq = [('p', true), ('q', false)];
        let tokens = tokenize("p q").unwrap();

        assert_eq!(
            evaluate(&tokens, &pq[..]),
            Err(ErrorKind::Syntax(SyntaxError::TrailingTokens { offset: 2 }))
        );
        assert_eq!(Parser::parse(&tokens, Evaluation::new(&pq[..]), true), Ok(true));

        let tokens = tokenize("p)").unwrap();
        assert_eq!(
            evaluate(&tokens, &pq[..]),
            Err(ErrorKind::Syntax(SyntaxError::TrailingTokens { offset: 1 }))
        );
    }

    #[test]
    fn configured_trailing_tokens() {
        let pq = [('p', true), ('q', false)];
        let tokens = tokenize("p q").unwrap();

        let ctx = Context::default();
        assert_eq!(
            ctx.evaluate(&tokens, &pq[..]),
            Err(ErrorKind::Syntax(SyntaxError::TrailingTokens { offset: 2 }))
        );

        let mut ctx = Context::default();
        ctx.config.allow_trailing.value = true;
        assert_eq!(ctx.evaluate(&tokens, &pq[..]), Ok(true));
    }

    #[test]
    fn idempotent() {
        let tokens = tokenize("(p v ~q) -> (q <-> p)").unwrap();
        let copy = tokens.clone();
        let pq = [('p', false), ('q', true)];

        let first = evaluate(&tokens, &pq[..]);
        let second = evaluate(&tokens, &pq[..]);

        assert_eq!(first, second);
        assert_eq!(tokens, copy);
    }
}
