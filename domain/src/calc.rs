//! Restricted arithmetic grammar for the calculator tool.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-' unary | '+' unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Anything outside this grammar is rejected. There is no general-purpose
//! evaluator behind it.

use thiserror::Error;

/// Errors produced while evaluating an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token after expression")]
    TrailingInput,

    #[error("missing closing parenthesis")]
    UnbalancedParen,

    #[error("division by zero")]
    DivisionByZero,

    #[error("expression nested too deeply")]
    TooDeep,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn lex(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let n = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(n));
            }
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            other => return Err(CalcError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

/// Deepest nesting of parentheses and unary signs accepted.
pub const MAX_DEPTH: usize = 64;

/// Evaluate an arithmetic expression.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = lex(input)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(CalcError::TrailingInput);
    }
    Ok(value)
}

/// Render a result the way the calculator reports it: integral values
/// without a decimal point, everything else in shortest form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn descend(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut left = self.term()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Plus => {
                    self.pos += 1;
                    left += self.term()?;
                }
                Token::Minus => {
                    self.pos += 1;
                    left -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut left = self.unary()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Star => {
                    self.pos += 1;
                    left *= self.unary()?;
                }
                Token::Slash => {
                    self.pos += 1;
                    let right = self.unary()?;
                    if right == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    left /= right;
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                self.descend()?;
                let value = -self.unary()?;
                self.depth -= 1;
                Ok(value)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(value)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Number(n)) => {
                let n = *n;
                self.pos += 1;
                Ok(n)
            }
            Some(Token::LParen) => {
                self.pos += 1;
                self.descend()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    _ => Err(CalcError::UnbalancedParen),
                }
            }
            Some(_) => Err(CalcError::TrailingInput),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(evaluate("12*4").unwrap(), 48.0);
    }

    #[test]
    fn test_unary_and_decimals() {
        assert_eq!(evaluate("-5 + 2").unwrap(), -3.0);
        assert_eq!(evaluate("-(2 * 3)").unwrap(), -6.0);
        assert_eq!(evaluate("1.5 * 2").unwrap(), 3.0);
        assert_eq!(evaluate("7 / 2").unwrap(), 3.5);
    }

    #[test]
    fn test_rejects_outside_grammar() {
        assert_eq!(evaluate(""), Err(CalcError::Empty));
        assert_eq!(evaluate("   "), Err(CalcError::Empty));
        assert_eq!(evaluate("2 ** 3"), Err(CalcError::TrailingInput));
        assert_eq!(evaluate("__import__"), Err(CalcError::UnexpectedChar('_')));
        assert_eq!(evaluate("2 +"), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate("(2 + 3"), Err(CalcError::UnbalancedParen));
        assert_eq!(evaluate("2 3"), Err(CalcError::TrailingInput));
        assert!(matches!(evaluate("1.2.3"), Err(CalcError::InvalidNumber(_))));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1 / 0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("5 / (2 - 2)"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(48.0), "48");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let parens = format!("{}1+1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(evaluate(&parens), Err(CalcError::TooDeep));

        let signs = format!("{}1", "-".repeat(200_000));
        assert_eq!(evaluate(&signs), Err(CalcError::TooDeep));

        let nested = format!("{}2*3{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(evaluate(&nested).unwrap(), 6.0);
        assert_eq!(evaluate("--5").unwrap(), 5.0);
    }
}
