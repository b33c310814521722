//! turns a normalized String expression into a symbolic expression
//!# Example
//! ```
//! use RustedCurveArea::symbolic::symbolic_engine::Expr;
//! let input = "x^2-2*x";
//! let parsed_expression = Expr::parse_expression(input).unwrap();
//! println!(" parsed_expression {}", parsed_expression);
//! let parsed_function = parsed_expression.lambdify1D();
//! assert_eq!(parsed_function(4.0), 8.0);
//! ```
use crate::symbolic::symbolic_engine::{Expr, UnaryFunction};
use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

// grammar, lowest precedence first:
//   expr    = term  { (+|-) term }
//   term    = unary { (*|/|implicit) unary }
//   unary   = (-|+) unary | power
//   power   = primary [ ^ unary ]
//   primary = number | x | pi | e | name ( expr ) | ( expr )
// `-x^2` is -(x^2) and `2^3^2` is 2^(3^2).

/// Deepest tree the parser builds. Brackets, unary signs, exponents and every
/// operator in a chain each count one level.
pub const MAX_DEPTH: usize = 256;

/// Error types of the expression parser
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyInput,
    UnexpectedChar { ch: char, pos: usize },
    UnexpectedToken { found: String, pos: usize },
    UnexpectedEnd,
    UnknownIdentifier(String),
    UnbalancedBrackets,
    InvalidNumber(String),
    TooDeep,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty expression"),
            ParseError::UnexpectedChar { ch, pos } => {
                write!(f, "Unexpected character '{}' at position {}", ch, pos)
            }
            ParseError::UnexpectedToken { found, pos } => {
                write!(f, "Unexpected '{}' at position {}", found, pos)
            }
            ParseError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            ParseError::UnknownIdentifier(name) => write!(f, "Unknown identifier: {}", name),
            ParseError::UnbalancedBrackets => write!(f, "Unbalanced brackets"),
            ParseError::InvalidNumber(text) => write!(f, "Invalid number: {}", text),
            ParseError::TooDeep => write!(f, "Expression nested deeper than {} levels", MAX_DEPTH),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(val) => write!(f, "{}", val),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// splits the input into tokens, each paired with its character position
fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                let mut seen_dot = false;
                while i < chars.len()
                    && (chars[i].is_ascii_digit() || (chars[i] == '.' && !seen_dot))
                {
                    seen_dot |= chars[i] == '.';
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(text.clone()))?;
                tokens.push((start, Token::Number(value)));
                continue;
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                tokens.push((start, Token::Ident(name)));
                continue;
            }
            other => return Err(ParseError::UnexpectedChar { ch: other, pos: i }),
        };
        tokens.push((i, token));
        i += 1;
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [(usize, Token)],
    pos: usize,
    variable: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, token)| token)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }
        Ok(())
    }

    fn unexpected(&self) -> ParseError {
        match self.tokens.get(self.pos) {
            Some((pos, token)) => ParseError::UnexpectedToken {
                found: token.to_string(),
                pos: *pos,
            },
            None => ParseError::UnexpectedEnd,
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let entry = self.depth;
        let mut left = self.parse_term()?;
        while let Some(token) = self.current() {
            match token {
                Token::Plus => {
                    self.advance();
                    self.descend()?;
                    left = left + self.parse_term()?;
                }
                Token::Minus => {
                    self.advance();
                    self.descend()?;
                    left = left - self.parse_term()?;
                }
                _ => break,
            }
        }
        self.depth = entry;
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let entry = self.depth;
        let mut left = self.parse_unary()?;
        while let Some(token) = self.current() {
            match token {
                Token::Star => {
                    self.advance();
                    self.descend()?;
                    left = left * self.parse_unary()?;
                }
                Token::Slash => {
                    self.advance();
                    self.descend()?;
                    left = left / self.parse_unary()?;
                }
                // implicit multiplication: 2 pi, x(x+1), (x)2
                Token::Number(_) | Token::Ident(_) | Token::LeftParen => {
                    self.descend()?;
                    left = left * self.parse_unary()?;
                }
                _ => break,
            }
        }
        self.depth = entry;
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.current() {
            Some(Token::Minus) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.depth -= 1;
                match inner {
                    Expr::Const(val) => Ok(Expr::Const(-val)),
                    inner => Ok(-inner),
                }
            }
            Some(Token::Plus) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;
        if let Some(Token::Caret) = self.current() {
            self.advance();
            self.descend()?;
            let exponent = self.parse_unary()?;
            self.depth -= 1;
            return Ok(base.pow(exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().cloned().ok_or(ParseError::UnexpectedEnd)?;
        match token {
            Token::Number(val) => {
                self.advance();
                Ok(Expr::Const(val))
            }
            Token::LeftParen => {
                self.advance();
                self.descend()?;
                let inner = self.parse_expr()?;
                self.expect_closing()?;
                self.depth -= 1;
                Ok(inner)
            }
            Token::Ident(name) => {
                self.advance();
                if name == self.variable {
                    return Ok(Expr::Var(name));
                }
                match name.as_str() {
                    "pi" => return Ok(Expr::Const(PI)),
                    "e" => return Ok(Expr::Const(E)),
                    _ => {}
                }
                let function = UnaryFunction::from_str(&name)
                    .map_err(|_| ParseError::UnknownIdentifier(name.clone()))?;
                match self.current() {
                    Some(Token::LeftParen) => {
                        self.advance();
                        self.descend()?;
                        let arg = self.parse_expr()?;
                        self.expect_closing()?;
                        self.depth -= 1;
                        Ok(function.apply(arg))
                    }
                    _ => Err(self.unexpected()),
                }
            }
            Token::RightParen => Err(ParseError::UnbalancedBrackets),
            _ => Err(self.unexpected()),
        }
    }

    fn expect_closing(&mut self) -> Result<(), ParseError> {
        match self.current() {
            Some(Token::RightParen) => {
                self.advance();
                Ok(())
            }
            None => Err(ParseError::UnbalancedBrackets),
            Some(_) => Err(self.unexpected()),
        }
    }
}

/// Parses `input` as a function of `variable`.
pub fn parse_expression_func(input: &str, variable: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        variable,
        depth: 0,
    };
    let expr = parser.parse_expr()?;
    match parser.current() {
        None => Ok(expr),
        Some(Token::RightParen) => Err(ParseError::UnbalancedBrackets),
        Some(_) => Err(parser.unexpected()),
    }
}

impl Expr {
    /// Parses a (normalized) expression of the variable `x`.
    pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
        parse_expression_func(input, "x")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Box<Expr> {
        Box::new(Expr::Var("x".to_string()))
    }

    #[test]
    fn test_parse_constant() {
        let expr = Expr::parse_expression("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
        let expr = Expr::parse_expression(".5").unwrap();
        assert_eq!(expr, Expr::Const(0.5));
    }

    #[test]
    fn test_parse_variable() {
        let expr = Expr::parse_expression("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = Expr::parse_expression("x + 2").unwrap();
        assert_eq!(expr, Expr::Add(x(), Box::new(Expr::Const(2.0))));
    }

    #[test]
    fn test_left_associative_subtraction() {
        let result = Expr::parse_expression("x^2 - x - 1").unwrap();
        let to_check = Expr::Pow(x(), Box::new(Expr::Const(2.0))) - *x() - Expr::Const(1.0);
        assert_eq!(result, to_check);
    }

    #[test]
    fn test_precedence() {
        let expr = Expr::parse_expression("1+2*x^2").unwrap();
        let expected = Expr::Const(1.0)
            + Expr::Const(2.0) * Expr::Pow(x(), Box::new(Expr::Const(2.0)));
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = Expr::parse_expression("2^3^2").unwrap();
        let expected = Expr::Const(2.0).pow(Expr::Const(3.0).pow(Expr::Const(2.0)));
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_unary_minus_binds_looser_than_power() {
        let expr = Expr::parse_expression("-x^2").unwrap();
        assert_eq!(expr, -Expr::Pow(x(), Box::new(Expr::Const(2.0))));
        let expr = Expr::parse_expression("2^-1").unwrap();
        assert_eq!(expr, Expr::Const(2.0).pow(Expr::Const(-1.0)));
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(Expr::parse_expression("log(x)").unwrap(), Expr::Ln(x()));
        assert_eq!(Expr::parse_expression("tan(x)").unwrap(), Expr::tg(x()));
        assert_eq!(Expr::parse_expression("sqrt(x)").unwrap(), Expr::sqrt(x()));
        assert_eq!(
            Expr::parse_expression("sin(cos(x))").unwrap(),
            Expr::sin(Box::new(Expr::cos(x())))
        );
    }

    #[test]
    fn test_parse_constants_pi_and_e() {
        assert_eq!(Expr::parse_expression("pi").unwrap(), Expr::Const(PI));
        assert_eq!(
            Expr::parse_expression("exp(e)").unwrap(),
            Expr::Exp(Box::new(Expr::Const(E)))
        );
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(
            Expr::parse_expression("2x").unwrap(),
            Expr::Const(2.0) * *x()
        );
        assert_eq!(
            Expr::parse_expression("2sin(x)").unwrap(),
            Expr::Const(2.0) * Expr::sin(x())
        );
    }

    #[test]
    fn test_invalid_expressions() {
        assert_eq!(Expr::parse_expression(""), Err(ParseError::EmptyInput));
        assert_eq!(Expr::parse_expression("   "), Err(ParseError::EmptyInput));
        assert_eq!(Expr::parse_expression("(x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(
            Expr::parse_expression("(x + 1"),
            Err(ParseError::UnbalancedBrackets)
        );
        assert_eq!(
            Expr::parse_expression("x + 1)"),
            Err(ParseError::UnbalancedBrackets)
        );
        assert_eq!(
            Expr::parse_expression("x + y"),
            Err(ParseError::UnknownIdentifier("y".to_string()))
        );
        assert_eq!(
            Expr::parse_expression("x $ 2"),
            Err(ParseError::UnexpectedChar { ch: '$', pos: 2 })
        );
        assert!(matches!(
            Expr::parse_expression("x*/2"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            Expr::parse_expression("sin x"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert_eq!(
            Expr::parse_expression("."),
            Err(ParseError::InvalidNumber(".".to_string()))
        );
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |n: usize| format!("{}x{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(
            Expr::parse_expression(&nested(100)).unwrap(),
            Expr::Var("x".to_string())
        );
        assert_eq!(Expr::parse_expression(&nested(1000)), Err(ParseError::TooDeep));
        assert_eq!(
            Expr::parse_expression(&"(".repeat(100_000)),
            Err(ParseError::TooDeep)
        );
        assert_eq!(
            Expr::parse_expression(&format!("{}x", "-".repeat(50_000))),
            Err(ParseError::TooDeep)
        );
        assert_eq!(
            Expr::parse_expression(&format!("2{}", "^2".repeat(5_000))),
            Err(ParseError::TooDeep)
        );
        assert_eq!(
            Expr::parse_expression(&vec!["x"; 10_000].join("+")),
            Err(ParseError::TooDeep)
        );
        assert!(Expr::parse_expression(&vec!["x"; 100].join("+")).is_ok());
    }

    #[test]
    fn test_other_variable_name() {
        let expr = parse_expression_func("t^2", "t").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(Box::new(Expr::Var("t".to_string())), Box::new(Expr::Const(2.0)))
        );
        assert!(parse_expression_func("x", "t").is_err());
    }
}
