//! # Symbolic Engine Module
//!
//! The abstract syntax tree every text expression of the calculator is parsed into.
//!
//! ## Purpose
//!
//! The engine only has to represent functions of the single variable `x` built from
//! - **Variables**: `Var(String)` - in practice always `"x"`
//! - **Constants**: `Const(f64)` - numerical constants, including `pi` and `e`
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, `tg`, `sqrt` - the closed set of unary functions
//!
//! Parsing lives in [`crate::symbolic::parse_expr`], conversion of the tree into a
//! regular Rust closure lives in [`crate::symbolic::symbolic_lambdify`].
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses `Box<Expr>` for nested expressions
//! 2. **Operator Overloading**: `std::ops` traits so trees can be written as `x.clone() * x`
//! 3. **Non-standard Function Names**: keeps the mathematical notation `tg` for tangent
//!    and `Ln` for the natural logarithm that the user types as `log`

#![allow(non_camel_case_types)]

use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Core symbolic expression enum representing a function of one variable as an abstract syntax tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedCurveArea::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm, typed by the user as `log(x)`
    Ln(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function: tan(x) - uses mathematical notation 'tg'
    tg(Box<Expr>),
    /// Square root: sqrt(x)
    sqrt(Box<Expr>),
}

/// The closed set of named unary functions a user may type.
///
/// The normalizer builds its function-call rule from this list and the parser
/// resolves identifiers through `FromStr`, so both always agree on the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
    Exp,
}

impl UnaryFunction {
    /// wraps `arg` into the matching `Expr` node
    pub fn apply(self, arg: Expr) -> Expr {
        let arg = arg.boxed();
        match self {
            UnaryFunction::Sin => Expr::sin(arg),
            UnaryFunction::Cos => Expr::cos(arg),
            UnaryFunction::Tan => Expr::tg(arg),
            UnaryFunction::Log => Expr::Ln(arg),
            UnaryFunction::Sqrt => Expr::sqrt(arg),
            UnaryFunction::Exp => Expr::Exp(arg),
        }
    }
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Every binary node is wrapped in parentheses so the printed form is unambiguous.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::sqrt(expr) => write!(f, "sqrt({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), self.boxed())
    }
}

impl Expr {
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// New Expr::Pow with self as base and rhs as exponent
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }
}
