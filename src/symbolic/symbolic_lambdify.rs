//! Turns a symbolic expression into a regular Rust closure of one variable.
//!
//! Evaluation never fails: a malformed expression compiles into a function that
//! always returns NaN, and a domain error at one point (`log(-1)`, `sqrt(-1)`,
//! `1/0`) yields a non-finite value for that point only. Callers treat any
//! non-finite value as "undefined at this point".
use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;
use log::warn;

/// A compiled real function of one variable
pub type Function1D = Box<dyn Fn(f64) -> f64 + Send + Sync>;

impl Expr {
    /// Compiles the tree into nested closures.
    ///
    /// Any variable other than `x` evaluates to NaN, there is nothing to bind it to.
    pub fn lambdify1D(&self) -> Function1D {
        match self {
            Expr::Var(name) if name == "x" => Box::new(|x| x),
            Expr::Var(_) => Box::new(|_| f64::NAN),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).tan())
            }
            Expr::sqrt(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sqrt())
            }
        } // end of match
    } // end of lambdify1D
}

/// Parses and compiles a normalized expression, reporting the parse error.
pub fn try_compile_function(expr: &str) -> Result<Function1D, ParseError> {
    let parsed = Expr::parse_expression(expr)?;
    Ok(parsed.lambdify1D())
}

/// Parses and compiles a normalized expression.
///
/// An unparseable expression yields a function returning NaN everywhere.
pub fn compile_function(expr: &str) -> Function1D {
    match try_compile_function(expr) {
        Ok(function) => function,
        Err(err) => {
            warn!("cannot compile '{}': {}", expr, err);
            Box::new(|_| f64::NAN)
        }
    }
}
