#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// rewrites the shorthand a user types into text the parser accepts
///
///# Example
/// ```
/// use RustedCurveArea::symbolic::normalize::normalize_expression;
/// assert_eq!(normalize_expression("x^2 - 2x"), "x^2-2*x");
/// assert_eq!(normalize_expression("3(x+1)(x-1)"), "3*(x+1)*(x-1)");
/// assert_eq!(normalize_expression("sinx"), "sin(x)");
/// ```
pub mod normalize;
/// a module turns a String expression into a symbolic expression
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// the abstract syntax tree of a function of one variable
pub mod symbolic_engine;
///________________________________________________________________________________________________________________________________________________
/// turns a symbolic expression into a Rust function, malformed input becomes a NaN function
///# Example
/// ```
/// use RustedCurveArea::symbolic::normalize::normalize_expression;
/// use RustedCurveArea::symbolic::symbolic_lambdify::compile_function;
/// let f = compile_function(&normalize_expression("x^2 - 2x"));
/// assert_eq!(f(4.0), 8.0);
/// let broken = compile_function("x+*2");
/// assert!(broken(1.0).is_nan());
/// ```
pub mod symbolic_lambdify;
/// LaTeX source of a normalized expression
pub mod latex;
