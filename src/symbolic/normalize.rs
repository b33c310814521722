//! Rewrites the shorthand a user types (`2x`, `3(x+1)`, `sinx`) into text the
//! expression parser accepts (`2*x`, `3*(x+1)`, `sin(x)`).
//!
//! Rules, applied in order on the whitespace-stripped input, each one scanning
//! left to right once:
//! 1. digit followed by `x`          -> `2*x`
//! 2. digit followed by `(`          -> `2*(`
//! 3. `)` followed by `x`            -> `)*x`
//! 4. `)(`                           -> `)*(`
//! 5. `sin|cos|tan|log|sqrt|exp` followed by a number or `x`, bare or wrapped in
//!    one pair of parentheses        -> `name(arg)` with the name lowercased
//!
//! Rule 5 can produce new adjacencies (`sinx(x)` -> `sin(x)(x)`), so the chain is
//! repeated until the text stops changing. The result is therefore a fixed point
//! and `normalize_expression(normalize_expression(s)) == normalize_expression(s)`.
//! Sequences no rule matches pass through untouched.
use crate::symbolic::symbolic_engine::UnaryFunction;
use itertools::Itertools;
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use strum::IntoEnumIterator;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DIGIT_VARIABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d)(x)").unwrap());
static DIGIT_BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)\(").unwrap());
static BRACKET_VARIABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\)(x)").unwrap());
static BRACKET_BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\)\(").unwrap());
static FUNCTION_CALL: LazyLock<Regex> = LazyLock::new(|| {
    let names = UnaryFunction::iter().map(|f| f.to_string()).join("|");
    let arg = r"-?\d*\.?\d+|x";
    Regex::new(&format!(r"(?i)({names})(?:\(({arg})\)|({arg}))")).unwrap()
});

/// one pass of the five rules
fn normalize_once(s: &str) -> String {
    let s = DIGIT_VARIABLE.replace_all(s, "${1}*${2}");
    let s = DIGIT_BRACKET.replace_all(&s, "${1}*(");
    let s = BRACKET_VARIABLE.replace_all(&s, ")*${1}");
    let s = BRACKET_BRACKET.replace_all(&s, ")*(");
    let s = FUNCTION_CALL.replace_all(&s, |caps: &Captures| {
        let arg = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        format!("{}({})", caps[1].to_lowercase(), arg.to_lowercase())
    });
    s.into_owned()
}

/// Normalizes a raw user expression. Total and deterministic.
pub fn normalize_expression(raw: &str) -> String {
    let mut current = WHITESPACE.replace_all(raw, "").into_owned();
    loop {
        let next = normalize_once(&current);
        if next == current {
            debug!("normalized '{}' into '{}'", raw, current);
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_times_variable() {
        assert_eq!(normalize_expression("2x"), "2*x");
        assert_eq!(normalize_expression("x^2 - 2x"), "x^2-2*x");
        assert_eq!(normalize_expression("6x - x^2"), "6*x-x^2");
        assert_eq!(normalize_expression("12x"), "12*x");
    }

    #[test]
    fn test_digit_times_bracket() {
        assert_eq!(normalize_expression("3(x+1)"), "3*(x+1)");
    }

    #[test]
    fn test_bracket_times_variable() {
        assert_eq!(normalize_expression("(x+1)x"), "(x+1)*x");
    }

    #[test]
    fn test_bracket_times_bracket() {
        assert_eq!(normalize_expression(")("), ")*(");
        assert_eq!(normalize_expression("(x+1)(x-1)"), "(x+1)*(x-1)");
        assert_eq!(normalize_expression("(x)(x)(x)"), "(x)*(x)*(x)");
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(normalize_expression("sinx"), "sin(x)");
        assert_eq!(normalize_expression("sin x"), "sin(x)");
        assert_eq!(normalize_expression("sin(x)"), "sin(x)");
        assert_eq!(normalize_expression("SIN(X)"), "sin(x)");
        assert_eq!(normalize_expression("sqrt4"), "sqrt(4)");
        assert_eq!(normalize_expression("cos(2.5)"), "cos(2.5)");
        assert_eq!(normalize_expression("log-2"), "log(-2)");
        assert_eq!(normalize_expression("exp(x)+1"), "exp(x)+1");
    }

    #[test]
    fn test_compound_argument_is_left_alone() {
        assert_eq!(normalize_expression("sin(x+1)"), "sin(x+1)");
        assert_eq!(normalize_expression("sqrt(2x)"), "sqrt(2*x)");
    }

    #[test]
    fn test_new_adjacency_from_function_rule() {
        assert_eq!(normalize_expression("sinx(x)"), "sin(x)*(x)");
        assert_eq!(normalize_expression("sinxx"), "sin(x)*x");
        assert_eq!(normalize_expression("sin2x"), "sin(2)*x");
    }

    #[test]
    fn test_unmatched_text_passes_through() {
        assert_eq!(normalize_expression("x+*y"), "x+*y");
        assert_eq!(normalize_expression(""), "");
        assert_eq!(normalize_expression("  "), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "x^2 - 2x",
            "6x - x^2",
            "3(x+1)(x-1)",
            "sinx(x)",
            "2sqrt9x",
            "(x)x(x)2x",
            "cos(3)(2)",
            "logx + exp2 - tan(x)x",
            ")(",
            "SIN X",
            "1.5x^2 + .5x",
            "garbage(((",
        ];
        for input in inputs {
            let once = normalize_expression(input);
            assert_eq!(normalize_expression(&once), once, "input {}", input);
        }
    }
}
