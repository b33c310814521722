//! Turns a normalized expression into LaTeX source for display: drops the
//! explicit `*` the normalizer inserted and braces integer exponents.
//! Only the text is produced, typesetting is left to the caller.
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NUMBER_TIMES_X: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\*x").unwrap());
static X_TIMES_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"x\*(\d+)").unwrap());
static LETTER_TIMES_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])\*([a-zA-Z])").unwrap());
static LETTER_POWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])\^(\d+)").unwrap());
static DIGIT_POWER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9])\^(\d+)").unwrap());

pub fn to_latex(expr: &str) -> String {
    let s = WHITESPACE.replace_all(expr, "");
    let s = NUMBER_TIMES_X.replace_all(&s, "${1}x");
    let s = X_TIMES_NUMBER.replace_all(&s, "${1}x");
    let s = LETTER_TIMES_LETTER.replace_all(&s, "${1}${2}");
    let s = LETTER_POWER.replace_all(&s, "${1}^{ ${2} }");
    let s = DIGIT_POWER.replace_all(&s, "${1}^{ ${2} }");
    s.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_latex() {
        assert_eq!(to_latex("x^2-2*x"), "x^{ 2 }-2x");
        assert_eq!(to_latex("6*x-x^2"), "6x-x^{ 2 }");
        assert_eq!(to_latex("x*3"), "3x");
        assert_eq!(to_latex("2^10"), "2^{ 10 }");
        assert_eq!(to_latex("sin(x)*cos(x)"), "sin(x)*cos(x)");
        assert_eq!(to_latex("a * b"), "ab");
    }
}
