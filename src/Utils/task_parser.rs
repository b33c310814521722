//! parse a task document made of section titles, each followed by `key: value1, value2` lines:
//! ```text
//! functions
//!   f: x^2 - 2x
//!   g: 6x - x^2
//! samples
//!   x: -2, 0, 1, 2, 4
//! ```
//! Every line holds exactly one title or one key with its list of values. Values are split on
//! commas only, so a value may contain spaces (an expression such as `x^2 - 2x` stays one value).
//! Lines starting with `//`, `#`, `%` or `;` are comments.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, space0},
    combinator::{all_consuming, map, map_res, recognize},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, separated_pair},
};
use std::collections::HashMap;
use std::fmt::Display;

pub type SectionMap = HashMap<String, Vec<Value>>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// numeric value, integers widened to f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// the value as it was written; `0` and `x` are both valid expressions
    pub fn to_string_value(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Float(f) => f.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// One meaningful line of a document
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Title(String),
    Entry(String, Vec<Value>),
}

fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

/// Parses a title (word characters without spaces)
pub fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, title) = identifier(input)?;
    Ok((input.trim_start(), title))
}

/// Parses a key (word characters without spaces)
pub fn parse_key(input: &str) -> IResult<&str, String> {
    identifier(input)
}

/// a single value: everything up to the next comma, trimmed and typed
pub fn parse_value(input: &str) -> IResult<&str, Value> {
    let value_parser = take_while1(|c: char| !matches!(c, ',' | '\n'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty value".to_string());
        }
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

pub fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list0(separator_coma, parse_value);
    value_parser.parse(input)
}

/// Parses a key-value pair where value is a list
pub fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim(), result))
}

/// a whole trimmed line, either an entry or a title
pub fn parse_line(input: &str) -> IResult<&str, Line> {
    let entry = map(parse_key_value_pair, |(key, values)| Line::Entry(key, values));
    let title = map(parse_title, Line::Title);
    all_consuming(alt((entry, title))).parse(input)
}

/// comment lines start with //, #, % or ;
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with('#')
        || trimmed.starts_with('%')
        || trimmed.starts_with(';')
}

/// Parses the entire document into a HashMap of sections.
///
/// A repeated section is merged, a repeated key keeps the last value list.
pub fn parse_document(input: &str) -> Result<DocumentMap, String> {
    let mut result = DocumentMap::new();
    let mut current: Option<String> = None;
    for (number, line) in input.lines().enumerate() {
        if is_comment_or_blank(line) {
            continue;
        }
        let (_, parsed) = parse_line(line.trim())
            .map_err(|e| format!("line {}: cannot parse '{}': {:?}", number + 1, line.trim(), e))?;
        match parsed {
            Line::Title(title) => {
                result.entry(title.clone()).or_default();
                current = Some(title);
            }
            Line::Entry(key, values) => {
                let Some(title) = current.as_ref() else {
                    return Err(format!(
                        "line {}: key '{}' appears before any section title",
                        number + 1,
                        key
                    ));
                };
                result.entry(title.clone()).or_default().insert(key, values);
            }
        }
    }
    Ok(result)
}

