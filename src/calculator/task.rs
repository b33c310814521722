//! A whole calculator session described by a task document, see
//! [`crate::Utils::task_parser`] for the document syntax.
//!
//! ```text
//! functions
//!   f: x^2 - 2x
//!   g: 6x - x^2
//! samples
//!   x: -2, 0, 1, 2, 4
//! scan
//!   min: -100
//!   max: 100
//!   steps: 2000
//! integration
//!   from: 0
//!   to: 4
//!   subdivisions: 2000
//!   method: simpson
//! logging
//!   level: info
//! ```
//! Only `functions.f` and `functions.g` are required.
use crate::Utils::task_parser::{DocumentMap, Value, parse_document};
use crate::numerical::integration::{IntegrationConfig, QuadMethod};
use crate::numerical::root_finder::RootScanConfig;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug)]
pub enum TaskError {
    Parse(String),
    MissingKey(String),
    InvalidValue { key: String, value: String },
    Io(std::io::Error),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskError::Parse(msg) => write!(f, "Parsing error: {}", msg),
            TaskError::MissingKey(key) => write!(f, "Missing required key '{}'", key),
            TaskError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for key '{}'", value, key)
            }
            TaskError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for TaskError {}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::Io(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionTask {
    pub f: String,
    pub g: String,
    pub xs: Option<Vec<f64>>,
    pub scan: RootScanConfig,
    pub integration: IntegrationConfig,
    /// explicit integration bounds, overriding the ones derived from the roots
    pub limits: Option<(f64, f64)>,
    pub loglevel: Option<String>,
}

/// values of `section.key`, `None` when absent
fn lookup<'a>(document: &'a DocumentMap, section: &str, key: &str) -> Option<&'a Vec<Value>> {
    document.get(section).and_then(|s| s.get(key))
}

fn invalid(section: &str, key: &str, values: &[Value]) -> TaskError {
    let value = values
        .iter()
        .map(Value::to_string_value)
        .collect::<Vec<_>>()
        .join(", ");
    TaskError::InvalidValue {
        key: format!("{}.{}", section, key),
        value,
    }
}

/// the single value of `section.key` as written
fn single_text(
    document: &DocumentMap,
    section: &str,
    key: &str,
) -> Result<Option<String>, TaskError> {
    match lookup(document, section, key) {
        None => Ok(None),
        Some(values) if values.len() == 1 => Ok(Some(values[0].to_string_value())),
        Some(values) => Err(invalid(section, key, values)),
    }
}

fn single_float(
    document: &DocumentMap,
    section: &str,
    key: &str,
) -> Result<Option<f64>, TaskError> {
    match lookup(document, section, key) {
        None => Ok(None),
        Some(values) => match values.as_slice() {
            [value] => value
                .as_float()
                .map(Some)
                .ok_or_else(|| invalid(section, key, values)),
            _ => Err(invalid(section, key, values)),
        },
    }
}

fn single_count(
    document: &DocumentMap,
    section: &str,
    key: &str,
) -> Result<Option<usize>, TaskError> {
    match lookup(document, section, key) {
        None => Ok(None),
        Some(values) => match values.as_slice() {
            [Value::Integer(n)] if *n >= 0 => Ok(Some(*n as usize)),
            _ => Err(invalid(section, key, values)),
        },
    }
}

fn float_list(
    document: &DocumentMap,
    section: &str,
    key: &str,
) -> Result<Option<Vec<f64>>, TaskError> {
    match lookup(document, section, key) {
        None => Ok(None),
        Some(values) => values
            .iter()
            .map(|v| v.as_float().ok_or_else(|| invalid(section, key, values)))
            .collect::<Result<Vec<f64>, TaskError>>()
            .map(Some),
    }
}

impl SessionTask {
    /// Task with the given expressions and every other setting at its default
    pub fn new(f: &str, g: &str) -> Self {
        Self {
            f: f.to_string(),
            g: g.to_string(),
            xs: None,
            scan: RootScanConfig::default(),
            integration: IntegrationConfig::default(),
            limits: None,
            loglevel: None,
        }
    }

    pub fn parse(input: &str) -> Result<Self, TaskError> {
        let document = parse_document(input).map_err(TaskError::Parse)?;
        Self::from_document(&document)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TaskError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn from_document(document: &DocumentMap) -> Result<Self, TaskError> {
        let f = single_text(document, "functions", "f")?
            .ok_or_else(|| TaskError::MissingKey("functions.f".to_string()))?;
        let g = single_text(document, "functions", "g")?
            .ok_or_else(|| TaskError::MissingKey("functions.g".to_string()))?;
        let mut task = Self::new(&f, &g);

        task.xs = float_list(document, "samples", "x")?;

        if let Some(min) = single_float(document, "scan", "min")? {
            task.scan.scan_min = min;
        }
        if let Some(max) = single_float(document, "scan", "max")? {
            task.scan.scan_max = max;
        }
        if let Some(steps) = single_count(document, "scan", "steps")? {
            task.scan.steps = steps;
        }
        if let Some(iterations) = single_count(document, "scan", "iterations")? {
            task.scan.max_iterations = iterations;
        }
        if let Some(tolerance) = single_float(document, "scan", "tolerance")? {
            task.scan.tolerance = tolerance;
        }

        if let Some(n) = single_count(document, "integration", "subdivisions")? {
            task.integration.subdivisions = n;
        }
        if let Some(degree) = single_count(document, "integration", "degree")? {
            task.integration.gauss_degree = degree;
        }
        if let Some(method) = single_text(document, "integration", "method")? {
            task.integration.method =
                QuadMethod::from_str(&method).map_err(|_| TaskError::InvalidValue {
                    key: "integration.method".to_string(),
                    value: method.clone(),
                })?;
        }
        let from = single_float(document, "integration", "from")?;
        let to = single_float(document, "integration", "to")?;
        task.limits = match (from, to) {
            (Some(from), Some(to)) => Some((from, to)),
            (None, None) => None,
            (Some(_), None) => return Err(TaskError::MissingKey("integration.to".to_string())),
            (None, Some(_)) => return Err(TaskError::MissingKey("integration.from".to_string())),
        };

        task.loglevel = single_text(document, "logging", "level")?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FULL: &str = r#"
    // two parabolas
    functions
      f: x^2 - 2x
      g: 6x - x^2
    samples
      x: -2, 0, 1.5
    scan
      min: -10
      max: 10
      steps: 400
    integration
      from: 4
      to: 0
      subdivisions: 100
      method: gauss
    logging
      level: warn
    "#;

    #[test]
    fn test_full_document() {
        let task = SessionTask::parse(FULL).unwrap();
        assert_eq!(task.f, "x^2 - 2x");
        assert_eq!(task.g, "6x - x^2");
        assert_eq!(task.xs, Some(vec![-2.0, 0.0, 1.5]));
        assert_eq!(task.scan.scan_min, -10.0);
        assert_eq!(task.scan.scan_max, 10.0);
        assert_eq!(task.scan.steps, 400);
        assert_eq!(task.scan.max_iterations, 60);
        assert_eq!(task.integration.subdivisions, 100);
        assert_eq!(task.integration.method, QuadMethod::GaussLegendre);
        assert_eq!(task.limits, Some((4.0, 0.0)));
        assert_eq!(task.loglevel.as_deref(), Some("warn"));
    }

    #[test]
    fn test_minimal_document() {
        let task = SessionTask::parse("functions\n f: sin(x)\n g: 0").unwrap();
        assert_eq!(task, SessionTask::new("sin(x)", "0"));
    }

    #[test]
    fn test_missing_function() {
        let err = SessionTask::parse("functions\n f: x").unwrap_err();
        assert!(matches!(err, TaskError::MissingKey(ref key) if key == "functions.g"));
        let err = SessionTask::parse("samples\n x: 1").unwrap_err();
        assert!(matches!(err, TaskError::MissingKey(ref key) if key == "functions.f"));
    }

    #[test]
    fn test_invalid_values() {
        let base = "functions\n f: x\n g: 1\n";
        let err = SessionTask::parse(&format!("{base}samples\n x: 1, two")).unwrap_err();
        assert!(matches!(err, TaskError::InvalidValue { ref key, .. } if key == "samples.x"));
        let err = SessionTask::parse(&format!("{base}scan\n steps: -3")).unwrap_err();
        assert!(matches!(err, TaskError::InvalidValue { ref key, .. } if key == "scan.steps"));
        let err = SessionTask::parse(&format!("{base}integration\n method: trapezoid")).unwrap_err();
        assert!(err.to_string().contains("trapezoid"));
        let err = SessionTask::parse(&format!("{base}integration\n from: 1")).unwrap_err();
        assert!(matches!(err, TaskError::MissingKey(_)));
        let err = SessionTask::parse("functions\n f: x, y\n g: 1").unwrap_err();
        assert!(matches!(err, TaskError::InvalidValue { .. }));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            SessionTask::parse("functions\n f x"),
            Err(TaskError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.txt");
        fs::write(&path, FULL).unwrap();
        let task = SessionTask::from_file(&path).unwrap();
        assert_eq!(task.scan.steps, 400);
        let missing = SessionTask::from_file(dir.path().join("absent.txt"));
        assert!(matches!(missing, Err(TaskError::Io(_))));
    }
}
