use itertools::Itertools;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// One titled step of the solving narrative
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Step {
    pub title: String,
    pub content: String,
}

impl Step {
    pub fn new(title: &str, content: String) -> Self {
        Self {
            title: title.to_string(),
            content,
        }
    }
}

/// fixed six decimals, without the "-0.000000" that rounding a tiny negative produces
pub fn format_root(root: f64) -> String {
    let text = format!("{:.6}", root);
    if text == "-0.000000" {
        "0.000000".to_string()
    } else {
        text
    }
}

/// Narrative of the solving process: the equation, then the roots or their absence.
pub fn build_narrative(normalized_f: &str, normalized_g: &str, roots: &[f64]) -> Vec<Step> {
    let equation = Step::new(
        "1) Set the functions equal",
        format!("{} = {}", normalized_f, normalized_g),
    );
    let solution = if roots.is_empty() {
        Step::new("2) Solve", "No intersection points found.".to_string())
    } else {
        Step::new(
            "2) Solve",
            format!("Roots: x = {}", roots.iter().map(|r| format_root(*r)).join(", ")),
        )
    };
    vec![equation, solution]
}

pub fn steps_table(steps: &[Step]) -> Table {
    let mut table = Table::new(steps);
    table.with(Style::modern_rounded());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_with_roots() {
        let steps = build_narrative("x^2-2*x", "6*x-x^2", &[-1e-13, 4.0]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].title, "1) Set the functions equal");
        assert_eq!(steps[0].content, "x^2-2*x = 6*x-x^2");
        assert_eq!(steps[1].title, "2) Solve");
        // -1e-13 rounds to "-0.000000" with a plain {:.6}; the sign is dropped
        assert_eq!(steps[1].content, "Roots: x = 0.000000, 4.000000");
    }

    #[test]
    fn test_narrative_without_roots() {
        let steps = build_narrative("x^2+1", "0", &[]);
        assert_eq!(steps[1].content, "No intersection points found.");
    }

    #[test]
    fn test_format_root() {
        assert_eq!(format_root(1.0 / 3.0), "0.333333");
        assert_eq!(format_root(-2.5), "-2.500000");
    }

    #[test]
    fn test_steps_table_renders_rows() {
        let steps = build_narrative("x", "1", &[1.0]);
        let rendered = steps_table(&steps).to_string();
        assert!(rendered.contains("title"));
        assert!(rendered.contains("Roots: x = 1.000000"));
    }
}
