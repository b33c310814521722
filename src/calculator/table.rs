use tabled::{builder::Builder, settings::Style, Table};

/// `Some(y)` for a finite value, `None` for "undefined at this point"
pub fn defined(y: f64) -> Option<f64> {
    if y.is_finite() { Some(y) } else { None }
}

/// Sample x-values with the matching outputs of `f` and `g`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleTable {
    pub xs: Vec<f64>,
    pub ys_f: Vec<Option<f64>>,
    pub ys_g: Vec<Option<f64>>,
}

impl SampleTable {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// header row followed by one row per sample, undefined cells left empty
    pub fn rows(&self) -> Vec<Vec<String>> {
        let cell = |y: &Option<f64>| y.map(|v| v.to_string()).unwrap_or_default();
        let mut rows = vec![vec!["x".to_string(), "f(x)".to_string(), "g(x)".to_string()]];
        for ((x, yf), yg) in self.xs.iter().zip(&self.ys_f).zip(&self.ys_g) {
            rows.push(vec![x.to_string(), cell(yf), cell(yg)]);
        }
        rows
    }

    pub fn to_table(&self) -> Table {
        let mut table = Builder::from(self.rows()).build();
        table.with(Style::modern_rounded());
        table
    }
}

/// Evaluates `f` and `g` on every sample, keeping the order of `xs`.
pub fn evaluate_table<F, G>(xs: &[f64], f: F, g: G) -> SampleTable
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    SampleTable {
        xs: xs.to_vec(),
        ys_f: xs.iter().map(|&x| defined(f(x))).collect(),
        ys_g: xs.iter().map(|&x| defined(g(x))).collect(),
    }
}
