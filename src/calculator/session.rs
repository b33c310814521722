//! # Calculator session
//!
//! The whole interactive state of the area calculator in one value: the two
//! expressions as typed and normalized, the sample table, the intersections, the
//! integration bounds and the solving narrative.
//!
//! Every operation recompiles both expressions from their current normalized
//! text; compiled closures are never kept between operations. Changing either
//! expression rebuilds the table, the roots, the bounds and the narrative from
//! scratch.
//!
//! ## Example
//! ```
//! use RustedCurveArea::calculator::session::CalculatorSession;
//! let mut session = CalculatorSession::new();
//! session.init();
//! assert_eq!(session.intersections.len(), 2);
//! let result = session.calc_area();
//! assert!((result.area.unwrap() - 64.0 / 3.0).abs() < 1e-3);
//! session.set_gx("x^2 - 2x + 1");
//! assert!(session.alert_no_intersection);
//! assert!(session.calc_area().area.is_none());
//! ```
use crate::calculator::bounds::{IntegrationBounds, derive_bounds};
use crate::calculator::plot_data::{PlotData, build_plot_data};
use crate::calculator::steps::{Step, build_narrative, steps_table};
use crate::calculator::table::{SampleTable, evaluate_table};
use crate::calculator::task::SessionTask;
use crate::numerical::integration::{IntegrationConfig, integrate_abs_difference};
use crate::numerical::root_finder::{Difference, RootScanConfig, ScanRootFinder};
use crate::symbolic::latex::to_latex;
use crate::symbolic::normalize::normalize_expression;
use crate::symbolic::symbolic_lambdify::{Function1D, compile_function};
use log::{info, warn};

pub const DEFAULT_FX: &str = "x^2 - 2x";
pub const DEFAULT_GX: &str = "6x - x^2";
pub const DEFAULT_XS: [f64; 5] = [-2.0, 0.0, 1.0, 2.0, 4.0];

/// Enclosed area, `None` when the bounds are unset
#[derive(Debug, Clone, PartialEq)]
pub struct AreaResult {
    pub area: Option<f64>,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    pub fx_raw: String,
    pub gx_raw: String,
    /// normalized text of f
    pub fx_expr: String,
    /// normalized text of g
    pub gx_expr: String,
    pub xs: Vec<f64>,
    pub table: SampleTable,
    pub intersections: Vec<f64>,
    pub alert_no_intersection: bool,
    pub bounds: IntegrationBounds,
    pub steps: Vec<Step>,
    pub scan_config: RootScanConfig,
    pub integration_config: IntegrationConfig,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Session with the default expressions and samples; nothing is computed until `init`.
    pub fn new() -> Self {
        Self {
            fx_raw: DEFAULT_FX.to_string(),
            gx_raw: DEFAULT_GX.to_string(),
            fx_expr: String::new(),
            gx_expr: String::new(),
            xs: DEFAULT_XS.to_vec(),
            table: SampleTable::default(),
            intersections: Vec::new(),
            alert_no_intersection: false,
            bounds: IntegrationBounds::default(),
            steps: Vec::new(),
            scan_config: RootScanConfig::default(),
            integration_config: IntegrationConfig::default(),
        }
    }

    /// Session built from a task document. The task's explicit limits, if any,
    /// replace the bounds derived from the roots.
    pub fn from_task(task: &SessionTask) -> Self {
        let mut session = Self::new();
        session.fx_raw = task.f.clone();
        session.gx_raw = task.g.clone();
        if let Some(xs) = &task.xs {
            session.xs = xs.clone();
        }
        session.scan_config = task.scan.clone();
        session.integration_config = task.integration.clone();
        session.init();
        if let Some((from, to)) = task.limits {
            session.set_limits(Some(from), Some(to));
        }
        session
    }

    /// Normalizes both expressions, fills the table and searches the intersections.
    pub fn init(&mut self) {
        self.fx_expr = normalize_expression(&self.fx_raw);
        self.gx_expr = normalize_expression(&self.gx_raw);
        self.eval_table();
        self.find_intersections_and_update();
    }

    fn compiled(&self) -> (Function1D, Function1D) {
        (compile_function(&self.fx_expr), compile_function(&self.gx_expr))
    }

    fn eval_table(&mut self) {
        let (f, g) = self.compiled();
        self.table = evaluate_table(&self.xs, f, g);
    }

    /// roots, bounds, flag and narrative, all rebuilt from the current expressions
    fn find_intersections_and_update(&mut self) {
        let (f, g) = self.compiled();
        let finder = ScanRootFinder::with_config(self.scan_config.clone());
        let result = finder.find_roots(&Difference::new(f, g));
        let (bounds, no_intersection) = derive_bounds(&result.roots);
        if no_intersection {
            info!("'{}' and '{}' do not intersect", self.fx_expr, self.gx_expr);
        }
        self.steps = build_narrative(&self.fx_expr, &self.gx_expr, &result.roots);
        self.intersections = result.roots;
        self.bounds = bounds;
        self.alert_no_intersection = no_intersection;
    }

    pub fn set_fx(&mut self, raw: &str) {
        self.fx_raw = raw.to_string();
        self.fx_expr = normalize_expression(raw);
        self.eval_table();
        self.find_intersections_and_update();
    }

    pub fn set_gx(&mut self, raw: &str) {
        self.gx_raw = raw.to_string();
        self.gx_expr = normalize_expression(raw);
        self.eval_table();
        self.find_intersections_and_update();
    }

    /// appends a sample; existing samples keep their order
    pub fn add_column(&mut self, x: f64) {
        self.xs.push(x);
        self.eval_table();
    }

    /// replaces the sample at `index`; an index past the end is ignored
    pub fn set_x(&mut self, index: usize, value: f64) {
        match self.xs.get_mut(index) {
            Some(x) => *x = value,
            None => {
                warn!(
                    "sample index {} out of range, the table has {} samples",
                    index,
                    self.xs.len()
                );
                return;
            }
        }
        self.eval_table();
    }

    /// User override of the bounds, reordered so that `from <= to`.
    pub fn set_limits(&mut self, from: Option<f64>, to: Option<f64>) {
        self.bounds = IntegrationBounds::new(from, to);
        self.bounds.normalize_order();
    }

    /// `∫ |f - g|` between the current bounds
    pub fn calc_area(&self) -> AreaResult {
        let (f, g) = self.compiled();
        match integrate_abs_difference(
            self.bounds.from,
            self.bounds.to,
            f,
            g,
            &self.integration_config,
        ) {
            Some(area) => AreaResult {
                area: Some(area),
                detail: format!(
                    "integral of |f(x) - g(x)| over [{}, {}], {}",
                    self.bounds.from.unwrap_or_default(),
                    self.bounds.to.unwrap_or_default(),
                    self.integration_config.method.description()
                ),
            },
            None => AreaResult {
                area: None,
                detail: "no integration limits".to_string(),
            },
        }
    }

    pub fn plot_data(&self) -> PlotData {
        let (f, g) = self.compiled();
        build_plot_data(&self.xs, &self.bounds, f, g)
    }

    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// LaTeX source of f and g
    pub fn latex(&self) -> (String, String) {
        (to_latex(&self.fx_expr), to_latex(&self.gx_expr))
    }

    pub fn print_table(&self) {
        println!("{}", self.table.to_table());
    }

    pub fn print_steps(&self) {
        println!("{}", steps_table(&self.steps));
    }
}
