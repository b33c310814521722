//! Locates the intersection points of two functions of one variable.
//!
//! The difference `h(x) = f(x) - g(x)` is sampled on a uniform grid; every grid
//! cell whose endpoints carry strictly opposite signs is refined by bisection.
//! A cell with a non-finite endpoint is skipped, so functions that are undefined
//! on part of the domain never produce spurious roots there.
use log::{debug, info, warn};

/// Trait for representing a nonlinear equation h(x) = 0
pub trait NonlinearFunction {
    /// Evaluate the function at point x
    fn evaluate(&self, x: f64) -> f64;

    /// Get function name for debugging/logging
    fn name(&self) -> &str {
        "unnamed_function"
    }
}

/// Simple function wrapper for closures
pub struct ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    func: F,
    name: String,
}

impl<F> ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> NonlinearFunction for ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `f(x) - g(x)`, the function whose zeros are the intersections of `f` and `g`
pub struct Difference<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    f: F,
    g: G,
}

impl<F, G> Difference<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    pub fn new(f: F, g: G) -> Self {
        Self { f, g }
    }
}

impl<F, G> NonlinearFunction for Difference<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.f)(x) - (self.g)(x)
    }

    fn name(&self) -> &str {
        "f - g"
    }
}

/// Configuration of the grid scan and of the bisection refinement
#[derive(Debug, Clone, PartialEq)]
pub struct RootScanConfig {
    pub scan_min: f64,
    pub scan_max: f64,
    /// number of grid cells, the grid has `steps + 1` points
    pub steps: usize,
    pub max_iterations: usize,
    /// bisection stops early once |h(mid)| drops below this value
    pub tolerance: f64,
    /// roots closer than this to an already recorded root are dropped
    pub dedup_tolerance: f64,
}

impl Default for RootScanConfig {
    fn default() -> Self {
        Self {
            scan_min: -100.0,
            scan_max: 100.0,
            steps: 2000,
            max_iterations: 60,
            tolerance: 1e-12,
            dedup_tolerance: 1e-6,
        }
    }
}

/// Outcome of a scan: ascending roots and the "no intersection" flag
#[derive(Debug, Clone, PartialEq)]
pub struct RootSearchResult {
    pub roots: Vec<f64>,
    pub has_none: bool,
}

impl RootSearchResult {
    fn from_roots(roots: Vec<f64>) -> Self {
        let has_none = roots.is_empty();
        Self { roots, has_none }
    }
}

/// Grid-scan root finder
pub struct ScanRootFinder {
    config: RootScanConfig,
}

impl ScanRootFinder {
    /// Create a new ScanRootFinder with default configuration
    pub fn new() -> Self {
        Self {
            config: RootScanConfig::default(),
        }
    }

    /// Create a new ScanRootFinder with custom configuration
    pub fn with_config(config: RootScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RootScanConfig {
        &self.config
    }

    pub fn set_scan_range(&mut self, scan_min: f64, scan_max: f64) {
        self.config.scan_min = scan_min;
        self.config.scan_max = scan_max;
    }

    pub fn set_steps(&mut self, steps: usize) {
        self.config.steps = steps;
    }

    /// Scans `[scan_min, scan_max]` for zeros of `function`.
    ///
    /// For every pair of neighbouring grid points `(x0, x1)` with finite values:
    /// - `h(x0) == 0` records `x0`, unless `h(x1)` is zero too (a flat stretch,
    ///   e.g. identical functions, is not a set of intersections);
    /// - strictly opposite signs are refined by bisection.
    ///
    /// The last grid point is only ever the right end of a cell, so an exact zero
    /// there is found only through a sign change.
    pub fn find_roots<H>(&self, function: &H) -> RootSearchResult
    where
        H: NonlinearFunction,
    {
        let cfg = &self.config;
        if cfg.steps == 0 || !(cfg.scan_max > cfg.scan_min) {
            warn!(
                "empty scan range [{}, {}] with {} steps, no roots searched",
                cfg.scan_min, cfg.scan_max, cfg.steps
            );
            return RootSearchResult::from_roots(Vec::new());
        }
        let dx = (cfg.scan_max - cfg.scan_min) / cfg.steps as f64;
        let mut roots: Vec<f64> = Vec::new();
        let mut x0 = cfg.scan_min;
        let mut h0 = function.evaluate(x0);
        let mut brackets = 0usize;
        for i in 1..=cfg.steps {
            let x1 = cfg.scan_min + i as f64 * dx;
            let h1 = function.evaluate(x1);
            if h0.is_finite() && h1.is_finite() {
                if h0 == 0.0 {
                    if h1 != 0.0 {
                        self.record_root(&mut roots, x0);
                    }
                } else if (h0 < 0.0 && h1 > 0.0) || (h0 > 0.0 && h1 < 0.0) {
                    brackets += 1;
                    let root = self.bisect(function, x0, x1, h0);
                    self.record_root(&mut roots, root);
                }
            }
            x0 = x1;
            h0 = h1;
        }
        roots.sort_by(|a, b| a.total_cmp(b));
        info!(
            "{}: {} root(s) found, {} bracket(s) refined",
            function.name(),
            roots.len(),
            brackets
        );
        debug!("roots: {:?}", roots);
        RootSearchResult::from_roots(roots)
    }

    /// Bisection on `[a, b]` where `h(a) = fa` and `h(b)` have opposite signs.
    fn bisect<H>(&self, function: &H, mut a: f64, mut b: f64, mut fa: f64) -> f64
    where
        H: NonlinearFunction,
    {
        for _ in 0..self.config.max_iterations {
            let m = 0.5 * (a + b);
            let fm = function.evaluate(m);
            if fm.abs() < self.config.tolerance {
                return m;
            }
            if (fa < 0.0 && fm > 0.0) || (fa > 0.0 && fm < 0.0) {
                b = m;
            } else {
                a = m;
                fa = fm;
            }
        }
        0.5 * (a + b)
    }

    /// appends `root` unless an already recorded root lies within the dedup tolerance
    pub(crate) fn record_root(&self, roots: &mut Vec<f64>, root: f64) {
        if roots
            .iter()
            .any(|r| (r - root).abs() < self.config.dedup_tolerance)
        {
            debug!("root {} dropped as a duplicate", root);
            return;
        }
        roots.push(root);
    }
}

impl Default for ScanRootFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Intersections of `f` and `g` over the default scan range
pub fn find_intersections<F, G>(f: F, g: G) -> RootSearchResult
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    ScanRootFinder::new().find_roots(&Difference::new(f, g))
}
