//! Sampled curves for a chart of `f`, `g` and the area enclosed between them.
//! Nothing is drawn here; non-finite samples stay NaN so a chart shows a gap.
use crate::calculator::bounds::IntegrationBounds;

pub const CURVE_SAMPLES: usize = 500;
pub const SHADE_SAMPLES: usize = 200;

/// `n` evenly spaced points from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..n)
            .map(|i| start + (i as f64 / (n - 1) as f64) * (end - start))
            .collect(),
    }
}

/// The region between the curves over the integration bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ShadedRegion {
    pub xs: Vec<f64>,
    /// true when `f` is the upper curve, judged at the midpoint of the bounds
    pub top_is_f: bool,
    pub top: Vec<f64>,
    pub bottom: Vec<f64>,
}

impl ShadedRegion {
    /// closed outline: the upper curve forward, then the lower curve backward
    pub fn polygon(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = self.xs.iter().chain(self.xs.iter().rev()).copied().collect();
        let ys = self.top.iter().chain(self.bottom.iter().rev()).copied().collect();
        (xs, ys)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub xs: Vec<f64>,
    pub ys_f: Vec<f64>,
    pub ys_g: Vec<f64>,
    pub shade: Option<ShadedRegion>,
}

/// Chart range: the samples and the bounds, widened by one on both sides.
/// An unset bound is replaced by the first sample.
pub fn plot_range(xs: &[f64], bounds: &IntegrationBounds) -> (f64, f64) {
    let first = xs.first().copied();
    let lo_extra = bounds.from.or(first);
    let hi_extra = bounds.to.or(first);
    let lo = xs.iter().copied().chain(lo_extra).fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().chain(hi_extra).fold(f64::NEG_INFINITY, f64::max);
    if lo.is_finite() && hi.is_finite() {
        (lo - 1.0, hi + 1.0)
    } else {
        (-1.0, 1.0)
    }
}

pub fn build_plot_data<F, G>(xs: &[f64], bounds: &IntegrationBounds, f: F, g: G) -> PlotData
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let (xmin, xmax) = plot_range(xs, bounds);
    let xs_plot = linspace(xmin, xmax, CURVE_SAMPLES);
    let ys_f = xs_plot.iter().map(|&x| f(x)).collect();
    let ys_g = xs_plot.iter().map(|&x| g(x)).collect();
    let shade = bounds.pair().map(|(a, b)| {
        let mid = (a + b) / 2.0;
        let top_is_f = f(mid) >= g(mid);
        let xs_shade = linspace(a, b, SHADE_SAMPLES);
        let (upper, lower): (&dyn Fn(f64) -> f64, &dyn Fn(f64) -> f64) =
            if top_is_f { (&f, &g) } else { (&g, &f) };
        ShadedRegion {
            top: xs_shade.iter().map(|&x| upper(x)).collect(),
            bottom: xs_shade.iter().map(|&x| lower(x)).collect(),
            xs: xs_shade,
            top_is_f,
        }
    });
    PlotData {
        xs: xs_plot,
        ys_f,
        ys_g,
        shade,
    }
}
