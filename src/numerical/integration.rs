//! Definite integrals of a real function over a bounded interval.
//!
//! Composite Simpson is the method used for areas; Gauss-Legendre is kept as an
//! independent cross-check. Non-finite integrand values are not trapped, they
//! make the whole result non-finite.
use gauss_quad::GaussLegendre;
use log::{debug, warn};
use strum_macros::{Display, EnumIter, EnumString};

/// Quadrature rule used for a definite integral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QuadMethod {
    /// composite Simpson rule on an even number of subintervals
    Simpson,
    /// Gauss-Legendre quadrature for finite intervals
    #[strum(to_string = "gausslegendre", serialize = "gauss")]
    GaussLegendre,
}

impl QuadMethod {
    pub fn description(&self) -> &'static str {
        match self {
            QuadMethod::Simpson => "composite Simpson rule",
            QuadMethod::GaussLegendre => "Gauss-Legendre quadrature for finite intervals",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationConfig {
    /// subintervals of the Simpson rule
    pub subdivisions: usize,
    pub method: QuadMethod,
    /// nodes of the Gauss-Legendre rule
    pub gauss_degree: usize,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            subdivisions: 2000,
            method: QuadMethod::Simpson,
            gauss_degree: 50,
        }
    }
}

impl IntegrationConfig {
    /// integral of `f` over `[a, b]` with the configured method
    pub fn integrate<F>(&self, a: f64, b: f64, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self.method {
            QuadMethod::Simpson => integrate_numerical(a, b, f, self.subdivisions),
            QuadMethod::GaussLegendre => {
                match quad(QuadMethod::GaussLegendre, self.gauss_degree, a, b, f) {
                    Ok(value) => value,
                    Err(err) => {
                        warn!("{}", err);
                        f64::NAN
                    }
                }
            }
        }
    }
}

/// Subintervals used by [`integrate`]
pub const DEFAULT_SUBDIVISIONS: usize = 1000;

/// Composite Simpson rule with [`DEFAULT_SUBDIVISIONS`] subintervals
pub fn integrate<F>(a: f64, b: f64, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    integrate_numerical(a, b, f, DEFAULT_SUBDIVISIONS)
}

/// Composite Simpson rule with `n` subintervals.
///
/// `a == b` gives exactly 0. An odd `n` is raised to the next even number and
/// `n` below 2 is treated as 2.
pub fn integrate_numerical<F>(a: f64, b: f64, f: F, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b {
        debug!("degenerate interval [{}, {}], integral is 0", a, b);
        return 0.0;
    }
    let mut n = n.max(2);
    if n % 2 != 0 {
        n += 1;
    }
    let h = (b - a) / (n as f64);
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + (i as f64) * h;
        if i % 2 == 0 {
            sum += 2.0 * f(x);
        } else {
            sum += 4.0 * f(x);
        }
    }
    sum * h / 3.0
}

/// Gaussian quadrature of `f` over `[lower, upper]` with `degree` nodes
pub fn quad<F>(
    method: QuadMethod,
    degree: usize,
    lower: f64,
    upper: f64,
    f: F,
) -> Result<f64, String>
where
    F: Fn(f64) -> f64,
{
    match method {
        QuadMethod::GaussLegendre => {
            if !(lower.is_finite() && upper.is_finite()) {
                return Err("Gauss-Legendre quadrature is for finite intervals".to_string());
            }
            let quad = GaussLegendre::new(degree.max(2))
                .map_err(|e| format!("Failed to create Gauss-Legendre quadrature: {:?}", e))?;
            Ok(quad.integrate(lower, upper, f))
        }
        QuadMethod::Simpson => Ok(integrate_numerical(lower, upper, f, degree)),
    }
}

/// `∫ |f - g|` over `[from, to]`; `None` when either bound is unset
pub fn integrate_abs_difference<F, G>(
    from: Option<f64>,
    to: Option<f64>,
    f: F,
    g: G,
    config: &IntegrationConfig,
) -> Option<f64>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let (a, b) = (from?, to?);
    Some(config.integrate(a, b, |x| (f(x) - g(x)).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::normalize::normalize_expression;
    use crate::symbolic::symbolic_lambdify::compile_function;
    use approx::assert_relative_eq;
    use std::str::FromStr;

    #[test]
    fn test_simpson_is_exact_for_cubics() {
        let value = integrate_numerical(0.0, 2.0, |x| x * x * x - x, 4);
        assert_relative_eq!(value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_subdivisions() {
        let f = |x: f64| x.exp();
        assert_eq!(integrate(0.0, 1.0, f), integrate_numerical(0.0, 1.0, f, 1000));
        assert_relative_eq!(integrate(0.0, 1.0, f), 1.0_f64.exp() - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_width_interval() {
        assert_eq!(integrate_numerical(3.0, 3.0, |x| x.exp(), 1000), 0.0);
        assert_eq!(integrate_numerical(1.5, 1.5, |_| f64::NAN, 1000), 0.0);
    }

    #[test]
    fn test_odd_subdivisions_are_rounded_up() {
        let odd = integrate_numerical(0.0, 1.0, |x: f64| x.sin(), 7);
        let even = integrate_numerical(0.0, 1.0, |x: f64| x.sin(), 8);
        assert_eq!(odd, even);
        let tiny = integrate_numerical(0.0, 1.0, |x| x * x, 0);
        assert_relative_eq!(tiny, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_interval_changes_sign() {
        let value = integrate_numerical(1.0, 0.0, |x| x, 10);
        assert_relative_eq!(value, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_values_propagate() {
        let f = compile_function("x+*2");
        assert!(integrate_numerical(0.0, 1.0, f, 10).is_nan());
        let g = compile_function("log(x)");
        assert!(!integrate_numerical(0.0, 1.0, g, 10).is_finite());
    }

    #[test]
    fn test_area_between_parabolas() {
        let f = compile_function(&normalize_expression("x^2 - 2x"));
        let g = compile_function(&normalize_expression("6x - x^2"));
        let area =
            integrate_abs_difference(Some(0.0), Some(4.0), f, g, &IntegrationConfig::default())
                .unwrap();
        assert_relative_eq!(area, 64.0 / 3.0, max_relative = 1e-3);
    }

    #[test]
    fn test_unset_bounds() {
        let cfg = IntegrationConfig::default();
        assert!(integrate_abs_difference(None, Some(1.0), |x| x, |_| 0.0, &cfg).is_none());
        assert!(integrate_abs_difference(Some(1.0), None, |x| x, |_| 0.0, &cfg).is_none());
    }

    #[test]
    fn test_gauss_legendre_agrees_with_simpson() {
        let cfg = IntegrationConfig {
            method: QuadMethod::GaussLegendre,
            ..IntegrationConfig::default()
        };
        let gauss = cfg.integrate(0.0, 3.0, |x: f64| x.cos() * x);
        let simpson = IntegrationConfig::default().integrate(0.0, 3.0, |x: f64| x.cos() * x);
        assert_relative_eq!(gauss, simpson, epsilon = 1e-8);
        let exact = 3.0 * 3.0_f64.sin() + 3.0_f64.cos() - 1.0;
        assert_relative_eq!(gauss, exact, epsilon = 1e-10);
    }

    #[test]
    fn test_gauss_legendre_rejects_infinite_interval() {
        assert!(quad(QuadMethod::GaussLegendre, 10, 0.0, f64::INFINITY, |x| x).is_err());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(QuadMethod::Simpson.to_string(), "simpson");
        assert_eq!(QuadMethod::from_str("Simpson").unwrap(), QuadMethod::Simpson);
        assert_eq!(QuadMethod::from_str("gauss").unwrap(), QuadMethod::GaussLegendre);
        assert_eq!(
            QuadMethod::from_str("gausslegendre").unwrap(),
            QuadMethod::GaussLegendre
        );
    }
}
