/// Locating the intersections of two functions: a uniform grid scan for sign
/// changes of `f - g` refined by bisection
///# Example
/// ```
/// use RustedCurveArea::numerical::root_finder::find_intersections;
/// let result = find_intersections(|x| x * x - 2.0 * x, |x| 6.0 * x - x * x);
/// assert_eq!(result.roots.len(), 2);
/// assert!((result.roots[1] - 4.0).abs() < 1e-6);
/// ```
pub mod root_finder;
/// Definite integrals: composite Simpson rule and Gauss-Legendre quadrature
///# Example
/// ```
/// use RustedCurveArea::numerical::integration::integrate_numerical;
/// let area = integrate_numerical(0.0, 1.0, |x| x * x, 2000);
/// assert!((area - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub mod integration;
