#![allow(non_snake_case)]
use crate::calculator::session::CalculatorSession;
use crate::numerical::integration::QuadMethod;
use log::info;

/// Runs a canned calculator session and returns it.
/// 0 - the default parabolas, 1 - sin against cos, 2 - curves that never meet,
/// 3 - a malformed expression, 4 - the parabolas with Gauss-Legendre quadrature and
/// user bounds. Any other number falls back to 0.
pub fn area_examples(example: usize) -> CalculatorSession {
    let mut session = CalculatorSession::new();
    match example {
        1 => {
            // infinitely many crossings, only those in the scan range are found
            session.fx_raw = "sinx".to_string();
            session.gx_raw = "cosx".to_string();
            session.scan_config.scan_min = -5.0;
            session.scan_config.scan_max = 5.0;
            session.init();
            info!("sin and cos cross at {:?}", session.intersections);
        }
        2 => {
            session.fx_raw = "x^2 + 1".to_string();
            session.gx_raw = "-x^2 - 1".to_string();
            session.init();
            info!("no intersection: {}", session.alert_no_intersection);
        }
        3 => {
            // the table shows empty cells and no root is found
            session.fx_raw = "x^2 +* 3".to_string();
            session.init();
        }
        4 => {
            session.integration_config.method = QuadMethod::GaussLegendre;
            session.init();
            session.set_limits(Some(3.0), Some(-1.0));
        }
        _ => {
            session.init();
        }
    }
    session
}

/// prints everything the session computed
pub fn report(session: &CalculatorSession) {
    println!("f(x) = {}   g(x) = {}", session.fx_expr, session.gx_expr);
    session.print_table();
    session.print_steps();
    println!("intersections: {:?}", session.intersections);
    let result = session.calc_area();
    match result.area {
        Some(area) => println!("area = {:.6} ({})", area, result.detail),
        None => println!("area undefined: {}", result.detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_examples() {
        assert_eq!(area_examples(0).intersections.len(), 2);
        // -3pi/4, pi/4, 5pi/4 in [-5, 5]
        let trig = area_examples(1);
        assert_eq!(trig.intersections.len(), 3);
        assert_relative_eq!(trig.intersections[1], std::f64::consts::FRAC_PI_4, epsilon = 1e-9);
        assert!(area_examples(2).alert_no_intersection);
        let broken = area_examples(3);
        assert!(broken.table.ys_f.iter().all(|y| y.is_none()));
        assert!(broken.alert_no_intersection);
        let gauss = area_examples(4);
        assert_eq!(gauss.bounds.pair(), Some((-1.0, 3.0)));
        // the kink of |f - g| at x = 0 limits the Gauss-Legendre accuracy
        let simpson = {
            let mut s = area_examples(4);
            s.integration_config.method = QuadMethod::Simpson;
            s.calc_area().area.unwrap()
        };
        assert_relative_eq!(gauss.calc_area().area.unwrap(), simpson, max_relative = 1e-2);
        assert_eq!(area_examples(42).intersections.len(), 2);
    }
}
