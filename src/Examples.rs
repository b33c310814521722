//! examples of usage of RustedCurveArea
/// area between two curves: canned sessions from the default parabolas to malformed input
pub mod area_examples;
