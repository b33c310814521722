use log::info;

/// Integration bounds `[from, to]`; either side may be unset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntegrationBounds {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl IntegrationBounds {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self { from, to }
    }

    /// Bounds from an ascending root list: the two smallest roots, a single
    /// root for both sides, or unset bounds for an empty list.
    pub fn from_roots(roots: &[f64]) -> Self {
        match roots {
            [] => Self::default(),
            [only] => Self::new(Some(*only), Some(*only)),
            [first, second, ..] => Self::new(Some(*first), Some(*second)),
        }
    }

    /// swaps the bounds so that `from <= to`
    pub fn normalize_order(&mut self) {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                info!("integration bounds swapped: [{}, {}] -> [{}, {}]", from, to, to, from);
                self.from = Some(to);
                self.to = Some(from);
            }
        }
    }

    pub fn is_set(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.from?, self.to?))
    }
}

/// Bounds derived from the root set plus the "no intersection" flag
pub fn derive_bounds(roots: &[f64]) -> (IntegrationBounds, bool) {
    (IntegrationBounds::from_roots(roots), roots.is_empty())
}
