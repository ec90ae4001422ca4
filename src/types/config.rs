/// Tolerances used when a numeric feature is compared for equality
/// (the `:` form without a `min-`/`max-` prefix).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvalConfig {
    /// Maximum dp difference treated as equal.
    pub length_tolerance: f64,
    /// Maximum dpi difference treated as equal.
    pub resolution_tolerance: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            length_tolerance: 0.01,
            resolution_tolerance: 1.0,
        }
    }
}

impl EvalConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn length_tolerance(mut self, tolerance: f64) -> Self {
        self.length_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn resolution_tolerance(mut self, tolerance: f64) -> Self {
        self.resolution_tolerance = tolerance;
        self
    }
}
