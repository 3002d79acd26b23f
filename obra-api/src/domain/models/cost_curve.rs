use serde::{Deserialize, Serialize};

/// One month of the cumulative planned-vs-actual spend curve (S-curve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCurvePoint {
    pub month: String,
    pub planned: f64,
    pub actual: f64,
}

impl CostCurvePoint {
    pub fn new(month: impl Into<String>, planned: f64, actual: f64) -> Self {
        Self {
            month: month.into(),
            planned,
            actual,
        }
    }

    /// Actual minus planned; positive means over plan.
    pub fn deviation(&self) -> f64 {
        self.actual - self.planned
    }

    pub fn deviation_percentage(&self) -> f64 {
        if self.planned > 0.0 {
            self.deviation() / self.planned * 100.0
        } else {
            0.0
        }
    }
}
