//! Budget result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One line of the material breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialCost {
    pub name: String,
    pub cost: f64,
}

impl MaterialCost {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// Cost and price breakdown of a job.
///
/// A derived value: recompute it whenever parts or rates change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BudgetResult {
    /// Sheets, hardware and other costs, in that order.
    pub materials: Vec<MaterialCost>,

    /// Labor cost.
    pub labor: f64,

    /// Sum of all materials and labor.
    pub total: f64,

    /// `total * markup_multiplier`.
    pub final_price: f64,

    /// `(final_price - total) / final_price * 100`.
    pub margin: f64,

    /// Stock sheets charged.
    pub sheets_used: u32,

    /// Part area the budget was computed from.
    pub total_area_m2: f64,
}

impl BudgetResult {
    /// Sum of the material lines, labor excluded.
    pub fn material_total(&self) -> f64 {
        self.materials.iter().map(|m| m.cost).sum()
    }

    /// Looks up a material line by name.
    pub fn material(&self, name: &str) -> Option<f64> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.cost)
    }
}
