//! Cost functions for budgeting a cut job.
//!
//! ```text
//! sheets    = ceil(area / effective_sheet_area)
//! material  = sheets * price_per_sheet
//! hardware  = material * hardware_ratio
//! other     = (material + hardware) * other_ratio
//! labor     = area * labor_per_square_meter
//! total     = material + hardware + other + labor
//! final     = total * markup_multiplier
//! margin    = (final - total) / final * 100
//! ```

use crate::config::{BudgetConfig, RateConfig};
use crate::result::{BudgetResult, MaterialCost};
use cutlist_core::{Error, Result, Sheet, MM2_PER_M2};

/// Area ratios within this of a whole number of sheets are not rounded up.
const SHEET_RATIO_EPSILON: f64 = 1e-9;

/// Converts areas and rates into a [`BudgetResult`].
#[derive(Debug, Clone, Default)]
pub struct BudgetEngine {
    config: BudgetConfig,
}

impl BudgetEngine {
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Prices `total_area_m2` of parts, estimating the sheet count from the
    /// effective sheet area.
    pub fn calculate(&self, total_area_m2: f64, rates: &RateConfig) -> Result<BudgetResult> {
        self.check_inputs(total_area_m2, rates)?;
        let sheets_used = sheets_for_area(total_area_m2, self.config.effective_sheet_area_m2);
        Ok(self.price(sheets_used, total_area_m2, rates))
    }

    /// Prices a nested layout: sheets are counted from the layout and labor
    /// from the placed-piece area.
    pub fn calculate_for_layout(
        &self,
        sheets: &[Sheet],
        rates: &RateConfig,
    ) -> Result<BudgetResult> {
        let used: u64 = sheets.iter().map(Sheet::used_area).sum();
        let total_area_m2 = used as f64 / MM2_PER_M2;
        self.check_inputs(total_area_m2, rates)?;

        let sheets_used = u32::try_from(sheets.len()).unwrap_or(u32::MAX);
        Ok(self.price(sheets_used, total_area_m2, rates))
    }

    fn check_inputs(&self, total_area_m2: f64, rates: &RateConfig) -> Result<()> {
        if !(total_area_m2.is_finite() && total_area_m2 > 0.0) {
            return Err(Error::NonPositiveArea(total_area_m2));
        }
        rates.validate()?;
        self.config.validate()
    }

    fn price(&self, sheets_used: u32, total_area_m2: f64, rates: &RateConfig) -> BudgetResult {
        let material = f64::from(sheets_used) * rates.price_per_sheet;
        let hardware = material * self.config.hardware_ratio;
        let other = (material + hardware) * self.config.other_ratio;
        let labor = total_area_m2 * rates.labor_per_square_meter;

        let total = material + hardware + other + labor;
        let final_price = total * rates.markup_multiplier;
        let margin = (final_price - total) / final_price * 100.0;

        log::debug!(
            "budget: {:.3} m2, {} sheet(s), total {:.2}, final {:.2}",
            total_area_m2,
            sheets_used,
            total,
            final_price
        );

        BudgetResult {
            materials: vec![
                MaterialCost::new("Sheets", material),
                MaterialCost::new("Hardware", hardware),
                MaterialCost::new("Other", other),
            ],
            labor,
            total,
            final_price,
            margin,
            sheets_used,
            total_area_m2,
        }
    }
}

/// `ceil(area / sheet_area)`, never less than one sheet for a positive area.
pub fn sheets_for_area(total_area_m2: f64, effective_sheet_area_m2: f64) -> u32 {
    let ratio = total_area_m2 / effective_sheet_area_m2;
    ((ratio - SHEET_RATIO_EPSILON).ceil() as u32).max(1)
}

/// Prices `total_area_m2` with the default [`BudgetConfig`].
pub fn calculate(total_area_m2: f64, rates: &RateConfig) -> Result<BudgetResult> {
    BudgetEngine::default().calculate(total_area_m2, rates)
}
