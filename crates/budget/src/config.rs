//! Rate and budget configuration.

use cutlist_core::{Error, Result, SheetSpec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Commercial rates supplied by the workshop.
///
/// `Default` is all zeros, meaning "not configured"; [`RateConfig::validate`]
/// rejects it. When deserializing, missing fields fall back to zero so they
/// are reported by validation instead of being silently priced at nothing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RateConfig {
    /// Price of one stock sheet.
    pub price_per_sheet: f64,

    /// Multiplier applied to the total cost to get the final price.
    pub markup_multiplier: f64,

    /// Labor charged per m² of cut parts.
    pub labor_per_square_meter: f64,
}

impl RateConfig {
    pub fn new(price_per_sheet: f64, markup_multiplier: f64, labor_per_square_meter: f64) -> Self {
        Self {
            price_per_sheet,
            markup_multiplier,
            labor_per_square_meter,
        }
    }

    /// Rejects missing (zero), negative or non-finite rates.
    pub fn validate(&self) -> Result<()> {
        require_positive("price_per_sheet", self.price_per_sheet)?;
        require_positive("markup_multiplier", self.markup_multiplier)?;
        require_positive("labor_per_square_meter", self.labor_per_square_meter)
    }
}

/// Ratios and stock constants of the cost model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BudgetConfig {
    /// Usable part area one stock sheet yields, in m².
    pub effective_sheet_area_m2: f64,

    /// Hardware cost as a fraction of the sheet cost.
    pub hardware_ratio: f64,

    /// Miscellaneous cost as a fraction of sheets plus hardware.
    pub other_ratio: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            effective_sheet_area_m2: SheetSpec::STANDARD.area_m2(),
            hardware_ratio: 0.22,
            other_ratio: 0.08,
        }
    }
}

impl BudgetConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the usable area per stock sheet.
    pub fn with_effective_sheet_area(mut self, area_m2: f64) -> Self {
        self.effective_sheet_area_m2 = area_m2;
        self
    }

    /// Derives the usable area from a sheet size.
    pub fn with_sheet(self, sheet: &SheetSpec) -> Self {
        self.with_effective_sheet_area(sheet.area_m2())
    }

    /// Sets the hardware ratio.
    pub fn with_hardware_ratio(mut self, ratio: f64) -> Self {
        self.hardware_ratio = ratio;
        self
    }

    /// Sets the miscellaneous cost ratio.
    pub fn with_other_ratio(mut self, ratio: f64) -> Self {
        self.other_ratio = ratio;
        self
    }

    /// The sheet area must be positive; ratios may be zero but not negative.
    pub fn validate(&self) -> Result<()> {
        require_positive("effective_sheet_area_m2", self.effective_sheet_area_m2)?;
        require_non_negative("hardware_ratio", self.hardware_ratio)?;
        require_non_negative("other_ratio", self.other_ratio)
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRateConfig(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRateConfig(format!(
            "{} must not be negative, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_config() {
        let config = BudgetConfig::default();
        assert!((config.effective_sheet_area_m2 - 5.06).abs() < 1e-9);
        assert_eq!(config.hardware_ratio, 0.22);
        assert_eq!(config.other_ratio, 0.08);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BudgetConfig::new()
            .with_sheet(&SheetSpec::new(2730, 1830))
            .with_hardware_ratio(0.3)
            .with_other_ratio(0.0);

        assert!((config.effective_sheet_area_m2 - 4.9959).abs() < 1e-9);
        assert_eq!(config.hardware_ratio, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rate_validation() {
        assert!(RateConfig::new(300.0, 2.0, 50.0).validate().is_ok());

        let err = RateConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("price_per_sheet"));

        let err = RateConfig::new(300.0, 0.0, 50.0).validate().unwrap_err();
        assert!(err.to_string().contains("markup_multiplier"));

        let err = RateConfig::new(300.0, 2.0, -1.0).validate().unwrap_err();
        assert!(err.to_string().contains("labor_per_square_meter"));

        assert!(RateConfig::new(f64::NAN, 2.0, 50.0).validate().is_err());
    }

    #[test]
    fn test_budget_config_validation() {
        assert!(BudgetConfig::new()
            .with_effective_sheet_area(0.0)
            .validate()
            .is_err());
        assert!(BudgetConfig::new()
            .with_hardware_ratio(-0.1)
            .validate()
            .is_err());
    }
}
