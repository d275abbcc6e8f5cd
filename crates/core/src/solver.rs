//! Solver trait and nesting configuration.

use crate::geometry::{Part, MM2_PER_M2};
use crate::result::Sheet;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stock sheet dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetSpec {
    pub width: u32,
    pub height: u32,
}

impl SheetSpec {
    /// The workshop's standard 2750 x 1840 mm MDF board.
    pub const STANDARD: SheetSpec = SheetSpec {
        width: 2750,
        height: 1840,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Gross sheet area in mm².
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Gross sheet area in m².
    pub fn area_m2(&self) -> f64 {
        self.area() as f64 / MM2_PER_M2
    }
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Engine-wide nesting parameters.
///
/// `kerf` is reserved after every piece and between shelves; `trim` is
/// removed from all four sheet edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestingConfig {
    /// Stock sheet dimensions.
    pub sheet: SheetSpec,

    /// Saw blade width in millimetres.
    pub kerf: u32,

    /// Edge trim (refile) in millimetres.
    pub trim: u32,
}

impl Default for NestingConfig {
    fn default() -> Self {
        Self {
            sheet: SheetSpec::default(),
            kerf: 3,
            trim: 10,
        }
    }
}

impl NestingConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stock sheet dimensions.
    pub fn with_sheet(mut self, width: u32, height: u32) -> Self {
        self.sheet = SheetSpec::new(width, height);
        self
    }

    /// Sets the blade kerf.
    pub fn with_kerf(mut self, kerf: u32) -> Self {
        self.kerf = kerf;
        self
    }

    /// Sets the edge trim.
    pub fn with_trim(mut self, trim: u32) -> Self {
        self.trim = trim;
        self
    }

    /// Sheet width minus both trims.
    pub fn usable_width(&self) -> u32 {
        self.sheet.width.saturating_sub(self.trim.saturating_mul(2))
    }

    /// Sheet height minus both trims.
    pub fn usable_height(&self) -> u32 {
        self.sheet.height.saturating_sub(self.trim.saturating_mul(2))
    }

    /// Rejects sheets that leave no usable area after trim, and kerfs at
    /// least as wide as the usable area.
    pub fn validate(&self) -> Result<()> {
        let (usable_width, usable_height) = (self.usable_width(), self.usable_height());
        if usable_width == 0 || usable_height == 0 {
            return Err(Error::InvalidSheet(format!(
                "{}x{} mm sheet with {} mm trim leaves no usable area",
                self.sheet.width, self.sheet.height, self.trim
            )));
        }
        if self.kerf >= usable_width.min(usable_height) {
            return Err(Error::InvalidSheet(format!(
                "{} mm kerf does not fit the {}x{} mm usable area",
                self.kerf, usable_width, usable_height
            )));
        }
        Ok(())
    }
}

/// Trait for sheet nesting solvers.
pub trait Solver {
    /// Returns the configuration the solver packs with.
    fn config(&self) -> &NestingConfig;

    /// Packs every unit of `parts` onto as few stock sheets as the heuristic
    /// finds. An empty part list yields no sheets.
    fn solve(&self, parts: &[Part]) -> Result<Vec<Sheet>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NestingConfig::default();
        assert_eq!(config.sheet, SheetSpec::STANDARD);
        assert_eq!(config.kerf, 3);
        assert_eq!(config.trim, 10);
        assert_eq!(config.usable_width(), 2730);
        assert_eq!(config.usable_height(), 1820);
    }

    #[test]
    fn test_builder() {
        let config = NestingConfig::new()
            .with_sheet(2730, 1830)
            .with_kerf(4)
            .with_trim(15);

        assert_eq!(config.sheet, SheetSpec::new(2730, 1830));
        assert_eq!(config.kerf, 4);
        assert_eq!(config.usable_width(), 2700);
        assert_eq!(config.usable_height(), 1800);
    }

    #[test]
    fn test_standard_sheet_area() {
        assert!((SheetSpec::STANDARD.area_m2() - 5.06).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_consumed_sheet() {
        let config = NestingConfig::new().with_sheet(100, 100).with_trim(50);
        assert!(matches!(config.validate(), Err(Error::InvalidSheet(_))));

        let config = NestingConfig::new().with_sheet(0, 100).with_trim(0);
        assert!(config.validate().is_err());

        assert!(NestingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_kerf() {
        let config = NestingConfig::new()
            .with_sheet(2730, 1830)
            .with_trim(10)
            .with_kerf(u32::MAX - 10);
        assert!(matches!(config.validate(), Err(Error::InvalidSheet(_))));

        // usable area is 2710 x 1810
        assert!(config.clone().with_kerf(1810).validate().is_err());
        assert!(config.with_kerf(1809).validate().is_ok());
    }
}
