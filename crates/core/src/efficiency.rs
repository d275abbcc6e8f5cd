//! Sheet utilization.

use crate::result::Sheet;

/// Utilization of `sheet` in whole percent:
/// `round(used_area / (sheet_width * sheet_height) * 100)`.
///
/// Returns 0 for an empty sheet or a zero-area stock size. The result never
/// exceeds 100, even if the sheet was packed for larger stock.
pub fn efficiency(sheet: &Sheet, sheet_width: u32, sheet_height: u32) -> u32 {
    if sheet.is_empty() {
        return 0;
    }
    percent(
        sheet.used_area(),
        u64::from(sheet_width) * u64::from(sheet_height),
    )
}

/// `round(part / whole * 100)` with halves rounded up, clamped to `[0, 100]`.
pub(crate) fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u128::from(part.min(whole));
    let whole = u128::from(whole);
    ((part * 200 + whole) / (whole * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Part;
    use crate::result::SheetBuilder;
    use crate::solver::NestingConfig;

    fn builder() -> SheetBuilder {
        let config = NestingConfig::new()
            .with_sheet(2750, 1840)
            .with_kerf(0)
            .with_trim(0);
        SheetBuilder::new(1, &config)
    }

    fn sheet_with(width: u32, height: u32) -> Sheet {
        let mut builder = builder();
        let shelf = builder.open_shelf(height).unwrap();
        builder
            .place(shelf, &Part::new("A", width, height), 1, false)
            .unwrap();
        builder.finish()
    }

    #[test]
    fn test_empty_sheet_is_zero() {
        assert_eq!(efficiency(&builder().finish(), 2750, 1840), 0);
    }

    #[test]
    fn test_rounding() {
        // 1/8 = 12.5% rounds up
        assert_eq!(efficiency(&sheet_with(100, 100), 200, 400), 13);
        // 1/3 = 33.3%
        assert_eq!(efficiency(&sheet_with(100, 100), 300, 100), 33);
        // 2/3 = 66.7%
        assert_eq!(efficiency(&sheet_with(200, 100), 300, 100), 67);
    }

    #[test]
    fn test_full_sheet() {
        assert_eq!(efficiency(&sheet_with(2750, 1840), 2750, 1840), 100);
    }

    #[test]
    fn test_clamped_and_zero_area() {
        assert_eq!(efficiency(&sheet_with(500, 500), 100, 100), 100);
        assert_eq!(efficiency(&sheet_with(500, 500), 0, 100), 0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 10), 0);
        assert_eq!(percent(5, 10), 50);
        assert_eq!(percent(1, 0), 0);
    }
}
