//! Integration tests for cutlist-core.

use cutlist_core::placement::{PlacedPiece, PlacementStats};
use cutlist_core::result::{LayoutSummary, Sheet, SheetBuilder};
use cutlist_core::solver::{NestingConfig, SheetSpec};
use cutlist_core::{efficiency, total_area_m2, Material, Part};

fn filled_sheet(id: usize, pieces: &[(u32, u32)], kerf: u32, trim: u32) -> Sheet {
    let config = NestingConfig::default().with_kerf(kerf).with_trim(trim);
    let mut builder = SheetBuilder::new(id, &config);
    let height = pieces.iter().map(|&(_, h)| h).max().unwrap_or(0);
    let shelf = builder.open_shelf(height).unwrap();
    for (i, &(w, h)) in pieces.iter().enumerate() {
        let part = Part::new(format!("P{}", i + 1), w, h);
        builder.place(shelf, &part, 1, false).unwrap();
    }
    builder.finish()
}

mod part_tests {
    use super::*;

    #[test]
    fn test_area_of_mixed_materials() {
        let parts = vec![
            Part::new("A", 2000, 500)
                .with_material(Material::Wood)
                .with_quantity(2),
            Part::new("B", 1000, 1000),
        ];
        assert!((total_area_m2(&parts) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_placed_piece_from_part_does_not_alias() {
        let part = Part::new("P1", 400, 800).with_material(Material::White);
        let placed = PlacedPiece::new(&part, 1, 10, 10, true);

        // The specification keeps its authored orientation.
        assert_eq!((part.width(), part.height()), (400, 800));
        assert_eq!((placed.width, placed.height), (800, 400));
    }
}

mod sheet_tests {
    use super::*;

    #[test]
    fn test_used_area_matches_items() {
        let sheet = filled_sheet(1, &[(700, 500), (600, 450), (300, 200)], 3, 10);
        let sum: u64 = sheet.items().iter().map(PlacedPiece::area).sum();
        assert_eq!(sheet.used_area(), sum);
        assert!(sheet.find_overlap().is_none());
    }

    #[test]
    fn test_shelf_reserves_kerf() {
        let sheet = filled_sheet(1, &[(700, 500), (700, 500)], 3, 10);
        let xs: Vec<u32> = sheet.items().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![10, 713]);
        assert_eq!(sheet.shelves()[0].used_width, 1406);
    }

    #[test]
    fn test_sheet_efficiency_matches_free_function() {
        let spec = SheetSpec::new(2730, 1830);
        let sheet = filled_sheet(1, &[(700, 500); 3], 3, 10);
        assert_eq!(sheet.efficiency(&spec), efficiency(&sheet, 2730, 1830));
        // 3 * 350_000 / 4_995_900 = 21.0%
        assert_eq!(sheet.efficiency(&spec), 21);
    }
}

mod summary_tests {
    use super::*;

    #[test]
    fn test_summary_over_sheets() {
        let config = NestingConfig::default();
        let sheets = vec![
            filled_sheet(1, &[(2000, 1000)], 3, 10),
            filled_sheet(2, &[(1000, 500)], 3, 10),
        ];

        let summary = LayoutSummary::from_sheets(&sheets, &config.sheet);
        assert_eq!(summary.sheets_used, 2);
        assert_eq!(summary.pieces_placed, 2);
        assert!((summary.used_area_m2 - 2.5).abs() < 1e-12);
        assert!((summary.stock_area_m2 - 10.12).abs() < 1e-9);
        for pct in &summary.sheet_efficiency {
            assert!(*pct <= 100);
        }
    }

    #[test]
    fn test_stats_over_sheets() {
        let sheets = vec![
            filled_sheet(1, &[(500, 400), (500, 400)], 3, 10),
            filled_sheet(2, &[(500, 400)], 3, 10),
        ];
        let stats = PlacementStats::from_pieces(sheets.iter().flat_map(|s| s.items()));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.white_count, 3);
        assert_eq!(stats.rotated_count, 0);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_sheet_serializes() {
        let sheet = filled_sheet(1, &[(700, 500)], 3, 10);
        let json = serde_json::to_string(&sheet).unwrap();
        assert!(json.contains("\"used_area\":350000"));
        let back: Sheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }
}
