//! Sheet layout representation.

use crate::efficiency::{efficiency, percent};
use crate::geometry::{Material, Part, MM2_PER_M2};
use crate::placement::{PlacedPiece, PlacementStats};
use crate::solver::{NestingConfig, SheetSpec};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A horizontal strip of a sheet holding pieces no taller than itself.
///
/// `origin_y` and `used_width` are measured inside the trimmed area, so the
/// first shelf of a sheet starts at 0 regardless of the trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shelf {
    pub origin_y: u32,
    pub height: u32,
    /// Width consumed so far, kerf after every piece included.
    pub used_width: u32,
}

impl Shelf {
    pub fn new(origin_y: u32, height: u32) -> Self {
        Self {
            origin_y,
            height,
            used_width: 0,
        }
    }

    /// Returns true if a `width x height` piece plus its trailing kerf fits.
    pub fn accepts(&self, width: u32, height: u32, kerf: u32, usable_width: u32) -> bool {
        height <= self.height
            && u64::from(self.used_width) + u64::from(width) + u64::from(kerf)
                <= u64::from(usable_width)
    }

    /// First y below this shelf, kerf included.
    pub fn next_origin_y(&self, kerf: u32) -> u64 {
        u64::from(self.origin_y) + u64::from(self.height) + u64::from(kerf)
    }
}

/// One stock sheet and the pieces cut from it.
///
/// A `Sheet` is read-only. Layouts are built through [`SheetBuilder`], which
/// keeps `used_area` equal to the summed nominal area of `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    id: usize,
    items: Vec<PlacedPiece>,
    shelves: Vec<Shelf>,
    used_area: u64,
}

impl Sheet {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn items(&self) -> &[PlacedPiece] {
        &self.items
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Nominal area of all placed pieces in mm².
    pub fn used_area(&self) -> u64 {
        self.used_area
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Material utilization in whole percent for a sheet of `spec` size.
    pub fn efficiency(&self, spec: &SheetSpec) -> u32 {
        efficiency(self, spec.width, spec.height)
    }

    /// Returns the first pair of item indices whose footprints overlap.
    pub fn find_overlap(&self) -> Option<(usize, usize)> {
        for (i, a) in self.items.iter().enumerate() {
            for (j, b) in self.items.iter().enumerate().skip(i + 1) {
                if a.rect().intersects(&b.rect()) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Computes placement statistics for this sheet.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_pieces(&self.items)
    }
}

/// A sheet under construction.
///
/// Pieces can only be appended to the right end of a shelf, and shelves only
/// open below the last one, so every placed piece stays inside the trimmed
/// area and clear of the others. [`SheetBuilder::finish`] hands back the
/// read-only [`Sheet`].
#[derive(Debug, Clone)]
pub struct SheetBuilder {
    sheet: Sheet,
    usable_width: u32,
    usable_height: u32,
    kerf: u32,
    trim: u32,
}

impl SheetBuilder {
    /// Starts an empty sheet packed with `config`. Ids are 1-based in
    /// creation order.
    pub fn new(id: usize, config: &NestingConfig) -> Self {
        Self {
            sheet: Sheet {
                id,
                items: Vec::new(),
                shelves: Vec::new(),
                used_area: 0,
            },
            usable_width: config.usable_width(),
            usable_height: config.usable_height(),
            kerf: config.kerf,
            trim: config.trim,
        }
    }

    pub fn id(&self) -> usize {
        self.sheet.id
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.sheet.shelves
    }

    /// Y (inside the trim) where the next shelf would start.
    pub fn next_shelf_y(&self) -> u64 {
        self.sheet
            .shelves
            .last()
            .map_or(0, |shelf| shelf.next_origin_y(self.kerf))
    }

    /// Opens a shelf of `height` below the last one and returns its index,
    /// or `None` if it would run past the usable height.
    pub fn open_shelf(&mut self, height: u32) -> Option<usize> {
        let y = self.next_shelf_y();
        if y + u64::from(height) > u64::from(self.usable_height) {
            return None;
        }
        let origin_y = u32::try_from(y).ok()?;
        self.sheet.shelves.push(Shelf::new(origin_y, height));
        Some(self.sheet.shelves.len() - 1)
    }

    /// Appends unit `instance` of `part` to the right end of shelf `shelf`
    /// and reserves its width plus kerf.
    ///
    /// The trailing kerf is clipped at the usable edge, so a piece that
    /// exactly fills the remaining width still leaves `used_width` in range.
    pub fn place(
        &mut self,
        shelf: usize,
        part: &Part,
        instance: u32,
        rotated: bool,
    ) -> Result<&PlacedPiece> {
        let usable_width = self.usable_width;
        let sheet_id = self.sheet.id;
        let target = self.sheet.shelves.get_mut(shelf).ok_or_else(|| {
            Error::InvalidSheet(format!("sheet {} has no shelf {}", sheet_id, shelf))
        })?;

        let piece = PlacedPiece::new(
            part,
            instance,
            target.used_width + self.trim,
            target.origin_y + self.trim,
            rotated,
        );
        if piece.height > target.height
            || u64::from(target.used_width) + u64::from(piece.width) > u64::from(usable_width)
        {
            return Err(Error::UnplaceablePart {
                id: piece.id,
                width: piece.width,
                height: piece.height,
                usable_width: usable_width - target.used_width,
                usable_height: target.height,
            });
        }

        let remaining = usable_width - target.used_width - piece.width;
        target.used_width += piece.width + self.kerf.min(remaining);
        self.sheet.used_area += piece.area();
        self.sheet.items.push(piece);
        Ok(&self.sheet.items[self.sheet.items.len() - 1])
    }

    /// Finishes the sheet.
    pub fn finish(self) -> Sheet {
        self.sheet
    }
}

/// Sheets cut from one board material.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialLayout {
    pub material: Material,
    pub sheets: Vec<Sheet>,
}

/// Summary statistics for a nested layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSummary {
    /// Number of stock sheets consumed.
    pub sheets_used: usize,
    /// Number of placed pieces across all sheets.
    pub pieces_placed: usize,
    /// Nominal area of the placed pieces in m².
    pub used_area_m2: f64,
    /// Gross stock area consumed in m².
    pub stock_area_m2: f64,
    /// `stock_area_m2 - used_area_m2`.
    pub waste_area_m2: f64,
    /// Overall utilization in whole percent.
    pub efficiency_percent: u32,
    /// Utilization of each sheet in creation order.
    pub sheet_efficiency: Vec<u32>,
}

impl LayoutSummary {
    /// Aggregates a layout packed on `spec` sized sheets.
    pub fn from_sheets(sheets: &[Sheet], spec: &SheetSpec) -> Self {
        let used: u64 = sheets.iter().map(Sheet::used_area).sum();
        let stock = spec.area() * sheets.len() as u64;

        Self {
            sheets_used: sheets.len(),
            pieces_placed: sheets.iter().map(|s| s.items().len()).sum(),
            used_area_m2: used as f64 / MM2_PER_M2,
            stock_area_m2: stock as f64 / MM2_PER_M2,
            waste_area_m2: stock.saturating_sub(used) as f64 / MM2_PER_M2,
            efficiency_percent: percent(used, stock),
            sheet_efficiency: sheets.iter().map(|s| s.efficiency(spec)).collect(),
        }
    }
}
