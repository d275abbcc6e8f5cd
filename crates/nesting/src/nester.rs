//! Shelf nesting solver.

use crate::placement_utils::{
    expand_parts, group_by_material, sort_tallest_first, validate_parts, UnitPiece,
};
use cutlist_core::solver::{NestingConfig, Solver};
use cutlist_core::{Error, MaterialLayout, Part, Result, Sheet, SheetBuilder};

/// Shelf-based Best-Fit-Decreasing-Height nester.
///
/// Pieces are sorted tallest first and dropped into the first shelf that
/// takes them (first-fit across sheets and shelves in creation order). When no
/// shelf fits, a new shelf is opened below the last one on the current sheet,
/// and only when that sheet is full is a new sheet started.
#[derive(Debug, Clone, Default)]
pub struct ShelfNester {
    config: NestingConfig,
}

impl ShelfNester {
    /// Creates a new nester with the given configuration.
    pub fn new(config: NestingConfig) -> Self {
        Self { config }
    }

    /// Packs every unit of `parts` and returns the sheets in creation order.
    ///
    /// Fails with [`Error::UnplaceablePart`] as soon as a piece cannot fit
    /// the usable area, rather than opening sheets for it.
    pub fn pack(&self, parts: &[Part]) -> Result<Vec<Sheet>> {
        self.config.validate()?;
        validate_parts(parts)?;

        let mut units = expand_parts(parts);
        sort_tallest_first(&mut units);

        let mut sheets: Vec<SheetBuilder> = Vec::new();
        for unit in &units {
            let part = &parts[unit.part_idx];
            self.ensure_placeable(unit, part)?;

            let (sheet_idx, shelf_idx) = match self.find_shelf(&sheets, unit) {
                Some(slot) => slot,
                None => match self.open_shelf(&mut sheets, unit) {
                    Some(slot) => slot,
                    None => self.open_sheet(&mut sheets, unit, part)?,
                },
            };

            sheets[sheet_idx].place(shelf_idx, part, unit.instance, unit.rotated)?;
        }

        log::debug!(
            "packed {} pieces onto {} sheet(s)",
            units.len(),
            sheets.len()
        );
        Ok(sheets.into_iter().map(SheetBuilder::finish).collect())
    }

    /// Packs wood-grain and white parts onto separate stock.
    ///
    /// Returns one layout per material present, `Wood` first. Sheet ids start
    /// at 1 within each layout.
    pub fn pack_by_material(&self, parts: &[Part]) -> Result<Vec<MaterialLayout>> {
        validate_parts(parts)?;

        group_by_material(parts)
            .into_iter()
            .map(|(material, group)| {
                let sheets = self.pack(&group)?;
                log::debug!("{} board: {} sheet(s)", material, sheets.len());
                Ok(MaterialLayout { material, sheets })
            })
            .collect()
    }

    fn ensure_placeable(&self, unit: &UnitPiece, part: &Part) -> Result<()> {
        let usable_width = self.config.usable_width();
        let usable_height = self.config.usable_height();

        if unit.width <= usable_width && unit.height <= usable_height {
            return Ok(());
        }

        log::warn!(
            "part {} ({}x{} mm, {}) exceeds usable sheet area {}x{} mm",
            part.id(),
            unit.width,
            unit.height,
            part.material(),
            usable_width,
            usable_height
        );
        Err(self.unplaceable(unit, part))
    }

    fn unplaceable(&self, unit: &UnitPiece, part: &Part) -> Error {
        Error::UnplaceablePart {
            id: format!("{}#{}", part.id(), unit.instance),
            width: unit.width,
            height: unit.height,
            usable_width: self.config.usable_width(),
            usable_height: self.config.usable_height(),
        }
    }

    /// First existing shelf, in sheet then shelf creation order, that takes
    /// the piece.
    fn find_shelf(&self, sheets: &[SheetBuilder], unit: &UnitPiece) -> Option<(usize, usize)> {
        let usable_width = self.config.usable_width();

        sheets.iter().enumerate().find_map(|(sheet_idx, sheet)| {
            sheet
                .shelves()
                .iter()
                .position(|shelf| {
                    shelf.accepts(unit.width, unit.height, self.config.kerf, usable_width)
                })
                .map(|shelf_idx| (sheet_idx, shelf_idx))
        })
    }

    /// Opens a shelf below the last one on the current sheet.
    fn open_shelf(&self, sheets: &mut [SheetBuilder], unit: &UnitPiece) -> Option<(usize, usize)> {
        let sheet_idx = sheets.len().checked_sub(1)?;
        let sheet = &mut sheets[sheet_idx];
        let shelf_idx = sheet.open_shelf(unit.height)?;

        log::trace!(
            "sheet {}: shelf {} at y={} (height {})",
            sheet.id(),
            shelf_idx,
            sheet.shelves()[shelf_idx].origin_y,
            unit.height
        );
        Some((sheet_idx, shelf_idx))
    }

    fn open_sheet(
        &self,
        sheets: &mut Vec<SheetBuilder>,
        unit: &UnitPiece,
        part: &Part,
    ) -> Result<(usize, usize)> {
        let mut sheet = SheetBuilder::new(sheets.len() + 1, &self.config);
        let shelf_idx = sheet
            .open_shelf(unit.height)
            .ok_or_else(|| self.unplaceable(unit, part))?;
        log::debug!("opened sheet {}", sheet.id());
        sheets.push(sheet);
        Ok((sheets.len() - 1, shelf_idx))
    }
}

impl Solver for ShelfNester {
    fn config(&self) -> &NestingConfig {
        &self.config
    }

    fn solve(&self, parts: &[Part]) -> Result<Vec<Sheet>> {
        self.pack(parts)
    }
}

/// Packs `parts` onto `sheet_width x sheet_height` stock with the given kerf
/// and trim, all in millimetres.
pub fn pack(
    parts: &[Part],
    sheet_width: u32,
    sheet_height: u32,
    kerf: u32,
    trim: u32,
) -> Result<Vec<Sheet>> {
    let config = NestingConfig::new()
        .with_sheet(sheet_width, sheet_height)
        .with_kerf(kerf)
        .with_trim(trim);
    ShelfNester::new(config).pack(parts)
}
