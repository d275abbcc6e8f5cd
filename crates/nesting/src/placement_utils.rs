//! Expansion, orientation and ordering of unit pieces before placement.

use cutlist_core::{Error, Material, Part, Result};
use std::collections::HashSet;

/// One unit of a part, oriented and ready to place.
///
/// Maps a flat piece index back to the source part and its 1-based
/// repetition number (when `quantity > 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPiece {
    /// Index into the parts slice.
    pub part_idx: usize,
    /// Instance number within this part's quantity, starting at 1.
    pub instance: u32,
    /// Width as it will be placed.
    pub width: u32,
    /// Height as it will be placed.
    pub height: u32,
    /// Whether `width`/`height` are swapped relative to the part.
    pub rotated: bool,
}

/// Orientation a part is placed in: `(width, height, rotated)`.
///
/// Wood keeps the supplied orientation so the grain runs as drawn. White
/// turns so that `width >= height`.
pub fn orient(part: &Part) -> (u32, u32, bool) {
    let (w, h) = (part.width(), part.height());
    match part.material() {
        Material::White if h > w => (h, w, true),
        _ => (w, h, false),
    }
}

/// Expands every part into `quantity` oriented unit pieces, in input order.
pub fn expand_parts(parts: &[Part]) -> Vec<UnitPiece> {
    let total: usize = parts.iter().map(|p| p.quantity() as usize).sum();
    let mut units = Vec::with_capacity(total);

    for (part_idx, part) in parts.iter().enumerate() {
        let (width, height, rotated) = orient(part);
        for instance in 1..=part.quantity() {
            units.push(UnitPiece {
                part_idx,
                instance,
                width,
                height,
                rotated,
            });
        }
    }

    units
}

/// Sorts tallest first, wider first on ties.
///
/// The sort is stable, so pieces with equal dimensions keep their input
/// order and repeated runs produce identical layouts.
pub fn sort_tallest_first(units: &mut [UnitPiece]) {
    units.sort_by(|a, b| b.height.cmp(&a.height).then(b.width.cmp(&a.width)));
}

/// Validates each part and rejects duplicate ids, which would make piece ids
/// ambiguous.
pub fn validate_parts(parts: &[Part]) -> Result<()> {
    let mut seen = HashSet::with_capacity(parts.len());
    for part in parts {
        part.validate()?;
        if !seen.insert(part.id().as_str()) {
            return Err(Error::InvalidPart(format!(
                "duplicate part id {}",
                part.id()
            )));
        }
    }
    Ok(())
}

/// Splits parts by material, keeping the input order inside each group.
/// Groups are returned in `Wood`, `White` order and empty groups are omitted.
pub fn group_by_material(parts: &[Part]) -> Vec<(Material, Vec<Part>)> {
    [Material::Wood, Material::White]
        .into_iter()
        .filter_map(|material| {
            let group: Vec<Part> = parts
                .iter()
                .filter(|p| p.material() == material)
                .cloned()
                .collect();
            (!group.is_empty()).then_some((material, group))
        })
        .collect()
}
