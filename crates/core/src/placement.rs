//! Placement representation for positioned pieces.

use crate::geometry::{Material, Part, PartId, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One unit of a [`Part`] placed on a sheet.
///
/// Coordinates are millimetres from the sheet's top-left corner and already
/// include the edge trim. `width`/`height` are the dimensions as placed, so
/// for a rotated piece they are swapped relative to the source part.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    /// Unique id within a layout: `"{part_id}#{instance}"`.
    pub id: String,
    /// Id of the source part.
    pub part_id: PartId,
    /// Display name copied from the source part.
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Whether the piece was turned 90 degrees relative to its source part.
    pub rotated: bool,
    pub material: Material,
}

impl PlacedPiece {
    /// Places unit `instance` (1-based) of `part` with the given orientation.
    pub fn new(part: &Part, instance: u32, x: u32, y: u32, rotated: bool) -> Self {
        let (width, height) = if rotated {
            (part.height(), part.width())
        } else {
            (part.width(), part.height())
        };

        Self {
            id: format!("{}#{}", part.id(), instance),
            part_id: part.id().clone(),
            name: part.name().to_string(),
            x,
            y,
            width,
            height,
            rotated,
            material: part.material(),
        }
    }

    /// Nominal area in mm².
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Footprint on the sheet.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Placement statistics for a set of placed pieces.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placed pieces.
    pub count: usize,
    /// Number of pieces turned 90 degrees.
    pub rotated_count: usize,
    /// Number of wood-grain pieces.
    pub wood_count: usize,
    /// Number of white pieces.
    pub white_count: usize,
    /// Pieces per source part.
    pub part_distribution: std::collections::BTreeMap<PartId, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placed pieces.
    pub fn from_pieces<'a>(pieces: impl IntoIterator<Item = &'a PlacedPiece>) -> Self {
        let mut stats = Self::default();

        for p in pieces {
            stats.count += 1;
            if p.rotated {
                stats.rotated_count += 1;
            }
            match p.material {
                Material::Wood => stats.wood_count += 1,
                Material::White => stats.white_count += 1,
            }
            *stats
                .part_distribution
                .entry(p.part_id.clone())
                .or_insert(0) += 1;
        }

        stats
    }
}
