//! Part and material definitions.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a part as authored in the bill of materials.
pub type PartId = String;

/// Square millimetres in one square metre.
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Board finish, which decides the rotation policy during nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    /// Wood-grain board. The grain direction is fixed, so pieces never rotate.
    Wood,
    /// Plain white board. Pieces may rotate so that `width >= height`.
    #[default]
    White,
}

impl Material {
    /// Returns true if pieces of this material may be rotated by 90 degrees.
    pub fn allows_rotation(self) -> bool {
        matches!(self, Material::White)
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Material::Wood => "wood",
            Material::White => "white",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A rectangular part specification with a quantity.
///
/// Dimensions are integer millimetres. A `Part` never carries a position;
/// placement produces a separate [`PlacedPiece`](crate::PlacedPiece) per unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    id: PartId,
    name: String,
    width: u32,
    height: u32,
    quantity: u32,
    material: Material,
}

impl Part {
    /// Creates a single white part named after its id.
    pub fn new(id: impl Into<PartId>, width: u32, height: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            width,
            height,
            quantity: 1,
            material: Material::default(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of identical units to cut.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the board material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn id(&self) -> &PartId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn material(&self) -> Material {
        self.material
    }

    /// Nominal area of one unit in mm².
    pub fn unit_area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Nominal area of all units in mm².
    pub fn total_area(&self) -> u64 {
        self.unit_area() * u64::from(self.quantity)
    }

    /// Checks `width > 0 && height > 0 && quantity >= 1`.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidPart(format!(
                "{}: dimensions must be positive, got {}x{}",
                self.id, self.width, self.height
            )));
        }
        if self.quantity == 0 {
            return Err(Error::InvalidPart(format!(
                "{}: quantity must be at least 1",
                self.id
            )));
        }
        Ok(())
    }
}

/// Total nominal area of a part list in m², quantities included.
pub fn total_area_m2(parts: &[Part]) -> f64 {
    let mm2: u64 = parts.iter().map(Part::total_area).sum();
    mm2 as f64 / MM2_PER_M2
}

/// Axis-aligned rectangle in sheet coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns true if the interiors overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
