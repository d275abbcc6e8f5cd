//! # Cutlist Core
//!
//! Shared types for the cutlist panel nesting and budgeting engine.
//!
//! This crate provides the data model consumed and produced by the part
//! extractor, the shelf nester and the budget engine.
//!
//! ## Core Components
//!
//! - **Parts**: [`Part`], [`Material`] - rectangular specifications with a quantity
//! - **Placement**: [`PlacedPiece`] - one immutable unit placed on a sheet
//! - **Layout**: [`Sheet`], [`Shelf`], [`MaterialLayout`], [`LayoutSummary`]
//! - **Packing**: [`SheetBuilder`] - the only way to add shelves and pieces
//! - **Solver trait**: [`Solver`] with [`NestingConfig`] and [`SheetSpec`]
//! - **Efficiency**: [`efficiency`] - per-sheet utilization percent
//!
//! ## Units
//!
//! All lengths are integer millimetres with a top-left origin. Areas are mm²
//! unless a name ends in `_m2`.
//!
//! ## Configuration
//!
//! ```rust
//! use cutlist_core::NestingConfig;
//!
//! let config = NestingConfig::new()
//!     .with_sheet(2750, 1840)
//!     .with_kerf(3)
//!     .with_trim(10);
//! assert_eq!(config.usable_width(), 2730);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod efficiency;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use efficiency::efficiency;
pub use error::{Error, Result};
pub use geometry::{total_area_m2, Material, Part, PartId, Rect, MM2_PER_M2};
pub use placement::{PlacedPiece, PlacementStats};
pub use result::{LayoutSummary, MaterialLayout, Sheet, SheetBuilder, Shelf};
pub use solver::{NestingConfig, SheetSpec, Solver};
