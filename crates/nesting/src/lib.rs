//! # Cutlist Nesting
//!
//! Rectangle nesting (cutting stock) for panel furniture.
//!
//! This crate packs rectangular parts onto a sequence of stock sheets with a
//! deterministic shelf-based Best-Fit-Decreasing-Height heuristic.
//!
//! ## Features
//!
//! - Blade kerf reserved after every piece and between shelves
//! - Edge trim removed from all four sheet edges
//! - Material-dependent rotation: wood grain never turns, white board is
//!   turned landscape
//! - Fail-fast detection of parts larger than the usable area
//! - Optional per-material packing onto separate stock
//!
//! ## Quick Start
//!
//! ```rust
//! use cutlist_nesting::{NestingConfig, Part, ShelfNester};
//!
//! let parts = vec![Part::new("side", 700, 500).with_quantity(3)];
//!
//! let config = NestingConfig::new()
//!     .with_sheet(2750, 1840)
//!     .with_kerf(3)
//!     .with_trim(10);
//!
//! let sheets = ShelfNester::new(config.clone()).pack(&parts).unwrap();
//!
//! for sheet in &sheets {
//!     println!("sheet {}: {} pieces, {}%",
//!         sheet.id(),
//!         sheet.items().len(),
//!         sheet.efficiency(&config.sheet));
//! }
//! ```

pub mod nester;
pub mod placement_utils;

// Re-exports
pub use cutlist_core::{
    efficiency, Error, LayoutSummary, Material, MaterialLayout, NestingConfig, Part, PlacedPiece,
    Result, Sheet, SheetSpec, Shelf, Solver,
};
pub use nester::{pack, ShelfNester};
