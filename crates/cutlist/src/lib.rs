//! # Cutlist
//!
//! Panel nesting and budgeting for small furniture workshops.
//!
//! This crate provides:
//! - **Extraction**: `qty x width x height` BOM lines to typed parts
//! - **Nesting**: shelf-based packing of parts onto stock sheets
//! - **Budget**: material, labor and price breakdown from the same geometry
//!
//! ## Quick Start
//!
//! ```rust
//! use cutlist::bom::extract;
//! use cutlist::budget::{BudgetConfig, BudgetEngine, RateConfig};
//! use cutlist::nesting::ShelfNester;
//! use cutlist::NestingConfig;
//!
//! let parts = extract("Lateral: 2x 700x500 freijó\nBase: 1x 764x560");
//!
//! let config = NestingConfig::default();
//! let sheets = ShelfNester::new(config.clone()).pack(&parts)?;
//!
//! let engine = BudgetEngine::new(BudgetConfig::new().with_sheet(&config.sheet));
//! let budget = engine.calculate_for_layout(&sheets, &RateConfig::new(320.0, 1.8, 45.0))?;
//! assert_eq!(budget.sheets_used, 1);
//! # Ok::<(), cutlist::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `bom` (default): BOM text extraction
//! - `nesting` (default): shelf nesting
//! - `budget` (default): budget engine
//! - `serde`: Serialization support

/// Core types and the efficiency calculator.
pub use cutlist_core as core;

/// BOM text extraction.
#[cfg(feature = "bom")]
pub use cutlist_bom as bom;

/// Shelf nesting.
#[cfg(feature = "nesting")]
pub use cutlist_nesting as nesting;

/// Budget engine.
#[cfg(feature = "budget")]
pub use cutlist_budget as budget;

// Re-export commonly used types at root level
pub use cutlist_core::{
    efficiency, Error, Material, NestingConfig, Part, PlacedPiece, Result, Sheet, SheetSpec,
};
