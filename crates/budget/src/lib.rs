//! Budget engine for nested cutlist jobs.
//!
//! Given the part area of a job (or the nested layout itself) and the
//! workshop's rates, this crate computes:
//! - Sheet, hardware and miscellaneous material costs
//! - Labor cost by cut area
//! - Final price and margin after markup
//!
//! # Example
//!
//! ```rust
//! use cutlist_budget::{calculate, RateConfig};
//!
//! let rates = RateConfig::new(300.0, 2.0, 50.0);
//! let budget = calculate(5.0, &rates).unwrap();
//! assert_eq!(budget.sheets_used, 1);
//! assert!((budget.margin - 50.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod cost;
pub mod result;

pub use config::{BudgetConfig, RateConfig};
pub use cost::{calculate, sheets_for_area, BudgetEngine};
pub use result::{BudgetResult, MaterialCost};
