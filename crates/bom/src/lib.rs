//! Bill-of-materials extraction for cutlist.
//!
//! This crate provides:
//! - A line-oriented parser turning `qty x width x height` text into parts
//! - Wood-grain material classification by keyword

mod parser;

pub use parser::{extract, BomParser, DEFAULT_WOOD_KEYWORDS};
