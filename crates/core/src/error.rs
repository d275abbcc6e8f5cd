//! Error types for cutlist.

use thiserror::Error;

/// Result type alias for cutlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while nesting parts or pricing a job.
#[derive(Debug, Error)]
pub enum Error {
    /// A part violates `width > 0 && height > 0 && quantity >= 1`.
    #[error("Invalid part: {0}")]
    InvalidPart(String),

    /// The stock sheet leaves no usable area after trim.
    #[error("Invalid sheet: {0}")]
    InvalidSheet(String),

    /// A piece does not fit the usable sheet area in any orientation its
    /// material allows.
    #[error(
        "Part {id} ({width}x{height} mm) does not fit the usable sheet area \
         ({usable_width}x{usable_height} mm)"
    )]
    UnplaceablePart {
        /// Id of the offending piece.
        id: String,
        /// Piece width as it would be placed.
        width: u32,
        /// Piece height as it would be placed.
        height: u32,
        /// Sheet width minus both trims.
        usable_width: u32,
        /// Sheet height minus both trims.
        usable_height: u32,
    },

    /// A rate or budget constant is missing, zero, negative or not finite.
    #[error("Invalid rate configuration: {0}")]
    InvalidRateConfig(String),

    /// The area to price is zero, negative or not finite.
    #[error("Total area must be positive, got {0} m2")]
    NonPositiveArea(f64),

    /// Reading a bill of materials failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
