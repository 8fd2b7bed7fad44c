use serde::{Deserialize, Serialize};

use crate::json::FromRecord;

/// An axis-aligned rectangle described only by its size.
///
/// Sizes are `f64`, so JSON output always has a fraction (`10.0`, not `10`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle with the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn get_area(&self) -> f64 {
        self.width * self.height
    }
}

/// The plain data shape of a serialized [`Rectangle`].
///
/// Parsed JSON lands here first; [`FromRecord`] then builds the rectangle
/// through [`Rectangle::new`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectangleRecord {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl FromRecord for Rectangle {
    type Record = RectangleRecord;

    fn from_record(record: Self::Record) -> Self {
        Self::new(record.width, record.height)
    }
}
