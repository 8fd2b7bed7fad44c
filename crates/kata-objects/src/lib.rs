//! Plain records and JSON helpers.
//!
//! # Scope
//!
//! This crate implements:
//! - **Rectangle** - a width/height record with an area operation
//! - **JSON helpers** - serialize any `Serialize` value to text, and rebuild
//!   a typed value from JSON text through its normal constructor

/// JSON serialization helpers.
pub mod json;
/// The rectangle record.
pub mod rectangle;

pub use json::{FromRecord, from_json, get_json, get_json_pretty};
pub use rectangle::{Rectangle, RectangleRecord};
