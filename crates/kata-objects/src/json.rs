use serde::Serialize;
use serde::de::DeserializeOwned;

/// A type that can be rebuilt from a parsed JSON record.
///
/// `Record` is the plain data shape read by `serde_json`; `from_record`
/// turns it into `Self` through the type's normal constructor, so any
/// invariants the constructor enforces still hold for values read from
/// JSON.
pub trait FromRecord: Sized {
    /// Plain data shape parsed from JSON.
    type Record: DeserializeOwned;

    /// Build `Self` from a parsed record.
    fn from_record(record: Self::Record) -> Self;
}

/// Serialize `value` to compact JSON text.
///
/// Sequences keep their order and struct fields keep declaration order.
///
/// # Errors
///
/// Returns the `serde_json` error unchanged if `value` cannot be
/// serialized (for example a map with non-string keys).
pub fn get_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize `value` to indented JSON text.
///
/// # Errors
///
/// Same as [`get_json`].
pub fn get_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Parse `json` into `T::Record` and build a `T` from it.
///
/// # Errors
///
/// Returns the `serde_json` error unchanged if `json` is malformed or does
/// not match the shape of `T::Record`.
pub fn from_json<T: FromRecord>(json: &str) -> Result<T, serde_json::Error> {
    let record: T::Record = serde_json::from_str(json)?;
    Ok(T::from_record(record))
}
