//! Core data types for the timezone dataset
//!
//! Records arrive as JSON objects from the upstream source. The key set is
//! determined by the source and preserved verbatim (and in order) so the
//! CSV output can reproduce the upstream columns exactly; the crate enables
//! `serde_json/preserve_order` for this reason. No schema validation is
//! performed at parse time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered sequence of timezone records, fetched atomically per run
pub type Dataset = Vec<TimeZoneRecord>;

/// One timezone entry from the source dataset.
///
/// The upstream schema carries `value` (canonical name), `abbr`, `offset`
/// (hours from UTC, possibly fractional), `isdst`, `text`, and `utc` (list
/// of IANA zone identifiers), but any key set the source produces is kept
/// as-is. Records are immutable once fetched; filtering only selects them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeZoneRecord(Map<String, Value>);

impl TimeZoneRecord {
    /// The canonical name field, if present and a string
    pub fn value(&self) -> Option<&str> {
        self.0.get("value").and_then(Value::as_str)
    }

    /// The UTC offset in hours, if present and numeric.
    ///
    /// Returned as `f64` because the upstream data contains fractional
    /// offsets (e.g. 5.75 for Nepal).
    pub fn offset(&self) -> Option<f64> {
        self.0.get("offset").and_then(Value::as_f64)
    }

    /// Field names in the record's insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for TimeZoneRecord {
    fn from(fields: Map<String, Value>) -> Self {
        TimeZoneRecord(fields)
    }
}
