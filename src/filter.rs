//! Record filtering
//!
//! Filtering is a pure pass: it never mutates a record, only selects a
//! subsequence of the dataset, preserving the original relative order.
//! With no criteria set the dataset comes back as an independent copy.

use crate::types::{Dataset, TimeZoneRecord};
use serde::{Deserialize, Serialize};

/// Filter criteria for the fetched dataset.
///
/// Both criteria are optional and independent; when both are set the result
/// must satisfy both (AND composition). Application order does not affect
/// the outcome.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive exact match against the record's `value` field
    #[serde(default)]
    pub name: Option<String>,

    /// Absolute-value equality against the record's `offset` field, so
    /// `offset: 12` matches both UTC+12 and UTC-12 zones
    #[serde(default)]
    pub offset: Option<i64>,
}

impl FilterCriteria {
    /// True if neither criterion is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.offset.is_none()
    }
}

/// Apply the criteria to a dataset, producing the selected subsequence.
///
/// Records missing the field an active criterion inspects (or carrying it
/// with the wrong type) are dropped by that criterion.
pub fn apply_filters(dataset: &Dataset, criteria: &FilterCriteria) -> Dataset {
    let mut filtered: Dataset = dataset.clone();

    if let Some(name) = &criteria.name {
        tracing::info!(name = %name, "applying name filter");
        let wanted = name.to_lowercase();
        filtered.retain(|record| matches_name(record, &wanted));
    }

    if let Some(offset) = criteria.offset {
        tracing::info!(offset, "applying offset filter");
        filtered.retain(|record| matches_offset(record, offset));
    }

    tracing::info!(records = filtered.len(), "records after filtering");
    filtered
}

fn matches_name(record: &TimeZoneRecord, wanted_lower: &str) -> bool {
    record
        .value()
        .is_some_and(|value| value.to_lowercase() == wanted_lower)
}

fn matches_offset(record: &TimeZoneRecord, wanted: i64) -> bool {
    record
        .offset()
        .is_some_and(|offset| offset.abs() == (wanted as f64).abs())
}
