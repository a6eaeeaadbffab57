//! The publication log: which (date, slot) pairs have already been posted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ScheduleError, Slot};

/// Persisted record of completed publishes, keyed by date then slot.
///
/// Serialized as `{"YYYY-MM-DD": {"<slot>": true}}`, the exact shape the log
/// object carries in the bucket. An absent date or slot means "not posted".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationLog(BTreeMap<NaiveDate, BTreeMap<Slot, bool>>);

impl PublicationLog {
    /// Parse the log from its JSON representation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize the log for storage. Pretty-printed so the object stays
    /// readable when operators inspect it by hand.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ScheduleError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Whether `slot` on `date` has already been published.
    pub fn is_posted(&self, date: NaiveDate, slot: Slot) -> bool {
        self.0
            .get(&date)
            .and_then(|slots| slots.get(&slot))
            .copied()
            .unwrap_or(false)
    }

    /// Record a successful publish of `slot` on `date`.
    pub fn mark_posted(&mut self, date: NaiveDate, slot: Slot) {
        self.0.entry(date).or_default().insert(slot, true);
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_log_reports_nothing_posted() {
        let log = PublicationLog::default();
        assert!(log.is_empty());
        assert!(!log.is_posted(date("2024-05-01"), Slot::Day));
    }

    #[test]
    fn mark_then_query() {
        let mut log = PublicationLog::default();
        log.mark_posted(date("2024-05-01"), Slot::Day);

        assert!(log.is_posted(date("2024-05-01"), Slot::Day));
        assert!(!log.is_posted(date("2024-05-01"), Slot::Morning));
        assert!(!log.is_posted(date("2024-05-02"), Slot::Day));
    }

    #[test]
    fn serializes_to_date_slot_shape() {
        let mut log = PublicationLog::default();
        log.mark_posted(date("2024-05-01"), Slot::Day);

        let value: serde_json::Value =
            serde_json::from_slice(&log.to_bytes().unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"2024-05-01": {"day": true}}));
    }

    #[test]
    fn parses_existing_log_object() {
        let log = PublicationLog::from_slice(
            br#"{"2024-05-01": {"day": true, "morning": true}}"#,
        )
        .unwrap();

        assert!(log.is_posted(date("2024-05-01"), Slot::Day));
        assert!(log.is_posted(date("2024-05-01"), Slot::Morning));
        assert!(!log.is_posted(date("2024-05-01"), Slot::Evening));
    }

    #[test]
    fn rejects_malformed_log() {
        assert!(PublicationLog::from_slice(b"[]").is_err());
        assert!(PublicationLog::from_slice(b"not json").is_err());
    }
}
