//! The externally authored content calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ScheduleError;

/// A single authored post: a title and a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub text: String,
}

/// All posts authored for one calendar date, ordered by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub posts: Vec<Post>,
}

/// The full posting schedule, parsed from the remote calendar object.
///
/// Each day's posts align positionally with [`Slot::ALL`](crate::Slot::ALL):
/// the post at index 0 belongs to the morning slot, index 1 to the day slot,
/// and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentCalendar(Vec<DayEntry>);

impl ContentCalendar {
    /// Parse the calendar from its JSON representation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Posts authored for `date`, if any.
    ///
    /// Only the first entry for a date counts; later duplicates are ignored.
    pub fn posts_for(&self, date: NaiveDate) -> Option<&[Post]> {
        self.0
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.posts.as_slice())
    }

    /// Number of day entries in the calendar.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the calendar has no entries at all.
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
    fn parses_calendar_json() {
        let bytes = br#"[
            {"date": "2024-05-01", "posts": [
                {"title": "A", "text": "a"},
                {"title": "B", "text": "b"}
            ]}
        ]"#;

        let calendar = ContentCalendar::from_slice(bytes).unwrap();
        assert_eq!(calendar.len(), 1);

        let posts = calendar.posts_for(date("2024-05-01")).unwrap();
        assert_eq!(
            posts,
            &[
                Post {
                    title: "A".to_string(),
                    text: "a".to_string()
                },
                Post {
                    title: "B".to_string(),
                    text: "b".to_string()
                },
            ]
        );
    }

    #[test]
    fn missing_date_returns_none() {
        let calendar =
            ContentCalendar::from_slice(br#"[{"date": "2024-05-01", "posts": []}]"#).unwrap();
        assert_eq!(calendar.posts_for(date("2024-05-02")), None);
    }

    #[test]
    fn first_entry_wins_for_duplicate_dates() {
        let bytes = br#"[
            {"date": "2024-05-01", "posts": [{"title": "first", "text": "1"}]},
            {"date": "2024-05-01", "posts": [{"title": "second", "text": "2"}]}
        ]"#;

        let calendar = ContentCalendar::from_slice(bytes).unwrap();
        let posts = calendar.posts_for(date("2024-05-01")).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "first");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ContentCalendar::from_slice(b"not json").is_err());
        assert!(ContentCalendar::from_slice(br#"{"date": "2024-05-01"}"#).is_err());
    }

    #[test]
    fn rejects_bad_date_format() {
        let bytes = br#"[{"date": "05/01/2024", "posts": []}]"#;
        assert!(ContentCalendar::from_slice(bytes).is_err());
    }
}
