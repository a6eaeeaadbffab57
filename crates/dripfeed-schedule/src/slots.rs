//! Time-of-day slots.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One of the four fixed time-of-day buckets a post can be scheduled into.
///
/// The declaration order is significant: a slot's position in [`Slot::ALL`]
/// is the index of its post within a day's post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Morning,
    Day,
    Afternoon,
    Evening,
}

impl Slot {
    /// All slots in their fixed iteration order.
    pub const ALL: [Slot; 4] = [Slot::Morning, Slot::Day, Slot::Afternoon, Slot::Evening];

    /// Hour-of-day range (half-open) covered by this slot.
    pub fn hours(self) -> Range<u32> {
        match self {
            Slot::Morning => 5..9,
            Slot::Day => 9..13,
            Slot::Afternoon => 13..17,
            Slot::Evening => 17..23,
        }
    }

    /// Resolve the slot whose hour range contains the given hour of day
    /// (0-23), or `None` when the hour falls outside every slot.
    ///
    /// Slots are checked in [`Slot::ALL`] order, so if two ranges ever
    /// overlapped the earlier slot would win deterministically.
    pub fn for_hour(hour: u32) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| slot.hours().contains(&hour))
    }

    /// Position of this slot in the fixed order. A day's post list is
    /// indexed by this value.
    pub fn index(self) -> usize {
        match self {
            Slot::Morning => 0,
            Slot::Day => 1,
            Slot::Afternoon => 2,
            Slot::Evening => 3,
        }
    }

    /// Lowercase name, as used for publication log keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Morning => "morning",
            Slot::Day => "day",
            Slot::Afternoon => "afternoon",
            Slot::Evening => "evening",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0, None; "midnight")]
    #[test_case(2, None; "deep night")]
    #[test_case(4, None; "just before morning")]
    #[test_case(5, Some(Slot::Morning); "morning start")]
    #[test_case(8, Some(Slot::Morning); "morning end")]
    #[test_case(9, Some(Slot::Day); "day start")]
    #[test_case(12, Some(Slot::Day); "day end")]
    #[test_case(13, Some(Slot::Afternoon); "afternoon start")]
    #[test_case(16, Some(Slot::Afternoon); "afternoon end")]
    #[test_case(17, Some(Slot::Evening); "evening start")]
    #[test_case(22, Some(Slot::Evening); "evening end")]
    #[test_case(23, None; "late night")]
    fn for_hour_resolves(hour: u32, expected: Option<Slot>) {
        assert_eq!(Slot::for_hour(hour), expected);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, slot) in Slot::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Slot::Morning).unwrap(), "\"morning\"");
        assert_eq!(
            serde_json::from_str::<Slot>("\"afternoon\"").unwrap(),
            Slot::Afternoon
        );
    }

    #[test]
    fn display_matches_log_keys() {
        for slot in Slot::ALL {
            assert_eq!(slot.to_string(), slot.as_str());
        }
    }

    proptest! {
        // The four ranges tile 05:00-22:59 with no gaps; everything else
        // resolves to no slot.
        #[test]
        fn resolution_covers_exactly_the_slot_windows(hour in 0u32..24) {
            prop_assert_eq!(Slot::for_hour(hour).is_some(), (5..23).contains(&hour));
        }

        #[test]
        fn resolved_slot_contains_its_hour(hour in 5u32..23) {
            let slot = Slot::for_hour(hour).unwrap();
            prop_assert!(slot.hours().contains(&hour));
        }
    }
}
