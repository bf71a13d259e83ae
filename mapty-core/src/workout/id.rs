use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque workout identifier.
///
/// Stored and rendered as a decimal string so ids written by earlier
/// versions (timestamp digits) still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkoutId(u64);

impl WorkoutId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| format!("Invalid workout id '{}': {}", s, e))
    }
}

impl TryFrom<String> for WorkoutId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkoutId> for String {
    fn from(id: WorkoutId) -> Self {
        id.to_string()
    }
}

/// Hands out strictly increasing ids based on the wall clock in milliseconds.
///
/// Two records created in the same millisecond still get distinct ids: the
/// generator never returns a value at or below the last one it issued.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above every id in `existing`, so restored records never collide
    /// with new ones even if the clock went backwards between sessions.
    pub fn seeded_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = WorkoutId>,
    {
        let last = existing.into_iter().map(WorkoutId::get).max().unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> WorkoutId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last.saturating_add(1));
        self.last = id;
        WorkoutId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ids_follow_the_clock() {
        let mut ids = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_709_640_000_123).unwrap();
        assert_eq!(ids.next(now).get(), 1_709_640_000_123);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_709_640_000_000).unwrap();

        let first = ids.next(now);
        let second = ids.next(now);
        let third = ids.next(now);

        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::new();
        let later = Utc.timestamp_millis_opt(2_000).unwrap();
        let earlier = Utc.timestamp_millis_opt(1_000).unwrap();

        let a = ids.next(later);
        let b = ids.next(earlier);
        assert_eq!(b.get(), a.get() + 1);
    }

    #[test]
    fn test_seeded_generator_starts_above_existing() {
        let mut ids = IdGenerator::seeded_after([WorkoutId::new(50), WorkoutId::new(9_000)]);
        let now = Utc.timestamp_millis_opt(10).unwrap();
        assert_eq!(ids.next(now), WorkoutId::new(9_001));
    }

    #[test]
    fn test_id_serializes_as_string() {
        let json = serde_json::to_string(&WorkoutId::new(4_821_007_115)).unwrap();
        assert_eq!(json, "\"4821007115\"");

        let parsed: WorkoutId = serde_json::from_str("\"0640123456\"").unwrap();
        assert_eq!(parsed.get(), 640_123_456);
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!("abc".parse::<WorkoutId>().is_err());
        assert!(serde_json::from_str::<WorkoutId>("\"12x\"").is_err());
    }
}
