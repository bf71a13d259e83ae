use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::id::WorkoutId;
use super::metrics::{derive_metric, Metric};

/// Latitude/longitude pair, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 2] = [WorkoutKind::Running, WorkoutKind::Cycling];

    /// Lowercase identifier used in storage, CSS classes and the type selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "\u{1F3C3}",
            WorkoutKind::Cycling => "\u{1F6B4}",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload of a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    /// Cadence in steps per minute.
    Running { cadence: f64 },
    /// Elevation gain in meters. May be zero or negative.
    Cycling { elevation_gain: f64 },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// One logged activity.
///
/// Everything except the view counter is fixed at construction; the metric
/// and description are derived once and cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance: f64,
    duration_minutes: f64,
    details: WorkoutDetails,
    metric: Metric,
    description: String,
    view_count: u32,
}

impl Workout {
    /// Build a new record. The description uses the calendar date of
    /// `created_at` in whatever time zone it is given in.
    pub fn new<Tz>(
        id: WorkoutId,
        details: WorkoutDetails,
        coordinates: Coordinates,
        distance: f64,
        duration_minutes: f64,
        created_at: DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
    {
        let description = describe(details.kind(), created_at.month(), created_at.day());
        Self {
            id,
            created_at: created_at.with_timezone(&Utc),
            coordinates,
            distance,
            duration_minutes,
            details,
            metric: derive_metric(&details, distance, duration_minutes),
            description,
            view_count: 0,
        }
    }

    /// Rebuild a record from persisted fields. The metric is always
    /// recomputed; description and view count are kept as stored.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: WorkoutId,
        details: WorkoutDetails,
        coordinates: Coordinates,
        distance: f64,
        duration_minutes: f64,
        created_at: DateTime<Utc>,
        description: String,
        view_count: u32,
    ) -> Self {
        Self {
            id,
            created_at,
            coordinates,
            distance,
            duration_minutes,
            details,
            metric: derive_metric(&details, distance, duration_minutes),
            description,
            view_count,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn view_count(&self) -> u32 {
        self.view_count
    }

    pub(crate) fn record_view(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn describe(kind: WorkoutKind, month: u32, day: u32) -> String {
    let month = MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default();
    format!("{} on {} {}", kind.label(), month, day)
}
