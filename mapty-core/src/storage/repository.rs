use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::store::KeyValueStore;
use crate::error::StoreError;
use crate::workout::{Coordinates, Workout, WorkoutDetails, WorkoutId};

/// Persists the whole workout list as one JSON array under a single key.
pub struct WorkoutRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the list. A missing key is an empty list, not an error.
    /// Records are rebuilt so their metric is recomputed from distance and
    /// duration rather than trusted from storage.
    pub fn load(&self) -> Result<Vec<Workout>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!("No stored workouts under '{}'", self.key);
            return Ok(Vec::new());
        };

        let stored: Vec<StoredWorkout> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        info!("Loaded {} workouts from '{}'", stored.len(), self.key);
        Ok(stored.into_iter().map(Workout::from).collect())
    }

    /// Overwrite the stored list with `workouts`.
    pub fn save(&self, workouts: &[Workout]) -> Result<(), StoreError> {
        let stored: Vec<StoredWorkout> = workouts.iter().map(StoredWorkout::from).collect();
        let json = serde_json::to_string(&stored).map_err(|e| StoreError::Encode(e.to_string()))?;

        self.store.set(&self.key, &json)?;
        debug!("Saved {} workouts ({} bytes)", workouts.len(), json.len());
        Ok(())
    }
}

/// Persisted shape of a workout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWorkout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance: f64,
    duration_minutes: f64,
    description: String,
    #[serde(default)]
    view_count: u32,
    #[serde(flatten)]
    details: StoredDetails,
}

/// Kind-specific fields. The metric is written alongside for anyone reading
/// the raw value but never read back.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum StoredDetails {
    Running {
        cadence: f64,
        #[serde(default, skip_deserializing)]
        pace: f64,
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        #[serde(default, skip_deserializing)]
        speed: f64,
    },
}

impl From<&Workout> for StoredWorkout {
    fn from(w: &Workout) -> Self {
        let metric = w.metric().value();
        let details = match *w.details() {
            WorkoutDetails::Running { cadence } => StoredDetails::Running {
                cadence,
                pace: metric,
            },
            WorkoutDetails::Cycling { elevation_gain } => StoredDetails::Cycling {
                elevation_gain,
                speed: metric,
            },
        };
        Self {
            id: w.id(),
            created_at: w.created_at(),
            coordinates: w.coordinates(),
            distance: w.distance(),
            duration_minutes: w.duration_minutes(),
            description: w.description().to_string(),
            view_count: w.view_count(),
            details,
        }
    }
}

impl From<StoredWorkout> for Workout {
    fn from(s: StoredWorkout) -> Self {
        let details = match s.details {
            StoredDetails::Running { cadence, .. } => WorkoutDetails::Running { cadence },
            StoredDetails::Cycling { elevation_gain, .. } => {
                WorkoutDetails::Cycling { elevation_gain }
            }
        };
        Workout::restore(
            s.id,
            details,
            s.coordinates,
            s.distance,
            s.duration_minutes,
            s.created_at,
            s.description,
            s.view_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::workout::Metric;
    use chrono::TimeZone;

    fn sample() -> Vec<Workout> {
        let day = Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
        vec![
            Workout::new(
                WorkoutId::new(1_709_629_200_000),
                WorkoutDetails::Running { cadence: 178.0 },
                Coordinates::new(39.74, -104.99),
                5.2,
                24.0,
                day,
            ),
            Workout::new(
                WorkoutId::new(1_709_629_200_001),
                WorkoutDetails::Cycling { elevation_gain: 0.0 },
                Coordinates::new(39.75, -105.0),
                27.0,
                95.0,
                day,
            ),
        ]
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let repo = WorkoutRepository::new(MemoryStore::new(), "workouts");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let repo = WorkoutRepository::new(MemoryStore::new(), "workouts");
        let workouts = sample();
        repo.save(&workouts).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, workouts);
        assert_eq!(loaded[0].details(), &WorkoutDetails::Running { cadence: 178.0 });
        assert_eq!(loaded[1].details(), &WorkoutDetails::Cycling { elevation_gain: 0.0 });
    }

    #[test]
    fn test_persisted_layout() {
        let repo = WorkoutRepository::new(MemoryStore::new(), "workouts");
        repo.save(&sample()[..1]).unwrap();

        let raw = repo.store().get("workouts").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value[0];
        assert_eq!(first["kind"], "running");
        assert_eq!(first["id"], "1709629200000");
        assert_eq!(first["coordinates"], serde_json::json!([39.74, -104.99]));
        assert_eq!(first["durationMinutes"], 24.0);
        assert_eq!(first["cadence"], 178.0);
        assert_eq!(first["description"], "Running on March 5");
        assert!(first.get("elevationGain").is_none());
    }

    #[test]
    fn test_stored_metric_is_ignored() {
        let raw = r#"[{
            "id": "42",
            "createdAt": "2024-03-05T09:00:00Z",
            "coordinates": [1.0, 2.0],
            "distance": 10.0,
            "durationMinutes": 50.0,
            "description": "Running on March 5",
            "kind": "running",
            "cadence": 165.0,
            "pace": 999.0
        }]"#;
        let repo = WorkoutRepository::new(MemoryStore::with_entry("workouts", raw), "workouts");

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].metric(), Metric::Pace(5.0));
        assert_eq!(loaded[0].view_count(), 0);
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let repo = WorkoutRepository::new(MemoryStore::with_entry("workouts", "{not json"), "workouts");
        assert!(matches!(repo.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let raw = r#"[{"id":"1","createdAt":"2024-03-05T09:00:00Z","coordinates":[0,0],
            "distance":1,"durationMinutes":1,"description":"x","kind":"swimming"}]"#;
        let repo = WorkoutRepository::new(MemoryStore::with_entry("workouts", raw), "workouts");
        assert!(repo.load().is_err());
    }
}
