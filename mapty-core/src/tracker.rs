//! The app controller.
//!
//! [`Tracker`] owns the workout list, the map once it exists, the form and
//! the repository. The host calls one method per user event and re-renders
//! from [`Tracker::workouts`] and [`Tracker::form`].

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::error::{StoreError, SubmitError};
use crate::form::{FormController, FormInput};
use crate::map::MapSurface;
use crate::storage::{KeyValueStore, WorkoutRepository};
use crate::workout::{Coordinates, IdGenerator, Workout, WorkoutId, WorkoutKind};

pub struct Tracker<S, M> {
    workouts: Vec<Workout>,
    map: Option<M>,
    form: FormController,
    repository: WorkoutRepository<S>,
    ids: IdGenerator,
    config: AppConfig,
}

impl<S: KeyValueStore, M: MapSurface> Tracker<S, M> {
    /// Load persisted workouts from `store`. A store that cannot be read is
    /// fatal for the session.
    pub fn start(store: S, config: AppConfig) -> Result<Self, StoreError> {
        let repository = WorkoutRepository::new(store, config.storage.key.clone());
        let workouts = repository.load()?;
        let ids = IdGenerator::seeded_after(workouts.iter().map(Workout::id));

        info!("Tracker started with {} workouts", workouts.len());
        Ok(Self {
            workouts,
            map: None,
            form: FormController::new(),
            repository,
            ids,
            config,
        })
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn repository(&self) -> &WorkoutRepository<S> {
        &self.repository
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    /// Take ownership of the initialized map and draw a marker for every
    /// workout currently in the list.
    pub fn map_ready(&mut self, mut map: M) {
        for workout in &self.workouts {
            map.place_marker(workout.coordinates(), workout.kind(), workout.description());
        }
        info!("Map ready, replayed {} markers", self.workouts.len());
        self.map = Some(map);
    }

    /// Open the form at the clicked location. Ignored until the map is ready,
    /// since clicks can only originate from it.
    pub fn map_clicked(&mut self, coordinates: Coordinates) {
        if self.map.is_none() {
            warn!("Map click before map initialization ignored");
            return;
        }
        debug!("Form opened at {:?}", coordinates);
        self.form.open(coordinates);
    }

    pub fn select_kind(&mut self, kind: WorkoutKind) {
        self.form.select_kind(kind);
    }

    /// Turn the form input into a workout: validate, build, append, draw the
    /// marker, hide the form, then persist the whole list.
    ///
    /// On [`SubmitError::Persist`] the workout is already in the list and on
    /// the map; only storage is behind.
    pub fn submit<Tz>(
        &mut self,
        input: &FormInput,
        now: DateTime<Tz>,
    ) -> Result<WorkoutId, SubmitError>
    where
        Tz: TimeZone,
    {
        let submission = self.form.submit(input)?;
        let id = self.ids.next(now.with_timezone(&Utc));
        let workout = Workout::new(
            id,
            submission.details,
            submission.anchor,
            submission.distance,
            submission.duration_minutes,
            now,
        );
        info!("Created workout {}: {}", id, workout.description());

        if let Some(map) = self.map.as_mut() {
            map.place_marker(workout.coordinates(), workout.kind(), workout.description());
        }
        self.workouts.push(workout);

        self.repository.save(&self.workouts).map_err(|e| {
            error!("Failed to persist workouts: {}", e);
            e
        })?;
        Ok(id)
    }

    /// Recenter the map on a workout and count the view. Returns the
    /// coordinates moved to, or `None` if there is no map or no such workout.
    pub fn focus(&mut self, id: WorkoutId) -> Option<Coordinates> {
        let Some(map) = self.map.as_mut() else {
            debug!("Focus on {} ignored, map not initialized", id);
            return None;
        };
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id() == id) else {
            warn!("Focus on unknown workout {}", id);
            return None;
        };

        workout.record_view();
        let coordinates = workout.coordinates();
        map.recenter(coordinates, self.config.map.zoom);
        Some(coordinates)
    }
}
