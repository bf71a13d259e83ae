pub mod config;
mod error;
pub mod form;
pub mod map;
pub mod storage;
pub mod tracker;
pub mod workout;

pub use config::AppConfig;
pub use error::{ConfigError, StoreError, SubmitError, ValidationError};
pub use form::{FormController, FormInput, FormState};
pub use map::MapSurface;
pub use storage::{KeyValueStore, MemoryStore, WorkoutRepository};
pub use tracker::Tracker;
pub use workout::{Coordinates, Metric, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
