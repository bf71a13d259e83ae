//! Workout records and their derived metrics.
//!
//! A record is one of two kinds, carried by [`WorkoutDetails`]. The
//! kind-specific metric (pace for running, speed for cycling) is computed
//! once by [`derive_metric`] when the record is built.

pub mod id;
mod metrics;
mod types;

pub use id::{IdGenerator, WorkoutId};
pub use metrics::{derive_metric, Metric};
pub use types::{Coordinates, Workout, WorkoutDetails, WorkoutKind};
