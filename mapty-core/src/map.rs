use crate::workout::{Coordinates, WorkoutKind};

/// The parts of the map widget the controller drives once the map exists.
///
/// Creating the map and wiring its click handler are host concerns and live
/// with the concrete widget binding.
pub trait MapSurface {
    /// Add a marker with a popup showing the kind's emoji and `description`.
    /// Markers accumulate; there is no removal.
    fn place_marker(&mut self, coordinates: Coordinates, kind: WorkoutKind, description: &str);

    fn recenter(&mut self, coordinates: Coordinates, zoom: u8);
}
