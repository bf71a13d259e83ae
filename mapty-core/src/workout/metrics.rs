use super::types::WorkoutDetails;

/// Kind-specific performance figure derived from distance and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Minutes per kilometer.
    Pace(f64),
    /// Kilometers per hour.
    Speed(f64),
}

impl Metric {
    pub fn value(&self) -> f64 {
        match self {
            Metric::Pace(v) | Metric::Speed(v) => *v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Pace(_) => "min/km",
            Metric::Speed(_) => "km/h",
        }
    }
}

/// Compute the metric for a record.
///
/// `distance` and `duration_minutes` must both be positive; the form
/// controller rejects anything else before a record is built.
pub fn derive_metric(details: &WorkoutDetails, distance: f64, duration_minutes: f64) -> Metric {
    match details {
        WorkoutDetails::Running { .. } => Metric::Pace(duration_minutes / distance),
        WorkoutDetails::Cycling { .. } => Metric::Speed(distance / (duration_minutes / 60.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RUN: WorkoutDetails = WorkoutDetails::Running { cadence: 170.0 };
    const RIDE: WorkoutDetails = WorkoutDetails::Cycling { elevation_gain: 300.0 };

    #[test]
    fn test_running_pace() {
        assert_eq!(derive_metric(&RUN, 5.0, 25.0), Metric::Pace(5.0));
    }

    #[test]
    fn test_cycling_speed() {
        assert_eq!(derive_metric(&RIDE, 30.0, 90.0), Metric::Speed(20.0));
    }

    #[test]
    fn test_units() {
        assert_eq!(Metric::Pace(1.0).unit(), "min/km");
        assert_eq!(Metric::Speed(1.0).unit(), "km/h");
    }

    proptest! {
        #[test]
        fn pace_is_duration_over_distance(distance in 0.01f64..500.0, duration in 0.1f64..2000.0) {
            let pace = derive_metric(&RUN, distance, duration).value();
            prop_assert!((pace - duration / distance).abs() <= 1e-9 * pace.abs().max(1.0));
        }

        #[test]
        fn speed_is_distance_per_hour(distance in 0.01f64..500.0, duration in 0.1f64..2000.0) {
            let speed = derive_metric(&RIDE, distance, duration).value();
            prop_assert!((speed - distance / (duration / 60.0)).abs() <= 1e-9 * speed.abs().max(1.0));
        }
    }
}
