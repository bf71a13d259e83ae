use leptos::prelude::*;
use mapty_core::{Workout, WorkoutDetails, WorkoutId};

/// One labelled figure in a list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Distance, duration, the metric to one decimal, then cadence or elevation.
pub fn detail_rows(workout: &Workout) -> Vec<DetailRow> {
    let metric = workout.metric();
    let extra = match *workout.details() {
        WorkoutDetails::Running { cadence } => DetailRow {
            icon: "\u{1F45F}",
            value: cadence.to_string(),
            unit: "spm",
        },
        WorkoutDetails::Cycling { elevation_gain } => DetailRow {
            icon: "\u{26F0}",
            value: elevation_gain.to_string(),
            unit: "m",
        },
    };

    vec![
        DetailRow {
            icon: workout.kind().emoji(),
            value: workout.distance().to_string(),
            unit: "km",
        },
        DetailRow {
            icon: "\u{23F1}",
            value: workout.duration_minutes().to_string(),
            unit: "min",
        },
        DetailRow {
            icon: "\u{26A1}\u{FE0F}",
            value: format!("{:.1}", metric.value()),
            unit: metric.unit(),
        },
        extra,
    ]
}

#[component]
pub fn WorkoutItem(
    workout: Workout,
    /// Invoked with the workout's id when the entry is clicked.
    on_focus: Callback<WorkoutId>,
) -> impl IntoView {
    let id = workout.id();
    let class = format!("workout workout--{}", workout.kind());
    let title = workout.description().to_string();
    let rows = detail_rows(&workout);

    view! {
        <li class=class data-id=id.to_string() on:click=move |_| on_focus.run(id)>
            <h2 class="workout__title">{title}</h2>
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="workout__details">
                            <span class="workout__icon">{row.icon}</span>
                            <span class="workout__value">{row.value}</span>
                            <span class="workout__unit">{row.unit}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mapty_core::Coordinates;

    fn build(details: WorkoutDetails, distance: f64, duration: f64) -> Workout {
        Workout::new(
            WorkoutId::new(1),
            details,
            Coordinates::new(0.0, 0.0),
            distance,
            duration,
            Utc.with_ymd_and_hms(2024, 3, 5, 7, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_running_rows() {
        let rows = detail_rows(&build(WorkoutDetails::Running { cadence: 178.0 }, 5.2, 24.0));
        let values: Vec<_> = rows.iter().map(|r| (r.value.as_str(), r.unit)).collect();
        assert_eq!(
            values,
            vec![("5.2", "km"), ("24", "min"), ("4.6", "min/km"), ("178", "spm")]
        );
    }

    #[test]
    fn test_cycling_rows() {
        let rows = detail_rows(&build(WorkoutDetails::Cycling { elevation_gain: -12.5 }, 27.0, 95.0));
        let values: Vec<_> = rows.iter().map(|r| (r.value.as_str(), r.unit)).collect();
        assert_eq!(
            values,
            vec![("27", "km"), ("95", "min"), ("17.1", "km/h"), ("-12.5", "m")]
        );
    }
}
