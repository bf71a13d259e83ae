//! Workout form state machine and input validation.

use crate::error::{SubmitError, ValidationError};
use crate::workout::{Coordinates, WorkoutDetails, WorkoutKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Hidden,
    /// Open, anchored at the map location that was clicked.
    Visible { anchor: Coordinates },
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// A validated submission, ready to become a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub anchor: Coordinates,
    pub distance: f64,
    pub duration_minutes: f64,
    pub details: WorkoutDetails,
}

#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    kind: WorkoutKind,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            state: FormState::Hidden,
            kind: WorkoutKind::default(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, FormState::Visible { .. })
    }

    pub fn anchor(&self) -> Option<Coordinates> {
        match self.state {
            FormState::Visible { anchor } => Some(anchor),
            FormState::Hidden => None,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        self.kind
    }

    /// Show the form anchored at `anchor`. Clicking again while open just
    /// moves the anchor.
    pub fn open(&mut self, anchor: Coordinates) {
        self.state = FormState::Visible { anchor };
    }

    pub fn select_kind(&mut self, kind: WorkoutKind) {
        self.kind = kind;
    }

    pub fn shows_cadence(&self) -> bool {
        self.kind == WorkoutKind::Running
    }

    pub fn shows_elevation(&self) -> bool {
        self.kind == WorkoutKind::Cycling
    }

    /// Validate `input` against the selected kind. On success the form
    /// hides; on any error the state is left untouched.
    pub fn submit(&mut self, input: &FormInput) -> Result<Submission, SubmitError> {
        let anchor = self.anchor().ok_or(SubmitError::FormHidden)?;
        let (distance, duration_minutes, details) = validate(self.kind, input)?;
        self.state = FormState::Hidden;
        Ok(Submission {
            anchor,
            distance,
            duration_minutes,
            details,
        })
    }
}

/// Parse the fields for `kind`. Every field must be a finite number, and
/// distance and duration must be positive since the metrics divide by them.
pub fn validate(
    kind: WorkoutKind,
    input: &FormInput,
) -> Result<(f64, f64, WorkoutDetails), ValidationError> {
    let distance = parse_number("distance", &input.distance)?;
    let duration = parse_number("duration", &input.duration)?;
    let details = match kind {
        WorkoutKind::Running => WorkoutDetails::Running {
            cadence: parse_number("cadence", &input.cadence)?,
        },
        WorkoutKind::Cycling => WorkoutDetails::Cycling {
            elevation_gain: parse_number("elevation", &input.elevation)?,
        },
    };

    if distance <= 0.0 {
        return Err(ValidationError::NotPositive { field: "distance" });
    }
    if duration <= 0.0 {
        return Err(ValidationError::NotPositive { field: "duration" });
    }

    Ok((distance, duration, details))
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(distance: &str, duration: &str, cadence: &str, elevation: &str) -> FormInput {
        FormInput {
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: elevation.to_string(),
        }
    }

    #[test]
    fn test_starts_hidden_with_running() {
        let form = FormController::new();
        assert_eq!(form.state(), FormState::Hidden);
        assert_eq!(form.kind(), WorkoutKind::Running);
        assert!(form.shows_cadence());
        assert!(!form.shows_elevation());
    }

    #[test]
    fn test_open_and_reanchor() {
        let mut form = FormController::new();
        form.open(Coordinates::new(1.0, 2.0));
        form.open(Coordinates::new(3.0, 4.0));
        assert_eq!(form.anchor(), Some(Coordinates::new(3.0, 4.0)));
    }

    #[test]
    fn test_toggle_shows_exactly_one_field() {
        let mut form = FormController::new();
        for kind in WorkoutKind::ALL {
            form.select_kind(kind);
            assert_ne!(form.shows_cadence(), form.shows_elevation());
        }
        form.select_kind(WorkoutKind::Cycling);
        assert!(form.shows_elevation());
    }

    #[test]
    fn test_submit_running() {
        let mut form = FormController::new();
        form.open(Coordinates::new(10.0, 20.0));

        let s = form.submit(&input("5", " 25 ", "170", "")).unwrap();
        assert_eq!(s.anchor, Coordinates::new(10.0, 20.0));
        assert_eq!(s.distance, 5.0);
        assert_eq!(s.duration_minutes, 25.0);
        assert_eq!(s.details, WorkoutDetails::Running { cadence: 170.0 });
        assert_eq!(form.state(), FormState::Hidden);
    }

    #[test]
    fn test_submit_cycling_allows_negative_elevation() {
        let mut form = FormController::new();
        form.select_kind(WorkoutKind::Cycling);
        form.open(Coordinates::new(0.0, 0.0));

        let s = form.submit(&input("40", "120", "", "-35")).unwrap();
        assert_eq!(s.details, WorkoutDetails::Cycling { elevation_gain: -35.0 });
    }

    #[test]
    fn test_submit_while_hidden() {
        let mut form = FormController::new();
        let err = form.submit(&input("5", "25", "170", "")).unwrap_err();
        assert!(matches!(err, SubmitError::FormHidden));
    }

    #[test]
    fn test_invalid_input_keeps_form_open() {
        let mut form = FormController::new();
        form.open(Coordinates::new(1.0, 1.0));

        let err = form.submit(&input("5", "abc", "170", "")).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Invalid(ValidationError::NotANumber { field: "duration" })
        ));
        assert!(form.is_visible());
    }

    #[test]
    fn test_validation_rules() {
        use WorkoutKind::*;
        let cases = [
            (Running, input("", "10", "150", ""), Some("distance")),
            (Running, input("3", "10", "", ""), Some("cadence")),
            (Running, input("3", "NaN", "150", ""), Some("duration")),
            (Running, input("inf", "10", "150", ""), Some("distance")),
            (Cycling, input("3", "10", "", "x"), Some("elevation")),
            (Cycling, input("3", "10", "", "0"), None),
            (Running, input("3.5", "18.25", "161", ""), None),
        ];
        for (kind, fields, failing) in cases {
            let result = validate(kind, &fields);
            match failing {
                Some(field) => assert_eq!(
                    result.unwrap_err(),
                    ValidationError::NotANumber { field },
                    "{:?}",
                    fields
                ),
                None => assert!(result.is_ok(), "{:?}", fields),
            }
        }
    }

    #[test]
    fn test_distance_and_duration_must_be_positive() {
        assert_eq!(
            validate(WorkoutKind::Running, &input("0", "10", "150", "")).unwrap_err(),
            ValidationError::NotPositive { field: "distance" }
        );
        assert_eq!(
            validate(WorkoutKind::Cycling, &input("3", "-1", "", "10")).unwrap_err(),
            ValidationError::NotPositive { field: "duration" }
        );
    }
}
