use thiserror::Error;

/// Rejected form input. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Inputs have to be numbers ({field} is missing or not a number)")]
    NotANumber { field: &'static str },

    #[error("Inputs have to be positive numbers ({field} must be greater than zero)")]
    NotPositive { field: &'static str },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write failed: {0}")]
    Write(String),

    #[error("Failed to encode workouts: {0}")]
    Encode(String),

    #[error("Stored workouts are corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form was submitted without a map location to anchor it.
    #[error("No map location selected")]
    FormHidden,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The workout was added to the list but the list could not be written.
    #[error("Workout added but not saved: {0}")]
    Persist(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Parse(String),
}

impl From<StoreError> for String {
    fn from(err: StoreError) -> Self {
        err.to_string()
    }
}
