use crate::matching::MatchingError;

/// Planning process error type.
#[derive(Debug)]
pub enum PlanError {
    /// A group could not be matched against the current one.
    MatchingError(MatchingError),
    /// Starting group index past the end of the loaded groups.
    StartOutOfRange{
        index: usize,
        group_count: usize,
    },
    /// Nothing to plan.
    Empty,
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::MatchingError(error) => write!(f, "Matching Error:\n{}", error),
            PlanError::StartOutOfRange{index, group_count} => write!(f, "Starting group index {} is out of range for {} groups", index, group_count),
            PlanError::Empty => write!(f, "No circle groups to plan"),
            PlanError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<MatchingError> for PlanError {
    fn from(error: MatchingError) -> Self {
        PlanError::MatchingError(error)
    }
}
impl From<String> for PlanError {
    fn from(error: String) -> Self {
        PlanError::StringOnly(error)
    }
}

/// Result type for the `plan` module.
pub type ProcResult<T> = std::result::Result<T, PlanError>;

/// Create a `PlanError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(PlanError::StringOnly(error_str.to_string()))
}
