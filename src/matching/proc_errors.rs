/// Matching process error type.
#[derive(Debug)]
pub enum MatchingError {
    /// Groups of different lengths cannot be put in correspondence.
    InvalidInput{
        expected: usize,
        found: usize,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for MatchingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchingError::InvalidInput{expected, found} => write!(f, "Cannot match a group of {} circles against a group of {} circles", expected, found),
            MatchingError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<String> for MatchingError {
    fn from(error: String) -> Self {
        MatchingError::StringOnly(error)
    }
}

/// Result type for the `matching` module.
pub type ProcResult<T> = std::result::Result<T, MatchingError>;

/// Create a `MatchingError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(MatchingError::StringOnly(error_str.to_string()))
}
