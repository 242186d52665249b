/// Normalization process error type.
#[derive(Debug)]
pub enum NormalizeError {
    /// Group with a zero-size bounding box (or no circles at all).
    DegenerateGroup{
        group: usize,
    },
    /// Circle with a negative radius, which would place its center outside its own bounding box.
    NegativeRadius{
        group: usize,
        circle: usize,
        radius: f64,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::DegenerateGroup{group} => write!(f, "Group {} has a zero-size bounding box and cannot be scaled", group),
            NormalizeError::NegativeRadius{group, circle, radius} => write!(f, "Group {} circle {} has a negative radius ({})", group, circle, radius),
            NormalizeError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<String> for NormalizeError {
    fn from(error: String) -> Self {
        NormalizeError::StringOnly(error)
    }
}

/// Result type for the `normalize` module.
pub type ProcResult<T> = std::result::Result<T, NormalizeError>;

/// Create a `NormalizeError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(NormalizeError::StringOnly(error_str.to_string()))
}
