use crate::{
    args,
    io,
    load,
    normalize,
    plan,
};

/// Error-type enum for the `circle_morph` crate.
/// Wraps the error of each stage, so the binary can report where a run failed.
#[derive(Debug)]
pub enum MorphError {
    ArgError(args::ArgError),
    IoError(io::IoError),
    LoadError(load::LoadError),
    NormalizeError(normalize::NormalizeError),
    PlanError(plan::PlanError),
    StringOnly(String),
}
impl std::fmt::Display for MorphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MorphError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            MorphError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            MorphError::LoadError(error) => write!(f, "! LOADING ERROR:\n{}", error),
            MorphError::NormalizeError(error) => write!(f, "! NORMALIZATION ERROR:\n{}", error),
            MorphError::PlanError(error) => write!(f, "! PLANNING ERROR:\n{}", error),
            MorphError::StringOnly(error) => write!(f, "! CIRCLE-MORPH ERROR:\n- {}", error),
        }
    }
}
impl std::error::Error for MorphError {}
impl From<String> for MorphError {
    fn from(error: String) -> Self {
        MorphError::StringOnly(error)
    }
}
impl From<args::ArgError> for MorphError {
    fn from(error: args::ArgError) -> Self {
        MorphError::ArgError(error)
    }
}
impl From<io::IoError> for MorphError {
    fn from(error: io::IoError) -> Self {
        MorphError::IoError(error)
    }
}
impl From<load::LoadError> for MorphError {
    fn from(error: load::LoadError) -> Self {
        MorphError::LoadError(error)
    }
}
impl From<normalize::NormalizeError> for MorphError {
    fn from(error: normalize::NormalizeError) -> Self {
        MorphError::NormalizeError(error)
    }
}
impl From<plan::PlanError> for MorphError {
    fn from(error: plan::PlanError) -> Self {
        MorphError::PlanError(error)
    }
}

/// Result type for the `circle_morph` crate.
pub type MorphResult<T> = std::result::Result<T, MorphError>;

