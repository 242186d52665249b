/// Loading process error type.
#[derive(Debug)]
pub enum LoadError {
    /// IO error.
    IoError(crate::io::IoError),
    /// A record that is not exactly three finite numbers.
    MalformedRecord{
        /// 1-based line number in the input file.
        line: usize,
        /// Record text, comment stripped.
        record: String,
        reason: String,
    },
    /// Record count not divisible by the group size.
    GroupSizeMismatch{
        records: usize,
        circles_per_group: usize,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::IoError(error) => write!(f, "IO Error:\n{}", error),
            LoadError::MalformedRecord{line, record, reason} => write!(f, "Malformed record on line {}: \"{}\"\n- {}", line, record, reason),
            LoadError::GroupSizeMismatch{records, circles_per_group} => write!(
                f,
                "Found {} circle records, which is not a multiple of {} circles per group ({} left over)",
                records, circles_per_group, records % circles_per_group,
            ),
            LoadError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for LoadError {
    fn from(error: crate::io::IoError) -> Self {
        LoadError::IoError(error)
    }
}
impl From<String> for LoadError {
    fn from(error: String) -> Self {
        LoadError::StringOnly(error)
    }
}

/// Result type for the `load` module.
pub type ProcResult<T> = std::result::Result<T, LoadError>;

/// Create a `LoadError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(LoadError::StringOnly(error_str.to_string()))
}
