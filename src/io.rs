use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}
impl IoError {
    fn at(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Structured data formats for config and output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> IoResult<Self> {
        match path.rsplit('.').next() {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => {
                let supported_filetypes: Vec<String> = Format::iter().map(|format| format.to_string()).collect();
                let error_string = format!("Unsupported filetype: {}\nSupported filetypes: {:?} (and yml)", path, supported_filetypes);
                Err(IoError{file: Some(path.to_string()), cause: IoErrorType::StringOnly(error_string)})
            },
        }
    }

    /// Serialize a value into a string of this format.
    pub fn to_string_pretty<T: Serialize>(&self, value: &T) -> IoResult<String> {
        match self {
            Format::Json => serde_json::to_string_pretty(value)
                .map_err(|error| IoError{file: None, cause: IoErrorType::SerdeJson(error)}),
            Format::Yaml => serde_yaml::to_string(value)
                .map_err(|error| IoError{file: None, cause: IoErrorType::SerdeYaml(error)}),
            Format::Toml => toml::to_string_pretty(value)
                .map_err(|error| IoError{file: None, cause: IoErrorType::TomlSer(error)}),
        }
    }
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match Format::from_path(path)? {
        Format::Json => serde_json::from_reader(std::io::BufReader::new(open(path)?))
            .map_err(|error| IoError::at(path, IoErrorType::SerdeJson(error))),
        Format::Toml => toml::from_str(&read_to_string(path)?)
            .map_err(|error| IoError::at(path, IoErrorType::TomlDe(error))),
        Format::Yaml => serde_yaml::from_reader(std::io::BufReader::new(open(path)?))
            .map_err(|error| IoError::at(path, IoErrorType::SerdeYaml(error))),
    }
}

/// Write a serializable value to a file, in the format given by its extension.
pub fn write_data_file<T: Serialize>(path: &str, value: &T) -> IoResult<()> {
    let format = Format::from_path(path)?;
    let buffer = format.to_string_pretty(value).map_err(|error| IoError::at(path, error.cause))?;
    write_to_file(path, &buffer)
}
