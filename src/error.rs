use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeaveError {
    #[error("Failed to read file: {path}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML document: {path}")]
    ParseYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write file: {path}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}")]
    EncodeYaml {
        what: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("{count} document(s) failed to load")]
    LoadFailures {
        count: usize,
        errors: Vec<WeaveError>,
    },

    #[error("Control `{control}` satisfies unknown standard `{standard}`")]
    UnknownStandard { control: String, standard: String },

    #[error("Control `{control}` satisfies unknown element `{standard}/{element}`")]
    UnknownElement {
        control: String,
        standard: String,
        element: String,
    },
}

impl WeaveError {
    /// Wrap a batch of per-file load errors into a single aggregated error.
    pub fn from_load_errors(errors: Vec<WeaveError>) -> Self {
        WeaveError::LoadFailures {
            count: errors.len(),
            errors,
        }
    }
}

pub type Result<T> = std::result::Result<T, WeaveError>;
