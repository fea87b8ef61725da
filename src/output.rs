//! Batched artifact writing.
//!
//! A job writes every artifact through one [`BatchWriter`]; failures are
//! collected per file and the whole batch always runs to the end. The
//! caller consults the final [`WriteReport`] before declaring success.

use crate::error::{Result, WeaveError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<WeaveError>,
}

impl WriteReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct BatchWriter {
    report: WriteReport,
}

impl BatchWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `value` as YAML and write it to `path`.
    pub fn write_yaml<T: Serialize>(&mut self, path: &Path, what: &str, value: &T) {
        match serde_yaml::to_string(value) {
            Ok(content) => self.write_text(path, &content),
            Err(e) => self.record_failure(
                path,
                WeaveError::EncodeYaml {
                    what: what.to_string(),
                    source: e,
                },
            ),
        }
    }

    /// Write text to `path`, creating parent directories as needed.
    pub fn write_text(&mut self, path: &Path, content: &str) {
        match try_write(path, content) {
            Ok(()) => {
                debug!(path = %path.display(), "wrote artifact");
                self.report.written.push(path.to_path_buf());
            }
            Err(e) => self.record_failure(path, e),
        }
    }

    fn record_failure(&mut self, path: &Path, err: WeaveError) {
        error!(path = %path.display(), %err, "failed to write artifact");
        self.report.failures.push(err);
    }

    pub fn finish(self) -> WriteReport {
        self.report
    }
}

fn try_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| WeaveError::WriteFile {
            path: path.display().to_string(),
            source: e,
        })?;
    }
    fs::write(path, content).map_err(|e| WeaveError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })
}
