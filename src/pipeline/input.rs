use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::document::{JobToBeDone, Persona};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A document entry: a bare path, or a `{ "filename": ..., "title": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentRef {
    Path(PathBuf),
    Entry {
        filename: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl DocumentRef {
    pub fn path(&self) -> &Path {
        match self {
            DocumentRef::Path(path) => path,
            DocumentRef::Entry { filename, .. } => filename,
        }
    }

    /// Relative paths are joined onto `base` when one is given.
    pub fn resolve(&self, base: Option<&Path>) -> PathBuf {
        let path = self.path();
        match base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// The request: which documents, for whom, to do what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub documents: Vec<DocumentRef>,
    pub persona: Persona,
    pub job_to_be_done: JobToBeDone,

    /// Opaque; copied to the output metadata as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_info: Option<Value>,
}

impl InputConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn job_description(&self) -> &str {
        self.job_to_be_done.resolve()
    }

    /// Challenge info worth echoing: present and neither null nor empty.
    pub fn passthrough_challenge_info(&self) -> Option<Value> {
        match &self.challenge_info {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) if map.is_empty() => None,
            Some(value) => Some(value.clone()),
        }
    }
}
