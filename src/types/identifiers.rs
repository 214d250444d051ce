use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Basename of a source document, as it appears in every output record.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentName(String);

#[derive(Debug, Error)]
pub enum DocumentNameError {
    #[error("Path has no file name component")]
    NoFileName,
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
}

impl DocumentName {
    pub fn new(name: impl Into<String>) -> Self {
        DocumentName(name.into())
    }

    /// Create a DocumentName from the final component of a source path.
    pub fn from_path(source: &Path) -> Result<Self, DocumentNameError> {
        let file_name = source.file_name().ok_or(DocumentNameError::NoFileName)?;
        let name = file_name.to_str().ok_or(DocumentNameError::InvalidUtf8)?;

        Ok(DocumentName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
