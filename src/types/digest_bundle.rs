use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::document::{Persona, RefinedSection, Section};
use crate::types::identifiers::DocumentName;

/// Metadata describing the inputs and the outcome of one digest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestMetadata {
    pub input_documents: Vec<DocumentName>,
    pub persona: Persona,
    pub job_to_be_done: String,
    pub processing_timestamp: String,
    pub processing_time_seconds: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_info: Option<Value>,

    /// Present only when the run failed as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Projection of a ranked section. The relevance score stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: DocumentName,
    pub page_number: u32,
    pub section_title: String,
    pub importance_rank: u32,
}

impl From<&Section> for ExtractedSection {
    fn from(section: &Section) -> Self {
        ExtractedSection {
            document: section.document.clone(),
            page_number: section.page_number,
            section_title: section.section_title.clone(),
            importance_rank: section.importance_rank.unwrap_or_default(),
        }
    }
}

/// The final result of a digest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestResult {
    pub metadata: DigestMetadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub sub_section_analysis: Vec<RefinedSection>,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DigestResult {
    /// Terminal result for a run that could not complete.
    /// Section lists are empty and the persona and job are blanked.
    pub fn failed(error: impl Into<String>, elapsed: Duration) -> Self {
        DigestResult {
            metadata: DigestMetadata {
                input_documents: Vec::new(),
                persona: Persona::default(),
                job_to_be_done: String::new(),
                processing_timestamp: processing_timestamp(),
                processing_time_seconds: round_seconds(elapsed),
                challenge_info: None,
                error: Some(error.into()),
            },
            extracted_sections: Vec::new(),
            sub_section_analysis: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.metadata.error.is_some()
    }

    /// Write the result as pretty-printed UTF-8 JSON.
    pub fn write_to(&self, path: &Path) -> Result<(), OutputError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Local wall-clock time in ISO-8601 with microseconds and no offset.
pub fn processing_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Elapsed seconds rounded to two decimals.
pub fn round_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}
