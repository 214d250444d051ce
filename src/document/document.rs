use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentName;

/// The atomic unit of ranking: a titled span of text from one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub document: DocumentName,
    pub page_number: u32,
    pub section_title: String,
    /// Whitespace-collapsed content.
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance_rank: Option<u32>,
}

impl Section {
    /// A fresh, unranked section. The document is assigned by the caller.
    pub fn new(page_number: u32, section_title: impl Into<String>, text: impl Into<String>) -> Self {
        Section {
            document: DocumentName::default(),
            page_number,
            section_title: section_title.into(),
            text: text.into(),
            relevance_score: None,
            importance_rank: None,
        }
    }

    pub fn with_document(mut self, document: DocumentName) -> Self {
        self.document = document;
        self
    }
}

/// Short excerpt distilled from a ranked section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinedSection {
    pub document: DocumentName,
    pub page_number: u32,
    pub section_title: String,
    pub refined_text: String,
    pub importance_rank: u32,
}

impl RefinedSection {
    pub fn from_section(section: &Section, refined_text: String) -> Self {
        RefinedSection {
            document: section.document.clone(),
            page_number: section.page_number,
            section_title: section.section_title.clone(),
            refined_text,
            importance_rank: section.importance_rank.unwrap_or_default(),
        }
    }
}
