use crate::selection::vector_space::VectorSpaceConfig;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DigestConfig {
    /// Pages whose stripped text has at most this many characters are skipped.
    pub min_page_chars: usize,
    pub min_section_chars: usize,
    pub max_paragraph_sections: usize,
    pub max_ranked_sections: usize,
    pub max_refined_sentences: usize,
    pub fallback_sentences: usize,
    /// Sentences must be strictly longer than this to be considered.
    pub min_sentence_chars: usize,
    pub vector_space: VectorSpaceConfig,
}

impl DigestConfig {
    pub fn v0() -> Self {
        Self {
            min_page_chars: 50,
            min_section_chars: 100,
            max_paragraph_sections: 5,
            max_ranked_sections: 15,
            max_refined_sentences: 3,
            fallback_sentences: 2,
            min_sentence_chars: 20,
            vector_space: VectorSpaceConfig::v0(),
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self::v0()
    }
}
