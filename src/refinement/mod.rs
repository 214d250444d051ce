use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::DigestConfig;
use crate::document::{RefinedSection, Section};

/// How a section's excerpt was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementStrategy {
    KeywordScored,
    /// No sentence shared a keyword with the job; leading sentences were used.
    LeadingSentences,
    /// The section had no sentence long enough to keep.
    NoSentences,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refinement {
    pub refined: RefinedSection,
    pub strategy: RefinementStrategy,
}

/// Distills ranked sections into their most job-relevant sentences.
#[derive(Debug, Clone)]
pub struct SectionRefiner {
    max_sentences: usize,
    fallback_sentences: usize,
    min_sentence_chars: usize,
}

impl Default for SectionRefiner {
    fn default() -> Self {
        Self::new(&DigestConfig::v0())
    }
}

impl SectionRefiner {
    pub fn new(config: &DigestConfig) -> Self {
        Self {
            max_sentences: config.max_refined_sentences,
            fallback_sentences: config.fallback_sentences,
            min_sentence_chars: config.min_sentence_chars,
        }
    }

    /// One refined section per input, order preserved.
    pub fn refine(&self, ranked: &[Section], job_description: &str) -> Vec<RefinedSection> {
        let keywords = job_keywords(job_description);
        ranked
            .iter()
            .map(|section| self.refine_section(section, &keywords).refined)
            .collect()
    }

    pub fn refine_section(&self, section: &Section, keywords: &BTreeSet<String>) -> Refinement {
        let sentences = self.split_sentences(&section.text);

        let mut scored: Vec<(usize, &str)> = sentences
            .iter()
            .map(|sentence| {
                let lowered = sentence.to_lowercase();
                let score = keywords.iter().filter(|kw| lowered.contains(kw.as_str())).count();
                (score, *sentence)
            })
            .collect();
        // Stable: equal scores keep sentence order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let (selected, strategy): (Vec<&str>, _) = if sentences.is_empty() {
            (Vec::new(), RefinementStrategy::NoSentences)
        } else if scored.iter().all(|(score, _)| *score == 0) {
            (
                sentences.iter().take(self.fallback_sentences).copied().collect(),
                RefinementStrategy::LeadingSentences,
            )
        } else {
            (
                scored.iter().take(self.max_sentences).map(|(_, s)| *s).collect(),
                RefinementStrategy::KeywordScored,
            )
        };

        let mut refined_text = selected.join(". ");
        if !refined_text.ends_with('.') {
            refined_text.push('.');
        }

        Refinement {
            refined: RefinedSection::from_section(section, refined_text),
            strategy,
        }
    }

    /// Trimmed sentences strictly longer than the minimum, in text order.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        sentence_terminators()
            .split(text)
            .map(str::trim)
            .filter(|sentence| sentence.chars().count() > self.min_sentence_chars)
            .collect()
    }
}

/// Lower-cased alphabetic runs of four or more letters.
pub fn job_keywords(job_description: &str) -> BTreeSet<String> {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let word = WORD.get_or_init(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("keyword pattern is a valid regex"));

    let lowered = job_description.to_lowercase();
    word.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

fn sentence_terminators() -> &'static Regex {
    static TERMINATORS: OnceLock<Regex> = OnceLock::new();
    TERMINATORS.get_or_init(|| Regex::new(r"[.!?]+").expect("terminator pattern is a valid regex"))
}
