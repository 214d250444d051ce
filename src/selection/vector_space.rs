//! Session-local TF-IDF vector space.
//!
//! [`fit`] is pure: every call builds a fresh vocabulary and weighting from the
//! corpus it is given, and nothing carries over between calls.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::stop_words::is_stop_word;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VectorSpaceConfig {
    /// Vocabulary cap, keeping the terms most frequent across the corpus.
    pub max_features: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Maximum share of documents a term may appear in.
    pub max_df: f64,
}

impl VectorSpaceConfig {
    pub fn v0() -> Self {
        Self {
            max_features: 5000,
            ngram_min: 1,
            ngram_max: 3,
            min_df: 1,
            max_df: 0.95,
        }
    }
}

impl Default for VectorSpaceConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorSpaceError {
    #[error("Corpus is empty")]
    EmptyCorpus,
    #[error("Empty vocabulary; documents contain only stop words")]
    EmptyVocabulary,
    #[error("max_df corresponds to fewer documents than min_df")]
    InvalidFrequencyBounds,
    #[error("After pruning, no terms remain")]
    NoTermsRemain,
}

/// L2-normalized sparse row, entries ordered by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_val) = self.entries[i];
            let (b_idx, b_val) = other.entries[j];
            if a_idx == b_idx {
                sum += a_val * b_val;
                i += 1;
                j += 1;
            } else if a_idx < b_idx {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }
}

/// One fitted space: the vocabulary and one vector per corpus document, in corpus order.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: BTreeMap<String, usize>,
    vectors: Vec<SparseVector>,
}

impl VectorSpace {
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Cosine similarity of two documents; 0.0 when either vector is zero.
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        let (va, vb) = (&self.vectors[a], &self.vectors[b]);
        let denom = va.norm() * vb.norm();
        if denom == 0.0 {
            0.0
        } else {
            va.dot(vb) / denom
        }
    }
}

fn token_pattern() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"))
}

/// Lowercase, tokenize, drop stop words, then emit n-grams over what remains.
pub fn analyze(text: &str, config: &VectorSpaceConfig) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .collect();

    let mut terms = Vec::new();
    let min_n = config.ngram_min.max(1);
    for n in min_n..=config.ngram_max.max(min_n) {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

/// Fit a TF-IDF space over `corpus`.
///
/// Weighting: raw counts times smoothed idf `ln((1 + n) / (1 + df)) + 1`,
/// rows L2-normalized.
pub fn fit(corpus: &[&str], config: &VectorSpaceConfig) -> Result<VectorSpace, VectorSpaceError> {
    if corpus.is_empty() {
        return Err(VectorSpaceError::EmptyCorpus);
    }
    let n_docs = corpus.len();

    // 1. Count terms per document
    let counts: Vec<BTreeMap<String, usize>> = corpus
        .iter()
        .map(|doc| {
            let mut tf = BTreeMap::new();
            for term in analyze(doc, config) {
                *tf.entry(term).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    let mut corpus_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for tf in &counts {
        for (term, count) in tf {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            *corpus_frequency.entry(term.as_str()).or_insert(0) += count;
        }
    }
    if document_frequency.is_empty() {
        return Err(VectorSpaceError::EmptyVocabulary);
    }

    // 2. Prune by document frequency
    let max_doc_count = config.max_df * n_docs as f64;
    if max_doc_count < config.min_df as f64 {
        return Err(VectorSpaceError::InvalidFrequencyBounds);
    }
    let mut kept: Vec<&str> = document_frequency
        .iter()
        .filter(|(_, df)| **df >= config.min_df && **df as f64 <= max_doc_count)
        .map(|(term, _)| *term)
        .collect();
    if kept.is_empty() {
        return Err(VectorSpaceError::NoTermsRemain);
    }

    // 3. Cap the vocabulary by corpus frequency, ties alphabetical
    if kept.len() > config.max_features {
        kept.sort_by(|a, b| corpus_frequency[b].cmp(&corpus_frequency[a]).then_with(|| a.cmp(b)));
        kept.truncate(config.max_features);
    }
    let terms: BTreeSet<&str> = kept.into_iter().collect();
    let vocabulary: BTreeMap<String, usize> = terms
        .iter()
        .enumerate()
        .map(|(idx, term)| (term.to_string(), idx))
        .collect();

    // 4. Weight and normalize
    let vectors = counts
        .iter()
        .map(|tf| {
            let mut entries: Vec<(usize, f64)> = tf
                .iter()
                .filter_map(|(term, &count)| {
                    let idx = *vocabulary.get(term)?;
                    let df = document_frequency[term.as_str()] as f64;
                    let idf = ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0;
                    Some((idx, count as f64 * idf))
                })
                .collect();
            entries.sort_by_key(|(idx, _)| *idx);

            let norm = entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, value) in entries.iter_mut() {
                    *value /= norm;
                }
            }
            SparseVector { entries }
        })
        .collect();

    Ok(VectorSpace { vocabulary, vectors })
}
