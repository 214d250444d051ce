pub mod input;

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::DigestConfig;
use crate::document::{DocumentName, Section};
use crate::extraction::{FilePageSource, PageSource};
use crate::refinement::SectionRefiner;
use crate::segmentation::Segmenter;
use crate::selection::{BoostPolicy, RelevanceRanker, TravelGuideBoost};
use crate::types::{processing_timestamp, round_seconds, DigestMetadata, DigestResult, ExtractedSection};
pub use input::{ConfigError, DocumentRef, InputConfig};

/// Runs segmentation over every document, ranks once across all of them,
/// then refines the ranked sections.
///
/// Single-threaded and stateless between runs.
pub struct DigestPipeline<S = FilePageSource, P = TravelGuideBoost> {
    source: S,
    segmenter: Segmenter,
    ranker: RelevanceRanker<P>,
    refiner: SectionRefiner,
    min_page_chars: usize,
    documents_dir: Option<PathBuf>,
}

impl Default for DigestPipeline {
    fn default() -> Self {
        Self::new(DigestConfig::v0())
    }
}

impl DigestPipeline {
    pub fn new(config: DigestConfig) -> Self {
        Self::with_parts(FilePageSource, TravelGuideBoost, config)
    }
}

impl<S, P> DigestPipeline<S, P>
where
    S: PageSource,
    P: BoostPolicy,
{
    pub fn with_parts(source: S, policy: P, config: DigestConfig) -> Self {
        Self {
            source,
            segmenter: Segmenter::new(&config),
            ranker: RelevanceRanker::new(policy, &config),
            refiner: SectionRefiner::new(&config),
            min_page_chars: config.min_page_chars,
            documents_dir: None,
        }
    }

    /// Resolve relative document paths against `dir` instead of the working directory.
    pub fn with_documents_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.documents_dir = Some(dir.into());
        self
    }

    /// Load the input configuration and process it.
    /// A configuration that cannot be loaded yields an error result, never a panic.
    pub fn process_config_file(&self, config_path: &Path) -> DigestResult {
        let started = Instant::now();

        match InputConfig::from_path(config_path) {
            Ok(input) => {
                tracing::info!(config = %config_path.display(), "Configuration loaded");
                self.process_since(&input, started)
            }
            Err(error) => {
                tracing::error!(config = %config_path.display(), %error, "Processing failed");
                DigestResult::failed(error.to_string(), started.elapsed())
            }
        }
    }

    pub fn process(&self, input: &InputConfig) -> DigestResult {
        self.process_since(input, Instant::now())
    }

    fn process_since(&self, input: &InputConfig, started: Instant) -> DigestResult {
        let job_description = input.job_description();

        // 1. Segment every document
        let mut all_sections = Vec::new();
        let mut processed = Vec::new();

        for doc in &input.documents {
            let path = doc.resolve(self.documents_dir.as_deref());
            if !path.exists() {
                tracing::warn!(path = %path.display(), "Document not found; skipping");
                continue;
            }
            let name = match DocumentName::from_path(&path) {
                Ok(name) => name,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "Unusable document name; skipping");
                    continue;
                }
            };

            tracing::info!(document = %name, "Processing document");
            all_sections.extend(self.extract_sections(&path, &name));
            processed.push(name);
        }

        tracing::info!(
            sections = all_sections.len(),
            documents = processed.len(),
            "Extracted sections"
        );

        // 2. Rank globally
        let ranking = self.ranker.rank(all_sections, &input.persona, job_description);
        tracing::info!(sections = ranking.sections.len(), strategy = ?ranking.strategy, "Ranked sections");

        // 3. Refine
        let refined = self.refiner.refine(&ranking.sections, job_description);

        DigestResult {
            metadata: DigestMetadata {
                input_documents: processed,
                persona: input.persona.clone(),
                job_to_be_done: job_description.to_string(),
                processing_timestamp: processing_timestamp(),
                processing_time_seconds: round_seconds(started.elapsed()),
                challenge_info: input.passthrough_challenge_info(),
                error: None,
            },
            extracted_sections: ranking.sections.iter().map(ExtractedSection::from).collect(),
            sub_section_analysis: refined,
        }
    }

    /// Sections of every qualifying page of one document, tagged with its name.
    /// Extraction failures are logged and contribute nothing.
    pub fn extract_sections(&self, path: &Path, name: &DocumentName) -> Vec<Section> {
        let pages = match self.source.pages(path) {
            Ok(pages) => pages,
            Err(error) => {
                tracing::warn!(document = %name, %error, "Extraction failed; document contributes no sections");
                return Vec::new();
            }
        };

        let mut sections = Vec::new();
        for (idx, page) in pages.iter().enumerate() {
            let Some(text) = page else { continue };
            if text.trim().chars().count() <= self.min_page_chars {
                continue;
            }

            let page_number = (idx + 1) as u32;
            let segmentation = self.segmenter.segment(text, page_number);
            tracing::debug!(
                document = %name,
                page = page_number,
                sections = segmentation.sections.len(),
                strategy = ?segmentation.strategy,
                "Segmented page"
            );
            sections.extend(
                segmentation
                    .sections
                    .into_iter()
                    .map(|section| section.with_document(name.clone())),
            );
        }
        sections
    }
}
