pub mod patterns;

use crate::config::DigestConfig;
use crate::document::Section;
pub use patterns::{find_boundaries, Boundary};

/// Title given to the span that precedes the first detected heading.
pub const LEADING_SECTION_TITLE: &str = "Introduction";

/// Which strategy produced a page's sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationStrategy {
    Boundaries,
    /// No heading boundaries, or none yielding a long enough span.
    ParagraphFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    pub sections: Vec<Section>,
    pub strategy: SegmentationStrategy,
}

/// Splits one page of plain text into titled sections.
#[derive(Debug, Clone)]
pub struct Segmenter {
    min_section_chars: usize,
    max_paragraph_sections: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(&DigestConfig::v0())
    }
}

impl Segmenter {
    pub fn new(config: &DigestConfig) -> Self {
        Self {
            min_section_chars: config.min_section_chars,
            max_paragraph_sections: config.max_paragraph_sections,
        }
    }

    pub fn segment(&self, page_text: &str, page_number: u32) -> Segmentation {
        let layout = normalize_lines(page_text);
        let boundaries = find_boundaries(&layout);

        if !boundaries.is_empty() {
            let sections = self.split_at_boundaries(&layout, &boundaries, page_number);
            if !sections.is_empty() {
                return Segmentation {
                    sections,
                    strategy: SegmentationStrategy::Boundaries,
                };
            }
        }

        Segmentation {
            sections: self.split_by_paragraphs(page_text, page_number),
            strategy: SegmentationStrategy::ParagraphFallback,
        }
    }

    /// Blank-line paragraphs of at least the minimum length, capped per page
    /// and titled "Section 1", "Section 2", ... in order.
    pub fn split_by_paragraphs(&self, page_text: &str, page_number: u32) -> Vec<Section> {
        let layout = normalize_lines(page_text);
        layout
            .split("\n\n")
            .map(collapse_whitespace)
            .filter(|paragraph| paragraph.chars().count() >= self.min_section_chars)
            .take(self.max_paragraph_sections)
            .enumerate()
            .map(|(i, paragraph)| Section::new(page_number, format!("Section {}", i + 1), paragraph))
            .collect()
    }

    fn split_at_boundaries(
        &self,
        layout: &str,
        boundaries: &[Boundary],
        page_number: u32,
    ) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut title = LEADING_SECTION_TITLE.to_string();
        let mut start = 0;

        for boundary in boundaries {
            if start < boundary.offset {
                self.push_span(&mut sections, &layout[start..boundary.offset], &title, page_number);
            }
            title = boundary.title.clone();
            start = boundary.offset;
        }
        self.push_span(&mut sections, &layout[start..], &title, page_number);

        sections
    }

    fn push_span(&self, sections: &mut Vec<Section>, span: &str, title: &str, page_number: u32) {
        let text = collapse_whitespace(span);
        if text.chars().count() >= self.min_section_chars {
            sections.push(Section::new(page_number, title, text));
        }
    }
}

/// Collapse every whitespace run to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace within each line while keeping line breaks,
/// so headings stay on their own lines and blank lines still separate paragraphs.
pub fn normalize_lines(text: &str) -> String {
    let lines: Vec<String> = text.lines().map(collapse_whitespace).collect();
    lines.join("\n").trim_matches('\n').to_string()
}
