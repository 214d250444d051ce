use std::sync::OnceLock;

use regex::Regex;

/// Whole-line heading patterns, applied to line-normalized page text.
/// Listed in tie-break order: when several match the same line, the last one names it.
const HEADING_PATTERNS: [&str; 4] = [
    // ALL CAPS line, 3..=50 letters and spaces
    r"(?m)^([A-Z][A-Z ]{2,49})$",
    // "3. Getting Around"
    r"(?m)^(\d+\. +[A-Z][^.!?\n]*)$",
    // Conventional section keywords
    r"(?mi)^((?:abstract|introduction|method|result|discussion|conclusion|reference|background|related work|experiment)s?)[. ]*$",
    // "IV. Results"
    r"(?m)^([IVX]+\. +[A-Z][^.!?\n]*)$",
];

fn heading_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        HEADING_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("heading pattern is a valid regex"))
            .collect()
    })
}

/// A detected section start within the line-normalized page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Byte offset of the heading line.
    pub offset: usize,
    /// Captured heading text only, not the whole matched line.
    pub title: String,
}

/// Pool the matches of every heading pattern and order them by offset.
pub fn find_boundaries(layout: &str) -> Vec<Boundary> {
    let mut pooled = Vec::new();
    for pattern in heading_patterns() {
        for caps in pattern.captures_iter(layout) {
            if let Some(heading) = caps.get(1) {
                pooled.push(Boundary {
                    offset: caps.get(0).map_or(heading.start(), |m| m.start()),
                    title: heading.as_str().trim().to_string(),
                });
            }
        }
    }

    // Stable: pattern order survives among equal offsets
    pooled.sort_by_key(|boundary| boundary.offset);

    let mut merged: Vec<Boundary> = Vec::with_capacity(pooled.len());
    for boundary in pooled {
        match merged.last_mut() {
            Some(last) if last.offset == boundary.offset => *last = boundary,
            _ => merged.push(boundary),
        }
    }
    merged
}
