//! Persona-aware section ranking for document collections.
//!
//! `persona-digest-core` splits documents into titled sections, ranks every
//! section against a persona and a job description in a TF-IDF space fit fresh
//! for each request, and distills the top sections into short excerpts.
//! Ordering is deterministic: identical inputs always rank identically.

pub mod config;
pub mod document;
pub mod extraction;
pub mod logging;
pub mod pipeline;
pub mod refinement;
pub mod segmentation;
pub mod selection;
pub mod types;
