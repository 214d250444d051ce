pub mod digest_bundle;
pub mod identifiers;

pub use digest_bundle::{
    processing_timestamp, round_seconds, DigestMetadata, DigestResult, ExtractedSection,
    OutputError,
};
pub use identifiers::{DocumentName, DocumentNameError};
