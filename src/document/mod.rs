pub mod document;
pub mod persona;

pub use crate::types::identifiers::{DocumentName, DocumentNameError};
pub use document::{RefinedSection, Section};
pub use persona::{JobToBeDone, Persona};
