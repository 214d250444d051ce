use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied descriptor of who the digest is for.
///
/// Fields absent from the input stay absent on output, and unknown fields
/// are carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_areas: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Persona {
    pub fn new(
        role: impl Into<String>,
        expertise: impl Into<String>,
        focus_areas: Vec<String>,
    ) -> Self {
        Persona {
            role: Some(role.into()),
            expertise: Some(expertise.into()),
            focus_areas: Some(focus_areas),
            extra: Map::new(),
        }
    }

    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }

    pub fn expertise(&self) -> &str {
        self.expertise.as_deref().unwrap_or("")
    }

    pub fn focus_areas(&self) -> &[String] {
        self.focus_areas.as_deref().unwrap_or(&[])
    }
}

/// The task statement, accepted either bare or wrapped as `{ "task": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobToBeDone {
    Text(String),
    Task { task: String },
}

impl JobToBeDone {
    pub fn resolve(&self) -> &str {
        match self {
            JobToBeDone::Text(text) => text,
            JobToBeDone::Task { task } => task,
        }
    }
}
