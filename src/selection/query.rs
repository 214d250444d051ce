use crate::document::Persona;

/// Extra expertise appended for travel-planning personas.
pub const TRAVEL_QUERY_KEYWORDS: &str =
    "itinerary activities attractions restaurants hotels transportation budget schedule";

/// Ranking query synthesized from a persona and a job description.
/// Lives for one ranking call only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
}

impl Query {
    /// `role expertise focus_areas... job`
    ///
    /// A role or expertise mentioning "travel" or "planner" (any case) gets the
    /// travel keyword set appended to its expertise first.
    pub fn from_persona(persona: &Persona, job_description: &str) -> Self {
        let role = persona.role();
        let mut expertise = persona.expertise().to_string();

        if is_travel_persona(role, &expertise) {
            expertise.push(' ');
            expertise.push_str(TRAVEL_QUERY_KEYWORDS);
        }

        let focus = persona.focus_areas().join(" ");
        let text = format!("{role} {expertise} {focus} {job_description}");

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn is_travel_persona(role: &str, expertise: &str) -> bool {
    [role, expertise].iter().any(|field| {
        let lowered = field.to_lowercase();
        lowered.contains("travel") || lowered.contains("planner")
    })
}
