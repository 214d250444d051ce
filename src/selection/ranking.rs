/// Additive, rule-based adjustment applied on top of the similarity score.
pub trait BoostPolicy {
    fn boost(&self, section_title: &str, section_text: &str) -> f64;
}

/// Travel-guide prior.
///
/// Applies to every section whatever the persona, so ranking output stays
/// identical to the established behaviour. Whether it should be gated on a
/// travel persona is an open question.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelGuideBoost;

impl TravelGuideBoost {
    pub const TRAVEL_TERMS: [&'static str; 12] = [
        "restaurant", "hotel", "attraction", "activity", "food", "culture", "history", "city",
        "place", "visit", "trip", "travel",
    ];
    pub const TRAVEL_TERM_BOOST: f64 = 0.1;

    pub const GROUP_TERMS: [&'static str; 7] =
        ["group", "friends", "college", "young", "budget", "affordable", "student"];
    pub const GROUP_TERM_BOOST: f64 = 0.05;

    pub const TITLE_TERMS: [&'static str; 6] =
        ["restaurant", "hotel", "activity", "attraction", "thing to do", "tip"];
    pub const TITLE_BOOST: f64 = 0.2;
}

impl BoostPolicy for TravelGuideBoost {
    fn boost(&self, section_title: &str, section_text: &str) -> f64 {
        let text = section_text.to_lowercase();
        let title = section_title.to_lowercase();

        let mut boost = 0.0;
        for term in Self::TRAVEL_TERMS {
            if text.contains(term) {
                boost += Self::TRAVEL_TERM_BOOST;
            }
        }
        for term in Self::GROUP_TERMS {
            if text.contains(term) {
                boost += Self::GROUP_TERM_BOOST;
            }
        }
        if Self::TITLE_TERMS.iter().any(|term| title.contains(term)) {
            boost += Self::TITLE_BOOST;
        }
        boost
    }
}

/// Similarity only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBoost;

impl BoostPolicy for NoBoost {
    fn boost(&self, _section_title: &str, _section_text: &str) -> f64 {
        0.0
    }
}
