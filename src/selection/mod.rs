pub mod query;
pub mod ranking;
pub mod stop_words;
pub mod vector_space;

use std::cmp::Ordering;

use crate::config::DigestConfig;
use crate::document::{Persona, Section};
pub use query::Query;
pub use ranking::{BoostPolicy, NoBoost, TravelGuideBoost};
pub use vector_space::{fit, VectorSpace, VectorSpaceConfig, VectorSpaceError};

/// How a ranking was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingStrategy {
	/// Nothing to rank; no vector space was fit.
	NoCandidates,
	VectorSpace,
	/// The vector space could not be fit; scores are `1/(i+1)` in input order.
	SequentialFallback(VectorSpaceError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
	pub sections: Vec<Section>,
	pub strategy: RankingStrategy,
}

pub struct RelevanceRanker<P> {
	policy: P,
	vector_space: VectorSpaceConfig,
	max_ranked: usize,
}

impl Default for RelevanceRanker<TravelGuideBoost> {
	fn default() -> Self {
		Self::new(TravelGuideBoost, &DigestConfig::v0())
	}
}

impl<P> RelevanceRanker<P>
where
	P: BoostPolicy,
{
	pub fn new(policy: P, config: &DigestConfig) -> Self {
		Self {
			policy,
			vector_space: config.vector_space.clone(),
			max_ranked: config.max_ranked_sections,
		}
	}

	/// Score, order and truncate `sections` for the given persona and job.
	pub fn rank(&self, mut sections: Vec<Section>, persona: &Persona, job_description: &str) -> Ranking {
		if sections.is_empty() {
			return Ranking {
				sections,
				strategy: RankingStrategy::NoCandidates,
			};
		}

		// 1. Shared space over every section plus the query, query last
		let query = Query::from_persona(persona, job_description);
		let corpus: Vec<&str> = sections
			.iter()
			.map(|section| section.text.as_str())
			.chain(std::iter::once(query.as_str()))
			.collect();

		let space = match vector_space::fit(&corpus, &self.vector_space) {
			Ok(space) => space,
			Err(reason) => {
				tracing::warn!(error = %reason, sections = sections.len(), "Vector space fit failed; using sequential scores");
				return self.sequential_fallback(sections, reason);
			}
		};

		// 2. Scoring Phase
		let query_idx = space.len() - 1;
		for (i, section) in sections.iter_mut().enumerate() {
			let base = space.cosine(query_idx, i);
			let boost = self.policy.boost(&section.section_title, &section.text);
			section.relevance_score = Some(base + boost);
		}

		// 3. Ordering Phase
		// Stable sort keeps input order among equal scores
		sections.sort_by(|a, b| {
			let a_score = a.relevance_score.unwrap_or_default();
			let b_score = b.relevance_score.unwrap_or_default();
			b_score.partial_cmp(&a_score).unwrap_or(Ordering::Equal)
		});

		debug_assert!(sections.windows(2).all(|w| {
			w[0].relevance_score.unwrap_or_default() >= w[1].relevance_score.unwrap_or_default()
		}));

		for (i, section) in sections.iter_mut().enumerate() {
			section.importance_rank = Some((i + 1) as u32);
		}
		sections.truncate(self.max_ranked);

		Ranking {
			sections,
			strategy: RankingStrategy::VectorSpace,
		}
	}

	fn sequential_fallback(&self, mut sections: Vec<Section>, reason: VectorSpaceError) -> Ranking {
		for (i, section) in sections.iter_mut().enumerate() {
			section.relevance_score = Some(1.0 / (i + 1) as f64);
			section.importance_rank = Some((i + 1) as u32);
		}
		sections.truncate(self.max_ranked);

		Ranking {
			sections,
			strategy: RankingStrategy::SequentialFallback(reason),
		}
	}
}
