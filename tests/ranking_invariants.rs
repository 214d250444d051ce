use persona_digest_core::document::{DocumentName, Persona, Section};
use persona_digest_core::selection::{
    BoostPolicy, NoBoost, Query, RankingStrategy, RelevanceRanker, TravelGuideBoost, VectorSpaceError,
};
use persona_digest_core::config::DigestConfig;

const JOB: &str = "Plan a budget trip for a group of college friends";

fn ranker() -> RelevanceRanker<TravelGuideBoost> {
    RelevanceRanker::default()
}

fn make_section(doc: &str, page: u32, title: &str, text: &str) -> Section {
    Section::new(page, title, text).with_document(DocumentName::new(doc))
}

fn travel_planner() -> Persona {
    Persona::new("Travel Planner", "", Vec::new())
}

fn numbered_sections(count: usize) -> Vec<Section> {
    const TOPICS: [&str; 5] = ["harbour", "vineyard", "cathedral", "market", "lighthouse"];
    (0..count)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            make_section(
                "guide.pdf",
                (i + 1) as u32,
                &format!("Part {i}"),
                &format!("Entry {i} describes the {topic} district, walking routes number{i} and seasonal opening hours."),
            )
        })
        .collect()
}

#[test]
fn empty_input_returns_empty_without_fitting() {
    let ranking = ranker().rank(Vec::new(), &travel_planner(), JOB);

    assert!(ranking.sections.is_empty());
    assert_eq!(ranking.strategy, RankingStrategy::NoCandidates);
}

#[test]
fn invariant_at_most_fifteen_with_dense_ranks() {
    let ranking = ranker().rank(numbered_sections(20), &travel_planner(), JOB);

    assert_eq!(ranking.strategy, RankingStrategy::VectorSpace);
    assert_eq!(ranking.sections.len(), 15);
    let ranks: Vec<u32> = ranking.sections.iter().filter_map(|s| s.importance_rank).collect();
    assert_eq!(ranks, (1..=15).collect::<Vec<u32>>());
}

#[test]
fn invariant_ranks_cover_every_section_when_fewer_than_limit() {
    let ranking = ranker().rank(numbered_sections(4), &travel_planner(), JOB);

    let ranks: Vec<u32> = ranking.sections.iter().filter_map(|s| s.importance_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn invariant_scores_descend_with_rank() {
    let ranking = ranker().rank(numbered_sections(12), &travel_planner(), JOB);

    let scores: Vec<f64> = ranking.sections.iter().filter_map(|s| s.relevance_score).collect();
    assert_eq!(scores.len(), 12);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn travel_section_outranks_unrelated_section() {
    let travel = make_section(
        "guide.pdf",
        1,
        "INTRODUCTION",
        "INTRODUCTION This guide covers budget restaurants and hotels for young travelers on a trip. It is affordable and fun.",
    );
    let ledger = make_section(
        "ledger.pdf",
        1,
        "LEDGER",
        "Quarterly ledger reconciliation requires matching every invoice against the bank statement before closing the books.",
    );

    // Unrelated section first: ordering must come from scores, not input order
    let ranking = ranker().rank(vec![ledger, travel], &travel_planner(), JOB);

    assert_eq!(ranking.sections[0].section_title, "INTRODUCTION");
    assert_eq!(ranking.sections[0].importance_rank, Some(1));
    assert_eq!(ranking.sections[1].section_title, "LEDGER");

    let top = ranking.sections[0].relevance_score.unwrap();
    let bottom = ranking.sections[1].relevance_score.unwrap();
    assert!(top > bottom);
    // Keyword boosts alone exceed half a point here
    assert!(top > 0.5, "unexpected score {top}");
    assert!(bottom.abs() < 1e-9, "unexpected score {bottom}");
}

#[test]
fn equal_scores_keep_input_order() {
    let text = "Harbour walks start at the fish market and follow the old sea wall toward the lighthouse at dusk.";
    let sections = vec![
        make_section("a.pdf", 1, "First", text),
        make_section("b.pdf", 1, "Second", text),
        make_section("c.pdf", 1, "Third", text),
    ];
    let ranker = RelevanceRanker::new(NoBoost, &DigestConfig::v0());

    let ranking = ranker.rank(sections, &Persona::default(), "harbour walks");

    let titles: Vec<&str> = ranking.sections.iter().map(|s| s.section_title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[test]
fn title_boost_lifts_matching_section() {
    let text = "Harbour walks start at the fish market and follow the old sea wall toward the lighthouse at dusk.";
    let sections = vec![
        make_section("a.pdf", 1, "Overview", text),
        make_section("a.pdf", 2, "Restaurant Tips", text),
    ];

    let ranking = ranker().rank(sections, &Persona::default(), "harbour walks");

    assert_eq!(ranking.sections[0].section_title, "Restaurant Tips");
    let gap = ranking.sections[0].relevance_score.unwrap() - ranking.sections[1].relevance_score.unwrap();
    assert!((gap - 0.2).abs() < 1e-9, "title boost should be exactly 0.2, got {gap}");
}

#[test]
fn degenerate_corpus_falls_back_to_sequential_scores() {
    let stop_words_only = "the and of to in it is was for on with as by at from this that these those";
    let sections = vec![
        make_section("a.pdf", 1, "One", stop_words_only),
        make_section("a.pdf", 2, "Two", stop_words_only),
        make_section("a.pdf", 3, "Three", stop_words_only),
    ];

    let ranking = ranker().rank(sections, &Persona::default(), "");

    assert_eq!(
        ranking.strategy,
        RankingStrategy::SequentialFallback(VectorSpaceError::EmptyVocabulary)
    );
    let titles: Vec<&str> = ranking.sections.iter().map(|s| s.section_title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
    let scores: Vec<f64> = ranking.sections.iter().filter_map(|s| s.relevance_score).collect();
    assert_eq!(scores, vec![1.0, 0.5, 1.0 / 3.0]);
    let ranks: Vec<u32> = ranking.sections.iter().filter_map(|s| s.importance_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn fully_pruned_vocabulary_falls_back_and_still_truncates() {
    let mut sections = vec![make_section("a.pdf", 1, "Only", "Lisbon trams")];
    let ranking = ranker().rank(sections.clone(), &Persona::default(), "Lisbon trams");
    assert_eq!(
        ranking.strategy,
        RankingStrategy::SequentialFallback(VectorSpaceError::NoTermsRemain)
    );

    sections = (0..18).map(|i| make_section("a.pdf", i + 1, "Same", "the of and")).collect();
    let ranking = ranker().rank(sections, &Persona::default(), "");
    assert_eq!(ranking.sections.len(), 15);
    assert_eq!(ranking.sections[14].importance_rank, Some(15));
}

#[test]
fn boost_monotonicity_per_travel_term() {
    let policy = TravelGuideBoost;
    let base_text = "Harbour walks start at the fish market and follow the old sea wall toward the lighthouse.";
    let with_term = format!("{base_text} Try the hotel.");

    let before = policy.boost("Overview", base_text);
    let after = policy.boost("Overview", &with_term);

    assert!(after - before >= 0.1 - 1e-9, "expected at least +0.10, got {}", after - before);
}

#[test]
fn boost_counts_distinct_terms_once() {
    let policy = TravelGuideBoost;
    let once = policy.boost("Notes", "A hotel near the station.");
    let twice = policy.boost("Notes", "A hotel near the station and another hotel by the sea.");
    assert!((once - twice).abs() < 1e-12);
    assert!((once - 0.1).abs() < 1e-12);
}

#[test]
fn boost_applies_regardless_of_persona() {
    let text = "Affordable student hostels sit next to the old city walls and the food market.";
    let sections = vec![make_section("a.pdf", 1, "Lodging", text)];
    let accountant = Persona::new("Accountant", "Tax law", vec!["audits".to_string()]);

    let ranking = ranker().rank(sections, &accountant, "Prepare quarterly filings");

    let score = ranking.sections[0].relevance_score.unwrap();
    let expected_boost = TravelGuideBoost.boost("Lodging", text);
    assert!(expected_boost > 0.0);
    assert!(score >= expected_boost - 1e-9);
}

#[test]
fn travel_persona_query_gains_domain_keywords() {
    let query = Query::from_persona(&travel_planner(), JOB);
    assert!(query.as_str().contains("itinerary activities attractions restaurants hotels"));
    assert!(query.as_str().ends_with(JOB));

    let planner_by_expertise = Persona::new("Consultant", "Event PLANNER", Vec::new());
    assert!(Query::from_persona(&planner_by_expertise, JOB).as_str().contains("itinerary"));

    let chef = Persona::new("Chef", "Seafood", vec!["menus".to_string(), "sourcing".to_string()]);
    let query = Query::from_persona(&chef, "Design a tasting menu");
    assert_eq!(query.as_str(), "Chef Seafood menus sourcing Design a tasting menu");
}
