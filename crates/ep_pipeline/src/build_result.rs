//! Assembly of the `ScoringResult` document.
//!
//! Wire field names match the stored recommendation documents (camelCase,
//! `"trait"` key on top-trait entries). The result is built fresh per run
//! and handed to the caller; the engine keeps nothing between calls.

use ep_core::{
    Elective, ElectiveScores, NormalizedScores, ScoringRules, TraitCode, TraitScores,
};
use serde::Serialize;

use crate::explain;

/// One entry of the top-trait ranking.
#[derive(Clone, Debug, Serialize)]
pub struct TopTrait {
    #[serde(rename = "trait")]
    pub trait_code: TraitCode,
    pub score: u32,
    pub name: String,
}

/// The engine's sole output document.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// `None` exactly when `requires_tiebreaker` is set.
    pub recommended: Option<Elective>,
    pub requires_tiebreaker: bool,
    pub trait_scores: TraitScores,
    /// Normalized points, including any tiebreak bonus.
    pub elective_scores: NormalizedScores,
    /// Synergy-adjusted raw scores, pre-normalization.
    pub raw_scores: ElectiveScores,
    /// Direct-path scores, for inspection of the second scorer.
    pub direct_scores: ElectiveScores,
    /// 0..=100; 0 in the needs-tiebreak state.
    pub confidence: u32,
    /// Normalized top-vs-second gap, post any tiebreak bonus.
    pub gap: u32,
    pub top_traits: Vec<TopTrait>,
    pub reasoning: Vec<String>,
}

/// Number of traits surfaced in the ranking.
const TOP_TRAIT_COUNT: usize = 3;

/// The needs-tiebreak outcome: no recommendation, zero confidence, and the
/// even-distribution sentence.
pub(crate) fn needs_tiebreak(
    traits: TraitScores,
    normalized: NormalizedScores,
    adjusted: ElectiveScores,
    direct: ElectiveScores,
) -> ScoringResult {
    ScoringResult {
        recommended: None,
        requires_tiebreaker: true,
        top_traits: explain::top_traits(&traits, TOP_TRAIT_COUNT),
        reasoning: vec![explain::even_distribution_sentence()],
        trait_scores: traits,
        elective_scores: normalized,
        raw_scores: adjusted,
        direct_scores: direct,
        confidence: 0,
        gap: 0,
    }
}

/// A resolved outcome: confidence from the score gap, ranked traits, and
/// elective-specific reasoning.
pub(crate) fn resolved(
    recommended: Elective,
    traits: TraitScores,
    normalized: NormalizedScores,
    adjusted: ElectiveScores,
    direct: ElectiveScores,
    rules: &ScoringRules,
) -> ScoringResult {
    let [top, second, _] = normalized.sorted_desc();
    let gap = top - second;
    let confidence = (rules.confidence_base + gap as f64 * rules.confidence_slope)
        .round()
        .clamp(0.0, 100.0) as u32;

    ScoringResult {
        recommended: Some(recommended),
        requires_tiebreaker: false,
        top_traits: explain::top_traits(&traits, TOP_TRAIT_COUNT),
        reasoning: explain::reasoning_for(recommended, &traits, &normalized),
        trait_scores: traits,
        elective_scores: normalized,
        raw_scores: adjusted,
        direct_scores: direct,
        confidence,
        gap,
    }
}
