//! ep_pipeline — one scoring run, end to end.
//!
//! Composes the `ep_algo` stages into the engine's sole external contract:
//!
//! ```text
//! score_survey(answers, rules, tie_break?, ties) -> ScoringResult
//! ```
//!
//! The run is a pure function of its arguments: rules are read-only, every
//! intermediate map is rebuilt per call, and the only non-deterministic
//! branch (a residual tie after the tiebreak bonus) draws from the
//! caller-injected [`TieBreaker`]. A needs-tiebreak outcome is normal
//! control flow, not an error: `recommended` is `None` exactly when
//! `requires_tiebreaker` is set, and the caller re-invokes with the
//! student's chosen track.

#![forbid(unsafe_code)]

use ep_algo::{
    aggregate_traits, apply_synergy, blend, normalize, score_by_direct_mapping, score_by_traits,
};
use ep_core::{AnswerSheet, Elective, ScoringRules};

pub mod build_result;
pub mod combined;
pub mod explain;
pub mod resolve_ties;

pub use build_result::{ScoringResult, TopTrait};
pub use combined::{combine_with_activities, CombinedRecommendation};
pub use resolve_ties::TieBreaker;

/// Score a complete survey, optionally resolving a previously reported tie
/// with the student's `tie_break` choice.
pub fn score_survey(
    sheet: &AnswerSheet,
    rules: &ScoringRules,
    tie_break: Option<Elective>,
    ties: &mut TieBreaker,
) -> ScoringResult {
    let traits = aggregate_traits(sheet, rules);
    let riasec = score_by_traits(&traits, rules);
    let direct = score_by_direct_mapping(sheet, rules);
    let adjusted = apply_synergy(&blend(&riasec, &direct, rules), &traits, rules);
    let normalization = normalize(&adjusted, rules);
    let mut normalized = normalization.scores;

    // A three-way tie with no choice on the table is the tiebreaker state;
    // everything else resolves to a single recommendation.
    let top = normalized.top_set();
    if top.len() == Elective::ALL.len() && tie_break.is_none() {
        return build_result::needs_tiebreak(traits, normalized, adjusted, direct);
    }

    let recommended = resolve_ties::resolve(&mut normalized, top, tie_break, rules, ties);
    build_result::resolved(recommended, traits, normalized, adjusted, direct, rules)
}
