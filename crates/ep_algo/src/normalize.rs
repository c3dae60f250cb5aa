//! Normalizer & tie detector.
//!
//! Each elective is rescaled against its **own** theoretical maximum (every
//! answer at 5), not a shared one, so a track with a structurally smaller
//! weight sum is not permanently disadvantaged. The ceiling is a second
//! pure invocation of the real aggregate → dual-path → blend stages on an
//! all-max sheet — never a hand-duplicated formula — so the two arithmetic
//! paths cannot drift apart when a rule set is tuned.
//!
//! Ceilings are pre-synergy; a synergy-boosted score can exceed its
//! ceiling, so normalized output clamps at 100. A top-vs-second gap under
//! the near-tie margin forces all three scores to exactly 100 and raises
//! the forced-tie signal.

use ep_core::{Answer, AnswerSheet, ElectiveScores, NormalizedScores, ScoringRules};

use crate::{aggregate_traits, blend, score_by_direct_mapping, score_by_traits};

/// Normalizer output: integer points per elective plus the tie signal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Normalization {
    pub scores: NormalizedScores,
    pub forced_tie: bool,
}

/// Per-elective theoretical maximum (all answers 5, blend included, synergy
/// excluded), computed through the same stage functions as a live run.
pub fn ceiling_scores(rules: &ScoringRules) -> ElectiveScores {
    let all_max = AnswerSheet::uniform(Answer::MAX);
    let traits = aggregate_traits(&all_max, rules);
    blend(&score_by_traits(&traits, rules), &score_by_direct_mapping(&all_max, rules), rules)
}

/// Rescale adjusted scores to 0..=100 against per-elective ceilings, then
/// force a tie when the top two land within the near-tie margin.
pub fn normalize(adjusted: &ElectiveScores, rules: &ScoringRules) -> Normalization {
    let ceilings = ceiling_scores(rules);
    let mut scores = NormalizedScores::new();
    for (elective, score) in adjusted.iter() {
        let points = (score / ceilings.get(elective) * 100.0).round().clamp(0.0, 100.0);
        scores.set(elective, points as u32);
    }

    let [top, second, _] = scores.sorted_desc();
    let forced_tie = top - second < rules.near_tie_margin;
    if forced_tie {
        scores = NormalizedScores::uniform(100);
    }
    Normalization { scores, forced_tie }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::Elective;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn reference_ceilings() {
        let ceilings = ceiling_scores(&ScoringRules::default());
        assert_close(ceilings.get(Elective::Mmgd), 439.25);
        assert_close(ceilings.get(Elective::Itba), 487.75);
        assert_close(ceilings.get(Elective::MobileDev), 534.8);
    }

    #[test]
    fn clear_winner_passes_through() {
        let rules = ScoringRules::default();
        let mut adjusted = ElectiveScores::new();
        // The Artistic-skew reference scenario, post-synergy.
        adjusted.set(Elective::Mmgd, 338.29);
        adjusted.set(Elective::Itba, 152.11);
        adjusted.set(Elective::MobileDev, 263.08);
        let normalized = normalize(&adjusted, &rules);
        assert!(!normalized.forced_tie);
        assert_eq!(normalized.scores.get(Elective::Mmgd), 77);
        assert_eq!(normalized.scores.get(Elective::Itba), 31);
        assert_eq!(normalized.scores.get(Elective::MobileDev), 49);
    }

    #[test]
    fn near_tie_forces_equal_hundreds() {
        let rules = ScoringRules::default();
        let ceilings = ceiling_scores(&rules);
        let mut adjusted = ElectiveScores::new();
        // 90 / 88 / 60 points: top gap 2 < margin 5.
        adjusted.set(Elective::Mmgd, ceilings.get(Elective::Mmgd) * 0.90);
        adjusted.set(Elective::Itba, ceilings.get(Elective::Itba) * 0.88);
        adjusted.set(Elective::MobileDev, ceilings.get(Elective::MobileDev) * 0.60);
        let normalized = normalize(&adjusted, &rules);
        assert!(normalized.forced_tie);
        assert_eq!(normalized.scores, NormalizedScores::uniform(100));
    }

    #[test]
    fn overshoot_clamps_to_hundred() {
        let rules = ScoringRules::default();
        let ceilings = ceiling_scores(&rules);
        let mut adjusted = ElectiveScores::new();
        // Synergy pushed one elective past its ceiling; another sits low
        // enough that no tie is forced.
        adjusted.set(Elective::Mmgd, ceilings.get(Elective::Mmgd) * 1.08);
        adjusted.set(Elective::Itba, ceilings.get(Elective::Itba) * 0.50);
        adjusted.set(Elective::MobileDev, ceilings.get(Elective::MobileDev) * 0.40);
        let normalized = normalize(&adjusted, &rules);
        assert!(!normalized.forced_tie);
        assert_eq!(normalized.scores.get(Elective::Mmgd), 100);
        assert_eq!(normalized.scores.get(Elective::Itba), 50);
    }
}
