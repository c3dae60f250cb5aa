//! Tie resolution: tiebreak bonus application and residual-tie settlement.
//!
//! With a tiebreak choice and more than one elective at the top, the chosen
//! track gains the flat bonus and the top set is recomputed. Should more
//! than one elective still share the maximum, the injected [`TieBreaker`]
//! settles it: deterministic canonical order, or a uniform pick from a
//! seeded RNG. No OS entropy anywhere; a given seed replays identically.

use ep_core::{Elective, NormalizedScores, ScoringRules, TieRng};

/// Settlement source for a residual multi-way tie.
#[derive(Debug)]
pub enum TieBreaker {
    /// First tied elective in canonical declaration order.
    Deterministic,
    /// Uniform pick among the tied set from a seeded RNG.
    Random(TieRng),
}

impl TieBreaker {
    /// Convenience constructor for the seeded uniform policy.
    pub fn random_seeded(seed: u64) -> Self {
        TieBreaker::Random(TieRng::from_seed_u64(seed))
    }

    fn settle(&mut self, tied: &[Elective]) -> Elective {
        match self {
            TieBreaker::Deterministic => tied[0],
            TieBreaker::Random(rng) => {
                let index = rng.choose_index(tied.len()).expect("tied set is non-empty");
                tied[index]
            }
        }
    }
}

/// Apply the tiebreak bonus (when applicable) and return the winner.
/// `top` must be the current top set of `normalized`.
pub(crate) fn resolve(
    normalized: &mut NormalizedScores,
    mut top: Vec<Elective>,
    tie_break: Option<Elective>,
    rules: &ScoringRules,
    ties: &mut TieBreaker,
) -> Elective {
    if top.len() > 1 {
        if let Some(choice) = tie_break {
            normalized.add(choice, rules.tiebreak_bonus);
            top = normalized.top_set();
        }
    }
    if top.len() == 1 {
        top[0]
    } else {
        ties.settle(&top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_lifts_the_chosen_track() {
        let rules = ScoringRules::default();
        let mut normalized = NormalizedScores::uniform(100);
        let top = normalized.top_set();
        let winner = resolve(
            &mut normalized,
            top,
            Some(Elective::Itba),
            &rules,
            &mut TieBreaker::Deterministic,
        );
        assert_eq!(winner, Elective::Itba);
        assert_eq!(normalized.get(Elective::Itba), 105);
        assert_eq!(normalized.get(Elective::Mmgd), 100);
    }

    #[test]
    fn bonus_applies_at_any_tied_level() {
        let rules = ScoringRules::default();
        let mut normalized = NormalizedScores::uniform(80);
        let top = normalized.top_set();
        let winner = resolve(
            &mut normalized,
            top,
            Some(Elective::Itba),
            &rules,
            &mut TieBreaker::Deterministic,
        );
        assert_eq!(winner, Elective::Itba);
        assert_eq!(normalized.sorted_desc(), [85, 80, 80]);
    }

    #[test]
    fn unique_top_ignores_the_choice() {
        let rules = ScoringRules::default();
        let mut normalized = NormalizedScores::uniform(60);
        normalized.set(Elective::MobileDev, 80);
        let top = normalized.top_set();
        let winner = resolve(
            &mut normalized,
            top,
            Some(Elective::Itba),
            &rules,
            &mut TieBreaker::Deterministic,
        );
        // No bonus when the top set was already a single elective.
        assert_eq!(winner, Elective::MobileDev);
        assert_eq!(normalized.get(Elective::Itba), 60);
    }

    #[test]
    fn residual_tie_settles_deterministically() {
        let rules = ScoringRules::default();
        // Choice outside the tied pair leaves the pair tied.
        let mut normalized = NormalizedScores::uniform(100);
        normalized.set(Elective::Itba, 90);
        let top = normalized.top_set();
        let winner =
            resolve(&mut normalized, top, None, &rules, &mut TieBreaker::Deterministic);
        assert_eq!(winner, Elective::Mmgd);
    }

    #[test]
    fn residual_tie_random_is_seed_stable() {
        let rules = ScoringRules::default();
        let pick = |seed: u64| {
            let mut normalized = NormalizedScores::uniform(100);
            let top = normalized.top_set();
            resolve(&mut normalized, top, None, &rules, &mut TieBreaker::random_seeded(seed))
        };
        for seed in [0u64, 1, 42, u64::MAX] {
            assert_eq!(pick(seed), pick(seed));
        }
    }
}
