//! RIASEC scorer path: trait totals mapped to elective scores through the
//! fixed per-elective weight vectors (Holland Codes theory).
//!
//! Summation runs in canonical trait order so the result is bit-stable
//! across calls and platforms.

use ep_core::{ElectiveScores, ScoringRules, TraitScores};

/// Per-elective dot product of the trait weight vector and trait totals.
pub fn score_by_traits(traits: &TraitScores, rules: &ScoringRules) -> ElectiveScores {
    let mut scores = ElectiveScores::new();
    for (elective, weights) in rules.trait_weights.iter() {
        let mut score = 0.0;
        for (trait_code, weight) in weights.iter() {
            score += weight * traits.get(trait_code);
        }
        scores.set(elective, score);
    }
    scores
}
