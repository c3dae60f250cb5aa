//! Synergy adjustment: bonus points for trait pairs that jointly clear a
//! threshold, modeling compound predictors (e.g. Artistic + Realistic for
//! game development).
//!
//! For each rule, `avg = mean(traits[t1], traits[t2])`. Strictly above the
//! threshold the bonus ramps linearly, reaching its full value at the
//! ceiling: `bonus × min(1, avg / ceiling)`. Never exceeds `bonus`.

use ep_core::{ElectiveScores, ScoringRules, TraitScores};

/// Return a copy of `blended` with per-elective synergy bonuses applied.
pub fn apply_synergy(
    blended: &ElectiveScores,
    traits: &TraitScores,
    rules: &ScoringRules,
) -> ElectiveScores {
    let mut adjusted = *blended;
    for (elective, elective_rules) in rules.synergies.iter() {
        for rule in elective_rules {
            let (t1, t2) = rule.pair;
            let avg = (traits.get(t1) + traits.get(t2)) / 2.0;
            if avg > rules.synergy_threshold {
                let strength = (avg / rules.synergy_ceiling).min(1.0);
                adjusted.add(elective, rule.bonus * strength);
            }
        }
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::{Elective, TraitCode};

    fn flat_hundreds() -> ElectiveScores {
        let mut scores = ElectiveScores::new();
        for e in Elective::ALL {
            scores.set(e, 100.0);
        }
        scores
    }

    #[test]
    fn threshold_is_strict() {
        let rules = ScoringRules::default();
        let mut traits = TraitScores::new();
        // (A, R) averages exactly 15: no bonus. (A, A) averages 20: ramped.
        traits.add(TraitCode::Artistic, 20.0);
        traits.add(TraitCode::Realistic, 10.0);
        let adjusted = apply_synergy(&flat_hundreds(), &traits, &rules);
        let expected_mmgd = 100.0 + 10.0 * (20.0 / 25.0);
        assert!((adjusted.get(Elective::Mmgd) - expected_mmgd).abs() < 1e-9);
    }

    #[test]
    fn bonus_caps_at_full_value() {
        let rules = ScoringRules::default();
        let mut traits = TraitScores::new();
        traits.add(TraitCode::Artistic, 40.0);
        traits.add(TraitCode::Realistic, 40.0);
        let adjusted = apply_synergy(&flat_hundreds(), &traits, &rules);
        // (A,R) 15 full + (A,A) 10 full, never more.
        assert!((adjusted.get(Elective::Mmgd) - 125.0).abs() < 1e-9);
    }

    #[test]
    fn low_traits_change_nothing() {
        let rules = ScoringRules::default();
        let adjusted = apply_synergy(&flat_hundreds(), &TraitScores::new(), &rules);
        assert_eq!(adjusted, flat_hundreds());
    }
}
