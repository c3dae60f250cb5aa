//! Trait aggregation: 21 weighted answers reduced to 6 trait totals.
//!
//! For the question at each sheet position, `answer × importance(id)` is
//! added to the total of the trait that question loads on. All six trait
//! keys exist (at 0) before accumulation, so traits with no high answers
//! still report a total.

use ep_core::{AnswerSheet, ScoringRules, TraitScores};

/// Reduce a complete answer sheet to per-trait totals.
pub fn aggregate_traits(sheet: &AnswerSheet, rules: &ScoringRules) -> TraitScores {
    let mut traits = TraitScores::new();
    for (index, question) in rules.questions.iter().enumerate() {
        let answer = sheet.get(index).value() as f64;
        traits.add(question.trait_code, answer * rules.importance_of(question.id));
    }
    traits
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::{Answer, TraitCode};

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn neutral_sheet_totals() {
        let rules = ScoringRules::default();
        let sheet = AnswerSheet::uniform(Answer::NEUTRAL);
        let traits = aggregate_traits(&sheet, &rules);
        // Hand-checked against the reference tables (all answers = 3).
        assert_close(traits.get(TraitCode::Realistic), 15.9);
        assert_close(traits.get(TraitCode::Investigative), 18.9);
        assert_close(traits.get(TraitCode::Artistic), 28.2);
        assert_close(traits.get(TraitCode::Social), 3.0);
        assert_close(traits.get(TraitCode::Enterprising), 7.5);
        assert_close(traits.get(TraitCode::Conventional), 6.9);
    }

    #[test]
    fn max_sheet_totals() {
        let rules = ScoringRules::default();
        let traits = aggregate_traits(&AnswerSheet::uniform(Answer::MAX), &rules);
        assert_close(traits.get(TraitCode::Artistic), 47.0);
        assert_close(traits.get(TraitCode::Realistic), 26.5);
        assert_close(traits.get(TraitCode::Social), 5.0);
    }

    #[test]
    fn totals_are_non_negative() {
        let rules = ScoringRules::default();
        let traits = aggregate_traits(&AnswerSheet::uniform(Answer::MIN), &rules);
        assert!(traits.iter().all(|(_, total)| total >= 0.0));
    }
}
